//! Field-by-field projection over a widget's default prop tree.

use contracts::mapping::{FieldMapping, WidgetMappingConfig, WidgetType};
use serde_json::Value;

use crate::defaults::DefaultPropsRegistry;
use crate::path::set_by_path;
use crate::transform::TransformedReport;

/// Apply the configured field mappings on top of the widget's default
/// props. A mapped cell that resolves to nothing leaves the default in
/// place, so a stale mapping degrades to preview data instead of a
/// hole in the widget.
pub fn simple_props(
    widget: WidgetType,
    config: &WidgetMappingConfig,
    report: &TransformedReport,
    defaults: &DefaultPropsRegistry,
) -> Value {
    let mut props = defaults.base(widget);

    for mapping in config.fields.values() {
        match mapping {
            FieldMapping::Manual {
                field_path,
                manual_value,
            } => {
                props = set_by_path(props, field_path, manual_value.clone());
            }
            FieldMapping::Mapped {
                field_path,
                mapped_config,
            } => {
                let cell = report.cell(
                    &mapped_config.cha_field,
                    &mapped_config.cha_value,
                    &mapped_config.kf_field,
                );
                match cell {
                    Some(cell) => {
                        props = set_by_path(props, field_path, cell.clone().into());
                    }
                    None => {
                        tracing::debug!(
                            report = %config.report_name,
                            path = %field_path,
                            cha = %mapped_config.cha_value,
                            kf = %mapped_config.kf_field,
                            "mapped cell not found, keeping default"
                        );
                    }
                }
            }
        }
    }

    props
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projectors::tests::sample_report;
    use contracts::mapping::{MappedField, MappingSpec};
    use serde_json::json;
    use std::collections::HashMap;

    fn config(fields: HashMap<String, FieldMapping>) -> WidgetMappingConfig {
        WidgetMappingConfig {
            report_name: "ZSCM_CMD_REPORT".to_string(),
            spec: MappingSpec::Simple,
            fields,
        }
    }

    #[test]
    fn manual_and_mapped_values_land_at_their_paths() {
        let mut fields = HashMap::new();
        fields.insert(
            "name".to_string(),
            FieldMapping::Manual {
                field_path: "name".to_string(),
                manual_value: json!("OCTG Orders"),
            },
        );
        fields.insert(
            "value".to_string(),
            FieldMapping::Mapped {
                field_path: "value".to_string(),
                mapped_config: MappedField {
                    cha_field: "ZSCMCMD".to_string(),
                    cha_value: "OCTG".to_string(),
                    kf_field: "VALUE001".to_string(),
                },
            },
        );

        let report = sample_report();
        let props = simple_props(
            WidgetType::OneMetric,
            &config(fields),
            &report,
            &DefaultPropsRegistry::sample(),
        );
        assert_eq!(props["name"], "OCTG Orders");
        assert_eq!(props["value"], json!(100.0));
    }

    #[test]
    fn unresolved_mapping_keeps_the_default() {
        let mut fields = HashMap::new();
        fields.insert(
            "value".to_string(),
            FieldMapping::Mapped {
                field_path: "value".to_string(),
                mapped_config: MappedField {
                    cha_field: "ZSCMCMD".to_string(),
                    cha_value: "Casing".to_string(),
                    kf_field: "VALUE001".to_string(),
                },
            },
        );

        let report = sample_report();
        let props = simple_props(
            WidgetType::OneMetric,
            &config(fields),
            &report,
            &DefaultPropsRegistry::sample(),
        );
        assert_eq!(props["value"], 45);
    }

    #[test]
    fn unknown_widget_starts_from_an_empty_tree() {
        let mut fields = HashMap::new();
        fields.insert(
            "data.0.label".to_string(),
            FieldMapping::Manual {
                field_path: "data.0.label".to_string(),
                manual_value: json!("Q1"),
            },
        );

        let report = sample_report();
        let props = simple_props(
            WidgetType::TwoMetricsPiechart,
            &config(fields),
            &report,
            &DefaultPropsRegistry::new(),
        );
        assert_eq!(props["data"][0]["label"], "Q1");
    }
}
