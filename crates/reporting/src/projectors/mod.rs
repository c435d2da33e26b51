//! Projection of the pivoted report structure into widget-ready props.
//!
//! One entry point, [`project`], pattern-matches the mapping variant
//! and hands off to the family-specific projector. Projection never
//! fails: a missing pivot field or key figure degrades the widget to
//! its no-data shape.

mod bar;
mod comparison;
mod line;
mod pie;
mod quadrant;
mod simple;
mod table;

pub use bar::{bar_chart, stacked_bar_chart};
pub use comparison::comparison_chart;
pub use line::{dual_line_chart, line_chart, metric_line_chart};
pub use pie::{pie_chart, pie_chart_total};
pub use quadrant::quadrant_metrics;
pub use simple::simple_props;
pub use table::table_props;

use contracts::mapping::{MappingSpec, WidgetMappingConfig, WidgetType};
use contracts::report::OVERALL_RESULT;
use contracts::widgets::WidgetProps;

use crate::defaults::DefaultPropsRegistry;
use crate::transform::TransformedReport;

/// Per-call projection options
#[derive(Debug, Clone, Default)]
pub struct ProjectionOptions {
    /// Categories to drop from per-category series; `None` means the
    /// default of excluding only the "Overall Result" aggregate row
    pub exclude: Option<Vec<String>>,
}

impl ProjectionOptions {
    /// Override the default exclude list
    pub fn with_exclude(values: Vec<String>) -> Self {
        Self {
            exclude: Some(values),
        }
    }

    pub fn is_excluded(&self, value: &str) -> bool {
        match &self.exclude {
            Some(list) => list.iter().any(|v| v == value),
            None => value == OVERALL_RESULT,
        }
    }
}

/// Project one widget's mapping configuration against a report.
pub fn project(
    widget: WidgetType,
    config: &WidgetMappingConfig,
    report: &TransformedReport,
    defaults: &DefaultPropsRegistry,
    opts: &ProjectionOptions,
) -> WidgetProps {
    match &config.spec {
        MappingSpec::Simple => {
            WidgetProps::Simple(simple_props(widget, config, report, defaults))
        }
        MappingSpec::LineChart {
            cha_field,
            kf_field,
            sorted,
            limit,
        } => WidgetProps::Line(line_chart(report, cha_field, kf_field, *sorted, *limit, opts)),
        MappingSpec::MetricLineChart {
            cha_field,
            kf_field,
        } => WidgetProps::MetricLine(metric_line_chart(report, cha_field, kf_field, opts)),
        MappingSpec::DualLineChart {
            cha_field,
            kf_fields,
        } => WidgetProps::DualLine(dual_line_chart(report, cha_field, kf_fields, opts)),
        MappingSpec::PieChart {
            cha_field,
            kf_field,
        } => WidgetProps::Pie(pie_chart(report, cha_field, kf_field, opts)),
        MappingSpec::PieChartTotal {
            cha_field,
            kf_field,
        } => WidgetProps::PieTotal(pie_chart_total(report, cha_field, kf_field, opts)),
        MappingSpec::BarChart {
            cha_field,
            kf_field,
        } => WidgetProps::Bar(bar_chart(report, cha_field, kf_field, opts)),
        MappingSpec::StackedBarChart {
            cha_field,
            kf_fields,
        } => WidgetProps::StackedBar(stacked_bar_chart(report, cha_field, kf_fields, opts)),
        MappingSpec::ComparisonChart { cha_field, series } => {
            WidgetProps::Comparison(comparison_chart(report, cha_field, series, config, opts))
        }
        MappingSpec::Table {
            columns,
            total_column,
        } => WidgetProps::Table(table_props(report, columns, total_column.as_deref(), opts)),
        MappingSpec::Quadrant {
            cha_field,
            categories,
            kf_fields,
        } => WidgetProps::Quadrant(quadrant_metrics(report, cha_field, categories, kf_fields)),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::transform::{FormStructure, TransformedReport};
    use contracts::report::{CellValue, FieldKind, HeaderField};
    use std::collections::HashMap;

    fn header(kind: FieldKind, name: &str, label: &str) -> HeaderField {
        HeaderField {
            kind,
            field_name: name.to_string(),
            label: label.to_string(),
            axis_type: String::new(),
            display_style: String::new(),
        }
    }

    fn fields(pairs: &[(&str, CellValue)]) -> HashMap<String, CellValue> {
        pairs
            .iter()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect()
    }

    /// Commodity report with two categories and an aggregate row:
    /// OCTG (100 / 10), Mud (200, no VALUE002), Overall Result (300 / 30).
    pub(crate) fn sample_report() -> TransformedReport {
        let mut structure = FormStructure::new("ZSCMCMD");
        structure.insert(
            "OCTG".to_string(),
            fields(&[
                ("VALUE001", CellValue::Number(100.0)),
                ("VALUE002", CellValue::Number(10.0)),
            ]),
        );
        structure.insert(
            "Mud".to_string(),
            fields(&[("VALUE001", CellValue::Number(200.0))]),
        );
        structure.insert(
            OVERALL_RESULT.to_string(),
            fields(&[
                ("VALUE001", CellValue::Number(300.0)),
                ("VALUE002", CellValue::Number(30.0)),
            ]),
        );

        let metadata = [
            header(FieldKind::Cha, "ZSCMCMD", "Commodity"),
            header(FieldKind::Kf, "VALUE001", "Order Value"),
            header(FieldKind::Kf, "VALUE002", "Contract Value"),
        ]
        .into_iter()
        .map(|h| (h.field_name.clone(), h))
        .collect();

        TransformedReport {
            structure,
            metadata,
        }
    }

    /// Report pivoted on `cha_field` with one VALUE001 entry per label.
    pub(crate) fn report_with_rows(cha_field: &str, rows: &[(&str, f64)]) -> TransformedReport {
        let mut structure = FormStructure::new(cha_field);
        for (label, value) in rows {
            structure.insert(
                label.to_string(),
                fields(&[("VALUE001", CellValue::Number(*value))]),
            );
        }

        let metadata = [
            header(FieldKind::Cha, cha_field, ""),
            header(FieldKind::Kf, "VALUE001", "Value"),
        ]
        .into_iter()
        .map(|h| (h.field_name.clone(), h))
        .collect();

        TransformedReport {
            structure,
            metadata,
        }
    }

    #[test]
    fn default_options_exclude_only_the_aggregate_row() {
        let opts = ProjectionOptions::default();
        assert!(opts.is_excluded(OVERALL_RESULT));
        assert!(!opts.is_excluded("OCTG"));
    }

    #[test]
    fn explicit_exclude_list_overrides_the_default() {
        let opts = ProjectionOptions::with_exclude(vec!["OCTG".to_string()]);
        assert!(opts.is_excluded("OCTG"));
        assert!(!opts.is_excluded(OVERALL_RESULT));
    }

    #[test]
    fn dispatcher_routes_by_mapping_variant() {
        let report = sample_report();
        let config = WidgetMappingConfig {
            report_name: "ZSCM_CMD_REPORT".to_string(),
            spec: MappingSpec::LineChart {
                cha_field: "ZSCMCMD".to_string(),
                kf_field: "VALUE001".to_string(),
                sorted: false,
                limit: 0,
            },
            fields: HashMap::new(),
        };
        let props = project(
            WidgetType::OrdersLineChart,
            &config,
            &report,
            &DefaultPropsRegistry::new(),
            &ProjectionOptions::default(),
        );
        match props {
            WidgetProps::Line(line) => assert_eq!(line.data.len(), 2),
            other => panic!("expected line props, got {:?}", other),
        }
    }
}
