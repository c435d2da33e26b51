//! Line chart projectors: plain, metric-headline and dual-series.

use std::cmp::Ordering;

use chrono::NaiveDate;
use contracts::widgets::{
    DualLineChartProps, DualLinePoint, LineChartProps, LinePoint, MetricData, MetricLineBlock,
    MetricLineChartProps, MetricLinePoint, SeriesDescriptor,
};

use super::ProjectionOptions;
use crate::format::{format_currency_plain, format_value, ValueFormat};
use crate::palette::DUAL_LINE_COLORS;
use crate::transform::TransformedReport;

/// Single line series over one key figure.
///
/// Points keep first-seen row order unless `sorted` is set, in which
/// case labels sort as dates, then numerically, then lexicographically.
/// `limit` caps the emitted points (0 = unlimited).
pub fn line_chart(
    report: &TransformedReport,
    cha_field: &str,
    kf_field: &str,
    sorted: bool,
    limit: usize,
    opts: &ProjectionOptions,
) -> LineChartProps {
    let Some(structure) = report.pivot(cha_field) else {
        return LineChartProps::no_data();
    };

    let mut data: Vec<LinePoint> = structure
        .iter()
        .filter(|category| !opts.is_excluded(&category.value))
        .map(|category| LinePoint {
            name: category.value.clone(),
            value: category
                .values
                .get(kf_field)
                .map(|v| v.to_number())
                .unwrap_or(0.0),
        })
        .collect();

    if sorted {
        data.sort_by(|a, b| compare_labels(&a.name, &b.name));
    }
    if limit > 0 && data.len() > limit {
        data.truncate(limit);
    }

    let total = report
        .overall_value(cha_field, kf_field)
        .map(|v| v.to_number())
        .unwrap_or(0.0);

    LineChartProps {
        data,
        title: report.label_or(kf_field),
        total_value: format_currency_plain(total),
    }
}

/// Line series plus the headline metric block read from the aggregate
/// row. Categories with an empty key figure are skipped here (the
/// plain line chart defaults them to 0 instead).
pub fn metric_line_chart(
    report: &TransformedReport,
    cha_field: &str,
    kf_field: &str,
    opts: &ProjectionOptions,
) -> MetricLineChartProps {
    let Some(structure) = report.pivot(cha_field) else {
        return MetricLineChartProps::no_data();
    };

    let unit = report
        .metadata
        .get(kf_field)
        .map(|h| h.kind.as_wire())
        .filter(|w| !w.is_empty())
        .unwrap_or("%")
        .to_string();

    let chart_data: Vec<MetricLinePoint> = structure
        .iter()
        .filter(|category| !opts.is_excluded(&category.value))
        .filter_map(|category| {
            let value = category.values.get(kf_field)?;
            if value.is_empty() {
                return None;
            }
            Some(MetricLinePoint {
                date: category.value.clone(),
                value: value.to_number(),
                unit: unit.clone(),
            })
        })
        .collect();

    let overall = report.overall_value(cha_field, kf_field);
    let label = report.label_or(kf_field);

    MetricLineChartProps {
        data: MetricLineBlock {
            chart_data,
            chart_yaxis: kf_field.to_string(),
            metric_data: MetricData {
                metric_value: format_value(overall, ValueFormat::Currency),
                metric_variance: "+0.00%".to_string(),
                metric_label: label.clone(),
            },
            widget_name: label,
        },
    }
}

/// Two key figures as two lines over the same axis.
pub fn dual_line_chart(
    report: &TransformedReport,
    cha_field: &str,
    kf_fields: &[String; 2],
    opts: &ProjectionOptions,
) -> DualLineChartProps {
    let Some(structure) = report.pivot(cha_field) else {
        return DualLineChartProps::no_data();
    };

    let data: Vec<DualLinePoint> = structure
        .iter()
        .filter(|category| !opts.is_excluded(&category.value))
        .map(|category| DualLinePoint {
            name: category.value.clone(),
            line1: category
                .values
                .get(&kf_fields[0])
                .map(|v| v.to_number())
                .unwrap_or(0.0),
            line2: category
                .values
                .get(&kf_fields[1])
                .map(|v| v.to_number())
                .unwrap_or(0.0),
        })
        .collect();

    let labels = [report.label_or(&kf_fields[0]), report.label_or(&kf_fields[1])];
    let series = vec![
        SeriesDescriptor {
            name: labels[0].clone(),
            data_key: "line1".to_string(),
            color: DUAL_LINE_COLORS[0].to_string(),
        },
        SeriesDescriptor {
            name: labels[1].clone(),
            data_key: "line2".to_string(),
            color: DUAL_LINE_COLORS[1].to_string(),
        },
    ];

    DualLineChartProps {
        data,
        series,
        title: format!("{} vs {}", labels[0], labels[1]),
    }
}

/// Pairwise label ordering: dates first, then numbers, then text.
fn compare_labels(a: &str, b: &str) -> Ordering {
    if let (Some(da), Some(db)) = (parse_label_date(a), parse_label_date(b)) {
        return da.cmp(&db);
    }
    if let (Ok(na), Ok(nb)) = (a.trim().parse::<f64>(), b.trim().parse::<f64>()) {
        return na.partial_cmp(&nb).unwrap_or(Ordering::Equal);
    }
    a.cmp(b)
}

fn parse_label_date(label: &str) -> Option<NaiveDate> {
    let label = label.trim();
    for format in ["%Y-%m-%d", "%d-%m-%Y", "%d-%b-%Y", "%d.%m.%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(label, format) {
            return Some(date);
        }
    }
    // Month-year labels like "DEC 2022" pin to the first of the month.
    NaiveDate::parse_from_str(&format!("01 {}", label), "%d %b %Y").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projectors::tests::{report_with_rows, sample_report};
    use contracts::report::{CellValue, OVERALL_RESULT};

    #[test]
    fn line_points_follow_row_order_and_exclude_overall() {
        let report = sample_report();
        let props = line_chart(&report, "ZSCMCMD", "VALUE001", false, 0, &Default::default());
        let names: Vec<&str> = props.data.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["OCTG", "Mud"]);
        assert_eq!(props.data[0].value, 100.0);
        assert_eq!(props.data[1].value, 200.0);
        assert_eq!(props.total_value, "$300");
        assert_eq!(props.title, "Order Value");
    }

    #[test]
    fn explicit_exclude_list_can_restore_the_aggregate_row() {
        let report = sample_report();
        let opts = ProjectionOptions::with_exclude(vec![]);
        let props = line_chart(&report, "ZSCMCMD", "VALUE001", false, 0, &opts);
        assert!(props.data.iter().any(|p| p.name == OVERALL_RESULT));
    }

    #[test]
    fn missing_pivot_field_degrades_to_no_data() {
        let report = sample_report();
        let props = line_chart(&report, "CALMONTH", "VALUE001", false, 0, &Default::default());
        assert!(props.data.is_empty());
        assert_eq!(props.title, "No Data");
        assert_eq!(props.total_value, "$0");
    }

    #[test]
    fn sorted_variant_orders_month_labels_chronologically() {
        let report = report_with_rows(
            "CALMONTH",
            &[
                ("MAR 2024", 30.0),
                ("JAN 2024", 10.0),
                ("FEB 2024", 20.0),
            ],
        );
        let props = line_chart(&report, "CALMONTH", "VALUE001", true, 0, &Default::default());
        let names: Vec<&str> = props.data.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["JAN 2024", "FEB 2024", "MAR 2024"]);
    }

    #[test]
    fn sorted_variant_falls_back_to_numeric_then_lexicographic() {
        let report = report_with_rows("WEEK", &[("10", 1.0), ("2", 2.0), ("1", 3.0)]);
        let props = line_chart(&report, "WEEK", "VALUE001", true, 0, &Default::default());
        let names: Vec<&str> = props.data.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["1", "2", "10"]);

        let report = report_with_rows("REGION", &[("West", 1.0), ("East", 2.0)]);
        let props = line_chart(&report, "REGION", "VALUE001", true, 0, &Default::default());
        let names: Vec<&str> = props.data.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["East", "West"]);
    }

    #[test]
    fn limit_caps_emitted_points() {
        let report = report_with_rows("WEEK", &[("1", 1.0), ("2", 2.0), ("3", 3.0)]);
        let props = line_chart(&report, "WEEK", "VALUE001", false, 2, &Default::default());
        assert_eq!(props.data.len(), 2);
    }

    #[test]
    fn metric_line_skips_empty_values_and_reads_overall_headline() {
        let mut report = sample_report();
        report
            .structure
            .insert("Casing".to_string(), {
                let mut fields = std::collections::HashMap::new();
                fields.insert("VALUE001".to_string(), CellValue::Text("".into()));
                fields
            });
        let props = metric_line_chart(&report, "ZSCMCMD", "VALUE001", &Default::default());
        let dates: Vec<&str> = props.data.chart_data.iter().map(|p| p.date.as_str()).collect();
        assert_eq!(dates, vec!["OCTG", "Mud"]);
        assert_eq!(props.data.chart_yaxis, "VALUE001");
        assert_eq!(props.data.metric_data.metric_value, "$300.00");
        assert_eq!(props.data.metric_data.metric_label, "Order Value");
        assert_eq!(props.data.chart_data[0].unit, "KF");
    }

    #[test]
    fn dual_line_defaults_missing_series_to_zero() {
        let report = sample_report();
        let props = dual_line_chart(
            &report,
            "ZSCMCMD",
            &["VALUE001".to_string(), "VALUE002".to_string()],
            &Default::default(),
        );
        assert_eq!(props.data.len(), 2);
        assert_eq!(props.data[0].line1, 100.0);
        assert_eq!(props.data[0].line2, 10.0);
        assert_eq!(props.data[1].line2, 0.0);
        assert_eq!(props.series[0].data_key, "line1");
        assert_eq!(props.series[0].color, "#5899DA");
        assert_eq!(props.title, "Order Value vs Contract Value");
    }
}
