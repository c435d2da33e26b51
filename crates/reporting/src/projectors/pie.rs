//! Pie chart projectors: share-of-total pie and pie with totals block.

use contracts::widgets::{BarPoint, PieChartProps, PieChartTotalProps, PieMetrics, PieSegment};

use super::ProjectionOptions;
use crate::format::{
    calculate_variance, format_currency, format_currency_plain, percentage_share,
};
use crate::palette::{color_at, PIE_COLORS, PIE_TOTAL_COLORS};
use crate::transform::TransformedReport;

/// Pie segments with each category's share of the non-excluded total.
pub fn pie_chart(
    report: &TransformedReport,
    cha_field: &str,
    kf_field: &str,
    opts: &ProjectionOptions,
) -> PieChartProps {
    let Some(structure) = report.pivot(cha_field) else {
        return PieChartProps::no_data();
    };

    let values: Vec<(String, f64)> = structure
        .iter()
        .filter(|category| !opts.is_excluded(&category.value))
        .map(|category| {
            let value = category
                .values
                .get(kf_field)
                .map(|v| v.to_number())
                .unwrap_or(0.0);
            (category.value.clone(), value)
        })
        .collect();

    let total: f64 = values.iter().map(|(_, v)| v).sum();
    let data = values
        .into_iter()
        .enumerate()
        .map(|(i, (label, value))| PieSegment {
            label,
            value,
            percentage: percentage_share(value, total),
            fill: color_at(&PIE_COLORS, i),
        })
        .collect();

    // Headline falls back to the segment sum when the report carries
    // no aggregate row.
    let headline = report
        .overall_value(cha_field, kf_field)
        .map(|v| v.to_number())
        .unwrap_or(total);

    PieChartProps {
        data,
        metrics: PieMetrics {
            amount: format_currency(headline),
            percentage: "100%".to_string(),
            label: report.label_or(kf_field),
        },
    }
}

/// Pie segments plus a totals block comparing the category sum against
/// the report's aggregate row.
pub fn pie_chart_total(
    report: &TransformedReport,
    cha_field: &str,
    kf_field: &str,
    opts: &ProjectionOptions,
) -> PieChartTotalProps {
    let Some(structure) = report.pivot(cha_field) else {
        return PieChartTotalProps::no_data();
    };

    let data: Vec<BarPoint> = structure
        .iter()
        .filter(|category| !opts.is_excluded(&category.value))
        .enumerate()
        .map(|(i, category)| BarPoint {
            name: category.value.clone(),
            value: category
                .values
                .get(kf_field)
                .map(|v| v.to_number())
                .unwrap_or(0.0),
            fill: color_at(&PIE_TOTAL_COLORS, i),
        })
        .collect();

    let sum: f64 = data.iter().map(|p| p.value).sum();
    let overall = report
        .overall_value(cha_field, kf_field)
        .map(|v| v.to_number())
        .unwrap_or(0.0);

    PieChartTotalProps {
        data,
        title: report.label_or(kf_field),
        total_value: format_currency_plain(sum),
        sub_value: format_currency_plain(overall),
        variance: calculate_variance(overall, sum),
    }
}
