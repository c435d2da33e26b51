//! Bar chart projectors: plain bars and stacked series.

use contracts::widgets::{
    BarChartProps, BarPoint, SeriesDescriptor, StackedBarChartProps, StackedPoint,
};

use super::ProjectionOptions;
use crate::format::{calculate_variance, format_currency_plain};
use crate::palette::{color_at, BAR_COLORS, STACKED_COLORS};
use crate::transform::TransformedReport;

/// One bar per category with a first-to-last percentage change.
pub fn bar_chart(
    report: &TransformedReport,
    cha_field: &str,
    kf_field: &str,
    opts: &ProjectionOptions,
) -> BarChartProps {
    let Some(structure) = report.pivot(cha_field) else {
        return BarChartProps::no_data();
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
            fill: color_at(&BAR_COLORS, i),
        })
        .collect();

    let variance = match (data.first(), data.last()) {
        (Some(first), Some(last)) => calculate_variance(last.value, first.value),
        _ => "+0.00%".to_string(),
    };

    BarChartProps {
        data,
        title: report.label_or(kf_field),
        variance,
    }
}

/// Stacked bars: one stack segment per key figure, keyed on the wire
/// by the key figure's label.
pub fn stacked_bar_chart(
    report: &TransformedReport,
    cha_field: &str,
    kf_fields: &[String],
    opts: &ProjectionOptions,
) -> StackedBarChartProps {
    let Some(structure) = report.pivot(cha_field) else {
        return StackedBarChartProps::no_data();
    };

    let labels: Vec<String> = kf_fields.iter().map(|f| report.label_or(f)).collect();

    let data: Vec<StackedPoint> = structure
        .iter()
        .filter(|category| !opts.is_excluded(&category.value))
        .map(|category| StackedPoint {
            name: category.value.clone(),
            values: kf_fields
                .iter()
                .zip(&labels)
                .map(|(field, label)| {
                    let value = category
                        .values
                        .get(field)
                        .map(|v| v.to_number())
                        .unwrap_or(0.0);
                    (label.clone(), value)
                })
                .collect(),
        })
        .collect();

    let series = labels
        .iter()
        .enumerate()
        .map(|(i, label)| SeriesDescriptor {
            name: label.clone(),
            data_key: label.clone(),
            color: color_at(&STACKED_COLORS, i),
        })
        .collect();

    let total_value = structure
        .overall()
        .map(|overall| {
            let total: f64 = kf_fields
                .iter()
                .filter_map(|field| overall.get(field))
                .map(|v| v.to_number())
                .sum();
            format_currency_plain(total)
        })
        .unwrap_or_default();

    StackedBarChartProps {
        data,
        series,
        title: report.label_or(cha_field),
        total_value,
    }
}
