//! Multi-series comparison chart with per-series total cards.

use contracts::mapping::{SeriesAxis, WidgetMappingConfig};
use contracts::widgets::{ComparisonChartProps, ComparisonPoint, SeriesValue};

use super::ProjectionOptions;
use crate::format::{format_value, ValueFormat};
use crate::transform::TransformedReport;

/// Card text color; the series color itself lives on the chart lines.
const CARD_COLOR: &str = "#fff";

/// One point per category with a value per configured series, plus a
/// total card per series read from the aggregate row. Title, subtitle
/// and axis cap come from manual field overrides when present.
pub fn comparison_chart(
    report: &TransformedReport,
    cha_field: &str,
    series: &[SeriesAxis],
    config: &WidgetMappingConfig,
    opts: &ProjectionOptions,
) -> ComparisonChartProps {
    let Some(structure) = report.pivot(cha_field) else {
        return ComparisonChartProps::no_data();
    };

    let data: Vec<ComparisonPoint> = structure
        .iter()
        .filter(|category| !opts.is_excluded(&category.value))
        .map(|category| ComparisonPoint {
            period: category.value.clone(),
            values: series
                .iter()
                .map(|axis| {
                    let value = category
                        .values
                        .get(&axis.field)
                        .map(|v| v.to_number())
                        .unwrap_or(0.0);
                    (axis.field.clone(), value)
                })
                .collect(),
        })
        .collect();

    let cards = series
        .iter()
        .map(|axis| SeriesValue {
            name: axis.field.clone(),
            value: format_value(
                report.overall_value(cha_field, &axis.field),
                ValueFormat::Currency,
            ),
            color: CARD_COLOR.to_string(),
        })
        .collect();

    let manual_text = |name: &str, fallback: &str| {
        config
            .manual_field(name)
            .and_then(|v| v.as_str())
            .unwrap_or(fallback)
            .to_string()
    };

    ComparisonChartProps {
        data,
        series: cards,
        title: manual_text("title", "Chart Comparison"),
        subtitle: manual_text("subtitle", "Report Data"),
        max_value: config.manual_field("maxValue").cloned(),
    }
}
