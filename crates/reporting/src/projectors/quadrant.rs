//! Quadrant projector: four positioned headline metrics.

use contracts::widgets::{QuadrantMetric, QuadrantPosition, QuadrantProps};

use crate::transform::TransformedReport;

/// One metric per configured category, filled in position order.
///
/// The output always has exactly four entries; slots past the
/// configured categories hold placeholders. Key figures pair with
/// slots by index and fall back to the first configured key figure.
pub fn quadrant_metrics(
    report: &TransformedReport,
    cha_field: &str,
    categories: &[String],
    kf_fields: &[String],
) -> QuadrantProps {
    let Some(structure) = report.pivot(cha_field) else {
        return QuadrantProps::no_data();
    };

    let metrics = QuadrantPosition::ORDER
        .iter()
        .enumerate()
        .map(|(i, position)| {
            let Some(category) = categories.get(i) else {
                return QuadrantMetric::placeholder(*position);
            };
            let kf_field = kf_fields.get(i).or_else(|| kf_fields.first());
            let value = kf_field
                .and_then(|field| structure.cell(category, field))
                .map(|cell| cell.display())
                .unwrap_or_else(|| "0".to_string());
            QuadrantMetric {
                title: category.clone(),
                value,
                position: *position,
            }
        })
        .collect();

    QuadrantProps { metrics }
}
