//! Table projector: one row per category, keyed by column header.

use std::collections::HashMap;

use contracts::mapping::TableColumn;
use contracts::report::CellValue;
use contracts::widgets::TableProps;

use super::ProjectionOptions;
use crate::format::format_currency_plain;
use crate::transform::TransformedReport;

/// Project the pivoted structure into table rows.
///
/// The first column names the characteristic field and renders its
/// values; every other column reads its field from the category's
/// cells, `Null` when absent. With `total_column` set the named field
/// is summed over the emitted rows into `totalAmount`.
pub fn table_props(
    report: &TransformedReport,
    columns: &[TableColumn],
    total_column: Option<&str>,
    opts: &ProjectionOptions,
) -> TableProps {
    let Some(first_column) = columns.first() else {
        return TableProps::no_data();
    };
    let Some(structure) = report.pivot(&first_column.field) else {
        return TableProps::no_data();
    };

    let data: Vec<HashMap<String, CellValue>> = structure
        .iter()
        .filter(|category| !opts.is_excluded(&category.value))
        .map(|category| {
            let mut row = HashMap::with_capacity(columns.len());
            row.insert(
                first_column.header.clone(),
                CellValue::Text(category.value.clone()),
            );
            for column in &columns[1..] {
                let cell = category
                    .values
                    .get(&column.field)
                    .cloned()
                    .unwrap_or(CellValue::Null);
                row.insert(column.header.clone(), cell);
            }
            row
        })
        .collect();

    let total_amount = total_column.map(|field| {
        let total: f64 = structure
            .iter()
            .filter(|category| !opts.is_excluded(&category.value))
            .filter_map(|category| category.values.get(field))
            .map(|v| v.to_number())
            .sum();
        format_currency_plain(total)
    });

    TableProps {
        columns: columns.to_vec(),
        data,
        total_amount,
    }
}
