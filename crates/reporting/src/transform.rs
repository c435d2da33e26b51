//! Pivoting of parsed reports into the characteristic-keyed structure
//! the projectors read from.

use contracts::report::{CellValue, FieldKind, HeaderField, ParsedReport, OVERALL_RESULT};
use std::collections::HashMap;
use thiserror::Error;

/// Errors from the structure transformer
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    /// Without a characteristic field there is no pivot key, so no
    /// meaningful structure can exist
    #[error("no CHA-typed header field found in report")]
    NoCharacteristicField,
}

/// Field dictionary derived from the report header, keyed by field name
pub type FormMetadata = HashMap<String, HeaderField>;

/// One pivot category: a characteristic value plus the row's other fields
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    /// Characteristic value (second-level key)
    pub value: String,
    /// All non-pivot fields of the backing row
    pub values: HashMap<String, CellValue>,
}

/// Report rows pivoted by the first characteristic field.
///
/// Categories keep first-seen row order; a duplicate pivot value
/// replaces the earlier category's fields in place (last write wins,
/// no merge) without moving its position.
#[derive(Debug, Clone, PartialEq)]
pub struct FormStructure {
    pivot_field: String,
    categories: Vec<Category>,
    index: HashMap<String, usize>,
}

impl FormStructure {
    pub fn new(pivot_field: impl Into<String>) -> Self {
        Self {
            pivot_field: pivot_field.into(),
            categories: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Name of the characteristic field this structure is keyed by
    pub fn pivot_field(&self) -> &str {
        &self.pivot_field
    }

    /// Insert or replace one category
    pub fn insert(&mut self, value: String, fields: HashMap<String, CellValue>) {
        match self.index.get(&value) {
            Some(&pos) => self.categories[pos].values = fields,
            None => {
                self.index.insert(value.clone(), self.categories.len());
                self.categories.push(Category { value, values: fields });
            }
        }
    }

    /// Fields of one category, if present
    pub fn get(&self, value: &str) -> Option<&HashMap<String, CellValue>> {
        self.index.get(value).map(|&pos| &self.categories[pos].values)
    }

    /// One cell of one category
    pub fn cell(&self, value: &str, field: &str) -> Option<&CellValue> {
        self.get(value).and_then(|fields| fields.get(field))
    }

    /// The reserved aggregate row, if the report carried one
    pub fn overall(&self) -> Option<&HashMap<String, CellValue>> {
        self.get(OVERALL_RESULT)
    }

    pub fn contains(&self, value: &str) -> bool {
        self.index.contains_key(value)
    }

    /// Categories in first-seen row order
    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// A parsed report pivoted and indexed for projection
#[derive(Debug, Clone, PartialEq)]
pub struct TransformedReport {
    pub structure: FormStructure,
    pub metadata: FormMetadata,
}

impl TransformedReport {
    /// The pivot structure, if it is keyed by the given characteristic
    /// field; projector lookups for any other field miss
    pub fn pivot(&self, cha_field: &str) -> Option<&FormStructure> {
        (self.structure.pivot_field() == cha_field).then_some(&self.structure)
    }

    /// One cell addressed by characteristic field, value and key figure
    pub fn cell(&self, cha_field: &str, cha_value: &str, kf_field: &str) -> Option<&CellValue> {
        self.pivot(cha_field)?.cell(cha_value, kf_field)
    }

    /// Aggregate cell from the "Overall Result" row
    pub fn overall_value(&self, cha_field: &str, kf_field: &str) -> Option<&CellValue> {
        self.pivot(cha_field)?.overall()?.get(kf_field)
    }

    /// Display label of a field, falling back to its technical name
    pub fn label_or(&self, field: &str) -> String {
        match self.metadata.get(field) {
            Some(header) if !header.label.is_empty() => header.label.clone(),
            _ => field.to_string(),
        }
    }
}

/// Pivot a parsed report around its first CHA-typed header field.
pub fn transform_report(parsed: &ParsedReport) -> Result<TransformedReport, TransformError> {
    let pivot = parsed
        .header
        .iter()
        .find(|h| h.kind == FieldKind::Cha)
        .ok_or(TransformError::NoCharacteristicField)?;

    let mut structure = FormStructure::new(&pivot.field_name);
    for row in &parsed.rows {
        // Rows without the pivot field cannot be keyed; skip them.
        let Some(key) = row.get(&pivot.field_name) else {
            continue;
        };
        let key = key.display();
        if structure.contains(&key) {
            tracing::debug!(pivot = %pivot.field_name, value = %key, "duplicate pivot value, keeping later row");
        }
        let fields = row
            .iter()
            .filter(|(name, _)| *name != &pivot.field_name)
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();
        structure.insert(key, fields);
    }

    let metadata = parsed
        .header
        .iter()
        .map(|h| (h.field_name.clone(), h.clone()))
        .collect();

    Ok(TransformedReport { structure, metadata })
}
