use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Reserved pivot value representing a pre-aggregated total row
pub const OVERALL_RESULT: &str = "Overall Result";

/// Value of a single report cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Text value
    Text(String),
    /// Numeric value
    Number(f64),
    /// Null value
    Null,
}

impl CellValue {
    /// Numeric reading of the cell, if it has one
    ///
    /// Text cells are trimmed and parsed in full; partial matches
    /// (e.g. "12 pcs") do not count as numbers.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    trimmed.parse::<f64>().ok()
                }
            }
            CellValue::Null => None,
        }
    }

    /// Numeric reading with the projection default of 0
    pub fn to_number(&self) -> f64 {
        self.as_f64().unwrap_or(0.0)
    }

    /// Whether the cell carries no displayable value
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Null => true,
            CellValue::Text(s) => s.is_empty(),
            CellValue::Number(_) => false,
        }
    }

    /// Display representation (empty string for null)
    pub fn display(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    n.to_string()
                }
            }
            CellValue::Null => String::new(),
        }
    }

    /// Parse raw text the way the report format does: a fully numeric
    /// string becomes a number, anything else stays text.
    pub fn from_raw(raw: &str) -> Self {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            if let Ok(n) = trimmed.parse::<f64>() {
                return CellValue::Number(n);
            }
        }
        CellValue::Text(raw.to_string())
    }
}

impl From<CellValue> for serde_json::Value {
    fn from(value: CellValue) -> Self {
        match value {
            CellValue::Text(s) => serde_json::Value::String(s),
            CellValue::Number(n) => serde_json::Number::from_f64(n)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            CellValue::Null => serde_json::Value::Null,
        }
    }
}

/// Kind of a reported field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Characteristic (dimension) field, usable as a grouping key
    Cha,
    /// Key figure (measure) field
    Kf,
    /// Anything else the backend reports
    Unknown,
}

impl FieldKind {
    /// Parse the wire `type` attribute; unrecognized values map to Unknown
    pub fn from_wire(raw: &str) -> Self {
        match raw {
            "CHA" => FieldKind::Cha,
            "KF" => FieldKind::Kf,
            _ => FieldKind::Unknown,
        }
    }

    /// Wire representation; the unknown kind reads as empty
    pub fn as_wire(&self) -> &'static str {
        match self {
            FieldKind::Cha => "CHA",
            FieldKind::Kf => "KF",
            FieldKind::Unknown => "",
        }
    }
}

impl Serialize for FieldKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_wire())
    }
}

impl<'de> Deserialize<'de> for FieldKind {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(FieldKind::from_wire(&raw))
    }
}

/// Metadata for one reported field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderField {
    /// Field kind (CHA / KF)
    #[serde(rename = "type")]
    pub kind: FieldKind,
    /// Stable field identifier (e.g. "VALUE001", "ZSCMCMD")
    pub field_name: String,
    /// Human-readable display name
    pub label: String,
    /// Chart placement hint (ROW / COLUMN), advisory only
    pub axis_type: String,
    /// Opaque display hint, passed through unchanged
    pub display_style: String,
}

/// One flat report record: field name to cell value
pub type DataRow = HashMap<String, CellValue>;

/// Decoded report payload: header metadata plus flat data rows
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParsedReport {
    /// Field metadata, in reported order
    pub header: Vec<HeaderField>,
    /// Flat data rows, in reported order
    pub rows: Vec<DataRow>,
    /// Sentinel for transport/structural failures; parsing itself is
    /// best-effort and degrades to empty header/rows instead
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}

impl ParsedReport {
    /// Report carrying only an error sentinel
    pub fn with_error(message: impl Into<String>) -> Self {
        Self {
            header: Vec::new(),
            rows: Vec::new(),
            error: Some(message.into()),
        }
    }
}
