//! Lenient decoder for SAP BW report payloads.
//!
//! The upstream format is pseudo-XML and frequently malformed, so
//! extraction is pattern-based rather than a schema-validating parse.
//! Anything the patterns cannot find degrades to empty output instead
//! of failing.

use contracts::report::{CellValue, DataRow, FieldKind, HeaderField, ParsedReport};
use once_cell::sync::Lazy;
use regex::Regex;

static METADATA_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)<ZBW_QUERY_OUTPUT_METADATA[^>]*>.*?</ZBW_QUERY_OUTPUT_METADATA>").unwrap()
});
static TYPE_ATTR: Lazy<Regex> = Lazy::new(|| Regex::new(r#"type\s*=\s*"([^"]+)""#).unwrap());
static FIELD_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"<FIELDNAME>([^<]+)</FIELDNAME>").unwrap());
static LABEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"<SCRTEXT_L>([^<]+)</SCRTEXT_L>").unwrap());
static AXIS_TYPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<AXIS_TYPE>([^<]+)</AXIS_TYPE>").unwrap());
static DISPLAY_STYLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<DISPLAY_STYLE>([^<]+)</DISPLAY_STYLE>").unwrap());
static OUTPUT_SECTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<(?:OUTPUT|o)>.*?</(?:OUTPUT|o)>").unwrap());
static ITEM_BLOCK: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<item>(.*?)</item>").unwrap());
// The regex crate has no backreferences, so the close tag is captured
// separately and checked against the open tag in code.
static CHILD_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<([^/>][^>]*)>([^<]*)</([^>]+)>").unwrap());

/// Decode a raw report payload into header metadata and flat rows.
///
/// Never fails: a payload with no recognizable metadata yields an empty
/// header, one with no data section yields empty rows. Only a blank
/// payload sets the error sentinel.
pub fn parse_report(raw: &str) -> ParsedReport {
    if raw.trim().is_empty() {
        return ParsedReport::with_error("empty report payload");
    }

    ParsedReport {
        header: extract_metadata(raw),
        rows: extract_rows(raw),
        error: None,
    }
}

/// Every metadata block becomes one header field; missing inner fields
/// read as empty strings.
fn extract_metadata(raw: &str) -> Vec<HeaderField> {
    METADATA_BLOCK
        .find_iter(raw)
        .map(|block| {
            let block = block.as_str();
            HeaderField {
                kind: FieldKind::from_wire(&first_capture(&TYPE_ATTR, block)),
                field_name: first_capture(&FIELD_NAME, block),
                label: first_capture(&LABEL, block),
                axis_type: first_capture(&AXIS_TYPE, block),
                display_style: first_capture(&DISPLAY_STYLE, block),
            }
        })
        .collect()
}

/// Rows live inside the single OUTPUT (or abbreviated "o") section,
/// one `item` block per row, every immediate child tag one field.
fn extract_rows(raw: &str) -> Vec<DataRow> {
    let Some(section) = OUTPUT_SECTION.find(raw) else {
        return Vec::new();
    };

    ITEM_BLOCK
        .captures_iter(section.as_str())
        .map(|item| {
            let mut row = DataRow::new();
            for child in CHILD_TAG.captures_iter(&item[1]) {
                if child[1] == child[3] {
                    row.insert(child[1].to_string(), CellValue::from_raw(&child[2]));
                }
            }
            row
        })
        .collect()
}

fn first_capture(pattern: &Regex, block: &str) -> String {
    pattern
        .captures(block)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}
