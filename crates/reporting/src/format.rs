//! Display formatting for key figure values.
//!
//! Two currency policies exist on purpose: tables render full amounts
//! with two fixed decimals, charts render compact totals without a
//! forced fraction. Both are part of the visual contract.

use contracts::report::CellValue;
use serde::{Deserialize, Serialize};

/// Display treatment of a numeric value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueFormat {
    Currency,
    Percentage,
    Number,
    None,
}

/// Format a cell for display (table policy for currency).
///
/// Empty, null or absent cells format to the empty string; text that
/// is not numeric passes through unchanged.
pub fn format_value(value: Option<&CellValue>, format: ValueFormat) -> String {
    let Some(value) = value else {
        return String::new();
    };
    if value.is_empty() {
        return String::new();
    }
    let Some(n) = value.as_f64() else {
        return value.display();
    };

    match format {
        ValueFormat::Currency => format_currency(n),
        ValueFormat::Percentage => format!("{:.2}%", n),
        ValueFormat::Number => group_number(n),
        ValueFormat::None => CellValue::Number(n).display(),
    }
}

/// Currency with abbreviation: `$x.xM` from a million, `$x.xK` from a
/// thousand, full amount with two decimals below that.
pub fn format_currency(n: f64) -> String {
    if n >= 1_000_000.0 {
        format!("${:.1}M", n / 1_000_000.0)
    } else if n >= 1_000.0 {
        format!("${:.1}K", n / 1_000.0)
    } else {
        format!("${}", group_thousands(n, 2))
    }
}

/// Chart-context currency: thousands separators, no forced decimals.
pub fn format_currency_plain(n: f64) -> String {
    format!("${}", group_number(n))
}

/// Percentage change from `previous` to `current`, signed, two
/// decimals. A zero base reads as no change rather than infinity.
pub fn calculate_variance(current: f64, previous: f64) -> String {
    if previous == 0.0 {
        return "+0.00%".to_string();
    }
    let variance = (current - previous) / previous.abs() * 100.0;
    let sign = if variance >= 0.0 { "+" } else { "" };
    format!("{}{:.2}%", sign, variance)
}

/// Share of `value` in `total` with one decimal; zero totals read as 0.
pub fn percentage_share(value: f64, total: f64) -> String {
    let share = if total > 0.0 { value / total * 100.0 } else { 0.0 };
    format!("{:.1}", share)
}

/// Thousands-separated number; whole values drop the fraction, others
/// keep up to three decimals. The whole number is formatted once and
/// then split, so a fraction rounding up carries into the integer
/// part (0.9999 reads as 1).
fn group_number(n: f64) -> String {
    if n.fract() == 0.0 {
        group_thousands(n, 0)
    } else {
        let fixed = format!("{:.3}", n);
        group_digits(fixed.trim_end_matches('0').trim_end_matches('.'))
    }
}

/// Fixed-decimal rendering with comma separators.
fn group_thousands(n: f64, decimals: usize) -> String {
    group_digits(&format!("{:.*}", decimals, n))
}

/// Insert comma separators every three digits of the integer part.
fn group_digits(formatted: &str) -> String {
    let (integer_part, fraction) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted, None),
    };

    let mut grouped = String::new();
    let chars: Vec<char> = integer_part.chars().rev().collect();
    let mut digits = 0;
    for c in chars {
        if digits > 0 && digits % 3 == 0 && c != '-' {
            grouped.push(',');
        }
        grouped.push(c);
        if c.is_ascii_digit() {
            digits += 1;
        }
    }
    let integer: String = grouped.chars().rev().collect();

    match fraction {
        Some(f) => format!("{}.{}", integer, f),
        None => integer,
    }
}
