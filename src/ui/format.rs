//! Display formatting for migration figures.
//!
//! Pure functions consumed by view model computation. Grouping uses `,` as
//! the thousands separator.

use crate::domain::CountyRecord;

/// Records with fewer flows than this get a data-completeness caveat.
pub const LIMITED_DATA_THRESHOLD: usize = 5;

/// Placeholder for unknown currency values.
pub const NOT_AVAILABLE: &str = "N/A";

/// Sign class of a net migration figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// Zero or more households arrived than left.
    Positive,
    Negative,
}

impl Polarity {
    #[must_use]
    pub const fn of(n: i64) -> Self {
        if n >= 0 {
            Self::Positive
        } else {
            Self::Negative
        }
    }
}

fn group_digits(n: u64) -> String {
    let digits = n.to_string();
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    grouped
}

/// Formats an unsigned count with thousands separators.
///
/// - `format_count(0)` → `"0"`
/// - `format_count(1234567)` → `"1,234,567"`
#[must_use]
pub fn format_count(n: u64) -> String {
    group_digits(n)
}

/// Formats a signed count, always showing the sign.
///
/// - `format_signed_count(1234)` → `"+1,234"`
/// - `format_signed_count(0)` → `"+0"`
/// - `format_signed_count(-56)` → `"-56"`
#[must_use]
pub fn format_signed_count(n: i64) -> String {
    let sign = if n >= 0 { '+' } else { '-' };
    format!("{sign}{}", group_digits(n.unsigned_abs()))
}

/// Formats an average income as whole dollars.
///
/// Absent and zero values both render as [`NOT_AVAILABLE`]; the source cannot
/// tell a real zero apart from a missing value. A negative average keeps its
/// sign after the dollar sign: `-1234.0` → `"$-1,234"`.
#[must_use]
pub fn format_currency(value: Option<f64>) -> String {
    let Some(v) = value.filter(|v| v.is_finite() && *v != 0.0) else {
        return NOT_AVAILABLE.to_string();
    };

    #[allow(clippy::cast_possible_truncation)]
    let rounded = v.round() as i64;
    let sign = if rounded < 0 { "-" } else { "" };
    format!("${sign}{}", group_digits(rounded.unsigned_abs()))
}

/// Whether the record carries too few flows to be representative.
#[must_use]
pub fn has_limited_data(record: &CountyRecord) -> bool {
    record.flow_count() < LIMITED_DATA_THRESHOLD
}
