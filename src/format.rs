//! Display formatting for application fields
//!
//! Pure value-in/value-out helpers used by the renderer.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Currency symbol for loan amounts
pub const CURRENCY_SYMBOL: &str = "£";

/// Shown in place of a date that cannot be parsed
pub const INVALID_DATE: &str = "Invalid date";

/// Naive timestamp layouts accepted besides RFC 3339
const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// From here on an `f64` no longer resolves pence, so only pounds are shown
const WHOLE_POUNDS_FROM: f64 = 1e15;

/// Format an amount as pounds with thousands separators.
///
/// Whole amounts carry no decimals (`£100,500`); fractional amounts are
/// rounded to pence (`£1,234.50`). Amounts of 1e15 or more are rounded to
/// whole pounds.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("{CURRENCY_SYMBOL}{amount}");
    }

    let magnitude = amount.abs();
    let (pounds, remainder) = if magnitude < WHOLE_POUNDS_FROM {
        let pence = (magnitude * 100.0).round() as u64;
        ((pence / 100).to_string(), pence % 100)
    } else {
        (format!("{:.0}", magnitude.round()), 0)
    };

    let mut out = String::new();
    if amount < 0.0 && (pounds != "0" || remainder > 0) {
        out.push('-');
    }
    out.push_str(CURRENCY_SYMBOL);
    out.push_str(&group_thousands(&pounds));
    if remainder != 0 {
        out.push_str(&format!(".{remainder:02}"));
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Format an ISO-8601 timestamp as `DD-MM-YYYY`, or [`INVALID_DATE`]
pub fn format_date(value: &str) -> String {
    parse_date(value).map_or_else(
        || INVALID_DATE.to_string(),
        |date| date.format("%d-%m-%Y").to_string(),
    )
}

/// Calendar date of an ISO-8601 value.
///
/// Offset timestamps keep the date in their own offset.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }

    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|dt| dt.date())
        .or_else(|| NaiveDate::parse_from_str(value, "%Y-%m-%d").ok())
}
