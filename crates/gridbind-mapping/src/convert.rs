//! Typed field converter
//!
//! Converts between a cell's raw representation and typed field values,
//! one function per field type. All conversions are pure and total:
//! malformed or absent input produces the stated default (or `None` for
//! the nullable variants), never an error. Data-quality reporting, when
//! wanted, is an explicit validation pass elsewhere.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use gridbind_core::CellValue;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Field type declared on a column schema entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// Free text
    String,
    /// Decimal number
    Number,
    /// Whole number
    Integer,
    /// Monetary amount, may carry a leading currency symbol
    Currency,
    /// Calendar date
    DateTime,
    /// Time of day
    Time,
    /// Elapsed time, stored as a fractional-day serial in the sheet
    Duration,
    /// TRUE/FALSE
    Boolean,
    /// Decimal number displayed as a percentage
    Percentage,
    /// Text with email formatting/validation on the sheet side
    Email,
    /// Text with link formatting on the sheet side
    Url,
    /// Text with phone-number formatting on the sheet side
    PhoneNumber,
}

/// Milliseconds per day, for the duration serial
const DAY_MS: f64 = 86_400_000.0;

/// Trimmed string value; default `""`
pub fn string_value(value: &CellValue) -> String {
    value.display_text().trim().to_string()
}

/// Whole-number value; default 0
///
/// Every character that is not an ASCII digit is stripped before parsing.
/// That includes a leading minus sign, so `"-5"` parses as 5. The decimal
/// converter keeps the sign; this asymmetry matches the live sheets this
/// library reads and is pinned by tests.
pub fn int_value(value: &CellValue) -> i64 {
    digits_only(&value.display_text()).parse().unwrap_or(0)
}

/// Nullable whole-number value; blank or digit-free input is `None`
pub fn int_value_opt(value: &CellValue) -> Option<i64> {
    let digits = digits_only(&value.display_text());
    if digits.is_empty() {
        None
    } else {
        digits.parse().ok()
    }
}

/// Decimal value; default 0
///
/// Keeps digits, `.` and `-`; an empty or lone-`-` remainder coerces to 0.
pub fn decimal_value(value: &CellValue) -> Decimal {
    parse_decimal(&value.display_text()).unwrap_or(Decimal::ZERO)
}

/// Nullable decimal value; blank or unparsable input is `None`
pub fn decimal_value_opt(value: &CellValue) -> Option<Decimal> {
    let text = value.display_text();
    if text.trim().is_empty() {
        return None;
    }
    parse_decimal(&text)
}

/// Monetary value; default 0
///
/// A leading currency symbol is stripped before the generic decimal strip.
pub fn currency_value(value: &CellValue) -> Decimal {
    let text = value.display_text();
    let trimmed = text.trim();
    let body = trimmed
        .strip_prefix(&['$', '€', '£', '¥'][..])
        .unwrap_or(trimmed);
    parse_decimal(body).unwrap_or(Decimal::ZERO)
}

/// Boolean value; only the case-insensitive token `TRUE` is true
pub fn bool_value(value: &CellValue) -> bool {
    match value {
        CellValue::Bool(b) => *b,
        _ => value.display_text().trim().eq_ignore_ascii_case("TRUE"),
    }
}

/// Date value; `None` on blank or unparsable input
///
/// Accepts the locale-invariant `2024-03-22` form, a full datetime, and
/// the `03/22/2024` form the backend sometimes renders.
pub fn date_value(value: &CellValue) -> Option<NaiveDate> {
    let text = value.display_text();
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(text, "%m/%d/%Y"))
        .ok()
}

/// Display form of a date: `yyyy-MM-dd`, or `""` for `None`
pub fn date_display(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => d.format("%Y-%m-%d").to_string(),
        None => String::new(),
    }
}

/// Time-of-day value; `None` on blank or unparsable input
pub fn time_value(value: &CellValue) -> Option<NaiveTime> {
    let text = value.display_text();
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    NaiveTime::parse_from_str(text, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(text, "%H:%M"))
        .ok()
}

/// Duration value from a `H:MM:SS[.fff]` string, optional leading `-`
///
/// Input that does not split into exactly three colon-separated time
/// components is rejected as `None`.
pub fn duration_value(value: &CellValue) -> Option<Duration> {
    let text = value.display_text();
    let text = text.trim();
    let (negative, body) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };

    let parts: Vec<&str> = body.split(':').collect();
    if parts.len() != 3 {
        return None;
    }

    let hours: i64 = parts[0].parse().ok()?;
    let minutes: i64 = parts[1].parse().ok()?;
    let seconds: f64 = parts[2].parse().ok()?;
    if hours < 0 || !(0..60).contains(&minutes) || !(0.0..60.0).contains(&seconds) {
        return None;
    }

    let total_ms = (hours * 3_600_000 + minutes * 60_000) + (seconds * 1000.0).round() as i64;
    Some(Duration::milliseconds(if negative {
        -total_ms
    } else {
        total_ms
    }))
}

/// Fractional-day serial for a duration, preserving sign
///
/// This is the representation the spreadsheet backend uses for elapsed
/// times, so a duration written back renders with `[h]:mm:ss` formats.
pub fn duration_serial(duration: Duration) -> f64 {
    duration.num_milliseconds() as f64 / DAY_MS
}

/// Convert one raw cell to its sheet-ready representation for a field type
///
/// This is the dispatch the row mapper uses on the write path: typed
/// values rendered by the entity are normalized to the form the backend
/// expects (dates as `yyyy-MM-dd` text, durations as day serials, numbers
/// as numbers, booleans as booleans).
pub fn to_sheet_value(value: &CellValue, field_type: FieldType) -> CellValue {
    match field_type {
        FieldType::String | FieldType::Email | FieldType::Url | FieldType::PhoneNumber => {
            CellValue::String(string_value(value))
        }
        FieldType::Integer => CellValue::Number(int_value(value) as f64),
        FieldType::Number | FieldType::Currency | FieldType::Percentage => {
            let d = if field_type == FieldType::Currency {
                currency_value(value)
            } else {
                decimal_value(value)
            };
            CellValue::Number(d.to_f64().unwrap_or(0.0))
        }
        FieldType::DateTime => CellValue::String(date_display(date_value(value))),
        FieldType::Time => match time_value(value) {
            Some(t) => CellValue::String(t.format("%H:%M:%S").to_string()),
            None => CellValue::String(String::new()),
        },
        FieldType::Duration => match duration_value(value) {
            Some(d) => CellValue::Number(duration_serial(d)),
            None => CellValue::Null,
        },
        FieldType::Boolean => CellValue::Bool(bool_value(value)),
    }
}

fn digits_only(text: &str) -> String {
    text.chars().filter(|c| c.is_ascii_digit()).collect()
}

fn parse_decimal(text: &str) -> Option<Decimal> {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    let cleaned = if cleaned.is_empty() || cleaned == "-" {
        "0".to_string()
    } else {
        cleaned
    };
    cleaned.parse().ok()
}
