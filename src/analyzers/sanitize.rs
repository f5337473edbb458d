//! Per-column coercions from [`RawValue`] to typed values.
//!
//! Each function returns `None` when the value must be left out of the
//! statistic. None of them fail.

use chrono::NaiveDateTime;

use crate::table::RawValue;

/// Accepted text layout for start times. `%.f` also matches no fraction.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// Timestamps and `YYYY-MM-DD HH:MM:SS` text. Numbers are never
/// interpreted as epoch offsets, and date-only text is rejected.
pub fn as_timestamp(value: &RawValue) -> Option<NaiveDateTime> {
    match value {
        RawValue::Timestamp(ts) => Some(*ts),
        RawValue::Text(s) => NaiveDateTime::parse_from_str(s.trim(), TIMESTAMP_FORMAT).ok(),
        _ => None,
    }
}

/// Finite numbers and numeric text.
pub fn as_number(value: &RawValue) -> Option<f64> {
    if value.is_missing() {
        return None;
    }

    let n = match value {
        RawValue::Number(n) => *n,
        RawValue::Text(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };

    n.is_finite().then_some(n)
}

pub fn as_positive_number(value: &RawValue) -> Option<f64> {
    as_number(value).filter(|n| *n > 0.0)
}

/// Any non-blank text, kept verbatim.
pub fn as_station(value: &RawValue) -> Option<&str> {
    match value {
        RawValue::Text(s) if !value.is_missing() => Some(s.as_str()),
        _ => None,
    }
}

/// Text that is exactly one of `allowed`.
pub fn as_category<'a>(value: &'a RawValue, allowed: &[String]) -> Option<&'a str> {
    match value {
        RawValue::Text(s) if allowed.iter().any(|a| a == s) => Some(s.as_str()),
        _ => None,
    }
}
