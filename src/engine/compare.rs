//! Value comparison rules shared by the filter and sort steps.
//!
//! JSON values arrive untyped, so sorting first classifies each value into a
//! [`SortKey`]: numbers compare numerically, ISO-8601 date strings compare by
//! instant, other strings compare with [`locale_compare`]. Values of different
//! kinds fall back to a fixed kind rank so the order is always total.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

/// Naive date-time layouts accepted in addition to RFC 3339.
const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Length of the shortest accepted input, `YYYY-MM-DD`.
const MIN_DATE_LEN: usize = 10;

/// Comparable form of a present (non-null) field value.
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    Number(f64),
    /// Milliseconds since the Unix epoch, UTC.
    Instant(i64),
    Text(String),
    Bool(bool),
    /// Objects and arrays, ordered by their compact JSON text.
    Other(String),
}

impl SortKey {
    /// Classifies a value, returning `None` for `null`.
    ///
    /// # Examples
    ///
    /// ```
    /// use listview::engine::SortKey;
    /// use serde_json::json;
    ///
    /// assert_eq!(SortKey::from_value(&json!(4.5)), Some(SortKey::Number(4.5)));
    /// assert_eq!(SortKey::from_value(&json!("1970-01-02")), Some(SortKey::Instant(86_400_000)));
    /// assert_eq!(SortKey::from_value(&json!(null)), None);
    /// ```
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Number(n) => Some(n.as_f64().map_or_else(|| Self::Other(n.to_string()), Self::Number)),
            Value::String(s) => Some(parse_instant(s).map_or_else(|| Self::Text(s.clone()), Self::Instant)),
            Value::Bool(b) => Some(Self::Bool(*b)),
            Value::Array(_) | Value::Object(_) => Some(Self::Other(value.to_string())),
        }
    }

    const fn rank(&self) -> u8 {
        match self {
            Self::Number(_) => 0,
            Self::Instant(_) => 1,
            Self::Text(_) => 2,
            Self::Bool(_) => 3,
            Self::Other(_) => 4,
        }
    }

    /// Ascending comparison between two keys.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Instant(a), Self::Instant(b)) => a.cmp(b),
            (Self::Text(a), Self::Text(b)) => locale_compare(a, b),
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::Other(a), Self::Other(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

/// Parses an ISO-8601 date or date-time into epoch milliseconds.
///
/// Accepts RFC 3339 (`2024-03-01T10:00:00Z`, with offset), naive date-times
/// with `T` or space separators (read as UTC), and bare dates (midnight UTC).
#[must_use]
pub fn parse_instant(text: &str) -> Option<i64> {
    let bytes = text.as_bytes();
    if bytes.len() < MIN_DATE_LEN || bytes[4] != b'-' || !bytes[..4].iter().all(u8::is_ascii_digit) {
        return None;
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(text) {
        return Some(datetime.timestamp_millis());
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc().timestamp_millis());
        }
    }

    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().timestamp_millis())
}

/// Case-insensitive string ordering in the manner of a default collator.
///
/// Strings are ordered by their case-folded characters first; strings that
/// differ only in case put the lowercase form first; remaining ties fall back
/// to code-point order so the result is total.
///
/// # Examples
///
/// ```
/// use listview::engine::locale_compare;
/// use std::cmp::Ordering;
///
/// assert_eq!(locale_compare("apple", "Banana"), Ordering::Less);
/// assert_eq!(locale_compare("al", "Al"), Ordering::Less);
/// ```
#[must_use]
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let folded_a = a.chars().flat_map(char::to_lowercase);
    let folded_b = b.chars().flat_map(char::to_lowercase);

    folded_a
        .cmp(folded_b)
        .then_with(|| case_order(a, b))
        .then_with(|| a.cmp(b))
}

fn case_order(a: &str, b: &str) -> Ordering {
    a.chars()
        .zip(b.chars())
        .find(|(ca, cb)| ca != cb)
        .map_or(Ordering::Equal, |(ca, cb)| match (ca.is_lowercase(), cb.is_lowercase()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => Ordering::Equal,
        })
}

/// Strict equality as used by field filters.
///
/// Numbers are equal when numerically equal regardless of integer/float
/// representation; every other value uses structural JSON equality.
#[must_use]
pub fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.as_f64(), y.as_f64()) {
            (Some(x), Some(y)) => x == y,
            _ => x == y,
        },
        _ => a == b,
    }
}
