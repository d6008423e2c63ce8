//! Default comparator used when a column has no registered comparator.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::field::FieldValue;

/// Strings this short are never treated as dates.
const MIN_DATE_LEN: usize = 5;

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
];

/// Compare two field values.
///
/// Nulls first, numbers numerically, dates by instant, date-like strings by
/// parsed instant, other strings with [`locale_compare`]. Date-like strings
/// order before plain strings. Values of different kinds order by kind:
/// null, bool, number, date, text. The result is a total order.
pub fn compare_values(a: &FieldValue, b: &FieldValue) -> Ordering {
    use FieldValue::*;

    match (a, b) {
        (Null, Null) => Ordering::Equal,
        (Null, _) => Ordering::Less,
        (_, Null) => Ordering::Greater,
        (Bool(x), Bool(y)) => x.cmp(y),
        (Number(x), Number(y)) => x.total_cmp(y),
        (Date(x), Date(y)) => x.cmp(y),
        (Text(x), Text(y)) => match (parse_date_like(x), parse_date_like(y)) {
            (Some(dx), Some(dy)) => dx.cmp(&dy),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => locale_compare(x, y),
        },
        _ => kind_rank(a).cmp(&kind_rank(b)),
    }
}

fn kind_rank(value: &FieldValue) -> u8 {
    match value {
        FieldValue::Null => 0,
        FieldValue::Bool(_) => 1,
        FieldValue::Number(_) => 2,
        FieldValue::Date(_) => 3,
        FieldValue::Text(_) => 4,
    }
}

/// Case-insensitive ordering with lowercase before uppercase on ties.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

/// Parse a string as a date if it is long enough and has a recognised form.
pub fn parse_date_like(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.chars().count() < MIN_DATE_LEN {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
