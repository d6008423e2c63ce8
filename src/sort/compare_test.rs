use std::cmp::Ordering;

use chrono::{TimeZone, Utc};

use crate::field::FieldValue;
use crate::sort::{compare_values, locale_compare, parse_date_like};

fn text(s: &str) -> FieldValue {
    FieldValue::Text(s.to_string())
}

#[test]
fn test_null_sorts_before_defined_values() {
    assert_eq!(compare_values(&FieldValue::Null, &text("a")), Ordering::Less);
    assert_eq!(
        compare_values(&FieldValue::Number(0.0), &FieldValue::Null),
        Ordering::Greater
    );
    assert_eq!(
        compare_values(&FieldValue::Null, &FieldValue::Null),
        Ordering::Equal
    );
}

#[test]
fn test_numbers_compare_numerically() {
    assert_eq!(
        compare_values(&FieldValue::Number(9.0), &FieldValue::Number(10.0)),
        Ordering::Less
    );
}

#[test]
fn test_nan_orders_after_every_number() {
    let nan = FieldValue::Number(f64::NAN);
    for n in [f64::NEG_INFINITY, -1.0, 0.0, 1.0, f64::INFINITY] {
        assert_eq!(compare_values(&nan, &FieldValue::Number(n)), Ordering::Greater);
        assert_eq!(compare_values(&FieldValue::Number(n), &nan), Ordering::Less);
    }
    assert_eq!(compare_values(&nan, &nan), Ordering::Equal);
}

#[test]
fn test_dates_compare_by_instant() {
    let earlier = FieldValue::Date(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    let later = FieldValue::Date(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap());
    assert_eq!(compare_values(&earlier, &later), Ordering::Less);
}

#[test]
fn test_date_strings_compare_by_parsed_instant() {
    // Lexically "2024-01-02T..+05:00" > "2024-01-01T23:..Z", but it is earlier in time.
    let a = text("2024-01-02T01:00:00+05:00");
    let b = text("2024-01-01T23:00:00Z");
    assert_eq!(compare_values(&a, &b), Ordering::Less);
}

#[test]
fn test_sqlite_timestamps_are_dates() {
    assert!(parse_date_like("2024-03-05 10:20:30").is_some());
    assert!(parse_date_like("2024-03-05").is_some());
}

#[test]
fn test_numeric_strings_are_not_dates() {
    assert!(parse_date_like("12345").is_none());
    assert!(parse_date_like("2024").is_none());
    assert_eq!(compare_values(&text("12345"), &text("9")), Ordering::Less);
}

#[test]
fn test_date_strings_order_before_plain_strings() {
    assert_eq!(
        compare_values(&text("2024-01-01"), &text("pending")),
        Ordering::Less
    );
    assert_eq!(
        compare_values(&text("1999"), &text("2024-01-01")),
        Ordering::Greater
    );
}

#[test]
fn test_mixed_date_and_plain_strings_are_transitive() {
    let values = [
        text("2024-01-01T10:00:00+05:00"),
        text("2024-01-01T06:00:00Z"),
        text("2024-01-01T07"),
        text("2024-01-01"),
        text("pending"),
        text("Pending"),
        text("12345"),
        text("2023-12-31 23:59:59"),
    ];

    for a in &values {
        for b in &values {
            assert_eq!(compare_values(a, b), compare_values(b, a).reverse());
            for c in &values {
                if compare_values(a, b).is_le() && compare_values(b, c).is_le() {
                    assert!(compare_values(a, c).is_le(), "{a:?} <= {b:?} <= {c:?}");
                }
            }
        }
    }
}

#[test]
fn test_sorting_mixed_strings_puts_dates_first_in_time_order() {
    let mut values = vec![
        text("2024-01-01T07"),
        text("2024-01-01T06:00:00Z"),
        text("pending"),
        text("2024-01-01T10:00:00+05:00"),
    ];
    values.sort_by(compare_values);
    assert_eq!(
        values,
        vec![
            text("2024-01-01T10:00:00+05:00"),
            text("2024-01-01T06:00:00Z"),
            text("2024-01-01T07"),
            text("pending"),
        ]
    );
}

#[test]
fn test_locale_compare_ignores_case_first() {
    assert_eq!(locale_compare("apple", "Banana"), Ordering::Less);
    assert_eq!(locale_compare("Zeta", "alpha"), Ordering::Greater);
    assert_eq!(locale_compare("a", "A"), Ordering::Less);
    assert_eq!(locale_compare("same", "same"), Ordering::Equal);
}

#[test]
fn test_mixed_kinds_order_by_kind() {
    assert_eq!(
        compare_values(&FieldValue::Number(100.0), &text("1")),
        Ordering::Less
    );
    assert_eq!(
        compare_values(&FieldValue::Bool(true), &FieldValue::Number(0.0)),
        Ordering::Less
    );
}
