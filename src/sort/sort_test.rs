use serde_json::{Value, json};

use crate::sort::*;

fn applicants() -> Vec<Value> {
    vec![
        json!({"id": 1, "name": "Dana", "score": 80, "stage": "screen"}),
        json!({"id": 2, "name": "ali", "score": 92, "stage": "offer"}),
        json!({"id": 3, "name": "Chen", "score": 80, "stage": "screen"}),
        json!({"id": 4, "name": "Bo", "score": null, "stage": "applied"}),
        json!({"id": 5, "name": "Eve", "score": 80, "stage": "offer"}),
    ]
}

fn ids(items: &[&Value]) -> Vec<i64> {
    items.iter().map(|v| v["id"].as_i64().unwrap()).collect()
}

#[test]
fn test_toggle_cycles_asc_desc_none() {
    let mut sort: ColumnSort<Value> = ColumnSort::unsorted();

    sort.toggle_sort("score");
    assert_eq!(sort.state().column(), Some("score"));
    assert_eq!(sort.state().direction(), SortDirection::Asc);

    sort.toggle_sort("score");
    assert_eq!(sort.state().column(), Some("score"));
    assert_eq!(sort.state().direction(), SortDirection::Desc);

    sort.toggle_sort("score");
    assert_eq!(sort.state().column(), None);
    assert_eq!(sort.state().direction(), SortDirection::None);
}

#[test]
fn test_toggle_other_column_jumps_to_asc() {
    let mut sort: ColumnSort<Value> = ColumnSort::unsorted();
    sort.toggle_sort("score");
    sort.toggle_sort("score");

    sort.toggle_sort("name");
    assert_eq!(sort.state(), &SortState::new("name", SortDirection::Asc));
}

#[test]
fn test_unsorted_keeps_input_order() {
    let items = applicants();
    let sort: ColumnSort<Value> = ColumnSort::unsorted();
    assert_eq!(ids(&sort.sorted_items(&items)), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_ascending_is_stable_with_nulls_first() {
    let items = applicants();
    let mut sort = ColumnSort::unsorted();
    sort.set_sort("score", SortDirection::Asc);

    assert_eq!(ids(&sort.sorted_items(&items)), vec![4, 1, 3, 5, 2]);
}

#[test]
fn test_descending_reverses_but_keeps_ties_in_input_order() {
    let items = applicants();
    let mut sort = ColumnSort::unsorted();
    sort.set_sort("score", SortDirection::Desc);

    // The three 80s keep 1, 3, 5 order in both directions.
    assert_eq!(ids(&sort.sorted_items(&items)), vec![2, 1, 3, 5, 4]);
}

#[test]
fn test_sort_never_mutates_input() {
    let items = applicants();
    let before = items.clone();
    let mut sort = ColumnSort::unsorted();
    sort.set_sort("name", SortDirection::Desc);
    let _ = sort.sorted_items(&items);
    assert_eq!(items, before);
}

#[test]
fn test_string_sort_is_case_insensitive() {
    let items = applicants();
    let mut sort = ColumnSort::unsorted();
    sort.set_sort("name", SortDirection::Asc);

    assert_eq!(ids(&sort.sorted_items(&items)), vec![2, 4, 3, 1, 5]);
}

#[test]
fn test_custom_comparator_overrides_default() {
    let stage_rank = |v: &Value| match v["stage"].as_str() {
        Some("applied") => 0,
        Some("screen") => 1,
        Some("offer") => 2,
        _ => 3,
    };
    let items = applicants();
    let mut sort = ColumnSort::unsorted()
        .with_comparator("stage", move |a: &Value, b: &Value| {
            stage_rank(a).cmp(&stage_rank(b))
        });
    sort.set_sort("stage", SortDirection::Asc);

    assert!(sort.has_comparator("stage"));
    assert_eq!(ids(&sort.sorted_items(&items)), vec![4, 1, 3, 2, 5]);
}

#[test]
fn test_nested_column() {
    let items = vec![
        json!({"id": 1, "user": {"name": "zed"}}),
        json!({"id": 2, "user": {"name": "amy"}}),
    ];
    let mut sort = ColumnSort::unsorted();
    sort.set_sort("user.name", SortDirection::Asc);
    assert_eq!(ids(&sort.sorted_items(&items)), vec![2, 1]);
}

#[test]
fn test_unknown_column_leaves_order_unchanged() {
    let items = applicants();
    let mut sort = ColumnSort::unsorted();
    sort.set_sort("does_not_exist", SortDirection::Desc);
    assert_eq!(ids(&sort.sorted_items(&items)), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_default_sort_and_reset() {
    let default = SortState::new("created_at", SortDirection::Desc);
    let mut sort: ColumnSort<Value> = ColumnSort::new(default.clone());
    assert_eq!(sort.state(), &default);

    sort.clear_sort();
    assert!(!sort.state().is_sorted());

    sort.reset();
    assert_eq!(sort.state(), &default);
}

#[test]
fn test_set_sort_none_clears_column() {
    let mut sort: ColumnSort<Value> = ColumnSort::unsorted();
    sort.set_sort("name", SortDirection::None);
    assert_eq!(sort.state(), &SortState::unsorted());
}

#[test]
fn test_parse_sort_value_splits_at_last_underscore() {
    assert_eq!(
        parse_sort_value("created_at_desc"),
        Some(SortState::new("created_at", SortDirection::Desc))
    );
    assert_eq!(
        parse_sort_value("avg_score_desc"),
        Some(SortState::new("avg_score", SortDirection::Desc))
    );
    assert_eq!(
        parse_sort_value("name_asc"),
        Some(SortState::new("name", SortDirection::Asc))
    );
}

#[test]
fn test_parse_sort_value_rejects_malformed() {
    assert_eq!(parse_sort_value("name"), None);
    assert_eq!(parse_sort_value("_desc"), None);
    assert_eq!(parse_sort_value("name_sideways"), None);
    assert_eq!(parse_sort_value("name_none"), None);
    assert_eq!(parse_sort_value(""), None);
}

#[test]
fn test_format_sort_value() {
    let state = SortState::new("avg_score", SortDirection::Desc);
    assert_eq!(format_sort_value(&state).as_deref(), Some("avg_score_desc"));
    assert_eq!(format_sort_value(&SortState::unsorted()), None);
}
