//! Tests for the result-table transforms.

use polars::df;
use polars::prelude::DataFrame;

use festreg_transform::{
    combine_name_slots, drop_rows_with_missing, exclude_event_type, serial_index,
    set_display_columns, string_column_or, sum_by_key, with_combined_names, with_desk_column,
};

fn participants() -> DataFrame {
    df!(
        "receipt_no" => ["CS/MAIN/101", "CS/MAIN/102"],
        "name_1" => [Some("Alice"), Some("Dan")],
        "name_2" => [None::<&str>, Some("Eve")],
        "name_3" => [None::<&str>, None::<&str>],
        "name_4" => [None::<&str>, Some("Finn")],
        "name_5" => [None::<&str>, None::<&str>],
        "name_6" => [None::<&str>, None::<&str>],
        "mobile" => [9999999999i64, 8888888888i64],
    )
    .expect("build participants frame")
}

#[test]
fn single_name_flattens_to_itself() {
    let names = combine_name_slots(&participants()).expect("combine");
    assert_eq!(names[0], "Alice");
}

#[test]
fn interior_blank_slots_survive_as_blank_lines() {
    let names = combine_name_slots(&participants()).expect("combine");
    // name_3 is the only unset slot between Eve and Finn.
    assert_eq!(names[1], "Dan\nEve\n\nFinn");
}

#[test]
fn pre_trim_join_uses_five_separators() {
    let parts = ["Alice", "", "", "", "", ""];
    let joined = parts.join("\n");
    assert_eq!(joined.matches('\n').count(), 5);
    assert_eq!(joined.trim(), "Alice");
}

#[test]
fn combined_names_column_is_appended() {
    let mut df = participants();
    with_combined_names(&mut df).expect("append names");
    assert!(df.column("name").is_ok());
    assert_eq!(df.height(), 2);
}

#[test]
fn desk_column_splits_before_last_slash() {
    let mut df = participants();
    with_desk_column(&mut df, "receipt_no").expect("append desk");
    let desks: Vec<String> =
        festreg_transform::column_string_values(&df, "desk").expect("desk values");
    assert_eq!(desks, vec!["CS/MAIN", "CS/MAIN"]);
}

#[test]
fn grouped_fees_sum_matches_ungrouped_total() {
    let df = df!(
        "desk" => ["A", "B", "A", "C"],
        "fees" => [100.0, 250.0, 50.0, 75.0],
    )
    .expect("build fees frame");
    let grouped = sum_by_key(&df, "desk", "fees").expect("group");
    assert_eq!(grouped.height(), 3);
    let totals: f64 = festreg_transform::column_string_values(&grouped, "fees")
        .expect("fees")
        .iter()
        .map(|v| v.parse::<f64>().expect("numeric total"))
        .sum();
    assert_eq!(totals, 475.0);
}

#[test]
fn grouped_keys_are_sorted() {
    let df = df!(
        "desk" => ["B", "A", "B"],
        "fees" => [1.0, 2.0, 3.0],
    )
    .expect("build frame");
    let grouped = sum_by_key(&df, "desk", "fees").expect("group");
    let keys = festreg_transform::column_string_values(&grouped, "desk").expect("keys");
    assert_eq!(keys, vec!["A", "B"]);
}

#[test]
fn exclude_event_type_keeps_other_rows() {
    let events = df!(
        "name" => ["Spring Fest", "Trek"],
        "type" => ["cultural", "adventure"],
    )
    .expect("build events frame");
    let filtered = exclude_event_type(&events, "adventure").expect("filter");
    assert_eq!(filtered.height(), 1);
    let names = festreg_transform::column_string_values(&filtered, "name").expect("names");
    assert_eq!(names, vec!["Spring Fest"]);
}

#[test]
fn drop_rows_with_missing_removes_null_and_blank() {
    let df = df!(
        "event" => [Some("Spring Fest"), Some("Trek"), Some("Quiz")],
        "email" => [Some("a@example.com"), None::<&str>, Some("  ")],
    )
    .expect("build managers frame");
    let kept = drop_rows_with_missing(&df).expect("dropna");
    assert_eq!(kept.height(), 1);
}

#[test]
fn serial_index_covers_every_row() {
    assert_eq!(serial_index(0), Vec::<u32>::new());
    assert_eq!(serial_index(3), vec![1, 2, 3]);
    let index = serial_index(120);
    assert_eq!(index.len(), 120);
    assert_eq!(index.last(), Some(&120));
}

#[test]
fn year_column_fills_blanks_with_zero() {
    let df = df!(
        "year" => [Some("2"), None::<&str>, Some("")],
        "count" => [10i64, 4, 1],
    )
    .expect("build year frame");
    let years = string_column_or(&df, "year", "0").expect("years");
    assert_eq!(years, vec!["2", "0", "0"]);
}

#[test]
fn display_columns_rename_in_order() {
    let mut df = df!(
        "event" => ["Spring Fest"],
        "entries" => [42i64],
    )
    .expect("build frame");
    set_display_columns(&mut df, &["Event Name", "No. of entries"]).expect("rename");
    assert!(df.column("Event Name").is_ok());
    assert!(df.column("No. of entries").is_ok());
}
