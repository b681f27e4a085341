//! Encoding contract tests for CSV write/read pairs.

use polars::df;

use festreg_report::{CsvEncoding, read_frame_csv, write_frame_csv};
use festreg_transform::column_string_values;

#[test]
fn latin1_roundtrip_reproduces_cells_exactly() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("desks.csv");
    let df = df!(
        "receipt_no" => ["CAFÉ/101", "CS/MAIN/7"],
        "event" => ["Década", "Trek"],
        "fees" => [150.0, 420.0],
    )
    .expect("build frame");

    write_frame_csv(&df, &path, CsvEncoding::Latin1).expect("write latin-1");
    let back = read_frame_csv(&path, CsvEncoding::Latin1).expect("read latin-1");

    assert_eq!(
        column_string_values(&back, "receipt_no").expect("receipts"),
        vec!["CAFÉ/101", "CS/MAIN/7"]
    );
    assert_eq!(
        column_string_values(&back, "event").expect("events"),
        vec!["Década", "Trek"]
    );
    assert_eq!(
        column_string_values(&back, "fees").expect("fees"),
        vec!["150", "420"]
    );
}

#[test]
fn utf8_roundtrip_reproduces_cells_exactly() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("entries.csv");
    let df = df!(
        "Event Name" => ["Spring Fest", "Antakshari"],
        "No. of entries" => [120i64, 45],
    )
    .expect("build frame");

    write_frame_csv(&df, &path, CsvEncoding::Utf8).expect("write utf-8");
    let back = read_frame_csv(&path, CsvEncoding::Utf8).expect("read utf-8");

    assert_eq!(
        column_string_values(&back, "Event Name").expect("names"),
        vec!["Spring Fest", "Antakshari"]
    );
    assert_eq!(
        column_string_values(&back, "No. of entries").expect("counts"),
        vec!["120", "45"]
    );
}

#[test]
fn mismatched_encoding_corrupts_non_ascii() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("mismatch.csv");
    let df = df!("event" => ["Década"]).expect("build frame");

    write_frame_csv(&df, &path, CsvEncoding::Latin1).expect("write latin-1");
    let back = read_frame_csv(&path, CsvEncoding::Utf8).expect("read utf-8");

    let events = column_string_values(&back, "event").expect("events");
    assert_ne!(events[0], "Década");
}

#[test]
fn header_row_carries_column_names() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("headers.csv");
    let df = df!(
        "year" => ["1", "2"],
        "count" => [3i64, 4],
    )
    .expect("build frame");

    write_frame_csv(&df, &path, CsvEncoding::Utf8).expect("write");
    let raw = std::fs::read_to_string(&path).expect("read raw");
    let first_line = raw.lines().next().expect("header line");
    assert_eq!(first_line, "year,count");
}
