//! Workbook and archive artifact tests.

use std::fs::File;
use std::io::Read;

use polars::df;

use festreg_report::{
    CsvEncoding, bundle_csv_files, sanitize_sheet_name, write_event_sheet, write_frame_csv,
};

#[test]
fn workbook_is_written_for_an_event() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("Spring Fest.xlsx");
    let df = df!(
        "receipt_no" => ["CS/MAIN/101"],
        "name" => ["Alice"],
        "mobile" => [9999999999i64],
    )
    .expect("build frame");

    write_event_sheet(&df, "Spring Fest", &path).expect("write workbook");
    let metadata = std::fs::metadata(&path).expect("stat workbook");
    assert!(metadata.len() > 0);
}

#[test]
fn sheet_names_are_sanitized_for_excel() {
    assert_eq!(sanitize_sheet_name("Spring Fest"), "Spring Fest");
    assert_eq!(sanitize_sheet_name("Quiz: Finals?"), "Quiz  Finals");
    assert_eq!(sanitize_sheet_name(""), "Sheet1");
    assert_eq!(
        sanitize_sheet_name("An Extremely Long Event Name Indeed").chars().count(),
        31
    );
}

#[test]
fn archive_bundles_only_csv_files_in_sorted_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    let frame = df!("year" => ["1"], "count" => [1i64]).expect("build frame");
    write_frame_csv(&frame, &dir.path().join("b-event.csv"), CsvEncoding::Utf8).expect("write");
    write_frame_csv(&frame, &dir.path().join("a-event.csv"), CsvEncoding::Utf8).expect("write");
    std::fs::write(dir.path().join("notes.txt"), "ignore me").expect("write txt");

    let zip_path = dir.path().join("cultural_CS.zip");
    let bundled = bundle_csv_files(dir.path(), &zip_path).expect("bundle");

    let names: Vec<String> = bundled
        .iter()
        .map(|path| path.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["a-event.csv", "b-event.csv"]);

    let mut archive = zip::ZipArchive::new(File::open(&zip_path).expect("open zip")).expect("zip");
    assert_eq!(archive.len(), 2);
    let mut contents = String::new();
    archive
        .by_name("a-event.csv")
        .expect("entry")
        .read_to_string(&mut contents)
        .expect("read entry");
    assert!(contents.starts_with("year,count"));
}

#[test]
fn rerun_overwrites_previous_artifact() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("total.csv");
    let first = df!("event" => ["Trek"], "entries" => [1i64]).expect("frame");
    let second = df!("event" => ["Quiz"], "entries" => [2i64]).expect("frame");

    write_frame_csv(&first, &path, CsvEncoding::Utf8).expect("write first");
    write_frame_csv(&second, &path, CsvEncoding::Utf8).expect("write second");

    let raw = std::fs::read_to_string(&path).expect("read");
    assert!(raw.contains("Quiz"));
    assert!(!raw.contains("Trek"));
}
