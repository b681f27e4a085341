//! DataFrame to CSV serialization and back.

use std::fs;
use std::path::Path;

use polars::prelude::{AnyValue, Column, DataFrame, NamedFrom, Series};
use tracing::info;

use festreg_transform::any_to_string;

use crate::encoding::CsvEncoding;
use crate::error::{ReportError, Result};

/// Write a frame as CSV with a header row of column names.
pub fn write_frame_csv(df: &DataFrame, path: &Path, encoding: CsvEncoding) -> Result<()> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    let headers: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    writer.write_record(&headers)?;
    for idx in 0..df.height() {
        let mut record = Vec::with_capacity(headers.len());
        for column in df.get_columns() {
            record.push(any_to_string(column.get(idx).unwrap_or(AnyValue::Null)));
        }
        writer.write_record(&record)?;
    }
    let buffer = writer
        .into_inner()
        .map_err(|err| ReportError::Csv(err.to_string()))?;
    let text = String::from_utf8(buffer).map_err(|err| ReportError::Csv(err.to_string()))?;
    fs::write(path, encoding.encode(&text)).map_err(|source| ReportError::io(path, source))?;
    info!(
        path = %path.display(),
        rows = df.height(),
        encoding = encoding.label(),
        "wrote csv"
    );
    Ok(())
}

/// Read a CSV back into a frame of string columns.
///
/// Cells stay textual; numeric consumers parse on their side, which keeps
/// the read independent of how the producer typed its columns.
pub fn read_frame_csv(path: &Path, encoding: CsvEncoding) -> Result<DataFrame> {
    let bytes = fs::read(path).map_err(|source| ReportError::io(path, source))?;
    let text = encoding.decode(&bytes);
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());
    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|header| header.trim_matches('\u{feff}').to_string())
        .collect();
    let mut cells: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
    for record in reader.records() {
        let record = record?;
        for (idx, slot) in cells.iter_mut().enumerate() {
            slot.push(record.get(idx).unwrap_or("").to_string());
        }
    }
    let columns: Vec<Column> = headers
        .iter()
        .zip(cells)
        .map(|(name, values)| Series::new(name.as_str().into(), values).into())
        .collect();
    Ok(DataFrame::new(columns)?)
}
