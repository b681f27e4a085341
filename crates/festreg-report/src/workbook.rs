//! Spreadsheet workbook output, one sheet per event.

use std::path::Path;

use polars::prelude::{AnyValue, DataFrame};
use rust_xlsxwriter::Workbook;
use tracing::info;

use festreg_transform::{any_to_string, serial_index};

use crate::error::Result;

/// Label of the serial-number index column.
pub const SERIAL_LABEL: &str = "Sr. No.";

/// Excel forbids these characters in sheet names.
const FORBIDDEN_SHEET_CHARS: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];

/// Excel caps sheet names at 31 characters.
const MAX_SHEET_NAME_LEN: usize = 31;

/// Make an event name safe to use as a worksheet name.
pub fn sanitize_sheet_name(raw: &str) -> String {
    let mut safe: String = raw
        .chars()
        .map(|ch| {
            if FORBIDDEN_SHEET_CHARS.contains(&ch) {
                ' '
            } else {
                ch
            }
        })
        .collect();
    safe = safe.trim().to_string();
    if safe.is_empty() {
        safe = "Sheet1".to_string();
    }
    if safe.chars().count() > MAX_SHEET_NAME_LEN {
        safe = safe.chars().take(MAX_SHEET_NAME_LEN).collect();
    }
    safe
}

/// Write one frame to a workbook: a "Sr. No." index column covering every
/// row, then the frame's columns, on a sheet named after the event.
pub fn write_event_sheet(df: &DataFrame, event: &str, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(sanitize_sheet_name(event))?;

    sheet.write_string(0, 0, SERIAL_LABEL)?;
    for (col, name) in df.get_column_names().iter().enumerate() {
        sheet.write_string(0, (col + 1) as u16, name.as_str())?;
    }

    for (offset, serial) in serial_index(df.height()).iter().enumerate() {
        let row = (offset + 1) as u32;
        sheet.write_number(row, 0, f64::from(*serial))?;
        for (col, column) in df.get_columns().iter().enumerate() {
            let value = any_to_string(column.get(offset).unwrap_or(AnyValue::Null));
            sheet.write_string(row, (col + 1) as u16, value)?;
        }
    }

    workbook.save(path)?;
    info!(path = %path.display(), event, rows = df.height(), "wrote workbook");
    Ok(())
}
