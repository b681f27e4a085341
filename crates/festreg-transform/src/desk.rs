//! Desk-code derivation from receipt numbers.

use polars::prelude::{DataFrame, NamedFrom, PolarsResult, Series};

use crate::columns::column_string_values;

/// The registration-counter code is the receipt-number prefix before the
/// last `/`. Receipts without a `/` yield an empty desk rather than an
/// error.
pub fn desk_code(receipt_no: &str) -> &str {
    match receipt_no.rfind('/') {
        Some(pos) => &receipt_no[..pos],
        None => "",
    }
}

/// Append a `desk` column derived from the given receipt-number column.
pub fn with_desk_column(df: &mut DataFrame, receipt_col: &str) -> PolarsResult<()> {
    let desks: Vec<String> = column_string_values(df, receipt_col)?
        .iter()
        .map(|receipt| desk_code(receipt).to_string())
        .collect();
    df.with_column(Series::new("desk".into(), desks))?;
    Ok(())
}
