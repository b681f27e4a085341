//! Row filters.

use polars::prelude::{AnyValue, BooleanChunked, DataFrame, NewChunkedArray, PolarsResult};

use crate::values::any_to_string;

/// Keep only the rows whose `type` column differs from the given event
/// type. Comparison is exact, matching the SQL predicate it replaces.
pub fn exclude_event_type(df: &DataFrame, event_type: &str) -> PolarsResult<DataFrame> {
    let types = df.column("type")?;
    let mut keep = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let value = any_to_string(types.get(idx).unwrap_or(AnyValue::Null));
        keep.push(value != event_type);
    }
    df.filter(&BooleanChunked::from_slice("keep".into(), &keep))
}

/// Drop every row with a null or blank cell in any column.
pub fn drop_rows_with_missing(df: &DataFrame) -> PolarsResult<DataFrame> {
    let mut keep = vec![true; df.height()];
    for column in df.get_columns() {
        for (idx, flag) in keep.iter_mut().enumerate() {
            // Nulls render as empty strings, so one blank check covers both.
            let value = any_to_string(column.get(idx).unwrap_or(AnyValue::Null));
            if value.trim().is_empty() {
                *flag = false;
            }
        }
    }
    df.filter(&BooleanChunked::from_slice("keep".into(), &keep))
}
