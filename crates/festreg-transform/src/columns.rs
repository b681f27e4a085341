//! Column extraction and presentation helpers.

use polars::prelude::{AnyValue, DataFrame, PolarsResult};

use crate::values::any_to_string;

/// Extract a column as strings, with nulls rendered as empty strings.
pub fn column_string_values(df: &DataFrame, name: &str) -> PolarsResult<Vec<String>> {
    let column = df.column(name)?;
    let mut values = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        values.push(any_to_string(column.get(idx).unwrap_or(AnyValue::Null)));
    }
    Ok(values)
}

/// Extract a column as strings, substituting `default` for null or blank
/// cells. Used where the original data needs a concrete placeholder, such
/// as `"0"` for an unset participation year.
pub fn string_column_or(df: &DataFrame, name: &str, default: &str) -> PolarsResult<Vec<String>> {
    let values = column_string_values(df, name)?;
    Ok(values
        .into_iter()
        .map(|value| {
            if value.trim().is_empty() {
                default.to_string()
            } else {
                value
            }
        })
        .collect())
}

/// Rename every column for presentation, in order.
pub fn set_display_columns(df: &mut DataFrame, labels: &[&str]) -> PolarsResult<()> {
    df.set_column_names(labels.iter().copied())
}
