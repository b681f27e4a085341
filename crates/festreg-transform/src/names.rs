//! Participant name-slot flattening.

use polars::prelude::{AnyValue, DataFrame, NamedFrom, PolarsResult, Series};

use crate::values::any_to_string;

/// The six optional name columns, in slot order.
pub const NAME_SLOT_COLUMNS: [&str; 6] = [
    "name_1", "name_2", "name_3", "name_4", "name_5", "name_6",
];

/// Flatten the six name slots into one newline-joined field per row.
///
/// Empty slots contribute only their separator: interior blanks survive as
/// blank lines, and trimming removes them only at the two ends. A row with
/// just `name_1` set therefore flattens to that single name.
pub fn combine_name_slots(df: &DataFrame) -> PolarsResult<Vec<String>> {
    let mut slots = Vec::with_capacity(NAME_SLOT_COLUMNS.len());
    for name in NAME_SLOT_COLUMNS {
        slots.push(df.column(name)?);
    }
    let mut combined = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let parts: Vec<String> = slots
            .iter()
            .map(|column| any_to_string(column.get(idx).unwrap_or(AnyValue::Null)))
            .collect();
        combined.push(parts.join("\n").trim().to_string());
    }
    Ok(combined)
}

/// Append the flattened names as a `name` column.
pub fn with_combined_names(df: &mut DataFrame) -> PolarsResult<()> {
    let names = combine_name_slots(df)?;
    df.with_column(Series::new("name".into(), names))?;
    Ok(())
}
