//! Grouped aggregation.

use std::collections::BTreeMap;

use polars::prelude::{AnyValue, Column, DataFrame, NamedFrom, PolarsResult, Series};

use crate::values::{any_to_f64, any_to_string};

/// Group rows by a key column and sum a numeric column per group.
///
/// Output has one row per key in sorted key order, so reruns over the same
/// input produce identical artifacts. The total across groups equals the
/// total of the ungrouped input.
pub fn sum_by_key(df: &DataFrame, key: &str, value: &str) -> PolarsResult<DataFrame> {
    let key_column = df.column(key)?;
    let value_column = df.column(value)?;
    let mut totals: BTreeMap<String, f64> = BTreeMap::new();
    for idx in 0..df.height() {
        let group = any_to_string(key_column.get(idx).unwrap_or(AnyValue::Null));
        let amount = any_to_f64(value_column.get(idx).unwrap_or(AnyValue::Null)).unwrap_or(0.0);
        *totals.entry(group).or_insert(0.0) += amount;
    }
    let (keys, sums): (Vec<String>, Vec<f64>) = totals.into_iter().unzip();
    let columns: Vec<Column> = vec![
        Series::new(key.into(), keys).into(),
        Series::new(value.into(), sums).into(),
    ];
    DataFrame::new(columns)
}
