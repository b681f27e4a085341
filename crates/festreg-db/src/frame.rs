//! Result-set to DataFrame conversion.
//!
//! Column dtypes are elected from the values the server actually returned:
//! all-integer columns become Int64, mixed numeric columns Float64, and
//! everything else String. NULLs stay null in every case.

use mysql::prelude::Queryable;
use mysql::{Conn, Params, Value};
use polars::prelude::{Column, DataFrame, NamedFrom, Series};
use tracing::debug;

use crate::error::{DbError, Result};

/// Execute a parameter-bound SELECT and return the result table.
pub fn query_frame<P>(conn: &mut Conn, sql: &str, params: P) -> Result<DataFrame>
where
    P: Into<Params>,
{
    let mut result = conn
        .exec_iter(sql, params)
        .map_err(|err| DbError::Query(format!("{sql}: {err}")))?;

    let names: Vec<String> = result
        .columns()
        .as_ref()
        .iter()
        .map(|column| column.name_str().into_owned())
        .collect();

    let mut cells: Vec<Vec<Value>> = vec![Vec::new(); names.len()];
    for row in result.by_ref() {
        let row = row.map_err(|err| DbError::Query(err.to_string()))?;
        for (idx, value) in row.unwrap().into_iter().enumerate() {
            if let Some(slot) = cells.get_mut(idx) {
                slot.push(value);
            }
        }
    }

    let columns: Vec<Column> = names
        .iter()
        .zip(&cells)
        .map(|(name, values)| build_column(name, values))
        .collect();
    let frame = DataFrame::new(columns)?;
    debug!(rows = frame.height(), cols = frame.width(), "query returned");
    Ok(frame)
}

/// Execute a parameter-bound statement that returns no rows (UPDATE).
pub fn execute<P>(conn: &mut Conn, sql: &str, params: P) -> Result<u64>
where
    P: Into<Params>,
{
    conn.exec_drop(sql, params)
        .map_err(|err| DbError::Query(format!("{sql}: {err}")))?;
    Ok(conn.affected_rows())
}

/// Column dtype election over one column's values.
fn build_column(name: &str, values: &[Value]) -> Column {
    let mut all_int = true;
    let mut all_numeric = true;
    let mut any_value = false;
    for value in values {
        match value {
            Value::NULL => {}
            Value::Int(_) => any_value = true,
            Value::UInt(v) => {
                any_value = true;
                if i64::try_from(*v).is_err() {
                    all_int = false;
                }
            }
            Value::Float(_) | Value::Double(_) => {
                any_value = true;
                all_int = false;
            }
            _ => {
                any_value = true;
                all_int = false;
                all_numeric = false;
            }
        }
    }

    if any_value && all_int {
        let ints: Vec<Option<i64>> = values.iter().map(value_to_i64).collect();
        return Series::new(name.into(), ints).into();
    }
    if any_value && all_numeric {
        let floats: Vec<Option<f64>> = values.iter().map(value_to_f64).collect();
        return Series::new(name.into(), floats).into();
    }
    let strings: Vec<Option<String>> = values.iter().map(value_to_string).collect();
    Series::new(name.into(), strings).into()
}

fn value_to_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Int(v) => Some(*v),
        Value::UInt(v) => i64::try_from(*v).ok(),
        _ => None,
    }
}

fn value_to_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Int(v) => Some(*v as f64),
        Value::UInt(v) => Some(*v as f64),
        Value::Float(v) => Some(f64::from(*v)),
        Value::Double(v) => Some(*v),
        _ => None,
    }
}

fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::NULL => None,
        Value::Bytes(bytes) => Some(String::from_utf8_lossy(bytes).into_owned()),
        Value::Int(v) => Some(v.to_string()),
        Value::UInt(v) => Some(v.to_string()),
        Value::Float(v) => Some(v.to_string()),
        Value::Double(v) => Some(v.to_string()),
        Value::Date(year, month, day, hour, minute, second, micros) => {
            if *hour == 0 && *minute == 0 && *second == 0 && *micros == 0 {
                Some(format!("{year:04}-{month:02}-{day:02}"))
            } else {
                Some(format!(
                    "{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}"
                ))
            }
        }
        Value::Time(negative, days, hours, minutes, seconds, _micros) => {
            let sign = if *negative { "-" } else { "" };
            let total_hours = u32::from(*hours) + days * 24;
            Some(format!("{sign}{total_hours:02}:{minutes:02}:{seconds:02}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::DataType;

    #[test]
    fn all_int_column_is_int64() {
        let column = build_column("id", &[Value::Int(1), Value::NULL, Value::UInt(3)]);
        assert_eq!(column.dtype(), &DataType::Int64);
        assert_eq!(column.len(), 3);
        assert_eq!(column.null_count(), 1);
    }

    #[test]
    fn mixed_numeric_column_is_float64() {
        let column = build_column("fees", &[Value::Int(100), Value::Double(49.5)]);
        assert_eq!(column.dtype(), &DataType::Float64);
    }

    #[test]
    fn text_column_preserves_nulls() {
        let column = build_column(
            "event",
            &[Value::Bytes(b"Spring Fest".to_vec()), Value::NULL],
        );
        assert_eq!(column.dtype(), &DataType::String);
        assert_eq!(column.null_count(), 1);
    }

    #[test]
    fn empty_result_is_a_string_column() {
        let column = build_column("name", &[]);
        assert_eq!(column.dtype(), &DataType::String);
        assert_eq!(column.len(), 0);
    }

    #[test]
    fn date_values_render_date_only_when_midnight() {
        assert_eq!(
            value_to_string(&Value::Date(2026, 2, 14, 0, 0, 0, 0)),
            Some("2026-02-14".to_string())
        );
        assert_eq!(
            value_to_string(&Value::Date(2026, 2, 14, 9, 30, 0, 0)),
            Some("2026-02-14 09:30:00".to_string())
        );
    }
}
