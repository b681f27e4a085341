//! Pure, synchronous result-table transforms.
//!
//! Every function here takes a polars `DataFrame` (or a cell value) and
//! returns new data; nothing touches the database or the filesystem.

pub mod aggregate;
pub mod columns;
pub mod desk;
pub mod filter;
pub mod names;
pub mod serial;
pub mod token;
pub mod values;

pub use aggregate::sum_by_key;
pub use columns::{column_string_values, set_display_columns, string_column_or};
pub use desk::{desk_code, with_desk_column};
pub use filter::{drop_rows_with_missing, exclude_event_type};
pub use names::{NAME_SLOT_COLUMNS, combine_name_slots, with_combined_names};
pub use serial::serial_index;
pub use token::{MANAGER_TOKEN_LEN, SMS_TOKEN_LEN, derive_token};
pub use values::{any_to_f64, any_to_i64, any_to_string, mobile_digits};
