//! MySQL connectivity for the festreg reporting toolkit.
//!
//! The query layer accepts parameter-bound SQL and returns a polars
//! [`polars::prelude::DataFrame`] with database NULLs preserved as nulls,
//! so that downstream transforms own the fill policy.

pub mod conn;
pub mod error;
pub mod frame;

pub use conn::{connect, disable_strict_group_by};
pub use error::{DbError, Result};
pub use frame::{execute, query_frame};

// Re-exported so callers can build bound parameters without importing mysql.
pub use mysql::{Conn, Params, params};
