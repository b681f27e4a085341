use thiserror::Error;

/// Errors raised by the database layer.
#[derive(Debug, Error)]
pub enum DbError {
    /// Could not establish a connection to the server.
    #[error("database connection error: {0}")]
    Connection(String),

    /// The server rejected or failed a query.
    #[error("database query error: {0}")]
    Query(String),

    /// The result set could not be shaped into a DataFrame.
    #[error("result frame error: {0}")]
    Frame(String),
}

impl From<polars::prelude::PolarsError> for DbError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::Frame(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
