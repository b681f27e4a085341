use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while writing or reading export artifacts.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("file io error: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("csv error: {0}")]
    Csv(String),

    #[error("workbook error: {0}")]
    Workbook(String),

    #[error("archive error: {0}")]
    Archive(String),

    #[error("result frame error: {0}")]
    Frame(String),
}

impl ReportError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl From<csv::Error> for ReportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for ReportError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        Self::Workbook(err.to_string())
    }
}

impl From<zip::result::ZipError> for ReportError {
    fn from(err: zip::result::ZipError) -> Self {
        Self::Archive(err.to_string())
    }
}

impl From<polars::prelude::PolarsError> for ReportError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::Frame(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
