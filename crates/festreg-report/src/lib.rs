//! Export artifacts: CSV files, spreadsheet workbooks, and CSV bundles.
//!
//! Every writer targets a caller-chosen output directory with deterministic
//! filenames; rerunning a report overwrites the previous artifact.

pub mod archive;
pub mod csv_io;
pub mod encoding;
pub mod error;
pub mod workbook;

pub use archive::bundle_csv_files;
pub use csv_io::{read_frame_csv, write_frame_csv};
pub use encoding::CsvEncoding;
pub use error::{ReportError, Result};
pub use workbook::{SERIAL_LABEL, sanitize_sheet_name, write_event_sheet};
