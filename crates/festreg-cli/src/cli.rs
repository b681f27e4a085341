//! Command-line argument definitions for `festreg`.

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use festreg_cli::logging::LogFormat;
use std::path::PathBuf;

/// Festival registration reporting and notification toolkit.
#[derive(Debug, Parser)]
#[command(name = "festreg", version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file.
    #[arg(long, global = true, default_value = "config.json")]
    pub config: PathBuf,

    /// Directory where reports and archives are written.
    #[arg(long, global = true, default_value = ".")]
    pub output_dir: PathBuf,

    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    #[command(flatten)]
    pub color: Color,

    /// Pin the log level, overriding the verbosity flags.
    #[arg(long, global = true, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format.
    #[arg(long, global = true, value_enum, default_value_t = LogFormatArg::Pretty)]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow participant names and mobile numbers in log output.
    #[arg(long, global = true)]
    pub log_data: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format choices exposed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

/// Explicit log levels exposed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Pretty => Self::Pretty,
            LogFormatArg::Compact => Self::Compact,
            LogFormatArg::Json => Self::Json,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Export per-event entry counts and mail the CSV to the configured address.
    Entries {
        /// Only count participations with an id at or below this value.
        #[arg(long)]
        last_id: Option<u64>,
    },

    /// Export the day's registrations for an id range and mail the CSV.
    Daywise {
        /// Lowest participation id for the day.
        lower: u64,
        /// Highest participation id for the day.
        upper: u64,
        /// Event type excluded from the export.
        #[arg(long, default_value = "adventure")]
        exclude_type: String,
    },

    /// Write one attendance workbook per non-adventure event.
    Attendance {
        /// Event type excluded from attendance sheets.
        #[arg(long, default_value = "adventure")]
        exclude_type: String,
    },

    /// Write desk-wise registration and collection CSVs for an id range.
    DeskCollections {
        /// Lowest participation id for the day.
        lower: u64,
        /// Highest participation id for the day.
        upper: u64,
        /// Date label for the output files (defaults to today, DD-MM-YYYY).
        #[arg(long)]
        date: Option<String>,
    },

    /// Export year-wise participation counts per event, zip them, and mail
    /// the archive.
    YearWise {
        /// Event type to report on.
        event_type: String,
        /// Department whose events are reported.
        department: String,
    },

    /// Send attendance-token SMS messages to an event's participants.
    SmsInfo {
        /// Event whose participants are notified.
        event: String,
    },

    /// Mail every event manager their derived portal password.
    ManagerPasswords,

    /// Update participant mobile numbers for an event from a CSV file.
    UpdateMobile {
        /// Event whose participations are updated.
        event: String,
        /// CSV file with `name` and `mobile` columns.
        csv: PathBuf,
    },

    /// List all events in a table.
    Events,
}
