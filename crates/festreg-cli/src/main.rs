//! Festival registration reporting CLI.

use clap::{ColorChoice, Parser};
use festreg_cli::logging::{LogConfig, init_logging};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;

use crate::cli::{Cli, Command, LogLevelArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Command::Entries { last_id } => commands::run_entries(cli, *last_id),
        Command::Daywise {
            lower,
            upper,
            exclude_type,
        } => commands::run_daywise(cli, *lower, *upper, exclude_type),
        Command::Attendance { exclude_type } => commands::run_attendance(cli, exclude_type),
        Command::DeskCollections { lower, upper, date } => {
            commands::run_desk_collections(cli, *lower, *upper, date.as_deref())
        }
        Command::YearWise {
            event_type,
            department,
        } => commands::run_year_wise(cli, event_type, department),
        Command::SmsInfo { event } => commands::run_sms_info(cli, event),
        Command::ManagerPasswords => commands::run_manager_passwords(cli),
        Command::UpdateMobile { event, csv } => commands::run_update_mobile(cli, event, csv),
        Command::Events => commands::run_events(cli),
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = cli.log_format.into();
    config.log_file = cli.log_file.clone();
    config.log_data = cli.log_data;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
