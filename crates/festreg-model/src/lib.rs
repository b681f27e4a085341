//! Core entities and configuration for the festreg reporting toolkit.

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, DbParams, MailParams, SmsParams, load_config};
pub use error::{ConfigError, Result};
pub use types::{Event, NAME_SLOTS, Participation};
