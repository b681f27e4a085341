//! JSON configuration loading.
//!
//! Every key is optional at parse time and required at use time: each
//! subcommand asks only for the parameter groups it needs, and a missing
//! key surfaces as [`ConfigError::MissingKey`] naming the key. Unrecognized
//! top-level keys are kept as per-event message templates.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ConfigError, Result};

/// Default SMS gateway endpoint, overridable via `text_local_api_url`.
pub const DEFAULT_SMS_API_URL: &str = "https://api.textlocal.in/send/";

/// Raw configuration document.
#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    pub mysql_host: Option<String>,
    pub mysql_user: Option<String>,
    pub mysql_pass: Option<String>,
    pub mysql_db: Option<String>,

    #[serde(alias = "mailgun_api")]
    pub mailgun_api_url: Option<String>,
    pub mailgun_user: Option<String>,
    pub mailgun_key: Option<String>,
    pub mailgun_sender: Option<String>,
    pub receiver: Option<String>,
    pub subject: Option<String>,
    pub text: Option<String>,

    pub text_local_api_url: Option<String>,
    pub text_local_user: Option<String>,
    pub text_local_hash: Option<String>,
    pub text_local_sender: Option<String>,

    pub sms_secret: Option<String>,
    pub manager_secret: Option<String>,

    /// Per-event message templates keyed by event name.
    #[serde(flatten)]
    pub templates: BTreeMap<String, String>,
}

/// Database connection parameters.
#[derive(Debug, Clone)]
pub struct DbParams {
    pub host: String,
    pub user: String,
    pub pass: String,
    pub db: String,
}

/// Mail API parameters.
#[derive(Debug, Clone)]
pub struct MailParams {
    pub api_url: String,
    pub user: String,
    pub key: String,
    pub sender: String,
}

/// SMS gateway parameters.
#[derive(Debug, Clone)]
pub struct SmsParams {
    pub api_url: String,
    pub user: String,
    pub hash: String,
    pub sender: String,
}

impl AppConfig {
    /// Database credentials, required by every subcommand.
    pub fn database(&self) -> Result<DbParams> {
        Ok(DbParams {
            host: require(&self.mysql_host, "mysql_host")?,
            user: require(&self.mysql_user, "mysql_user")?,
            pass: require(&self.mysql_pass, "mysql_pass")?,
            db: require(&self.mysql_db, "mysql_db")?,
        })
    }

    /// Mail API credentials for the notifying subcommands.
    pub fn mailgun(&self) -> Result<MailParams> {
        Ok(MailParams {
            api_url: require(&self.mailgun_api_url, "mailgun_api_url")?,
            user: require(&self.mailgun_user, "mailgun_user")?,
            key: require(&self.mailgun_key, "mailgun_key")?,
            sender: require(&self.mailgun_sender, "mailgun_sender")?,
        })
    }

    /// SMS gateway credentials.
    pub fn textlocal(&self) -> Result<SmsParams> {
        Ok(SmsParams {
            api_url: self
                .text_local_api_url
                .clone()
                .unwrap_or_else(|| DEFAULT_SMS_API_URL.to_string()),
            user: require(&self.text_local_user, "text_local_user")?,
            hash: require(&self.text_local_hash, "text_local_hash")?,
            sender: require(&self.text_local_sender, "text_local_sender")?,
        })
    }

    /// The message template for an event, keyed by event name.
    pub fn template(&self, event: &str) -> Result<&str> {
        self.templates
            .get(event)
            .map(String::as_str)
            .ok_or_else(|| ConfigError::MissingKey(event.to_string()))
    }

    /// A required scalar key, by name.
    pub fn required(&self, key: &str) -> Result<String> {
        let value = match key {
            "receiver" => &self.receiver,
            "subject" => &self.subject,
            "text" => &self.text,
            "sms_secret" => &self.sms_secret,
            "manager_secret" => &self.manager_secret,
            _ => &None,
        };
        require(value, key)
    }
}

fn require(value: &Option<String>, key: &str) -> Result<String> {
    value
        .clone()
        .ok_or_else(|| ConfigError::MissingKey(key.to_string()))
}

/// Load and parse the JSON configuration file.
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::NotFound {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
