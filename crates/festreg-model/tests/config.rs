//! Tests for configuration loading and key resolution.

use std::io::Write;

use festreg_model::{ConfigError, load_config};

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp config");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn loads_database_params() {
    let file = write_config(
        r#"{
            "mysql_host": "localhost",
            "mysql_user": "admin",
            "mysql_pass": "secret",
            "mysql_db": "fest"
        }"#,
    );
    let config = load_config(file.path()).expect("load");
    let db = config.database().expect("database params");
    assert_eq!(db.host, "localhost");
    assert_eq!(db.db, "fest");
}

#[test]
fn missing_key_names_the_key() {
    let file = write_config(r#"{"mysql_host": "localhost"}"#);
    let config = load_config(file.path()).expect("load");
    let err = config.database().unwrap_err();
    match err {
        ConfigError::MissingKey(key) => assert_eq!(key, "mysql_user"),
        other => panic!("expected MissingKey, got {other}"),
    }
}

#[test]
fn unknown_keys_become_event_templates() {
    let file = write_config(
        r#"{
            "mysql_host": "h",
            "Spring Fest": "Your password is {password}"
        }"#,
    );
    let config = load_config(file.path()).expect("load");
    assert_eq!(
        config.template("Spring Fest").expect("template"),
        "Your password is {password}"
    );
    assert!(matches!(
        config.template("Trek"),
        Err(ConfigError::MissingKey(_))
    ));
}

#[test]
fn mailgun_api_alias_is_accepted() {
    let file = write_config(
        r#"{
            "mailgun_api": "https://api.mailgun.net/v3/x/messages",
            "mailgun_user": "api",
            "mailgun_key": "k",
            "mailgun_sender": "Fest <fest@example.com>"
        }"#,
    );
    let config = load_config(file.path()).expect("load");
    let mail = config.mailgun().expect("mail params");
    assert_eq!(mail.api_url, "https://api.mailgun.net/v3/x/messages");
}

#[test]
fn sms_api_url_defaults() {
    let file = write_config(
        r#"{
            "text_local_user": "u",
            "text_local_hash": "h",
            "text_local_sender": "FEST"
        }"#,
    );
    let config = load_config(file.path()).expect("load");
    let sms = config.textlocal().expect("sms params");
    assert_eq!(sms.api_url, festreg_model::config::DEFAULT_SMS_API_URL);
}

#[test]
fn required_scalar_keys_resolve_by_name() {
    let file = write_config(
        r#"{
            "receiver": "Admin <admin@example.com>",
            "subject": "Passwords for {event}",
            "text": "Entry counts attached."
        }"#,
    );
    let config = load_config(file.path()).expect("load");
    assert_eq!(config.required("text").expect("text"), "Entry counts attached.");
    assert_eq!(
        config.required("receiver").expect("receiver"),
        "Admin <admin@example.com>"
    );
    let err = config.required("sms_secret").unwrap_err();
    assert!(matches!(err, ConfigError::MissingKey(key) if key == "sms_secret"));
}

#[test]
fn invalid_json_is_a_parse_error() {
    let file = write_config("{not json");
    let err = load_config(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn absent_file_is_not_found() {
    let err = load_config(std::path::Path::new("/nonexistent/config.json")).unwrap_err();
    assert!(matches!(err, ConfigError::NotFound { .. }));
}
