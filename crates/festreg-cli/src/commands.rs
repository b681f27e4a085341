//! Subcommand entry points.
//!
//! Each `run_*` function owns one subcommand end to end: load configuration,
//! connect, query, hand frames to the pipeline stages, and send any
//! notifications. Sends are fire-and-log: the provider response is recorded
//! at info level and never branched on.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};
use indicatif::ProgressBar;
use tracing::{debug, info, warn};

use festreg_db::{Conn, params, query_frame};
use festreg_model::AppConfig;
use festreg_notify::{MailMessage, Mailer, SmsGateway};
use festreg_report::{CsvEncoding, bundle_csv_files, write_frame_csv};
use festreg_transform::{column_string_values, drop_rows_with_missing};

use crate::cli::Cli;
use festreg_cli::logging::redact_value;
use festreg_cli::pipeline::{
    attendance_workbooks, credentials_by_event, daywise_table, desk_outputs, entries_table,
    events_from_frame, manager_credentials, read_mobile_updates, sms_batch, year_wise_csvs,
};

/// Per-event participation counts over the whole table. The daywise report
/// exports these alongside its range-limited detail, so the totals stay a
/// till-date snapshot no matter which id range the run covers.
const TILL_DATE_COUNTS_SQL: &str = "SELECT event, COUNT(*) AS entries FROM participations \
     GROUP BY event ORDER BY entries DESC";

fn load_config(cli: &Cli) -> Result<AppConfig> {
    festreg_model::load_config(&cli.config)
        .with_context(|| format!("load configuration from {}", cli.config.display()))
}

fn connect(config: &AppConfig) -> Result<Conn> {
    let params = config.database()?;
    let conn = festreg_db::connect(&params)?;
    Ok(conn)
}

fn ensure_output_dir(cli: &Cli) -> Result<()> {
    fs::create_dir_all(&cli.output_dir)
        .with_context(|| format!("create output directory {}", cli.output_dir.display()))
}

/// Mail one message and record the provider's answer without branching on it.
fn send_report_mail(config: &AppConfig, message: MailMessage) -> Result<()> {
    let mailer = Mailer::new(config.mailgun()?)?;
    let response = mailer.send(&message)?;
    info!(
        to = %message.to,
        subject = %message.subject,
        status = response.status,
        body = %response.body,
        "report mailed"
    );
    Ok(())
}

pub fn run_entries(cli: &Cli, last_id: Option<u64>) -> Result<()> {
    let config = load_config(cli)?;
    ensure_output_dir(cli)?;
    let mut conn = connect(&config)?;
    festreg_db::disable_strict_group_by(&mut conn)?;

    let counts = match last_id {
        Some(last_id) => query_frame(
            &mut conn,
            "SELECT event, COUNT(*) AS entries FROM participations \
             WHERE id <= :last_id GROUP BY event ORDER BY entries DESC",
            params! { "last_id" => last_id },
        )?,
        None => query_frame(&mut conn, TILL_DATE_COUNTS_SQL, ())?,
    };
    info!(events = counts.height(), "entry counts fetched");

    let table = entries_table(&counts)?;
    let date = Local::now().format("%Y-%m-%d").to_string();
    let path = cli
        .output_dir
        .join(format!("Event wise entries upto {date}.csv"));
    write_frame_csv(&table, &path, CsvEncoding::Utf8)?;
    info!(path = %path.display(), "entry counts written");

    send_report_mail(
        &config,
        MailMessage {
            to: config.required("receiver")?,
            subject: format!("Total entries up to {date}"),
            text: config.required("text")?,
            attachment: Some(path),
        },
    )
}

pub fn run_daywise(cli: &Cli, lower: u64, upper: u64, exclude_type: &str) -> Result<()> {
    let config = load_config(cli)?;
    ensure_output_dir(cli)?;
    let mut conn = connect(&config)?;
    festreg_db::disable_strict_group_by(&mut conn)?;

    let counts = query_frame(&mut conn, TILL_DATE_COUNTS_SQL, ())?;
    let totals = entries_table(&counts)?;
    let totals_path = cli.output_dir.join("total.csv");
    write_frame_csv(&totals, &totals_path, CsvEncoding::Utf8)?;
    info!(path = %totals_path.display(), "till-date per-event totals written");

    let registrations = query_frame(
        &mut conn,
        "SELECT p.receipt_no, p.name_1, p.name_2, p.name_3, p.name_4, p.name_5, p.name_6, \
         p.event, p.year, p.mobile \
         FROM participations p JOIN events e ON p.event = e.name \
         WHERE p.id >= :lower AND p.id <= :upper AND e.type != :exclude",
        params! { "lower" => lower, "upper" => upper, "exclude" => exclude_type },
    )?;
    info!(rows = registrations.height(), lower, upper, "day's registrations fetched");

    let table = daywise_table(&registrations)?;
    let date = Local::now().format("%Y-%m-%d").to_string();
    let path = cli.output_dir.join(format!("Entries on {date}.csv"));
    write_frame_csv(&table, &path, CsvEncoding::Utf8)?;
    info!(path = %path.display(), "day-wise detail written");

    send_report_mail(
        &config,
        MailMessage {
            to: config.required("receiver")?,
            subject: format!("Entries on {date}"),
            text: format!("Registrations recorded on {date} attached."),
            attachment: Some(path),
        },
    )
}

pub fn run_attendance(cli: &Cli, exclude_type: &str) -> Result<()> {
    let config = load_config(cli)?;
    ensure_output_dir(cli)?;
    let mut conn = connect(&config)?;

    let events = query_frame(&mut conn, "SELECT name, type FROM events", ())?;
    let written = attendance_workbooks(
        &events,
        exclude_type,
        |event| {
            let frame = query_frame(
                &mut conn,
                "SELECT receipt_no, name_1, name_2, name_3, name_4, name_5, name_6, mobile \
                 FROM participations WHERE event = :event",
                params! { "event" => event },
            )?;
            Ok(frame)
        },
        &cli.output_dir,
    )?;
    info!(workbooks = written.len(), "attendance workbooks written");
    Ok(())
}

pub fn run_desk_collections(cli: &Cli, lower: u64, upper: u64, date: Option<&str>) -> Result<()> {
    let config = load_config(cli)?;
    ensure_output_dir(cli)?;
    let mut conn = connect(&config)?;

    let registrations = query_frame(
        &mut conn,
        "SELECT p.id, p.receipt_no, p.event, e.fees \
         FROM participations p JOIN events e ON p.event = e.name \
         WHERE p.id >= :lower AND p.id <= :upper",
        params! { "lower" => lower, "upper" => upper },
    )?;
    info!(rows = registrations.height(), lower, upper, "desk registrations fetched");

    let date_label = match date {
        Some(date) => date.to_string(),
        None => Local::now().format("%d-%m-%Y").to_string(),
    };
    desk_outputs(&registrations, &date_label, &cli.output_dir)?;
    Ok(())
}

pub fn run_year_wise(cli: &Cli, event_type: &str, department: &str) -> Result<()> {
    let config = load_config(cli)?;
    ensure_output_dir(cli)?;
    let mut conn = connect(&config)?;
    festreg_db::disable_strict_group_by(&mut conn)?;

    let events_frame = query_frame(
        &mut conn,
        "SELECT name FROM events WHERE type = :event_type AND department = :department",
        params! { "event_type" => event_type, "department" => department },
    )?;
    let events = column_string_values(&events_frame, "name")?;
    info!(events = events.len(), event_type, department, "events fetched");

    // Per-event CSVs land in their own directory so the archive picks up
    // exactly this run's files.
    let stage_dir = cli.output_dir.join(format!("{event_type}_{department}"));
    fs::create_dir_all(&stage_dir)
        .with_context(|| format!("create staging directory {}", stage_dir.display()))?;
    year_wise_csvs(
        &events,
        |event| {
            let frame = query_frame(
                &mut conn,
                "SELECT year, COUNT(*) AS count FROM participations \
                 WHERE event = :event GROUP BY year",
                params! { "event" => event },
            )?;
            Ok(frame)
        },
        &stage_dir,
    )?;

    let zip_path = cli.output_dir.join(format!("{event_type}_{department}.zip"));
    let bundled = bundle_csv_files(&stage_dir, &zip_path)?;
    info!(files = bundled.len(), path = %zip_path.display(), "year-wise archive written");

    send_report_mail(
        &config,
        MailMessage {
            to: config.required("receiver")?,
            subject: "Year wise participations".to_string(),
            text: format!(
                "Year wise participations for each {event_type} event for \
                 {department} Department"
            ),
            attachment: Some(zip_path),
        },
    )
}

pub fn run_sms_info(cli: &Cli, event: &str) -> Result<()> {
    let config = load_config(cli)?;
    let mut conn = connect(&config)?;

    let participants = query_frame(
        &mut conn,
        "SELECT name_1, mobile FROM participations WHERE event = :event",
        params! { "event" => event },
    )?;
    info!(event, rows = participants.height(), "participants fetched");

    let template = config.template(event)?;
    let secret = config.required("sms_secret")?;
    let batch = sms_batch(&participants, template, &secret)?;

    let gateway = SmsGateway::new(config.textlocal()?)?;
    let progress = ProgressBar::new(batch.len() as u64);
    let mut failures = 0usize;
    for message in &batch {
        match gateway.send(message) {
            Ok(response) => info!(
                to = redact_value(&message.number),
                status = response.status,
                body = %response.body,
                "sms sent"
            ),
            Err(error) => {
                failures += 1;
                warn!(to = redact_value(&message.number), %error, "sms send failed");
            }
        }
        progress.inc(1);
    }
    progress.finish_and_clear();
    info!(sent = batch.len() - failures, failed = failures, "sms batch finished");
    Ok(())
}

pub fn run_manager_passwords(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let mut conn = connect(&config)?;

    let managers = query_frame(&mut conn, "SELECT event, email FROM event_managers", ())?;
    let managers = drop_rows_with_missing(&managers)?;
    let secret = config.required("manager_secret")?;
    let subject_template = config.required("subject")?;
    let text_template = config.required("text")?;
    let credentials = manager_credentials(&managers, &secret)?;
    for (event, group) in credentials_by_event(&credentials) {
        debug!(event, managers = group.len(), "manager passwords prepared");
    }

    let mailer = Mailer::new(config.mailgun()?)?;
    let progress = ProgressBar::new(credentials.len() as u64);
    let mut failures = 0usize;
    for credential in &credentials {
        let message = MailMessage {
            to: format!("<{}>", credential.email),
            subject: subject_template.replace("{event}", &credential.event),
            text: text_template
                .replace("{event}", &credential.event)
                .replace("{password}", &credential.password),
            attachment: None,
        };
        match mailer.send(&message) {
            Ok(response) => info!(
                event = %credential.event,
                status = response.status,
                body = %response.body,
                "manager password mailed"
            ),
            Err(error) => {
                failures += 1;
                warn!(event = %credential.event, %error, "manager mail failed");
            }
        }
        progress.inc(1);
    }
    progress.finish_and_clear();
    info!(
        sent = credentials.len() - failures,
        failed = failures,
        "manager password run finished"
    );
    Ok(())
}

pub fn run_update_mobile(cli: &Cli, event: &str, csv: &Path) -> Result<()> {
    let config = load_config(cli)?;
    let updates = read_mobile_updates(csv)?;
    let mut conn = connect(&config)?;

    let mut changed = 0u64;
    for update in &updates {
        let affected = festreg_db::execute(
            &mut conn,
            "UPDATE participations SET mobile = :mobile \
             WHERE event = :event AND name_1 = :name",
            params! {
                "mobile" => update.mobile.as_str(),
                "event" => event,
                "name" => update.name.as_str(),
            },
        )?;
        if affected == 0 {
            warn!(name = redact_value(&update.name), "no participation matched");
        }
        changed += affected;
    }
    info!(event, updates = updates.len(), changed, "mobile numbers updated");
    Ok(())
}

pub fn run_events(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let mut conn = connect(&config)?;

    let frame = query_frame(
        &mut conn,
        "SELECT name, type, department, fees FROM events ORDER BY name",
        (),
    )?;
    let events = events_from_frame(&frame)?;
    println!("{}", events_listing(&events));
    Ok(())
}

fn events_listing(events: &[festreg_model::Event]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Event", "Type", "Department", "Fees"]);
    for event in events {
        table.add_row(vec![
            event.name.clone(),
            event.event_type.clone(),
            event.department.clone(),
            format!("{:.2}", event.fees),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::TILL_DATE_COUNTS_SQL;

    #[test]
    fn till_date_counts_have_no_row_bound() {
        assert!(!TILL_DATE_COUNTS_SQL.contains("WHERE"));
        assert!(TILL_DATE_COUNTS_SQL.contains("GROUP BY event"));
    }
}
