//! Report-building pipeline stages.
//!
//! Every stage in this module takes already-fetched data frames (or a fetch
//! closure) and produces frames, files, or message batches. Nothing here
//! touches the database or the network directly, which keeps the stages
//! testable with in-memory frames.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use polars::prelude::{AnyValue, Column, DataFrame, NamedFrom, Series};
use tracing::{debug, info, warn};

use festreg_model::Event;
use festreg_notify::SmsMessage;
use festreg_report::{CsvEncoding, read_frame_csv, write_event_sheet, write_frame_csv};
use festreg_transform::{
    MANAGER_TOKEN_LEN, SMS_TOKEN_LEN, any_to_f64, any_to_string, derive_token, exclude_event_type,
    mobile_digits, set_display_columns, string_column_or, sum_by_key, with_combined_names,
    with_desk_column,
};

use crate::logging::redact_value;

// ============================================================================
// Event listing
// ============================================================================

/// Typed view of an events frame with `name`, `type`, `department`, and
/// `fees` columns.
pub fn events_from_frame(frame: &DataFrame) -> Result<Vec<Event>> {
    let names = frame.column("name")?;
    let types = frame.column("type")?;
    let departments = frame.column("department")?;
    let fees = frame.column("fees")?;
    let mut events = Vec::with_capacity(frame.height());
    for idx in 0..frame.height() {
        events.push(Event {
            name: any_to_string(names.get(idx).unwrap_or(AnyValue::Null)),
            event_type: any_to_string(types.get(idx).unwrap_or(AnyValue::Null)),
            department: any_to_string(departments.get(idx).unwrap_or(AnyValue::Null)),
            fees: any_to_f64(fees.get(idx).unwrap_or(AnyValue::Null)).unwrap_or(0.0),
        });
    }
    Ok(events)
}

// ============================================================================
// Entry counts
// ============================================================================

/// Relabel an event/entries count frame for export.
pub fn entries_table(counts: &DataFrame) -> Result<DataFrame> {
    let mut table = counts.clone();
    set_display_columns(&mut table, &["Event Name", "No. of entries"])?;
    debug!(rows = table.height(), "entry counts prepared");
    Ok(table)
}

// ============================================================================
// Day-wise registrations
// ============================================================================

/// Flatten name slots and relabel a day's registration detail for export.
///
/// Rows keep their original order. Missing years are exported as "0".
pub fn daywise_table(registrations: &DataFrame) -> Result<DataFrame> {
    let mut detail = registrations.clone();
    with_combined_names(&mut detail)?;
    let years = string_column_or(&detail, "year", "0")?;
    detail.with_column(Series::new("year".into(), years))?;
    let mut table = detail.select(["receipt_no", "name", "event", "year", "mobile"])?;
    set_display_columns(&mut table, &["Receipt No.", "Name", "Event", "Year", "Mobile"])?;
    debug!(rows = table.height(), "day-wise detail prepared");
    Ok(table)
}

// ============================================================================
// Attendance workbooks
// ============================================================================

/// Write one attendance workbook per event, skipping the excluded type.
///
/// `fetch` is called once per remaining event with the event name and must
/// return a frame with `receipt_no`, the six name slots, and `mobile`.
pub fn attendance_workbooks<F>(
    events: &DataFrame,
    exclude_type: &str,
    mut fetch: F,
    out_dir: &Path,
) -> Result<Vec<PathBuf>>
where
    F: FnMut(&str) -> Result<DataFrame>,
{
    let kept = exclude_event_type(events, exclude_type)?;
    let names = kept.column("name")?;
    let mut written = Vec::with_capacity(kept.height());
    for idx in 0..kept.height() {
        let event = any_to_string(names.get(idx).unwrap_or(AnyValue::Null));
        let mut roster = fetch(&event).with_context(|| format!("fetch roster for {event}"))?;
        with_combined_names(&mut roster)?;
        let mut sheet = roster.select(["receipt_no", "name", "mobile"])?;
        set_display_columns(&mut sheet, &["Receipt No.", "Name", "Mobile"])?;
        let path = out_dir.join(format!("{event}.xlsx"));
        write_event_sheet(&sheet, &event, &path)?;
        info!(event, path = %path.display(), rows = sheet.height(), "attendance workbook written");
        written.push(path);
    }
    Ok(written)
}

// ============================================================================
// Desk collections
// ============================================================================

/// Per-desk registration detail and collection totals for one day.
///
/// The detail CSV is written first, then read back, so both files always
/// agree on row content and encoding. Files are named after `date_label`.
pub fn desk_outputs(
    registrations: &DataFrame,
    date_label: &str,
    out_dir: &Path,
) -> Result<(PathBuf, PathBuf)> {
    let mut detail = registrations.clone();
    with_desk_column(&mut detail, "receipt_no")?;
    let detail_path = out_dir.join(format!("{date_label}.csv"));
    write_frame_csv(&detail, &detail_path, CsvEncoding::Latin1)?;
    info!(path = %detail_path.display(), rows = detail.height(), "desk detail written");

    let reread = read_frame_csv(&detail_path, CsvEncoding::Latin1)?;
    let mut totals = sum_by_key(&reread, "desk", "fees")?;
    set_display_columns(&mut totals, &["Desk", "Collection"])?;
    let totals_path = out_dir.join(format!("{date_label} collections.csv"));
    write_frame_csv(&totals, &totals_path, CsvEncoding::Latin1)?;
    info!(path = %totals_path.display(), desks = totals.height(), "desk collections written");
    Ok((detail_path, totals_path))
}

// ============================================================================
// Year-wise counts
// ============================================================================

/// Write one year/count CSV per event and return the written paths.
///
/// `fetch` must return a frame with `year` and `count` columns for the
/// given event. Unset years are exported as "0". Events with no
/// participations still produce a file.
pub fn year_wise_csvs<F>(events: &[String], mut fetch: F, out_dir: &Path) -> Result<Vec<PathBuf>>
where
    F: FnMut(&str) -> Result<DataFrame>,
{
    let mut written = Vec::with_capacity(events.len());
    for event in events {
        let mut table = fetch(event).with_context(|| format!("fetch year counts for {event}"))?;
        let years = string_column_or(&table, "year", "0")?;
        table.with_column(Series::new("year".into(), years))?;
        set_display_columns(&mut table, &["Year", "No. of participations"])?;
        let path = out_dir.join(format!("{event}.csv"));
        write_frame_csv(&table, &path, CsvEncoding::Utf8)?;
        debug!(event, path = %path.display(), "year-wise counts written");
        written.push(path);
    }
    Ok(written)
}

// ============================================================================
// SMS batches
// ============================================================================

/// Build the attendance-token SMS batch for one event's participants.
///
/// Rows without a usable mobile number are skipped with a warning. The
/// token is derived from the mobile number, so resends carry the same
/// token. The template's `{password}` placeholder receives the token.
pub fn sms_batch(participants: &DataFrame, template: &str, secret: &str) -> Result<Vec<SmsMessage>> {
    if !template.contains("{password}") {
        bail!("sms template has no {{password}} placeholder");
    }
    let names = participants.column("name_1")?;
    let mobiles = participants.column("mobile")?;
    let mut batch = Vec::with_capacity(participants.height());
    for idx in 0..participants.height() {
        let name = any_to_string(names.get(idx).unwrap_or(AnyValue::Null));
        let Some(mobile) = mobile_digits(mobiles.get(idx).unwrap_or(AnyValue::Null)) else {
            warn!(
                name = redact_value(&name),
                "skipping participant without a mobile number"
            );
            continue;
        };
        let token = derive_token(secret, &mobile, SMS_TOKEN_LEN);
        batch.push(SmsMessage {
            number: mobile,
            message: template.replace("{password}", &token),
            custom: name,
        });
    }
    debug!(messages = batch.len(), "sms batch prepared");
    Ok(batch)
}

// ============================================================================
// Mobile number updates
// ============================================================================

/// A single mobile-number correction read from an upload CSV.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MobileUpdate {
    pub name: String,
    pub mobile: String,
}

/// Read name/mobile pairs from a CSV file.
///
/// The file must have `name` and `mobile` columns; header matching is
/// case-insensitive so operator files with `Name`/`Mobile` headers keep
/// working. Rows with a blank name or a mobile value without digits are
/// skipped with a warning.
pub fn read_mobile_updates(path: &Path) -> Result<Vec<MobileUpdate>> {
    let frame = read_frame_csv(path, CsvEncoding::Utf8)?;
    let names = column_ignore_case(&frame, "name")
        .with_context(|| format!("{} has no name column", path.display()))?;
    let mobiles = column_ignore_case(&frame, "mobile")
        .with_context(|| format!("{} has no mobile column", path.display()))?;
    let mut updates = Vec::with_capacity(frame.height());
    for idx in 0..frame.height() {
        let name = any_to_string(names.get(idx).unwrap_or(AnyValue::Null));
        let mobile = mobile_digits(mobiles.get(idx).unwrap_or(AnyValue::Null));
        match (name.trim().is_empty(), mobile) {
            (false, Some(mobile)) => updates.push(MobileUpdate { name, mobile }),
            _ => warn!(row = idx + 1, "skipping row without usable name and mobile"),
        }
    }
    Ok(updates)
}

fn column_ignore_case<'a>(frame: &'a DataFrame, wanted: &str) -> Option<&'a Column> {
    frame
        .get_columns()
        .iter()
        .find(|column| column.name().eq_ignore_ascii_case(wanted))
}

// ============================================================================
// Manager passwords
// ============================================================================

/// One manager notification: event, address, and derived password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagerCredential {
    pub event: String,
    pub email: String,
    pub password: String,
}

/// Derive portal passwords for each event manager row.
///
/// The password is keyed on the manager's email address, so a resend
/// always carries the same password for the same recipient. Rows without
/// an email are skipped.
pub fn manager_credentials(managers: &DataFrame, secret: &str) -> Result<Vec<ManagerCredential>> {
    let events = managers.column("event")?;
    let emails = managers.column("email")?;
    let mut credentials = Vec::with_capacity(managers.height());
    for idx in 0..managers.height() {
        let event = any_to_string(events.get(idx).unwrap_or(AnyValue::Null));
        let email = any_to_string(emails.get(idx).unwrap_or(AnyValue::Null));
        if email.trim().is_empty() {
            warn!(event, "skipping manager row without an email address");
            continue;
        }
        let password = derive_token(secret, &email, MANAGER_TOKEN_LEN);
        credentials.push(ManagerCredential {
            event,
            email,
            password,
        });
    }
    Ok(credentials)
}

/// Group credential rows by event, preserving derivation order per event.
pub fn credentials_by_event(
    credentials: &[ManagerCredential],
) -> BTreeMap<String, Vec<&ManagerCredential>> {
    let mut grouped: BTreeMap<String, Vec<&ManagerCredential>> = BTreeMap::new();
    for credential in credentials {
        grouped
            .entry(credential.event.clone())
            .or_default()
            .push(credential);
    }
    grouped
}
