//! Raw-record validation and shift construction.
//!
//! This module turns loosely-typed attendance records into validated
//! [`Shift`] entities. Each timestamp field parses through an explicit list
//! of accepted formats into a tagged result; records with no usable entry
//! are dropped silently, entry-only records become open entries, and
//! inverted intervals are counted invalid. One bad record never stops a
//! batch.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;
use tracing::warn;

use crate::models::{RawAttendanceRecord, Shift};

/// The outcome of parsing one date/time field pair.
///
/// One variant per possibility; callers match instead of sniffing types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimestampParse {
    /// Both fields parsed into a concrete timestamp.
    Valid(NaiveDateTime),
    /// The date field was absent.
    Missing,
    /// A field was present but matched no accepted format. Carries the
    /// original text for diagnostics.
    Unparseable(String),
}

/// An entry-only record held for pending-closure views.
///
/// The employee has checked in but no exit has been recorded yet; the
/// record contributes nothing to hour totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpenEntry {
    /// The employee who checked in.
    pub employee_id: String,
    /// The work center of the check-in.
    pub work_center: String,
    /// When the employee checked in.
    pub entry_time: NaiveDateTime,
}

/// The classification of one raw record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedRecord {
    /// Entry and exit both parsed and `exit > entry`: a usable shift.
    Complete(Shift),
    /// Entry parsed but the exit is missing or unparseable.
    Open(OpenEntry),
    /// No usable entry timestamp; not yet a shift, dropped silently.
    Dropped,
    /// Exit at or before entry; excluded from hour totals.
    Invalid {
        /// Why the record was rejected.
        reason: String,
    },
}

/// Aggregate result of building shifts from a slice of raw records.
#[derive(Debug, Clone, Default)]
pub struct ShiftBuildReport {
    /// The validated shifts, in input order.
    pub shifts: Vec<Shift>,
    /// Entry-only records awaiting closure.
    pub open_entries: Vec<OpenEntry>,
    /// Count of records with no usable entry timestamp.
    pub dropped: usize,
    /// Count of records rejected for an inverted or empty interval.
    pub invalid: usize,
}

/// Parses a date string in one of the accepted formats.
///
/// `DD/MM/YYYY` is handled by explicit reassembly into ISO order so a
/// day-first value is never misread month-first; `YYYY-MM-DD` is accepted
/// directly.
fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if let Some((day, rest)) = text.split_once('/') {
        let (month, year) = rest.split_once('/')?;
        let iso = format!("{}-{:0>2}-{:0>2}", year, month, day);
        return NaiveDate::parse_from_str(&iso, "%Y-%m-%d").ok();
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
}

/// Parses a clock time with or without seconds.
fn parse_time(text: &str) -> Option<NaiveTime> {
    let text = text.trim();
    NaiveTime::parse_from_str(text, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(text, "%H:%M"))
        .ok()
}

/// Parses a full timestamp carried in a single field.
///
/// Accepts ISO 8601 / RFC 3339 and the long textual form some stores emit
/// (`Fri Jan 02 2026 07:00:00 GMT-0500 (Colombia Standard Time)`); the
/// parenthesised zone name is dropped before parsing. Offsets are taken at
/// face value as wall-clock time since the deployment runs in one fixed
/// civil timezone.
fn parse_combined(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    if let Ok(dt) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S") {
        return Some(dt);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.naive_local());
    }
    let stripped = match text.find(" (") {
        Some(idx) => &text[..idx],
        None => text,
    };
    DateTime::parse_from_str(stripped, "%a %b %d %Y %H:%M:%S GMT%z")
        .map(|dt| dt.naive_local())
        .ok()
}

/// Parses a date field plus an optional time field into a tagged result.
///
/// # Example
///
/// ```
/// use jornada_engine::calculation::{parse_timestamp, TimestampParse};
/// use chrono::NaiveDateTime;
///
/// let expected = NaiveDateTime::parse_from_str("2026-01-02 07:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(
///     parse_timestamp(Some("02/01/2026"), Some("07:00")),
///     TimestampParse::Valid(expected),
/// );
/// assert_eq!(parse_timestamp(None, None), TimestampParse::Missing);
/// ```
pub fn parse_timestamp(date: Option<&str>, time: Option<&str>) -> TimestampParse {
    let Some(date_text) = date.filter(|t| !t.trim().is_empty()) else {
        return TimestampParse::Missing;
    };

    match time.filter(|t| !t.trim().is_empty()) {
        Some(time_text) => match (parse_date(date_text), parse_time(time_text)) {
            (Some(date), Some(time)) => TimestampParse::Valid(date.and_time(time)),
            _ => TimestampParse::Unparseable(format!("{} {}", date_text, time_text)),
        },
        // The whole timestamp may live in the date field
        None => match parse_combined(date_text) {
            Some(dt) => TimestampParse::Valid(dt),
            None => match parse_date(date_text) {
                Some(date) => TimestampParse::Valid(date.and_hms_opt(0, 0, 0).expect("midnight")),
                None => TimestampParse::Unparseable(date_text.to_string()),
            },
        },
    }
}

/// Classifies a single raw record.
///
/// Entry and exit are expected co-located in one record; no cross-record
/// pairing happens here.
///
/// # Example
///
/// ```
/// use jornada_engine::calculation::{parse_record, ParsedRecord};
/// use jornada_engine::models::RawAttendanceRecord;
///
/// let record = RawAttendanceRecord {
///     employee_id: "emp_001".to_string(),
///     work_center: "bodega_norte".to_string(),
///     entry_date: Some("02/01/2026".to_string()),
///     entry_time: Some("07:00".to_string()),
///     exit_date: None,
///     exit_time: None,
/// };
/// assert!(matches!(parse_record(&record), ParsedRecord::Open(_)));
/// ```
pub fn parse_record(record: &RawAttendanceRecord) -> ParsedRecord {
    let entry = parse_timestamp(record.entry_date.as_deref(), record.entry_time.as_deref());
    let entry_time = match entry {
        TimestampParse::Valid(ts) => ts,
        // Not yet a shift: no error, nothing to report
        TimestampParse::Missing | TimestampParse::Unparseable(_) => return ParsedRecord::Dropped,
    };

    let exit = parse_timestamp(record.exit_date.as_deref(), record.exit_time.as_deref());
    let exit_time = match exit {
        TimestampParse::Valid(ts) => ts,
        TimestampParse::Missing | TimestampParse::Unparseable(_) => {
            return ParsedRecord::Open(OpenEntry {
                employee_id: record.employee_id.clone(),
                work_center: record.work_center.clone(),
                entry_time,
            });
        }
    };

    match Shift::new(
        record.employee_id.clone(),
        record.work_center.clone(),
        entry_time,
        exit_time,
    ) {
        Ok(shift) => ParsedRecord::Complete(shift),
        Err(err) => ParsedRecord::Invalid {
            reason: err.to_string(),
        },
    }
}

/// Builds validated shifts from a slice of raw records.
///
/// Returns the shifts alongside open entries and per-category skip counts
/// so the caller can report what was excluded.
///
/// # Example
///
/// ```
/// use jornada_engine::calculation::build_shifts;
/// use jornada_engine::models::RawAttendanceRecord;
///
/// let records = vec![RawAttendanceRecord {
///     employee_id: "emp_001".to_string(),
///     work_center: "bodega_norte".to_string(),
///     entry_date: Some("02/01/2026".to_string()),
///     entry_time: Some("07:00".to_string()),
///     exit_date: Some("02/01/2026".to_string()),
///     exit_time: Some("17:00".to_string()),
/// }];
///
/// let report = build_shifts(&records);
/// assert_eq!(report.shifts.len(), 1);
/// assert_eq!(report.dropped, 0);
/// ```
pub fn build_shifts(records: &[RawAttendanceRecord]) -> ShiftBuildReport {
    let mut report = ShiftBuildReport::default();

    for record in records {
        match parse_record(record) {
            ParsedRecord::Complete(shift) => report.shifts.push(shift),
            ParsedRecord::Open(entry) => report.open_entries.push(entry),
            ParsedRecord::Dropped => report.dropped += 1,
            ParsedRecord::Invalid { reason } => {
                warn!(
                    employee_id = %record.employee_id,
                    %reason,
                    "excluding invalid attendance record"
                );
                report.invalid += 1;
            }
        }
    }

    report
}
