//! Batch classification and summary assembly.
//!
//! This module runs one synchronous pass over a slice of raw attendance
//! records: build shifts, classify each against a per-run holiday
//! calendar, and assemble the per-shift summary rows the external sink
//! consumes. Employee names are resolved through an injected
//! [`NameResolver`] so the classification core never depends on the host's
//! directory.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::models::{HoursBreakdown, RawAttendanceRecord, Shift};

use super::day_detection::{get_day_type, DayType};
use super::holidays::HolidayCalendar;
use super::night_window::NightWindow;
use super::shift_builder::{build_shifts, OpenEntry};
use super::shift_hours::classify_shift;

/// Resolves an employee id to a display name.
///
/// The engine treats names as opaque pass-through data; the host injects
/// whatever directory it has. An unresolved id falls back to the id
/// itself.
pub trait NameResolver {
    /// Returns the display name for an employee id, if known.
    fn resolve_name(&self, employee_id: &str) -> Option<String>;
}

/// A [`NameResolver`] backed by an in-memory map.
///
/// # Example
///
/// ```
/// use jornada_engine::calculation::{MapNameResolver, NameResolver};
/// use std::collections::HashMap;
///
/// let mut names = HashMap::new();
/// names.insert("emp_001".to_string(), "Ana María Rojas".to_string());
/// let resolver = MapNameResolver::new(names);
///
/// assert_eq!(resolver.resolve_name("emp_001").as_deref(), Some("Ana María Rojas"));
/// assert_eq!(resolver.resolve_name("emp_999"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MapNameResolver {
    names: HashMap<String, String>,
}

impl MapNameResolver {
    /// Creates a resolver over the given id-to-name map.
    pub fn new(names: HashMap<String, String>) -> Self {
        Self { names }
    }
}

impl NameResolver for MapNameResolver {
    fn resolve_name(&self, employee_id: &str) -> Option<String> {
        self.names.get(employee_id).cloned()
    }
}

/// One classified shift as reported to the external sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftSummary {
    /// The employee identity string.
    pub employee_id: String,
    /// The resolved display name, or the id when unresolved.
    pub employee_name: String,
    /// The work center the shift was recorded against.
    pub work_center: String,
    /// Combined display string covering the whole interval.
    pub date_range: String,
    /// The calendar date the shift belongs to (its start date).
    pub date: NaiveDate,
    /// When the shift started.
    pub start_time: NaiveDateTime,
    /// When the shift ended.
    pub end_time: NaiveDateTime,
    /// Day type of the start date.
    pub start_day_type: DayType,
    /// Day type of the end date.
    pub end_day_type: DayType,
    /// The classified-hours breakdown.
    pub hours: HoursBreakdown,
}

/// The result of one batch classification run.
///
/// Skip counts let the caller report what was excluded without the run
/// ever aborting on bad input.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    /// Unique identifier for this run.
    pub batch_id: Uuid,
    /// When the run was performed.
    pub generated_at: DateTime<Utc>,
    /// The engine version that produced the report.
    pub engine_version: String,
    /// One summary per valid shift, in input order.
    pub summaries: Vec<ShiftSummary>,
    /// Entry-only records awaiting closure.
    pub open_entries: Vec<OpenEntry>,
    /// Records with no usable entry timestamp.
    pub dropped_records: usize,
    /// Records rejected for an inverted or empty interval.
    pub invalid_records: usize,
}

/// Formats the combined date-range display string for a shift.
fn format_date_range(start: NaiveDateTime, end: NaiveDateTime) -> String {
    format!(
        "{} - {}",
        start.format("%d/%m/%Y %H:%M"),
        end.format("%d/%m/%Y %H:%M")
    )
}

/// Assembles the summary row for one classified shift.
pub fn build_summary(
    shift: &Shift,
    breakdown: HoursBreakdown,
    calendar: &mut HolidayCalendar,
    resolver: &dyn NameResolver,
) -> ShiftSummary {
    let employee_name = resolver
        .resolve_name(&shift.employee_id)
        .unwrap_or_else(|| shift.employee_id.clone());

    ShiftSummary {
        employee_id: shift.employee_id.clone(),
        employee_name,
        work_center: shift.work_center.clone(),
        date_range: format_date_range(shift.start_time, shift.end_time),
        date: shift.date(),
        start_time: shift.start_time,
        end_time: shift.end_time,
        start_day_type: get_day_type(shift.start_time.date(), calendar),
        end_day_type: get_day_type(shift.end_time.date(), calendar),
        hours: breakdown,
    }
}

/// Runs one full classification pass over a slice of raw records.
///
/// The night window must already be validated; the holiday calendar is
/// created here and lives only for this run, so every shift in a year
/// reuses one computed holiday set. The pass is deterministic and leaves
/// its inputs untouched.
///
/// # Example
///
/// ```
/// use jornada_engine::calculation::{run_batch, MapNameResolver, NightWindow};
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
/// let window = NightWindow::new(21, 6).unwrap();
/// let report = run_batch(&records, window, &MapNameResolver::default());
/// assert_eq!(report.summaries.len(), 1);
/// ```
pub fn run_batch(
    records: &[RawAttendanceRecord],
    window: NightWindow,
    resolver: &dyn NameResolver,
) -> BatchReport {
    let build = build_shifts(records);
    let mut calendar = HolidayCalendar::new();

    let summaries = build
        .shifts
        .iter()
        .map(|shift| {
            let breakdown = classify_shift(shift, window, &mut calendar);
            build_summary(shift, breakdown, &mut calendar, resolver)
        })
        .collect();

    BatchReport {
        batch_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        summaries,
        open_entries: build.open_entries,
        dropped_records: build.dropped,
        invalid_records: build.invalid,
    }
}
