//! Shift model.
//!
//! This module defines the [`Shift`] struct representing one continuous work
//! interval from a check-in to a check-out event, validated and truncated to
//! minute resolution.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Represents a validated work shift tied to a work center.
///
/// A shift is constructed from one matched entry/exit pair and is immutable
/// thereafter. Construction enforces `end_time > start_time` strictly; an
/// inverted or zero-length interval is rejected, never clamped. Both
/// timestamps are truncated to whole minutes, the granularity at which hours
/// are attributed.
///
/// # Example
///
/// ```
/// use jornada_engine::models::Shift;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let shift = Shift::new(
///     "emp_001".to_string(),
///     "bodega_norte".to_string(),
///     NaiveDateTime::parse_from_str("2026-01-02 07:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     NaiveDateTime::parse_from_str("2026-01-02 17:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
/// ).unwrap();
/// assert_eq!(shift.worked_hours(), Decimal::new(100, 1)); // 10.0 hours
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    /// The employee who worked the shift.
    pub employee_id: String,
    /// The work center where the employee checked in.
    pub work_center: String,
    /// The start of the shift, minute resolution.
    pub start_time: NaiveDateTime,
    /// The end of the shift, minute resolution. Always after `start_time`.
    pub end_time: NaiveDateTime,
}

/// Drops seconds and sub-second components from a timestamp.
pub(crate) fn truncate_to_minute(ts: NaiveDateTime) -> NaiveDateTime {
    ts.date()
        .and_hms_opt(ts.hour(), ts.minute(), 0)
        .expect("hour and minute taken from a valid timestamp")
}

impl Shift {
    /// Creates a validated shift from an entry/exit timestamp pair.
    ///
    /// Both timestamps are truncated to minute resolution before validation.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidShift`] if `end_time <= start_time`
    /// after truncation.
    pub fn new(
        employee_id: String,
        work_center: String,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
    ) -> EngineResult<Self> {
        let start_time = truncate_to_minute(start_time);
        let end_time = truncate_to_minute(end_time);

        if end_time <= start_time {
            return Err(EngineError::InvalidShift {
                employee_id,
                message: format!(
                    "end time {} is not after start time {}",
                    end_time, start_time
                ),
            });
        }

        Ok(Self {
            employee_id,
            work_center,
            start_time,
            end_time,
        })
    }

    /// The calendar date the shift belongs to (the date it started).
    pub fn date(&self) -> NaiveDate {
        self.start_time.date()
    }

    /// Returns the total worked hours for the shift as a decimal.
    ///
    /// # Example
    ///
    /// ```
    /// use jornada_engine::models::Shift;
    /// use chrono::NaiveDateTime;
    /// use rust_decimal::Decimal;
    ///
    /// let shift = Shift::new(
    ///     "emp_001".to_string(),
    ///     "planta_sur".to_string(),
    ///     NaiveDateTime::parse_from_str("2026-01-02 22:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    ///     NaiveDateTime::parse_from_str("2026-01-03 06:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    /// ).unwrap();
    /// assert_eq!(shift.worked_hours(), Decimal::new(80, 1)); // 8.0
    /// ```
    pub fn worked_hours(&self) -> Decimal {
        let worked_minutes = (self.end_time - self.start_time).num_minutes();
        Decimal::new(worked_minutes, 0) / Decimal::new(60, 0)
    }

    /// Returns the day of the week the shift started on.
    pub fn day_of_week(&self) -> Weekday {
        self.date().weekday()
    }
}
