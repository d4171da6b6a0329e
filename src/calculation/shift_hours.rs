//! Shift-hours classification logic.
//!
//! This module partitions a shift into sub-intervals at day-type and
//! night-window boundaries and attributes each minute to one of the four
//! labor categories. A shift crossing midnight or a night-window edge is
//! split exactly at the boundary, never apportioned by ratios, so every
//! emitted segment has a uniform classification.

use chrono::{Duration, NaiveDateTime, Timelike};
use tracing::warn;

use crate::models::{truncate_to_minute, HoursBreakdown, Shift};

use super::day_detection::{get_day_type, DayType};
use super::holidays::HolidayCalendar;
use super::night_window::NightWindow;

/// A maximal sub-interval of a shift with uniform classification.
///
/// Segments never cross midnight or a night-window edge; the day type and
/// night flag hold for every minute inside the segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftSegment {
    /// The start of this segment.
    pub start_time: NaiveDateTime,
    /// The end of this segment.
    pub end_time: NaiveDateTime,
    /// The day type of the date this segment falls on.
    pub day_type: DayType,
    /// Whether the segment lies inside the night window.
    pub night: bool,
    /// The whole minutes in this segment.
    pub minutes: i64,
}

/// Midnight at the start of the day after the cursor's date.
fn next_midnight(cursor: NaiveDateTime) -> NaiveDateTime {
    (cursor.date() + Duration::days(1))
        .and_hms_opt(0, 0, 0)
        .expect("midnight is a valid time")
}

/// The next occurrence of a daily recurring clock-hour boundary strictly
/// after the cursor.
fn next_hour_boundary(cursor: NaiveDateTime, hour: u32) -> NaiveDateTime {
    let today = cursor
        .date()
        .and_hms_opt(hour, 0, 0)
        .expect("validated night-window hour");
    if today > cursor {
        today
    } else {
        today + Duration::days(1)
    }
}

/// Splits a shift at midnight and night-window boundaries.
///
/// Returns chronologically ordered segments whose minute counts sum to the
/// shift's duration. An invalid interval (`end <= start` after minute
/// truncation) yields no segments.
///
/// # Example
///
/// ```
/// use jornada_engine::calculation::{segment_shift, HolidayCalendar, NightWindow};
/// use jornada_engine::models::Shift;
/// use chrono::NaiveDateTime;
///
/// let shift = Shift::new(
///     "emp_001".to_string(),
///     "bodega_norte".to_string(),
///     NaiveDateTime::parse_from_str("2026-01-02 18:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     NaiveDateTime::parse_from_str("2026-01-02 22:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
/// ).unwrap();
///
/// let window = NightWindow::new(21, 6).unwrap();
/// let mut calendar = HolidayCalendar::new();
/// let segments = segment_shift(&shift, window, &mut calendar);
///
/// // Split at 21:00 where the night window opens
/// assert_eq!(segments.len(), 2);
/// assert!(!segments[0].night);
/// assert!(segments[1].night);
/// ```
pub fn segment_shift(
    shift: &Shift,
    window: NightWindow,
    calendar: &mut HolidayCalendar,
) -> Vec<ShiftSegment> {
    let start = truncate_to_minute(shift.start_time);
    let end = truncate_to_minute(shift.end_time);

    let mut segments = Vec::new();
    let mut cursor = start;

    while cursor < end {
        let candidates = [
            next_midnight(cursor),
            next_hour_boundary(cursor, window.start_hour()),
            next_hour_boundary(cursor, window.end_hour()),
        ];
        let next_boundary = candidates.into_iter().filter(|c| *c > cursor).min();

        let stop = match next_boundary {
            Some(boundary) => boundary.min(end),
            None => {
                // Clock-anomaly guard: never let the sweep stall
                cursor += Duration::minutes(1);
                continue;
            }
        };

        segments.push(ShiftSegment {
            start_time: cursor,
            end_time: stop,
            day_type: get_day_type(cursor.date(), calendar),
            night: window.contains_hour(cursor.hour()),
            minutes: (stop - cursor).num_minutes(),
        });

        cursor = stop;
    }

    segments
}

/// Classifies a shift's duration into the four labor-category buckets.
///
/// Walks the shift with [`segment_shift`] and accumulates each segment's
/// minutes into day-normal, night-normal, day-holiday or night-holiday
/// according to its day type and night flag. Buckets are rounded to two
/// decimals; the total is the sum of the rounded buckets.
///
/// A shift whose interval is empty or inverted after minute truncation is
/// flagged and yields an all-zero breakdown rather than an error, so one
/// bad record never aborts a batch.
///
/// # Example
///
/// ```
/// use jornada_engine::calculation::{classify_shift, HolidayCalendar, NightWindow};
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
///
/// let window = NightWindow::new(21, 6).unwrap();
/// let mut calendar = HolidayCalendar::new();
/// let breakdown = classify_shift(&shift, window, &mut calendar);
///
/// assert_eq!(breakdown.total, Decimal::new(1000, 2));      // 10.00
/// assert_eq!(breakdown.day_normal, Decimal::new(1000, 2)); // 10.00
/// ```
pub fn classify_shift(
    shift: &Shift,
    window: NightWindow,
    calendar: &mut HolidayCalendar,
) -> HoursBreakdown {
    let start = truncate_to_minute(shift.start_time);
    let end = truncate_to_minute(shift.end_time);

    if end <= start {
        warn!(
            employee_id = %shift.employee_id,
            start = %shift.start_time,
            end = %shift.end_time,
            "rejected shift with empty or inverted interval"
        );
        return HoursBreakdown::zero();
    }

    let mut day_normal = 0i64;
    let mut night_normal = 0i64;
    let mut day_holiday = 0i64;
    let mut night_holiday = 0i64;

    for segment in segment_shift(shift, window, calendar) {
        match (segment.day_type.is_holiday_rate(), segment.night) {
            (false, false) => day_normal += segment.minutes,
            (false, true) => night_normal += segment.minutes,
            (true, false) => day_holiday += segment.minutes,
            (true, true) => night_holiday += segment.minutes,
        }
    }

    HoursBreakdown::from_minutes(day_normal, night_normal, day_holiday, night_holiday)
}
