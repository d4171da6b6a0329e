//! Day-type detection logic.
//!
//! This module determines the day type (normal, Sunday, holiday) for any
//! calendar date, which decides whether worked hours fall into the normal
//! or the holiday-rate buckets.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::holidays::HolidayCalendar;

/// Represents the pay-rate classification of a calendar date.
///
/// Sundays and public holidays receive the same downstream treatment (the
/// holiday-rate buckets) but are kept distinct for reporting.
///
/// # Example
///
/// ```
/// use jornada_engine::calculation::DayType;
///
/// let day_type = DayType::Holiday;
/// assert_eq!(format!("{}", day_type), "Holiday");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Monday through Saturday, not a public holiday.
    Normal,
    /// A Sunday that is not a public holiday.
    Sunday,
    /// A Colombian public holiday, whatever its weekday.
    Holiday,
}

impl DayType {
    /// Returns true if hours on this day go to the holiday-rate buckets.
    pub fn is_holiday_rate(self) -> bool {
        matches!(self, DayType::Sunday | DayType::Holiday)
    }
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Normal => write!(f, "Normal"),
            DayType::Sunday => write!(f, "Sunday"),
            DayType::Holiday => write!(f, "Holiday"),
        }
    }
}

/// Determines the day type for a given date.
///
/// The holiday check takes precedence: a public holiday that falls on a
/// Sunday reports as [`DayType::Holiday`], not [`DayType::Sunday`].
///
/// # Example
///
/// ```
/// use jornada_engine::calculation::{get_day_type, DayType, HolidayCalendar};
/// use chrono::NaiveDate;
///
/// let mut calendar = HolidayCalendar::new();
///
/// // 2026-01-02 is an ordinary Friday
/// let friday = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();
/// assert_eq!(get_day_type(friday, &mut calendar), DayType::Normal);
///
/// // 2026-01-04 is a Sunday
/// let sunday = NaiveDate::from_ymd_opt(2026, 1, 4).unwrap();
/// assert_eq!(get_day_type(sunday, &mut calendar), DayType::Sunday);
///
/// // 2026-12-25 is a public holiday
/// let christmas = NaiveDate::from_ymd_opt(2026, 12, 25).unwrap();
/// assert_eq!(get_day_type(christmas, &mut calendar), DayType::Holiday);
/// ```
pub fn get_day_type(date: NaiveDate, calendar: &mut HolidayCalendar) -> DayType {
    if calendar.is_holiday(date) {
        DayType::Holiday
    } else if date.weekday() == Weekday::Sun {
        DayType::Sunday
    } else {
        DayType::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    // ==========================================================================
    // DD-001: weekday is Normal
    // ==========================================================================
    #[test]
    fn test_dd_001_weekday_is_normal() {
        let mut calendar = HolidayCalendar::new();
        // 2026-01-02 is a Friday
        assert_eq!(
            get_day_type(make_date("2026-01-02"), &mut calendar),
            DayType::Normal
        );
    }

    // ==========================================================================
    // DD-002: Sunday is Sunday
    // ==========================================================================
    #[test]
    fn test_dd_002_sunday_is_sunday() {
        let mut calendar = HolidayCalendar::new();
        // 2026-01-04 is a Sunday
        assert_eq!(
            get_day_type(make_date("2026-01-04"), &mut calendar),
            DayType::Sunday
        );
    }

    // ==========================================================================
    // DD-003: holiday is Holiday
    // ==========================================================================
    #[test]
    fn test_dd_003_holiday_is_holiday() {
        let mut calendar = HolidayCalendar::new();
        assert_eq!(
            get_day_type(make_date("2026-12-25"), &mut calendar),
            DayType::Holiday
        );
    }

    // ==========================================================================
    // DD-004: holiday on a Sunday reports Holiday, not Sunday
    // ==========================================================================
    #[test]
    fn test_dd_004_holiday_takes_precedence_over_sunday() {
        let mut calendar = HolidayCalendar::new();
        // Aug 7 2022 (Batalla de Boyacá) fell on a Sunday
        assert_eq!(
            get_day_type(make_date("2022-08-07"), &mut calendar),
            DayType::Holiday
        );
    }

    // ==========================================================================
    // DD-005: Saturday is Normal
    // ==========================================================================
    #[test]
    fn test_dd_005_saturday_is_normal() {
        let mut calendar = HolidayCalendar::new();
        // 2026-01-03 is a Saturday
        assert_eq!(
            get_day_type(make_date("2026-01-03"), &mut calendar),
            DayType::Normal
        );
    }

    // ==========================================================================
    // DD-006: a shifted holiday's origin date is not a holiday
    // ==========================================================================
    #[test]
    fn test_dd_006_origin_date_of_shifted_holiday_is_normal() {
        let mut calendar = HolidayCalendar::new();
        // Jan 6 2026 (Tuesday) observes on Jan 12
        assert_eq!(
            get_day_type(make_date("2026-01-06"), &mut calendar),
            DayType::Normal
        );
        assert_eq!(
            get_day_type(make_date("2026-01-12"), &mut calendar),
            DayType::Holiday
        );
    }

    #[test]
    fn test_is_holiday_rate() {
        assert!(!DayType::Normal.is_holiday_rate());
        assert!(DayType::Sunday.is_holiday_rate());
        assert!(DayType::Holiday.is_holiday_rate());
    }

    #[test]
    fn test_day_type_display() {
        assert_eq!(format!("{}", DayType::Normal), "Normal");
        assert_eq!(format!("{}", DayType::Sunday), "Sunday");
        assert_eq!(format!("{}", DayType::Holiday), "Holiday");
    }

    #[test]
    fn test_day_type_serialization() {
        let holiday = DayType::Holiday;
        let json = serde_json::to_string(&holiday).unwrap();
        assert_eq!(json, "\"holiday\"");

        let deserialized: DayType = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, DayType::Holiday);
    }
}
