//! Easter Sunday computation.
//!
//! This module implements the Meeus/Jones/Butcher computus, the anonymous
//! Gregorian algorithm that yields the date of Easter Sunday for any year.
//! The movable Colombian holidays (Holy Thursday, Good Friday, Ascension,
//! Corpus Christi, Sacred Heart) are all offsets from this date.

use chrono::NaiveDate;

/// Computes the date of Easter Sunday for the given year.
///
/// Uses the Meeus/Jones/Butcher Gregorian algorithm. The intermediate
/// variable names follow the published algorithm; the arithmetic must not
/// be simplified, as calendar correctness depends on exact replication.
///
/// # Example
///
/// ```
/// use jornada_engine::calculation::easter_sunday;
/// use chrono::NaiveDate;
///
/// assert_eq!(easter_sunday(2026), NaiveDate::from_ymd_opt(2026, 4, 5).unwrap());
/// assert_eq!(easter_sunday(2024), NaiveDate::from_ymd_opt(2024, 3, 31).unwrap());
/// ```
pub fn easter_sunday(year: i32) -> NaiveDate {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;

    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
        .expect("computus always yields a date in March or April")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// ES-001: known Easter dates across two decades
    #[test]
    fn test_known_easter_dates() {
        assert_eq!(easter_sunday(2019), date(2019, 4, 21));
        assert_eq!(easter_sunday(2020), date(2020, 4, 12));
        assert_eq!(easter_sunday(2021), date(2021, 4, 4));
        assert_eq!(easter_sunday(2022), date(2022, 4, 17));
        assert_eq!(easter_sunday(2023), date(2023, 4, 9));
        assert_eq!(easter_sunday(2024), date(2024, 3, 31));
        assert_eq!(easter_sunday(2025), date(2025, 4, 20));
        assert_eq!(easter_sunday(2026), date(2026, 4, 5));
        assert_eq!(easter_sunday(2027), date(2027, 3, 28));
        assert_eq!(easter_sunday(2028), date(2028, 4, 16));
        assert_eq!(easter_sunday(2030), date(2030, 4, 21));
        assert_eq!(easter_sunday(2038), date(2038, 4, 25));
    }

    /// ES-002: earliest and latest possible dates stay in range
    #[test]
    fn test_easter_always_in_march_or_april() {
        use chrono::Datelike;
        for year in 1900..2200 {
            let easter = easter_sunday(year);
            let month = easter.month();
            assert!(
                month == 3 || month == 4,
                "Easter {} fell in month {}",
                year,
                month
            );
            if month == 3 {
                assert!(easter.day() >= 22);
            } else {
                assert!(easter.day() <= 25);
            }
        }
    }

    /// ES-003: Easter is always a Sunday
    #[test]
    fn test_easter_is_always_sunday() {
        use chrono::{Datelike, Weekday};
        for year in 1900..2200 {
            assert_eq!(
                easter_sunday(year).weekday(),
                Weekday::Sun,
                "Easter {} was not a Sunday",
                year
            );
        }
    }
}
