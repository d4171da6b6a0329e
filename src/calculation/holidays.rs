//! Colombian public-holiday calendar.
//!
//! This module computes the full set of Colombian public holidays for a
//! year: six fixed-date holidays, seven holidays moved to the following
//! Monday under Ley 51 de 1983 ("Ley Emiliani"), and five movable holidays
//! anchored to Easter Sunday. A [`HolidayCalendar`] memoizes the per-year
//! sets so a batch over thousands of shifts computes each year once.

use std::collections::{BTreeSet, HashMap};

use chrono::{Datelike, Duration, NaiveDate};

use super::easter::easter_sunday;

/// Fixed-date holidays observed on their calendar date regardless of weekday.
const FIXED: [(u32, u32); 6] = [
    (1, 1),   // Año Nuevo
    (5, 1),   // Día del Trabajo
    (7, 20),  // Día de la Independencia
    (8, 7),   // Batalla de Boyacá
    (12, 8),  // Inmaculada Concepción
    (12, 25), // Navidad
];

/// Holidays moved to the following Monday unless they already fall on one.
const EMILIANI: [(u32, u32); 7] = [
    (1, 6),   // Reyes Magos
    (3, 19),  // San José
    (6, 29),  // San Pedro y San Pablo
    (8, 15),  // Asunción de la Virgen
    (10, 12), // Día de la Raza
    (11, 1),  // Todos los Santos
    (11, 11), // Independencia de Cartagena
];

/// Moves a holiday date to the following Monday per the Emiliani rule.
///
/// A date already on Monday is kept as-is. Otherwise the date advances by
/// `(8 - weekday) mod 7` days on 0=Sunday..6=Saturday numbering, with a
/// zero advance promoted to a full week.
///
/// # Example
///
/// ```
/// use jornada_engine::calculation::emiliani_shift;
/// use chrono::NaiveDate;
///
/// // Jan 6 2026 is a Tuesday; it observes on Monday Jan 12
/// let epiphany = NaiveDate::from_ymd_opt(2026, 1, 6).unwrap();
/// assert_eq!(emiliani_shift(epiphany), NaiveDate::from_ymd_opt(2026, 1, 12).unwrap());
///
/// // Jun 29 2026 is already a Monday and stays put
/// let saint_peter = NaiveDate::from_ymd_opt(2026, 6, 29).unwrap();
/// assert_eq!(emiliani_shift(saint_peter), saint_peter);
/// ```
pub fn emiliani_shift(date: NaiveDate) -> NaiveDate {
    let weekday = date.weekday().num_days_from_sunday();
    if weekday == 1 {
        return date;
    }
    let mut advance = (8 - weekday) % 7;
    if advance == 0 {
        advance = 7;
    }
    date + Duration::days(i64::from(advance))
}

/// Computes the complete set of Colombian public holidays for a year.
///
/// Always returns exactly 18 distinct dates: 6 fixed, 7 Emiliani-shifted
/// and 5 Easter-relative. Pure function of the year; it cannot fail for
/// any valid four-digit year.
///
/// # Example
///
/// ```
/// use jornada_engine::calculation::holidays_for_year;
/// use chrono::NaiveDate;
///
/// let holidays = holidays_for_year(2026);
/// assert_eq!(holidays.len(), 18);
/// assert!(holidays.contains(&NaiveDate::from_ymd_opt(2026, 12, 25).unwrap()));
/// ```
pub fn holidays_for_year(year: i32) -> BTreeSet<NaiveDate> {
    let mut holidays = BTreeSet::new();

    for (month, day) in FIXED {
        holidays.insert(ymd(year, month, day));
    }

    for (month, day) in EMILIANI {
        holidays.insert(emiliani_shift(ymd(year, month, day)));
    }

    let easter = easter_sunday(year);
    // Jueves y Viernes Santo observe on their own weekday
    holidays.insert(easter - Duration::days(3));
    holidays.insert(easter - Duration::days(2));
    // Ascensión, Corpus Christi and Sagrado Corazón move to Monday
    holidays.insert(emiliani_shift(easter + Duration::days(39)));
    holidays.insert(emiliani_shift(easter + Duration::days(60)));
    holidays.insert(emiliani_shift(easter + Duration::days(68)));

    holidays
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("holiday tables hold valid month/day pairs")
}

/// A per-year memoizing view over [`holidays_for_year`].
///
/// One calendar is created per batch run and threaded through every
/// classification call; a year's set is computed on first use and reused
/// for every shift in that year.
///
/// # Example
///
/// ```
/// use jornada_engine::calculation::HolidayCalendar;
/// use chrono::NaiveDate;
///
/// let mut calendar = HolidayCalendar::new();
/// assert!(calendar.is_holiday(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()));
/// assert!(!calendar.is_holiday(NaiveDate::from_ymd_opt(2026, 1, 2).unwrap()));
/// ```
#[derive(Debug, Default)]
pub struct HolidayCalendar {
    cache: HashMap<i32, BTreeSet<NaiveDate>>,
}

impl HolidayCalendar {
    /// Creates an empty calendar; years populate lazily.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the holiday set for a year, computing it on first access.
    pub fn holidays(&mut self, year: i32) -> &BTreeSet<NaiveDate> {
        self.cache.entry(year).or_insert_with(|| holidays_for_year(year))
    }

    /// Returns true if the date is a Colombian public holiday.
    pub fn is_holiday(&mut self, date: NaiveDate) -> bool {
        self.holidays(date.year()).contains(&date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// HC-001: 18 distinct holidays per year, 17 when two observances coincide
    ///
    /// When Easter lands between Apr 19 and Apr 25, the observed Monday for
    /// Sagrado Corazón (Easter + 71) is the same Monday San Pedro y San
    /// Pablo moves to, so the set holds 17 distinct dates (as in the real
    /// 2019 and 2025 calendars).
    #[test]
    fn test_distinct_holiday_count_per_year() {
        for year in 2000..2050 {
            let easter = easter_sunday(year);
            let expected = if easter >= date(year, 4, 19) && easter <= date(year, 4, 25) {
                17
            } else {
                18
            };
            let holidays = holidays_for_year(year);
            assert_eq!(
                holidays.len(),
                expected,
                "year {} produced {:?}",
                year,
                holidays
            );
        }
    }

    /// HC-009: 2025 coincidence lands both observances on Jun 30
    #[test]
    fn test_2025_coincident_observances() {
        let holidays = holidays_for_year(2025);
        assert_eq!(holidays.len(), 17);
        // San Pedro (Jun 29, a Sunday) and Sagrado Corazón (Jun 27, a
        // Friday) both observe on Monday Jun 30
        assert!(holidays.contains(&date(2025, 6, 30)));
        assert!(!holidays.contains(&date(2025, 6, 29)));
        assert!(!holidays.contains(&date(2025, 6, 27)));
    }

    /// HC-002: 2026 fixtures from the calendar authority
    #[test]
    fn test_2026_known_dates() {
        let holidays = holidays_for_year(2026);

        assert!(holidays.contains(&date(2026, 1, 1)));
        assert!(holidays.contains(&date(2026, 12, 25)));

        // Jan 6 2026 is a Tuesday: observed the following Monday
        assert!(!holidays.contains(&date(2026, 1, 6)));
        assert!(holidays.contains(&date(2026, 1, 12)));
    }

    /// HC-003: complete official 2026 calendar
    #[test]
    fn test_2026_complete_calendar() {
        let expected: BTreeSet<NaiveDate> = [
            date(2026, 1, 1),   // Año Nuevo
            date(2026, 1, 12),  // Reyes Magos (from Jan 6)
            date(2026, 3, 23),  // San José (from Mar 19)
            date(2026, 4, 2),   // Jueves Santo
            date(2026, 4, 3),   // Viernes Santo
            date(2026, 5, 1),   // Día del Trabajo
            date(2026, 5, 18),  // Ascensión (Easter + 39, shifted)
            date(2026, 6, 8),   // Corpus Christi (Easter + 60, shifted)
            date(2026, 6, 15),  // Sagrado Corazón (Easter + 68, shifted)
            date(2026, 6, 29),  // San Pedro y San Pablo (already Monday)
            date(2026, 7, 20),  // Independencia
            date(2026, 8, 7),   // Batalla de Boyacá
            date(2026, 8, 17),  // Asunción (from Aug 15)
            date(2026, 10, 12), // Día de la Raza (already Monday)
            date(2026, 11, 2),  // Todos los Santos (from Nov 1)
            date(2026, 11, 16), // Independencia de Cartagena (from Nov 11)
            date(2026, 12, 8),  // Inmaculada Concepción
            date(2026, 12, 25), // Navidad
        ]
        .into_iter()
        .collect();

        assert_eq!(holidays_for_year(2026), expected);
    }

    /// HC-004: a Monday Emiliani date is never shifted
    #[test]
    fn test_monday_emiliani_date_unshifted() {
        // Jan 6 2025 is a Monday
        assert_eq!(emiliani_shift(date(2025, 1, 6)), date(2025, 1, 6));
        assert!(holidays_for_year(2025).contains(&date(2025, 1, 6)));

        // Mar 19 2029 is a Monday
        assert_eq!(emiliani_shift(date(2029, 3, 19)), date(2029, 3, 19));
        assert!(holidays_for_year(2029).contains(&date(2029, 3, 19)));
    }

    /// HC-005: Emiliani advance for each weekday
    #[test]
    fn test_emiliani_shift_per_weekday() {
        // 2026-11-01 is a Sunday: +1 day
        assert_eq!(emiliani_shift(date(2026, 11, 1)), date(2026, 11, 2));
        // 2026-01-06 is a Tuesday: +6 days
        assert_eq!(emiliani_shift(date(2026, 1, 6)), date(2026, 1, 12));
        // 2026-11-11 is a Wednesday: +5 days
        assert_eq!(emiliani_shift(date(2026, 11, 11)), date(2026, 11, 16));
        // 2026-03-19 is a Thursday: +4 days
        assert_eq!(emiliani_shift(date(2026, 3, 19)), date(2026, 3, 23));
        // 2027-08-15 is a Sunday: +1 day
        assert_eq!(emiliani_shift(date(2027, 8, 15)), date(2027, 8, 16));
        // 2026-08-15 is a Saturday: +2 days
        assert_eq!(emiliani_shift(date(2026, 8, 15)), date(2026, 8, 17));
    }

    /// HC-006: shifted holidays always land on Monday
    #[test]
    fn test_shifted_holidays_land_on_monday() {
        use chrono::Weekday;
        for year in 2020..2040 {
            for (month, day) in EMILIANI {
                let observed = emiliani_shift(date(year, month, day));
                assert_eq!(
                    observed.weekday(),
                    Weekday::Mon,
                    "{}-{}-{} observed on {}",
                    year,
                    month,
                    day,
                    observed
                );
            }
        }
    }

    /// HC-007: Holy Thursday and Good Friday are not shifted
    #[test]
    fn test_holy_week_days_unshifted() {
        use chrono::Weekday;
        for year in 2020..2040 {
            let holidays = holidays_for_year(year);
            let easter = easter_sunday(year);
            let thursday = easter - Duration::days(3);
            let friday = easter - Duration::days(2);
            assert_eq!(thursday.weekday(), Weekday::Thu);
            assert_eq!(friday.weekday(), Weekday::Fri);
            assert!(holidays.contains(&thursday));
            assert!(holidays.contains(&friday));
        }
    }

    /// HC-008: calendar memoizes and agrees with the pure function
    #[test]
    fn test_calendar_memoizes_per_year() {
        let mut calendar = HolidayCalendar::new();

        assert!(calendar.is_holiday(date(2026, 12, 25)));
        assert!(calendar.is_holiday(date(2027, 1, 1)));
        assert!(!calendar.is_holiday(date(2026, 1, 2)));

        assert_eq!(calendar.cache.len(), 2);
        assert_eq!(calendar.holidays(2026), &holidays_for_year(2026));
    }
}
