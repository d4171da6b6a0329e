//! Classified-hours breakdown model.
//!
//! This module defines the [`HoursBreakdown`] struct, the four-bucket
//! allocation of a shift's duration across day/night and normal/holiday
//! categories used for pay-rate reporting.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// The classified hours for one shift, rounded to two decimal places.
///
/// Sundays and public holidays share the holiday buckets; they carry the
/// same pay treatment downstream. `total` is the sum of the four rounded
/// buckets, so it reflects the same rounding the individual buckets carry.
///
/// # Example
///
/// ```
/// use jornada_engine::models::HoursBreakdown;
/// use rust_decimal::Decimal;
///
/// let breakdown = HoursBreakdown::from_minutes(600, 0, 0, 0);
/// assert_eq!(breakdown.total, Decimal::new(1000, 2)); // 10.00
/// assert_eq!(breakdown.day_normal, Decimal::new(1000, 2));
/// assert_eq!(breakdown.night_normal, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoursBreakdown {
    /// Total classified hours, equal to the sum of the four buckets.
    pub total: Decimal,
    /// Daytime hours on a normal working day.
    pub day_normal: Decimal,
    /// Night-window hours on a normal working day.
    pub night_normal: Decimal,
    /// Daytime hours on a Sunday or public holiday.
    pub day_holiday: Decimal,
    /// Night-window hours on a Sunday or public holiday.
    pub night_holiday: Decimal,
}

/// Converts whole minutes to hours rounded to exactly two decimal places.
fn minutes_to_hours(minutes: i64) -> Decimal {
    let mut hours = (Decimal::new(minutes, 0) / Decimal::new(60, 0))
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    // Pin the scale so 8 reports as "8.00"
    hours.rescale(2);
    hours
}

impl HoursBreakdown {
    /// An all-zero breakdown, used for rejected shifts.
    pub fn zero() -> Self {
        let zero = Decimal::new(0, 2);
        Self {
            total: zero,
            day_normal: zero,
            night_normal: zero,
            day_holiday: zero,
            night_holiday: zero,
        }
    }

    /// Builds a breakdown from per-bucket minute counts.
    ///
    /// Each bucket is converted to hours and rounded to two decimals
    /// independently; the total is the sum of the rounded buckets.
    pub fn from_minutes(
        day_normal: i64,
        night_normal: i64,
        day_holiday: i64,
        night_holiday: i64,
    ) -> Self {
        let day_normal = minutes_to_hours(day_normal);
        let night_normal = minutes_to_hours(night_normal);
        let day_holiday = minutes_to_hours(day_holiday);
        let night_holiday = minutes_to_hours(night_holiday);

        Self {
            total: day_normal + night_normal + day_holiday + night_holiday,
            day_normal,
            night_normal,
            day_holiday,
            night_holiday,
        }
    }

    /// Returns true if no hours were attributed to any bucket.
    pub fn is_zero(&self) -> bool {
        self.total.is_zero()
    }
}
