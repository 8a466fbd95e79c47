//! Clock reading model.
//!
//! A [`ClockReading`] is the single snapshot of "now" passed to every engine
//! call. The engine never reads the wall clock itself.

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, Timelike, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An immutable local wall-clock instant.
///
/// # Example
///
/// ```
/// use salary_accrual::models::ClockReading;
/// use chrono::Weekday;
/// use rust_decimal::Decimal;
///
/// // 2025-10-15 is a Wednesday
/// let now = ClockReading::from_ymd_hms(2025, 10, 15, 14, 30, 0).unwrap();
/// assert_eq!(now.weekday(), Weekday::Wed);
/// assert_eq!(now.hours_since_midnight(), Decimal::new(145, 1)); // 14.5
/// assert_eq!(now.days_in_month(), 31);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClockReading(NaiveDateTime);

impl ClockReading {
    /// Wraps a local date-time.
    pub const fn new(datetime: NaiveDateTime) -> Self {
        Self(datetime)
    }

    /// Builds a reading from calendar and clock fields.
    ///
    /// Returns `None` if the fields do not form a valid date-time.
    pub fn from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(hour, minute, second))
            .map(Self)
    }

    /// Reads the local wall clock.
    pub fn now() -> Self {
        Self(Local::now().naive_local())
    }

    /// Returns the underlying date-time.
    pub fn datetime(&self) -> NaiveDateTime {
        self.0
    }

    /// Returns the calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0.date()
    }

    /// Returns the calendar year.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month, 1 through 12.
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day of the month, starting at 1.
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the day of the week.
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Returns the hour, 0 through 23.
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Returns the minute, 0 through 59.
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Returns the second, 0 through 59.
    pub fn second(&self) -> u32 {
        self.0.second()
    }

    /// Returns the time of day as fractional hours since midnight.
    pub fn hours_since_midnight(&self) -> Decimal {
        Decimal::from(self.0.num_seconds_from_midnight()) / Decimal::from(3600)
    }

    /// Returns the number of days in this reading's month.
    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year(), self.month())
    }
}

/// Returns the number of days in a month, found as "day 0 of next month".
///
/// # Example
///
/// ```
/// use salary_accrual::models::days_in_month;
///
/// assert_eq!(days_in_month(2024, 2), 29);
/// assert_eq!(days_in_month(2025, 2), 28);
/// assert_eq!(days_in_month(2025, 12), 31);
/// ```
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month >= 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };

    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map_or(31, |last| last.day())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_are_exposed() {
        let now = ClockReading::from_ymd_hms(2026, 3, 9, 8, 15, 42).unwrap();

        assert_eq!(now.year(), 2026);
        assert_eq!(now.month(), 3);
        assert_eq!(now.day(), 9);
        assert_eq!(now.weekday(), Weekday::Mon);
        assert_eq!(now.hour(), 8);
        assert_eq!(now.minute(), 15);
        assert_eq!(now.second(), 42);
    }

    #[test]
    fn test_invalid_fields_return_none() {
        assert!(ClockReading::from_ymd_hms(2025, 2, 29, 0, 0, 0).is_none());
        assert!(ClockReading::from_ymd_hms(2025, 1, 1, 24, 0, 0).is_none());
    }

    #[test]
    fn test_hours_since_midnight_includes_minutes_and_seconds() {
        let now = ClockReading::from_ymd_hms(2025, 1, 1, 10, 45, 0).unwrap();
        assert_eq!(now.hours_since_midnight(), Decimal::new(1075, 2)); // 10.75

        let now = ClockReading::from_ymd_hms(2025, 1, 1, 0, 0, 36).unwrap();
        assert_eq!(now.hours_since_midnight(), Decimal::new(1, 2)); // 0.01
    }

    #[test]
    fn test_midnight_is_zero_hours() {
        let now = ClockReading::from_ymd_hms(2025, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(now.hours_since_midnight(), Decimal::ZERO);
    }

    #[test]
    fn test_days_in_month_handles_leap_years() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
    }

    #[test]
    fn test_days_in_month_for_every_month_of_2025() {
        let expected = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for (index, days) in expected.iter().enumerate() {
            assert_eq!(days_in_month(2025, index as u32 + 1), *days);
        }
    }

    #[test]
    fn test_readings_order_chronologically() {
        let earlier = ClockReading::from_ymd_hms(2025, 6, 1, 9, 0, 0).unwrap();
        let later = ClockReading::from_ymd_hms(2025, 6, 1, 9, 0, 1).unwrap();
        assert!(earlier < later);
    }
}
