//! Working day detection.
//!
//! This module decides whether a calendar date counts as a working day and
//! derives the annual working day approximation used for daily earnings.

use chrono::{Datelike, NaiveDate};

use crate::models::Schedule;

/// Weeks assumed in a year when converting a weekly pattern to annual days.
///
/// This is a fixed approximation: it ignores the one or two extra days a real
/// year has beyond 52 whole weeks, as well as public holidays.
pub const WEEKS_PER_YEAR: u32 = 52;

/// Returns true if the date's weekday is flagged on in the schedule.
///
/// # Example
///
/// ```
/// use salary_accrual::calculation::is_working_day;
/// use salary_accrual::models::Schedule;
/// use chrono::NaiveDate;
///
/// let schedule = Schedule::default();
///
/// // 2025-10-15 is a Wednesday, 2025-10-18 a Saturday
/// assert!(is_working_day(&schedule, NaiveDate::from_ymd_opt(2025, 10, 15).unwrap()));
/// assert!(!is_working_day(&schedule, NaiveDate::from_ymd_opt(2025, 10, 18).unwrap()));
/// ```
pub fn is_working_day(schedule: &Schedule, date: NaiveDate) -> bool {
    schedule.working_days.is_enabled(date.weekday())
}

/// Returns the approximate number of working days in a year.
///
/// Computed as the number of enabled weekdays multiplied by
/// [`WEEKS_PER_YEAR`]. The result is not calendar-exact.
///
/// # Example
///
/// ```
/// use salary_accrual::calculation::total_working_days_per_year;
/// use salary_accrual::models::Schedule;
///
/// assert_eq!(total_working_days_per_year(&Schedule::default()), 260);
/// ```
pub fn total_working_days_per_year(schedule: &Schedule) -> u32 {
    schedule.working_days.count() * WEEKS_PER_YEAR
}
