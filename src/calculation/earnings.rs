//! Earnings accrual.
//!
//! Converts the annual salary into monthly, daily and per-second amounts and
//! scales them by the elapsed fractions. Amounts are never rounded here;
//! rounding is a display concern handled by [`crate::format`].

use rust_decimal::Decimal;

use crate::models::{ClockReading, Schedule};

use super::progress::{daily_fraction, monthly_fraction};
use super::working_days::{is_working_day, total_working_days_per_year};
use super::working_hours::total_working_hours_this_month;

const MONTHS_PER_YEAR: i64 = 12;
const SECONDS_PER_HOUR: i64 = 3600;

/// Returns one twelfth of the annual salary.
pub fn monthly_salary(schedule: &Schedule) -> Decimal {
    schedule.annual_salary / Decimal::from(MONTHS_PER_YEAR)
}

/// Returns the salary accrued so far this month.
///
/// `(annual_salary / 12) * monthly_fraction`.
///
/// # Example
///
/// ```
/// use salary_accrual::calculation::earnings_this_month;
/// use salary_accrual::models::{ClockReading, Schedule};
/// use rust_decimal::Decimal;
///
/// // Last working day of September 2025, after hours: the full month is earned.
/// let now = ClockReading::from_ymd_hms(2025, 9, 30, 19, 0, 0).unwrap();
/// assert_eq!(earnings_this_month(&Schedule::default(), &now), Decimal::from(2500));
/// ```
pub fn earnings_this_month(schedule: &Schedule, now: &ClockReading) -> Decimal {
    monthly_salary(schedule) * monthly_fraction(schedule, now)
}

/// Returns the salary accrued so far today.
///
/// `(annual_salary / total_working_days_per_year) * daily_fraction`, or zero
/// when there are no working days or today is not one of them.
///
/// # Example
///
/// ```
/// use salary_accrual::calculation::earnings_today;
/// use salary_accrual::models::{ClockReading, Schedule};
/// use rust_decimal::Decimal;
///
/// let schedule = Schedule {
///     annual_salary: Decimal::from(26_000),
///     ..Schedule::default()
/// };
///
/// // Halfway through a Wednesday: half of 26000 / 260
/// let now = ClockReading::from_ymd_hms(2025, 10, 15, 14, 0, 0).unwrap();
/// assert_eq!(earnings_today(&schedule, &now), Decimal::from(50));
/// ```
pub fn earnings_today(schedule: &Schedule, now: &ClockReading) -> Decimal {
    let days_per_year = total_working_days_per_year(schedule);
    if days_per_year == 0 || !is_working_day(schedule, now.date()) {
        return Decimal::ZERO;
    }
    let daily_salary = schedule.annual_salary / Decimal::from(days_per_year);
    daily_salary * daily_fraction(schedule, now)
}

/// Returns the salary accrued per second of working time this month.
///
/// `(annual_salary / 12) / (total_working_hours_this_month * 3600)`, or zero
/// when the month has no working hours.
pub fn earnings_per_second(schedule: &Schedule, now: &ClockReading) -> Decimal {
    let working_seconds =
        total_working_hours_this_month(schedule, now) * Decimal::from(SECONDS_PER_HOUR);
    if working_seconds <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    monthly_salary(schedule) / working_seconds
}
