//! Working hours calculation.
//!
//! This module measures the daily work window and how much of it has elapsed,
//! both for today and for the month to date.
//!
//! A window whose end hour is at or before its start hour is reported as-is
//! by [`daily_working_hours`] (zero or negative), but every accumulation in
//! this module treats it as an empty window of zero hours.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{ClockReading, Schedule};

use super::working_days::is_working_day;

/// Returns the signed length of the daily work window in hours.
///
/// This is `end_hour - start_hour` and is zero or negative for an inverted
/// window.
///
/// # Example
///
/// ```
/// use salary_accrual::calculation::daily_working_hours;
/// use salary_accrual::models::Schedule;
/// use rust_decimal::Decimal;
///
/// assert_eq!(daily_working_hours(&Schedule::default()), Decimal::from(8));
///
/// let inverted = Schedule { start_hour: 18, end_hour: 10, ..Schedule::default() };
/// assert_eq!(daily_working_hours(&inverted), Decimal::from(-8));
/// ```
pub fn daily_working_hours(schedule: &Schedule) -> Decimal {
    Decimal::from(schedule.end_hour) - Decimal::from(schedule.start_hour)
}

/// The work window length used for accumulation, never below zero.
pub(crate) fn effective_daily_hours(schedule: &Schedule) -> Decimal {
    daily_working_hours(schedule).max(Decimal::ZERO)
}

/// Hours of the window elapsed at a given time of day on a working day.
fn elapsed_in_window(schedule: &Schedule, time_of_day: Decimal) -> Decimal {
    let start = Decimal::from(schedule.start_hour);
    let end = Decimal::from(schedule.end_hour);
    let full = effective_daily_hours(schedule);

    if time_of_day < start {
        Decimal::ZERO
    } else if time_of_day >= end {
        full
    } else {
        time_of_day - start
    }
}

/// Returns the hours of today's work window that have elapsed.
///
/// - 0 if today is not a working day or `now` is before the start hour
/// - the full window if `now` is at or after the end hour
/// - otherwise the fractional hours since the start hour
///
/// # Example
///
/// ```
/// use salary_accrual::calculation::elapsed_hours_today;
/// use salary_accrual::models::{ClockReading, Schedule};
/// use rust_decimal::Decimal;
///
/// let schedule = Schedule::default(); // Mon-Fri 10:00-18:00
///
/// // Wednesday 14:30
/// let now = ClockReading::from_ymd_hms(2025, 10, 15, 14, 30, 0).unwrap();
/// assert_eq!(elapsed_hours_today(&schedule, &now), Decimal::new(45, 1)); // 4.5
/// ```
pub fn elapsed_hours_today(schedule: &Schedule, now: &ClockReading) -> Decimal {
    if !is_working_day(schedule, now.date()) {
        return Decimal::ZERO;
    }
    elapsed_in_window(schedule, now.hours_since_midnight())
}

/// Returns the working hours elapsed from the first of the month through `now`.
///
/// Earlier working days contribute their full window, today contributes
/// [`elapsed_hours_today`], and non-working days contribute nothing.
///
/// # Example
///
/// ```
/// use salary_accrual::calculation::elapsed_hours_this_month;
/// use salary_accrual::models::{ClockReading, Schedule};
/// use rust_decimal::Decimal;
///
/// // 2025-09-01 is a Monday; Wednesday the 3rd at 14:00
/// let now = ClockReading::from_ymd_hms(2025, 9, 3, 14, 0, 0).unwrap();
/// assert_eq!(elapsed_hours_this_month(&Schedule::default(), &now), Decimal::from(20));
/// ```
pub fn elapsed_hours_this_month(schedule: &Schedule, now: &ClockReading) -> Decimal {
    let full_day = effective_daily_hours(schedule);

    let earlier_days: Decimal = (1..now.day())
        .filter_map(|day| NaiveDate::from_ymd_opt(now.year(), now.month(), day))
        .filter(|date| is_working_day(schedule, *date))
        .map(|_| full_day)
        .sum();

    earlier_days + elapsed_hours_today(schedule, now)
}

/// Returns the working hours in the whole month containing `now`.
///
/// # Example
///
/// ```
/// use salary_accrual::calculation::total_working_hours_this_month;
/// use salary_accrual::models::{ClockReading, Schedule};
/// use rust_decimal::Decimal;
///
/// // September 2025 has 22 weekdays
/// let now = ClockReading::from_ymd_hms(2025, 9, 3, 14, 0, 0).unwrap();
/// assert_eq!(total_working_hours_this_month(&Schedule::default(), &now), Decimal::from(176));
/// ```
pub fn total_working_hours_this_month(schedule: &Schedule, now: &ClockReading) -> Decimal {
    let full_day = effective_daily_hours(schedule);

    (1..=now.days_in_month())
        .filter_map(|day| NaiveDate::from_ymd_opt(now.year(), now.month(), day))
        .filter(|date| is_working_day(schedule, *date))
        .map(|_| full_day)
        .sum()
}

/// Returns true if today is a working day and `now` is inside `[start, end)`.
///
/// # Example
///
/// ```
/// use salary_accrual::calculation::is_currently_work_hours;
/// use salary_accrual::models::{ClockReading, Schedule};
///
/// let schedule = Schedule::default();
/// let morning = ClockReading::from_ymd_hms(2025, 10, 15, 10, 0, 0).unwrap();
/// let evening = ClockReading::from_ymd_hms(2025, 10, 15, 18, 0, 0).unwrap();
///
/// assert!(is_currently_work_hours(&schedule, &morning));
/// assert!(!is_currently_work_hours(&schedule, &evening));
/// ```
pub fn is_currently_work_hours(schedule: &Schedule, now: &ClockReading) -> bool {
    if !is_working_day(schedule, now.date()) {
        return false;
    }
    let time_of_day = now.hours_since_midnight();
    time_of_day >= Decimal::from(schedule.start_hour) && time_of_day < Decimal::from(schedule.end_hour)
}
