//! Accrual fractions and progress percentages.
//!
//! Fractions are always clamped to `[0, 1]` and fall back to zero whenever
//! their denominator is zero, so a degenerate schedule shows no progress
//! instead of failing.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{ClockReading, Schedule};

use super::working_days::is_working_day;
use super::working_hours::{
    effective_daily_hours, elapsed_hours_this_month, elapsed_hours_today,
    total_working_hours_this_month,
};

/// Divides and clamps to `[0, 1]`, returning zero for a non-positive denominator.
fn clamped_ratio(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    (numerator / denominator).clamp(Decimal::ZERO, Decimal::ONE)
}

/// Returns the share of this month's working hours that has elapsed.
///
/// # Example
///
/// ```
/// use salary_accrual::calculation::monthly_fraction;
/// use salary_accrual::models::{ClockReading, Schedule};
/// use rust_decimal::Decimal;
///
/// // 2 of February 2026's 160 working hours
/// let now = ClockReading::from_ymd_hms(2026, 2, 2, 12, 0, 0).unwrap();
/// assert_eq!(monthly_fraction(&Schedule::default(), &now), Decimal::new(125, 4)); // 0.0125
/// ```
pub fn monthly_fraction(schedule: &Schedule, now: &ClockReading) -> Decimal {
    clamped_ratio(
        elapsed_hours_this_month(schedule, now),
        total_working_hours_this_month(schedule, now),
    )
}

/// Returns the share of today's work window that has elapsed.
///
/// Zero on non-working days and for empty or inverted windows.
///
/// # Example
///
/// ```
/// use salary_accrual::calculation::daily_fraction;
/// use salary_accrual::models::{ClockReading, Schedule};
/// use rust_decimal::Decimal;
///
/// let now = ClockReading::from_ymd_hms(2025, 10, 15, 14, 0, 0).unwrap();
/// assert_eq!(daily_fraction(&Schedule::default(), &now), Decimal::new(5, 1)); // 0.5
/// ```
pub fn daily_fraction(schedule: &Schedule, now: &ClockReading) -> Decimal {
    if !is_working_day(schedule, now.date()) {
        return Decimal::ZERO;
    }
    clamped_ratio(
        elapsed_hours_today(schedule, now),
        effective_daily_hours(schedule),
    )
}

/// Returns calendar progress through the month as a percentage.
///
/// Computed as `day / days_in_month * 100`, rounded to one decimal place
/// with halves rounded away from zero.
///
/// # Example
///
/// ```
/// use salary_accrual::calculation::month_progress_percent;
/// use salary_accrual::models::ClockReading;
/// use rust_decimal::Decimal;
///
/// let now = ClockReading::from_ymd_hms(2025, 9, 3, 14, 0, 0).unwrap();
/// assert_eq!(month_progress_percent(&now), Decimal::new(100, 1)); // 10.0
/// ```
pub fn month_progress_percent(now: &ClockReading) -> Decimal {
    let percent =
        Decimal::from(now.day()) * Decimal::ONE_HUNDRED / Decimal::from(now.days_in_month());
    percent
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
        .clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
}

/// Returns today's window progress as a percentage, `daily_fraction * 100`.
pub fn daily_progress_percent(schedule: &Schedule, now: &ClockReading) -> Decimal {
    daily_fraction(schedule, now) * Decimal::ONE_HUNDRED
}
