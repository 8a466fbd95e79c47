//! Per-tick snapshot computation.
//!
//! [`compute_snapshot`] evaluates every engine operation against a single
//! clock reading, so all values shown in one refresh agree with each other.
//! Nothing is carried over between ticks.

use crate::models::{AccrualSnapshot, ClockReading, Schedule};

use super::earnings::{earnings_per_second, earnings_this_month, earnings_today, monthly_salary};
use super::progress::{daily_progress_percent, month_progress_percent};
use super::working_days::is_working_day;
use super::working_hours::{
    daily_working_hours, elapsed_hours_this_month, elapsed_hours_today, is_currently_work_hours,
    total_working_hours_this_month,
};

/// Computes every derived value for one refresh tick.
///
/// # Example
///
/// ```
/// use salary_accrual::calculation::compute_snapshot;
/// use salary_accrual::models::{ClockReading, Schedule};
/// use rust_decimal::Decimal;
///
/// let now = ClockReading::from_ymd_hms(2025, 9, 3, 14, 0, 0).unwrap();
/// let snapshot = compute_snapshot(&Schedule::default(), now);
///
/// assert!(snapshot.is_working_day);
/// assert!(snapshot.is_currently_work_hours);
/// assert_eq!(snapshot.elapsed_hours_this_month, Decimal::from(20));
/// assert_eq!(snapshot.daily_progress_percent, Decimal::from(50));
/// ```
pub fn compute_snapshot(schedule: &Schedule, now: ClockReading) -> AccrualSnapshot {
    AccrualSnapshot {
        taken_at: now,
        currency: schedule.currency,
        is_working_day: is_working_day(schedule, now.date()),
        is_currently_work_hours: is_currently_work_hours(schedule, &now),
        elapsed_hours_today: elapsed_hours_today(schedule, &now),
        daily_working_hours: daily_working_hours(schedule),
        elapsed_hours_this_month: elapsed_hours_this_month(schedule, &now),
        total_working_hours_this_month: total_working_hours_this_month(schedule, &now),
        monthly_salary: monthly_salary(schedule),
        earnings_this_month: earnings_this_month(schedule, &now),
        earnings_today: earnings_today(schedule, &now),
        earnings_per_second: earnings_per_second(schedule, &now),
        month_progress_percent: month_progress_percent(&now),
        daily_progress_percent: daily_progress_percent(schedule, &now),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Currency, WorkingDays};
    use rust_decimal::Decimal;

    #[test]
    fn test_snapshot_carries_schedule_currency_and_reading() {
        let schedule = Schedule {
            currency: Currency::Jpy,
            ..Schedule::default()
        };
        let now = ClockReading::from_ymd_hms(2025, 10, 15, 9, 0, 0).unwrap();

        let snapshot = compute_snapshot(&schedule, now);

        assert_eq!(snapshot.currency, Currency::Jpy);
        assert_eq!(snapshot.taken_at, now);
        assert!(!snapshot.is_currently_work_hours);
    }

    #[test]
    fn test_snapshot_with_all_days_off_is_all_zero() {
        let schedule = Schedule {
            working_days: WorkingDays::NONE,
            ..Schedule::default()
        };
        let now = ClockReading::from_ymd_hms(2025, 10, 15, 14, 0, 0).unwrap();

        let snapshot = compute_snapshot(&schedule, now);

        assert!(!snapshot.is_working_day);
        assert_eq!(snapshot.total_working_hours_this_month, Decimal::ZERO);
        assert_eq!(snapshot.earnings_this_month, Decimal::ZERO);
        assert_eq!(snapshot.earnings_today, Decimal::ZERO);
        assert_eq!(snapshot.earnings_per_second, Decimal::ZERO);
        assert_eq!(snapshot.daily_progress_percent, Decimal::ZERO);
        // Calendar progress does not depend on the schedule.
        assert_eq!(snapshot.month_progress_percent, Decimal::new(484, 1));
    }

    #[test]
    fn test_snapshot_is_idempotent() {
        let schedule = Schedule::default();
        let now = ClockReading::from_ymd_hms(2025, 10, 15, 13, 27, 41).unwrap();

        assert_eq!(compute_snapshot(&schedule, now), compute_snapshot(&schedule, now));
    }

    #[test]
    fn test_snapshot_serializes_to_json() {
        let now = ClockReading::from_ymd_hms(2025, 10, 15, 14, 0, 0).unwrap();
        let snapshot = compute_snapshot(&Schedule::default(), now);

        let json = serde_json::to_value(&snapshot).unwrap();

        assert_eq!(json["currency"], "GBP");
        assert_eq!(json["taken_at"], "2025-10-15T14:00:00");
        assert_eq!(json["is_working_day"], true);
        let daily: Decimal = json["daily_progress_percent"].as_str().unwrap().parse().unwrap();
        assert_eq!(daily, Decimal::from(50));
    }
}
