//! Property tests for the accrual calculations.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

use salary_accrual::calculation::{
    compute_snapshot, daily_fraction, earnings_this_month, earnings_today,
    elapsed_hours_this_month, elapsed_hours_today, monthly_fraction,
    total_working_hours_this_month,
};
use salary_accrual::format::sub_cent_digit;
use salary_accrual::models::{ClockReading, Currency, Schedule, WorkingDays};

fn arb_schedule() -> impl Strategy<Value = Schedule> {
    (
        any::<[bool; 7]>(),
        0u32..=24,
        0u32..=24,
        0u64..=500_000,
        prop::sample::select(Currency::ALL.to_vec()),
    )
        .prop_map(|(flags, start_hour, end_hour, salary, currency)| Schedule {
            working_days: WorkingDays::from_flags(flags),
            start_hour,
            end_hour,
            annual_salary: Decimal::from(salary),
            currency,
        })
}

/// Any second in 2024-2027.
fn arb_reading() -> impl Strategy<Value = ClockReading> {
    (0i64..4 * 366 * 86_400).prop_map(|offset| {
        let base = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        ClockReading::new(base + Duration::seconds(offset))
    })
}

proptest! {
    #[test]
    fn fractions_stay_in_unit_interval(schedule in arb_schedule(), now in arb_reading()) {
        let monthly = monthly_fraction(&schedule, &now);
        let daily = daily_fraction(&schedule, &now);

        prop_assert!(monthly >= Decimal::ZERO && monthly <= Decimal::ONE);
        prop_assert!(daily >= Decimal::ZERO && daily <= Decimal::ONE);
    }

    #[test]
    fn elapsed_never_exceeds_total(schedule in arb_schedule(), now in arb_reading()) {
        let elapsed = elapsed_hours_this_month(&schedule, &now);
        let total = total_working_hours_this_month(&schedule, &now);

        prop_assert!(elapsed >= Decimal::ZERO);
        prop_assert!(elapsed <= total);
    }

    #[test]
    fn elapsed_hours_are_monotonic_within_a_day(
        schedule in arb_schedule(),
        now in arb_reading(),
        step in 1i64..86_400,
    ) {
        let later = ClockReading::new(now.datetime() + Duration::seconds(step));
        prop_assume!(later.date() == now.date());

        prop_assert!(elapsed_hours_today(&schedule, &later) >= elapsed_hours_today(&schedule, &now));
        prop_assert!(
            elapsed_hours_this_month(&schedule, &later) >= elapsed_hours_this_month(&schedule, &now)
        );
    }

    #[test]
    fn snapshot_is_idempotent(schedule in arb_schedule(), now in arb_reading()) {
        prop_assert_eq!(compute_snapshot(&schedule, now), compute_snapshot(&schedule, now));
    }

    #[test]
    fn no_working_days_earns_nothing(mut schedule in arb_schedule(), now in arb_reading()) {
        schedule.working_days = WorkingDays::NONE;

        prop_assert_eq!(earnings_this_month(&schedule, &now), Decimal::ZERO);
        prop_assert_eq!(earnings_today(&schedule, &now), Decimal::ZERO);
    }

    #[test]
    fn empty_window_earns_nothing(mut schedule in arb_schedule(), now in arb_reading()) {
        schedule.end_hour = schedule.start_hour.min(schedule.end_hour);

        prop_assert_eq!(earnings_this_month(&schedule, &now), Decimal::ZERO);
        prop_assert_eq!(earnings_today(&schedule, &now), Decimal::ZERO);
    }

    #[test]
    fn month_earnings_bounded_by_monthly_salary(schedule in arb_schedule(), now in arb_reading()) {
        let earned = earnings_this_month(&schedule, &now);

        prop_assert!(earned >= Decimal::ZERO);
        prop_assert!(earned <= schedule.annual_salary / Decimal::from(12));
    }

    #[test]
    fn sub_cent_digit_is_a_digit(mills in 0i64..1_000_000_000) {
        prop_assert!(sub_cent_digit(Decimal::new(mills, 3)) <= 9);
        prop_assert_eq!(i64::from(sub_cent_digit(Decimal::new(mills, 3))), mills % 10);
    }
}
