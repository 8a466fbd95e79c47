//! Accrual snapshot model.
//!
//! An [`AccrualSnapshot`] holds every value the dashboard shows for a single
//! refresh tick. All of its fields are derived from one [`ClockReading`].

use rust_decimal::Decimal;
use serde::Serialize;

use super::{ClockReading, Currency};

/// Everything derived from a schedule and one clock reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccrualSnapshot {
    /// The clock reading every field was computed from.
    pub taken_at: ClockReading,
    /// Currency the amounts are expressed in.
    pub currency: Currency,
    /// Whether today is a working day.
    pub is_working_day: bool,
    /// Whether `taken_at` falls inside today's work window.
    pub is_currently_work_hours: bool,
    /// Hours of the work window elapsed today.
    pub elapsed_hours_today: Decimal,
    /// Signed length of the work window as configured.
    pub daily_working_hours: Decimal,
    /// Working hours elapsed since the first of the month.
    pub elapsed_hours_this_month: Decimal,
    /// Working hours in the whole month.
    pub total_working_hours_this_month: Decimal,
    /// One twelfth of the annual salary.
    pub monthly_salary: Decimal,
    /// Salary accrued so far this month.
    pub earnings_this_month: Decimal,
    /// Salary accrued so far today.
    pub earnings_today: Decimal,
    /// Salary accrued per second of working time this month.
    pub earnings_per_second: Decimal,
    /// Calendar progress through the month, 0 to 100, one decimal place.
    pub month_progress_percent: Decimal,
    /// Progress through today's work window, 0 to 100.
    pub daily_progress_percent: Decimal,
}
