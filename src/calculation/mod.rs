//! Calculation logic for the salary accrual engine.
//!
//! Every function here is a pure function of a [`Schedule`](crate::models::Schedule)
//! and, where time matters, a [`ClockReading`](crate::models::ClockReading).
//! This module covers working day detection, elapsed and total working hours,
//! accrual fractions, earnings, and the per-tick snapshot that bundles them.

mod earnings;
mod progress;
mod snapshot;
mod working_days;
mod working_hours;

pub use earnings::{earnings_per_second, earnings_this_month, earnings_today, monthly_salary};
pub use progress::{daily_fraction, daily_progress_percent, month_progress_percent, monthly_fraction};
pub use snapshot::compute_snapshot;
pub use working_days::{WEEKS_PER_YEAR, is_working_day, total_working_days_per_year};
pub use working_hours::{
    daily_working_hours, elapsed_hours_this_month, elapsed_hours_today, is_currently_work_hours,
    total_working_hours_this_month,
};
