//! Terminal dashboard rendering.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::format::{FractionDigits, format_currency, format_live};
use crate::models::{AccrualSnapshot, Currency};

/// Width of the progress bars in characters.
pub const BAR_WIDTH: usize = 24;

/// How running counters are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AmountStyle {
    /// Rounded to cents.
    #[default]
    Cents,
    /// Truncated to cents with the sub-cent digit appended.
    Live,
}

/// The one-line status shown under the counters.
pub fn status_message(snapshot: &AccrualSnapshot) -> &'static str {
    if !snapshot.is_working_day {
        "Not a working day"
    } else if snapshot.daily_working_hours <= Decimal::ZERO {
        "Work window is empty"
    } else if snapshot.is_currently_work_hours {
        "Earning now"
    } else if snapshot.elapsed_hours_today.is_zero() {
        "Work has not started yet"
    } else {
        "Done for the day"
    }
}

/// Renders a percentage as a fixed-width bar such as `[######------]`.
///
/// # Example
///
/// ```
/// use salary_accrual::presenter::progress_bar;
/// use rust_decimal::Decimal;
///
/// assert_eq!(progress_bar(Decimal::from(50), 10), "[#####-----]");
/// ```
pub fn progress_bar(percent: Decimal, width: usize) -> String {
    let share = percent.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED) / Decimal::ONE_HUNDRED;
    let filled = (share * Decimal::from(width as u64))
        .round_dp_with_strategy(0, RoundingStrategy::ToZero)
        .to_usize()
        .unwrap_or(0)
        .min(width);

    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

fn percent(value: Decimal) -> String {
    format!(
        "{:.1}",
        value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
    )
}

fn counter(amount: Decimal, currency: Currency, style: AmountStyle) -> String {
    match style {
        AmountStyle::Cents => format_currency(amount, currency, FractionDigits::Cents),
        AmountStyle::Live => format_live(amount, currency).to_string(),
    }
}

/// Renders the full dashboard for one snapshot.
pub fn render_dashboard(snapshot: &AccrualSnapshot, style: AmountStyle) -> String {
    let currency = snapshot.currency;
    let rate = snapshot
        .earnings_per_second
        .round_dp_with_strategy(4, RoundingStrategy::MidpointAwayFromZero);

    let lines = [
        format!(
            "{}  ({})",
            snapshot.taken_at.datetime().format("%A %d %B %Y, %H:%M:%S"),
            status_message(snapshot)
        ),
        String::new(),
        format!(
            "Monthly salary      {}",
            format_currency(snapshot.monthly_salary, currency, FractionDigits::Whole)
        ),
        format!(
            "Earned this month   {:<16} {} {:>5}% of month",
            counter(snapshot.earnings_this_month, currency, style),
            progress_bar(snapshot.month_progress_percent, BAR_WIDTH),
            percent(snapshot.month_progress_percent)
        ),
        format!(
            "Earned today        {:<16} {} {:>5}% of day",
            counter(snapshot.earnings_today, currency, style),
            progress_bar(snapshot.daily_progress_percent, BAR_WIDTH),
            percent(snapshot.daily_progress_percent)
        ),
        format!("Per working second  {} {}", rate, currency.code()),
        format!(
            "Hours this month    {} of {}",
            snapshot.elapsed_hours_this_month.round_dp(2).normalize(),
            snapshot.total_working_hours_this_month.normalize()
        ),
    ];

    lines.join("\n")
}
