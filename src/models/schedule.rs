//! Schedule model and related types.
//!
//! This module defines the [`Schedule`] a user configures (salary, daily
//! work window, working weekdays, display currency) and the [`WorkingDays`]
//! flag set it carries.

use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

use super::Currency;

/// Weekdays in flag order, Sunday first.
const SUNDAY_FIRST: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// One on/off flag per weekday, indexed Sunday=0 through Saturday=6.
///
/// # Example
///
/// ```
/// use salary_accrual::models::WorkingDays;
/// use chrono::Weekday;
///
/// let days: WorkingDays = "mon,wed,fri".parse().unwrap();
/// assert!(days.is_enabled(Weekday::Wed));
/// assert!(!days.is_enabled(Weekday::Tue));
/// assert_eq!(days.count(), 3);
/// assert_eq!(days.to_flag_string(), "0101010");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkingDays([bool; 7]);

impl WorkingDays {
    /// Monday through Friday.
    pub const WEEKDAYS: WorkingDays = WorkingDays([false, true, true, true, true, true, false]);

    /// No working days at all.
    pub const NONE: WorkingDays = WorkingDays([false; 7]);

    /// Every day of the week.
    pub const ALL: WorkingDays = WorkingDays([true; 7]);

    /// Creates a flag set from raw flags, Sunday first.
    pub const fn from_flags(flags: [bool; 7]) -> Self {
        Self(flags)
    }

    /// Creates a flag set with exactly the given weekdays enabled.
    pub fn from_weekdays<I: IntoIterator<Item = Weekday>>(weekdays: I) -> Self {
        let mut days = Self::NONE;
        for weekday in weekdays {
            days.set(weekday, true);
        }
        days
    }

    /// Returns the raw flags, Sunday first.
    pub fn flags(&self) -> [bool; 7] {
        self.0
    }

    /// Returns true if the weekday is flagged as a working day.
    pub fn is_enabled(&self, weekday: Weekday) -> bool {
        self.0[weekday.num_days_from_sunday() as usize]
    }

    /// Turns a weekday on or off.
    pub fn set(&mut self, weekday: Weekday, enabled: bool) {
        self.0[weekday.num_days_from_sunday() as usize] = enabled;
    }

    /// Returns the number of weekdays flagged on.
    pub fn count(&self) -> u32 {
        self.0.iter().filter(|&&on| on).count() as u32
    }

    /// Iterates over the enabled weekdays, Sunday first.
    pub fn enabled(&self) -> impl Iterator<Item = Weekday> + '_ {
        SUNDAY_FIRST
            .into_iter()
            .filter(move |weekday| self.is_enabled(*weekday))
    }

    /// Encodes the flags as seven `0`/`1` characters, Sunday first.
    pub fn to_flag_string(&self) -> String {
        self.0.iter().map(|&on| if on { '1' } else { '0' }).collect()
    }

    /// Decodes seven `0`/`1` characters, Sunday first.
    ///
    /// Any character other than `1` counts as off. Returns `None` unless the
    /// input has exactly seven characters.
    pub fn from_flag_string(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.trim().chars().collect();
        if chars.len() != 7 {
            return None;
        }
        let mut flags = [false; 7];
        for (flag, c) in flags.iter_mut().zip(chars) {
            *flag = c == '1';
        }
        Some(Self(flags))
    }
}

impl Default for WorkingDays {
    fn default() -> Self {
        Self::WEEKDAYS
    }
}

impl fmt::Display for WorkingDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.count() == 0 {
            return f.write_str("none");
        }
        let names: Vec<String> = self.enabled().map(|w| w.to_string()).collect();
        f.write_str(&names.join(","))
    }
}

/// Parses a comma separated weekday list such as `mon,tue,wed`.
///
/// Accepts the short or full English names in any case, plus the keywords
/// `none` and `all`.
impl FromStr for WorkingDays {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "none" => return Ok(Self::NONE),
            "all" => return Ok(Self::ALL),
            _ => {}
        }

        let mut days = Self::NONE;
        for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let weekday = part
                .parse::<Weekday>()
                .map_err(|_| EngineError::InvalidInput {
                    field: "days".to_string(),
                    message: format!("unknown weekday '{}'", part),
                })?;
            days.set(weekday, true);
        }
        Ok(days)
    }
}

/// The user's configuration driving every accrual computation.
///
/// # Example
///
/// ```
/// use salary_accrual::models::{Currency, Schedule, WorkingDays};
/// use rust_decimal::Decimal;
///
/// let schedule = Schedule::default();
/// assert_eq!(schedule.working_days, WorkingDays::WEEKDAYS);
/// assert_eq!(schedule.start_hour, 10);
/// assert_eq!(schedule.end_hour, 18);
/// assert_eq!(schedule.annual_salary, Decimal::new(30_000, 0));
/// assert_eq!(schedule.currency, Currency::Gbp);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Which weekdays count toward work-hour totals.
    pub working_days: WorkingDays,
    /// Hour of day the work window opens (24-hour clock).
    pub start_hour: u32,
    /// Hour of day the work window closes (24-hour clock).
    pub end_hour: u32,
    /// Gross annual salary before any currency conversion.
    pub annual_salary: Decimal,
    /// Currency the amounts are displayed in.
    pub currency: Currency,
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            working_days: WorkingDays::WEEKDAYS,
            start_hour: 10,
            end_hour: 18,
            annual_salary: Decimal::new(30_000, 0),
            currency: Currency::Gbp,
        }
    }
}

impl Schedule {
    /// Returns true if the work window closes at or before it opens.
    pub fn has_inverted_window(&self) -> bool {
        self.end_hour <= self.start_hour
    }
}
