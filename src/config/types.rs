//! Configuration types for schedule files.
//!
//! This module contains the strongly-typed structure deserialized from a YAML
//! schedule file. Every field is optional and falls back to the default
//! schedule.

use chrono::Weekday;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::{Currency, Schedule, WorkingDays};

/// A schedule as written in a YAML file.
///
/// ```yaml
/// annual_salary: 42000
/// start_hour: 9
/// end_hour: 17
/// currency: EUR
/// working_days: [mon, tue, wed, thu]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScheduleConfig {
    /// Gross annual salary.
    pub annual_salary: Decimal,
    /// Hour the work window opens.
    pub start_hour: u32,
    /// Hour the work window closes.
    pub end_hour: u32,
    /// Display currency code.
    pub currency: Currency,
    /// Weekdays that count as working days.
    pub working_days: Vec<Weekday>,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        let schedule = Schedule::default();
        Self {
            annual_salary: schedule.annual_salary,
            start_hour: schedule.start_hour,
            end_hour: schedule.end_hour,
            currency: schedule.currency,
            working_days: schedule.working_days.enabled().collect(),
        }
    }
}

impl From<&ScheduleConfig> for Schedule {
    fn from(config: &ScheduleConfig) -> Self {
        Schedule {
            working_days: WorkingDays::from_weekdays(config.working_days.iter().copied()),
            start_hour: config.start_hour,
            end_hour: config.end_hour,
            annual_salary: config.annual_salary,
            currency: config.currency,
        }
    }
}
