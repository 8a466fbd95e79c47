//! Configuration loading and settings persistence.
//!
//! This module loads schedules from YAML files and provides the key-value
//! [`SettingsStore`] the presenter uses to remember a schedule between
//! sessions. The accrual engine never touches either.
//!
//! # Example
//!
//! ```no_run
//! use salary_accrual::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/schedule.yaml").unwrap();
//! println!("Working days: {}", loader.schedule().working_days);
//! ```

mod loader;
mod store;
mod types;

pub use loader::{ConfigLoader, MAX_HOUR};
pub use store::{
    CURRENCY_KEY, END_HOUR_KEY, JsonFileSettingsStore, MemorySettingsStore, SALARY_KEY,
    START_HOUR_KEY, SettingsStore, WORKING_DAYS_KEY, persist_schedule, restore_schedule,
};
pub use types::ScheduleConfig;
