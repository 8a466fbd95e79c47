//! Core data models for the salary accrual engine.
//!
//! This module contains the schedule, clock and snapshot types used throughout
//! the engine.

mod clock;
mod currency;
mod schedule;
mod snapshot;

pub use clock::{ClockReading, days_in_month};
pub use currency::{Currency, LocaleStyle};
pub use schedule::{Schedule, WorkingDays};
pub use snapshot::AccrualSnapshot;
