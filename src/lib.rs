//! Live salary accrual estimates.
//!
//! This crate estimates how much of an annual salary has been earned so far
//! today and this calendar month, given a daily work window and a set of
//! working weekdays. The [`calculation`] module is a set of pure functions
//! over a [`models::Schedule`] and a [`models::ClockReading`]; the
//! [`presenter`] module wraps them in a refreshing terminal dashboard.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod presenter;
