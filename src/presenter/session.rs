//! Presenter session state.
//!
//! The [`Presenter`] is the single owner of the mutable schedule. Edits go
//! through [`Presenter::update`], which persists them to the settings store
//! and publishes them to any running refresh loop.

use tokio::sync::watch;
use tracing::{info, warn};

use crate::calculation::compute_snapshot;
use crate::config::{SettingsStore, persist_schedule, restore_schedule};
use crate::error::EngineResult;
use crate::models::{AccrualSnapshot, ClockReading, Schedule};

/// Owns the schedule and its settings store.
///
/// # Example
///
/// ```
/// use salary_accrual::config::MemorySettingsStore;
/// use salary_accrual::models::{ClockReading, Schedule};
/// use salary_accrual::presenter::Presenter;
/// use rust_decimal::Decimal;
///
/// let mut presenter = Presenter::open(MemorySettingsStore::new(), &Schedule::default());
/// presenter.update(|s| s.annual_salary = Decimal::from(60_000)).unwrap();
///
/// let now = ClockReading::from_ymd_hms(2025, 9, 30, 19, 0, 0).unwrap();
/// assert_eq!(presenter.snapshot(now).earnings_this_month, Decimal::from(5000));
/// ```
pub struct Presenter<S: SettingsStore> {
    store: S,
    schedule: watch::Sender<Schedule>,
}

impl<S: SettingsStore> Presenter<S> {
    /// Restores the schedule from `store`, falling back to `defaults` per field.
    pub fn open(store: S, defaults: &Schedule) -> Self {
        let schedule = restore_schedule(&store, defaults);
        info!(
            salary = %schedule.annual_salary,
            start_hour = schedule.start_hour,
            end_hour = schedule.end_hour,
            working_days = %schedule.working_days,
            currency = %schedule.currency,
            "schedule restored"
        );
        let (schedule, _) = watch::channel(schedule);
        Self { store, schedule }
    }

    /// Returns a copy of the current schedule.
    pub fn schedule(&self) -> Schedule {
        self.schedule.borrow().clone()
    }

    /// Returns a receiver that observes every schedule edit.
    pub fn subscribe(&self) -> watch::Receiver<Schedule> {
        self.schedule.subscribe()
    }

    /// Applies an edit, publishes it, then saves it.
    ///
    /// The edit stays in effect even if saving fails, so the live display
    /// keeps running; the save error is returned to the caller.
    pub fn update<F: FnOnce(&mut Schedule)>(&mut self, edit: F) -> EngineResult<()> {
        let mut next = self.schedule();
        edit(&mut next);

        if next.has_inverted_window() {
            warn!(
                start_hour = next.start_hour,
                end_hour = next.end_hour,
                "work window is empty; no earnings will accrue"
            );
        }

        self.schedule.send_replace(next.clone());
        persist_schedule(&mut self.store, &next)
    }

    /// Computes the snapshot for the current schedule at `now`.
    pub fn snapshot(&self, now: ClockReading) -> AccrualSnapshot {
        compute_snapshot(&self.schedule.borrow(), now)
    }

    /// Returns the settings store.
    pub fn store(&self) -> &S {
        &self.store
    }
}
