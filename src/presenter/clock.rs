//! Clock sources for the refresh loop.

use crate::models::ClockReading;

/// Produces the clock reading for each refresh tick.
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> ClockReading;
}

/// The local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> ClockReading {
        ClockReading::now()
    }
}

/// A clock stopped at one instant, for previews and tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub ClockReading);

impl Clock for FixedClock {
    fn now(&self) -> ClockReading {
        self.0
    }
}
