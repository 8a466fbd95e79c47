//! The presenter around the accrual engine.
//!
//! This module owns everything the engine deliberately does not: the mutable
//! schedule and its persistence, the clock, the periodic refresh loop, and
//! rendering snapshots for a terminal.

mod clock;
mod dashboard;
mod refresh;
mod session;

pub use clock::{Clock, FixedClock, SystemClock};
pub use dashboard::{AmountStyle, BAR_WIDTH, progress_bar, render_dashboard, status_message};
pub use refresh::{DEFAULT_REFRESH_PERIOD, MIN_REFRESH_PERIOD, RefreshHandle, spawn_refresh};
pub use session::Presenter;
