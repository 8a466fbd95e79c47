//! Periodic refresh loop.
//!
//! [`spawn_refresh`] recomputes a full [`AccrualSnapshot`] from scratch on
//! every tick and whenever the schedule changes, then hands it to a sink.
//! The loop is owned by a [`RefreshHandle`]: stopping the handle ends the
//! loop cleanly and dropping it aborts the task.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, warn};

use crate::calculation::compute_snapshot;
use crate::models::{AccrualSnapshot, Schedule};

use super::clock::Clock;

/// Refresh period used by the dashboard unless told otherwise.
pub const DEFAULT_REFRESH_PERIOD: Duration = Duration::from_secs(1);

/// Shortest accepted refresh period.
pub const MIN_REFRESH_PERIOD: Duration = Duration::from_millis(10);

/// Owns a running refresh loop.
#[derive(Debug)]
pub struct RefreshHandle {
    shutdown: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<u64>>,
}

impl RefreshHandle {
    /// Signals the loop to stop and waits for it to finish.
    ///
    /// Returns the number of snapshots delivered.
    pub async fn stop(mut self) -> u64 {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        match self.task.take() {
            Some(task) => match task.await {
                Ok(ticks) => ticks,
                Err(error) => {
                    warn!(%error, "refresh task ended abnormally");
                    0
                }
            },
            None => 0,
        }
    }

    /// Returns true once the loop has exited.
    pub fn is_finished(&self) -> bool {
        self.task.as_ref().is_none_or(|task| task.is_finished())
    }
}

impl Drop for RefreshHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

/// Starts the refresh loop on the current tokio runtime.
///
/// The first snapshot is delivered immediately. After that one is delivered
/// every `period` (never faster than [`MIN_REFRESH_PERIOD`]) and once more
/// after each schedule edit. If the schedule's sender is dropped the loop
/// keeps ticking with the last schedule it saw.
pub fn spawn_refresh<F>(
    mut schedule: watch::Receiver<Schedule>,
    clock: Arc<dyn Clock>,
    period: Duration,
    mut on_tick: F,
) -> RefreshHandle
where
    F: FnMut(AccrualSnapshot) + Send + 'static,
{
    let period = period.max(MIN_REFRESH_PERIOD);
    let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<()>();

    let task = tokio::spawn(async move {
        let mut interval = time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut watching = true;
        let mut ticks: u64 = 0;

        debug!(period_ms = period.as_millis() as u64, "refresh loop started");

        loop {
            tokio::select! {
                biased;
                _ = &mut shutdown_rx => break,
                changed = schedule.changed(), if watching => {
                    if changed.is_err() {
                        debug!("schedule sender dropped, keeping last schedule");
                        watching = false;
                        continue;
                    }
                    debug!("schedule changed, refreshing early");
                }
                _ = interval.tick() => {}
            }

            let snapshot = {
                let current = schedule.borrow_and_update();
                compute_snapshot(&current, clock.now())
            };
            on_tick(snapshot);
            ticks += 1;
        }

        debug!(ticks, "refresh loop stopped");
        ticks
    });

    RefreshHandle {
        shutdown: Some(shutdown_tx),
        task: Some(task),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ClockReading, Currency};
    use crate::presenter::FixedClock;
    use std::sync::Mutex;

    fn fixed_clock() -> Arc<dyn Clock> {
        Arc::new(FixedClock(
            ClockReading::from_ymd_hms(2025, 10, 15, 14, 0, 0).unwrap(),
        ))
    }

    #[tokio::test]
    async fn test_first_snapshot_is_immediate() {
        let (_tx, rx) = watch::channel(Schedule::default());
        let (snap_tx, mut snap_rx) = tokio::sync::mpsc::unbounded_channel();

        let handle = spawn_refresh(rx, fixed_clock(), Duration::from_secs(3600), move |s| {
            let _ = snap_tx.send(s);
        });

        let first = time::timeout(Duration::from_secs(5), snap_rx.recv())
            .await
            .expect("no snapshot delivered")
            .expect("sink dropped");
        assert!(first.is_currently_work_hours);

        assert_eq!(handle.stop().await, 1);
    }

    #[tokio::test]
    async fn test_schedule_edit_triggers_refresh() {
        let (tx, rx) = watch::channel(Schedule::default());
        let (snap_tx, mut snap_rx) = tokio::sync::mpsc::unbounded_channel();

        let handle = spawn_refresh(rx, fixed_clock(), Duration::from_secs(3600), move |s| {
            let _ = snap_tx.send(s);
        });

        let first = snap_rx.recv().await.unwrap();
        assert_eq!(first.currency, Currency::Gbp);

        tx.send_modify(|s| s.currency = Currency::Eur);

        let second = time::timeout(Duration::from_secs(5), snap_rx.recv())
            .await
            .expect("edit did not trigger a refresh")
            .unwrap();
        assert_eq!(second.currency, Currency::Eur);

        handle.stop().await;
    }

    #[tokio::test]
    async fn test_ticks_repeat_until_stopped() {
        let (_tx, rx) = watch::channel(Schedule::default());
        let count = Arc::new(Mutex::new(0u32));
        let sink_count = Arc::clone(&count);

        let handle = spawn_refresh(rx, fixed_clock(), MIN_REFRESH_PERIOD, move |_| {
            *sink_count.lock().unwrap() += 1;
        });

        time::sleep(Duration::from_millis(100)).await;
        let delivered = handle.stop().await;

        assert!(delivered >= 2, "only {} ticks delivered", delivered);
        let after_stop = *count.lock().unwrap();
        time::sleep(Duration::from_millis(50)).await;
        assert_eq!(*count.lock().unwrap(), after_stop);
    }

    #[tokio::test]
    async fn test_dropped_sender_keeps_loop_alive() {
        let (tx, rx) = watch::channel(Schedule::default());
        let count = Arc::new(Mutex::new(0u32));
        let sink_count = Arc::clone(&count);

        let handle = spawn_refresh(rx, fixed_clock(), MIN_REFRESH_PERIOD, move |_| {
            *sink_count.lock().unwrap() += 1;
        });
        drop(tx);

        time::sleep(Duration::from_millis(80)).await;
        assert!(!handle.is_finished());
        assert!(handle.stop().await >= 2);
    }

    #[tokio::test]
    async fn test_drop_aborts_loop() {
        let (_tx, rx) = watch::channel(Schedule::default());
        let count = Arc::new(Mutex::new(0u32));
        let sink_count = Arc::clone(&count);

        let handle = spawn_refresh(rx, fixed_clock(), MIN_REFRESH_PERIOD, move |_| {
            *sink_count.lock().unwrap() += 1;
        });
        time::sleep(Duration::from_millis(30)).await;
        drop(handle);

        time::sleep(Duration::from_millis(20)).await;
        let after_drop = *count.lock().unwrap();
        time::sleep(Duration::from_millis(60)).await;
        assert_eq!(*count.lock().unwrap(), after_drop);
    }
}
