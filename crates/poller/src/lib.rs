//! `shopstock-poller` — background surfacing of due reminders.
//!
//! The poller periodically asks the active business day for due,
//! not-yet-shown reminders and pushes them over a channel to whatever
//! consumes them (UI popup, log). It never mutates anything except the
//! shown-flags, and those only under the shared history lock, so it can
//! run at any frequency without changing observable behavior beyond
//! delivery latency.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::Notify;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use shopstock_core::Clock;
use shopstock_ledger::{Reminder, SalesHistory};

/// Periodic due-reminder poller.
pub struct ReminderPoller {
    history: Arc<Mutex<SalesHistory>>,
    clock: Arc<dyn Clock>,
    interval: Duration,
}

impl ReminderPoller {
    pub fn new(
        history: Arc<Mutex<SalesHistory>>,
        clock: Arc<dyn Clock>,
        interval: Duration,
    ) -> Self {
        Self {
            history,
            clock,
            interval,
        }
    }

    /// One poll pass: collect due pending reminders under the history
    /// lock, then deliver them with the lock released.
    ///
    /// The at-most-once guarantee comes from the shown-flag flip inside
    /// `due_pending_reminders`; a reminder that fails to send is still
    /// marked shown and will not be retried.
    pub fn poll_once(&self, sink: &UnboundedSender<Reminder>) -> usize {
        let due = {
            let mut history = self.history.lock().unwrap_or_else(|e| e.into_inner());
            let now = self.clock.now();
            history.due_pending_reminders(&now)
        };
        let mut delivered = 0;
        for reminder in due {
            if sink.send(reminder).is_ok() {
                delivered += 1;
            }
        }
        delivered
    }

    /// Run the poll loop on a background task until shut down.
    pub fn spawn(self, sink: UnboundedSender<Reminder>) -> PollerHandle {
        let shutdown = Arc::new(Notify::new());
        let stop = Arc::clone(&shutdown);

        let task = tokio::spawn(async move {
            tracing::info!(interval_ms = self.interval.as_millis() as u64, "reminder poller started");

            let mut ticker = tokio::time::interval(self.interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    _ = stop.notified() => {
                        tracing::info!("reminder poller shutting down");
                        break;
                    }
                    _ = ticker.tick() => {
                        let delivered = self.poll_once(&sink);
                        if delivered > 0 {
                            tracing::debug!(delivered, "surfaced due reminders");
                        }
                    }
                }
            }
        });

        PollerHandle { shutdown, task }
    }
}

/// Handle to a running poller; dropping it does not stop the loop.
pub struct PollerHandle {
    shutdown: Arc<Notify>,
    task: JoinHandle<()>,
}

impl PollerHandle {
    /// Stop the loop and wait for it to finish. Shown-flags already set
    /// stay set in the shared history; nothing is lost by stopping.
    pub async fn shutdown(self) {
        self.shutdown.notify_one();
        let _ = self.task.await;
    }
}
