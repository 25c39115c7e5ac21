//! Refresh scheduling: periodic timer and in-flight coalescing

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tracing::debug;
use super::{Command, RefreshTrigger};

/// Ensures at most one fetch is outstanding. Requests that arrive meanwhile collapse into a
/// single queued refresh that starts as soon as the current one finishes.
#[derive(Debug, Default)]
pub struct RefreshGate {
    in_flight: bool,
    pending: bool,
}

impl RefreshGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` if the caller should start a fetch now.
    pub fn try_begin(&mut self) -> bool {
        if self.in_flight {
            self.pending = true;
            false
        } else {
            self.in_flight = true;
            true
        }
    }

    /// Mark the outstanding fetch as done. Returns `true` when a queued request should start
    /// immediately; the gate stays in flight for it in that case.
    pub fn finish(&mut self) -> bool {
        if self.pending {
            self.pending = false;
            true
        } else {
            self.in_flight = false;
            false
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn has_pending(&self) -> bool {
        self.pending
    }
}

/// Recurring refresh trigger. Cancelled explicitly on teardown, and on drop as a backstop.
pub struct RefreshTimer {
    handle: JoinHandle<()>,
}

impl RefreshTimer {
    /// Sends a periodic refresh every `period`, starting one period from now.
    pub fn start(period: Duration, commands: mpsc::Sender<Command>) -> Self {
        // tokio intervals reject a zero period
        let period = period.max(Duration::from_millis(1));
        let handle = tokio::spawn(async move {
            let mut interval = time::interval_at(time::Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                interval.tick().await;
                debug!("Periodic refresh tick");
                if commands
                    .send(Command::Refresh(RefreshTrigger::Periodic))
                    .await
                    .is_err()
                {
                    break;
                }
            }
        });

        Self { handle }
    }

    pub fn cancel(&self) {
        self.handle.abort();
    }
}

impl Drop for RefreshTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
