//! Cancellable repeating timers.
//!
//! The player runs on a single cooperative loop, so a timer is nothing more
//! than a deadline: the loop sleeps until the earliest deadline, then fires
//! every ticker that is due. A `Ticker` is owned by the component that needs
//! it; cancelling it or dropping its owner guarantees it never fires again.

use std::time::{Duration, Instant};

/// A repeating deadline that can be started, cancelled and rescheduled.
#[derive(Debug, Clone)]
pub struct Ticker {
    name: &'static str,
    interval: Duration,
    next_due: Option<Instant>,
}

impl Ticker {
    /// Create a stopped ticker.
    pub fn new(name: &'static str, interval: Duration) -> Self {
        Self {
            name,
            interval: interval.max(Duration::from_millis(1)),
            next_due: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Next deadline, if running.
    pub fn due_at(&self) -> Option<Instant> {
        self.next_due
    }

    /// Schedule the first fire one full interval after `at`.
    ///
    /// Starting a running ticker keeps its current deadline.
    pub fn start(&mut self, at: Instant) {
        if self.next_due.is_none() {
            self.next_due = Some(at + self.interval);
            tracing::debug!(timer = self.name, "Timer started");
        }
    }

    /// Cancel any pending fire.
    pub fn cancel(&mut self) {
        if self.next_due.take().is_some() {
            tracing::debug!(timer = self.name, "Timer cancelled");
        }
    }

    /// Start or cancel so that the running state matches `should_run`.
    pub fn set_running(&mut self, should_run: bool, at: Instant) {
        if should_run {
            self.start(at);
        } else {
            self.cancel();
        }
    }

    /// Consume one due deadline and schedule the next.
    ///
    /// Returns the instant the fire was scheduled for, or `None` if the
    /// ticker is stopped or not yet due.
    pub fn fire(&mut self, now: Instant) -> Option<Instant> {
        let due = self.next_due.filter(|due| *due <= now)?;
        self.next_due = Some(due + self.interval);
        Some(due)
    }
}

/// Earliest deadline among the given tickers.
pub fn earliest<'a>(tickers: impl IntoIterator<Item = &'a Ticker>) -> Option<Instant> {
    tickers.into_iter().filter_map(Ticker::due_at).min()
}
