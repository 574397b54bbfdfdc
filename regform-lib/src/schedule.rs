//! One-shot deadlines driven by caller-supplied time.

use std::time::{Duration, Instant};

/// A cancellable task due at a single point in time.
///
/// The task never reads the clock itself: callers pass `now` in, which lets
/// tests step time forward deterministically. Scheduling again replaces the
/// previous deadline, so at most one is ever pending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScheduledTask {
    deadline: Option<Instant>,
}

impl ScheduledTask {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule the task to run `delay` after `now`.
    pub fn schedule(&mut self, now: Instant, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    /// Cancel the pending run. Returns `true` if one was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Whether the task should run at `now`.
    pub fn is_due(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|d| now >= d)
    }

    /// Consume the pending run if it is due. Returns `true` exactly once per
    /// scheduled run.
    pub fn take_due(&mut self, now: Instant) -> bool {
        if self.is_due(now) {
            self.deadline = None;
            true
        } else {
            false
        }
    }
}
