//! Single-slot, cancel-and-reschedule timer.
//!
//! The toolkit never sleeps or spawns. A [`Timer`] only remembers one
//! deadline; the host event loop passes the current [`Instant`] in and asks
//! whether the deadline has passed. Re-arming replaces the old deadline, so
//! at most one callback is ever outstanding per owner.

use std::time::{Duration, Instant};

use tracing::trace;

#[derive(Debug, Clone, Default)]
pub struct Timer {
    deadline: Option<Instant>,
}

impl Timer {
    pub fn new() -> Self {
        Self { deadline: None }
    }

    /// Arm the timer to fire `delay` after `now`, replacing any earlier deadline.
    pub fn arm(&mut self, now: Instant, delay: Duration) {
        let deadline = now + delay;
        if self.deadline.is_some() {
            trace!(?delay, "rescheduling armed timer");
        } else {
            trace!(?delay, "arming timer");
        }
        self.deadline = Some(deadline);
    }

    /// Disarm without firing. Returns true if a deadline was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Consume the deadline if it has elapsed at `now`.
    ///
    /// Returns true exactly once per arming; the timer is disarmed afterwards.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
