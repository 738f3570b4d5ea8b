//! Self-rescheduling timers for the run-loop
//! Each timer owns its deadline; the loop asks who is due and sleeps until the earliest
use std::time::{Duration, Instant};

/// Periodic timer - fires once per period, rescheduled after each fire
#[derive(Debug, Clone, Copy)]
pub struct Periodic {
    period: Duration,
    next_due: Instant,
}

impl Periodic {
    /// Create timer first due at `first_due`
    pub fn new(period: Duration, first_due: Instant) -> Self {
        Self { period, next_due: first_due }
    }

    /// Timer that fires on the first check
    pub fn immediate(period: Duration, now: Instant) -> Self {
        Self::new(period, now)
    }

    /// Timer that first fires one period from now
    pub fn delayed(period: Duration, now: Instant) -> Self {
        Self::new(period, now + period)
    }

    /// Returns true if due; the next deadline is then one period after `now`
    ///
    /// Late fires are not caught up: a stalled loop gets one fire, not a burst.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        if now >= self.next_due {
            self.next_due = now + self.period;
            true
        } else {
            false
        }
    }

    pub fn next_due(&self) -> Instant {
        self.next_due
    }
}

/// Earliest deadline among a set of timers
pub fn earliest_deadline<'a>(timers: impl IntoIterator<Item = &'a Periodic>) -> Option<Instant> {
    timers.into_iter().map(Periodic::next_due).min()
}
