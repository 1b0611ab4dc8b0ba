//! Submission cooldown: after an accepted rating the kiosk rejects
//! further submissions for a fixed delay.
//!
//! The gate is a plain deadline comparison, never a sleep, so the rest
//! of the interface stays responsive while it is armed. It holds no
//! persisted state; dropping or resetting it returns to `Idle`.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GateState {
    Idle,
    CoolingDown { until: Instant },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    Accepted,
    Rejected { remaining: Duration },
}

#[derive(Debug)]
pub struct CooldownGate {
    delay: Duration,
    state: GateState,
}

impl CooldownGate {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            state: GateState::Idle,
        }
    }

    /// Time left before submissions are accepted again; None when idle
    /// or the delay has already elapsed.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        match self.state {
            GateState::CoolingDown { until } if now < until => Some(until - now),
            _ => None,
        }
    }

    /// Start (or restart) the cooldown from `now`.
    pub fn arm(&mut self, now: Instant) {
        self.state = GateState::CoolingDown {
            until: now + self.delay,
        };
    }

    /// Accept and arm when idle or elapsed; reject with the remaining
    /// wait otherwise.
    pub fn try_submit(&mut self, now: Instant) -> Submission {
        match self.remaining(now) {
            Some(remaining) => Submission::Rejected { remaining },
            None => {
                self.arm(now);
                Submission::Accepted
            }
        }
    }

    /// Cancel any pending cooldown (screen teardown, navigation away).
    pub fn reset(&mut self) {
        self.state = GateState::Idle;
    }
}
