use std::time::{Duration, Instant};

/// Time source for the autoplay timer.
pub trait Clock {
    fn now(&self) -> Instant;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Single-shot deadline that the owner polls every frame.
///
/// At most one deadline is pending. Arming overwrites the previous one and
/// cancelling clears it, so a replaced deadline can never fire.
#[derive(Debug, Clone)]
pub struct StepTimer {
    interval: Duration,
    deadline: Option<Instant>,
}

impl StepTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            deadline: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Replaces the interval and drops any pending deadline.
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
        self.cancel();
    }

    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.interval);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Consumes the pending deadline if it has passed.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
pub(crate) use manual::ManualClock;
