use std::time::{Duration, Instant};

/// Repeating countdown that fires once per period.
///
/// The timer holds no thread or callback; the event loop asks it whether a
/// deadline has passed. Re-arming replaces the pending deadline entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepeatingTimer {
    period: Duration,
    deadline: Instant,
}

impl RepeatingTimer {
    pub fn arm(period: Duration, now: Instant) -> Self {
        Self {
            period,
            deadline: now + period,
        }
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.deadline
    }

    pub fn time_until_due(&self, now: Instant) -> Duration {
        self.deadline.saturating_duration_since(now)
    }

    /// Consumes one firing and schedules the next.
    ///
    /// Periods missed while the loop was busy collapse into this one firing.
    pub fn fire(&mut self, now: Instant) {
        self.deadline += self.period;
        if self.deadline <= now {
            self.deadline = now + self.period;
        }
    }
}
