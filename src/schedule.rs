use std::time::{Duration, Instant};

/// Fixed-rate frame clock. Each period yields exactly one tick followed by one redraw.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    period: Duration,
    deadline: Instant,
}

impl FrameClock {
    pub fn new(frame_rate: u32, now: Instant) -> Self {
        Self {
            period: Duration::from_secs(1) / frame_rate.max(1),
            deadline: now,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// When the next frame is due.
    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// Returns `true` at most once per period. Missed frames are dropped, not replayed.
    pub fn ready(&mut self, now: Instant) -> bool {
        if now < self.deadline {
            return false;
        }
        self.deadline += self.period;
        if self.deadline <= now {
            self.deadline = now + self.period;
        }
        true
    }
}
