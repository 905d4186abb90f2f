use std::time::{Duration, Instant};

/// Fixed-rate pacing for the game loop: at most one tick per `poll`.
pub struct TickTimer {
    interval: Duration,
    last_tick: Option<Instant>,
}

impl TickTimer {
    pub fn new(ticks_per_second: u32) -> Self {
        Self {
            interval: Duration::from_secs(1) / ticks_per_second.max(1),
            last_tick: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns true when a tick is due at `now`. The first poll is always due.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.last_tick {
            Some(last) if now.saturating_duration_since(last) < self.interval => false,
            _ => {
                self.last_tick = Some(now);
                true
            }
        }
    }

    /// Time left until the next tick is due, for scheduling a repaint.
    pub fn remaining(&self, now: Instant) -> Duration {
        match self.last_tick {
            Some(last) => self
                .interval
                .saturating_sub(now.saturating_duration_since(last)),
            None => Duration::ZERO,
        }
    }
}
