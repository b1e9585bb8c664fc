//! Fixed-rate frame clock.
//!
//! The clock works on caller-supplied millisecond timestamps, so the game
//! loop can feed it `Instant::elapsed` and tests can feed it plain numbers.

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct FrameClock {
    period_ms: u64,
    next_tick_ms: u64,
    ticks: u64,
}

impl FrameClock {
    /// Clock delivering `ticks_per_second` ticks; the first is due one
    /// period after time zero.
    pub fn new(ticks_per_second: u32) -> Self {
        let period_ms = (1000 / u64::from(ticks_per_second.max(1))).max(1);
        Self {
            period_ms,
            next_tick_ms: period_ms,
            ticks: 0,
        }
    }

    pub fn period_ms(&self) -> u64 {
        self.period_ms
    }

    /// Ticks delivered so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// How long to wait (e.g. for input) before the next tick is due
    pub fn until_next_tick(&self, now_ms: u64) -> Duration {
        Duration::from_millis(self.next_tick_ms.saturating_sub(now_ms))
    }

    /// Consume a tick if one is due at `now_ms`.
    ///
    /// After a stall the clock resynchronises instead of firing a burst of
    /// catch-up ticks.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        if now_ms < self.next_tick_ms {
            return false;
        }
        self.ticks += 1;
        self.next_tick_ms += self.period_ms;
        if self.next_tick_ms <= now_ms {
            self.next_tick_ms = now_ms + self.period_ms;
        }
        true
    }
}
