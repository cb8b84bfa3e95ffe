use std::cell::Cell;
use std::time::Instant;

/// Monotonically nondecreasing millisecond timestamp source.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Wall clock measured from construction with [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Hand-driven clock for headless runs and tests.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self {
            now: Cell::new(start_ms),
        }
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get().saturating_add(ms));
    }

    /// Jump to `ms`. Earlier times are ignored so the clock never runs backwards.
    pub fn set(&self, ms: u64) {
        self.now.set(self.now.get().max(ms));
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }
}

/// Opens at most once per `interval_ms` of elapsed time.
///
/// Fires when strictly more than `interval_ms` has passed since it last fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateGate {
    interval_ms: u64,
    last_ms: u64,
}

impl RateGate {
    pub fn new(interval_ms: u64, start_ms: u64) -> Self {
        Self {
            interval_ms,
            last_ms: start_ms,
        }
    }

    pub fn ready(&mut self, now_ms: u64) -> bool {
        if now_ms.saturating_sub(self.last_ms) > self.interval_ms {
            self.last_ms = now_ms;
            true
        } else {
            false
        }
    }
}
