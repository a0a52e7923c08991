//! Time sources for the main loop.
//!
//! Every time-dependent component in Segue reads the current instant through
//! a [`Clock`] instead of calling [`Instant::now`] directly. Production code
//! uses [`SystemClock`]; tests drive a [`ManualClock`] forward explicitly so
//! animation progress and timer expiry are deterministic.

use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

/// A source of monotonic time.
pub trait Clock: Send + Sync {
    /// The current instant.
    fn now(&self) -> Instant;
}

/// A clock backed by [`Instant::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same underlying instant, so a test can keep one handle
/// and hand another to the main loop.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<Instant>>,
}

impl ManualClock {
    /// Create a manual clock frozen at the current system instant.
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Create a manual clock frozen at `start`.
    pub fn starting_at(start: Instant) -> Self {
        Self {
            now: Arc::new(Mutex::new(start)),
        }
    }

    /// Move the clock forward by `delta`.
    pub fn advance(&self, delta: Duration) {
        let mut now = self.now.lock();
        *now += delta;
    }

    /// Move the clock forward by `millis` milliseconds.
    pub fn advance_ms(&self, millis: u64) {
        self.advance(Duration::from_millis(millis));
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.now.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_is_frozen() {
        let clock = ManualClock::new();
        let a = clock.now();
        let b = clock.now();
        assert_eq!(a, b);
    }

    #[test]
    fn test_manual_clock_clones_share_time() {
        let clock = ManualClock::new();
        let handle = clock.clone();
        let start = clock.now();

        handle.advance_ms(250);
        assert_eq!(clock.now() - start, Duration::from_millis(250));
    }
}
