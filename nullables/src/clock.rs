//! Nullable clock: deterministic time for testing.

use std::sync::atomic::{AtomicU64, Ordering};
use touchgrass_types::{Clock, Timestamp};

/// A clock that stands still until told otherwise.
///
/// Tests drive expiry by advancing it past the challenge window; the engine
/// never notices the difference from real time.
pub struct NullClock {
    current: AtomicU64,
}

impl NullClock {
    pub fn new(initial_secs: u64) -> Self {
        Self {
            current: AtomicU64::new(initial_secs),
        }
    }

    /// Move time forward by `secs`.
    pub fn advance(&self, secs: u64) {
        self.current.fetch_add(secs, Ordering::SeqCst);
    }

    /// Jump to an absolute time.
    pub fn set(&self, secs: u64) {
        self.current.store(secs, Ordering::SeqCst);
    }
}

impl Clock for NullClock {
    fn now(&self) -> Timestamp {
        Timestamp::new(self.current.load(Ordering::SeqCst))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_only_on_demand() {
        let clock = NullClock::new(1000);
        assert_eq!(clock.now(), Timestamp::new(1000));
        clock.advance(3600);
        assert_eq!(clock.now(), Timestamp::new(4600));
        clock.set(42);
        assert_eq!(clock.now(), Timestamp::new(42));
    }
}
