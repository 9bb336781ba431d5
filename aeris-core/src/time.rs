//! Time abstraction for acquisition deadlines
//!
//! The compensation engine itself is pure, but two paths need a clock: the
//! bounded data-ready poll and the burn-in procedure's pacing. Both take an
//! injected [`TimeSource`] so they can run against a fake clock in tests
//! instead of busy-waiting on real hardware.

use core::cell::Cell;

/// Timestamp in milliseconds since an arbitrary epoch (typically boot)
pub type Timestamp = u64;

/// Source of time for the system
///
/// Implementations might read a hardware timer, an RTOS tick count, or the
/// OS clock. Only elapsed-time arithmetic is performed on the values, so a
/// monotonic source is sufficient.
pub trait TimeSource {
    /// Get current timestamp in milliseconds
    fn now(&self) -> Timestamp;
}

/// System time source (requires std)
#[cfg(feature = "std")]
#[derive(Debug, Clone)]
pub struct SystemTime;

#[cfg(feature = "std")]
impl TimeSource for SystemTime {
    fn now(&self) -> Timestamp {
        use std::time::{SystemTime as StdSystemTime, UNIX_EPOCH};

        StdSystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as Timestamp
    }
}

/// Fixed time source for testing
///
/// Reports whatever timestamp it was last set to. Uses interior mutability
/// so tests can advance it while the code under test holds `&self`.
#[derive(Debug)]
pub struct FixedTime {
    timestamp: Cell<Timestamp>,
}

impl FixedTime {
    /// Create a clock frozen at `timestamp`
    pub const fn new(timestamp: Timestamp) -> Self {
        Self {
            timestamp: Cell::new(timestamp),
        }
    }

    /// Move the clock to an absolute timestamp
    pub fn set(&self, timestamp: Timestamp) {
        self.timestamp.set(timestamp);
    }

    /// Advance the clock by `ms` milliseconds
    pub fn advance(&self, ms: u64) {
        self.timestamp.set(self.timestamp.get() + ms);
    }
}

impl TimeSource for FixedTime {
    fn now(&self) -> Timestamp {
        self.timestamp.get()
    }
}

/// Self-advancing test clock
///
/// Each `now()` call moves time forward by a fixed step. Used to drive
/// timeout paths to completion without wall-clock waits.
#[derive(Debug)]
pub struct SteppingTime {
    timestamp: Cell<Timestamp>,
    step_ms: u64,
}

impl SteppingTime {
    /// Create a clock starting at `start` that advances `step_ms` per query
    pub const fn new(start: Timestamp, step_ms: u64) -> Self {
        Self {
            timestamp: Cell::new(start),
            step_ms,
        }
    }
}

impl TimeSource for SteppingTime {
    fn now(&self) -> Timestamp {
        let now = self.timestamp.get();
        self.timestamp.set(now + self.step_ms);
        now
    }
}
