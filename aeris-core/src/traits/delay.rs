//! Millisecond pause abstraction
//!
//! The burn-in procedure sleeps several seconds between samples. On a
//! cooperative scheduler the implementation should yield rather than spin.

/// Blocking millisecond delay
pub trait DelayMs {
    /// Pause the current task for at least `ms` milliseconds
    fn delay_ms(&mut self, ms: u32);
}

/// Thread-sleep delay (requires std)
#[cfg(feature = "std")]
#[derive(Debug, Clone, Default)]
pub struct ThreadDelay;

#[cfg(feature = "std")]
impl DelayMs for ThreadDelay {
    fn delay_ms(&mut self, ms: u32) {
        std::thread::sleep(std::time::Duration::from_millis(ms as u64));
    }
}

/// No-op delay for tests and simulations
#[derive(Debug, Clone, Default)]
pub struct NoDelay;

impl DelayMs for NoDelay {
    fn delay_ms(&mut self, _ms: u32) {}
}
