//! Gas and Ambient Baselines
//!
//! Air-quality scoring needs a zero-point: what does the gas cell read in
//! air we agree to call clean, and what is the room temperature around the
//! board? Both are learned by the burn-in procedure on
//! [`SensorContext`](crate::context::SensorContext), which averages 60
//! acquisition cycles taken over roughly five minutes in a well-ventilated
//! space. Until that completes the state stays at its zeroed default and
//! every scoring request is rejected.
//!
//! The humidity baseline is deliberately *not* here - it is the fixed
//! comfort constant
//! [`HUMIDITY_BASELINE_PCT`](crate::constants::quality::HUMIDITY_BASELINE_PCT),
//! not a learned value.

use core::sync::atomic::{AtomicBool, Ordering};

/// Learned zero-points for air-quality scoring
///
/// Default state is uncalibrated (both fields zero). Once established the
/// values persist for the process lifetime unless the burn-in procedure is
/// run again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaselineState {
    /// Mean gas resistance over the burn-in period, scaled integer units
    pub gas_baseline: u32,
    /// Mean ambient temperature over the burn-in period, hundredths °C
    pub ambient_centi: i32,
}

impl BaselineState {
    /// Whether the burn-in procedure has completed
    ///
    /// A zero gas baseline is the uncalibrated sentinel; scoring against it
    /// would divide by zero.
    pub fn is_calibrated(&self) -> bool {
        self.gas_baseline != 0
    }
}

/// Cooperative cancellation flag for the burn-in procedure
///
/// The procedure checks the flag between samples only - an in-flight
/// compensation chain always completes. Cancelling leaves the baseline
/// state untouched (still uncalibrated if it was).
#[derive(Debug, Default)]
pub struct CancelToken {
    cancelled: AtomicBool,
}

impl CancelToken {
    /// Create a token in the not-cancelled state
    pub const fn new() -> Self {
        Self {
            cancelled: AtomicBool::new(false),
        }
    }

    /// Request cancellation; takes effect at the next between-sample check
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been requested
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}
