//! Error Types for the Sensor Core
//!
//! The error enum follows the same rules as the rest of the crate's hot
//! path: small, `Copy`, no heap allocation, and enough context for the
//! caller to pick a response without further queries.
//!
//! ## Error Categories
//!
//! ### Lifecycle violations
//! - `GasSensorNotConfigured`: gas readings requested before the heater
//!   profile was written
//! - `BaselineNotEstablished`: air-quality scores requested before the
//!   burn-in procedure finished
//!
//! ### Availability
//! - `DataNotReady`: the hardware never raised its data-ready flag within
//!   the caller's deadline
//! - `Cancelled`: a long-running procedure was aborted between samples
//! - `HeaterUnstable`: the gas cell was sampled before the heater plate
//!   reached its target, so gas-derived values are withheld
//!
//! ### Transport
//! - `Bus`: the register transport reported a fault; the concrete bus error
//!   is implementation-specific and is logged at the call site instead of
//!   being carried here

use thiserror_no_std::Error;

/// Result type for sensor core operations
pub type SensorResult<T> = Result<T, SensorError>;

/// Sensor core errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    /// The gas heater profile has not been written yet
    #[error("gas sensor not configured")]
    GasSensorNotConfigured,

    /// The burn-in procedure has not completed, so gas/ambient baselines
    /// are still zero and air-quality ratios would be meaningless
    #[error("gas baseline not established")]
    BaselineNotEstablished,

    /// Hardware never reported new data within the deadline
    #[error("sensor data not ready after {waited_ms} ms")]
    DataNotReady {
        /// Milliseconds spent polling before giving up
        waited_ms: u32,
    },

    /// A long-running procedure was cancelled between samples
    #[error("procedure cancelled")]
    Cancelled,

    /// The heater plate had not reached its target when the gas cell was
    /// sampled, so the gas resistance is not trustworthy
    #[error("gas heater not stable")]
    HeaterUnstable,

    /// The register transport reported a fault
    #[error("register transport fault")]
    Bus,

    /// No acquisition cycle has run yet, so there is no reading to serve
    #[error("no reading available")]
    NoReading,
}

#[cfg(feature = "defmt")]
impl defmt::Format for SensorError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::GasSensorNotConfigured => defmt::write!(fmt, "gas sensor not configured"),
            Self::BaselineNotEstablished => defmt::write!(fmt, "gas baseline not established"),
            Self::DataNotReady { waited_ms } => {
                defmt::write!(fmt, "data not ready after {} ms", waited_ms)
            }
            Self::Cancelled => defmt::write!(fmt, "procedure cancelled"),
            Self::HeaterUnstable => defmt::write!(fmt, "gas heater not stable"),
            Self::Bus => defmt::write!(fmt, "register transport fault"),
            Self::NoReading => defmt::write!(fmt, "no reading available"),
        }
    }
}
