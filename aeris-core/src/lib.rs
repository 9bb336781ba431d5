//! Environmental sensing core for the Aeris add-on board
//!
//! Turns raw ADC codes from a combined temperature / pressure / humidity /
//! gas sensor into physical readings and an air-quality rating. Built for
//! small targets:
//!
//! - No heap allocation, no globals; all state lives in [`SensorContext`]
//! - Integer-only compensation hot path (`libm` floats only in scoring)
//! - Hardware reached through small traits, so hosts and tests inject fakes
//!
//! ```no_run
//! use aeris_core::{CalibrationSet, SensorContext};
//! # use aeris_core::errors::SensorResult;
//! # fn demo(bus: &mut impl aeris_core::traits::RegisterBus,
//! #         sampler: &mut impl aeris_core::traits::SampleSource,
//! #         clock: &impl aeris_core::time::TimeSource) -> SensorResult<()> {
//! let calibration = CalibrationSet::read_from(bus)?;
//! let mut sensor = SensorContext::new(calibration);
//!
//! let reading = sensor.measure(sampler, clock, 1000)?;
//! let celsius = reading.temperature_centi as f32 / 100.0;
//! # Ok(())
//! # }
//! ```
//!
//! Air-quality scoring additionally needs the burn-in procedure
//! ([`SensorContext::establish_baselines`], ~5 minutes in clean air) before
//! [`SensorContext::air_quality`] will produce values.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

// Optional logging: real macros with the `log` feature, no-ops without
#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_info {
    ($($arg:tt)*) => { log::info!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_info {
    ($($arg:tt)*) => {};
}

pub(crate) use log_info;
pub(crate) use log_warn;

pub mod baseline;
pub mod calibration;
pub mod compensate;
pub mod constants;
pub mod context;
pub mod errors;
pub mod iaq;
pub mod reading;
pub mod time;
pub mod traits;

// Public API
pub use baseline::{BaselineState, CancelToken};
pub use calibration::CalibrationSet;
pub use context::SensorContext;
pub use errors::{SensorError, SensorResult};
pub use iaq::AirQualityResult;
pub use reading::{CompensatedReading, PressureUnit, RawSample, TemperatureUnit, TempReading};

/// Crate version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
