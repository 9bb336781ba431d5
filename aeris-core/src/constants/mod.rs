//! Fixed Constants for the Sensor Core
//!
//! Two families:
//! - [`registers`]: the sensor's register map for the one-time calibration
//!   read and the heater setup write
//! - [`quality`]: tuning values of the air-quality heuristic and the
//!   burn-in procedure
//!
//! Values are never configurable at runtime; changing them changes the
//! meaning of stored baselines and logged scores.

pub mod quality;
pub mod registers;
