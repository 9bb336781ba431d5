//! Air-Quality Heuristic and Burn-In Tuning
//!
//! The IAQ percentage is a weighted blend of a humidity term and a gas
//! resistance term, both measured as deviation from a baseline. The gas
//! baseline is learned during burn-in; the humidity baseline is the fixed
//! indoor-comfort point below. The constants are tuned so that sitting
//! exactly at both baselines scores 95 %, leaving headroom to report air
//! that is cleaner than the calibration environment.

/// Relative-humidity baseline (%) the humidity term is scored against.
///
/// Fixed, not learned: 40 % RH is the accepted indoor comfort optimum.
pub const HUMIDITY_BASELINE_PCT: f32 = 40.0;

/// Weight of the humidity term in the IAQ percentage.
///
/// The gas term carries the remaining `1 - HUMIDITY_WEIGHT`.
pub const HUMIDITY_WEIGHT: f32 = 0.25;

/// Gas score offered when resistance sits exactly at the baseline.
///
/// Deliberately below the 75-point maximum so readings cleaner than the
/// burn-in environment are distinguishable from "at baseline".
pub const GAS_SCORE_AT_BASELINE: f32 = 70.0;

/// Slope of the gas score above baseline, per unit of resistance ratio.
pub const GAS_SCORE_SLOPE: f32 = 5.0;

/// Ceiling of the gas score when resistance exceeds the baseline.
pub const GAS_SCORE_CEILING: f32 = 75.0;

/// eCO2 curve floor (ppm) - clean outdoor air.
pub const ECO2_BASELINE_PPM: f32 = 250.0;

/// Exponent of the eCO2 estimation curve over the IAQ score.
pub const ECO2_CURVE_EXPONENT: f32 = 0.012;

/// Number of acquisition cycles averaged into the burn-in baselines.
pub const BURN_IN_SAMPLES: u32 = 60;

/// Pause between burn-in cycles (ms); the full procedure takes ~5 minutes.
pub const BURN_IN_INTERVAL_MS: u32 = 5000;

/// Default deadline for one data-ready poll (ms).
///
/// Pass `u32::MAX` to wait forever, which reproduces the behavior of
/// hardware stacks that busy-wait on the ready flag.
pub const DEFAULT_ACQUIRE_TIMEOUT_MS: u32 = 1000;

/// Gas heater plate target temperature (°C) written at setup.
pub const HEATER_TARGET_C: i32 = 300;

/// Ceiling applied to heater targets to protect the sensor membrane (°C).
pub const HEATER_TARGET_MAX_C: i32 = 400;

/// Heater-on duration register code: 4 ms steps x 25 = 100 ms.
pub const HEATER_DURATION_CODE: u8 = 0x59;
