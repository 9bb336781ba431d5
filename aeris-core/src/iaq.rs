//! Air-Quality Scoring
//!
//! Produces a composite air-quality rating from the latest compensated
//! reading and the learned baselines:
//!
//! - `iaq_percent`: 0-100, higher is better
//! - `iaq_score`: `(100 - iaq_percent) * 5`, the conventional 0-500 scale
//!   where lower is better
//! - `eco2_ppm`: estimated CO2 concentration extrapolated from the score
//!
//! The percentage blends a humidity term (weight 0.25, scored against the
//! fixed 40 % comfort baseline) with a gas term (weight 0.75, scored
//! against the learned resistance baseline). The gas branch is asymmetric
//! on purpose: at-baseline air scores 95 rather than 100, keeping headroom
//! to report air cleaner than the burn-in environment. Do not symmetrize
//! it to match the humidity branch.
//!
//! Scores are recomputed from scratch on every request; nothing here is
//! cached.

use libm::{expf, roundf, truncf};

use crate::baseline::BaselineState;
use crate::constants::quality::{
    ECO2_BASELINE_PPM, ECO2_CURVE_EXPONENT, GAS_SCORE_AT_BASELINE, GAS_SCORE_CEILING,
    GAS_SCORE_SLOPE, HUMIDITY_BASELINE_PCT, HUMIDITY_WEIGHT,
};
use crate::errors::{SensorError, SensorResult};
use crate::reading::CompensatedReading;

/// Derived air-quality values for one reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AirQualityResult {
    /// Air-quality rating, 0 (bad) to 100 (excellent)
    pub iaq_percent: u8,
    /// Index of air quality, 0 (excellent) to 500 (bad)
    pub iaq_score: u16,
    /// Estimated CO2 concentration in ppm (250 upward)
    pub eco2_ppm: u32,
}

/// Score a compensated reading against the learned baselines
///
/// Fails with [`SensorError::BaselineNotEstablished`] while the baseline
/// state is uncalibrated - the gas ratio would otherwise divide by zero.
pub fn score(reading: &CompensatedReading, baseline: &BaselineState) -> SensorResult<AirQualityResult> {
    if !baseline.is_calibrated() {
        return Err(SensorError::BaselineNotEstablished);
    }

    let humidity_pct = reading.humidity_centi as f32 / 100.0;
    let temperature_c = reading.temperature_centi as f32 / 100.0;
    let ambient_c = baseline.ambient_centi as f32 / 100.0;

    let humidity_offset = humidity_pct - HUMIDITY_BASELINE_PCT;
    let temperature_offset = temperature_c - ambient_c;
    let humidity_ratio = humidity_offset / HUMIDITY_BASELINE_PCT + 1.0;
    let temperature_ratio = temperature_offset / ambient_c;

    // Humidity term: approach to the comfort point from either side scores
    // proportionally; exactly at the point both branches meet at 1.0.
    let humidity_score = if humidity_offset > 0.0 {
        (100.0 - humidity_pct) / (100.0 - HUMIDITY_BASELINE_PCT)
    } else {
        humidity_pct / HUMIDITY_BASELINE_PCT
    } * HUMIDITY_WEIGHT
        * 100.0;

    let gas = reading.gas_resistance as f32;
    let gas_base = baseline.gas_baseline as f32;
    let gas_ratio = gas / gas_base;

    let gas_score = if (gas_base - gas) > 0.0 {
        // Below baseline: dirtier than the burn-in environment
        gas_ratio * ((1.0 - HUMIDITY_WEIGHT) * 100.0)
    } else {
        // At or above baseline: pivot at 70 so at-baseline air lands on 95
        // total, with a 75-point ceiling for very clean air
        let score = roundf(GAS_SCORE_AT_BASELINE + GAS_SCORE_SLOPE * (gas_ratio - 1.0));
        if score > GAS_SCORE_CEILING {
            GAS_SCORE_CEILING
        } else {
            score
        }
    };

    let iaq_percent = truncf(humidity_score + gas_score) as u8;
    let iaq_score = (100 - iaq_percent as u16) * 5;

    // Exponential extrapolation from the score, then adjusted upward when
    // humidity and/or temperature sit above their baselines
    let mut eco2 = ECO2_BASELINE_PPM * expf(ECO2_CURVE_EXPONENT * iaq_score as f32);
    if humidity_offset > 0.0 {
        if temperature_offset > 0.0 {
            eco2 *= humidity_ratio + temperature_ratio;
        } else {
            eco2 *= humidity_ratio;
        }
    } else if temperature_offset > 0.0 {
        eco2 *= temperature_ratio + 1.0;
    }

    Ok(AirQualityResult {
        iaq_percent,
        iaq_score,
        eco2_ppm: truncf(eco2) as u32,
    })
}
