//! Owned Sensor State and Cycle Orchestration
//!
//! [`SensorContext`] is the single owner of everything that used to be
//! process-global in firmware of this kind: the calibration coefficients,
//! the learned baselines, the tracked ambient temperature with its freeze
//! flag, the gas-setup flag, and the last compensated reading. Every engine
//! call goes through `&self`/`&mut self`, so a preemptive embedding wraps
//! the context in its platform mutex and torn reads are unrepresentable in
//! safe code.
//!
//! One acquisition cycle is one [`measure`](SensorContext::measure) call:
//! raw sample in, temperature -> pressure -> humidity -> gas in strict
//! order (pressure and humidity consume the temperature intermediate of
//! the *same* cycle), one [`CompensatedReading`] out and stored.

use crate::baseline::{BaselineState, CancelToken};
use crate::calibration::CalibrationSet;
use crate::compensate;
use crate::constants::quality::{
    BURN_IN_INTERVAL_MS, BURN_IN_SAMPLES, HEATER_DURATION_CODE, HEATER_TARGET_C,
};
use crate::errors::{SensorError, SensorResult};
use crate::iaq::{self, AirQualityResult};
use crate::reading::{CompensatedReading, PressureUnit, RawSample, TemperatureUnit};
use crate::time::TimeSource;
use crate::traits::{acquire_with_timeout, DelayMs, SampleSource};
use crate::{log_info, log_warn};

/// Owned state of one sensor: calibration, baselines, last reading
#[derive(Debug, Clone)]
pub struct SensorContext {
    calibration: CalibrationSet,
    baseline: BaselineState,
    /// Tracked ambient temperature in hundredths °C; follows each cycle's
    /// compensated value unless frozen by the burn-in procedure
    ambient_centi: i32,
    ambient_frozen: bool,
    gas_configured: bool,
    last_reading: Option<CompensatedReading>,
}

impl SensorContext {
    /// Build a context around a decoded calibration set
    pub fn new(calibration: CalibrationSet) -> Self {
        Self {
            calibration,
            baseline: BaselineState::default(),
            ambient_centi: 0,
            ambient_frozen: false,
            gas_configured: false,
            last_reading: None,
        }
    }

    /// The factory calibration this context compensates with
    pub fn calibration(&self) -> &CalibrationSet {
        &self.calibration
    }

    /// Current baseline state (uncalibrated until burn-in completes)
    pub fn baseline(&self) -> &BaselineState {
        &self.baseline
    }

    /// Tracked ambient temperature in hundredths °C
    pub fn ambient_centi(&self) -> i32 {
        self.ambient_centi
    }

    /// Whether the gas heater profile has been written
    pub fn gas_configured(&self) -> bool {
        self.gas_configured
    }

    /// Most recent compensated reading, if any cycle has run
    pub fn last_reading(&self) -> Option<&CompensatedReading> {
        self.last_reading.as_ref()
    }

    /// Write the gas heater profile and mark the gas subsystem ready
    ///
    /// Computes the heater resistance code for the standard 300 °C target
    /// from the currently tracked ambient temperature. Call after at least
    /// one [`measure`](Self::measure) so the ambient value is live.
    pub fn configure_gas_sensor<S: SampleSource>(&mut self, source: &mut S) -> SensorResult<()> {
        let code =
            compensate::heater_resistance_code(&self.calibration, self.ambient_centi, HEATER_TARGET_C);
        source
            .set_heater(code, HEATER_DURATION_CODE)
            .map_err(|_| SensorError::Bus)?;
        self.gas_configured = true;
        log_info!("gas heater configured: resistance code {}", code);
        Ok(())
    }

    /// Run one full acquisition cycle and store the compensated reading
    ///
    /// Blocks until the hardware reports data-ready or `timeout_ms`
    /// elapses (`u32::MAX` waits forever). The compensation chain runs in
    /// cycle order; no value from a previous cycle leaks in.
    pub fn measure<S, C>(
        &mut self,
        source: &mut S,
        clock: &C,
        timeout_ms: u32,
    ) -> SensorResult<CompensatedReading>
    where
        S: SampleSource,
        C: TimeSource,
    {
        let raw = acquire_with_timeout(source, clock, timeout_ms)?;
        Ok(self.compensate_cycle(&raw))
    }

    /// Compensate one raw sample and store the result
    fn compensate_cycle(&mut self, raw: &RawSample) -> CompensatedReading {
        let temp = compensate::temperature(&self.calibration, raw.temperature_adc);
        if !self.ambient_frozen {
            self.ambient_centi = temp.centi_celsius;
        }

        let reading = CompensatedReading {
            temperature_centi: temp.centi_celsius,
            pressure_pa: compensate::pressure(&self.calibration, temp.t_fine, raw.pressure_adc),
            humidity_centi: compensate::humidity(&self.calibration, temp.centi_celsius, raw.humidity_adc),
            gas_resistance: compensate::gas_resistance(raw.gas_adc, raw.gas_range),
            heater_stable: raw.heater_stable,
            t_fine: temp.t_fine,
        };
        self.last_reading = Some(reading);
        reading
    }

    /// Establish the gas and ambient baselines by burn-in
    ///
    /// Takes exactly 60 acquisition cycles spaced 5 s apart (~5 minutes),
    /// then stores the integer mean of the gas resistances and ambient
    /// temperatures. Ambient tracking is frozen for the duration so the
    /// half-learned value never feeds concurrent readers, and restored
    /// afterwards whether the run completes or not.
    ///
    /// Configures the gas heater first if that has not happened yet.
    /// `progress` is invoked with 0-100 after each sample; `cancel` is
    /// checked between samples and aborts with [`SensorError::Cancelled`],
    /// leaving the previous baseline state in place.
    ///
    /// Blocking and long-running: do not interleave with other callers
    /// driving acquisition cycles on the same hardware.
    pub fn establish_baselines<S, C, D>(
        &mut self,
        source: &mut S,
        clock: &C,
        delay: &mut D,
        acquire_timeout_ms: u32,
        cancel: &CancelToken,
        mut progress: impl FnMut(u8),
    ) -> SensorResult<()>
    where
        S: SampleSource,
        C: TimeSource,
        D: DelayMs,
    {
        if !self.gas_configured {
            self.configure_gas_sensor(source)?;
        }

        log_info!("baseline burn-in started: {} samples", BURN_IN_SAMPLES);
        self.ambient_frozen = true;
        let result = self.burn_in(source, clock, delay, acquire_timeout_ms, cancel, &mut progress);
        self.ambient_frozen = false;

        if result.is_ok() {
            log_info!(
                "baseline established: gas {} ambient {} centi-C",
                self.baseline.gas_baseline,
                self.baseline.ambient_centi
            );
        } else {
            log_warn!("baseline burn-in aborted");
        }
        result
    }

    fn burn_in<S, C, D>(
        &mut self,
        source: &mut S,
        clock: &C,
        delay: &mut D,
        acquire_timeout_ms: u32,
        cancel: &CancelToken,
        progress: &mut impl FnMut(u8),
    ) -> SensorResult<()>
    where
        S: SampleSource,
        C: TimeSource,
        D: DelayMs,
    {
        let mut gas_sum: u64 = 0;
        let mut ambient_sum: i64 = 0;

        for taken in 0..BURN_IN_SAMPLES {
            if cancel.is_cancelled() {
                return Err(SensorError::Cancelled);
            }

            let raw = acquire_with_timeout(source, clock, acquire_timeout_ms)?;
            let temp = compensate::temperature(&self.calibration, raw.temperature_adc);
            let gas = compensate::gas_resistance(raw.gas_adc, raw.gas_range);

            gas_sum += u64::from(gas);
            ambient_sum += i64::from(temp.centi_celsius);
            progress(((taken + 1) * 100 / BURN_IN_SAMPLES) as u8);

            if taken + 1 < BURN_IN_SAMPLES {
                delay.delay_ms(BURN_IN_INTERVAL_MS);
            }
        }

        // Integer means, truncated - the learned zero-points
        self.baseline = BaselineState {
            gas_baseline: (gas_sum / u64::from(BURN_IN_SAMPLES)) as u32,
            ambient_centi: (ambient_sum / i64::from(BURN_IN_SAMPLES)) as i32,
        };
        Ok(())
    }

    /// Score the latest reading against the learned baselines
    ///
    /// Recomputed on every call. Fails if the gas subsystem was never
    /// configured, if no cycle has run yet, if the heater was not stable
    /// when the gas cell was sampled, or if burn-in has not completed -
    /// never returns a sentinel value in those states.
    pub fn air_quality(&self) -> SensorResult<AirQualityResult> {
        let reading = *self.gas_reading()?;
        iaq::score(&reading, &self.baseline)
    }

    /// Temperature of the latest reading, hundredths of the requested unit
    pub fn temperature(&self, unit: TemperatureUnit) -> SensorResult<i32> {
        Ok(self.reading()?.temperature_in(unit))
    }

    /// Pressure of the latest reading in the requested unit
    pub fn pressure(&self, unit: PressureUnit) -> SensorResult<u32> {
        Ok(self.reading()?.pressure_in(unit))
    }

    /// Relative humidity of the latest reading, hundredths of a percent
    pub fn humidity(&self) -> SensorResult<i32> {
        Ok(self.reading()?.humidity_centi)
    }

    /// Gas resistance of the latest reading, scaled integer units
    ///
    /// Guarded like [`air_quality`](Self::air_quality): errors instead of
    /// the raw zero the hardware reports before setup.
    pub fn gas_resistance(&self) -> SensorResult<u32> {
        Ok(self.gas_reading()?.gas_resistance)
    }

    /// Air-quality rating of the latest reading, 0-100
    pub fn iaq_percent(&self) -> SensorResult<u8> {
        Ok(self.air_quality()?.iaq_percent)
    }

    /// Index of air quality of the latest reading, 0-500
    pub fn iaq_score(&self) -> SensorResult<u16> {
        Ok(self.air_quality()?.iaq_score)
    }

    /// Estimated CO2 of the latest reading, ppm
    pub fn eco2(&self) -> SensorResult<u32> {
        Ok(self.air_quality()?.eco2_ppm)
    }

    fn reading(&self) -> SensorResult<&CompensatedReading> {
        self.last_reading.as_ref().ok_or(SensorError::NoReading)
    }

    /// Latest reading, additionally vetted for gas validity
    fn gas_reading(&self) -> SensorResult<&CompensatedReading> {
        if !self.gas_configured {
            return Err(SensorError::GasSensorNotConfigured);
        }
        let reading = self.reading()?;
        if !reading.heater_stable {
            return Err(SensorError::HeaterUnstable);
        }
        Ok(reading)
    }
}
