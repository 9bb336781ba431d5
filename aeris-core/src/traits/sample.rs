//! Forced-mode acquisition interface
//!
//! The sensor measures on demand: the platform layer triggers one cycle,
//! the hardware raises a data-ready flag some milliseconds later, and the
//! data registers are read out as one [`RawSample`]. Rather than bake a
//! busy-wait into the driver, [`SampleSource::poll_sample`] exposes the
//! ready flag through `nb`, and [`acquire_with_timeout`] turns it into a
//! bounded retry loop against an injected clock.

use crate::errors::{SensorError, SensorResult};
use crate::reading::RawSample;
use crate::time::TimeSource;

/// One-shot measurement cycles on the external sensor
pub trait SampleSource {
    /// Transport fault type reported by the underlying bus
    type Error;

    /// Drive one forced-mode measurement
    ///
    /// The first call after an idle period triggers a new cycle; until the
    /// hardware reports data-ready this returns [`nb::Error::WouldBlock`].
    /// Once ready, the data registers are read and returned as a
    /// [`RawSample`], leaving the source idle again.
    ///
    /// Implementations running under a cooperative scheduler should yield
    /// before returning `WouldBlock`.
    fn poll_sample(&mut self) -> nb::Result<RawSample, Self::Error>;

    /// Write the gas heater profile: target plate resistance and heat-on
    /// duration, both in the sensor's register encoding
    ///
    /// One-shot configuration during gas-sensor setup; not part of the
    /// per-cycle flow.
    fn set_heater(&mut self, resistance_code: u8, duration_code: u8) -> Result<(), Self::Error>;
}

/// Poll `source` until a sample is ready or `timeout_ms` elapses
///
/// `timeout_ms == u32::MAX` disables the deadline and reproduces the
/// block-until-ready contract of hardware stacks that spin on the flag.
/// Transport faults surface as [`SensorError::Bus`]; an expired deadline
/// surfaces as [`SensorError::DataNotReady`] with the time actually spent.
pub fn acquire_with_timeout<S, C>(
    source: &mut S,
    clock: &C,
    timeout_ms: u32,
) -> SensorResult<RawSample>
where
    S: SampleSource,
    C: TimeSource,
{
    let started = clock.now();
    loop {
        match source.poll_sample() {
            Ok(sample) => return Ok(sample),
            Err(nb::Error::Other(_)) => return Err(SensorError::Bus),
            Err(nb::Error::WouldBlock) => {
                let waited = clock.now().saturating_sub(started);
                if timeout_ms != u32::MAX && waited >= u64::from(timeout_ms) {
                    crate::log_warn!("sensor data-ready timed out after {} ms", waited);
                    return Err(SensorError::DataNotReady {
                        waited_ms: waited as u32,
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::SteppingTime;

    struct NeverReady;

    impl SampleSource for NeverReady {
        type Error = ();

        fn poll_sample(&mut self) -> nb::Result<RawSample, ()> {
            Err(nb::Error::WouldBlock)
        }

        fn set_heater(&mut self, _r: u8, _d: u8) -> Result<(), ()> {
            Ok(())
        }
    }

    struct ReadyAfter {
        polls_left: u32,
        sample: RawSample,
    }

    impl SampleSource for ReadyAfter {
        type Error = ();

        fn poll_sample(&mut self) -> nb::Result<RawSample, ()> {
            if self.polls_left == 0 {
                Ok(self.sample)
            } else {
                self.polls_left -= 1;
                Err(nb::Error::WouldBlock)
            }
        }

        fn set_heater(&mut self, _r: u8, _d: u8) -> Result<(), ()> {
            Ok(())
        }
    }

    fn sample() -> RawSample {
        RawSample {
            temperature_adc: 500_000,
            pressure_adc: 400_000,
            humidity_adc: 20_000,
            gas_adc: 600,
            gas_range: 4,
            heater_stable: true,
        }
    }

    #[test]
    fn stalled_source_times_out() {
        let clock = SteppingTime::new(0, 100);
        let err = acquire_with_timeout(&mut NeverReady, &clock, 1000).unwrap_err();
        assert!(matches!(err, SensorError::DataNotReady { waited_ms } if waited_ms >= 1000));
    }

    #[test]
    fn slow_source_succeeds_within_deadline() {
        let clock = SteppingTime::new(0, 100);
        let mut source = ReadyAfter {
            polls_left: 3,
            sample: sample(),
        };
        let got = acquire_with_timeout(&mut source, &clock, 1000).unwrap();
        assert_eq!(got, sample());
    }
}
