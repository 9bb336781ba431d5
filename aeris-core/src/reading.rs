//! Value Types Produced by an Acquisition Cycle
//!
//! A cycle moves through three shapes:
//!
//! 1. [`RawSample`] - the four ADC codes plus range/stability flags, read
//!    out of the data registers in one go and consumed immediately
//! 2. [`TempReading`] - the compensated temperature together with the
//!    `t_fine` intermediate the same cycle's pressure math requires
//! 3. [`CompensatedReading`] - all physical-unit values of the cycle
//!
//! Pressure and humidity are only meaningful when derived from the
//! temperature of the *same* raw sample; the types make that coupling
//! explicit by threading `TempReading` rather than hiding the intermediate
//! in shared state.

/// Temperature display unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureUnit {
    /// Degrees Celsius
    Celsius,
    /// Degrees Fahrenheit
    Fahrenheit,
}

/// Pressure display unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressureUnit {
    /// Pascals
    Pascal,
    /// Millibar (hectopascal)
    Millibar,
}

/// One atomic capture of the sensor's data registers
///
/// Produced by a single forced-mode measurement; never retained across
/// cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawSample {
    /// 20-bit temperature ADC code
    pub temperature_adc: u32,
    /// 20-bit pressure ADC code
    pub pressure_adc: u32,
    /// 16-bit humidity ADC code
    pub humidity_adc: u16,
    /// 10-bit gas resistance ADC code
    pub gas_adc: u16,
    /// Gas measurement range exponent, 0-15
    pub gas_range: u8,
    /// Heater plate reached its target temperature for this reading
    pub heater_stable: bool,
}

/// Compensated temperature plus the fixed-point intermediate
///
/// `t_fine` feeds the pressure polynomial of the same cycle and has no
/// meaning outside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TempReading {
    /// Temperature in hundredths of a degree Celsius
    pub centi_celsius: i32,
    /// Fine-resolution intermediate for the pressure calculation
    pub t_fine: i32,
}

/// Physical-unit values derived from one raw sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompensatedReading {
    /// Temperature in hundredths of a degree Celsius
    pub temperature_centi: i32,
    /// Pressure in Pascals
    pub pressure_pa: u32,
    /// Relative humidity in hundredths of a percent
    pub humidity_centi: i32,
    /// Gas resistance in scaled integer units
    pub gas_resistance: u32,
    /// Heater stability flag carried over from the raw sample
    pub heater_stable: bool,
    /// Same-cycle temperature intermediate; not part of the public value
    #[cfg_attr(feature = "serde", serde(skip))]
    pub(crate) t_fine: i32,
}

impl CompensatedReading {
    /// Temperature in hundredths of the requested unit
    pub fn temperature_in(&self, unit: TemperatureUnit) -> i32 {
        match unit {
            TemperatureUnit::Celsius => self.temperature_centi,
            // °F = °C * 1.8 + 32, applied on the hundredths scale
            TemperatureUnit::Fahrenheit => ((self.temperature_centi * 18) + 32000) / 10,
        }
    }

    /// Pressure in the requested unit (millibar truncates to whole mBar)
    pub fn pressure_in(&self, unit: PressureUnit) -> u32 {
        match unit {
            PressureUnit::Pascal => self.pressure_pa,
            PressureUnit::Millibar => self.pressure_pa / 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading() -> CompensatedReading {
        CompensatedReading {
            temperature_centi: 2500,
            pressure_pa: 101_325,
            humidity_centi: 4150,
            gas_resistance: 54_321_000,
            heater_stable: true,
            t_fine: 0,
        }
    }

    #[test]
    fn fahrenheit_conversion() {
        // 25.00 °C = 77.00 °F
        assert_eq!(reading().temperature_in(TemperatureUnit::Fahrenheit), 7700);
        assert_eq!(reading().temperature_in(TemperatureUnit::Celsius), 2500);
    }

    #[test]
    fn millibar_truncates() {
        assert_eq!(reading().pressure_in(PressureUnit::Millibar), 1013);
        assert_eq!(reading().pressure_in(PressureUnit::Pascal), 101_325);
    }
}
