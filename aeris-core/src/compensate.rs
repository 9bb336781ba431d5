//! Fixed-Point Compensation Engine
//!
//! Converts raw ADC codes into physical units using the vendor-documented
//! integer polynomials. Everything here is a pure function of the
//! [`CalibrationSet`] and the values threaded in; no state, no I/O.
//!
//! The exact order of shifts, multiplies and divisions is the contract:
//! these polynomials approximate a nonlinear sensor response, and consumers
//! validate against reference outputs at single-digit resolution. In
//! particular [`pressure`] carries a branch that reorders one division and
//! one shift around the 2^30 mark - the two orders round differently at
//! the single-Pascal level, so the branch must not be "simplified" away.
//!
//! Inputs outside the documented ADC ranges (20-bit temperature/pressure,
//! 16-bit humidity, 10-bit gas) are not validated; the arithmetic widths
//! are chosen so documented inputs cannot overflow.

use crate::calibration::CalibrationSet;
use crate::constants::quality::HEATER_TARGET_MAX_C;
use crate::reading::TempReading;

/// Compensate a raw temperature code
///
/// Returns both the public value (hundredths of a degree Celsius) and the
/// `t_fine` intermediate required by [`pressure`] for the same cycle.
pub fn temperature(calib: &CalibrationSet, raw: u32) -> TempReading {
    let var1 = ((raw as i32) >> 3) - ((calib.par_t1 as i32) << 1);
    let var2 = (var1 * calib.par_t2 as i32) >> 11;
    let var3 = ((((var1 >> 1) * (var1 >> 1)) >> 12) * ((calib.par_t3 as i32) << 4)) >> 14;
    let t_fine = var2 + var3;

    TempReading {
        centi_celsius: ((t_fine * 5) + 128) >> 8,
        t_fine,
    }
}

/// Compensate a raw pressure code into Pascals
///
/// `t_fine` must come from [`temperature`] of the same acquisition cycle;
/// the pressure cell drifts with die temperature and the polynomial
/// corrects for it.
///
/// Intermediates are 64-bit: the scaled linearization term exceeds 32 bits
/// before the division, and the divide/shift branch below must see the
/// undistorted value to pick the order that cannot overflow.
pub fn pressure(calib: &CalibrationSet, t_fine: i32, raw: u32) -> u32 {
    let mut var1 = ((t_fine as i64) >> 1) - 64_000;
    let mut var2 = ((((var1 >> 2) * (var1 >> 2)) >> 11) * calib.par_p6 as i64) >> 2;
    var2 += (var1 * calib.par_p5 as i64) << 1;
    var2 = (var2 >> 2) + ((calib.par_p4 as i64) << 16);
    var1 = (((((var1 >> 2) * (var1 >> 2)) >> 13) * ((calib.par_p3 as i64) << 5)) >> 3)
        + ((calib.par_p2 as i64 * var1) >> 1);
    var1 >>= 18;
    var1 = ((32768 + var1) * calib.par_p1 as i64) >> 15;

    let mut press_comp = (1_048_576 - raw as i64 - (var2 >> 12)) * 3125;

    // Order matters: dividing first then shifting rounds differently from
    // shifting first then dividing. The threshold keeps the 32-bit variant
    // of this formula from overflowing on the left shift; the rounding it
    // implies is part of the observable output.
    if press_comp >= (1 << 30) {
        press_comp = (press_comp / var1) << 1;
    } else {
        press_comp = (press_comp << 1) / var1;
    }

    let var1 = (calib.par_p9 as i64 * (((press_comp >> 3) * (press_comp >> 3)) >> 13)) >> 12;
    let var2 = ((press_comp >> 2) * calib.par_p8 as i64) >> 13;
    let var3 = ((press_comp >> 8) * (press_comp >> 8) * (press_comp >> 8) * calib.par_p10 as i64)
        >> 17;

    press_comp += (var1 + var2 + var3 + ((calib.par_p7 as i64) << 7)) >> 4;
    press_comp as u32
}

/// Compensate a raw humidity code into hundredths of a percent RH
///
/// `temp_centi` is the *compensated* temperature of the same cycle (not the
/// tracked ambient value); humidity sensing is strongly
/// temperature-dependent and the polynomial corrects against the live die
/// temperature.
pub fn humidity(calib: &CalibrationSet, temp_centi: i32, raw: u16) -> i32 {
    let var1 = raw as i32
        - ((calib.par_h1 as i32) << 4)
        - (((temp_centi * calib.par_h3 as i32) / 100) >> 1);
    let var2 = (calib.par_h2 as i32
        * (((temp_centi * calib.par_h4 as i32) / 100)
            + (((temp_centi * ((temp_centi * calib.par_h5 as i32) / 100)) >> 6) / 100
                + (1 << 14))))
        >> 10;
    let var3 = var1 * var2;
    let var4 = (((calib.par_h6 as i32) << 7) + ((temp_centi * calib.par_h7 as i32) / 100)) >> 4;
    let var5 = ((var3 >> 14) * (var3 >> 14)) >> 10;
    let var6 = (var4 * var5) >> 1;

    // Milli-percent, clamped to the physical range, reported in hundredths
    let milli_pct = (((var3 + var6) >> 10) * 1000) >> 12;
    milli_pct.clamp(0, 100_000) / 10
}

/// Convert a raw gas code and range exponent into scaled resistance units
///
/// The range is a 4-bit hardware-reported exponent selecting one of 16
/// fixed measurement scales.
pub fn gas_resistance(raw: u16, gas_range: u8) -> u32 {
    let var1 = 262_144u32 >> (gas_range & 0x0F);
    // raw is a 10-bit code centered on 512; the affine term stays positive
    // across the full code range
    let var2 = (4096 + (raw as i32 - 512) * 3) as u32;
    ((10_000 * var1) / var2) * 100
}

/// Compute the heater plate resistance register code for a target
/// temperature
///
/// One-shot conversion during gas-sensor setup; `ambient_centi` is the
/// tracked ambient temperature in hundredths of a degree. Targets above
/// 400 °C are clamped to protect the sensor membrane.
pub fn heater_resistance_code(calib: &CalibrationSet, ambient_centi: i32, target_c: i32) -> u8 {
    let target = target_c.min(HEATER_TARGET_MAX_C);

    let var1 = ((ambient_centi * calib.par_g3 as i32) / 1000) << 8;
    let var2 = (calib.par_g1 as i32 + 784)
        * (((((calib.par_g2 as i32 + 154_009) * target * 5) / 100) + 3_276_800) / 10);
    let var3 = var1 + (var2 >> 1);
    let var4 = var3 / (calib.res_heat_range as i32 + 4);
    let var5 = 131 * calib.res_heat_val as i32 + 65_536;

    let res_heat_x100 = ((var4 / var5) - 250) * 34;
    ((res_heat_x100 + 50) / 100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Calibration with realistic temperature/gas values and zeroed
    /// pressure terms except P1, so pressure intermediates are predictable.
    fn calib() -> CalibrationSet {
        CalibrationSet {
            par_t1: 26000,
            par_t2: 26000,
            par_t3: 3,
            par_p1: 4096,
            par_p2: 0,
            par_p3: 0,
            par_p4: 0,
            par_p5: 0,
            par_p6: 0,
            par_p7: 0,
            par_p8: 0,
            par_p9: 0,
            par_p10: 0,
            par_h1: 750,
            par_h2: 1000,
            par_h3: 0,
            par_h4: 45,
            par_h5: 20,
            par_h6: 120,
            par_h7: -100,
            par_g1: -30,
            par_g2: -14600,
            par_g3: 18,
            res_heat_range: 1,
            res_heat_val: 40,
        }
    }

    #[test]
    fn temperature_reference_vector() {
        // T1=26000 T2=26000 T3=3, raw 500000:
        //   var1 = 62500 - 52000               = 10500
        //   var2 = (10500 * 26000) >> 11       = 133300
        //   var3 = ((5250 * 5250) >> 12) * 48 >> 14 = 19
        //   t_fine = 133319 -> 2604 centi-degrees
        let t = temperature(&calib(), 500_000);
        assert_eq!(t.t_fine, 133_319);
        assert_eq!(t.centi_celsius, 2604);
    }

    #[test]
    fn pressure_picks_divide_then_shift_above_threshold() {
        // t_fine = 128000 zeroes the leading var1 stage, so with the test
        // calibration press_comp = (1048576 - raw) * 3125 and var1 = 4096.
        //
        // raw 704976: press_comp = 1_073_750_000 >= 2^30, divide-then-shift
        //   floor(p / 4096) * 2 = 524290
        // (shift-then-divide would give floor(2p / 4096) = 524291)
        assert_eq!(pressure(&calib(), 128_000, 704_976), 524_290);
    }

    #[test]
    fn pressure_picks_shift_then_divide_below_threshold() {
        // raw 704979: press_comp = 1_073_740_625 < 2^30, shift-then-divide
        //   floor(2p / 4096) = 524287
        assert_eq!(pressure(&calib(), 128_000, 704_979), 524_287);
    }

    #[test]
    fn gas_resistance_reference_points() {
        // raw at center code, widest range: 10000 * 262144 / 4096 * 100
        assert_eq!(gas_resistance(512, 0), 64_000_000);
        // narrowest range: var1 = 8 -> 10000 * 8 / 4096 = 19 -> 1900
        assert_eq!(gas_resistance(512, 15), 1900);
        // range nibble is masked
        assert_eq!(gas_resistance(512, 16), gas_resistance(512, 0));
    }

    #[test]
    fn heater_code_reference_vector() {
        // ambient 25.00 C, target 300 C with the test calibration:
        //   var1 = (2500 * 18 / 1000) << 8          = 11520
        //   var2 = 754 * 536793                     = 404741922
        //   var3 = 11520 + var2 >> 1                = 202382481
        //   var4 = var3 / 5                         = 40476496
        //   var5 = 131 * 40 + 65536                 = 70776
        //   ((40476496 / 70776) - 250) * 34         = 10914 -> code 109
        assert_eq!(heater_resistance_code(&calib(), 2500, 300), 109);
    }

    #[test]
    fn heater_target_clamped_at_membrane_limit() {
        let c = calib();
        assert_eq!(
            heater_resistance_code(&c, 2500, 450),
            heater_resistance_code(&c, 2500, 400),
        );
    }

    #[test]
    fn humidity_tracks_same_cycle_temperature() {
        let c = calib();
        // Different same-cycle temperatures must change the result: the
        // polynomial corrects against live die temperature.
        let cold = humidity(&c, 500, 20_000);
        let warm = humidity(&c, 3500, 20_000);
        assert_ne!(cold, warm);
        // Physical range in hundredths of a percent
        for h in [cold, warm] {
            assert!((0..=10_000).contains(&h));
        }
    }
}
