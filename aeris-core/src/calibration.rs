//! Factory Calibration Coefficients
//!
//! Every sensor die is trimmed at the factory and carries its individual
//! compensation coefficients in read-only registers. They are decoded once
//! at bring-up into a [`CalibrationSet`] and shared immutably with the
//! compensation engine for the life of the process.
//!
//! Decoding notes:
//! - multi-byte coefficients are little-endian words in consecutive
//!   registers
//! - H1 and H2 are 12-bit values sharing a packed middle byte: H1 takes its
//!   low nibble, H2 its high nibble
//! - the heater range lives in bits 5:4 of a status register; the heater
//!   correction value is a plain signed byte

use crate::constants::registers as regs;
use crate::errors::{SensorError, SensorResult};
use crate::traits::RegisterBus;

/// Immutable factory calibration for one sensor die
///
/// Populated once by [`CalibrationSet::read_from`]; never mutated after.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalibrationSet {
    /// Temperature coefficient T1
    pub par_t1: i16,
    /// Temperature coefficient T2
    pub par_t2: i16,
    /// Temperature coefficient T3
    pub par_t3: i8,

    /// Pressure coefficient P1
    pub par_p1: u16,
    /// Pressure coefficient P2
    pub par_p2: i16,
    /// Pressure coefficient P3
    pub par_p3: i8,
    /// Pressure coefficient P4
    pub par_p4: i16,
    /// Pressure coefficient P5
    pub par_p5: i16,
    /// Pressure coefficient P6
    pub par_p6: i8,
    /// Pressure coefficient P7
    pub par_p7: i8,
    /// Pressure coefficient P8
    pub par_p8: i16,
    /// Pressure coefficient P9
    pub par_p9: i16,
    /// Pressure coefficient P10
    pub par_p10: i8,

    /// Humidity coefficient H1, 12-bit unsigned
    pub par_h1: u16,
    /// Humidity coefficient H2, 12-bit unsigned
    pub par_h2: u16,
    /// Humidity coefficient H3
    pub par_h3: i8,
    /// Humidity coefficient H4
    pub par_h4: i8,
    /// Humidity coefficient H5
    pub par_h5: i8,
    /// Humidity coefficient H6
    pub par_h6: i8,
    /// Humidity coefficient H7
    pub par_h7: i8,

    /// Gas heater coefficient G1
    pub par_g1: i8,
    /// Gas heater coefficient G2
    pub par_g2: i16,
    /// Gas heater coefficient G3
    pub par_g3: u8,

    /// Heater range from the status register, bits 5:4
    pub res_heat_range: u8,
    /// Heater resistance correction value
    pub res_heat_val: i8,
}

impl CalibrationSet {
    /// Decode the full coefficient block through a register transport
    ///
    /// Single startup pass; any transport fault aborts the decode.
    pub fn read_from<B: RegisterBus>(bus: &mut B) -> SensorResult<Self> {
        Self::decode(bus).map_err(|_| SensorError::Bus)
    }

    fn decode<B: RegisterBus>(bus: &mut B) -> Result<Self, B::Error> {
        let h1_h2_packed = bus.read_register(regs::PAR_H1_LSB)?;

        Ok(Self {
            par_t1: bus.read_signed_word(regs::PAR_T1_LSB)?,
            par_t2: bus.read_signed_word(regs::PAR_T2_LSB)?,
            par_t3: bus.read_signed(regs::PAR_T3)?,

            par_p1: bus.read_word(regs::PAR_P1_LSB)?,
            par_p2: bus.read_signed_word(regs::PAR_P2_LSB)?,
            par_p3: bus.read_signed(regs::PAR_P3)?,
            par_p4: bus.read_signed_word(regs::PAR_P4_LSB)?,
            par_p5: bus.read_signed_word(regs::PAR_P5_LSB)?,
            par_p6: bus.read_signed(regs::PAR_P6)?,
            par_p7: bus.read_signed(regs::PAR_P7)?,
            par_p8: bus.read_signed_word(regs::PAR_P8_LSB)?,
            par_p9: bus.read_signed_word(regs::PAR_P9_LSB)?,
            par_p10: bus.read_signed(regs::PAR_P10)?,

            par_h1: ((bus.read_register(regs::PAR_H1_MSB)? as u16) << 4)
                | (h1_h2_packed & 0x0F) as u16,
            par_h2: ((bus.read_register(regs::PAR_H2_MSB)? as u16) << 4)
                | (h1_h2_packed >> 4) as u16,
            par_h3: bus.read_signed(regs::PAR_H3)?,
            par_h4: bus.read_signed(regs::PAR_H4)?,
            par_h5: bus.read_signed(regs::PAR_H5)?,
            par_h6: bus.read_signed(regs::PAR_H6)?,
            par_h7: bus.read_signed(regs::PAR_H7)?,

            par_g1: bus.read_signed(regs::PAR_G1)?,
            par_g2: bus.read_signed_word(regs::PAR_G2_LSB)?,
            par_g3: bus.read_register(regs::PAR_G3)?,

            res_heat_range: (bus.read_register(regs::RES_HEAT_RANGE)? >> 4) & 0x03,
            res_heat_val: bus.read_signed(regs::RES_HEAT_VAL)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ArrayBus {
        regs: [u8; 256],
    }

    impl RegisterBus for ArrayBus {
        type Error = ();

        fn read_register(&mut self, reg: u8) -> Result<u8, ()> {
            Ok(self.regs[reg as usize])
        }
    }

    fn bus() -> ArrayBus {
        let mut regs = [0u8; 256];
        // T1 = 26041, T2 = 26213, T3 = 3
        regs[0xE9] = 0xB9;
        regs[0xEA] = 0x65;
        regs[0x8A] = 0x65;
        regs[0x8B] = 0x66;
        regs[0x8C] = 0x03;
        // P2 = -10241 (0xD7FF)
        regs[0x90] = 0xFF;
        regs[0x91] = 0xD7;
        // H1/H2 packed: 0xE1 = 0x3A, 0xE2 = 0xB7, 0xE3 = 0x6D
        regs[0xE1] = 0x3A;
        regs[0xE2] = 0xB7;
        regs[0xE3] = 0x6D;
        // H3 = -6
        regs[0xE4] = 0xFA;
        // G1 = -30, G2 = -14600 (0xC6F8), G3 = 18
        regs[0xED] = 0xE2;
        regs[0xEB] = 0xF8;
        regs[0xEC] = 0xC6;
        regs[0xEE] = 0x12;
        // heat range bits 5:4 of 0x02; heat val signed at 0x00
        regs[0x02] = 0b0001_0000;
        regs[0x00] = 0x28;
        ArrayBus { regs }
    }

    #[test]
    fn decodes_signed_and_unsigned_words() {
        let calib = CalibrationSet::read_from(&mut bus()).unwrap();
        assert_eq!(calib.par_t1, 26041);
        assert_eq!(calib.par_t2, 26213);
        assert_eq!(calib.par_t3, 3);
        assert_eq!(calib.par_p2, -10241);
        assert_eq!(calib.par_h3, -6);
        assert_eq!(calib.par_g1, -30);
        assert_eq!(calib.par_g2, -14600);
        assert_eq!(calib.par_g3, 18);
    }

    #[test]
    fn unpacks_twelve_bit_humidity_pair() {
        let calib = CalibrationSet::read_from(&mut bus()).unwrap();
        // H1 = 0x6D:0x7, H2 = 0x3A:0xB
        assert_eq!(calib.par_h1, 0x6D7);
        assert_eq!(calib.par_h2, 0x3AB);
    }

    #[test]
    fn extracts_heater_constants() {
        let calib = CalibrationSet::read_from(&mut bus()).unwrap();
        assert_eq!(calib.res_heat_range, 1);
        assert_eq!(calib.res_heat_val, 40);
    }
}
