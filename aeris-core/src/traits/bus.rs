//! Register transport abstraction
//!
//! One synchronous 8-bit register read against the sensor's fixed device
//! address. Only the calibration decode path uses this; per-cycle data
//! moves through [`SampleSource`](super::SampleSource) instead.

/// Byte-wide register access to the sensor
///
/// Implementations wrap the board's two-wire transaction primitives. The
/// provided combinators cover the decode patterns the calibration map
/// needs: signed bytes and little-endian 16-bit words in consecutive
/// registers.
pub trait RegisterBus {
    /// Transport fault type reported by the underlying bus
    type Error;

    /// Read one unsigned byte from `reg`
    fn read_register(&mut self, reg: u8) -> Result<u8, Self::Error>;

    /// Read one byte from `reg`, reinterpreted as two's complement
    fn read_signed(&mut self, reg: u8) -> Result<i8, Self::Error> {
        Ok(self.read_register(reg)? as i8)
    }

    /// Read a little-endian 16-bit word from `lsb_reg` and `lsb_reg + 1`
    fn read_word(&mut self, lsb_reg: u8) -> Result<u16, Self::Error> {
        let lsb = self.read_register(lsb_reg)?;
        let msb = self.read_register(lsb_reg + 1)?;
        Ok(u16::from_le_bytes([lsb, msb]))
    }

    /// Read a little-endian 16-bit word, reinterpreted as two's complement
    fn read_signed_word(&mut self, lsb_reg: u8) -> Result<i16, Self::Error> {
        Ok(self.read_word(lsb_reg)? as i16)
    }
}
