//! Calibration Register Map
//!
//! Register addresses of the factory calibration coefficients as laid out
//! on the BME688-class sensor fitted to the board. Multi-byte coefficients
//! are stored little-endian in consecutive registers unless noted; H1/H2
//! share a packed byte (see [`PAR_H1_LSB`]).
//!
//! These offsets are only touched once, during [`CalibrationSet::read_from`]
//! at bring-up, and for the heater constants that live in the status area.
//!
//! [`CalibrationSet::read_from`]: crate::calibration::CalibrationSet::read_from

/// Temperature coefficient T1, LSB (MSB at +1)
pub const PAR_T1_LSB: u8 = 0xE9;
/// Temperature coefficient T2, LSB (MSB at +1)
pub const PAR_T2_LSB: u8 = 0x8A;
/// Temperature coefficient T3
pub const PAR_T3: u8 = 0x8C;

/// Pressure coefficient P1, LSB (MSB at +1)
pub const PAR_P1_LSB: u8 = 0x8E;
/// Pressure coefficient P2, LSB (MSB at +1)
pub const PAR_P2_LSB: u8 = 0x90;
/// Pressure coefficient P3
pub const PAR_P3: u8 = 0x92;
/// Pressure coefficient P4, LSB (MSB at +1)
pub const PAR_P4_LSB: u8 = 0x94;
/// Pressure coefficient P5, LSB (MSB at +1)
pub const PAR_P5_LSB: u8 = 0x96;
/// Pressure coefficient P6
pub const PAR_P6: u8 = 0x99;
/// Pressure coefficient P7
pub const PAR_P7: u8 = 0x98;
/// Pressure coefficient P8, LSB (MSB at +1)
pub const PAR_P8_LSB: u8 = 0x9C;
/// Pressure coefficient P9, LSB (MSB at +1)
pub const PAR_P9_LSB: u8 = 0x9E;
/// Pressure coefficient P10
pub const PAR_P10: u8 = 0xA0;

/// Packed byte: low nibble is H1 bits 3:0, high nibble is H2 bits 3:0
pub const PAR_H1_LSB: u8 = 0xE2;
/// H1 bits 11:4
pub const PAR_H1_MSB: u8 = 0xE3;
/// H2 bits 11:4
pub const PAR_H2_MSB: u8 = 0xE1;
/// Humidity coefficient H3
pub const PAR_H3: u8 = 0xE4;
/// Humidity coefficient H4
pub const PAR_H4: u8 = 0xE5;
/// Humidity coefficient H5
pub const PAR_H5: u8 = 0xE6;
/// Humidity coefficient H6
pub const PAR_H6: u8 = 0xE7;
/// Humidity coefficient H7
pub const PAR_H7: u8 = 0xE8;

/// Gas coefficient G1
pub const PAR_G1: u8 = 0xED;
/// Gas coefficient G2, LSB (MSB at +1)
pub const PAR_G2_LSB: u8 = 0xEB;
/// Gas coefficient G3
pub const PAR_G3: u8 = 0xEE;

/// Status register carrying the heater range in bits 5:4
pub const RES_HEAT_RANGE: u8 = 0x02;
/// Heater resistance correction value (signed)
pub const RES_HEAT_VAL: u8 = 0x00;
