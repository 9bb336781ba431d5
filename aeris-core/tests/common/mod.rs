//! Common test fakes for integration tests
//!
//! Provides an in-memory register image with a realistic calibration block,
//! a scripted sample source that replays queued raw samples, and the
//! matching decoded [`CalibrationSet`] so tests can assert against values
//! computed independently of the register decode path.

#![allow(dead_code)]

use std::collections::VecDeque;

use aeris_core::traits::{RegisterBus, SampleSource};
use aeris_core::{CalibrationSet, RawSample};

/// Register transport backed by a flat 256-byte image
pub struct FakeBus {
    pub regs: [u8; 256],
    /// When set, every read fails
    pub faulty: bool,
}

impl FakeBus {
    /// Image populated with the calibration block matching [`calibration`]
    pub fn with_calibration() -> Self {
        let mut regs = [0u8; 256];

        // T1 = 26041, T2 = 26213, T3 = 3
        regs[0xE9] = 0xB9;
        regs[0xEA] = 0x65;
        regs[0x8A] = 0x65;
        regs[0x8B] = 0x66;
        regs[0x8C] = 0x03;
        // P1 = 36264, P2 = -10241, P3 = 88
        regs[0x8E] = 0xA8;
        regs[0x8F] = 0x8D;
        regs[0x90] = 0xFF;
        regs[0x91] = 0xD7;
        regs[0x92] = 0x58;
        // P4 = 7891, P5 = -116, P6 = 30, P7 = 46
        regs[0x94] = 0xD3;
        regs[0x95] = 0x1E;
        regs[0x96] = 0x8C;
        regs[0x97] = 0xFF;
        regs[0x99] = 0x1E;
        regs[0x98] = 0x2E;
        // P8 = -2949, P9 = 785, P10 = 30
        regs[0x9C] = 0x7B;
        regs[0x9D] = 0xF4;
        regs[0x9E] = 0x11;
        regs[0x9F] = 0x03;
        regs[0xA0] = 0x1E;
        // H1 = 0x6D7, H2 = 0x3AB (packed middle byte 0xB7)
        regs[0xE2] = 0xB7;
        regs[0xE3] = 0x6D;
        regs[0xE1] = 0x3A;
        // H3 = 0, H4 = 45, H5 = 20, H6 = 120, H7 = -100
        regs[0xE4] = 0x00;
        regs[0xE5] = 0x2D;
        regs[0xE6] = 0x14;
        regs[0xE7] = 0x78;
        regs[0xE8] = 0x9C;
        // G1 = -30, G2 = -14600, G3 = 18
        regs[0xED] = 0xE2;
        regs[0xEB] = 0xF8;
        regs[0xEC] = 0xC6;
        regs[0xEE] = 0x12;
        // heater range 1 (bits 5:4), heater correction 40
        regs[0x02] = 0b0001_0000;
        regs[0x00] = 0x28;

        Self { regs, faulty: false }
    }
}

impl RegisterBus for FakeBus {
    type Error = ();

    fn read_register(&mut self, reg: u8) -> Result<u8, ()> {
        if self.faulty {
            return Err(());
        }
        Ok(self.regs[reg as usize])
    }
}

/// The decoded form of [`FakeBus::with_calibration`]'s register image
pub fn calibration() -> CalibrationSet {
    CalibrationSet {
        par_t1: 26041,
        par_t2: 26213,
        par_t3: 3,
        par_p1: 36264,
        par_p2: -10241,
        par_p3: 88,
        par_p4: 7891,
        par_p5: -116,
        par_p6: 30,
        par_p7: 46,
        par_p8: -2949,
        par_p9: 785,
        par_p10: 30,
        par_h1: 0x6D7,
        par_h2: 0x3AB,
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

/// A raw sample with codes in the realistic indoor range
pub fn room_sample() -> RawSample {
    RawSample {
        temperature_adc: 500_000,
        pressure_adc: 420_000,
        humidity_adc: 32_000,
        gas_adc: 600,
        gas_range: 4,
        heater_stable: true,
    }
}

/// Sample source replaying a fixed script of raw samples
///
/// Polling past the end of the script reports `WouldBlock` forever. Heater
/// writes are recorded for assertions.
pub struct ScriptedSampler {
    samples: VecDeque<RawSample>,
    pub heater_writes: Vec<(u8, u8)>,
}

impl ScriptedSampler {
    pub fn new(samples: impl IntoIterator<Item = RawSample>) -> Self {
        Self {
            samples: samples.into_iter().collect(),
            heater_writes: Vec::new(),
        }
    }

    /// A script repeating one sample `count` times
    pub fn repeating(sample: RawSample, count: usize) -> Self {
        Self::new(std::iter::repeat(sample).take(count))
    }
}

impl SampleSource for ScriptedSampler {
    type Error = ();

    fn poll_sample(&mut self) -> nb::Result<RawSample, ()> {
        self.samples.pop_front().ok_or(nb::Error::WouldBlock)
    }

    fn set_heater(&mut self, resistance_code: u8, duration_code: u8) -> Result<(), ()> {
        self.heater_writes.push((resistance_code, duration_code));
        Ok(())
    }
}
