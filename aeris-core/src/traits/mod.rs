//! Collaborator Interfaces
//!
//! The core never touches a wire. Everything it needs from the board - a
//! register transport for the one-time calibration read, a way to run one
//! forced-mode measurement cycle, and a pause between burn-in samples - is
//! expressed as a trait here and injected by the platform layer.
//!
//! ## Module Organization
//!
//! - [`bus`] - single-register reads for the startup calibration pass
//! - [`sample`] - forced-mode acquisition with a non-blocking poll, plus
//!   the bounded-deadline helper [`sample::acquire_with_timeout`]
//! - [`delay`] - millisecond pauses for burn-in pacing
//!
//! All traits are object-safe except where associated error types make
//! static dispatch the natural choice; the core only ever uses them via
//! generics, so monomorphization keeps the hot path free of vtables.

pub mod bus;
pub mod delay;
pub mod sample;

pub use bus::RegisterBus;
pub use delay::DelayMs;
pub use sample::{acquire_with_timeout, SampleSource};
