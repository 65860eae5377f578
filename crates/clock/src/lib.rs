//! Timing: decides when the flock ticks and with which fixed delta.
//!
//! # Invariants
//! - Every tick handed to the flock uses the same logical delta, `1 / fps`.
//! - A paused driver never advances the flock or its gate.

mod driver;
mod gate;
mod timer;

pub use driver::Driver;
pub use gate::{ClockError, TickGate};
pub use timer::FrameTimer;
