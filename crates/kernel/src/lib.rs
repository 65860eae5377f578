//! Flock kernel: agent state, steering forces, integration, seeded spawning.
//!
//! # Invariants
//! - `Flock::step` reads a frozen copy of the state; forces never see a half-updated flock.
//! - Every agent heading is unit length after construction and after every step.
//! - Given the same config and seed, construction, reset and stepping are reproducible.

pub mod agent;
pub mod flock;
pub mod forces;
pub mod integrator;
pub mod spawner;

pub use agent::Agent;
pub use flock::Flock;
pub use forces::Forces;
pub use spawner::Spawner;
