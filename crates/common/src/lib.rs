//! Shared types for the murmur flock engine: configuration, guarded vector math, errors.
//!
//! # Invariants
//! - Every config handed to the kernel has passed `FlockConfig::validate`.
//! - Math helpers never produce NaN from finite input.

pub mod config;
pub mod math;

pub use config::{ConfigError, FlockConfig, ForceWeights, TimingMode};
