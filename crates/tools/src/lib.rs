//! Developer tooling: flock inspector and summaries.
//!
//! # Invariants
//! - Tools only read flock state; they never mutate it.

mod inspector;

pub use inspector::{AgentInfo, FlockInspector, FlockSummary};
