//! Semi-implicit Euler update for a single agent.

use glam::Vec3;
use murmur_common::{FlockConfig, TimingMode};

use crate::agent::Agent;

/// How many reference ticks one `step(delta_time)` call covers.
///
/// Legacy timing always advances one unit. Scaled timing uses
/// `delta_time * reference_rate`; a negative or non-finite delta means no motion.
pub fn step_scale(config: &FlockConfig, delta_time: f32) -> f32 {
    match config.timing {
        TimingMode::Legacy => 1.0,
        TimingMode::Scaled => {
            if delta_time.is_finite() && delta_time > 0.0 {
                delta_time * config.reference_rate
            } else {
                0.0
            }
        }
    }
}

/// Apply `force` to `agent`: velocity first, then position with the new velocity, then heading.
pub fn integrate(agent: &mut Agent, force: Vec3, mass: f32, scale: f32) {
    agent.velocity += force / mass * scale;
    agent.position += agent.velocity * scale;
    agent.refresh_forward();
}
