use glam::Vec3;
use murmur_common::math::{DEFAULT_HEADING, heading_from};
use serde::{Deserialize, Serialize};

/// One boid.
///
/// `forward` is derived from `velocity` and is always unit length: it is
/// recomputed whenever velocity has a direction and held over otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub position: Vec3,
    pub velocity: Vec3,
    forward: Vec3,
    /// Perception/collision radius used by avoidance.
    pub radius: f32,
}

impl Agent {
    /// Build an agent facing along its velocity, or +Z if it is at rest.
    pub fn new(position: Vec3, velocity: Vec3, radius: f32) -> Self {
        Self {
            position,
            velocity,
            forward: heading_from(velocity, DEFAULT_HEADING),
            radius,
        }
    }

    /// Unit heading.
    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    /// Re-derive the heading from the current velocity.
    pub fn refresh_forward(&mut self) {
        self.forward = heading_from(self.velocity, self.forward);
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}

impl Default for Agent {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::ZERO, 0.5)
    }
}
