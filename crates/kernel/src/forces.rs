//! The four steering terms.
//!
//! Each term reads the whole agent slice and the index of the agent it is
//! computed for, and returns an unnormalized direction. None of them mutate
//! state, so all agents' forces can be taken from the same frozen snapshot.

use glam::Vec3;
use murmur_common::math::within_cone;
use murmur_common::{FlockConfig, ForceWeights};

use crate::agent::Agent;

/// Raw (unweighted) steering contributions for one agent.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Forces {
    pub separation: Vec3,
    pub alignment: Vec3,
    pub cohesion: Vec3,
    pub avoidance: Vec3,
}

impl Forces {
    /// Evaluate all four terms for `agents[me]`.
    pub fn compute(agents: &[Agent], me: usize, config: &FlockConfig) -> Self {
        Self {
            separation: separation(agents, me, config),
            alignment: alignment(agents, me, config),
            cohesion: cohesion(agents, me, config),
            avoidance: avoidance(agents, me, config),
        }
    }

    /// Weighted sum of the four terms.
    pub fn combined(&self, weights: &ForceWeights) -> Vec3 {
        self.separation * weights.separation
            + self.alignment * weights.alignment
            + self.cohesion * weights.cohesion
            + self.avoidance * weights.avoidance
    }
}

/// Other agents inside `radius` and the view cone of `agents[me]`, with their offset and distance.
fn visible(
    agents: &[Agent],
    me: usize,
    radius: f32,
    half_angle: f32,
) -> impl Iterator<Item = (&Agent, Vec3, f32)> {
    let this = agents[me];
    agents
        .iter()
        .enumerate()
        .filter(move |(i, _)| *i != me)
        .filter_map(move |(_, other)| {
            let offset = other.position - this.position;
            let distance = offset.length();
            (distance <= radius && within_cone(this.forward(), offset, half_angle))
                .then_some((other, offset, distance))
        })
}

/// Push away from close neighbors, weighted by inverse square distance.
///
/// The distance is floored at `min_separation_distance`; a coincident
/// neighbor has no direction and contributes nothing.
pub fn separation(agents: &[Agent], me: usize, config: &FlockConfig) -> Vec3 {
    let floor = config.min_separation_distance;
    visible(agents, me, config.separation_radius(), config.view_angle).fold(
        Vec3::ZERO,
        |acc, (_, offset, distance)| {
            let d = distance.max(floor);
            acc - offset / (d * d)
        },
    )
}

/// Steer toward the mean velocity of visible neighbors.
pub fn alignment(agents: &[Agent], me: usize, config: &FlockConfig) -> Vec3 {
    let (sum, count) = visible(agents, me, config.view_radius, config.view_angle)
        .fold((Vec3::ZERO, 0u32), |(sum, n), (other, _, _)| {
            (sum + other.velocity, n + 1)
        });
    if count == 0 {
        return Vec3::ZERO;
    }
    sum / count as f32 - agents[me].velocity
}

/// Steer toward the mean position of visible neighbors.
pub fn cohesion(agents: &[Agent], me: usize, config: &FlockConfig) -> Vec3 {
    let (sum, count) = visible(agents, me, config.view_radius, config.view_angle)
        .fold((Vec3::ZERO, 0u32), |(sum, n), (other, _, _)| {
            (sum + other.position, n + 1)
        });
    if count == 0 {
        return Vec3::ZERO;
    }
    sum / count as f32 - agents[me].position
}

/// Unit vector from the nearest obstacle toward the look-ahead point.
///
/// Three probes are tested against every other agent's radius: the current
/// position, `look_ahead` along the heading, and half of that. Among the
/// agents hit, the one nearest to `agents[me]` wins; equal distances keep the
/// lower index. Zero when nothing is hit.
pub fn avoidance(agents: &[Agent], me: usize, config: &FlockConfig) -> Vec3 {
    let this = &agents[me];
    let ahead = this.position + this.forward() * config.look_ahead;
    let halfway = this.position + this.forward() * (config.look_ahead * 0.5);
    let probes = [this.position, ahead, halfway];

    let mut nearest: Option<(f32, Vec3)> = None;
    for (i, other) in agents.iter().enumerate() {
        if i == me {
            continue;
        }
        let hit = probes
            .iter()
            .any(|p| p.distance(other.position) <= other.radius);
        if !hit {
            continue;
        }
        let d = this.position.distance(other.position);
        if nearest.is_none_or(|(best, _)| d < best) {
            nearest = Some((d, other.position));
        }
    }

    nearest
        .map(|(_, obstacle)| (ahead - obstacle).normalize_or_zero())
        .unwrap_or(Vec3::ZERO)
}
