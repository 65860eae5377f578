use glam::Vec3;
use murmur_common::FlockConfig;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::agent::Agent;

/// Seeded source of initial agent states.
///
/// Agents start on the horizontal plane (y = 0): a random direction scaled
/// by a random radius in `[0, spawn_radius)`, with a small random velocity.
#[derive(Debug, Clone)]
pub struct Spawner {
    rng: SmallRng,
    seed: u64,
}

impl Spawner {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed the stream was last restarted with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Restart the random stream from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        tracing::debug!(seed, "spawner reseeded");
        self.rng = SmallRng::seed_from_u64(seed);
        self.seed = seed;
    }

    /// Draw one agent.
    pub fn spawn(&mut self, config: &FlockConfig) -> Agent {
        let direction = self.planar().try_normalize().unwrap_or(Vec3::X);
        let distance = if config.spawn_radius > 0.0 {
            self.rng.gen_range(0.0..config.spawn_radius)
        } else {
            0.0
        };
        let velocity = self.planar() * config.initial_speed;
        Agent::new(direction * distance, velocity, config.agent_radius)
    }

    /// Draw a full population.
    pub fn spawn_all(&mut self, config: &FlockConfig) -> Vec<Agent> {
        (0..config.population).map(|_| self.spawn(config)).collect()
    }

    /// `(x, 0, z)` with both components uniform in `[-1, 1)`.
    fn planar(&mut self) -> Vec3 {
        let x = self.rng.gen_range(-1.0..1.0);
        let z = self.rng.gen_range(-1.0..1.0);
        Vec3::new(x, 0.0, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn agents_spawn_inside_the_disc() {
        let config = FlockConfig::default();
        let mut spawner = Spawner::new(1);
        for agent in spawner.spawn_all(&config) {
            assert_eq!(agent.position.y, 0.0);
            assert_eq!(agent.velocity.y, 0.0);
            assert!(agent.position.length() < config.spawn_radius + 1e-4);
            assert!(agent.speed() <= config.initial_speed * 2f32.sqrt() + 1e-6);
            assert_eq!(agent.radius, config.agent_radius);
            assert!((agent.forward().length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn population_size_is_respected() {
        let config = FlockConfig {
            population: 17,
            ..FlockConfig::default()
        };
        assert_eq!(Spawner::new(0).spawn_all(&config).len(), 17);
    }

    #[test]
    fn same_seed_same_agents() {
        let config = FlockConfig::default();
        let a = Spawner::new(42).spawn_all(&config);
        let b = Spawner::new(42).spawn_all(&config);
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_diverge() {
        let config = FlockConfig::default();
        let a = Spawner::new(1).spawn_all(&config);
        let b = Spawner::new(2).spawn_all(&config);
        assert_ne!(a, b);
    }

    #[test]
    fn reseed_restarts_stream() {
        let config = FlockConfig::default();
        let mut spawner = Spawner::new(9);
        let first = spawner.spawn_all(&config);
        spawner.spawn_all(&config);
        spawner.reseed(9);
        assert_eq!(spawner.spawn_all(&config), first);
        assert_eq!(spawner.seed(), 9);
    }

    #[test]
    fn zero_radius_spawns_at_origin() {
        let config = FlockConfig {
            spawn_radius: 0.0,
            ..FlockConfig::default()
        };
        let agent = Spawner::new(3).spawn(&config);
        assert_eq!(agent.position, Vec3::ZERO);
    }
}
