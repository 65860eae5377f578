use glam::Vec3;
use murmur_common::{ConfigError, FlockConfig};

use crate::agent::Agent;
use crate::forces::Forces;
use crate::integrator::{integrate, step_scale};
use crate::spawner::Spawner;

/// The authoritative flock state.
///
/// Agents live in a contiguous vector addressed by index; the order is stable
/// but carries no meaning. Population never changes after construction.
/// Given the same config and seed, construction, `reset` and `step` produce
/// identical states.
#[derive(Debug, Clone)]
pub struct Flock {
    config: FlockConfig,
    agents: Vec<Agent>,
    spawner: Spawner,
    tick: u64,
    /// Summed forces from the first pass of `step`, reused between ticks.
    scratch: Vec<Vec3>,
}

impl Flock {
    /// Spawn a flock from `config` with seed 0.
    pub fn new(config: FlockConfig) -> Result<Self, ConfigError> {
        Self::with_seed(config, 0)
    }

    /// Spawn a flock from `config` with a specific seed for reproducible runs.
    pub fn with_seed(config: FlockConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut spawner = Spawner::new(seed);
        let agents = spawner.spawn_all(&config);
        tracing::debug!(population = agents.len(), seed, "flock spawned");
        Ok(Self {
            config,
            agents,
            spawner,
            tick: 0,
            scratch: Vec::new(),
        })
    }

    /// Build a flock from hand-placed agents. The population becomes `agents.len()`.
    pub fn from_agents(mut config: FlockConfig, agents: Vec<Agent>) -> Result<Self, ConfigError> {
        config.population = agents.len();
        config.validate()?;
        Ok(Self {
            config,
            agents,
            spawner: Spawner::new(0),
            tick: 0,
            scratch: Vec::new(),
        })
    }

    pub fn config(&self) -> &FlockConfig {
        &self.config
    }

    /// Ticks advanced since construction or the last reset.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Seed the spawner was last seeded with.
    pub fn seed(&self) -> u64 {
        self.spawner.seed()
    }

    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// Panics if `index` is out of range.
    pub fn agent(&self, index: usize) -> &Agent {
        &self.agents[index]
    }

    /// Panics if `index` is out of range.
    pub fn position(&self, index: usize) -> Vec3 {
        self.agents[index].position
    }

    /// Unit heading of agent `index`. Panics if `index` is out of range.
    pub fn heading(&self, index: usize) -> Vec3 {
        self.agents[index].forward()
    }

    /// Position of the first agent, the one a follow camera tracks.
    pub fn lead_position(&self) -> Option<Vec3> {
        self.agents.first().map(|a| a.position)
    }

    /// Heading of the first agent.
    pub fn lead_heading(&self) -> Option<Vec3> {
        self.agents.first().map(Agent::forward)
    }

    /// Advance every agent by one tick.
    ///
    /// All forces are computed from the current state before any agent moves.
    /// An empty flock is a no-op.
    pub fn step(&mut self, delta_time: f32) {
        if self.agents.is_empty() {
            return;
        }
        let _span = tracing::trace_span!("flock_step", tick = self.tick).entered();

        let scale = step_scale(&self.config, delta_time);
        let weights = self.config.weights;

        self.scratch.clear();
        self.scratch.extend(
            (0..self.agents.len())
                .map(|i| Forces::compute(&self.agents, i, &self.config).combined(&weights)),
        );

        for (agent, force) in self.agents.iter_mut().zip(&self.scratch) {
            integrate(agent, *force, self.config.mass, scale);
        }
        self.tick += 1;

        tracing::trace!(tick = self.tick, scale, "flock stepped");
    }

    /// Replace every agent with a fresh draw from the spawner, continuing its stream.
    pub fn reset(&mut self) {
        self.agents = self.spawner.spawn_all(&self.config);
        self.tick = 0;
        tracing::debug!(population = self.agents.len(), "flock reset");
    }

    /// Reseed the spawner, then reset.
    pub fn reset_with_seed(&mut self, seed: u64) {
        self.spawner.reseed(seed);
        self.reset();
    }

    /// Deterministic hash of tick and agent state, for comparing runs.
    pub fn state_hash(&self) -> u64 {
        let mut h: u64 = 0xcbf2_9ce4_8422_2325; // FNV offset basis
        let mix = |h: &mut u64, bytes: &[u8]| {
            for &b in bytes {
                *h ^= b as u64;
                *h = h.wrapping_mul(0x0100_0000_01b3);
            }
        };
        let mix_vec = |h: &mut u64, v: Vec3| {
            for c in v.to_array() {
                mix(h, &c.to_bits().to_le_bytes());
            }
        };
        mix(&mut h, &self.tick.to_le_bytes());
        for agent in &self.agents {
            mix_vec(&mut h, agent.position);
            mix_vec(&mut h, agent.velocity);
            mix_vec(&mut h, agent.forward());
            mix(&mut h, &agent.radius.to_bits().to_le_bytes());
        }
        h
    }
}
