use glam::Vec3;
use murmur_kernel::Flock;
use serde::Serialize;

/// Flock inspector for developer tooling.
///
/// Provides read-only queries against a flock for debugging, profiling and
/// headless reporting.
pub struct FlockInspector;

impl FlockInspector {
    /// Produce aggregate statistics for the whole flock.
    pub fn summary(flock: &Flock) -> FlockSummary {
        let agents = flock.agents();
        let n = agents.len();
        let (centroid, mean_speed, polarization) = if n == 0 {
            (Vec3::ZERO, 0.0, 0.0)
        } else {
            let inv = 1.0 / n as f32;
            let centroid = agents.iter().map(|a| a.position).sum::<Vec3>() * inv;
            let mean_speed = agents.iter().map(|a| a.speed()).sum::<f32>() * inv;
            let heading = agents.iter().map(|a| a.forward()).sum::<Vec3>() * inv;
            (centroid, mean_speed, heading.length())
        };
        FlockSummary {
            tick: flock.tick(),
            seed: flock.seed(),
            agent_count: n,
            centroid: centroid.to_array(),
            mean_speed,
            polarization,
        }
    }

    /// Details of one agent, or `None` if `index` is out of range.
    pub fn inspect_agent(flock: &Flock, index: usize) -> Option<AgentInfo> {
        flock.agents().get(index).map(|a| AgentInfo {
            index,
            position: a.position.to_array(),
            velocity: a.velocity.to_array(),
            heading: a.forward().to_array(),
            speed: a.speed(),
        })
    }
}

/// Aggregate flock statistics.
#[derive(Debug, Clone, Serialize)]
pub struct FlockSummary {
    pub tick: u64,
    pub seed: u64,
    pub agent_count: usize,
    pub centroid: [f32; 3],
    pub mean_speed: f32,
    /// Length of the mean heading: 1 when every agent faces the same way, near 0 when disordered.
    pub polarization: f32,
}

impl std::fmt::Display for FlockSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Flock: tick={} seed={} agents={} centroid=({:.3}, {:.3}, {:.3}) mean_speed={:.6} polarization={:.3}",
            self.tick,
            self.seed,
            self.agent_count,
            self.centroid[0],
            self.centroid[1],
            self.centroid[2],
            self.mean_speed,
            self.polarization,
        )
    }
}

/// Detailed state of a single agent.
#[derive(Debug, Clone, Serialize)]
pub struct AgentInfo {
    pub index: usize,
    pub position: [f32; 3],
    pub velocity: [f32; 3],
    pub heading: [f32; 3],
    pub speed: f32,
}

impl std::fmt::Display for AgentInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Agent [{}] pos=({:.3}, {:.3}, {:.3}) heading=({:.3}, {:.3}, {:.3}) speed={:.6}",
            self.index,
            self.position[0],
            self.position[1],
            self.position[2],
            self.heading[0],
            self.heading[1],
            self.heading[2],
            self.speed,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use murmur_common::FlockConfig;
    use murmur_kernel::Agent;

    fn flock_of(agents: Vec<Agent>) -> Flock {
        Flock::from_agents(FlockConfig::default(), agents).unwrap()
    }

    #[test]
    fn summary_empty_flock() {
        let summary = FlockInspector::summary(&flock_of(Vec::new()));
        assert_eq!(summary.tick, 0);
        assert_eq!(summary.agent_count, 0);
        assert_eq!(summary.polarization, 0.0);
    }

    #[test]
    fn summary_aggregates_agents() {
        let flock = flock_of(vec![
            Agent::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 2.0), 0.5),
            Agent::new(Vec3::new(3.0, 0.0, 2.0), Vec3::new(0.0, 0.0, 4.0), 0.5),
        ]);
        let summary = FlockInspector::summary(&flock);
        assert_eq!(summary.agent_count, 2);
        assert_eq!(summary.centroid, [2.0, 0.0, 1.0]);
        assert!((summary.mean_speed - 3.0).abs() < 1e-6);
        assert!((summary.polarization - 1.0).abs() < 1e-6);
    }

    #[test]
    fn opposed_headings_have_low_polarization() {
        let flock = flock_of(vec![
            Agent::new(Vec3::ZERO, Vec3::X, 0.5),
            Agent::new(Vec3::new(10.0, 0.0, 0.0), -Vec3::X, 0.5),
        ]);
        assert!(FlockInspector::summary(&flock).polarization < 1e-6);
    }

    #[test]
    fn inspect_agent_found() {
        let flock = flock_of(vec![Agent::new(Vec3::new(1.0, 2.0, 3.0), Vec3::Y, 0.5)]);
        let info = FlockInspector::inspect_agent(&flock, 0).unwrap();
        assert_eq!(info.position, [1.0, 2.0, 3.0]);
        assert_eq!(info.heading, [0.0, 1.0, 0.0]);
    }

    #[test]
    fn inspect_agent_out_of_range() {
        let flock = flock_of(vec![Agent::default()]);
        assert!(FlockInspector::inspect_agent(&flock, 1).is_none());
    }

    #[test]
    fn summary_display_and_json() {
        let summary = FlockInspector::summary(&flock_of(vec![Agent::default()]));
        let s = format!("{summary}");
        assert!(s.contains("tick=0"));
        assert!(s.contains("agents=1"));
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["agent_count"], 1);
    }
}
