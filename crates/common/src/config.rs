use serde::{Deserialize, Serialize};
use std::f32::consts::{FRAC_PI_4, PI};
use std::path::Path;

/// Errors from loading or validating a flock configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("unsupported config format: {0:?} (expected .json, .yaml or .yml)")]
    UnsupportedFormat(String),
    #[error("invalid `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// How `Flock::step` interprets the delta time it is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimingMode {
    /// Motion scales with `delta_time * reference_rate`.
    #[default]
    Scaled,
    /// Every call advances exactly one fixed unit, whatever the delta.
    Legacy,
}

/// Per-term multipliers applied when the four steering forces are summed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ForceWeights {
    pub separation: f32,
    pub alignment: f32,
    pub cohesion: f32,
    pub avoidance: f32,
}

impl Default for ForceWeights {
    fn default() -> Self {
        Self {
            separation: 10.0,
            alignment: 1.0,
            cohesion: 1.0,
            avoidance: 1.0,
        }
    }
}

/// Everything that governs a flock: population, perception and integration.
///
/// Fields missing from a config file take their default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FlockConfig {
    /// Number of agents; fixed for the lifetime of a flock.
    pub population: usize,
    /// Radius of the disc agents are spawned in.
    pub spawn_radius: f32,
    /// Neighbor radius for alignment and cohesion.
    pub view_radius: f32,
    /// Half-angle of the perceptual cone, radians.
    pub view_angle: f32,
    /// Separation radius as a fraction of `spawn_radius`.
    pub separation_factor: f32,
    /// Floor on the distance used in the separation weight.
    pub min_separation_distance: f32,
    /// Perception radius given to spawned agents.
    pub agent_radius: f32,
    pub mass: f32,
    /// Scale applied to the random initial velocity.
    pub initial_speed: f32,
    /// Distance of the furthest avoidance probe along the heading.
    pub look_ahead: f32,
    pub weights: ForceWeights,
    pub timing: TimingMode,
    /// Ticks per second that one velocity unit refers to in scaled timing.
    pub reference_rate: f32,
}

impl Default for FlockConfig {
    fn default() -> Self {
        Self {
            population: 50,
            spawn_radius: 5.0,
            view_radius: 5.0,
            view_angle: 3.0 * FRAC_PI_4,
            separation_factor: 0.1,
            min_separation_distance: 0.1,
            agent_radius: 0.5,
            mass: 100_000.0,
            initial_speed: 0.001,
            look_ahead: 1.0,
            weights: ForceWeights::default(),
            timing: TimingMode::Scaled,
            reference_rate: 60.0,
        }
    }
}

impl FlockConfig {
    /// Radius inside which separation acts.
    pub fn separation_radius(&self) -> f32 {
        self.spawn_radius * self.separation_factor
    }

    /// Check every numeric field is usable by the integrator.
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("spawn_radius", self.spawn_radius)?;
        non_negative("view_radius", self.view_radius)?;
        non_negative("separation_factor", self.separation_factor)?;
        non_negative("agent_radius", self.agent_radius)?;
        non_negative("initial_speed", self.initial_speed)?;
        non_negative("look_ahead", self.look_ahead)?;
        positive("min_separation_distance", self.min_separation_distance)?;
        positive("mass", self.mass)?;
        positive("reference_rate", self.reference_rate)?;

        if !(0.0..=PI).contains(&self.view_angle) {
            return Err(ConfigError::Invalid {
                field: "view_angle",
                reason: format!("{} is outside [0, π]", self.view_angle),
            });
        }

        let w = &self.weights;
        for (field, value) in [
            ("weights.separation", w.separation),
            ("weights.alignment", w.alignment),
            ("weights.cohesion", w.cohesion),
            ("weights.avoidance", w.avoidance),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("{value} is not finite"),
                });
            }
        }
        Ok(())
    }

    /// Parse and validate a JSON config.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a YAML config.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file, picking the format from its extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        let data = std::fs::read_to_string(path)?;
        match ext.as_str() {
            "json" => Self::from_json_str(&data),
            "yaml" | "yml" => Self::from_yaml_str(&data),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("{value} must be finite and >= 0"),
        })
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("{value} must be finite and > 0"),
        })
    }
}
