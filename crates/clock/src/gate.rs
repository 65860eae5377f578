use std::time::Duration;

/// Errors from building timing components.
#[derive(Debug, thiserror::Error)]
pub enum ClockError {
    #[error("tick rate must be finite and positive, got {0}")]
    InvalidRate(f32),
}

/// Frame-rate limiter: turns wall-clock frame times into fixed logical ticks.
///
/// Elapsed time accumulates across frames; each full interval is one tick.
/// At most `max_ticks_per_frame` fire per call and any further backlog is
/// dropped, so a long stall never causes a burst of catch-up steps.
#[derive(Debug, Clone)]
pub struct TickGate {
    fps: f32,
    interval: Duration,
    accumulated: Duration,
    max_ticks_per_frame: u32,
}

impl TickGate {
    /// A gate firing `fps` times per second, at most once per frame.
    pub fn new(fps: f32) -> Result<Self, ClockError> {
        if !fps.is_finite() || fps <= 0.0 {
            return Err(ClockError::InvalidRate(fps));
        }
        let interval = Duration::from_secs_f64(1.0 / f64::from(fps));
        if interval.is_zero() {
            return Err(ClockError::InvalidRate(fps));
        }
        Ok(Self {
            fps,
            interval,
            accumulated: Duration::ZERO,
            max_ticks_per_frame: 1,
        })
    }

    /// Allow up to `max` ticks per frame (at least one).
    pub fn with_max_ticks_per_frame(mut self, max: u32) -> Self {
        self.max_ticks_per_frame = max.max(1);
        self
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Wall time one tick represents.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Logical delta time of one tick, seconds.
    pub fn delta(&self) -> f32 {
        1.0 / self.fps
    }

    /// Time carried toward the next tick.
    pub fn pending(&self) -> Duration {
        self.accumulated
    }

    /// Add one frame's elapsed time and return how many ticks fire.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulated += elapsed;
        let interval = self.interval.as_nanos();
        let total = self.accumulated.as_nanos();
        let due = total / interval;
        let fired = due.min(u128::from(self.max_ticks_per_frame)) as u32;
        if due > u128::from(fired) {
            tracing::debug!(dropped = (due - u128::from(fired)) as u64, "tick backlog dropped");
        }
        self.accumulated = Duration::from_nanos((total % interval) as u64);
        fired
    }

    /// Forget any partially accumulated interval.
    pub fn clear(&mut self) {
        self.accumulated = Duration::ZERO;
    }
}
