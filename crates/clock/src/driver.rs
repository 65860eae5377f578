use std::time::Duration;

use murmur_kernel::Flock;

use crate::gate::TickGate;
use crate::timer::FrameTimer;

const TIMER_WINDOW: usize = 120;

/// Frame loop glue between a host application and a flock.
///
/// The host calls `frame` once per rendered frame with the wall time since
/// the previous one. While playing, the gate decides how many fixed ticks
/// that buys and the flock is stepped with the gate's delta. The driver
/// starts paused.
#[derive(Debug, Clone)]
pub struct Driver {
    flock: Flock,
    gate: TickGate,
    timer: FrameTimer,
    playing: bool,
}

impl Driver {
    pub fn new(flock: Flock, gate: TickGate) -> Self {
        Self {
            flock,
            gate,
            timer: FrameTimer::new(TIMER_WINDOW),
            playing: false,
        }
    }

    pub fn flock(&self) -> &Flock {
        &self.flock
    }

    pub fn gate(&self) -> &TickGate {
        &self.gate
    }

    pub fn timer(&self) -> &FrameTimer {
        &self.timer
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn play(&mut self) {
        self.playing = true;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn toggle(&mut self) {
        self.playing = !self.playing;
    }

    /// Respawn the flock and stop playback.
    pub fn reset(&mut self) {
        self.flock.reset();
        self.gate.clear();
        self.playing = false;
        tracing::info!(seed = self.flock.seed(), "driver reset");
    }

    /// Account for one rendered frame. Returns the number of ticks stepped.
    pub fn frame(&mut self, elapsed: Duration) -> u32 {
        self.timer.record(elapsed);
        if !self.playing {
            return 0;
        }
        let ticks = self.gate.advance(elapsed);
        let dt = self.gate.delta();
        for _ in 0..ticks {
            self.flock.step(dt);
        }
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use murmur_common::FlockConfig;

    fn driver() -> Driver {
        let config = FlockConfig {
            population: 10,
            ..FlockConfig::default()
        };
        let flock = Flock::with_seed(config, 4).unwrap();
        Driver::new(flock, TickGate::new(50.0).unwrap())
    }

    #[test]
    fn starts_paused() {
        let mut d = driver();
        assert!(!d.is_playing());
        assert_eq!(d.frame(Duration::from_millis(40)), 0);
        assert_eq!(d.flock().tick(), 0);
        assert_eq!(d.timer().count(), 1);
    }

    #[test]
    fn paused_frames_do_not_accumulate() {
        let mut d = driver();
        d.frame(Duration::from_millis(19));
        d.play();
        assert_eq!(d.frame(Duration::from_millis(1)), 0);
        assert_eq!(d.gate().pending(), Duration::from_millis(1));
    }

    #[test]
    fn playing_steps_the_flock() {
        let mut d = driver();
        d.play();
        for _ in 0..5 {
            d.frame(Duration::from_millis(20));
        }
        assert_eq!(d.flock().tick(), 5);
    }

    #[test]
    fn toggle_flips_playback() {
        let mut d = driver();
        d.toggle();
        assert!(d.is_playing());
        d.toggle();
        assert!(!d.is_playing());
    }

    #[test]
    fn reset_pauses_and_respawns() {
        let mut d = driver();
        let before = d.flock().state_hash();
        d.play();
        d.frame(Duration::from_millis(20));
        d.reset();
        assert!(!d.is_playing());
        assert_eq!(d.flock().tick(), 0);
        assert_eq!(d.flock().agent_count(), 10);
        assert_ne!(d.flock().state_hash(), before);
    }
}
