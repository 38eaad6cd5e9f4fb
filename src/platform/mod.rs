//! Platform abstraction layer
//!
//! Handles the pieces the tick driver needs from the outside world:
//! - Input events (drained once per tick, never blocking)
//! - Time (tick pacing)

pub mod pilot;
pub mod scripted;

use std::time::{Duration, Instant};

use crate::sim::{GameState, InputEvent};

pub use pilot::DemoPilot;
pub use scripted::ScriptedInput;

/// Source of discrete input events
pub trait InputSource {
    /// Drain every event pending right now. Must not block.
    ///
    /// `state` is the game as it stands after this tick's simulation, for
    /// sources that react to it.
    fn poll(&mut self, state: &GameState) -> Vec<InputEvent>;
}

/// Time source for pacing ticks
pub trait Clock {
    /// Time since the clock started
    fn now(&self) -> Duration;
    fn sleep(&mut self, duration: Duration);
}

/// Wall clock
#[derive(Debug, Clone)]
pub struct SystemClock {
    start: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.start.elapsed()
    }

    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Clock that only moves when slept on
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Duration,
    /// Total time spent sleeping
    pub slept: Duration,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now
    }

    fn sleep(&mut self, duration: Duration) {
        self.now += duration;
        self.slept += duration;
    }
}
