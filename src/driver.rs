//! Fixed-cadence tick loop
//!
//! One thread owns everything. Each tick: clear, draw the background, run
//! the current mode's action, route its events to audio and the skyline
//! surface, draw the mode's frame, drain input, present, then sleep off
//! whatever is left of the tick period.

use std::time::Duration;

use crate::audio::{AudioPlayer, SoundEffect};
use crate::consts::TICK_MS;
use crate::platform::{Clock, InputSource};
use crate::renderer::{Renderer, Scene};
use crate::sim::{GameEvent, GameMode, GameState, handle_event, tick};

/// Outcome of a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    /// Ticks that took longer than the tick period
    pub overruns: u64,
    pub level: u32,
    pub score: u32,
}

/// Owns the game and its collaborators for the lifetime of the loop
pub struct TickDriver<R, A, I, C> {
    state: GameState,
    scene: Scene,
    renderer: R,
    audio: A,
    input: I,
    clock: C,
    period: Duration,
    ticks: u64,
    overruns: u64,
}

impl<R, A, I, C> TickDriver<R, A, I, C>
where
    R: Renderer,
    A: AudioPlayer,
    I: InputSource,
    C: Clock,
{
    pub fn new(state: GameState, renderer: R, audio: A, input: I, clock: C) -> Self {
        Self {
            scene: Scene::new(state.seed),
            state,
            renderer,
            audio,
            input,
            clock,
            period: Duration::from_millis(TICK_MS),
            ticks: 0,
            overruns: 0,
        }
    }

    /// Override the tick period
    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct access for level editors and tests
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Run until the game quits
    pub fn run(&mut self) -> RunSummary {
        log::info!("Tick loop started ({:?} per tick)", self.period);
        while self.step() {}

        let summary = RunSummary {
            ticks: self.ticks,
            overruns: self.overruns,
            level: self.state.level,
            score: self.state.score,
        };
        log::info!(
            "Tick loop finished after {} ticks ({} overruns), level {}, score {}",
            summary.ticks,
            summary.overruns,
            summary.level,
            summary.score
        );
        summary
    }

    /// Run one tick. Returns false once the game has quit.
    pub fn step(&mut self) -> bool {
        if self.state.mode == GameMode::Quit {
            return false;
        }
        let started = self.clock.now();

        self.renderer.clear();
        self.scene.draw_background(&mut self.renderer);

        tick(&mut self.state);
        self.dispatch_events();
        self.scene.draw(&mut self.renderer, &self.state);

        for event in self.input.poll(&self.state) {
            handle_event(&mut self.state, event);
        }

        self.renderer.present();
        self.ticks += 1;

        let elapsed = self.clock.now().saturating_sub(started);
        match self.period.checked_sub(elapsed) {
            Some(rest) if !rest.is_zero() => self.clock.sleep(rest),
            Some(_) => {}
            None => {
                self.overruns += 1;
                log::trace!("Tick {} overran by {:?}", self.ticks, elapsed - self.period);
            }
        }

        self.state.mode != GameMode::Quit
    }

    /// Route simulation events to audio and the skyline surface
    fn dispatch_events(&mut self) {
        self.audio.set_muted(self.state.muted);
        for event in self.state.drain_events() {
            match event {
                GameEvent::Explosion => self.audio.play_effect(SoundEffect::Explosion),
                GameEvent::ModeChanged { from, to } => {
                    log::debug!("Tick {}: {} -> {}", self.ticks, from.as_str(), to.as_str());
                }
                _ => {}
            }
            self.scene.apply_event(&mut self.renderer, &self.state, &event);
        }
    }
}
