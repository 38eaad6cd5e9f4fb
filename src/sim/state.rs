//! Game state and core simulation types
//!
//! Everything a tick reads or writes lives in [`GameState`]; there are no
//! globals. The renderer and audio only ever see it through `&GameState`
//! and the drained [`GameEvent`] queue.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::skyline::Skyline;
use crate::consts::*;

/// Current mode of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// Title screen with instructions
    Start,
    /// Building the next level (lasts zero ticks)
    Preplay,
    /// Plane flying, bombs dropping
    Play,
    /// Simulation frozen
    Pause,
    /// Explosion playing after a hit
    Strike,
    /// Plane flew into a building
    Lose,
    /// City flattened
    Win,
    /// Leave the tick loop
    Quit,
}

impl GameMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Start => "start",
            GameMode::Preplay => "preplay",
            GameMode::Play => "play",
            GameMode::Pause => "pause",
            GameMode::Strike => "strike",
            GameMode::Lose => "lose",
            GameMode::Win => "win",
            GameMode::Quit => "quit",
        }
    }

    /// Modes that keep the plane moving and can be paused
    pub fn is_airborne(&self) -> bool {
        matches!(self, GameMode::Play | GameMode::Strike)
    }
}

/// Side effects of a tick, for the renderer and audio to act on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    ModeChanged { from: GameMode, to: GameMode },
    /// A new skyline was generated and must be drawn from scratch
    SkylineGenerated { level: u32 },
    /// One story removed from `column`; only that region needs redrawing
    ColumnDemolished { column: usize, stories_left: u32 },
    /// Bomb went off
    Explosion,
    /// Plane hit the building in `column`
    Crashed { column: usize },
    LevelCleared { level: u32 },
}

/// Complete simulation context
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    pub mode: GameMode,
    /// Mode before the last explicit transition (None before the first start)
    pub prev_mode: Option<GameMode>,
    pub level: u32,
    pub score: u32,
    /// Score as shown on screen, lagging behind `score`
    pub displayed_score: u32,
    /// Explosion ticks remaining
    pub countdown: u32,
    /// Vertical screen shake offset during explosions
    pub shake: i32,
    /// Rise-into-view offset of the skyline
    pub rise: i32,
    pub skyline: Skyline,
    pub plane: Entity,
    pub bomb: Entity,
    /// A drop was requested and not yet served
    pub drop_requested: bool,
    pub muted: bool,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game on the title screen
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            mode: GameMode::Start,
            prev_mode: None,
            level: START_LEVEL,
            score: 0,
            displayed_score: 0,
            countdown: EXPLOSION_TICKS,
            shake: 0,
            rise: 0,
            skyline: Skyline::empty(),
            plane: Entity::plane(),
            bomb: Entity::bomb(),
            drop_requested: false,
            muted: false,
            events: Vec::new(),
        }
    }

    /// Switch mode, recording the change as an event
    pub fn set_mode(&mut self, to: GameMode) {
        if self.mode != to {
            self.events.push(GameEvent::ModeChanged {
                from: self.mode,
                to,
            });
            log::debug!("Mode {} -> {}", self.mode.as_str(), to.as_str());
            self.mode = to;
        }
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all events produced since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Reset score and level for a fresh game
    pub fn reset_session(&mut self) {
        self.drop_requested = false;
        self.level = START_LEVEL;
        self.prev_mode = Some(GameMode::Start);
        self.score = 0;
        self.displayed_score = 0;
        self.reset_entities();
    }

    pub fn reset_entities(&mut self) {
        self.plane = Entity::plane();
        self.bomb = Entity::bomb();
    }

    /// Generate the skyline for the current level and line up the plane
    pub fn build_level(&mut self) {
        self.reset_entities();
        self.skyline = Skyline::generate(self.level, &mut self.rng);
        self.rise = self.skyline.rise_offset(self.level);
        self.drop_requested = false;
        self.shake = 0;
        self.countdown = EXPLOSION_TICKS;
        self.events.push(GameEvent::SkylineGenerated { level: self.level });
    }

    /// Move the displayed score one step toward the real one
    pub fn animate_score(&mut self) {
        if self.score.saturating_sub(self.displayed_score) > SCORE_INCREMENT {
            self.displayed_score = self.score;
        } else if self.displayed_score < self.score {
            self.displayed_score += 1;
        }
    }

    /// Slide the skyline one step further into view
    pub fn animate_rise(&mut self) {
        self.rise = (self.rise - RISE_STEP).max(0);
    }
}
