//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed tick per call, no wall-clock time
//! - Seeded RNG only
//! - Columns always visited in index order
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod skyline;
pub mod state;
pub mod tick;

pub use collision::{Strike, bomb_hit_column, check_for_crash, check_for_strike, plane_crash_column};
pub use entity::{Entity, PlaneStep};
pub use skyline::{Demolition, Skyline};
pub use state::{GameEvent, GameMode, GameState};
pub use tick::{InputEvent, Key, handle_event, handle_key, tick};
