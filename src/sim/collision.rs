//! Crash and strike detection, plus the scoring that follows a hit
//!
//! Hit tests compare a sprite's y against the roof line of the column under
//! it. Columns outside the city (the plane mid-wrap) never collide.

use super::entity::Entity;
use super::skyline::Skyline;
use super::state::{GameEvent, GameMode, GameState};
use crate::consts::*;

/// A successful bomb hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strike {
    pub column: usize,
    pub stories_left: u32,
    /// The hit flattened the last standing column
    pub cleared: bool,
}

/// Column the plane has flown into, if any
pub fn plane_crash_column(plane: &Entity, skyline: &Skyline) -> Option<usize> {
    let column = Skyline::column_at(plane.pos.x + PLANE_NOSE_OFFSET)?;
    let roof = skyline.roof_y(column)?;
    (plane.pos.y > roof - PLANE_CLEARANCE).then_some(column)
}

/// Column a falling bomb has reached the roof of, if any.
///
/// A dormant bomb never hits anything. Flattened columns let the bomb fall
/// through to the ground.
pub fn bomb_hit_column(bomb: &Entity, skyline: &Skyline) -> Option<usize> {
    if bomb.is_dormant() {
        return None;
    }
    let column = Skyline::column_at(bomb.pos.x)?;
    let stories = skyline.stories(column)?;
    let roof = skyline.roof_y(column)?;
    (stories > 0 && bomb.pos.y > roof - BOMB_CLEARANCE).then_some(column)
}

/// Run the crash test, switching to `Lose` on impact
pub fn check_for_crash(state: &mut GameState) -> bool {
    let Some(column) = plane_crash_column(&state.plane, &state.skyline) else {
        return false;
    };
    log::info!(
        "Crashed into column {} at ({}, {}) on level {}",
        column,
        state.plane.pos.x,
        state.plane.pos.y,
        state.level
    );
    state.push_event(GameEvent::Crashed { column });
    state.set_mode(GameMode::Lose);
    true
}

/// Run the strike test for a falling bomb.
///
/// On a hit the column loses one story, the score goes up, and the game
/// moves to `Strike`, or straight to `Win` if that was the last column.
pub fn check_for_strike(state: &mut GameState) -> Option<Strike> {
    let column = bomb_hit_column(&state.bomb, &state.skyline)?;
    let demolition = state.skyline.demolish(column)?;

    state.score += SCORE_INCREMENT;
    state.push_event(GameEvent::ColumnDemolished {
        column,
        stories_left: demolition.stories_left,
    });
    state.push_event(GameEvent::Explosion);

    let cleared = state.skyline.is_cleared();
    if cleared {
        log::info!("Level {} cleared with score {}", state.level, state.score);
        state.push_event(GameEvent::LevelCleared { level: state.level });
        state.set_mode(GameMode::Win);
    } else {
        log::debug!(
            "Strike on column {} ({} left, {} columns standing)",
            column,
            demolition.stories_left,
            state.skyline.remaining()
        );
        state.set_mode(GameMode::Strike);
    }

    Some(Strike {
        column,
        stories_left: demolition.stories_left,
        cleared,
    })
}
