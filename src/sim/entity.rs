//! Plane and bomb kinematics
//!
//! Both use the same shape: an integer pixel position plus a frame-delay
//! counter. The plane moves one step every `between` ticks; the bomb ignores
//! the counter and falls every tick once released.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::skyline::Skyline;
use crate::consts::*;

/// What a plane advance did this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaneStep {
    /// Waiting out the frame delay
    Held,
    /// Moved right
    Moved,
    /// Crossed the right edge, re-entered on the left one pass lower
    Wrapped,
}

/// A moving sprite (plane or bomb)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub pos: IVec2,
    /// Ticks per movement step
    pub between: u32,
    /// Ticks left before the next step
    pub next: u32,
}

impl Entity {
    /// Plane at the top-left start of its first pass
    pub fn plane() -> Self {
        Self {
            pos: IVec2::new(PLANE_START_X, PLANE_START_Y),
            between: PLANE_BETWEEN,
            next: 1,
        }
    }

    /// Bomb still in the bay
    pub fn bomb() -> Self {
        Self {
            pos: IVec2::new(0, BOMB_DORMANT_Y),
            between: 0,
            next: 0,
        }
    }

    /// Advance the plane by one tick
    pub fn advance_plane(&mut self) -> PlaneStep {
        if self.next > 0 {
            self.next -= 1;
            return PlaneStep::Held;
        }

        self.next = self.between.saturating_sub(1);
        self.pos.x += PLANE_INC;
        if self.pos.x > WIDTH {
            self.pos.x = PLANE_WRAP_X;
            self.pos.y += PLANE_DROP;
            return PlaneStep::Wrapped;
        }
        PlaneStep::Moved
    }

    /// Returns true if the bomb is waiting in the bay
    pub fn is_dormant(&self) -> bool {
        self.pos.y == BOMB_DORMANT_Y
    }

    /// Drop the bomb from under the plane, snapped to the column's left edge.
    ///
    /// Does nothing (and returns false) while the plane is off the city.
    pub fn release_from(&mut self, plane: &Entity) -> bool {
        let Some(column) = Skyline::column_at(plane.pos.x) else {
            return false;
        };
        self.pos = IVec2::new(column as i32 * STORY_WIDTH, plane.pos.y + BOMB_RELEASE_OFFSET);
        true
    }

    pub fn fall(&mut self) {
        self.pos.y += BOMB_INC;
    }

    /// Returns true once the bomb has dropped past the bottom of the screen
    pub fn below_screen(&self) -> bool {
        self.pos.y > HEIGHT
    }

    /// Put the bomb back in the bay
    pub fn make_dormant(&mut self) {
        self.pos.y = BOMB_DORMANT_Y;
    }
}
