//! Sprite sheet layout
//!
//! Source rectangles on `spritesheet.bmp` and the fixed screen spots of the
//! overlays. These follow the artwork, not the game rules.

use super::Rect;
use crate::consts::{HEIGHT, STORY_HEIGHT, STORY_WIDTH, WIDTH};

/// Night sky, stored below the sprites
pub const BACKGROUND: Rect = Rect::new(0, HEIGHT, WIDTH, HEIGHT);

pub const TITLE: Rect = Rect::new(237, 327, 353, 95);
pub const TITLE_AT: (i32, i32) = (143, 0);
pub const INSTRUCTIONS: Rect = Rect::new(0, 327, 236, 87);
pub const INSTRUCTIONS_AT: (i32, i32) = (202, 197);
pub const KEYS: Rect = Rect::new(244, 422, 388, 55);
pub const KEYS_AT: (i32, i32) = (130, 420);

pub const PLANE: Rect = Rect::new(200, 0, 67, 40);
/// Plane drawn while paused (props stopped)
pub const PLANE_PAUSED: Rect = Rect::new(528, 0, 67, 40);
pub const BOMB: Rect = Rect::new(267, 0, 20, 30);
pub const EXPLOSION: Rect = Rect::new(0, 32, 128, 120);
/// Explosion anchor relative to the bomb
pub const EXPLOSION_OFFSET: (i32, i32) = (-50, -30);
/// Explosion anchor relative to a crashed plane
pub const CRASH_OFFSET: (i32, i32) = (-25, -15);

pub const MOON: Rect = Rect::new(328, 0, 75, 99);
/// Moon with the lights off, shown on the odd flicker frame and when paused
pub const MOON_DIM: Rect = Rect::new(403, 0, 75, 99);
pub const MOON_AT: (i32, i32) = (555, 10);

pub const PAUSED: Rect = Rect::new(478, 0, 50, 50);
pub const PAUSED_AT: (i32, i32) = (295, 220);

pub const LOSE_BANNER: Rect = Rect::new(0, 153, 559, 86);
pub const LOSE_AT: (i32, i32) = (41, 197);
pub const WIN_BANNER: Rect = Rect::new(0, 239, 548, 88);
pub const WIN_AT: (i32, i32) = (46, 196);

pub const SCORE_LABEL: Rect = Rect::new(0, 0, 64, 32);
pub const SCORE_AT: (i32, i32) = (10, 10);
/// First digit glyph; the rest follow at `DIGIT_STRIDE`
pub const DIGIT: Rect = Rect::new(67, 0, 11, 32);
pub const DIGIT_STRIDE: i32 = 13;
/// Right-aligned digits start this far right, minus one glyph per digit
pub const DIGITS_X: i32 = 70;

/// Facade tile for building style `style`
pub fn facade(style: u8) -> Rect {
    Rect::new(328 + STORY_WIDTH * i32::from(style), 99, STORY_WIDTH, STORY_HEIGHT)
}

/// Glyph for decimal digit `d`
pub fn digit(d: u32) -> Rect {
    DIGIT.at(DIGIT.x + DIGIT_STRIDE * (d % 10) as i32, DIGIT.y)
}
