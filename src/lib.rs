//! Blitz - fly a bomber over a city and flatten it before you run out of sky
//!
//! Core modules:
//! - `sim`: Deterministic simulation (skyline, entities, collisions, game modes)
//! - `renderer`: Draw-call contract and the scene painter that feeds it
//! - `audio`: Sound effect playback with graceful degradation
//! - `platform`: Input sources and the tick clock
//! - `driver`: Fixed-cadence tick loop tying it all together

pub mod assets;
pub mod audio;
pub mod driver;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use driver::TickDriver;
pub use error::SetupError;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Logical screen size in pixels
    pub const WIDTH: i32 = 640;
    pub const HEIGHT: i32 = 480;

    /// Target tick period in milliseconds
    pub const TICK_MS: u64 = 10;

    pub const START_LEVEL: u32 = 1;

    /// Skyline geometry
    pub const COLUMNS: usize = 32;
    pub const STORY_WIDTH: i32 = 20;
    pub const STORY_HEIGHT: i32 = 20;
    /// Number of facade variants on the sprite sheet
    pub const FACADE_STYLES: u8 = 4;

    /// Points per story destroyed
    pub const SCORE_INCREMENT: u32 = 20;

    /// Plane kinematics
    pub const PLANE_START_X: i32 = 0;
    pub const PLANE_START_Y: i32 = 10;
    /// Ticks per pixel of plane movement
    pub const PLANE_BETWEEN: u32 = 2;
    pub const PLANE_INC: i32 = 1;
    /// Height lost on each pass across the screen
    pub const PLANE_DROP: i32 = 10;
    pub const PLANE_WIDTH: i32 = 67;
    pub const PLANE_HEIGHT: i32 = 40;
    /// X position the plane re-enters from after wrapping
    pub const PLANE_WRAP_X: i32 = -PLANE_WIDTH;

    /// Hit-test tuning (pixels). Presentation-tuned, not part of the game rules.
    pub const PLANE_NOSE_OFFSET: i32 = 37;
    pub const PLANE_CLEARANCE: i32 = 40;
    pub const BOMB_CLEARANCE: i32 = 30;

    /// Bomb kinematics
    pub const BOMB_INC: i32 = 10;
    /// Y position of a bomb still in the bay
    pub const BOMB_DORMANT_Y: i32 = -30;
    /// Bomb spawns this far below the plane's top edge
    pub const BOMB_RELEASE_OFFSET: i32 = 30;

    /// Ticks the explosion (and screen shake) lasts
    pub const EXPLOSION_TICKS: u32 = 10;
    /// Pixels per tick the skyline rises into view on level 1
    pub const RISE_STEP: i32 = 5;
}
