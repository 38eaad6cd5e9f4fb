//! Rendering contract and the scene painter that drives it
//!
//! The simulation never draws. Each tick the driver hands the scene painter
//! a `&GameState` and a [`Renderer`]; the painter issues sprite copies with
//! literal pixel rectangles from the sprite sheet layout in [`sprites`].

pub mod quad;
pub mod recorder;
pub mod scene;
pub mod sprites;

pub use quad::{Rect, SpriteQuad};
pub use recorder::{CommandRecorder, DrawCommand};
pub use scene::Scene;

/// Textures a renderer must provide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Texture {
    /// The sprite sheet loaded at startup
    Sprites,
    /// Offscreen surface holding the drawn skyline
    Skyline,
}

impl Texture {
    pub fn id(&self) -> u32 {
        match self {
            Texture::Sprites => 0,
            Texture::Skyline => 1,
        }
    }
}

/// Where draw calls land
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Screen,
    /// Draw into the skyline texture
    Skyline,
}

/// Draw-call sink provided by a display backend
pub trait Renderer {
    /// Clear the current target (transparent for the skyline, black for the screen)
    fn clear(&mut self);
    /// Copy `src` from `texture` into `dst` on the current target
    fn draw_sprite(&mut self, texture: Texture, src: Rect, dst: Rect);
    /// Fill a region of the current target with transparency
    fn fill_rect(&mut self, rect: Rect);
    fn set_render_target(&mut self, target: Target);
    /// Show the finished frame
    fn present(&mut self);
}
