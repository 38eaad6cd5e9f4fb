//! Renderer that records draw calls instead of touching a display
//!
//! Used headless (the demo binary) and in tests. A real backend would
//! upload [`CommandRecorder::sprite_quads`] as instance data each frame.

use super::{Rect, Renderer, SpriteQuad, Target, Texture};

/// A single recorded draw call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawCommand {
    Clear {
        target: Target,
    },
    Sprite {
        target: Target,
        texture: Texture,
        src: Rect,
        dst: Rect,
    },
    Fill {
        target: Target,
        rect: Rect,
    },
}

/// Records every call, grouped into presented frames
#[derive(Debug)]
pub struct CommandRecorder {
    target: Target,
    pending: Vec<DrawCommand>,
    last_frame: Vec<DrawCommand>,
    frames_presented: u64,
}

impl Default for CommandRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self {
            target: Target::Screen,
            pending: Vec::new(),
            last_frame: Vec::new(),
            frames_presented: 0,
        }
    }

    pub fn target(&self) -> Target {
        self.target
    }

    /// Commands of the most recently presented frame
    pub fn last_frame(&self) -> &[DrawCommand] {
        &self.last_frame
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// Screen sprite copies of the last frame, in draw order
    pub fn sprite_quads(&self) -> Vec<SpriteQuad> {
        self.last_frame
            .iter()
            .filter_map(|cmd| match *cmd {
                DrawCommand::Sprite {
                    target: Target::Screen,
                    texture,
                    src,
                    dst,
                } => Some(SpriteQuad::new(src, dst, texture.id())),
                _ => None,
            })
            .collect()
    }

    /// Returns true if the last frame copied `src` from `texture` anywhere
    pub fn drew(&self, texture: Texture, src: Rect) -> bool {
        self.last_frame.iter().any(|cmd| {
            matches!(cmd, DrawCommand::Sprite { texture: t, src: s, .. } if *t == texture && *s == src)
        })
    }

    /// Transparent fills issued on the skyline surface in the last frame
    pub fn skyline_fills(&self) -> Vec<Rect> {
        self.last_frame
            .iter()
            .filter_map(|cmd| match *cmd {
                DrawCommand::Fill {
                    target: Target::Skyline,
                    rect,
                } => Some(rect),
                _ => None,
            })
            .collect()
    }
}

impl Renderer for CommandRecorder {
    fn clear(&mut self) {
        self.pending.push(DrawCommand::Clear {
            target: self.target,
        });
    }

    fn draw_sprite(&mut self, texture: Texture, src: Rect, dst: Rect) {
        self.pending.push(DrawCommand::Sprite {
            target: self.target,
            texture,
            src,
            dst,
        });
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.pending.push(DrawCommand::Fill {
            target: self.target,
            rect,
        });
    }

    fn set_render_target(&mut self, target: Target) {
        self.target = target;
    }

    fn present(&mut self) {
        if self.target != Target::Screen {
            log::warn!("Presenting while drawing offscreen; resetting target");
            self.target = Target::Screen;
        }
        self.last_frame = std::mem::take(&mut self.pending);
        self.frames_presented += 1;
    }
}
