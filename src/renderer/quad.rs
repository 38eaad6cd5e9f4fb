//! Plain-old-data draw primitives

use bytemuck::{Pod, Zeroable};

/// Integer pixel rectangle
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Same size, placed at `(x, y)`
    pub const fn at(&self, x: i32, y: i32) -> Self {
        Self::new(x, y, self.w, self.h)
    }
}

/// One sprite copy as a GPU backend would upload it (instance data)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct SpriteQuad {
    pub src: Rect,
    pub dst: Rect,
    /// [`super::Texture::id`] of the source texture
    pub texture: u32,
}

impl SpriteQuad {
    pub const fn new(src: Rect, dst: Rect, texture: u32) -> Self {
        Self { src, dst, texture }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quads_cast_to_bytes() {
        let quads = [
            SpriteQuad::new(Rect::new(1, 2, 3, 4), Rect::new(5, 6, 7, 8), 0),
            SpriteQuad::new(Rect::default(), Rect::new(-1, 0, 2, 2), 1),
        ];
        let bytes: &[u8] = bytemuck::cast_slice(&quads);
        assert_eq!(bytes.len(), 2 * std::mem::size_of::<SpriteQuad>());
        assert_eq!(std::mem::size_of::<SpriteQuad>(), 36);

        let back: &[SpriteQuad] = bytemuck::cast_slice(bytes);
        assert_eq!(back[1].dst.x, -1);
    }
}
