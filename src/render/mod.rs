//! Drawing surface abstraction
//!
//! The sim draws through the [`Surface`] trait and never sees a real
//! backend; a windowed renderer is an external collaborator. The crate
//! ships [`NullSurface`] for headless runs and a recording surface for
//! tests that assert draw order.

use crate::engine::Entity;

/// RGBA8 clear color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color {
        r: 0,
        g: 0,
        b: 0,
        a: 255,
    };
}

/// One frame's worth of draw calls: clear, sprites, present
pub trait Surface {
    /// Fill the back buffer with a solid color.
    fn clear(&mut self, color: Color);

    /// Draw an entity's sprite at its position, unrotated.
    fn draw(&mut self, entity: &Entity);

    /// Draw an entity's sprite at its position with its current rotation.
    fn draw_rotated(&mut self, entity: &Entity);

    /// Flip the back buffer to the display.
    fn present(&mut self);
}

/// Discards every draw call; counts presented frames for the demo loop.
#[derive(Debug, Default)]
pub struct NullSurface {
    frames_presented: u64,
}

impl NullSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }
}

impl Surface for NullSurface {
    fn clear(&mut self, _color: Color) {}

    fn draw(&mut self, _entity: &Entity) {}

    fn draw_rotated(&mut self, _entity: &Entity) {}

    fn present(&mut self) {
        self.frames_presented += 1;
    }
}

/// Records draw calls for assertions in tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingSurface {
    /// (sprite, rotated) per draw call, in submission order
    pub draws: Vec<(&'static str, bool)>,
    pub clears: u32,
    pub presents: u32,
}

#[cfg(test)]
impl Surface for RecordingSurface {
    fn clear(&mut self, _color: Color) {
        self.clears += 1;
        self.draws.clear();
    }

    fn draw(&mut self, entity: &Entity) {
        self.draws.push((entity.sprite, false));
    }

    fn draw_rotated(&mut self, entity: &Entity) {
        self.draws.push((entity.sprite, true));
    }

    fn present(&mut self) {
        self.presents += 1;
    }
}
