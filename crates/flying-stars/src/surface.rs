//! Drawing surface abstraction.

use flying_core::Size;

/// A filled circle with an optional glow halo.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    /// Glow radius in pixels, 0.0 for none.
    pub glow: f32,
    pub rgb: (u8, u8, u8),
    /// Fill alpha, 0.0-1.0.
    pub alpha: f32,
}

/// A 2D surface the star field draws on.
pub trait Surface {
    /// Drawable size in pixels.
    fn size(&self) -> Size;

    /// Clear the whole surface.
    fn clear(&mut self);

    fn fill_circle(&mut self, circle: Circle);
}

/// Records draw calls. Used by tests across the crate.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingSurface {
    pub size: Size,
    pub clears: usize,
    pub circles: Vec<Circle>,
}

#[cfg(test)]
impl Surface for RecordingSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn clear(&mut self) {
        self.clears += 1;
        self.circles.clear();
    }

    fn fill_circle(&mut self, circle: Circle) {
        self.circles.push(circle);
    }
}
