//! Viewport geometry.

use serde::{Deserialize, Serialize};

/// Size of a drawing surface or viewport in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Area in square pixels. Negative extents count as zero.
    pub fn area(&self) -> f32 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.area() <= 0.0
    }
}

/// Host capability reporting the current viewport size.
///
/// Resizes are observed by polling: consumers compare the reported size
/// with the one they last saw.
pub trait Viewport {
    fn size(&self) -> Size;
}

impl Viewport for Size {
    fn size(&self) -> Size {
        *self
    }
}

/// Pixel size of one terminal cell, used to map pixel space onto a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CellSize {
    pub width: u16,
    pub height: u16,
}

impl Default for CellSize {
    fn default() -> Self {
        Self {
            width: 8,
            height: 16,
        }
    }
}

impl CellSize {
    /// Pixel size of a grid of `cols` x `rows` cells.
    pub fn to_pixels(&self, cols: u16, rows: u16) -> Size {
        Size::new(
            cols as f32 * self.width.max(1) as f32,
            rows as f32 * self.height.max(1) as f32,
        )
    }

    /// Cell containing the pixel `(x, y)`, or `None` for negative coordinates.
    pub fn to_cell(&self, x: f32, y: f32) -> Option<(u16, u16)> {
        if x < 0.0 || y < 0.0 || !x.is_finite() || !y.is_finite() {
            return None;
        }
        let col = (x / self.width.max(1) as f32) as u32;
        let row = (y / self.height.max(1) as f32) as u32;
        Some((col.min(u16::MAX as u32) as u16, row.min(u16::MAX as u32) as u16))
    }

    /// Pixel height of `rows` cells.
    pub fn rows_to_pixels(&self, rows: u16) -> f32 {
        rows as f32 * self.height.max(1) as f32
    }

    /// Number of whole rows covered by a pixel distance (rounded toward zero).
    pub fn pixels_to_rows(&self, pixels: f32) -> i32 {
        (pixels / self.height.max(1) as f32) as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_area() {
        assert_eq!(Size::new(100.0, 60.0).area(), 6000.0);
        assert!(Size::new(0.0, 60.0).is_empty());
        assert!(Size::new(-10.0, 60.0).is_empty());
    }

    #[test]
    fn test_cell_mapping() {
        let cell = CellSize::default();
        assert_eq!(cell.to_pixels(80, 24), Size::new(640.0, 384.0));
        assert_eq!(cell.to_cell(0.0, 0.0), Some((0, 0)));
        assert_eq!(cell.to_cell(17.0, 33.0), Some((2, 2)));
        assert_eq!(cell.to_cell(-1.0, 5.0), None);
        assert_eq!(cell.pixels_to_rows(48.0), 3);
    }

    #[test]
    fn test_zero_cell_size_does_not_divide_by_zero() {
        let cell = CellSize {
            width: 0,
            height: 0,
        };
        assert_eq!(cell.to_pixels(2, 3), Size::new(2.0, 3.0));
        assert_eq!(cell.to_cell(4.0, 4.0), Some((4, 4)));
    }
}
