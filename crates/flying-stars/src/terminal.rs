//! Offscreen terminal surface.
//!
//! Pixel-space circles are collected on a cell grid and blitted into a
//! ratatui buffer afterwards. Only lit cells are written, so layers drawn
//! underneath stay visible like a transparent canvas.

use flying_core::{CellSize, Size};
use ratatui::{buffer::Buffer, layout::Rect};

use crate::chars::{GLOW_CHAR, STAR_CHARS};
use crate::color::scale_rgb;
use crate::surface::{Circle, Surface};

/// Glow radius from which neighbouring cells get a halo.
const HALO_MIN_GLOW: f32 = 4.0;

/// Halo brightness relative to the star.
const HALO_ALPHA: f32 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Lit {
    ch: char,
    rgb: (u8, u8, u8),
    alpha: f32,
}

/// A cell-grid surface that can be blitted into a ratatui [`Buffer`].
#[derive(Debug, Clone)]
pub struct TerminalSurface {
    cols: u16,
    rows: u16,
    cell: CellSize,
    cells: Vec<Option<Lit>>,
}

impl TerminalSurface {
    pub fn new(cell: CellSize) -> Self {
        Self {
            cols: 0,
            rows: 0,
            cell,
            cells: Vec::new(),
        }
    }

    /// Resize the grid to `cols` x `rows`, reusing the allocation.
    pub fn ensure_size(&mut self, cols: u16, rows: u16) {
        if cols == self.cols && rows == self.rows {
            return;
        }
        self.cols = cols;
        self.rows = rows;
        self.cells.clear();
        self.cells.resize(cols as usize * rows as usize, None);
    }

    /// Number of cells drawn since the last clear.
    pub fn lit_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Copy lit cells into `buf`, anchored at the top-left of `area`.
    pub fn blit(&self, area: Rect, buf: &mut Buffer) {
        for row in 0..self.rows.min(area.height) {
            for col in 0..self.cols.min(area.width) {
                let Some(lit) = self.cells[self.index(col, row)] else {
                    continue;
                };
                if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                    cell.set_char(lit.ch).set_fg(scale_rgb(lit.rgb, lit.alpha));
                }
            }
        }
    }

    fn index(&self, col: u16, row: u16) -> usize {
        row as usize * self.cols as usize + col as usize
    }

    /// Light a cell unless it already holds something brighter.
    fn light(&mut self, col: i32, row: i32, lit: Lit) {
        if col < 0 || row < 0 || col >= self.cols as i32 || row >= self.rows as i32 {
            return;
        }
        let idx = self.index(col as u16, row as u16);
        match self.cells[idx] {
            Some(existing) if existing.alpha >= lit.alpha => {}
            _ => self.cells[idx] = Some(lit),
        }
    }
}

impl Surface for TerminalSurface {
    fn size(&self) -> Size {
        self.cell.to_pixels(self.cols, self.rows)
    }

    fn clear(&mut self) {
        self.cells.fill(None);
    }

    fn fill_circle(&mut self, circle: Circle) {
        let Some((col, row)) = self.cell.to_cell(circle.x, circle.y) else {
            return;
        };
        let (col, row) = (col as i32, row as i32);

        let glyph = (circle.radius.max(1.0) as usize - 1).min(STAR_CHARS.len() - 1);
        self.light(
            col,
            row,
            Lit {
                ch: STAR_CHARS[glyph],
                rgb: circle.rgb,
                alpha: circle.alpha,
            },
        );

        if circle.glow >= HALO_MIN_GLOW {
            let halo = Lit {
                ch: GLOW_CHAR,
                rgb: circle.rgb,
                alpha: circle.alpha * HALO_ALPHA,
            };
            for (dc, dr) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
                self.light(col + dc, row + dr, halo);
            }
        }
    }
}
