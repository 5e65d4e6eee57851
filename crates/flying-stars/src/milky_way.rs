//! Milky-way background band (stateless, computed from position and time).

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

use crate::chars::DUST_CHARS;
use crate::color::hsl_to_rgb;

/// Period of the band's slow sway, in milliseconds.
const SWAY_PERIOD_MS: u64 = 24_000;

/// Period after which the dust pattern reshuffles, in milliseconds.
const SHIMMER_PERIOD_MS: u64 = 1_200;

/// Half-width of the band in normalized units.
const BAND_WIDTH: f32 = 0.14;

/// Intensity below which a cell is always empty.
const MIN_INTENSITY: f32 = 0.02;

/// Band intensity (0.0-1.0) at a normalized position.
pub fn band_intensity(x_norm: f32, y_norm: f32, elapsed_ms: u64) -> f32 {
    let phase = (elapsed_ms % SWAY_PERIOD_MS) as f32 / SWAY_PERIOD_MS as f32;
    let sway = ((phase + x_norm * 0.5) * 2.0 * std::f32::consts::PI).sin() * 0.04;

    // Diagonal from bottom-left to top-right
    let center = 0.9 - x_norm * 0.8 + sway;
    let d = (y_norm - center) / BAND_WIDTH;
    (-d * d).exp()
}

/// Render a milky-way character at the given cell.
pub fn render_char(x: u16, y: u16, width: u16, height: u16, elapsed_ms: u64) -> Span<'static> {
    let x_norm = x as f32 / width.max(1) as f32;
    let y_norm = y as f32 / height.max(1) as f32;
    let intensity = band_intensity(x_norm, y_norm, elapsed_ms);

    let frame_num = elapsed_ms / SHIMMER_PERIOD_MS;
    let seed = (x as usize)
        .wrapping_mul(31)
        .wrapping_add((y as usize).wrapping_mul(17))
        .wrapping_add((frame_num as usize).wrapping_mul(7));

    // Dust density follows the band profile, up to ~40% of cells at its core
    if intensity < MIN_INTENSITY || (seed % 100) as f32 >= intensity * 40.0 {
        return Span::raw(" ");
    }

    let char_idx = ((intensity * (DUST_CHARS.len() - 1) as f32) as usize + seed % 2)
        .min(DUST_CHARS.len() - 1);
    let ch = DUST_CHARS[char_idx];

    // Violet at the edges, pale lavender at the core
    let hue = 270.0 - intensity * 30.0;
    let (r, g, b) = hsl_to_rgb(hue, 0.35, 0.12 + intensity * 0.3);

    Span::styled(ch.to_string(), Style::new().fg(Color::Rgb(r, g, b)))
}

/// Render the band for a full `width` x `height` area.
pub fn lines(width: u16, height: u16, elapsed_ms: u64) -> Vec<Line<'static>> {
    (0..height)
        .map(|y| {
            let spans: Vec<Span> = (0..width)
                .map(|x| render_char(x, y, width, height, elapsed_ms))
                .collect();
            Line::from(spans)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_peaks_on_diagonal() {
        let on = band_intensity(0.5, 0.5, 0);
        let off = band_intensity(0.5, 0.0, 0);
        assert!(on > 0.8, "on-band intensity {on}");
        assert!(off < 0.05, "off-band intensity {off}");
    }

    #[test]
    fn test_far_corner_is_empty() {
        // Top-left corner is far from the band at any time.
        for t in [0, 5_000, 12_000, 23_999] {
            assert_eq!(render_char(0, 0, 80, 24, t).content, " ");
        }
    }

    #[test]
    fn test_band_has_dust() {
        let lines = lines(80, 24, 0);
        assert_eq!(lines.len(), 24);
        let dusty = lines
            .iter()
            .flat_map(|l| l.spans.iter())
            .filter(|s| s.content != " ")
            .count();
        assert!(dusty > 0);
    }
}
