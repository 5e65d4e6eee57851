//! Particle palette and color helpers.

use ratatui::style::Color;

/// Color class of a particle, fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorClass {
    /// White.
    Primary,
    /// Antique gold (`#D6BE8A`).
    Accent,
}

impl ColorClass {
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            ColorClass::Primary => (255, 255, 255),
            ColorClass::Accent => (214, 190, 138),
        }
    }

    /// Glow radius in pixels.
    pub fn glow(self) -> f32 {
        match self {
            ColorClass::Primary => 2.0,
            ColorClass::Accent => 6.0,
        }
    }
}

/// Scale an RGB color toward black by `alpha` (0.0-1.0).
pub fn scale_rgb((r, g, b): (u8, u8, u8), alpha: f32) -> Color {
    let a = alpha.clamp(0.0, 1.0);
    Color::Rgb(
        (r as f32 * a) as u8,
        (g as f32 * a) as u8,
        (b as f32 * a) as u8,
    )
}

/// Convert HSL to an RGB triple.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> (u8, u8, u8) {
    if s == 0.0 {
        let v = (l * 255.0) as u8;
        return (v, v, v);
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;

    let h = h / 360.0;

    let r = hue_to_rgb(p, q, h + 1.0 / 3.0);
    let g = hue_to_rgb(p, q, h);
    let b = hue_to_rgb(p, q, h - 1.0 / 3.0);

    ((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
}

fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}
