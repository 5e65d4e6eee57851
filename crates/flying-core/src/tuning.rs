//! Tuning parameters for the star field and the section synchronizer.

use std::ops::Range;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Star field density, appearance and timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarfieldTuning {
    /// Square pixels per particle (lower is denser).
    pub density_divisor: f32,
    /// Particle radius range in pixels.
    pub size_range: Range<f32>,
    /// Initial opacity range.
    pub opacity_range: Range<f32>,
    /// Lower reflection bound of the twinkle, also the render clamp floor.
    pub opacity_floor: f32,
    /// Per-frame opacity delta range.
    pub speed_range: Range<f32>,
    /// Accent particles are those with `index % accent_every < accent_count`.
    pub accent_every: usize,
    pub accent_count: usize,
    /// Length of the fade between active and inactive, in milliseconds.
    pub fade_ms: u64,
    /// Target frame interval in milliseconds.
    pub frame_ms: u64,
}

impl Default for StarfieldTuning {
    fn default() -> Self {
        Self {
            density_divisor: 6000.0,
            size_range: 2.0..5.0,
            opacity_range: 0.2..1.0,
            opacity_floor: 0.2,
            speed_range: 0.005..0.025,
            accent_every: 5,
            accent_count: 2,
            fade_ms: 1000,
            frame_ms: 16,
        }
    }
}

impl StarfieldTuning {
    /// Number of particles for a viewport of the given area.
    pub fn particle_count(&self, area: f32) -> usize {
        if area <= 0.0 || self.density_divisor <= 0.0 {
            return 0;
        }
        (area / self.density_divisor).floor() as usize
    }

    pub fn fade_duration(&self) -> Duration {
        Duration::from_millis(self.fade_ms)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_ms.max(1))
    }
}

/// Section snapping and visibility trigger parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollTuning {
    /// Pixel tolerance around section tops.
    pub snap_tolerance: f32,
    /// Cooldown after a programmatic snap, in milliseconds.
    pub settle_ms: u64,
    /// Visible fraction of the background-hiding section that counts as intersecting.
    pub visibility_threshold: f32,
    /// Fraction of the viewport height the interactive section's top must pass.
    pub trigger_fraction: f32,
}

impl Default for ScrollTuning {
    fn default() -> Self {
        Self {
            snap_tolerance: 50.0,
            settle_ms: 800,
            visibility_threshold: 0.2,
            trigger_fraction: 0.8,
        }
    }
}

impl ScrollTuning {
    pub fn settle_duration(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }
}

/// Section ids the synchronizer works with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSections {
    /// Snap targets in traversal order.
    pub snap: Vec<String>,
    /// Section whose visibility hides the background effect.
    pub hide_background_on: String,
    /// Section whose arrival turns the interactive zone on.
    pub interactive_from: String,
}

impl Default for PageSections {
    fn default() -> Self {
        Self {
            snap: vec![
                "section-a".to_string(),
                "section-b".to_string(),
                "section-c".to_string(),
            ],
            hide_background_on: "section-b".to_string(),
            interactive_from: "section-c".to_string(),
        }
    }
}
