//! Twinkling particle field.

use std::ops::Range;

use flying_core::{Size, StarfieldTuning};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::color::ColorClass;
use crate::surface::{Circle, Surface};

/// A single twinkling star.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    /// Radius in pixels.
    pub size: f32,
    /// Current alpha. May overshoot its bounds by one step.
    pub opacity: f32,
    /// Signed per-frame opacity delta.
    pub oscillation_speed: f32,
    pub color: ColorClass,
}

impl Particle {
    /// Advance the twinkle by one step, reflecting at `floor` and 1.0.
    ///
    /// The speed only flips while moving outward, so a particle that starts
    /// outside the bounds walks back in instead of sticking there.
    pub fn step(&mut self, floor: f32) {
        self.opacity += self.oscillation_speed;
        let above = self.opacity > 1.0 && self.oscillation_speed > 0.0;
        let below = self.opacity < floor && self.oscillation_speed < 0.0;
        if above || below {
            self.oscillation_speed = -self.oscillation_speed;
        }
    }

    /// Opacity used for drawing.
    pub fn visible_opacity(&self, floor: f32) -> f32 {
        self.opacity.clamp(floor.min(1.0), 1.0)
    }
}

/// The star field: a particle collection sized to one viewport.
#[derive(Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
    size: Size,
    tuning: StarfieldTuning,
    rng: StdRng,
}

impl ParticleField {
    /// Create a field populated for `size`.
    pub fn new(size: Size, tuning: StarfieldTuning, seed: u64) -> Self {
        let mut field = Self {
            particles: Vec::new(),
            size,
            tuning,
            rng: StdRng::seed_from_u64(seed),
        };
        field.init(size);
        field
    }

    /// Discard all particles and repopulate for `size`.
    pub fn init(&mut self, size: Size) {
        let count = self.tuning.particle_count(size.area());
        let every = self.tuning.accent_every.max(1);

        self.particles = (0..count)
            .map(|i| Particle {
                x: sample(&mut self.rng, &(0.0..size.width)),
                y: sample(&mut self.rng, &(0.0..size.height)),
                size: sample(&mut self.rng, &self.tuning.size_range),
                opacity: sample(&mut self.rng, &self.tuning.opacity_range),
                oscillation_speed: sample(&mut self.rng, &self.tuning.speed_range),
                color: if i % every < self.tuning.accent_count {
                    ColorClass::Accent
                } else {
                    ColorClass::Primary
                },
            })
            .collect();
        self.size = size;

        log::debug!(
            "star field rebuilt: {} particles for {}x{}",
            self.particles.len(),
            size.width,
            size.height
        );
    }

    /// Rebuild if `size` differs from the current one. Returns whether it did.
    pub fn resize(&mut self, size: Size) -> bool {
        if size == self.size {
            return false;
        }
        self.init(size);
        true
    }

    /// Advance every particle's twinkle by one frame.
    pub fn update(&mut self) {
        let floor = self.tuning.opacity_floor;
        for particle in &mut self.particles {
            particle.step(floor);
        }
    }

    /// Clear `surface` and draw every particle, scaled by `surface_alpha`.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S, surface_alpha: f32) {
        surface.clear();
        if surface_alpha <= 0.0 {
            return;
        }

        let floor = self.tuning.opacity_floor;
        for particle in &self.particles {
            surface.fill_circle(Circle {
                x: particle.x,
                y: particle.y,
                radius: particle.size,
                glow: particle.color.glow(),
                rgb: particle.color.rgb(),
                alpha: particle.visible_opacity(floor) * surface_alpha.min(1.0),
            });
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[cfg(test)]
    pub(crate) fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn tuning(&self) -> &StarfieldTuning {
        &self.tuning
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

/// Uniform sample from `range`; degenerate ranges yield their start.
fn sample(rng: &mut StdRng, range: &Range<f32>) -> f32 {
    if range.start < range.end {
        rng.random_range(range.clone())
    } else {
        range.start
    }
}
