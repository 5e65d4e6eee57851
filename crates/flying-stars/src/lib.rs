//! Star field rendering for the Flying Studio site.
//!
//! A [`ParticleField`] holds twinkling particles and draws them onto any
//! [`Surface`]. The [`AnimationDriver`] owns a field together with its frame
//! schedule and activity fade, independent of the host's redraw cycle.
//! [`TerminalSurface`] draws onto a ratatui buffer, and [`milky_way`] renders
//! the stateless background band.

mod chars;
mod color;
mod driver;
pub mod milky_way;
mod particle;
mod surface;
mod terminal;

pub use color::{ColorClass, hsl_to_rgb, scale_rgb};
pub use driver::{AnimationDriver, Fade};
pub use particle::{Particle, ParticleField};
pub use surface::{Circle, Surface};
pub use terminal::TerminalSurface;
