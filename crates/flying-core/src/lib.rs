//! Core types for the Flying Studio effect crates.
//!
//! Geometry and the host viewport capability, tuning parameters for the
//! star field and the section synchronizer, and the shared UI flag
//! observable that replaces the page-wide `cursor-active` marker.

mod flags;
mod geometry;
mod tuning;

pub use flags::{FlagReader, FlagWriter, UiFlags};
pub use geometry::{CellSize, Size, Viewport};
pub use tuning::{PageSections, ScrollTuning, StarfieldTuning};
