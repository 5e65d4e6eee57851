//! Scroll section synchronization.
//!
//! Tracks which of an ordered list of page sections is current, turns wheel
//! input into section-by-section snap navigation while inside the snap
//! zone, and publishes visibility-driven UI flags. All layout knowledge
//! comes from a host-provided [`Layout`]; sections the host cannot resolve
//! are skipped silently.

mod layout;
mod section;
mod snap;
mod sync;
mod visibility;

pub use layout::{Layout, StaticLayout};
pub use section::{Section, Sections};
pub use snap::{SettleGuard, SnapNavigator, WheelOutcome};
pub use sync::Synchronizer;
pub use visibility::{IntersectionWatcher, ZoneWatcher};
