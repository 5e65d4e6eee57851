//! Section synchronizer: the single writer of the shared UI flags.

use std::time::Instant;

use flying_core::{FlagReader, FlagWriter, PageSections, ScrollTuning};

use crate::layout::Layout;
use crate::section::Sections;
use crate::snap::{SnapNavigator, WheelOutcome};
use crate::visibility::{IntersectionWatcher, ZoneWatcher};

/// Ties section tracking, snap navigation and the visibility watchers to
/// the shared flags.
///
/// Scroll events only mark the layout dirty; the measurement happens at
/// most once per frame in [`Synchronizer::on_frame`].
#[derive(Debug)]
pub struct Synchronizer {
    navigator: SnapNavigator,
    background: IntersectionWatcher,
    zone: ZoneWatcher,
    flags: FlagWriter,
    dirty: bool,
    attached: bool,
}

impl Synchronizer {
    pub fn new(sections: &PageSections, tuning: &ScrollTuning, flags: FlagWriter) -> Self {
        Self {
            navigator: SnapNavigator::new(Sections::new(sections.snap.iter().cloned()), tuning),
            background: IntersectionWatcher::new(
                sections.hide_background_on.clone(),
                tuning.visibility_threshold,
            ),
            zone: ZoneWatcher::new(sections.interactive_from.clone(), tuning.trigger_fraction),
            flags,
            dirty: false,
            attached: false,
        }
    }

    /// Start handling events and run the initial layout scan.
    pub fn attach<L: Layout + ?Sized>(&mut self, layout: &L) {
        self.attached = true;
        self.refresh(layout);
    }

    /// Stop handling events and withdraw the interactive zone marker.
    ///
    /// The watchers forget their state so a later attach publishes afresh.
    pub fn detach(&mut self) {
        self.attached = false;
        self.dirty = false;
        self.background.reset();
        self.zone.reset();
        self.flags.set_interactive_zone(false);
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Note that the scroll offset changed.
    pub fn on_scroll(&mut self) {
        if self.attached {
            self.dirty = true;
        }
    }

    /// Re-measure if a scroll happened since the last frame.
    /// Returns whether a measurement ran.
    pub fn on_frame<L: Layout + ?Sized>(&mut self, layout: &L) -> bool {
        if !self.attached || !self.dirty {
            return false;
        }
        self.refresh(layout);
        true
    }

    /// Recompute the current section and both visibility flags.
    pub fn refresh<L: Layout + ?Sized>(&mut self, layout: &L) {
        self.dirty = false;
        let current = self.navigator.sync(layout);
        let show_background = self.background.evaluate(layout).map(|hit| !hit);
        let interactive = self.zone.evaluate(layout);

        self.flags.update(|flags| {
            flags.current_section = current;
            if let Some(show) = show_background {
                flags.show_background = show;
            }
            if let Some(active) = interactive {
                flags.interactive_zone = active;
            }
        });
    }

    /// Handle a wheel event.
    pub fn on_wheel<L: Layout + ?Sized>(
        &mut self,
        delta_y: f32,
        layout: &L,
        now: Instant,
    ) -> WheelOutcome {
        if !self.attached {
            return WheelOutcome::PassThrough;
        }
        let outcome = self.navigator.on_wheel(delta_y, layout, now);
        if let WheelOutcome::ScrollTo(index) = outcome {
            self.flags.set_current_section(index);
        }
        outcome
    }

    pub fn current_section(&self) -> usize {
        self.navigator.current()
    }

    pub fn navigator(&self) -> &SnapNavigator {
        &self.navigator
    }

    /// A reader for the flags this synchronizer publishes.
    pub fn reader(&self) -> FlagReader {
        self.flags.reader()
    }
}
