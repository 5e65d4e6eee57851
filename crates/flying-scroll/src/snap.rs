//! Wheel-driven snap navigation between sections.

use std::time::{Duration, Instant};

use flying_core::ScrollTuning;

use crate::layout::Layout;
use crate::section::Sections;

/// What the host should do with a wheel event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelOutcome {
    /// Let the native scroll happen.
    PassThrough,
    /// Swallow the event without scrolling.
    Suppress,
    /// Swallow the event and smooth-scroll to the section at this index.
    ScrollTo(usize),
}

impl WheelOutcome {
    /// Whether the host must prevent the default scroll.
    pub fn prevents_default(&self) -> bool {
        !matches!(self, WheelOutcome::PassThrough)
    }
}

/// Cooldown after a programmatic scroll.
///
/// Expires by wall clock only; there is no way to cancel it early.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettleGuard {
    duration: Duration,
    until: Option<Instant>,
}

impl SettleGuard {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            until: None,
        }
    }

    pub fn arm(&mut self, now: Instant) {
        self.until = Some(now + self.duration);
    }

    pub fn is_active(&self, now: Instant) -> bool {
        self.until.is_some_and(|until| now < until)
    }
}

/// Tracks the current section and decides how wheel input navigates.
#[derive(Debug, Clone)]
pub struct SnapNavigator {
    sections: Sections,
    current: usize,
    guard: SettleGuard,
    tolerance: f32,
}

impl SnapNavigator {
    pub fn new(sections: Sections, tuning: &ScrollTuning) -> Self {
        Self {
            sections,
            current: 0,
            guard: SettleGuard::new(tuning.settle_duration()),
            tolerance: tuning.snap_tolerance,
        }
    }

    pub fn sections(&self) -> &Sections {
        &self.sections
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Recompute the current section from layout.
    pub fn sync<L: Layout + ?Sized>(&mut self, layout: &L) -> usize {
        self.current = self.sections.nearest(layout);
        self.current
    }

    pub fn is_settling(&self, now: Instant) -> bool {
        self.guard.is_active(now)
    }

    /// Decide what a wheel event with vertical delta `delta_y` does.
    pub fn on_wheel<L: Layout + ?Sized>(
        &mut self,
        delta_y: f32,
        layout: &L,
        now: Instant,
    ) -> WheelOutcome {
        if self.guard.is_active(now) {
            return WheelOutcome::Suppress;
        }

        let Some(last) = self.sections.last() else {
            return WheelOutcome::PassThrough;
        };
        let Some(last_top) = layout.section_top(&last.id) else {
            return WheelOutcome::PassThrough;
        };
        let last_index = last.index;
        let scroll = layout.scroll_offset();

        // Below the last snap target the page scrolls freely
        if scroll > last_top + self.tolerance {
            return WheelOutcome::PassThrough;
        }

        let target = if delta_y > 0.0 {
            if self.current >= last_index {
                // At the last section: hand over to native scrolling
                return WheelOutcome::PassThrough;
            }
            self.current + 1
        } else {
            if self.current == 0 && scroll < self.tolerance {
                return WheelOutcome::PassThrough;
            }
            self.current.saturating_sub(1)
        };

        match self.scroll_to(target, now) {
            Some(index) => WheelOutcome::ScrollTo(index),
            None => WheelOutcome::PassThrough,
        }
    }

    /// Make `index` current and arm the settle guard.
    /// Out-of-range indices are ignored.
    pub fn scroll_to(&mut self, index: usize, now: Instant) -> Option<usize> {
        self.sections.get(index)?;
        log::debug!("snap {} -> {}", self.current, index);
        self.current = index;
        self.guard.arm(now);
        Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::StaticLayout;

    fn page(scroll: f32) -> StaticLayout {
        StaticLayout::new(800.0)
            .with_section("a", 0.0, 800.0)
            .with_section("b", 800.0, 800.0)
            .with_section("c", 1600.0, 800.0)
            .with_section("footer", 2400.0, 400.0)
            .scrolled_to(scroll)
    }

    fn navigator() -> SnapNavigator {
        SnapNavigator::new(Sections::new(["a", "b", "c"]), &ScrollTuning::default())
    }

    #[test]
    fn test_down_from_first_snaps_to_next() {
        let mut nav = navigator();
        let now = Instant::now();
        nav.sync(&page(0.0));

        let outcome = nav.on_wheel(100.0, &page(0.0), now);
        assert_eq!(outcome, WheelOutcome::ScrollTo(1));
        assert!(outcome.prevents_default());
        assert_eq!(nav.current(), 1);
    }

    #[test]
    fn test_down_at_last_section_passes_through() {
        let mut nav = navigator();
        let now = Instant::now();
        nav.sync(&page(1620.0));
        assert_eq!(nav.current(), 2);

        let outcome = nav.on_wheel(100.0, &page(1620.0), now);
        assert_eq!(outcome, WheelOutcome::PassThrough);
        assert!(!outcome.prevents_default());
        assert!(!nav.is_settling(now));
    }

    #[test]
    fn test_outside_snap_zone_passes_through() {
        let mut nav = navigator();
        let now = Instant::now();
        nav.sync(&page(2000.0));
        assert_eq!(nav.on_wheel(-100.0, &page(2000.0), now), WheelOutcome::PassThrough);
        assert_eq!(nav.on_wheel(100.0, &page(2000.0), now), WheelOutcome::PassThrough);
    }

    #[test]
    fn test_up_snaps_to_previous() {
        let mut nav = navigator();
        let now = Instant::now();
        nav.sync(&page(1600.0));
        assert_eq!(nav.on_wheel(-100.0, &page(1600.0), now), WheelOutcome::ScrollTo(1));
    }

    #[test]
    fn test_up_at_top_passes_through() {
        let mut nav = navigator();
        let now = Instant::now();
        nav.sync(&page(10.0));
        assert_eq!(nav.on_wheel(-100.0, &page(10.0), now), WheelOutcome::PassThrough);

        // Partway into the first section, scrolling up returns to its top.
        nav.sync(&page(300.0));
        assert_eq!(nav.on_wheel(-100.0, &page(300.0), now), WheelOutcome::ScrollTo(0));
    }

    #[test]
    fn test_settle_guard_swallows_rapid_wheel_events() {
        let mut nav = navigator();
        let start = Instant::now();
        nav.sync(&page(0.0));

        assert_eq!(nav.on_wheel(100.0, &page(0.0), start), WheelOutcome::ScrollTo(1));
        let soon = start + Duration::from_millis(100);
        assert_eq!(nav.on_wheel(100.0, &page(300.0), soon), WheelOutcome::Suppress);
        assert_eq!(nav.current(), 1);

        let later = start + Duration::from_millis(800);
        assert!(!nav.is_settling(later));
        assert_eq!(nav.on_wheel(100.0, &page(800.0), later), WheelOutcome::ScrollTo(2));
    }

    #[test]
    fn test_missing_last_section_passes_through() {
        let mut nav = SnapNavigator::new(
            Sections::new(["a", "b", "missing"]),
            &ScrollTuning::default(),
        );
        let now = Instant::now();
        assert_eq!(nav.on_wheel(100.0, &page(0.0), now), WheelOutcome::PassThrough);

        let mut empty = SnapNavigator::new(Sections::default(), &ScrollTuning::default());
        assert_eq!(empty.on_wheel(100.0, &page(0.0), now), WheelOutcome::PassThrough);
    }

    #[test]
    fn test_scroll_to_out_of_range_is_ignored() {
        let mut nav = navigator();
        let now = Instant::now();
        assert_eq!(nav.scroll_to(7, now), None);
        assert!(!nav.is_settling(now));
        assert_eq!(nav.current(), 0);
    }
}
