//! Viewport visibility watchers.
//!
//! Both watchers report only transitions. The first evaluation always
//! reports, like an intersection observer's initial callback.

use crate::layout::Layout;

/// Watches how much of a section is inside the viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionWatcher {
    section: String,
    threshold: f32,
    intersecting: Option<bool>,
}

impl IntersectionWatcher {
    pub fn new(section: impl Into<String>, threshold: f32) -> Self {
        Self {
            section: section.into(),
            threshold,
            intersecting: None,
        }
    }

    /// Fraction (0.0-1.0) of the section's height inside the viewport.
    pub fn visible_ratio<L: Layout + ?Sized>(&self, layout: &L) -> Option<f32> {
        let top = layout.section_viewport_top(&self.section)?;
        let height = layout.section_height(&self.section)?;
        if height <= 0.0 {
            return Some(0.0);
        }
        let bottom = top + height;
        let overlap = bottom.min(layout.viewport_height()) - top.max(0.0);
        Some((overlap / height).clamp(0.0, 1.0))
    }

    /// Re-evaluate. Returns the new intersecting state if it changed.
    pub fn evaluate<L: Layout + ?Sized>(&mut self, layout: &L) -> Option<bool> {
        let ratio = self.visible_ratio(layout)?;
        let intersecting = ratio > 0.0 && ratio >= self.threshold;
        if self.intersecting == Some(intersecting) {
            return None;
        }
        log::debug!(
            "{} intersecting: {intersecting} (ratio {ratio:.2})",
            self.section
        );
        self.intersecting = Some(intersecting);
        Some(intersecting)
    }

    pub fn is_intersecting(&self) -> Option<bool> {
        self.intersecting
    }

    /// Forget the last state so the next evaluation reports again.
    pub fn reset(&mut self) {
        self.intersecting = None;
    }
}

/// Watches whether a section's top has risen above a fraction of the
/// viewport height.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneWatcher {
    section: String,
    trigger_fraction: f32,
    active: Option<bool>,
}

impl ZoneWatcher {
    pub fn new(section: impl Into<String>, trigger_fraction: f32) -> Self {
        Self {
            section: section.into(),
            trigger_fraction,
            active: None,
        }
    }

    /// Re-evaluate. Returns the new state if it changed.
    pub fn evaluate<L: Layout + ?Sized>(&mut self, layout: &L) -> Option<bool> {
        let top = layout.section_viewport_top(&self.section)?;
        let active = top < layout.viewport_height() * self.trigger_fraction;
        if self.active == Some(active) {
            return None;
        }
        log::debug!("{} zone active: {active}", self.section);
        self.active = Some(active);
        Some(active)
    }

    pub fn is_active(&self) -> Option<bool> {
        self.active
    }

    /// Forget the last state so the next evaluation reports again.
    pub fn reset(&mut self) {
        self.active = None;
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
            .scrolled_to(scroll)
    }

    #[test]
    fn test_visible_ratio() {
        let watcher = IntersectionWatcher::new("b", 0.2);
        assert_eq!(watcher.visible_ratio(&page(0.0)), Some(0.0));
        assert_eq!(watcher.visible_ratio(&page(400.0)), Some(0.5));
        assert_eq!(watcher.visible_ratio(&page(800.0)), Some(1.0));
        assert_eq!(watcher.visible_ratio(&page(1400.0)), Some(0.25));
        assert_eq!(watcher.visible_ratio(&page(3000.0)), Some(0.0));
    }

    #[test]
    fn test_intersection_transitions() {
        let mut watcher = IntersectionWatcher::new("b", 0.2);
        assert_eq!(watcher.evaluate(&page(0.0)), Some(false));
        assert_eq!(watcher.evaluate(&page(100.0)), None);
        assert_eq!(watcher.evaluate(&page(200.0)), Some(true));
        assert_eq!(watcher.evaluate(&page(800.0)), None);
        assert_eq!(watcher.evaluate(&page(1500.0)), Some(false));
        assert_eq!(watcher.is_intersecting(), Some(false));
    }

    #[test]
    fn test_missing_section_is_ignored() {
        let mut watcher = IntersectionWatcher::new("nope", 0.2);
        assert_eq!(watcher.evaluate(&page(0.0)), None);
        assert_eq!(watcher.is_intersecting(), None);

        let mut zone = ZoneWatcher::new("nope", 0.8);
        assert_eq!(zone.evaluate(&page(0.0)), None);
    }

    #[test]
    fn test_zone_trigger_point() {
        let mut zone = ZoneWatcher::new("c", 0.8);
        // Top of c sits 1600 below the viewport top.
        assert_eq!(zone.evaluate(&page(0.0)), Some(false));
        // 1600 - 960 = 640, exactly the trigger point: not yet.
        assert_eq!(zone.evaluate(&page(960.0)), None);
        assert_eq!(zone.evaluate(&page(961.0)), Some(true));
        assert_eq!(zone.evaluate(&page(3000.0)), None);
        assert_eq!(zone.evaluate(&page(800.0)), Some(false));
        assert_eq!(zone.is_active(), Some(false));
    }

    #[test]
    fn test_reset_reports_again() {
        let mut zone = ZoneWatcher::new("c", 0.8);
        assert_eq!(zone.evaluate(&page(1600.0)), Some(true));
        assert_eq!(zone.evaluate(&page(1600.0)), None);
        zone.reset();
        assert_eq!(zone.is_active(), None);
        assert_eq!(zone.evaluate(&page(1600.0)), Some(true));

        let mut watcher = IntersectionWatcher::new("b", 0.2);
        assert_eq!(watcher.evaluate(&page(800.0)), Some(true));
        watcher.reset();
        assert_eq!(watcher.evaluate(&page(800.0)), Some(true));
    }
}
