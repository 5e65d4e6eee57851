//! Ordered section registry.

use crate::layout::Layout;

/// A snap target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Anchor id the host resolves.
    pub id: String,
    /// Position in traversal order.
    pub index: usize,
}

/// Sections in traversal order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sections {
    sections: Vec<Section>,
}

impl Sections {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let sections = ids
            .into_iter()
            .enumerate()
            .map(|(index, id)| Section {
                id: id.into(),
                index,
            })
            .collect();
        Self { sections }
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    pub fn last(&self) -> Option<&Section> {
        self.sections.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    /// Index of the section whose top is closest to the scroll offset.
    ///
    /// Ties go to the earlier section; unresolvable sections are skipped.
    /// Returns 0 if none resolve.
    pub fn nearest<L: Layout + ?Sized>(&self, layout: &L) -> usize {
        let scroll = layout.scroll_offset();
        let mut best = 0;
        let mut min_diff = f32::INFINITY;

        for section in &self.sections {
            let Some(top) = layout.section_top(&section.id) else {
                continue;
            };
            let diff = (scroll - top).abs();
            if diff < min_diff {
                min_diff = diff;
                best = section.index;
            }
        }
        best
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
    fn test_nearest_section() {
        let sections = Sections::new(["a", "b", "c"]);
        assert_eq!(sections.nearest(&page(0.0)), 0);
        assert_eq!(sections.nearest(&page(750.0)), 1);
        assert_eq!(sections.nearest(&page(1300.0)), 2);
        assert_eq!(sections.nearest(&page(5000.0)), 2);
    }

    #[test]
    fn test_tie_goes_to_first() {
        let sections = Sections::new(["a", "b", "c"]);
        assert_eq!(sections.nearest(&page(400.0)), 0);
        assert_eq!(sections.nearest(&page(1200.0)), 1);
    }

    #[test]
    fn test_missing_sections_are_skipped() {
        let sections = Sections::new(["a", "ghost", "c"]);
        let layout = StaticLayout::new(800.0)
            .with_section("a", 0.0, 800.0)
            .with_section("c", 1600.0, 800.0)
            .scrolled_to(900.0);
        assert_eq!(sections.nearest(&layout), 2);

        let empty = StaticLayout::new(800.0).scrolled_to(900.0);
        assert_eq!(sections.nearest(&empty), 0);
    }

    #[test]
    fn test_indices_follow_order() {
        let sections = Sections::new(vec!["x".to_string(), "y".to_string()]);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections.get(1).map(|s| s.id.as_str()), Some("y"));
        assert_eq!(sections.last().map(|s| s.index), Some(1));
        assert!(sections.get(2).is_none());
    }
}
