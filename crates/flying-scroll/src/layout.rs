//! Host layout capability.

/// Live layout queries answered by the host.
///
/// Offsets are absolute document pixels. Sections the host does not know
/// about resolve to `None`.
pub trait Layout {
    /// Current vertical scroll offset.
    fn scroll_offset(&self) -> f32;

    fn viewport_height(&self) -> f32;

    /// Document offset of the section's top edge.
    fn section_top(&self, id: &str) -> Option<f32>;

    fn section_height(&self, id: &str) -> Option<f32>;

    /// Section top relative to the viewport, like a bounding rect's `top`.
    fn section_viewport_top(&self, id: &str) -> Option<f32> {
        self.section_top(id).map(|top| top - self.scroll_offset())
    }
}

/// A fixed layout table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticLayout {
    pub scroll: f32,
    pub viewport_height: f32,
    sections: Vec<(String, f32, f32)>,
}

impl StaticLayout {
    pub fn new(viewport_height: f32) -> Self {
        Self {
            scroll: 0.0,
            viewport_height,
            sections: Vec::new(),
        }
    }

    /// Add a section with its document top and height.
    pub fn with_section(mut self, id: impl Into<String>, top: f32, height: f32) -> Self {
        self.sections.push((id.into(), top, height));
        self
    }

    pub fn scrolled_to(mut self, scroll: f32) -> Self {
        self.scroll = scroll;
        self
    }

    fn find(&self, id: &str) -> Option<&(String, f32, f32)> {
        self.sections.iter().find(|(name, _, _)| name == id)
    }
}

impl Layout for StaticLayout {
    fn scroll_offset(&self) -> f32 {
        self.scroll
    }

    fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    fn section_top(&self, id: &str) -> Option<f32> {
        self.find(id).map(|(_, top, _)| *top)
    }

    fn section_height(&self, id: &str) -> Option<f32> {
        self.find(id).map(|(_, _, height)| *height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_relative_top() {
        let layout = StaticLayout::new(800.0)
            .with_section("a", 0.0, 800.0)
            .with_section("b", 800.0, 800.0)
            .scrolled_to(300.0);
        assert_eq!(layout.section_viewport_top("b"), Some(500.0));
        assert_eq!(layout.section_viewport_top("a"), Some(-300.0));
        assert_eq!(layout.section_viewport_top("missing"), None);
    }
}
