//! The page of stacked sections shown by the terminal preview.

use flying_core::CellSize;
use flying_scroll::Layout;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
};

/// Antique gold used for titles and the cursor.
pub const GOLD: Color = Color::Rgb(214, 190, 138);

const MUTED: Color = Color::Rgb(150, 150, 160);

/// How tall a section is relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionHeight {
    Viewport,
    HalfViewport,
}

impl SectionHeight {
    fn rows(self, viewport_rows: u16) -> u16 {
        match self {
            SectionHeight::Viewport => viewport_rows.max(1),
            SectionHeight::HalfViewport => (viewport_rows / 2).max(1),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PageSection {
    pub id: &'static str,
    pub title: &'static str,
    pub body: &'static [&'static str],
    pub height: SectionHeight,
}

/// Vertically stacked sections.
#[derive(Debug, Clone)]
pub struct Page {
    sections: Vec<PageSection>,
}

impl Page {
    /// The studio home page: three snapped sections and a free-flowing footer.
    pub fn studio() -> Self {
        Self {
            sections: vec![
                PageSection {
                    id: "section-a",
                    title: "FLYING STUDIO",
                    body: &["Custom tattoo studio", "scroll to explore"],
                    height: SectionHeight::Viewport,
                },
                PageSection {
                    id: "section-b",
                    title: "GENRES",
                    body: &["Blackwork  ·  Fine line  ·  Irezumi", "Old school  ·  Lettering"],
                    height: SectionHeight::Viewport,
                },
                PageSection {
                    id: "section-c",
                    title: "EVENTS",
                    body: &["Flash day", "Guest artists", "Open studio night"],
                    height: SectionHeight::Viewport,
                },
                PageSection {
                    id: "section-d",
                    title: "VISIT",
                    body: &["Bookings by appointment"],
                    height: SectionHeight::HalfViewport,
                },
            ],
        }
    }

    pub fn sections(&self) -> &[PageSection] {
        &self.sections
    }

    /// `(top_row, height_rows)` of each section, in order.
    pub fn rows(&self, viewport_rows: u16) -> Vec<(u32, u16)> {
        let mut top = 0u32;
        self.sections
            .iter()
            .map(|section| {
                let height = section.height.rows(viewport_rows);
                let entry = (top, height);
                top += height as u32;
                entry
            })
            .collect()
    }

    pub fn total_rows(&self, viewport_rows: u16) -> u32 {
        self.rows(viewport_rows)
            .last()
            .map(|(top, height)| top + *height as u32)
            .unwrap_or(0)
    }

    fn find(&self, id: &str, viewport_rows: u16) -> Option<(u32, u16)> {
        let idx = self.sections.iter().position(|s| s.id == id)?;
        self.rows(viewport_rows).get(idx).copied()
    }
}

/// The page as seen through a viewport at a given scroll offset.
#[derive(Debug, Clone, Copy)]
pub struct PageView<'a> {
    pub page: &'a Page,
    /// Scroll offset in pixels.
    pub scroll: f32,
    pub viewport_rows: u16,
    pub cell: CellSize,
}

impl<'a> PageView<'a> {
    pub fn new(page: &'a Page, scroll: f32, viewport_rows: u16, cell: CellSize) -> Self {
        Self {
            page,
            scroll,
            viewport_rows,
            cell,
        }
    }

    /// Largest valid scroll offset in pixels.
    pub fn max_scroll(&self) -> f32 {
        let total = self.page.total_rows(self.viewport_rows) as f32;
        ((total - self.viewport_rows as f32) * self.cell.height.max(1) as f32).max(0.0)
    }

    /// Draw section content into `area`, writing only text cells.
    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let scroll_rows = self.cell.pixels_to_rows(self.scroll) as i64;
        let rows = self.page.rows(self.viewport_rows);

        for (section, (top, height)) in self.page.sections().iter().zip(rows) {
            let screen_top = top as i64 - scroll_rows;

            // Thin rule on each section boundary
            if screen_top > 0 {
                let rule = "─".repeat(area.width as usize / 3);
                self.put(area, buf, screen_top, &rule, Style::new().fg(Color::Rgb(60, 60, 70)));
            }

            let title_row = screen_top + height as i64 / 3;
            let title = Style::new().fg(GOLD).add_modifier(Modifier::BOLD);
            self.put(area, buf, title_row, section.title, title);
            for (i, line) in section.body.iter().enumerate() {
                self.put(area, buf, title_row + 2 + i as i64, line, Style::new().fg(MUTED));
            }
        }
    }

    /// Write `text` centered on viewport row `row`, if the row is visible.
    fn put(&self, area: Rect, buf: &mut Buffer, row: i64, text: &str, style: Style) {
        if row < 0 || row >= area.height as i64 {
            return;
        }
        let width = Line::from(text).width() as u16;
        let x = area.x + area.width.saturating_sub(width) / 2;
        buf.set_string(x, area.y + row as u16, text, style);
    }
}

impl Layout for PageView<'_> {
    fn scroll_offset(&self) -> f32 {
        self.scroll
    }

    fn viewport_height(&self) -> f32 {
        self.cell.rows_to_pixels(self.viewport_rows)
    }

    fn section_top(&self, id: &str) -> Option<f32> {
        let (top, _) = self.page.find(id, self.viewport_rows)?;
        Some(top as f32 * self.cell.height.max(1) as f32)
    }

    fn section_height(&self, id: &str) -> Option<f32> {
        let (_, height) = self.page.find(id, self.viewport_rows)?;
        Some(self.cell.rows_to_pixels(height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(page: &Page, scroll: f32) -> PageView<'_> {
        PageView::new(page, scroll, 20, CellSize::default())
    }

    #[test]
    fn test_section_rows() {
        let page = Page::studio();
        assert_eq!(page.rows(20), vec![(0, 20), (20, 20), (40, 20), (60, 10)]);
        assert_eq!(page.total_rows(20), 70);
    }

    #[test]
    fn test_layout_in_pixels() {
        let page = Page::studio();
        let view = view(&page, 160.0);
        assert_eq!(view.viewport_height(), 320.0);
        assert_eq!(view.section_top("section-b"), Some(320.0));
        assert_eq!(view.section_height("section-d"), Some(160.0));
        assert_eq!(view.section_viewport_top("section-b"), Some(160.0));
        assert_eq!(view.section_top("section-z"), None);
        assert_eq!(view.max_scroll(), 50.0 * 16.0);
    }

    #[test]
    fn test_render_only_visible_titles() {
        let page = Page::studio();
        let area = Rect::new(0, 0, 40, 20);
        let mut buf = Buffer::empty(area);
        view(&page, 0.0).render(area, &mut buf);

        let text: String = (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n");
        assert!(text.contains("FLYING STUDIO"));
        assert!(!text.contains("GENRES"));
    }

    #[test]
    fn test_title_is_bold_gold() {
        let page = Page::studio();
        let area = Rect::new(0, 0, 40, 20);
        let mut buf = Buffer::empty(area);
        view(&page, 0.0).render(area, &mut buf);

        // "FLYING STUDIO" is 13 wide, centered at x = 13 on row 20 / 3.
        let cell = &buf[(13, 6)];
        assert_eq!(cell.symbol(), "F");
        assert_eq!(cell.fg, GOLD);
        assert!(cell.modifier.contains(Modifier::BOLD));
    }
}
