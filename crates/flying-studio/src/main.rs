mod logging;
mod page;
mod scroll;

use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEvent, MouseEventKind,
    },
    execute,
};
use flying_config::Config;
use flying_core::{CellSize, FlagReader, UiFlags};
use flying_scroll::{Layout, Synchronizer, WheelOutcome};
use flying_stars::{AnimationDriver, TerminalSurface, milky_way};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout as Split, Position, Rect},
    style::Stylize,
    text::Line,
    widgets::Paragraph,
};

use crate::page::{GOLD, Page, PageView};
use crate::scroll::ScrollPosition;

/// Rows a single wheel notch or arrow key moves natively.
const WHEEL_ROWS: u16 = 3;

/// Upper bound on the event poll timeout.
const MAX_POLL: Duration = Duration::from_millis(100);

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let log_path = logging::init();

    let config = Config::load().unwrap_or_else(|e| {
        log::warn!("{e}; using default config");
        Config::default()
    });
    if let Some(path) = log_path {
        log::info!("logging to {}", path.display());
    }

    let terminal = ratatui::init();
    if let Err(e) = execute!(io::stdout(), EnableMouseCapture) {
        ratatui::restore();
        return Err(e.into());
    }
    let result = App::new(config).run(terminal);
    let released = execute!(io::stdout(), DisableMouseCapture);
    ratatui::restore();
    result?;
    Ok(released?)
}

/// The terminal preview: a scrollable page with the site's effects.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    page: Page,
    scroll: ScrollPosition,
    cell: CellSize,
    /// Terminal size in cells.
    cols: u16,
    rows: u16,
    driver: AnimationDriver,
    surface: TerminalSurface,
    sync: Synchronizer,
    flags: FlagReader,
    /// Last seen flag version.
    flags_version: u64,
    /// Mouse position in cells.
    mouse: Option<(u16, u16)>,
    started: Instant,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config) -> Self {
        let (writer, flags) = UiFlags::channel();
        Self {
            running: false,
            page: Page::studio(),
            scroll: ScrollPosition::default(),
            cell: config.cell,
            cols: 0,
            rows: 0,
            driver: AnimationDriver::with_time_seed(config.starfield.clone()),
            surface: TerminalSurface::new(config.cell),
            sync: Synchronizer::new(&config.sections, &config.scroll, writer),
            flags,
            flags_version: 0,
            mouse: None,
            started: Instant::now(),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        let size = terminal.size()?;
        self.resize(size.width, size.height);

        self.running = true;
        self.driver.start(Instant::now());
        let view = PageView::new(&self.page, self.scroll.offset(), self.page_rows(), self.cell);
        self.sync.attach(&view);
        self.apply_flags(true);

        while self.running {
            let now = Instant::now();
            self.advance(now);
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }

        self.driver.stop();
        self.sync.detach();
        Ok(())
    }

    /// Page rows above the status line.
    fn page_rows(&self) -> u16 {
        self.rows.saturating_sub(1)
    }

    fn view(&self) -> PageView<'_> {
        PageView::new(&self.page, self.scroll.offset(), self.page_rows(), self.cell)
    }

    /// Step scrolling, section tracking and the star field by one frame.
    fn advance(&mut self, now: Instant) {
        let max = self.view().max_scroll();
        if self.scroll.is_animating() && self.scroll.advance(now, max) {
            self.sync.on_scroll();
        }
        let view = PageView::new(&self.page, self.scroll.offset(), self.page_rows(), self.cell);
        self.sync.on_frame(&view);
        self.apply_flags(false);

        let viewport = self.cell.to_pixels(self.cols, self.rows);
        self.driver.tick(now, &viewport);
    }

    /// Forward flag changes to the consumers owned by the app.
    fn apply_flags(&mut self, force: bool) {
        let (flags, version) = self.flags.snapshot();
        if !force && version == self.flags_version {
            return;
        }
        self.flags_version = version;
        self.driver.set_active(flags.interactive_zone);
    }

    fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
        self.surface.ensure_size(cols, rows);
        let max = self.view().max_scroll();
        self.scroll.set(self.scroll.offset(), max);
        self.sync.on_scroll();
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let flags = self.flags.get();
        let elapsed_ms = self.started.elapsed().as_millis() as u64;

        let [page_area, status_area] =
            Split::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);

        if flags.show_background {
            let band = milky_way::lines(area.width, area.height, elapsed_ms);
            frame.render_widget(Paragraph::new(band), area);
        }

        self.surface.ensure_size(area.width, area.height);
        self.driver.draw(&mut self.surface);
        self.surface.blit(area, frame.buffer_mut());

        self.view().render(page_area, frame.buffer_mut());

        if flags.interactive_zone {
            self.render_cursor(page_area, frame);
        }
        self.render_status(status_area, frame, flags);
    }

    /// Draw the custom cursor at the mouse position.
    fn render_cursor(&self, area: Rect, frame: &mut Frame) {
        let Some((x, y)) = self.mouse else {
            return;
        };
        if !area.contains(Position::new(x, y)) {
            return;
        }
        if let Some(cell) = frame.buffer_mut().cell_mut((x, y)) {
            cell.set_char('◎').set_fg(GOLD);
        }
    }

    fn render_status(&self, area: Rect, frame: &mut Frame, flags: UiFlags) {
        let snap_count = self.sync.navigator().sections().len();
        let dots: String = (0..snap_count)
            .map(|i| if i == flags.current_section { '●' } else { '○' })
            .collect();

        let status = Line::from(vec![
            dots.fg(GOLD),
            "  ".into(),
            "q".bold().fg(GOLD),
            " quit  ".dark_gray(),
            "j/k".bold().fg(GOLD),
            " scroll  ".dark_gray(),
            "home".bold().fg(GOLD),
            " top".dark_gray(),
        ])
        .centered();
        frame.render_widget(Paragraph::new(status), area);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Polls until the next star field frame is due.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        let timeout = self
            .driver
            .next_frame_in(Instant::now())
            .unwrap_or(MAX_POLL)
            .min(MAX_POLL);
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(mouse) => self.on_mouse_event(mouse),
                Event::Resize(cols, rows) => self.resize(cols, rows),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('j') | KeyCode::Down | KeyCode::PageDown) => self.on_wheel(1.0),
            (_, KeyCode::Char('k') | KeyCode::Up | KeyCode::PageUp) => self.on_wheel(-1.0),
            (_, KeyCode::Home) => self.scroll_to_top(),
            _ => {}
        }
    }

    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        self.mouse = Some((mouse.column, mouse.row));
        match mouse.kind {
            MouseEventKind::ScrollDown => self.on_wheel(1.0),
            MouseEventKind::ScrollUp => self.on_wheel(-1.0),
            _ => {}
        }
    }

    /// Route a wheel notch through the synchronizer.
    fn on_wheel(&mut self, direction: f32) {
        let now = Instant::now();
        let delta = direction * self.cell.rows_to_pixels(WHEEL_ROWS);
        let view = PageView::new(&self.page, self.scroll.offset(), self.page_rows(), self.cell);
        let max = view.max_scroll();

        match self.sync.on_wheel(delta, &view, now) {
            WheelOutcome::ScrollTo(index) => {
                let target = self
                    .sync
                    .navigator()
                    .sections()
                    .get(index)
                    .and_then(|section| view.section_top(&section.id));
                if let Some(top) = target {
                    self.scroll.animate_to(top.min(max), now);
                }
            }
            WheelOutcome::PassThrough => {
                if self.scroll.scroll_by(delta, max) {
                    self.sync.on_scroll();
                }
            }
            WheelOutcome::Suppress => {}
        }
    }

    fn scroll_to_top(&mut self) {
        let max = self.view().max_scroll();
        if self.scroll.scroll_by(-self.scroll.offset(), max) {
            self.sync.on_scroll();
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
