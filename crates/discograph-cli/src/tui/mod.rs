use std::io;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use discograph_core::{Catalog, CatalogFilter, Effect, Intent, ReleaseType, View, ViewState};
use discograph_fetch::{CatalogFetcher, Config};

pub mod catalog_grid;
pub mod home;
pub mod release_detail;

/// Application state for the catalog browser TUI.
///
/// Key presses are translated into view intents; the [`ViewState`] machine
/// decides what actually happens, and its effects drive the catalog fetch
/// and the per-view rendering. The transition lock is released after every
/// completed draw.
#[derive(Debug)]
pub struct App {
    pub state: ViewState,
    pub catalog: Catalog,
    fetcher: CatalogFetcher,
    /// Index into the filtered grid rows.
    pub selected: usize,
    /// First visible grid row.
    pub grid_offset: usize,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            state: ViewState::new(),
            catalog: Catalog::new(),
            fetcher: CatalogFetcher::new(config)?,
            selected: 0,
            grid_offset: 0,
            should_quit: false,
        })
    }

    fn handle_key(&mut self, key: KeyCode) {
        match self.state.view().clone() {
            View::Home => self.handle_home_key(key),
            View::Catalog => self.handle_catalog_key(key),
            View::Detail(_) => self.handle_detail_key(key),
        }
    }

    fn handle_home_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc => {
                // Nothing left to close on the home view: leave.
                if self.state.menu_open() {
                    self.dispatch(Intent::Escape);
                } else {
                    self.should_quit = true;
                }
            }
            KeyCode::Enter | KeyCode::Char('c') => self.dispatch(Intent::OpenCatalog),
            KeyCode::Char('m') => self.dispatch(Intent::ToggleMenu),
            _ => {}
        }
    }

    fn handle_catalog_key(&mut self, key: KeyCode) {
        const VIEWPORT_HEIGHT: usize = 20;

        match key {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc | KeyCode::Char('h') => self.dispatch(Intent::NavigateHome),
            KeyCode::Char('j') | KeyCode::Down => {
                if self.selected + 1 < self.catalog.filtered().len() {
                    self.selected += 1;
                    if self.selected >= self.grid_offset + VIEWPORT_HEIGHT {
                        self.grid_offset = self.selected - VIEWPORT_HEIGHT + 1;
                    }
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                if self.selected > 0 {
                    self.selected -= 1;
                    if self.selected < self.grid_offset {
                        self.grid_offset = self.selected;
                    }
                }
            }
            KeyCode::Enter => {
                let id = self
                    .catalog
                    .filtered()
                    .get(self.selected)
                    .map(|release| release.id.clone());
                if let Some(id) = id {
                    self.dispatch(Intent::SelectRelease(id));
                }
            }
            KeyCode::Char('m') => self.dispatch(Intent::ToggleMenu),
            KeyCode::Char('1') => self.dispatch(Intent::SetFilter(CatalogFilter::All)),
            KeyCode::Char('2') => self.dispatch(Intent::SetFilter(CatalogFilter::Albums)),
            KeyCode::Char('3') => {
                self.dispatch(Intent::SetFilter(CatalogFilter::Kind(ReleaseType::Single)));
            }
            KeyCode::Char('4') => {
                self.dispatch(Intent::SetFilter(CatalogFilter::Kind(ReleaseType::Mix)));
            }
            KeyCode::Char('5') => {
                self.dispatch(Intent::SetFilter(CatalogFilter::Kind(ReleaseType::Remix)));
            }
            _ => {}
        }
    }

    fn handle_detail_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc | KeyCode::Char('b') => self.dispatch(Intent::CloseDetail),
            _ => {}
        }
    }

    /// Apply an intent and perform whatever effect comes back.
    fn dispatch(&mut self, intent: Intent) {
        match self.state.apply(intent) {
            Effect::FetchCatalog => self.load_catalog(),
            Effect::ApplyFilter(filter) => {
                self.catalog.set_filter(filter);
                self.selected = 0;
                self.grid_offset = 0;
            }
            Effect::RenderGrid | Effect::RenderDetail(_) | Effect::None => {}
        }
    }

    /// First entry into the catalog view: fetch the merged catalog. The
    /// fetcher never fails (worst case: empty catalog), so this only
    /// blocks the UI for the duration of the network round trips.
    fn load_catalog(&mut self) {
        let releases = tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(self.fetcher.fetch_catalog())
        });
        self.catalog.replace(releases);
        self.state.mark_loaded();
        self.selected = 0;
        self.grid_offset = 0;
    }
}

/// Run the catalog browser TUI.
///
/// Sets up the terminal, runs the main event loop, and restores the
/// terminal on exit (including on error).
pub fn run_tui(config: &Config) -> Result<()> {
    let app = App::new(config)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_event_loop(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
) -> Result<()> {
    loop {
        terminal.draw(|frame| match app.state.view() {
            View::Home => home::render(frame, &app),
            View::Catalog => catalog_grid::render(frame, &app),
            View::Detail(id) => release_detail::render(frame, &app, id),
        })?;
        // The draw has settled; the transition (if any) is over.
        app.state.transition_complete();

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                app.handle_key(key.code);
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Menu overlay shared by the home and catalog views.
pub(crate) fn render_menu(frame: &mut Frame, area: Rect) {
    let width = 34.min(area.width);
    let height = 7.min(area.height);
    let menu_area = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    let menu = Paragraph::new(vec![
        Line::from("  Enter  Open catalog"),
        Line::from("  1-5    Filter releases"),
        Line::from("  Esc    Back / close"),
        Line::from("  q      Quit"),
    ])
    .block(Block::default().borders(Borders::ALL).title("Menu"));

    frame.render_widget(Clear, menu_area);
    frame.render_widget(menu, menu_area);
}
