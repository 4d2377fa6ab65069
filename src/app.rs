//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that owns the catalog and view state and delegates rendering to the views.
//! Every action that changes the view state is followed by a full redraw.

use crate::action::Action;
use crate::component::{Component, HitTest};
use crate::components::{
    calculate_main_layout, draw_help_bar, BookshelfScene, BookshelfView, GridScene, GridView,
    HeaderComponent, HelpDialog, QuitDialog, RenderContext,
};
use crate::config::Config;
use crate::model::{
    Catalog, GenrePalette, Modal, ModalStack, PointerTracker, SpineTilts, ViewMode, ViewState,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{layout::Rect, Frame};
use tracing::{debug, info, warn};

/// Main application state
pub struct App {
    pub config: Config,

    /// Ranked book data, fixed for the session
    pub catalog: Catalog,

    pub palette: GenrePalette,

    /// Active view and hovered book
    pub state: ViewState,

    /// Element currently under the mouse pointer
    pub pointer: PointerTracker,

    pub modals: ModalStack,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    tilts: SpineTilts,
    rng: StdRng,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub header: HeaderComponent,
    pub bookshelf: BookshelfView,
    pub grid: GridView,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,
}

impl App {
    pub fn new(config: Config) -> App {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create an App with a given random source for spine tilts
    pub fn with_rng(config: Config, mut rng: StdRng) -> App {
        let catalog = Catalog::top_loaned();
        let palette = GenrePalette::from_config(&config.palette).unwrap_or_else(|e| {
            warn!(error = %e, "invalid genre palette, using defaults");
            GenrePalette::default()
        });
        let tilts = SpineTilts::new(
            config.style.tilt_mode,
            catalog.len(),
            config.style.max_tilt_degrees,
            &mut rng,
        );
        let accent = config.style.accent_color();

        info!(
            books = catalog.len(),
            max_checkouts = catalog.max_checkouts(),
            tilt_mode = ?config.style.tilt_mode,
            "catalog loaded"
        );

        App {
            state: ViewState::new(catalog.len()),
            header: HeaderComponent::new(catalog.heading(), catalog.subtitle(), accent),
            grid: GridView::new(accent),
            bookshelf: BookshelfView::new(),
            quit_dialog: QuitDialog,
            help_dialog: HelpDialog::default(),
            pointer: PointerTracker::new(),
            modals: ModalStack::new(),
            should_quit: false,
            catalog,
            palette,
            tilts,
            rng,
            config,
        }
    }

    /// Catalog index drawn at the given cell in the active view
    fn hit_test(&self, column: u16, row: u16) -> Option<usize> {
        match self.state.mode() {
            ViewMode::Bookshelf => self.bookshelf.hit_test(column, row),
            ViewMode::Grid => self.grid.hit_test(column, row),
        }
    }

    fn switch_mode(&mut self, mode: ViewMode) {
        if self.state.mode() == mode {
            return;
        }
        self.state.set_mode(mode);
        // The old view's elements are gone; they were not left
        self.pointer.forget();
        debug!(mode = mode.name(), hovered = ?self.state.hovered(), "view switched");
    }

    fn pointer_moved(&mut self, column: u16, row: u16) {
        let target = self.hit_test(column, row);
        for event in self.pointer.track(target) {
            self.state.apply(event);
        }
    }

    /// Keep the keyboard-hovered card on screen
    fn follow_hover(&mut self) {
        if self.state.mode() == ViewMode::Grid {
            if let Some(index) = self.state.hovered() {
                self.grid.ensure_visible(index);
            }
        }
    }

    fn scroll_grid(&mut self, rows: isize) {
        if self.state.mode() == ViewMode::Grid {
            self.grid.scroll_by(rows);
        }
    }

    fn draw_body(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let tilts = self.tilts.for_render(&mut self.rng);
        let ctx = RenderContext {
            catalog: &self.catalog,
            palette: &self.palette,
            state: &self.state,
            style: &self.config.style,
            tilts,
        };

        match self.state.mode() {
            ViewMode::Bookshelf => {
                self.bookshelf.set_scene(BookshelfScene::build(&ctx, area));
                self.bookshelf.draw(frame, area)
            }
            ViewMode::Grid => {
                let scene = GridScene::build(&ctx, area, self.grid.scroll());
                self.grid.set_scene(scene);
                self.grid.draw(frame, area)
            }
        }
    }
}

impl Component for App {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(Some(Action::ForceQuit));
        }

        match self.modals.top() {
            Some(Modal::QuitConfirm) => return self.quit_dialog.handle_key_event(key),
            Some(Modal::Help) => return self.help_dialog.handle_key_event(key),
            None => {}
        }

        let action = match key.code {
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Tab | KeyCode::BackTab => Some(Action::NextMode),
            KeyCode::Char('1') | KeyCode::Char('b') => Some(Action::SwitchMode(ViewMode::Bookshelf)),
            KeyCode::Char('2') | KeyCode::Char('g') => Some(Action::SwitchMode(ViewMode::Grid)),
            KeyCode::Right | KeyCode::Char('l') => Some(Action::HoverNext),
            KeyCode::Left | KeyCode::Char('h') => Some(Action::HoverPrev),
            KeyCode::Esc => Some(Action::ClearHover),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::ScrollDown),
            KeyCode::Up | KeyCode::Char('k') => Some(Action::ScrollUp),
            KeyCode::PageDown => Some(Action::PageDown),
            KeyCode::PageUp => Some(Action::PageUp),
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if !self.modals.is_empty() {
            return Ok(None);
        }

        let (column, row) = (mouse.column, mouse.row);
        let action = match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                Some(Action::PointerMoved { column, row })
            }
            MouseEventKind::Down(MouseButton::Left) => Some(Action::PointerClicked { column, row }),
            MouseEventKind::ScrollDown => Some(Action::ScrollDown),
            MouseEventKind::ScrollUp => Some(Action::ScrollUp),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick | Action::Resize(_, _) => {}
            Action::ForceQuit => {
                info!("quit requested");
                self.should_quit = true;
            }

            // ─────────────────────────────────────────────────────────────────
            // View Mode
            // ─────────────────────────────────────────────────────────────────
            Action::SwitchMode(mode) => {
                self.switch_mode(mode);
                self.header.update(action)?;
            }
            Action::NextMode => {
                return Ok(Some(Action::SwitchMode(self.state.mode().next())));
            }

            // ─────────────────────────────────────────────────────────────────
            // Hover
            // ─────────────────────────────────────────────────────────────────
            Action::PointerMoved { column, row } => self.pointer_moved(column, row),
            Action::PointerClicked { column, row } => {
                if let Some(mode) = self.header.tab_at(column, row) {
                    return Ok(Some(Action::SwitchMode(mode)));
                }
                self.pointer_moved(column, row);
            }
            Action::HoverNext => {
                self.state.hover_next();
                self.follow_hover();
            }
            Action::HoverPrev => {
                self.state.hover_prev();
                self.follow_hover();
            }
            Action::ClearHover => self.state.clear_hover(),

            // ─────────────────────────────────────────────────────────────────
            // Scrolling
            // ─────────────────────────────────────────────────────────────────
            Action::ScrollUp => self.scroll_grid(-1),
            Action::ScrollDown => self.scroll_grid(1),
            Action::PageUp => self.scroll_grid(-self.grid.page_rows()),
            Action::PageDown => self.scroll_grid(self.grid.page_rows()),

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => self.modals.push(Modal::QuitConfirm),
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.modals.toggle(Modal::Help);
            }
            Action::CloseModal => {
                self.modals.pop();
            }
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let layout = calculate_main_layout(area);

        self.header.set_mode(self.state.mode());
        self.header.draw(frame, layout.header.union(layout.tabs))?;
        self.draw_body(frame, layout.body)?;
        draw_help_bar(frame, layout.help, self.state.mode());

        for modal in self.modals.iter() {
            match modal {
                Modal::QuitConfirm => self.quit_dialog.draw(frame, area)?,
                Modal::Help => self.help_dialog.draw(frame, area)?,
            }
        }
        Ok(())
    }
}
