//! TUI rendering and event loop (impure shell).
//!
//! Everything stateful lives in [`AppState`]; this module turns terminal
//! events into state transitions and draws the result.

pub mod constants;
pub mod help;
pub mod layout;
pub mod styles;

pub use help::render_help_overlay;
pub use layout::render_layout;
pub use styles::{ColorConfig, StyleTable, WidgetRole};

use crate::config::keybindings::KeyBindings;
use crate::model::{AppError, KeyAction};
use crate::state::{handle_action, AppState};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

impl From<TuiError> for AppError {
    fn from(err: TuiError) -> Self {
        match err {
            TuiError::Io(source) => AppError::Terminal(source),
        }
    }
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    styles: StyleTable,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(args: CliArgs) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self::with_terminal(terminal, args))
    }

    /// Run the main event loop
    ///
    /// Blocks on terminal events and redraws after each one. Returns when the
    /// user quits.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            match event::read()? {
                Event::Key(key) => {
                    if self.handle_key(key) {
                        return Ok(());
                    }
                }
                Event::Resize(width, height) => {
                    debug!("Handling resize to {}x{}", width, height);
                }
                _ => continue,
            }
            self.draw()?;
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Wrap an already-initialized terminal.
    pub fn with_terminal(terminal: Terminal<B>, args: CliArgs) -> Self {
        Self {
            terminal,
            app_state: AppState::new(args.show_log),
            key_bindings: KeyBindings::default(),
            styles: StyleTable::with_color_config(args.colors),
        }
    }

    /// Current application state.
    pub fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ignore key release reports from terminals that send them
        if key.kind == KeyEventKind::Release {
            return false;
        }

        // Help overlay captures keys until dismissed
        if self.app_state.help_visible {
            self.handle_help_key(key.code);
            return false;
        }

        if let Some(action) = self.key_bindings.get(key) {
            if action == KeyAction::Quit {
                info!("Quit requested");
            }
            return handle_action(&mut self.app_state, action);
        }

        if let KeyCode::Char(ch) = key.code {
            let modified = key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
            if !modified && !self.app_state.insert_char(ch) {
                debug!(?ch, "character rejected by focused field");
            }
        }

        false
    }

    /// Close or scroll the help overlay. Every other key is swallowed.
    fn handle_help_key(&mut self, code: KeyCode) {
        let visible_lines = self.help_visible_lines();
        let max_scroll = help::help_line_count().saturating_sub(visible_lines);
        let half_page = (visible_lines / 2).max(1);
        let scroll = &mut self.app_state.help_scroll;

        match code {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') => {
                self.app_state.help_visible = false;
            }
            KeyCode::Up => *scroll = scroll.saturating_sub(1),
            KeyCode::Down => *scroll = scroll.saturating_add(1).min(max_scroll),
            KeyCode::PageUp => *scroll = scroll.saturating_sub(half_page),
            KeyCode::PageDown => *scroll = scroll.saturating_add(half_page).min(max_scroll),
            KeyCode::Home => *scroll = 0,
            KeyCode::End => *scroll = max_scroll,
            _ => {}
        }
    }

    /// Content rows inside the help popup for the current terminal size.
    fn help_visible_lines(&self) -> u16 {
        let height = self.terminal.size().map(|size| size.height).unwrap_or(0);
        let popup_height = u32::from(height) * u32::from(constants::HELP_POPUP_HEIGHT_PERCENT) / 100;
        // Subtract 2 for borders
        u16::try_from(popup_height)
            .unwrap_or(u16::MAX)
            .saturating_sub(2)
    }

    /// Render the current frame
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let state = &self.app_state;
        let styles = &self.styles;
        self.terminal.draw(|frame| {
            layout::render_layout(frame, state, styles);
        })?;
        Ok(())
    }
}

/// Resolved start-up options for the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CliArgs {
    /// Whether the log pane is visible on startup.
    ///
    /// Maps to `show_log` in the config file and `--hide-log`.
    pub show_log: bool,

    /// Colour output, from `--no-color` and `NO_COLOR`.
    pub colors: ColorConfig,
}

impl CliArgs {
    /// Create new CliArgs
    pub fn new(show_log: bool, colors: ColorConfig) -> Self {
        Self { show_log, colors }
    }
}

/// Initialize and run the TUI application
///
/// This is the main entry point for the TUI. It handles terminal
/// setup, runs the event loop, and ensures cleanup on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run(args: CliArgs) -> Result<(), TuiError> {
    let mut app = TuiApp::new(args)?;

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
