//! TUI rendering and event handling (impure shell).

pub mod constants;
mod help;
mod helpers;
mod layout;
mod login;
mod search_input;
pub mod styles;
mod user_form;
mod user_grid;

pub use help::render_help_overlay;
pub use helpers::{empty_line, key_value_line};
pub use layout::{render_layout, APP_TITLE};
pub use login::toggle_theme_label;
pub use search_input::{SearchInput, SEARCH_PLACEHOLDER};
pub use styles::{ColorConfig, Palette};
pub use user_grid::{grid_columns, UserGrid, EMPTY_MESSAGE};

use crate::config::keybindings::KeyBindings;
use crate::model::KeyAction;
use crate::state::{handle_form_key, search_input_handler, AppState, FormIntent, SearchState};
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
    colors: ColorConfig,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(app_state: AppState, colors: ColorConfig) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            colors,
        })
    }

    /// Run the main event loop
    ///
    /// Blocks on the next terminal event and redraws after every key or
    /// resize. Returns when the user quits (q or Ctrl+C).
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if self.handle_key(key) {
                        return Ok(());
                    }
                    self.draw()?;
                }
                Event::Resize(width, height) => {
                    debug!("Handling resize to {}x{}", width, height);
                    self.draw()?;
                }
                _ => {}
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C always quits, whatever has focus
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        // The message was drawn after the key that produced it
        self.app_state.dismiss_status();

        if self.app_state.help_visible {
            return self.handle_help_key(key);
        }

        if !self.app_state.session.is_logged_in() {
            return self.handle_logged_out_key(key);
        }

        if !self.app_state.crud().is_browsing() {
            self.handle_form_key(key);
            return false;
        }

        if self.app_state.search.is_typing() && self.handle_search_key(key) {
            return false;
        }

        match self.key_bindings.get(key) {
            Some(action) => self.dispatch(action),
            None => false,
        }
    }

    /// Help overlay captures every key.
    fn handle_help_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?') => {
                self.app_state.help_visible = false;
                false
            }
            KeyCode::Char('q') => true,
            _ => false,
        }
    }

    /// Login placeholder: log in, switch theme, open help or quit.
    fn handle_logged_out_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Enter | KeyCode::Char('l') => self.app_state.login(),
            KeyCode::Char('t') => self.app_state.toggle_theme(),
            KeyCode::Char('?') => self.app_state.toggle_help(),
            KeyCode::Char('q') => return true,
            _ => {}
        }
        false
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let Some(form) = self.app_state.crud_mut().form_mut() else {
            return;
        };
        match handle_form_key(form, key) {
            FormIntent::Save => {
                if let Err(error) = self.app_state.save_form() {
                    debug!(%error, "Form kept open");
                }
            }
            FormIntent::Cancel => self.app_state.cancel_form(),
            FormIntent::Edited | FormIntent::Ignored => {}
        }
    }

    /// Edit the query while the search bar has focus.
    ///
    /// Returns false for keys the search bar does not use, which then go
    /// through the normal bindings.
    fn handle_search_key(&mut self, key: KeyEvent) -> bool {
        let search = self.app_state.search.clone();
        let next = match key.code {
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                search_input_handler::handle_char_input(search, ch)
            }
            KeyCode::Backspace => search_input_handler::handle_backspace(search),
            KeyCode::Left => search_input_handler::handle_cursor_left(search),
            KeyCode::Right => search_input_handler::handle_cursor_right(search),
            KeyCode::Enter => search_input_handler::submit_search(search),
            KeyCode::Esc => search_input_handler::cancel_search(search),
            _ => return false,
        };
        self.app_state.set_search(next);
        true
    }

    /// Run the browsing-view action bound to a key.
    ///
    /// Returns true if app should quit
    fn dispatch(&mut self, action: KeyAction) -> bool {
        let state = &mut self.app_state;
        match action {
            KeyAction::SelectNext => state.select_next(),
            KeyAction::SelectPrev => state.select_prev(),
            KeyAction::SelectFirst => state.select_first(),
            KeyAction::SelectLast => state.select_last(),
            KeyAction::StartSearch => state.start_search(),
            KeyAction::ClearSearch => {
                if state.search != SearchState::Inactive {
                    state.clear_search();
                }
            }
            KeyAction::CreateUser => state.create_user(),
            KeyAction::EditUser => state.edit_selected(),
            KeyAction::DeleteUser => {
                state.delete_selected();
            }
            KeyAction::ToggleTheme => state.toggle_theme(),
            KeyAction::Logout => state.logout(),
            KeyAction::Help => state.toggle_help(),
            KeyAction::Quit => return true,
        }
        false
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        let app_state = &self.app_state;
        let colors = self.colors;
        self.terminal.draw(|frame| {
            layout::render_layout(frame, app_state, colors);
        })?;
        Ok(())
    }
}

// ===== Test Helpers =====
//
// The following methods are ONLY for testing within the crate.
// They are gated with cfg to ensure they're not accessible from outside the crate.

#[cfg(test)]
#[allow(dead_code)] // Not all helpers used by every test module
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for testing (test-only constructor)
    ///
    /// This allows tests to construct TuiApp directly without going through
    /// terminal initialization. Used by acceptance test harness.
    pub(crate) fn new_for_test(
        terminal: Terminal<B>,
        app_state: AppState,
        key_bindings: KeyBindings,
    ) -> Self {
        Self {
            terminal,
            app_state,
            key_bindings,
            colors: ColorConfig::enabled(),
        }
    }

    /// Get reference to app state (test-only accessor)
    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Handle a single keyboard event (test-only accessor)
    ///
    /// Returns true if app should quit.
    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        self.handle_key(key)
    }

    /// Render a single frame (test-only accessor)
    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    /// Get reference to terminal (test-only accessor)
    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Initialize and run the TUI application
///
/// Handles terminal setup, runs the event loop, and restores the terminal
/// on exit, including when the loop fails.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run(app_state: AppState, colors: ColorConfig) -> Result<(), TuiError> {
    info!(
        users = app_state.store().len(),
        theme = %app_state.theme,
        "Starting TUI"
    );

    let result = match TuiApp::new(app_state, colors) {
        Ok(mut app) => app.run(),
        Err(error) => Err(error),
    };

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
