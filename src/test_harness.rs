//! Acceptance Test Harness for TUI testing
//!
//! Provides a high-level API for acceptance testing user stories by wrapping
//! TuiApp<TestBackend> with convenient methods for simulating user interactions.

use crate::config::keybindings::KeyBindings;
use crate::model::User;
use crate::state::AppState;
use crate::store::RecordStore;
use crate::view::{TuiApp, TuiError};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

/// Convert a ratatui buffer to a string representation for snapshot testing.
///
/// Captures the visual output character by character, preserving layout.
/// Empty lines are removed to keep snapshots clean.
pub(crate) fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            line.push_str(cell.symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// Test harness for acceptance testing
///
/// Wraps TuiApp<TestBackend> to provide a clean API for simulating user
/// interactions in acceptance tests.
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    running: bool,
}

impl AcceptanceTestHarness {
    /// Harness over the bundled demo users at 80x24.
    pub fn with_demo_users() -> Result<Self, TuiError> {
        let store = RecordStore::with_demo_users().map_err(std::io::Error::other)?;
        Self::with_store_and_size(store, 80, 24)
    }

    /// Harness over `users` at 80x24.
    #[allow(dead_code)]
    pub fn with_users(users: Vec<User>) -> Result<Self, TuiError> {
        Self::with_store_and_size(RecordStore::from_users(users), 80, 24)
    }

    /// Harness over `store` with a custom terminal size.
    pub fn with_store_and_size(
        store: RecordStore,
        width: u16,
        height: u16,
    ) -> Result<Self, TuiError> {
        let terminal = Terminal::new(TestBackend::new(width, height))?;
        let app = TuiApp::new_for_test(terminal, AppState::new(store), KeyBindings::default());

        Ok(Self { app, running: true })
    }

    /// Send a single key event
    ///
    /// # Returns
    /// * `true` - If app quit as a result of this key
    /// * `false` - If app is still running
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send key with modifiers (e.g., Ctrl+C)
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if !self.running {
            return true; // Already quit
        }

        let quit = self.app.handle_key_test(KeyEvent::new(key, mods));

        if quit {
            self.running = false;
        }

        quit
    }

    /// Send a sequence of keys
    ///
    /// Continues sending keys until the sequence is exhausted or app quits.
    #[allow(dead_code)]
    pub fn send_keys(&mut self, keys: &[KeyCode]) {
        for key in keys {
            if self.send_key(*key) {
                break;
            }
        }
    }

    /// Type text (sends individual character key events)
    ///
    /// Useful for search input and form fields.
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            if self.send_key(KeyCode::Char(ch)) {
                break;
            }
        }
    }

    /// Access app state for assertions
    pub fn state(&self) -> &AppState {
        self.app.app_state()
    }

    /// Check if app is still running (didn't quit)
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Render the current frame to a string
    ///
    /// # Panics
    /// Panics if rendering fails (should never happen with TestBackend)
    pub fn render_to_string(&mut self) -> String {
        self.app
            .render_test()
            .expect("Rendering should succeed in test harness");

        let buffer = self.app.terminal().backend().buffer();
        buffer_to_string(buffer)
    }
}
