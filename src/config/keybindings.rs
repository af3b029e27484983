//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Provides default vim-style bindings for the browsing view.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    ///
    /// Shifted letters are reported by some terminals with `SHIFT` and by
    /// others without it, so an uppercase char falls back to the other form.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        let key = KeyEvent::new(key.code, key.modifiers);
        if let Some(action) = self.bindings.get(&key) {
            return Some(*action);
        }
        match key.code {
            KeyCode::Char(ch) if ch.is_uppercase() => {
                let toggled = key.modifiers ^ KeyModifiers::SHIFT;
                self.bindings.get(&KeyEvent::new(key.code, toggled)).copied()
            }
            _ => None,
        }
    }

    /// Bind `key` with no modifiers.
    fn bind(&mut self, code: KeyCode, action: KeyAction) {
        self.bind_with(code, KeyModifiers::NONE, action);
    }

    fn bind_with(&mut self, code: KeyCode, modifiers: KeyModifiers, action: KeyAction) {
        self.bindings.insert(KeyEvent::new(code, modifiers), action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut keys = Self {
            bindings: HashMap::new(),
        };

        // Selection
        keys.bind(KeyCode::Char('j'), KeyAction::SelectNext);
        keys.bind(KeyCode::Down, KeyAction::SelectNext);
        keys.bind(KeyCode::Char('k'), KeyAction::SelectPrev);
        keys.bind(KeyCode::Up, KeyAction::SelectPrev);
        keys.bind(KeyCode::Char('g'), KeyAction::SelectFirst);
        keys.bind(KeyCode::Home, KeyAction::SelectFirst);
        keys.bind_with(KeyCode::Char('G'), KeyModifiers::SHIFT, KeyAction::SelectLast);
        keys.bind(KeyCode::End, KeyAction::SelectLast);

        // Search
        keys.bind(KeyCode::Char('/'), KeyAction::StartSearch);
        keys.bind_with(KeyCode::Char('f'), KeyModifiers::CONTROL, KeyAction::StartSearch);
        keys.bind(KeyCode::Esc, KeyAction::ClearSearch);

        // Records
        keys.bind(KeyCode::Char('n'), KeyAction::CreateUser);
        keys.bind(KeyCode::Char('c'), KeyAction::CreateUser);
        keys.bind(KeyCode::Char('e'), KeyAction::EditUser);
        keys.bind(KeyCode::Enter, KeyAction::EditUser);
        keys.bind(KeyCode::Char('d'), KeyAction::DeleteUser);
        keys.bind(KeyCode::Delete, KeyAction::DeleteUser);

        // Session and theme
        keys.bind(KeyCode::Char('t'), KeyAction::ToggleTheme);
        keys.bind_with(KeyCode::Char('L'), KeyModifiers::SHIFT, KeyAction::Logout);

        // Application
        keys.bind(KeyCode::Char('?'), KeyAction::Help);
        keys.bind(KeyCode::Char('q'), KeyAction::Quit);
        keys.bind_with(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);

        keys
    }
}
