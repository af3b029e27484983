//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
/// Form and search text entry bypass this table while they have focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Selection
    /// Select the next user card. Default: j/↓
    SelectNext,
    /// Select the previous user card. Default: k/↑
    SelectPrev,
    /// Select the first user card. Default: g/Home
    SelectFirst,
    /// Select the last user card. Default: G/End
    SelectLast,

    // Search
    /// Focus the search bar. Default: //Ctrl+f
    StartSearch,
    /// Clear the search term. Default: Esc
    ClearSearch,

    // Records
    /// Open the form on a blank draft. Default: n/c
    CreateUser,
    /// Open the form on the selected user. Default: e/Enter
    EditUser,
    /// Delete the selected user. Default: d/Delete
    DeleteUser,

    // Session and theme
    /// Switch between light and dark theme. Default: t
    ToggleTheme,
    /// Show the logged-out screen. Default: L
    ///
    /// Logging back in is handled by the login screen itself, which
    /// receives every key while logged out.
    Logout,

    // Application
    /// Show help overlay with keyboard shortcuts. Default: ?
    Help,
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}
