//! Session and theme flags.
//!
//! Both are cosmetic: `logged_in` only switches the main view for a login
//! placeholder, and the theme only changes colors. Neither touches records.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// ===== SessionState =====

/// Cosmetic login flag. Not a security boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionState {
    logged_in: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { logged_in: true }
    }
}

impl SessionState {
    /// Whether the main view is shown.
    pub fn is_logged_in(self) -> bool {
        self.logged_in
    }

    /// Show the main view.
    pub fn login(&mut self) {
        self.logged_in = true;
    }

    /// Show the login placeholder.
    pub fn logout(&mut self) {
        self.logged_in = false;
    }
}

// ===== ThemeMode =====

/// Presentational theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light backgrounds.
    #[default]
    Light,
    /// Dark backgrounds.
    Dark,
}

/// Error returned when parsing an unknown theme name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme '{0}', expected 'light' or 'dark'")]
pub struct UnknownTheme(pub String);

impl ThemeMode {
    /// The other theme.
    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Lowercase theme name.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

impl FromStr for ThemeMode {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            _ => Err(UnknownTheme(s.to_string())),
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_defaults_to_logged_in() {
        assert!(SessionState::default().is_logged_in());
    }

    #[test]
    fn logout_then_login_restores_flag() {
        let mut session = SessionState::default();
        session.logout();
        assert!(!session.is_logged_in());
        session.login();
        assert!(session.is_logged_in());
    }

    #[test]
    fn login_when_logged_in_is_idempotent() {
        let mut session = SessionState::default();
        session.login();
        assert!(session.is_logged_in());
    }

    #[test]
    fn theme_defaults_to_light() {
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
    }

    #[test]
    fn toggling_theme_twice_returns_original() {
        for theme in [ThemeMode::Light, ThemeMode::Dark] {
            assert_ne!(theme.toggle(), theme);
            assert_eq!(theme.toggle().toggle(), theme);
        }
    }

    #[test]
    fn theme_parses_case_insensitively() {
        assert_eq!("Dark".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert_eq!(" light ".parse::<ThemeMode>(), Ok(ThemeMode::Light));
    }

    #[test]
    fn theme_parse_rejects_unknown_name() {
        let err = "solarized".parse::<ThemeMode>().unwrap_err();
        assert_eq!(err, UnknownTheme("solarized".to_string()));
        assert!(err.to_string().contains("solarized"));
    }

    #[test]
    fn theme_display_round_trips_through_parse() {
        for theme in [ThemeMode::Light, ThemeMode::Dark] {
            assert_eq!(theme.to_string().parse::<ThemeMode>(), Ok(theme));
        }
    }
}
