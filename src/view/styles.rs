//! Theme palettes and color configuration.
//!
//! Every widget takes its colors from a [`Palette`] so the light/dark toggle
//! and `--no-color` are applied in one place.

use crate::model::UserStatus;
use crate::state::ThemeMode;
use ratatui::style::{Color, Modifier, Style};

/// Brand accent used for the header bar, badges and focused borders.
pub const ACCENT: Color = Color::Rgb(0x32, 0x51, 0xD0);

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Colors on, regardless of environment.
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self::enabled()
    }
}

// ===== Palette =====

/// Resolved colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Screen background.
    pub background: Color,
    /// Card and modal background.
    pub surface: Color,
    /// Primary text.
    pub text: Color,
    /// Secondary text (card details, placeholders, hints).
    pub muted: Color,
    /// Brand accent.
    pub accent: Color,
    /// Text drawn on top of the accent.
    pub on_accent: Color,
    /// "active" status.
    pub active: Color,
    /// "locked" status and validation errors.
    pub danger: Color,
    colored: bool,
}

impl Palette {
    /// Palette for `theme`, or a colorless one when colors are disabled.
    pub fn new(theme: ThemeMode, colors: ColorConfig) -> Self {
        if !colors.colors_enabled() {
            return Self::monochrome();
        }
        match theme {
            ThemeMode::Light => Self {
                background: Color::Rgb(0xF9, 0xFA, 0xFB),
                surface: Color::Rgb(0xFF, 0xFF, 0xFF),
                text: Color::Rgb(0x11, 0x18, 0x27),
                muted: Color::Rgb(0x4B, 0x55, 0x63),
                accent: ACCENT,
                on_accent: Color::White,
                active: Color::Rgb(0x22, 0xC5, 0x5E),
                danger: Color::Rgb(0xEF, 0x44, 0x44),
                colored: true,
            },
            ThemeMode::Dark => Self {
                background: Color::Rgb(0x1F, 0x29, 0x37),
                surface: Color::Rgb(0x37, 0x41, 0x51),
                text: Color::White,
                muted: Color::Rgb(0xD1, 0xD5, 0xDB),
                accent: ACCENT,
                on_accent: Color::White,
                active: Color::Rgb(0x22, 0xC5, 0x5E),
                danger: Color::Rgb(0xEF, 0x44, 0x44),
                colored: true,
            },
        }
    }

    fn monochrome() -> Self {
        Self {
            background: Color::Reset,
            surface: Color::Reset,
            text: Color::Reset,
            muted: Color::Reset,
            accent: Color::Reset,
            on_accent: Color::Reset,
            active: Color::Reset,
            danger: Color::Reset,
            colored: false,
        }
    }

    /// Whether this palette carries any color.
    pub fn is_colored(&self) -> bool {
        self.colored
    }

    /// Base style for the whole screen.
    pub fn screen(&self) -> Style {
        Style::default().bg(self.background).fg(self.text)
    }

    /// Base style for cards and modals.
    pub fn panel(&self) -> Style {
        Style::default().bg(self.surface).fg(self.text)
    }

    /// Secondary text.
    pub fn muted_text(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Bold accent text, used for titles and key names.
    pub fn heading(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Accent bar (header, initials badge, primary buttons).
    ///
    /// Without colors the bar is drawn reversed so it still stands out.
    pub fn accent_bar(&self) -> Style {
        if self.colored {
            Style::default()
                .bg(self.accent)
                .fg(self.on_accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
        }
    }

    /// Border of an unfocused element.
    pub fn border(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Border of the focused or selected element.
    pub fn focused_border(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Color for an account status.
    pub fn status(&self, status: UserStatus) -> Style {
        match status {
            UserStatus::Active => Style::default().fg(self.active),
            UserStatus::Locked => Style::default().fg(self.danger),
        }
    }

    /// Validation error banner.
    pub fn error(&self) -> Style {
        Style::default()
            .fg(self.danger)
            .add_modifier(Modifier::BOLD)
    }
}

// ===== Tests =====
