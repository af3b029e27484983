//! Logged-out placeholder screen.

use super::constants::LOGIN_WIDTH;
use super::helpers::{centered_fixed, empty_line};
use super::styles::Palette;
use crate::state::ThemeMode;
use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const LOGIN_HEIGHT: u16 = 9;

/// Label of the theme button: names the theme it switches to.
pub fn toggle_theme_label(theme: ThemeMode) -> &'static str {
    match theme {
        ThemeMode::Light => "Toggle Dark Mode",
        ThemeMode::Dark => "Toggle Light Mode",
    }
}

/// Render the login panel centered on a themed background.
pub fn render_login(frame: &mut Frame, theme: ThemeMode, palette: &Palette) {
    let screen = frame.area();
    frame.render_widget(Block::default().style(palette.screen()), screen);

    let area = centered_fixed(LOGIN_WIDTH, LOGIN_HEIGHT, screen);
    let lines = vec![
        Line::from(Span::styled("Login", palette.heading())),
        empty_line(),
        Line::from("You have been logged out."),
        empty_line(),
        Line::from(vec![
            Span::styled(" Enter ", palette.accent_bar()),
            Span::raw(" Log Back In"),
        ]),
        Line::from(vec![
            Span::styled("   t   ", palette.heading()),
            Span::raw(format!(" {}", toggle_theme_label(theme))),
        ]),
        Line::from(vec![
            Span::styled("   q   ", palette.heading()),
            Span::raw(" Quit"),
        ]),
    ];

    let panel = Paragraph::new(lines).alignment(Alignment::Left).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(palette.border())
            .style(palette.panel()),
    );
    frame.render_widget(panel, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_harness::buffer_to_string;
    use crate::view::styles::ColorConfig;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render(theme: ThemeMode) -> String {
        let palette = Palette::new(theme, ColorConfig::enabled());
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|frame| render_login(frame, theme, &palette))
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn shows_logged_out_message_and_actions() {
        let output = render(ThemeMode::Light);
        assert!(output.contains("Login"), "got:\n{}", output);
        assert!(output.contains("You have been logged out."));
        assert!(output.contains("Log Back In"));
        assert!(output.contains("Toggle Dark Mode"));
    }

    #[test]
    fn theme_button_names_the_other_theme() {
        assert_eq!(toggle_theme_label(ThemeMode::Light), "Toggle Dark Mode");
        assert_eq!(toggle_theme_label(ThemeMode::Dark), "Toggle Light Mode");
        assert!(render(ThemeMode::Dark).contains("Toggle Light Mode"));
    }
}
