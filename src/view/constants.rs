//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

/// Height of the header bar in lines.
pub const HEADER_HEIGHT: u16 = 1;

/// Height of the search bar in lines (border + input).
pub const SEARCH_INPUT_HEIGHT: u16 = 3;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Height of one user card (border + badge row + three detail rows).
pub const CARD_HEIGHT: u16 = 6;

/// Narrowest card before the grid drops a column.
pub const CARD_MIN_WIDTH: u16 = 34;

/// Upper bound on grid columns, however wide the terminal.
pub const MAX_CARD_COLUMNS: u16 = 4;

/// Width of the user form modal in columns.
pub const FORM_WIDTH: u16 = 60;

/// Width of the login panel in columns.
pub const LOGIN_WIDTH: u16 = 44;

/// Width percentage for help overlay popup.
///
/// Percentage of screen width (0-100) for the help overlay modal.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 70;

/// Height percentage for help overlay popup.
///
/// Percentage of screen height (0-100) for the help overlay modal.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;
