//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

/// Height of the title bar in lines.
pub const HEADER_HEIGHT: u16 = 1;

/// Height of the time calculator section (border + info + labels + inputs).
pub const TIME_CALCULATOR_HEIGHT: u16 = 5;

/// Height of the pace calculator section.
///
/// Border and info line around three panels of five rows plus their own borders.
pub const PACE_CALCULATOR_HEIGHT: u16 = 10;

/// Minimum height of the log pane in lines (border + one entry).
pub const LOG_MIN_HEIGHT: u16 = 3;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Display width of an input field or output, in cells.
pub const FIELD_WIDTH: usize = 10;

/// Gap between the time calculator inputs and its operator or result.
pub const OPERATOR_GAP: &str = "  ";

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 70;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;

/// Width of the key column in the help overlay, in cells.
pub const HELP_KEY_COLUMN_WIDTH: usize = 20;
