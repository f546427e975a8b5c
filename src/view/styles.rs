//! Presentation styling.
//!
//! Every widget asks the [`StyleTable`] for the style of its role instead of
//! building colours inline. Disabling colour swaps the whole table for a
//! monochrome one that keeps only text modifiers.

use ratatui::style::{Color, Modifier, Style};
use std::collections::HashMap;

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

    /// Colors on or off, without consulting the environment.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== WidgetRole =====

/// What a piece of the screen is, for styling purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetRole {
    /// Application and section titles.
    Title,
    /// One-line description under a title.
    Info,
    /// Heading of a single calculator.
    PanelTitle,
    /// Label above or beside an input.
    FieldLabel,
    /// Input without focus.
    Field,
    /// Input with focus.
    FocusedField,
    /// Placeholder text in an empty input.
    Placeholder,
    /// Cursor cell in the focused input.
    Cursor,
    /// Time calculator operator.
    Operator,
    /// Output before any calculation.
    OutputDefault,
    /// Output showing a result.
    OutputValid,
    /// Output showing an error message.
    OutputInvalid,
    /// Calculation log text.
    Log,
    /// Block borders.
    Border,
    /// Border of the panel owning the focused field.
    FocusedBorder,
    /// Key hints in the status bar.
    StatusBar,
    /// Key names in the help overlay.
    HelpKey,
    /// Descriptions in the help overlay.
    HelpText,
}

const NAVY: Color = Color::Blue;

const COLOR_STYLES: [(WidgetRole, Style); 18] = [
    (
        WidgetRole::Title,
        Style::new().fg(Color::White).bg(NAVY).add_modifier(Modifier::BOLD),
    ),
    (WidgetRole::Info, Style::new().add_modifier(Modifier::BOLD)),
    (
        WidgetRole::PanelTitle,
        Style::new().fg(Color::White).bg(NAVY).add_modifier(Modifier::BOLD),
    ),
    (WidgetRole::FieldLabel, Style::new().add_modifier(Modifier::BOLD)),
    (WidgetRole::Field, Style::new().fg(Color::Black).bg(Color::Gray)),
    (WidgetRole::FocusedField, Style::new().fg(Color::Black).bg(Color::White)),
    (
        WidgetRole::Placeholder,
        Style::new().fg(Color::DarkGray).bg(Color::Gray),
    ),
    (
        WidgetRole::Cursor,
        Style::new().fg(Color::White).bg(Color::Black).add_modifier(Modifier::BOLD),
    ),
    (
        WidgetRole::Operator,
        Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    ),
    (WidgetRole::OutputDefault, Style::new()),
    (
        WidgetRole::OutputValid,
        Style::new().fg(Color::LightBlue).add_modifier(Modifier::BOLD),
    ),
    (
        WidgetRole::OutputInvalid,
        Style::new().fg(Color::Red).add_modifier(Modifier::BOLD),
    ),
    (
        WidgetRole::Log,
        Style::new().fg(Color::White).bg(NAVY).add_modifier(Modifier::BOLD),
    ),
    (WidgetRole::Border, Style::new().fg(Color::DarkGray)),
    (WidgetRole::FocusedBorder, Style::new().fg(Color::Cyan)),
    (WidgetRole::StatusBar, Style::new().fg(Color::DarkGray)),
    (
        WidgetRole::HelpKey,
        Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    ),
    (WidgetRole::HelpText, Style::new().fg(Color::White)),
];

const MONOCHROME_STYLES: [(WidgetRole, Style); 18] = [
    (WidgetRole::Title, Style::new().add_modifier(Modifier::BOLD)),
    (WidgetRole::Info, Style::new()),
    (WidgetRole::PanelTitle, Style::new().add_modifier(Modifier::BOLD)),
    (WidgetRole::FieldLabel, Style::new()),
    (WidgetRole::Field, Style::new()),
    (WidgetRole::FocusedField, Style::new().add_modifier(Modifier::UNDERLINED)),
    (WidgetRole::Placeholder, Style::new().add_modifier(Modifier::DIM)),
    (WidgetRole::Cursor, Style::new().add_modifier(Modifier::REVERSED)),
    (WidgetRole::Operator, Style::new().add_modifier(Modifier::BOLD)),
    (WidgetRole::OutputDefault, Style::new()),
    (WidgetRole::OutputValid, Style::new().add_modifier(Modifier::BOLD)),
    (WidgetRole::OutputInvalid, Style::new().add_modifier(Modifier::BOLD)),
    (WidgetRole::Log, Style::new()),
    (WidgetRole::Border, Style::new()),
    (WidgetRole::FocusedBorder, Style::new().add_modifier(Modifier::BOLD)),
    (WidgetRole::StatusBar, Style::new()),
    (WidgetRole::HelpKey, Style::new().add_modifier(Modifier::BOLD)),
    (WidgetRole::HelpText, Style::new()),
];

// ===== StyleTable =====

/// Style lookup keyed by [`WidgetRole`].
#[derive(Debug, Clone, PartialEq)]
pub struct StyleTable {
    styles: HashMap<WidgetRole, Style>,
}

impl StyleTable {
    /// Build the table for the given color configuration.
    pub fn with_color_config(config: ColorConfig) -> Self {
        let source = if config.colors_enabled() {
            &COLOR_STYLES
        } else {
            &MONOCHROME_STYLES
        };
        Self {
            styles: source.iter().copied().collect(),
        }
    }

    /// Style for `role`. Unlisted roles render unstyled.
    pub fn style(&self, role: WidgetRole) -> Style {
        self.styles.get(&role).copied().unwrap_or_default()
    }
}

// ===== Tests =====
