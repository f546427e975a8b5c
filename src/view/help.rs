//! Help overlay widget displaying keyboard shortcuts.
//!
//! Shows a centered modal overlay with all keyboard shortcuts grouped by category.
//! Triggered by '?' or F1, dismissed by the same keys or 'Esc'. Scrolls
//! when the terminal is too short to show every binding.

use super::constants::{HELP_KEY_COLUMN_WIDTH, HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::styles::{StyleTable, WidgetRole};
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Shortcut groups shown in the overlay: category, then (keys, description).
const HELP_SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Fields",
        &[
            ("Tab / ↓", "Next field"),
            ("Shift+Tab / ↑", "Previous field"),
            ("← / →", "Move cursor"),
            ("Home / End", "Start / end of field"),
            ("Backspace / Del", "Delete character"),
            ("Ctrl+u", "Clear field"),
        ],
    ),
    (
        "Calculate",
        &[
            ("Enter", "Calculate the focused panel"),
            ("+ / -", "Add / subtract in the time calculator"),
            ("Ctrl+o", "Toggle + / -"),
        ],
    ),
    (
        "Log",
        &[
            ("Ctrl+z", "Clear latest entry"),
            ("Ctrl+x", "Clear all entries"),
            ("F2", "Show / hide log"),
            ("PgUp / PgDn", "Scroll log"),
        ],
    ),
    (
        "Application",
        &[
            ("Ctrl+r", "Reset fields, outputs and log"),
            ("? / F1", "Toggle this help"),
            ("↑ / ↓ / PgUp / PgDn", "Scroll this help"),
            ("Esc / Ctrl+q", "Quit"),
        ],
    ),
];

/// Number of lines in the overlay content, before wrapping.
pub fn help_line_count() -> u16 {
    let shortcuts: usize = HELP_SECTIONS.iter().map(|(_, s)| s.len()).sum();
    let separators = HELP_SECTIONS.len().saturating_sub(1);
    u16::try_from(HELP_SECTIONS.len() + shortcuts + separators).unwrap_or(u16::MAX)
}

/// Render the help overlay centered on the screen.
///
/// `scroll_offset` is the content line shown at the top.
pub fn render_help_overlay(frame: &mut Frame, styles: &StyleTable, scroll_offset: u16) {
    let area = frame.area();
    let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, area);

    // Clear the background for the overlay
    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(styles))
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(styles.style(WidgetRole::FocusedBorder)),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left)
        .scroll((scroll_offset, 0));

    frame.render_widget(help_paragraph, popup_area);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1,
    };

    let hint = Paragraph::new(Line::from(vec![Span::styled(
        " Press Esc or ? to close ",
        styles.style(WidgetRole::StatusBar).add_modifier(Modifier::DIM),
    )]))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

/// Calculate the centered rect for the help overlay.
///
/// Returns a Rect that is centered on the screen with the specified
/// percentage of width and height.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = area.height * percent_y / 100;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

fn build_help_content(styles: &StyleTable) -> Vec<Line<'static>> {
    let category_style = styles.style(WidgetRole::Title);
    let key_style = styles.style(WidgetRole::HelpKey);
    let desc_style = styles.style(WidgetRole::HelpText);

    let mut lines = Vec::new();
    for (index, (category, shortcuts)) in HELP_SECTIONS.iter().enumerate() {
        if index > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(*category, category_style)));
        for (keys, description) in *shortcuts {
            let padding = HELP_KEY_COLUMN_WIDTH.saturating_sub(keys.width());
            lines.push(Line::from(vec![
                Span::styled(format!("  {keys}{}", " ".repeat(padding)), key_style),
                Span::styled(*description, desc_style),
            ]));
        }
    }
    lines
}
