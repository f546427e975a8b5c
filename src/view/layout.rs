//! Screen layout rendering.
//!
//! Top to bottom: title bar, time calculator, pace calculator (three panels
//! side by side), calculation log, status bar. Everything is drawn from
//! [`AppState`]; nothing here mutates it.

use super::constants::{
    FIELD_WIDTH, HEADER_HEIGHT, LOG_MIN_HEIGHT, OPERATOR_GAP, PACE_CALCULATOR_HEIGHT,
    STATUS_BAR_HEIGHT, TIME_CALCULATOR_HEIGHT,
};
use super::styles::{StyleTable, WidgetRole};
use crate::state::{AppState, FieldFocus, FieldSlot, InputField, OutputStatus, Panel, PanelId};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const APP_TITLE: &str = " Pace & Time Calculator ";
const TIME_CALCULATOR_INFO: &str = "Add or subtract time.";
const PACE_CALCULATOR_INFO: &str = "Calculate a pace, an overall time, or an overall distance.";
const LOG_INFO: &str = "Summary of previous calculations.";
const STATUS_HINTS: &str =
    " Enter calculate │ Tab next │ +/- operator │ ^Z/^X clear log │ ^R reset │ ? help │ Esc quit";

/// Render the whole screen.
pub fn render_layout(frame: &mut Frame, state: &AppState, styles: &StyleTable) {
    let log_constraint = if state.log_visible {
        Constraint::Min(LOG_MIN_HEIGHT)
    } else {
        Constraint::Min(0)
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(TIME_CALCULATOR_HEIGHT),
            Constraint::Length(PACE_CALCULATOR_HEIGHT),
            log_constraint,
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(frame.area());

    render_header(frame, chunks[0], styles);
    render_time_calculator(frame, chunks[1], state, styles);
    render_pace_calculator(frame, chunks[2], state, styles);
    if state.log_visible {
        render_log(frame, chunks[3], state, styles);
    }
    render_status_bar(frame, chunks[4], styles);

    if state.help_visible {
        super::help::render_help_overlay(frame, styles, state.help_scroll);
    }
}

fn render_header(frame: &mut Frame, area: Rect, styles: &StyleTable) {
    let header = Paragraph::new(Line::from(Span::styled(
        APP_TITLE,
        styles.style(WidgetRole::Title),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(header, area);
}

fn section_block(title: &str, focused: bool, styles: &StyleTable) -> Block<'static> {
    let border_role = if focused {
        WidgetRole::FocusedBorder
    } else {
        WidgetRole::Border
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(styles.style(border_role))
        .title(Span::styled(
            format!(" {title} "),
            styles.style(WidgetRole::PanelTitle),
        ))
        .title_alignment(Alignment::Center)
}

fn render_time_calculator(frame: &mut Frame, area: Rect, state: &AppState, styles: &StyleTable) {
    let id = PanelId::TimeCalculator;
    let panel = state.panel(id);
    let focused = state.focus.panel == id;

    let (first_label, second_label) = id.labels();
    let gap_width = OPERATOR_GAP.len() * 2 + 1;
    let labels = Line::from(vec![
        Span::styled(pad(first_label), styles.style(WidgetRole::FieldLabel)),
        Span::raw(" ".repeat(gap_width)),
        Span::styled(pad(second_label), styles.style(WidgetRole::FieldLabel)),
        Span::raw(" ".repeat(gap_width)),
        Span::styled(pad("Result"), styles.style(WidgetRole::FieldLabel)),
    ]);

    let mut inputs = Vec::new();
    inputs.extend(field_spans(
        &panel.first,
        state.focus == FieldFocus::new(id, FieldSlot::First),
        styles,
    ));
    inputs.push(Span::styled(
        format!("{OPERATOR_GAP}{}{OPERATOR_GAP}", state.operator.symbol()),
        styles.style(WidgetRole::Operator),
    ));
    inputs.extend(field_spans(
        &panel.second,
        state.focus == FieldFocus::new(id, FieldSlot::Second),
        styles,
    ));
    inputs.push(Span::raw(format!("{OPERATOR_GAP}={OPERATOR_GAP}")));
    inputs.push(output_span(panel, styles));

    let lines = vec![
        Line::from(Span::styled(
            TIME_CALCULATOR_INFO,
            styles.style(WidgetRole::Info),
        )),
        labels,
        Line::from(inputs),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(section_block(id.title(), focused, styles));
    frame.render_widget(paragraph, area);
}

fn render_pace_calculator(frame: &mut Frame, area: Rect, state: &AppState, styles: &StyleTable) {
    let any_focused = state.focus.panel != PanelId::TimeCalculator;
    let block = section_block("Pace Calculator", any_focused, styles);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let info = Paragraph::new(Line::from(Span::styled(
        PACE_CALCULATOR_INFO,
        styles.style(WidgetRole::Info),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(info, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(rows[1]);

    for (id, column) in [PanelId::Pace, PanelId::Time, PanelId::Distance]
        .into_iter()
        .zip(columns.iter())
    {
        render_derive_panel(frame, *column, state, id, styles);
    }
}

fn render_derive_panel(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    id: PanelId,
    styles: &StyleTable,
) {
    let panel = state.panel(id);
    let (first_label, second_label) = id.labels();
    let label_style = styles.style(WidgetRole::FieldLabel);

    let lines = vec![
        Line::from(Span::styled(first_label, label_style)),
        Line::from(field_spans(
            &panel.first,
            state.focus == FieldFocus::new(id, FieldSlot::First),
            styles,
        )),
        Line::from(Span::styled(second_label, label_style)),
        Line::from(field_spans(
            &panel.second,
            state.focus == FieldFocus::new(id, FieldSlot::Second),
            styles,
        )),
        Line::from(output_span(panel, styles)),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(section_block(id.title(), state.focus.panel == id, styles));
    frame.render_widget(paragraph, area);
}

fn render_log(frame: &mut Frame, area: Rect, state: &AppState, styles: &StyleTable) {
    let log = state.log();
    let title = format!("Log ({})", log.len());
    let block = section_block(&title, false, styles);

    let paragraph = if log.is_empty() {
        Paragraph::new(Line::from(Span::styled(
            LOG_INFO,
            styles.style(WidgetRole::Placeholder),
        )))
        .alignment(Alignment::Center)
    } else {
        let lines: Vec<Line> = log
            .entries()
            .map(|entry| Line::from(Span::styled(entry.text(), styles.style(WidgetRole::Log))))
            .collect();
        Paragraph::new(lines).scroll((state.log_scroll, 0))
    };

    frame.render_widget(paragraph.block(block), area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, styles: &StyleTable) {
    let status = Paragraph::new(Line::from(Span::styled(
        STATUS_HINTS,
        styles.style(WidgetRole::StatusBar),
    )));
    frame.render_widget(status, area);
}

/// Left-align `text` in a field-wide cell.
fn pad(text: &str) -> String {
    format!("{text:<FIELD_WIDTH$}")
}

/// Spans for one input: placeholder when empty and unfocused, otherwise the
/// text with a cursor cell when focused.
pub(crate) fn field_spans(
    field: &InputField,
    focused: bool,
    styles: &StyleTable,
) -> Vec<Span<'static>> {
    if !focused {
        if field.is_empty() {
            return vec![Span::styled(
                pad(field.kind().placeholder()),
                styles.style(WidgetRole::Placeholder),
            )];
        }
        return vec![Span::styled(pad(field.text()), styles.style(WidgetRole::Field))];
    }

    let text = field.text();
    let cursor = field.cursor();
    let before = &text[..cursor];
    let (cursor_cell, after) = match text[cursor..].chars().next() {
        Some(ch) => (ch.to_string(), &text[cursor + ch.len_utf8()..]),
        None => (" ".to_string(), ""),
    };

    let used = before.len() + 1 + after.len();
    let fill = " ".repeat(FIELD_WIDTH.saturating_sub(used));
    let field_style = styles.style(WidgetRole::FocusedField);

    vec![
        Span::styled(before.to_string(), field_style),
        Span::styled(cursor_cell, styles.style(WidgetRole::Cursor)),
        Span::styled(format!("{after}{fill}"), field_style),
    ]
}

/// The panel output, styled by status.
pub(crate) fn output_span(panel: &Panel, styles: &StyleTable) -> Span<'static> {
    let role = match panel.output() {
        OutputStatus::Default => WidgetRole::OutputDefault,
        OutputStatus::Valid(_) => WidgetRole::OutputValid,
        OutputStatus::Invalid(_) => WidgetRole::OutputInvalid,
    };
    Span::styled(pad(panel.output_text()), styles.style(role))
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
