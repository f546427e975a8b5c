//! Application state and transitions.
//!
//! AppState is the view-model behind the TUI: field contents, outputs,
//! focus, the operator and the calculation log. All transitions are plain
//! methods with no terminal access, so every behaviour is testable without
//! rendering.

use crate::model::{Calculation, CalculationLog, CalculatorError};
use crate::state::field::InputField;
use crate::state::panel::{Operator, OutputStatus, Panel, PanelId};
use tracing::{debug, warn};

/// Lines the log moves per scroll action.
pub const LOG_SCROLL_STEP: u16 = 5;

/// Which of a panel's two inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldSlot {
    /// Left / top input.
    First,
    /// Right / bottom input.
    Second,
}

/// A single input field on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldFocus {
    /// Owning panel.
    pub panel: PanelId,
    /// Which input of the panel.
    pub slot: FieldSlot,
}

impl FieldFocus {
    /// Every field in focus order: panel by panel, first then second.
    pub const ORDER: [FieldFocus; 8] = [
        FieldFocus::new(PanelId::TimeCalculator, FieldSlot::First),
        FieldFocus::new(PanelId::TimeCalculator, FieldSlot::Second),
        FieldFocus::new(PanelId::Pace, FieldSlot::First),
        FieldFocus::new(PanelId::Pace, FieldSlot::Second),
        FieldFocus::new(PanelId::Time, FieldSlot::First),
        FieldFocus::new(PanelId::Time, FieldSlot::Second),
        FieldFocus::new(PanelId::Distance, FieldSlot::First),
        FieldFocus::new(PanelId::Distance, FieldSlot::Second),
    ];

    /// Focus on `slot` of `panel`.
    pub const fn new(panel: PanelId, slot: FieldSlot) -> Self {
        Self { panel, slot }
    }

    fn position(self) -> usize {
        let slot = match self.slot {
            FieldSlot::First => 0,
            FieldSlot::Second => 1,
        };
        self.panel.index() * 2 + slot
    }

    /// The following field, wrapping around.
    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    /// The preceding field, wrapping around.
    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }
}

impl Default for FieldFocus {
    fn default() -> Self {
        Self::ORDER[0]
    }
}

/// Application state. Pure data, no side effects.
#[derive(Debug, Clone)]
pub struct AppState {
    panels: [Panel; 4],

    /// Operator of the time calculator.
    pub operator: Operator,

    /// Field receiving typed characters.
    pub focus: FieldFocus,

    log: CalculationLog,

    /// Whether the log pane is drawn.
    pub log_visible: bool,

    /// Whether the help overlay is currently visible.
    pub help_visible: bool,

    /// Lines of the log scrolled past, counted from the newest entry.
    pub log_scroll: u16,

    /// Lines of the help overlay scrolled past.
    pub help_scroll: u16,
}

impl AppState {
    /// Create new AppState with empty fields and an empty log.
    pub fn new(log_visible: bool) -> Self {
        Self {
            panels: PanelId::ALL.map(Panel::new),
            operator: Operator::default(),
            focus: FieldFocus::default(),
            log: CalculationLog::new(),
            log_visible,
            help_visible: false,
            log_scroll: 0,
            help_scroll: 0,
        }
    }

    /// Panel by id.
    pub fn panel(&self, id: PanelId) -> &Panel {
        &self.panels[id.index()]
    }

    /// Mutable panel by id.
    pub fn panel_mut(&mut self, id: PanelId) -> &mut Panel {
        &mut self.panels[id.index()]
    }

    /// The focused input field.
    pub fn focused_field_mut(&mut self) -> &mut InputField {
        let FieldFocus { panel, slot } = self.focus;
        let panel = self.panel_mut(panel);
        match slot {
            FieldSlot::First => &mut panel.first,
            FieldSlot::Second => &mut panel.second,
        }
    }

    /// The calculation log.
    pub fn log(&self) -> &CalculationLog {
        &self.log
    }

    /// Move focus to the next field.
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Move focus to the previous field.
    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Type a character into the focused field.
    ///
    /// Returns whether the field accepted it.
    pub fn insert_char(&mut self, ch: char) -> bool {
        self.focused_field_mut().insert_char(ch)
    }

    /// Calculate the panel owning the focused field.
    ///
    /// # Errors
    ///
    /// The calculation error, which is also shown in the panel output.
    pub fn calculate_focused(&mut self) -> Result<String, CalculatorError> {
        self.calculate(self.focus.panel)
    }

    /// Calculate `id` from its current inputs.
    ///
    /// On success the output shows the result and a log entry is prepended.
    /// On failure the output shows the error message and the log is unchanged.
    ///
    /// # Errors
    ///
    /// The calculation error.
    pub fn calculate(&mut self, id: PanelId) -> Result<String, CalculatorError> {
        let outcome = {
            let panel = &self.panels[id.index()];
            let kind = id.log_kind(self.operator);
            Calculation::new(kind, panel.first.text(), panel.second.text())
                .evaluate_into(&mut self.log)
        };

        let output = match &outcome {
            Ok(result) => {
                debug!(panel = ?id, %result, "calculation succeeded");
                // Newest entry is prepended; bring it into view
                self.log_scroll = 0;
                OutputStatus::Valid(result.clone())
            }
            Err(err) => {
                warn!(panel = ?id, kind = err.kind(), ?err, "calculation failed");
                OutputStatus::Invalid(err.to_string())
            }
        };
        self.panel_mut(id).set_output(output);

        outcome
    }

    /// Set the time calculator operator.
    pub fn set_operator(&mut self, operator: Operator) {
        self.operator = operator;
    }

    /// Flip the time calculator operator.
    pub fn toggle_operator(&mut self) {
        self.operator = self.operator.toggled();
    }

    /// Remove the newest log entry, if any.
    pub fn clear_latest(&mut self) {
        if let Some(entry) = self.log.clear_latest() {
            debug!(entry = %entry, "removed latest log entry");
        }
        self.clamp_log_scroll();
    }

    /// Remove every log entry.
    pub fn clear_all(&mut self) {
        debug!(count = self.log.len(), "clearing log");
        self.log.clear_all();
        self.log_scroll = 0;
    }

    /// Scroll the log towards older entries.
    ///
    /// Stops once the oldest entry is the first line shown.
    pub fn scroll_log_down(&mut self) {
        self.log_scroll = self
            .log_scroll
            .saturating_add(LOG_SCROLL_STEP)
            .min(self.max_log_scroll());
    }

    /// Scroll the log back towards the newest entry.
    pub fn scroll_log_up(&mut self) {
        self.log_scroll = self.log_scroll.saturating_sub(LOG_SCROLL_STEP);
    }

    fn max_log_scroll(&self) -> u16 {
        u16::try_from(self.log.len().saturating_sub(1)).unwrap_or(u16::MAX)
    }

    fn clamp_log_scroll(&mut self) {
        self.log_scroll = self.log_scroll.min(self.max_log_scroll());
    }

    /// Show or hide the log pane.
    pub fn toggle_log(&mut self) {
        self.log_visible = !self.log_visible;
    }

    /// Show or hide the help overlay. It always opens at the top.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
        self.help_scroll = 0;
    }

    /// Clear every field and output, restore `+` and empty the log.
    ///
    /// Focus, log visibility and help visibility are left as they are.
    pub fn reset(&mut self) {
        for panel in &mut self.panels {
            panel.reset();
        }
        self.operator = Operator::default();
        self.log.clear_all();
        self.log_scroll = 0;
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
