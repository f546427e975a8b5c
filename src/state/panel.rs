//! Calculator panels: two inputs and an output each.

use crate::model::LogKind;
use crate::state::field::{FieldKind, InputField};

/// The four calculators on screen, in reading order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelId {
    /// Add or subtract two timestamps.
    TimeCalculator,
    /// Pace from time and distance.
    Pace,
    /// Time from pace and distance.
    Time,
    /// Distance from time and pace.
    Distance,
}

impl PanelId {
    /// Every panel in reading order.
    pub const ALL: [PanelId; 4] = [
        PanelId::TimeCalculator,
        PanelId::Pace,
        PanelId::Time,
        PanelId::Distance,
    ];

    /// Position in [`PanelId::ALL`].
    pub fn index(self) -> usize {
        match self {
            PanelId::TimeCalculator => 0,
            PanelId::Pace => 1,
            PanelId::Time => 2,
            PanelId::Distance => 3,
        }
    }

    /// Panel heading.
    pub fn title(self) -> &'static str {
        match self {
            PanelId::TimeCalculator => "Time Calculator",
            PanelId::Pace => "Pace",
            PanelId::Time => "Time",
            PanelId::Distance => "Distance",
        }
    }

    /// Labels of the two inputs.
    pub fn labels(self) -> (&'static str, &'static str) {
        match self {
            PanelId::TimeCalculator => ("Time", "Time"),
            PanelId::Pace => ("Time", "Distance"),
            PanelId::Time => ("Pace", "Distance"),
            PanelId::Distance => ("Time", "Pace"),
        }
    }

    /// Kinds of the two inputs.
    pub fn field_kinds(self) -> (FieldKind, FieldKind) {
        match self {
            PanelId::TimeCalculator | PanelId::Distance => {
                (FieldKind::Timestamp, FieldKind::Timestamp)
            }
            PanelId::Pace | PanelId::Time => (FieldKind::Timestamp, FieldKind::Distance),
        }
    }

    /// Output text before anything has been calculated.
    pub fn output_placeholder(self) -> &'static str {
        match self {
            PanelId::Distance => "0.0",
            _ => "00:00:00",
        }
    }

    /// Log template for this panel. The time calculator depends on its operator.
    pub fn log_kind(self, operator: Operator) -> LogKind {
        match self {
            PanelId::TimeCalculator => operator.log_kind(),
            PanelId::Pace => LogKind::Pace,
            PanelId::Time => LogKind::Time,
            PanelId::Distance => LogKind::Distance,
        }
    }
}

/// Time calculator operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Operator {
    /// Addition.
    #[default]
    Add,
    /// Subtraction.
    Subtract,
}

impl Operator {
    /// `+` or `-`.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
        }
    }

    /// The other operator.
    pub fn toggled(self) -> Self {
        match self {
            Operator::Add => Operator::Subtract,
            Operator::Subtract => Operator::Add,
        }
    }

    /// Log template for this operator.
    pub fn log_kind(self) -> LogKind {
        match self {
            Operator::Add => LogKind::Add,
            Operator::Subtract => LogKind::Subtract,
        }
    }
}

/// What an output currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OutputStatus {
    /// Nothing calculated yet; the placeholder is shown.
    #[default]
    Default,
    /// Result of the last calculation.
    Valid(String),
    /// Error message of the last calculation.
    Invalid(String),
}

/// One calculator: two inputs and an output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    id: PanelId,
    /// First input in reading order.
    pub first: InputField,
    /// Second input in reading order.
    pub second: InputField,
    output: OutputStatus,
}

impl Panel {
    /// Create an empty panel.
    pub fn new(id: PanelId) -> Self {
        let (first, second) = id.field_kinds();
        Self {
            id,
            first: InputField::new(first),
            second: InputField::new(second),
            output: OutputStatus::Default,
        }
    }

    /// Current output status.
    pub fn output(&self) -> &OutputStatus {
        &self.output
    }

    /// Text the output shows right now.
    pub fn output_text(&self) -> &str {
        match &self.output {
            OutputStatus::Default => self.id.output_placeholder(),
            OutputStatus::Valid(text) | OutputStatus::Invalid(text) => text,
        }
    }

    /// Replace the output.
    pub fn set_output(&mut self, output: OutputStatus) {
        self.output = output;
    }

    /// Clear both inputs and the output.
    pub fn reset(&mut self) {
        self.first.clear();
        self.second.clear();
        self.output = OutputStatus::Default;
    }
}
