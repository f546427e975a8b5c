//! Calculation log: newest-first history of calculation summaries.
//!
//! The log lives for one application run. Entries are formatted once when
//! appended and never change afterwards.

use std::collections::VecDeque;
use std::fmt;

/// Which calculation produced a log entry. Selects the entry template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogKind {
    /// Pace from time and distance.
    Pace,
    /// Time from pace and distance.
    Time,
    /// Distance from time and pace.
    Distance,
    /// Sum of two timestamps.
    Add,
    /// Difference of two timestamps.
    Subtract,
}

/// One immutable calculation summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    kind: LogKind,
    text: String,
}

impl LogEntry {
    /// Format an entry from the calculation inputs and its result.
    ///
    /// `first` and `second` are the raw input texts in panel order: time and
    /// distance for [`LogKind::Pace`], pace and distance for [`LogKind::Time`],
    /// time and pace for [`LogKind::Distance`], left and right for the
    /// arithmetic kinds.
    pub fn new(kind: LogKind, first: &str, second: &str, result: &str) -> Self {
        let text = match kind {
            LogKind::Pace => format!("{result}  Pace   where   T={first}   &   D={second}"),
            LogKind::Time => format!("{result}  Time   where   P={first}   &   D={second}"),
            LogKind::Distance => {
                format!("{result}  Distance   where   T={first}   &   P={second}")
            }
            LogKind::Add => format!("{result}  =  {first}  +  {second}"),
            LogKind::Subtract => format!("{result}  =  {first}  -  {second}"),
        };
        Self { kind, text }
    }

    /// The calculation kind this entry records.
    pub fn kind(&self) -> LogKind {
        self.kind
    }

    /// The formatted summary.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Ordered log of calculations, most recent first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalculationLog {
    entries: VecDeque<LogEntry>,
}

impl CalculationLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Format and prepend an entry.
    pub fn append(&mut self, kind: LogKind, first: &str, second: &str, result: &str) {
        self.entries
            .push_front(LogEntry::new(kind, first, second, result));
    }

    /// Remove the most recent entry. No-op on an empty log.
    pub fn clear_latest(&mut self) -> Option<LogEntry> {
        self.entries.pop_front()
    }

    /// Remove every entry.
    pub fn clear_all(&mut self) {
        self.entries.clear();
    }

    /// All entries joined by newlines, most recent first.
    pub fn render(&self) -> String {
        self.entries
            .iter()
            .map(LogEntry::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Entries in display order.
    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
