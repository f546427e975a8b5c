//! Domain model (pure).
//!
//! The arithmetic core, the calculation log and the error taxonomy. Nothing in
//! here touches the terminal or the filesystem.

pub mod calc_log;
pub mod calculation;
pub mod error;
pub mod key_action;
pub mod pace;
pub mod timestamp;

// Re-export for convenience
pub use calc_log::{CalculationLog, LogEntry, LogKind};
pub use calculation::Calculation;
pub use error::{AppError, CalculatorError, INVALID_MESSAGE};
pub use key_action::KeyAction;
pub use pace::{
    add_durations, distance_from_time_and_pace, pace_from_time_and_distance, subtract_durations,
    time_from_pace_and_distance,
};
pub use timestamp::{format_duration, parse_distance, parse_duration, Duration};
