//! Error types for pacetime.
//!
//! Two layers:
//!
//! - [`CalculatorError`] - a single calculation failed. Never fatal; the message is
//!   shown verbatim in the output of the panel that was calculated.
//! - [`AppError`] - the application itself could not start or keep running
//!   (configuration, log file, terminal).
//!
//! Calculation failures collapse to three user-visible messages: `INVALID`,
//! `Left < Right` and `Time < Pace`. The variants keep the underlying cause so
//! it can be traced.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use thiserror::Error;

/// Message shown for every failure that is not a domain condition.
pub const INVALID_MESSAGE: &str = "INVALID";

/// A single calculation could not be made.
///
/// `Display` renders the short message the user sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculatorError {
    /// Input text is not a valid timestamp or distance.
    #[error("{}", INVALID_MESSAGE)]
    InvalidInput {
        /// The offending text, as typed.
        input: String,
    },

    /// A derive operation would divide by zero.
    #[error("{}", INVALID_MESSAGE)]
    DivisionByZero,

    /// A result does not fit in the seconds counter.
    #[error("{}", INVALID_MESSAGE)]
    Overflow,

    /// Subtraction would go below zero.
    #[error("Left < Right")]
    NegativeResult,

    /// Distance would be derived from a pace longer than the total time.
    #[error("Time < Pace")]
    PaceExceedsTime,
}

impl CalculatorError {
    /// Build an [`CalculatorError::InvalidInput`] for the given text.
    pub fn invalid(input: impl Into<String>) -> Self {
        Self::InvalidInput {
            input: input.into(),
        }
    }

    /// Short machine-friendly name of the failure, used in traces.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "invalid_input",
            Self::DivisionByZero => "division_by_zero",
            Self::Overflow => "overflow",
            Self::NegativeResult => "negative_result",
            Self::PaceExceedsTime => "pace_exceeds_time",
        }
    }
}

/// Top-level application error.
///
/// Everything here ends the process with a message on stderr.
#[derive(Debug, Error)]
pub enum AppError {
    /// Config file exists but could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Tracing subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Terminal setup, rendering or event polling failed.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsing_failures_render_as_invalid() {
        assert_eq!(CalculatorError::invalid("abc").to_string(), INVALID_MESSAGE);
        assert_eq!(CalculatorError::DivisionByZero.to_string(), INVALID_MESSAGE);
        assert_eq!(CalculatorError::Overflow.to_string(), INVALID_MESSAGE);
    }

    #[test]
    fn domain_conditions_have_their_own_messages() {
        assert_eq!(CalculatorError::NegativeResult.to_string(), "Left < Right");
        assert_eq!(CalculatorError::PaceExceedsTime.to_string(), "Time < Pace");
    }

    #[test]
    fn invalid_keeps_offending_text() {
        let err = CalculatorError::invalid("1:x");
        assert_eq!(
            err,
            CalculatorError::InvalidInput {
                input: "1:x".to_string()
            }
        );
        assert_eq!(err.kind(), "invalid_input");
    }

    #[test]
    fn app_error_from_io_error() {
        let io_err = std::io::Error::other("broken pipe");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Terminal(_)));
        assert!(app_err.to_string().contains("broken pipe"));
    }
}
