//! A single calculation request built from raw field text.
//!
//! Bridges what the user typed to the arithmetic core: timestamps are parsed
//! to seconds, distances to decimals, then the matching derive operation runs.

use crate::model::calc_log::{CalculationLog, LogKind};
use crate::model::pace::{
    add_durations, distance_from_time_and_pace, pace_from_time_and_distance, subtract_durations,
    time_from_pace_and_distance,
};
use crate::model::timestamp::{parse_distance, parse_duration};
use crate::model::CalculatorError;
use tracing::debug;

/// One calculation with its two inputs, as typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Calculation<'a> {
    /// `left + right`.
    Add {
        /// Left timestamp.
        left: &'a str,
        /// Right timestamp.
        right: &'a str,
    },
    /// `left - right`.
    Subtract {
        /// Left timestamp.
        left: &'a str,
        /// Right timestamp.
        right: &'a str,
    },
    /// Pace from an overall time and a distance.
    Pace {
        /// Overall time timestamp.
        time: &'a str,
        /// Distance text.
        distance: &'a str,
    },
    /// Overall time from a pace and a distance.
    Time {
        /// Pace timestamp.
        pace: &'a str,
        /// Distance text.
        distance: &'a str,
    },
    /// Distance from an overall time and a pace.
    Distance {
        /// Overall time timestamp.
        time: &'a str,
        /// Pace timestamp.
        pace: &'a str,
    },
}

impl<'a> Calculation<'a> {
    /// Build a calculation of `kind` from its two inputs in panel order.
    pub fn new(kind: LogKind, first: &'a str, second: &'a str) -> Self {
        match kind {
            LogKind::Add => Self::Add {
                left: first,
                right: second,
            },
            LogKind::Subtract => Self::Subtract {
                left: first,
                right: second,
            },
            LogKind::Pace => Self::Pace {
                time: first,
                distance: second,
            },
            LogKind::Time => Self::Time {
                pace: first,
                distance: second,
            },
            LogKind::Distance => Self::Distance {
                time: first,
                pace: second,
            },
        }
    }

    /// The log template this calculation records under.
    pub fn kind(&self) -> LogKind {
        match self {
            Self::Add { .. } => LogKind::Add,
            Self::Subtract { .. } => LogKind::Subtract,
            Self::Pace { .. } => LogKind::Pace,
            Self::Time { .. } => LogKind::Time,
            Self::Distance { .. } => LogKind::Distance,
        }
    }

    /// The two inputs in panel order.
    pub fn inputs(&self) -> (&'a str, &'a str) {
        match *self {
            Self::Add { left, right } | Self::Subtract { left, right } => (left, right),
            Self::Pace { time, distance } => (time, distance),
            Self::Time { pace, distance } => (pace, distance),
            Self::Distance { time, pace } => (time, pace),
        }
    }

    /// Run the calculation.
    ///
    /// # Errors
    ///
    /// Any [`CalculatorError`] raised while parsing the inputs or deriving
    /// the result.
    pub fn evaluate(&self) -> Result<String, CalculatorError> {
        let result = match *self {
            Self::Add { left, right } => add_durations(left, right),
            Self::Subtract { left, right } => subtract_durations(left, right),
            Self::Pace { time, distance } => {
                let seconds = parse_duration(time)? as f64;
                pace_from_time_and_distance(seconds, parse_distance(distance)?)
            }
            Self::Time { pace, distance } => {
                let seconds = parse_duration(pace)? as f64;
                time_from_pace_and_distance(seconds, parse_distance(distance)?)
            }
            Self::Distance { time, pace } => {
                let time_seconds = parse_duration(time)? as f64;
                let pace_seconds = parse_duration(pace)? as f64;
                distance_from_time_and_pace(time_seconds, pace_seconds)
            }
        };
        debug!(kind = ?self.kind(), ?result, "calculation evaluated");
        result
    }

    /// Evaluate and, on success, append the summary to `log`.
    ///
    /// The log is left untouched on failure.
    ///
    /// # Errors
    ///
    /// Same as [`Calculation::evaluate`].
    pub fn evaluate_into(&self, log: &mut CalculationLog) -> Result<String, CalculatorError> {
        let result = self.evaluate()?;
        let (first, second) = self.inputs();
        log.append(self.kind(), first, second, &result);
        Ok(result)
    }
}
