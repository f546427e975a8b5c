//! Time arithmetic and pace/time/distance relations (pure).
//!
//! Every function is stateless and returns a display string ready for an
//! output field, or the [`CalculatorError`] whose message replaces it.

use crate::model::timestamp::{format_duration, parse_duration, Duration};
use crate::model::CalculatorError;

/// Sum of two timestamps, formatted.
///
/// # Errors
///
/// Parse failures of either side, or [`CalculatorError::Overflow`].
pub fn add_durations(t1: &str, t2: &str) -> Result<String, CalculatorError> {
    let left = parse_duration(t1)?;
    let right = parse_duration(t2)?;
    let total = left.checked_add(right).ok_or(CalculatorError::Overflow)?;
    Ok(format_duration(total))
}

/// Difference of two timestamps, formatted.
///
/// # Errors
///
/// Parse failures of either side, or [`CalculatorError::NegativeResult`] when
/// `t1` is shorter than `t2`.
pub fn subtract_durations(t1: &str, t2: &str) -> Result<String, CalculatorError> {
    let left = parse_duration(t1)?;
    let right = parse_duration(t2)?;
    if left < right {
        return Err(CalculatorError::NegativeResult);
    }
    Ok(format_duration(left - right))
}

/// Pace for covering `distance` in `duration_seconds`.
///
/// Rounded to the nearest second, ties to even.
///
/// # Errors
///
/// [`CalculatorError::DivisionByZero`] when `distance` is zero.
pub fn pace_from_time_and_distance(
    duration_seconds: f64,
    distance: f64,
) -> Result<String, CalculatorError> {
    let duration_seconds = non_negative(duration_seconds)?;
    let distance = non_negative(distance)?;
    if distance == 0.0 {
        return Err(CalculatorError::DivisionByZero);
    }

    let pace = (duration_seconds / distance).round_ties_even();
    Ok(format_duration(whole_seconds(pace)?))
}

/// Overall time for `distance` at `pace_seconds` per unit.
///
/// Fractional seconds are truncated.
///
/// # Errors
///
/// [`CalculatorError::InvalidInput`] for negative or non-finite inputs,
/// [`CalculatorError::Overflow`] when the product is too large.
pub fn time_from_pace_and_distance(
    pace_seconds: f64,
    distance: f64,
) -> Result<String, CalculatorError> {
    let pace_seconds = non_negative(pace_seconds)?;
    let distance = non_negative(distance)?;

    let total = (distance * pace_seconds).trunc();
    Ok(format_duration(whole_seconds(total)?))
}

/// Distance covered in `duration_seconds` at `pace_seconds` per unit.
///
/// Rendered with exactly two decimals, rounded rather than truncated.
///
/// # Errors
///
/// [`CalculatorError::PaceExceedsTime`] when the pace is longer than the
/// total time; [`CalculatorError::DivisionByZero`] when the pace is zero.
pub fn distance_from_time_and_pace(
    duration_seconds: f64,
    pace_seconds: f64,
) -> Result<String, CalculatorError> {
    let duration_seconds = non_negative(duration_seconds)?;
    let pace_seconds = non_negative(pace_seconds)?;
    if duration_seconds < pace_seconds {
        return Err(CalculatorError::PaceExceedsTime);
    }
    if pace_seconds == 0.0 {
        return Err(CalculatorError::DivisionByZero);
    }

    let distance = duration_seconds / pace_seconds;
    Ok(format!("{distance:.2}"))
}

fn non_negative(value: f64) -> Result<f64, CalculatorError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(CalculatorError::invalid(value.to_string()))
    }
}

/// Convert an already-rounded, non-negative float to whole seconds.
fn whole_seconds(value: f64) -> Result<Duration, CalculatorError> {
    // u64::MAX as f64 rounds up to 2^64, which is itself out of range.
    if !value.is_finite() || value >= u64::MAX as f64 {
        return Err(CalculatorError::Overflow);
    }
    Ok(value as Duration)
}
