//! Timestamp and distance text parsing (pure).
//!
//! A timestamp is `SS`, `MM:SS` or `HH:MM:SS`. Components are plain decimal
//! integers with no upper bound: `"0:90"` is 90 seconds, not an error.
//! Formatting goes the other way but never pads, so `"01:02:03"` parses to
//! 3723 and 3723 formats as `"1:2:3"`.

use crate::model::CalculatorError;

/// Elapsed time canonicalised to whole seconds.
pub type Duration = u64;

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 3600;

/// Parse a timestamp into seconds.
///
/// # Errors
///
/// [`CalculatorError::InvalidInput`] if there are more than three components,
/// any component is empty or contains anything but ASCII digits.
/// [`CalculatorError::Overflow`] if the total does not fit in a [`Duration`].
pub fn parse_duration(timestamp: &str) -> Result<Duration, CalculatorError> {
    let components: Vec<&str> = timestamp.split(':').collect();

    let weights: &[u64] = match components.len() {
        1 => &[1],
        2 => &[SECONDS_PER_MINUTE, 1],
        3 => &[SECONDS_PER_HOUR, SECONDS_PER_MINUTE, 1],
        _ => return Err(CalculatorError::invalid(timestamp)),
    };

    components
        .iter()
        .zip(weights)
        .try_fold(0u64, |total, (component, weight)| {
            let value = parse_component(component)
                .ok_or_else(|| CalculatorError::invalid(timestamp))?;
            value
                .checked_mul(*weight)
                .and_then(|seconds| total.checked_add(seconds))
                .ok_or(CalculatorError::Overflow)
        })
}

/// One timestamp component: a non-empty run of ASCII digits.
///
/// Returns `None` on overflow as well; the caller reports it as bad input.
fn parse_component(component: &str) -> Option<u64> {
    if component.is_empty() || !component.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    component.parse().ok()
}

/// Render seconds as `H:M:S` with no zero padding.
pub fn format_duration(total_seconds: Duration) -> String {
    let minutes = total_seconds / SECONDS_PER_MINUTE;
    let seconds = total_seconds % SECONDS_PER_MINUTE;
    let hours = minutes / 60;
    let minutes = minutes % 60;
    format!("{hours}:{minutes}:{seconds}")
}

/// Parse a distance field: digits with at most one decimal point.
///
/// `"5"`, `"5."`, `".5"` and `"42.195"` are accepted. Signs, exponents,
/// whitespace and the empty string are not.
///
/// # Errors
///
/// [`CalculatorError::InvalidInput`] for anything else.
pub fn parse_distance(text: &str) -> Result<f64, CalculatorError> {
    let mut digits = 0usize;
    let mut points = 0usize;
    for b in text.bytes() {
        match b {
            b'0'..=b'9' => digits += 1,
            b'.' => points += 1,
            _ => return Err(CalculatorError::invalid(text)),
        }
    }
    if digits == 0 || points > 1 {
        return Err(CalculatorError::invalid(text));
    }

    text.parse::<f64>()
        .map_err(|_| CalculatorError::invalid(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_seconds() {
        assert_eq!(parse_duration("90"), Ok(90));
        assert_eq!(parse_duration("0"), Ok(0));
    }

    #[test]
    fn minutes_and_seconds() {
        assert_eq!(parse_duration("1:30"), Ok(90));
    }

    #[test]
    fn hours_minutes_seconds() {
        assert_eq!(parse_duration("0:1:30"), Ok(90));
        assert_eq!(parse_duration("01:02:03"), Ok(3723));
    }

    #[test]
    fn components_are_not_clamped() {
        assert_eq!(parse_duration("0:90"), Ok(90));
        assert_eq!(parse_duration("1:75:99"), Ok(3600 + 75 * 60 + 99));
    }

    #[test]
    fn rejects_non_numeric_text() {
        assert_eq!(parse_duration("abc"), Err(CalculatorError::invalid("abc")));
    }

    #[test]
    fn rejects_empty_components() {
        for input in ["", ":", "1:", ":30", "1::2", "::"] {
            assert!(
                matches!(
                    parse_duration(input),
                    Err(CalculatorError::InvalidInput { .. })
                ),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_too_many_components() {
        assert!(parse_duration("1:2:3:4").is_err());
    }

    #[test]
    fn rejects_signs_decimals_and_whitespace() {
        for input in ["-5", "+5", "1.5", " 5", "5 ", "1:-2"] {
            assert!(parse_duration(input).is_err(), "{input:?} should be rejected");
        }
    }

    #[test]
    fn overflow_is_reported() {
        let too_many_hours = format!("{}:0:0", u64::MAX / 3600 + 1);
        assert_eq!(parse_duration(&too_many_hours), Err(CalculatorError::Overflow));
    }

    #[test]
    fn component_wider_than_u64_is_invalid() {
        let huge = "9".repeat(30);
        assert!(matches!(
            parse_duration(&huge),
            Err(CalculatorError::InvalidInput { .. })
        ));
    }

    #[test]
    fn format_is_unpadded() {
        assert_eq!(format_duration(5), "0:0:5");
        assert_eq!(format_duration(3723), "1:2:3");
        assert_eq!(format_duration(0), "0:0:0");
    }

    #[test]
    fn format_hours_are_unbounded() {
        assert_eq!(format_duration(100 * 3600 + 59), "100:0:59");
    }

    #[test]
    fn padded_input_round_trips_by_value_only() {
        let seconds = parse_duration("01:02:03").unwrap();
        assert_eq!(format_duration(seconds), "1:2:3");
    }

    #[test]
    fn distance_forms() {
        assert_eq!(parse_distance("5"), Ok(5.0));
        assert_eq!(parse_distance("5."), Ok(5.0));
        assert_eq!(parse_distance(".5"), Ok(0.5));
        assert_eq!(parse_distance("42.195"), Ok(42.195));
    }

    #[test]
    fn distance_rejects_malformed_text() {
        for input in ["", ".", "1.2.3", "-1", "1e3", "inf", "nan", " 2", "1,5"] {
            assert!(parse_distance(input).is_err(), "{input:?} should be rejected");
        }
    }
}
