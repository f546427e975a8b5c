//! Property-based tests for the arithmetic core and the calculation log.
//!
//! Tests validate:
//! 1. Formatted durations parse back to the same number of seconds
//! 2. Addition and subtraction agree with integer arithmetic
//! 3. Pace, time and distance never panic and respect their guards
//! 4. Log operations keep the expected length and order

use pacetime::model::{
    add_durations, distance_from_time_and_pace, format_duration, pace_from_time_and_distance,
    parse_distance, parse_duration, subtract_durations, time_from_pace_and_distance,
    CalculationLog, CalculatorError, LogKind,
};
use pacetime::state::{FieldKind, InputField};
use proptest::prelude::*;

const MAX_SECONDS: u64 = 1_000_000_000;

// ===== Property 1: Timestamp Round Trip =====

proptest! {
    #[test]
    fn format_then_parse_is_identity(seconds in 0..MAX_SECONDS) {
        prop_assert_eq!(parse_duration(&format_duration(seconds)), Ok(seconds));
    }

    #[test]
    fn components_are_not_bounded(minutes in 0u64..10_000, seconds in 0u64..10_000) {
        let text = format!("{minutes}:{seconds}");
        prop_assert_eq!(parse_duration(&text), Ok(minutes * 60 + seconds));
    }

    #[test]
    fn formatted_minutes_and_seconds_stay_below_sixty(seconds in 0..MAX_SECONDS) {
        let text = format_duration(seconds);
        let parts: Vec<u64> = text.split(':').map(|p| p.parse().unwrap()).collect();
        prop_assert_eq!(parts.len(), 3);
        prop_assert!(parts[1] < 60);
        prop_assert!(parts[2] < 60);
    }

    #[test]
    fn parse_never_panics(text in ".{0,20}") {
        let _ = parse_duration(&text);
        let _ = parse_distance(&text);
    }
}

// ===== Property 2: Addition and Subtraction =====

proptest! {
    #[test]
    fn add_matches_integer_sum(a in 0..MAX_SECONDS, b in 0..MAX_SECONDS) {
        let sum = add_durations(&format_duration(a), &format_duration(b));
        prop_assert_eq!(sum, Ok(format_duration(a + b)));
    }

    #[test]
    fn add_is_commutative(a in 0..MAX_SECONDS, b in 0..MAX_SECONDS) {
        let (ta, tb) = (a.to_string(), b.to_string());
        prop_assert_eq!(add_durations(&ta, &tb), add_durations(&tb, &ta));
    }

    #[test]
    fn subtract_matches_integer_difference(a in 0..MAX_SECONDS, b in 0..MAX_SECONDS) {
        let result = subtract_durations(&a.to_string(), &b.to_string());
        if a >= b {
            prop_assert_eq!(result, Ok(format_duration(a - b)));
        } else {
            prop_assert_eq!(result, Err(CalculatorError::NegativeResult));
        }
    }
}

// ===== Property 3: Pace, Time, Distance =====

proptest! {
    #[test]
    fn pace_times_distance_is_close_to_time(time in 1u64..100_000, distance in 1u64..500) {
        let pace = pace_from_time_and_distance(time as f64, distance as f64).unwrap();
        let pace_seconds = parse_duration(&pace).unwrap() as f64;
        // rounding to the second loses at most half a second per unit of distance
        let back = pace_seconds * distance as f64;
        prop_assert!((back - time as f64).abs() <= distance as f64 / 2.0 + 1e-6);
    }

    #[test]
    fn time_is_truncated_product(pace in 0u64..10_000, distance in 0u64..1_000) {
        let time = time_from_pace_and_distance(pace as f64, distance as f64).unwrap();
        prop_assert_eq!(time, format_duration(pace * distance));
    }

    #[test]
    fn distance_rejects_pace_longer_than_time(time in 0u64..10_000, extra in 1u64..10_000) {
        prop_assert_eq!(
            distance_from_time_and_pace(time as f64, (time + extra) as f64),
            Err(CalculatorError::PaceExceedsTime)
        );
    }

    #[test]
    fn distance_has_two_decimals(time in 1u64..100_000, pace in 1u64..100_000) {
        prop_assume!(pace <= time);
        let distance = distance_from_time_and_pace(time as f64, pace as f64).unwrap();
        let (_, decimals) = distance.split_once('.').unwrap();
        prop_assert_eq!(decimals.len(), 2);
    }
}

// ===== Property 4: Input Fields =====

proptest! {
    #[test]
    fn timestamp_field_only_holds_timestamp_characters(text in ".{0,30}") {
        let field = InputField::with_text(FieldKind::Timestamp, &text);
        prop_assert!(field.text().chars().all(|c| c.is_ascii_digit() || c == ':'));
        prop_assert!(field.text().matches(':').count() <= 2);
    }

    #[test]
    fn distance_field_only_holds_distance_characters(text in ".{0,30}") {
        let field = InputField::with_text(FieldKind::Distance, &text);
        prop_assert!(field.text().chars().all(|c| c.is_ascii_digit() || c == '.'));
        prop_assert!(field.text().matches('.').count() <= 1);
    }
}

// ===== Property 5: Calculation Log =====

fn filled_log(count: usize) -> CalculationLog {
    let mut log = CalculationLog::new();
    for i in 0..count {
        log.append(LogKind::Add, &i.to_string(), "0", &format_duration(i as u64));
    }
    log
}

proptest! {
    #[test]
    fn clear_latest_removes_exactly_one(count in 0usize..50) {
        let mut log = filled_log(count);
        let removed = log.clear_latest();
        prop_assert_eq!(removed.is_some(), count > 0);
        prop_assert_eq!(log.len(), count.saturating_sub(1));
    }

    #[test]
    fn clear_all_always_empties(count in 0usize..50) {
        let mut log = filled_log(count);
        log.clear_all();
        prop_assert!(log.is_empty());
        prop_assert_eq!(log.render(), "");
    }

    #[test]
    fn render_has_one_line_per_entry_newest_first(count in 1usize..50) {
        let log = filled_log(count);
        let rendered = log.render();
        let lines: Vec<&str> = rendered.lines().collect();
        prop_assert_eq!(lines.len(), count);
        let newest = format!("{}  =  {}  +  0", format_duration((count - 1) as u64), count - 1);
        prop_assert_eq!(lines[0], newest.as_str());
    }
}
