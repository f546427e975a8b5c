//! Integration tests: one-shot calculations through the binary.
//!
//! Subcommands print the result on stdout and exit 0, or print the output
//! message on stderr and exit 1. None of them touch the terminal.

use std::process::{Command, Output};

fn pacetime(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pacetime"))
        .args(args)
        .env_remove("PACETIME_CONFIG")
        .output()
        .expect("Failed to execute binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).trim_end().to_string()
}

#[test]
fn add_prints_unpadded_sum() {
    let output = pacetime(&["add", "1:00:00", "30:00"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "1:30:0");
}

#[test]
fn sub_prints_difference() {
    let output = pacetime(&["sub", "1:00:00", "30:00"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "0:30:0");
}

#[test]
fn sub_with_shorter_left_fails() {
    let output = pacetime(&["sub", "10", "20"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output), "Left < Right");
    assert!(stdout(&output).is_empty());
}

#[test]
fn pace_for_marathon() {
    let output = pacetime(&["pace", "3:00:00", "42.195"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "0:4:16");
}

#[test]
fn time_from_pace() {
    let output = pacetime(&["time", "4:30", "10"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "0:45:0");
}

#[test]
fn distance_with_pace_longer_than_time_fails() {
    let output = pacetime(&["distance", "1:00", "2:00"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output), "Time < Pace");
}

#[test]
fn malformed_input_reports_invalid() {
    let output = pacetime(&["add", "1:xx", "5"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output), "INVALID");
}

#[test]
fn zero_distance_reports_invalid() {
    let output = pacetime(&["pace", "10:00", "0"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output), "INVALID");
}
