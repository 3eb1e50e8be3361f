//! End-to-end tests of the `normal-confidence` binary

use approx::assert_abs_diff_eq;
use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run(input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_normal-confidence"))
        .env_remove(normal_confidence::LOG_ENV)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn binary");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("failed to write stdin");

    child.wait_with_output().expect("binary did not finish")
}

fn score_of(input: &str) -> f32 {
    let output = run(input);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.ends_with('\n'));
    stdout.trim().parse().unwrap()
}

#[test]
fn test_score_at_mean() {
    assert_abs_diff_eq!(score_of("0.043\n"), 1.0, epsilon = 1e-3);
}

#[test]
fn test_score_at_lower_limit_and_beyond() {
    assert_eq!(score_of("-0.113"), 0.0);
    assert_eq!(score_of("-10"), 0.0);
}

#[test]
fn test_score_at_one_sigma() {
    let score = score_of("0.069\n");
    assert!(score > 0.25 && score < 0.40, "score {score}");
}

#[test]
fn test_output_matches_library() {
    let output = run("0.05\n");
    let stdout = String::from_utf8(output.stdout).unwrap();
    let expected = normal_confidence::format_score(normal_confidence::evaluate(0.05));
    assert_eq!(stdout, format!("{expected}\n"));
}

#[test]
fn test_invalid_input_fails() {
    let output = run("not-a-number\n");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("not a number"));

    assert!(!run("").status.success());
}
