//! CLI integration tests.
//!
//! Invokes the `compare-results` binary as a subprocess against fixture
//! files in a temporary directory.

use std::fs;
use std::ffi::OsStr;
use std::path::PathBuf;
use std::process::Command;

use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

fn run<S: AsRef<OsStr>>(args: &[S]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_compare-results"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn compare-results");
    let code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (code, stdout, stderr)
}

const REFERENCE: &str = r#"{"data":{"temp":20.0,"city":"Paris"}}"#;

// ============================================================================
// Verdicts
// ============================================================================

#[test]
fn cli_equal_within_tolerance_exits_zero() {
    let dir = TempDir::new().unwrap();
    let answer = write(&dir, "answer.json", REFERENCE);
    let student = write(&dir, "student.json", r#"{"data":{"temp":20.9,"city":"Paris"}}"#);

    let (code, stdout, _stderr) = run(&[&answer, &student]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "The JSON files are deeply equal.");
}

#[test]
fn cli_outside_tolerance_exits_one() {
    let dir = TempDir::new().unwrap();
    let answer = write(&dir, "answer.json", REFERENCE);
    let student = write(&dir, "student.json", r#"{"data":{"temp":21.5,"city":"Paris"}}"#);

    let (code, stdout, stderr) = run(&[&answer, &student]);
    assert_eq!(code, 1);
    assert_eq!(stdout.trim(), "The JSON files are NOT deeply equal.");
    assert!(!stderr.contains("error:"), "mismatch is not an error: {stderr}");
}

#[test]
fn cli_verbose_logs_mismatch_location() {
    let dir = TempDir::new().unwrap();
    let answer = write(&dir, "answer.json", REFERENCE);
    let student = write(&dir, "student.json", r#"{"data":{"temp":21.5,"city":"Paris"}}"#);

    let output = Command::new(env!("CARGO_BIN_EXE_compare-results"))
        .arg("-v")
        .arg(&answer)
        .arg(&student)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn compare-results");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("/data/temp"), "{stderr}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "The JSON files are NOT deeply equal.");
}

// ============================================================================
// Input errors
// ============================================================================

#[test]
fn cli_malformed_candidate_exits_one() {
    let dir = TempDir::new().unwrap();
    let answer = write(&dir, "answer.json", REFERENCE);
    let student = write(&dir, "student.json", "{\"data\": oops}");

    let (code, stdout, stderr) = run(&[&answer, &student]);
    assert_eq!(code, 1);
    assert!(stdout.trim().is_empty(), "no verdict expected: {stdout}");
    assert!(stderr.contains("malformed JSON"), "{stderr}");
}

#[test]
fn cli_missing_file_exits_one() {
    let dir = TempDir::new().unwrap();
    let answer = write(&dir, "answer.json", REFERENCE);
    let missing = dir.path().join("student.json");

    let (code, stdout, stderr) = run(&[&answer, &missing]);
    assert_eq!(code, 1);
    assert_eq!(stdout.trim(), "One or both JSON files were not found.");
    assert!(stderr.contains("student.json"), "{stderr}");
}

#[test]
fn cli_requires_two_paths() {
    let dir = TempDir::new().unwrap();
    let answer = write(&dir, "answer.json", REFERENCE);

    let (code, _stdout, stderr) = run(&[&answer]);
    assert_eq!(code, 2, "clap usage errors exit with 2");
    assert!(stderr.contains("CANDIDATE"), "{stderr}");
}
