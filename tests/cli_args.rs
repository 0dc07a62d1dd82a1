//! Integration tests for CLI argument handling
//!
//! Tests the coordinate override and API key sourcing from the command line.
//! Every invocation here fails or exits before any network request is made.

use std::process::Command;

/// Helper to run the CLI with given args and capture output
///
/// The API key environment variable is cleared so tests see the same
/// behavior regardless of the host environment.
fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_skycast"))
        .env_remove("OPENWEATHER_API_KEY")
        .args(args)
        .output()
        .expect("Failed to execute skycast")
}

#[test]
fn test_help_flag_exits_successfully() {
    let output = run_cli(&["--help"]);
    assert!(
        output.status.success(),
        "Expected --help to exit successfully"
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("skycast"), "Help should mention skycast");
    assert!(stdout.contains("--lat"), "Help should mention --lat flag");
    assert!(
        stdout.contains("--api-key"),
        "Help should mention --api-key flag"
    );
}

#[test]
fn test_version_flag_exits_successfully() {
    let output = run_cli(&["--version"]);
    assert!(output.status.success());
}

#[test]
fn test_missing_api_key_is_an_error() {
    let output = run_cli(&[]);
    assert!(
        !output.status.success(),
        "Expected a run without an API key to fail"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("api-key") || stderr.contains("OPENWEATHER_API_KEY"),
        "Should point at the missing API key: {}",
        stderr
    );
}

#[test]
fn test_lat_without_lon_is_an_error() {
    let output = run_cli(&["--api-key", "k", "--lat", "49.28"]);
    assert!(
        !output.status.success(),
        "Expected a lone --lat to fail"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("together"),
        "Should explain the coordinates must come as a pair: {}",
        stderr
    );
}

#[test]
fn test_lon_without_lat_is_an_error() {
    let output = run_cli(&["--api-key", "k", "--lon", "-123.12"]);
    assert!(!output.status.success());
}

#[test]
fn test_negative_coordinates_are_accepted() {
    // --help short-circuits before any lookup, so this only checks parsing
    let output = run_cli(&["--api-key", "k", "--lat", "-41.29", "--lon", "174.78", "--help"]);
    assert!(output.status.success());
}
