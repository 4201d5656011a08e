//! Error handling specs
//!
//! Verify the CLI exits non-zero with a readable message, and that an
//! unreachable boundary is reported rather than hidden.

use crate::prelude::*;

#[test]
fn unknown_command_fails() {
    cli()
        .args(&["schedule"])
        .fails()
        .stderr_has("unrecognized subcommand");
}

#[test]
fn unknown_output_format_fails() {
    cli()
        .args(&["-o", "yaml", "quota"])
        .fails()
        .stderr_has("invalid value 'yaml'");
}

#[test]
fn history_against_unreachable_api_fails() {
    cli()
        .args(&["history", "list"])
        .exits_with(1)
        .stderr_has("Error: failed to load history: transport error");
}

#[test]
fn status_against_unreachable_api_fails() {
    cli()
        .args(&["status", "task-1"])
        .exits_with(1)
        .stderr_has("Error: status check failed");
}

#[test]
fn quota_against_unreachable_api_is_unknown() {
    cli()
        .args(&["quota"])
        .passes()
        .stdout_eq("Remaining submissions: unknown\n");
}

#[test]
fn submit_missing_file_fails_before_any_request() {
    let project = Project::empty();
    project
        .roster()
        .args(&["submit", "missing.toml"])
        .exits_with(1)
        .stderr_has("Error: failed to read missing.toml");
}

#[test]
fn debug_logging_goes_to_stderr() {
    cli()
        .args(&["quota"])
        .env("ROSTER_LOG", "debug")
        .passes()
        .stdout_eq("Remaining submissions: unknown\n")
        .stderr_has("quota unknown");
}
