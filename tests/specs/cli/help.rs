//! CLI help output specs
//!
//! Verify help text displays for all commands.

use crate::prelude::*;

#[test]
fn roster_no_args_shows_usage_and_exits_zero() {
    cli().passes().stdout_has("Usage:");
}

#[test]
fn roster_help_lists_commands() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("matrix")
        .stdout_has("submit")
        .stdout_has("status")
        .stdout_has("quota")
        .stdout_has("history");
}

#[test]
fn roster_version_prints_name() {
    cli().args(&["--version"]).passes().stdout_has("roster ");
}

#[test]
fn roster_history_help_shows_subcommands() {
    cli()
        .args(&["history", "--help"])
        .passes()
        .stdout_has("list")
        .stdout_has("show")
        .stdout_has("rename")
        .stdout_has("delete");
}

#[test]
fn roster_submit_help_mentions_no_wait() {
    cli()
        .args(&["submit", "--help"])
        .passes()
        .stdout_has("--no-wait");
}

#[test]
fn roster_output_flag_lists_formats() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("-o, --output <OUTPUT>")
        .stdout_has("json");
}
