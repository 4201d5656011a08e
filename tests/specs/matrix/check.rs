//! `roster matrix check` specs
//!
//! Offline validation of matrix files. Nothing here reaches the network.

use crate::prelude::*;

#[test]
fn check_prints_request_summary() {
    let project = Project::empty();
    project.file("standup.toml", STANDUP_MATRIX);

    project
        .roster()
        .args(&["matrix", "check", "standup.toml"])
        .passes()
        .stdout_eq(
            "Standup\n\
             2025-01-01 09:00 - 10:00, 25 min meetings, 0 min rest\n\
             \n\
             ROOM    CAPACITY\n\
             Room 1         1\n\
             \n\
             WORKER  UNAVAILABLE  ROOMS\n\
             Ana     -            Room 1\n\
             Ben     09:00        -\n",
        );
}

#[test]
fn check_json_is_the_request() {
    let project = Project::empty();
    project.file("standup.toml", STANDUP_MATRIX);

    let json = project
        .roster()
        .args(&["-o", "json", "matrix", "check", "standup.toml"])
        .passes()
        .stdout_json();

    assert_eq!(json["title"], "Standup");
    assert_eq!(json["workers"][0]["id"], "w1");
    assert_eq!(json["workers"][1]["name"], "Ben");
    assert_eq!(json["rooms"][0]["capacity"], 1);
    assert_eq!(json["assignments"]["w1"], serde_json::json!(["r1"]));
    assert_eq!(json["assignments"]["w2"], serde_json::json!([]));
    assert_eq!(json["settings"]["meetingDuration"], 25);
    assert_eq!(json["settings"]["restTime"], 0);
}

#[test]
fn untitled_matrix_uses_default_title() {
    let project = Project::empty();
    project.file(
        "untitled.toml",
        "[[rooms]]\nname = \"Room 1\"\n[[workers]]\nname = \"Ana\"\n",
    );

    project
        .roster()
        .args(&["matrix", "check", "untitled.toml"])
        .passes()
        .stdout_has("Matrix Schedule\n")
        .stdout_has("2025-01-01 09:00 - 17:00, 25 min meetings, 0 min rest");
}

#[test]
fn matrix_without_workers_is_invalid() {
    let project = Project::empty();
    project.file("empty.toml", "[[rooms]]\nname = \"Room 1\"\n");

    project
        .roster()
        .args(&["matrix", "check", "empty.toml"])
        .exits_with(1)
        .stderr_eq(
            "Error: empty.toml is not a valid matrix\n\
             \n\
             Caused by:\n    0: at least one worker is required\n",
        );
}

#[test]
fn zero_capacity_room_is_invalid() {
    let project = Project::empty();
    project.file(
        "zero.toml",
        "[[rooms]]\nname = \"Room 1\"\ncapacity = 0\n[[workers]]\nname = \"Ana\"\n",
    );

    project
        .roster()
        .args(&["matrix", "check", "zero.toml"])
        .fails()
        .stderr_has("room r1 must have a capacity of at least 1");
}

#[test]
fn out_of_range_hour_is_invalid() {
    let project = Project::empty();
    project.file(
        "hours.toml",
        "[[rooms]]\nname = \"Room 1\"\n[[workers]]\nname = \"Ana\"\nunavailable_hours = [24]\n",
    );

    project
        .roster()
        .args(&["matrix", "check", "hours.toml"])
        .fails()
        .stderr_has("24");
}

#[test]
fn unknown_room_reference_is_reported() {
    let project = Project::empty();
    project.file(
        "typo.toml",
        "[[rooms]]\nname = \"Room 1\"\n[[workers]]\nname = \"Ana\"\neligible = [\"Room 9\"]\n",
    );

    project
        .roster()
        .args(&["matrix", "check", "typo.toml"])
        .fails()
        .stderr_has("worker 'Ana' lists unknown room 'Room 9'");
}

#[test]
fn missing_file_is_reported() {
    let project = Project::empty();

    project
        .roster()
        .args(&["matrix", "check", "nowhere.toml"])
        .fails()
        .stderr_has("failed to read nowhere.toml");
}

#[test]
fn check_never_contacts_the_solver() {
    let project = Project::empty();
    project.file("standup.toml", STANDUP_MATRIX);

    // The default API URL is unreachable; success proves no call was made
    project
        .roster()
        .args(&["matrix", "check", "standup.toml"])
        .passes();
}
