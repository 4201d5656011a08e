//! `roster history list` and `roster history show` specs

use crate::prelude::*;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn history_server(entries: Vec<serde_json::Value>) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/my-history"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"schedules": entries})))
        .mount(&server)
        .await;
    server
}

fn two_schedules() -> Vec<serde_json::Value> {
    vec![
        history_entry(7, "task-7", "Standup", "Completed"),
        history_entry(8, "task-8", "", "Failed"),
    ]
}

#[tokio::test(flavor = "multi_thread")]
async fn list_shows_table() {
    let server = history_server(two_schedules()).await;

    cli()
        .api(server.uri())
        .args(&["history", "list"])
        .passes()
        .stdout_eq(
            "TASK    TITLE            CREATED           STATUS\n\
             task-7  Standup          2025-01-01 08:00  Completed\n\
             task-8  Matrix Schedule  2025-01-01 08:00  Failed\n",
        );
}

#[tokio::test(flavor = "multi_thread")]
async fn list_empty_history() {
    let server = history_server(vec![]).await;

    cli()
        .api(server.uri())
        .args(&["history", "list"])
        .passes()
        .stdout_eq("No schedules\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn list_json_marks_viewable_records() {
    let server = history_server(two_schedules()).await;

    let json = cli()
        .api(server.uri())
        .args(&["-o", "json", "history", "list"])
        .passes()
        .stdout_json();

    let records = json.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["task_id"], "task-7");
    assert_eq!(records[0]["viewable"], true);
    assert_eq!(records[1]["display_title"], "Matrix Schedule");
    assert_eq!(records[1]["viewable"], false);
}

#[tokio::test(flavor = "multi_thread")]
async fn show_renders_schedule_grid() {
    let server = history_server(two_schedules()).await;

    cli()
        .api(server.uri())
        .args(&["history", "show", "task-7"])
        .passes()
        .stdout_eq(
            "Standup\n\
             Task:    task-7\n\
             Status:  Completed\n\
             Created: 2025-01-01 08:00\n\
             \n\
             TIME           Room 1\n\
             09:00 - 09:25  Ana\n\
             09:25 - 09:50  -\n",
        );
}

#[tokio::test(flavor = "multi_thread")]
async fn show_without_solution_explains_why() {
    let server = history_server(two_schedules()).await;

    cli()
        .api(server.uri())
        .args(&["history", "show", "task-8"])
        .passes()
        .stdout_has("Status:  Failed\n")
        .stdout_has("No schedule to show: no solution stored");
}

#[tokio::test(flavor = "multi_thread")]
async fn show_json_includes_projection() {
    let server = history_server(two_schedules()).await;

    let json = cli()
        .api(server.uri())
        .args(&["-o", "json", "history", "show", "task-7"])
        .passes()
        .stdout_json();

    assert_eq!(json["record"]["task_id"], "task-7");
    assert!(json["projection"].is_object());
}

#[tokio::test(flavor = "multi_thread")]
async fn show_unknown_task_fails() {
    let server = history_server(two_schedules()).await;

    cli()
        .api(server.uri())
        .args(&["history", "show", "task-99"])
        .exits_with(1)
        .stderr_has("Error: no history record for task task-99");
}

#[tokio::test(flavor = "multi_thread")]
async fn list_failure_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/my-history"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    cli()
        .api(server.uri())
        .args(&["history", "list"])
        .exits_with(1)
        .stderr_has("Error: failed to load history: server error (status 500)");
}
