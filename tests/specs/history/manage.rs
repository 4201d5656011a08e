//! `roster history rename` and `roster history delete` specs

use crate::prelude::*;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn history_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/my-history"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "schedules": [history_entry(7, "task-7", "Standup", "Completed")]
        })))
        .mount(&server)
        .await;
    server
}

async fn expect_delete(server: &MockServer, times: u64) {
    Mock::given(method("POST"))
        .and(path("/history/task-7/delete"))
        .respond_with(ResponseTemplate::new(200))
        .expect(times)
        .mount(server)
        .await;
}

#[tokio::test(flavor = "multi_thread")]
async fn rename_sends_trimmed_title() {
    let server = history_server().await;
    Mock::given(method("POST"))
        .and(path("/history/task-7/rename"))
        .and(body_json(json!({"new_title": "Weekly sync"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    cli()
        .api(server.uri())
        .args(&["history", "rename", "task-7", "  Weekly sync "])
        .passes()
        .stdout_eq("Renamed task-7 to \"Weekly sync\"\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn rename_json_returns_updated_record() {
    let server = history_server().await;
    Mock::given(method("POST"))
        .and(path("/history/task-7/rename"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let json = cli()
        .api(server.uri())
        .args(&["-o", "json", "history", "rename", "task-7", "Weekly"])
        .passes()
        .stdout_json();

    assert_eq!(json["title"], "Weekly");
    assert_eq!(json["display_title"], "Weekly");
}

#[tokio::test(flavor = "multi_thread")]
async fn rename_blank_title_is_rejected() {
    let server = history_server().await;
    Mock::given(method("POST"))
        .and(path("/history/task-7/rename"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    cli()
        .api(server.uri())
        .args(&["history", "rename", "task-7", "   "])
        .exits_with(1)
        .stderr_has("Error: title must not be empty");
}

#[tokio::test(flavor = "multi_thread")]
async fn rename_rejected_by_store_is_reported() {
    let server = history_server().await;
    Mock::given(method("POST"))
        .and(path("/history/task-7/rename"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    cli()
        .api(server.uri())
        .args(&["history", "rename", "task-7", "Weekly"])
        .exits_with(1)
        .stderr_has("Error: failed to rename task-7: server error (status 500)");
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_confirmed_on_stdin() {
    let server = history_server().await;
    expect_delete(&server, 1).await;

    cli()
        .api(server.uri())
        .args(&["history", "delete", "task-7"])
        .stdin("y\n")
        .passes()
        .stdout_eq("Deleted task-7\n")
        .stderr_has("Delete \"Standup\" (task-7)? [y/N] ");
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_declined_keeps_record() {
    let server = history_server().await;
    expect_delete(&server, 0).await;

    cli()
        .api(server.uri())
        .args(&["history", "delete", "task-7"])
        .stdin("n\n")
        .passes()
        .stdout_eq("Cancelled\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_without_input_declines() {
    let server = history_server().await;
    expect_delete(&server, 0).await;

    cli()
        .api(server.uri())
        .args(&["history", "delete", "task-7"])
        .passes()
        .stdout_eq("Cancelled\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_with_yes_skips_prompt() {
    let server = history_server().await;
    expect_delete(&server, 1).await;

    cli()
        .api(server.uri())
        .args(&["history", "delete", "task-7", "--yes"])
        .passes()
        .stdout_eq("Deleted task-7\n")
        .stderr_lacks("[y/N]");
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_unknown_task_never_calls_store() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/my-history"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"schedules": []})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/history/task-7/delete"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    cli()
        .api(server.uri())
        .args(&["history", "delete", "task-7", "-y"])
        .exits_with(1)
        .stderr_has("Error: no history record for task task-7");
}
