//! `roster submit` specs
//!
//! Submission, polling until a terminal status, and the schedule grid
//! loaded from history once the job completes.

use crate::prelude::*;
use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn accept_submission(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/generate-schedule"))
        .and(body_string_contains("\"title\":\"Standup\""))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"task_id": "task-7", "status": "Submitted"})),
        )
        .expect(1)
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/quota"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"quota_remaining": 4, "last_reset_date": "2025-01-01T00:00:00"})),
        )
        .mount(server)
        .await;
}

async fn report_status(server: &MockServer, status: &str, times: Option<u64>) {
    let mock = Mock::given(method("GET"))
        .and(path("/schedule/task-7/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": status})));
    match times {
        Some(n) => mock.up_to_n_times(n).mount(server).await,
        None => mock.mount(server).await,
    }
}

async fn store_history(server: &MockServer, entries: Vec<serde_json::Value>) {
    Mock::given(method("GET"))
        .and(path("/my-history"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"schedules": entries})))
        .mount(server)
        .await;
}

#[tokio::test(flavor = "multi_thread")]
async fn submit_waits_and_prints_schedule() {
    let server = MockServer::start().await;
    accept_submission(&server).await;
    report_status(&server, "Running", Some(1)).await;
    report_status(&server, "Completed", None).await;
    store_history(&server, vec![history_entry(7, "task-7", "Standup", "Completed")]).await;

    let project = Project::empty();
    project.file("standup.toml", STANDUP_MATRIX);

    project
        .roster()
        .api(server.uri())
        .args(&["submit", "standup.toml"])
        .passes()
        .stdout_eq(
            "task-7  Completed\n\
             \n\
             TIME           Room 1\n\
             09:00 - 09:25  Ana\n\
             09:25 - 09:50  -\n",
        )
        .stderr_has("Submitted task-7, waiting for the solver...");
}

#[tokio::test(flavor = "multi_thread")]
async fn submit_json_includes_job_and_projection() {
    let server = MockServer::start().await;
    accept_submission(&server).await;
    report_status(&server, "Completed", None).await;
    store_history(&server, vec![history_entry(7, "task-7", "Standup", "Completed")]).await;

    let project = Project::empty();
    project.file("standup.toml", STANDUP_MATRIX);

    let json = project
        .roster()
        .api(server.uri())
        .args(&["-o", "json", "submit", "standup.toml"])
        .passes()
        .stdout_json();

    assert_eq!(json["job"]["task_id"], "task-7");
    assert_eq!(json["job"]["status"], "Completed");
    assert!(json["projection"].is_object());
}

#[tokio::test(flavor = "multi_thread")]
async fn submit_no_wait_skips_polling() {
    let server = MockServer::start().await;
    accept_submission(&server).await;
    Mock::given(method("GET"))
        .and(path("/schedule/task-7/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "Running"})))
        .expect(0)
        .mount(&server)
        .await;

    let project = Project::empty();
    project.file("standup.toml", STANDUP_MATRIX);

    project
        .roster()
        .api(server.uri())
        .args(&["submit", "standup.toml", "--no-wait"])
        .passes()
        .stdout_eq("task-7  Submitted\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn failed_job_exits_with_code_2() {
    let server = MockServer::start().await;
    accept_submission(&server).await;
    report_status(&server, "Failed", None).await;

    let project = Project::empty();
    project.file("standup.toml", STANDUP_MATRIX);

    project
        .roster()
        .api(server.uri())
        .args(&["submit", "standup.toml"])
        .exits_with(2)
        .stdout_eq("task-7  Failed\n")
        .stderr_has("Error: task task-7 failed");
}

#[tokio::test(flavor = "multi_thread")]
async fn vanished_task_exits_with_code_3() {
    let server = MockServer::start().await;
    accept_submission(&server).await;
    Mock::given(method("GET"))
        .and(path("/schedule/task-7/status"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let project = Project::empty();
    project.file("standup.toml", STANDUP_MATRIX);

    project
        .roster()
        .api(server.uri())
        .args(&["submit", "standup.toml"])
        .exits_with(3)
        .stdout_eq("task-7  Unknown\n")
        .stderr_has("Error: lost track of task task-7");
}

#[tokio::test(flavor = "multi_thread")]
async fn transient_errors_are_retried() {
    let server = MockServer::start().await;
    accept_submission(&server).await;
    Mock::given(method("GET"))
        .and(path("/schedule/task-7/status"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(2)
        .mount(&server)
        .await;
    report_status(&server, "Completed", None).await;
    store_history(&server, vec![history_entry(7, "task-7", "Standup", "Completed")]).await;

    let project = Project::empty();
    project.file("standup.toml", STANDUP_MATRIX);

    project
        .roster()
        .api(server.uri())
        .args(&["submit", "standup.toml"])
        .passes()
        .stdout_has("task-7  Completed\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn exhausted_quota_rejects_submission() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate-schedule"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let project = Project::empty();
    project.file("standup.toml", STANDUP_MATRIX);

    project
        .roster()
        .api(server.uri())
        .args(&["submit", "standup.toml"])
        .exits_with(1)
        .stderr_has("Error: submission quota exhausted\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn invalid_matrix_is_not_submitted() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate-schedule"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let project = Project::empty();
    project.file("empty.toml", "[[rooms]]\nname = \"Room 1\"\n");

    project
        .roster()
        .api(server.uri())
        .args(&["submit", "empty.toml"])
        .exits_with(1)
        .stderr_has("at least one worker is required");
}
