//! `roster quota` specs

use crate::prelude::*;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn serve_quota(server: &MockServer, remaining: u32) {
    Mock::given(method("GET"))
        .and(path("/quota"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            json!({"quota_remaining": remaining, "last_reset_date": "2025-01-01T08:00:00"}),
        ))
        .mount(server)
        .await;
}

#[tokio::test(flavor = "multi_thread")]
async fn quota_shows_remaining_submissions() {
    let server = MockServer::start().await;
    serve_quota(&server, 3).await;

    cli()
        .api(server.uri())
        .args(&["quota"])
        .passes()
        .stdout_eq("Remaining submissions: 3\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn exhausted_quota_shows_next_reset() {
    let server = MockServer::start().await;
    serve_quota(&server, 0).await;

    cli()
        .api(server.uri())
        .args(&["quota"])
        .passes()
        .stdout_eq("Remaining submissions: 0\nNext reset: 2025-01-02 08:00 UTC\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn quota_json() {
    let server = MockServer::start().await;
    serve_quota(&server, 0).await;

    let json = cli()
        .api(server.uri())
        .args(&["-o", "json", "quota"])
        .passes()
        .stdout_json();

    assert_eq!(json["quota_remaining"], 0);
    assert_eq!(json["last_reset_date"], "2025-01-01T08:00:00");
    assert_eq!(json["next_reset"], "2025-01-02T08:00:00+00:00");
}

#[tokio::test(flavor = "multi_thread")]
async fn quota_failure_shows_unknown() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/quota"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    cli()
        .api(server.uri())
        .args(&["quota"])
        .passes()
        .stdout_eq("Remaining submissions: unknown\n");
}
