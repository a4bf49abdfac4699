//! Export client integration tests
//!
//! Tests `ExportClient::export` against a `wiremock` mock server: the
//! turn array is posted as JSON and the response bytes come back with
//! the dated `.jsonl` filename.

use std::time::Duration;

use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use joojit::clients::ExportClient;
use joojit::ledger::Turn;

fn make_client(base: &str) -> ExportClient {
    ExportClient::new(base, Duration::from_secs(5)).expect("client construction")
}

#[tokio::test]
async fn export_posts_turn_array_and_returns_bytes() {
    let server = MockServer::start().await;

    let jsonl = "{\"prompt\":\"hi\"}\n{\"prompt\":\"again\"}\n";
    Mock::given(method("POST"))
        .and(path("/export"))
        .and(body_partial_json(serde_json::json!([
            {"prompt": "hi", "reply": "hello!"}
        ])))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(jsonl.as_bytes().to_vec(), "application/x-ndjson"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = make_client(&server.uri());
    let turns = vec![Turn::new("hi", "hello!", "gpt-4o", 120)];

    let artifact = client.export(&turns).await.expect("export");
    assert_eq!(artifact.bytes, jsonl.as_bytes());
    assert!(artifact.filename.starts_with("session_"));
    assert!(artifact.filename.ends_with(".jsonl"));
}

#[tokio::test]
async fn export_with_no_turns_fails_without_a_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/export"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = make_client(&server.uri());
    let result = client.export(&[]).await;
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("nothing to export"));
}

#[tokio::test]
async fn export_endpoint_failure_is_reported_not_fatal() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/export"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = make_client(&server.uri());
    let turns = vec![Turn::new("hi", "hello!", "gpt-4o", 120)];

    let result = client.export(&turns).await;
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("500"));
}
