//! Common test utilities for flashnote-engine workflow tests.

use std::sync::Arc;

use flashnote_engine::Engine;
use flashnote_engine::notice::RecordingNotifier;
use serde::Serialize;
use wiremock::matchers::{body_partial_json, method};
use wiremock::{Mock, MockServer, ResponseTemplate, Times};

/// Start a new mock server for testing.
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Create an Engine connected to the mock server, with its notices recorded.
pub fn engine_for_mock(server: &MockServer) -> (Engine, Arc<RecordingNotifier>) {
    let client = flashnote_engine::ClientBuilder::new()
        .url(server.uri())
        .build();
    let notices = Arc::new(RecordingNotifier::new());
    let engine = Engine::from_client(client).with_notifier(notices.clone());
    (engine, notices)
}

/// Create an Engine pointed at a port nothing listens on.
#[allow(dead_code)]
pub fn engine_without_anki() -> (Engine, Arc<RecordingNotifier>) {
    let client = flashnote_engine::ClientBuilder::new()
        .url("http://127.0.0.1:59999")
        .build();
    let notices = Arc::new(RecordingNotifier::new());
    let engine = Engine::from_client(client).with_notifier(notices.clone());
    (engine, notices)
}

/// Create a successful AnkiConnect response.
pub fn mock_anki_response<T: Serialize>(result: T) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "result": result,
        "error": null
    }))
}

/// Create an error AnkiConnect response.
#[allow(dead_code)]
pub fn mock_anki_error(error: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "result": null,
        "error": error
    }))
}

/// Mount a mock for a specific action (expect exactly 1 call).
pub async fn mock_action(server: &MockServer, action: &str, response: ResponseTemplate) {
    mock_action_times(server, action, response, 1).await;
}

/// Mount a mock for a specific action with expected call count.
pub async fn mock_action_times(
    server: &MockServer,
    action: &str,
    response: ResponseTemplate,
    times: u64,
) {
    Mock::given(method("POST"))
        .and(body_partial_json(serde_json::json!({
            "action": action,
            "version": 6
        })))
        .respond_with(response)
        .expect(Times::from(times))
        .mount(server)
        .await;
}

/// Mount a mock for one `modelFieldNames` call, keyed by template name.
#[allow(dead_code)]
pub async fn mock_field_names(server: &MockServer, model: &str, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(body_partial_json(serde_json::json!({
            "action": "modelFieldNames",
            "params": {"modelName": model}
        })))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}
