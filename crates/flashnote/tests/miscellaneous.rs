//! Tests for miscellaneous AnkiConnect actions.

mod common;

use common::{client_for_mock, mock_action, mock_anki_error, mock_anki_response, setup_mock_server};

#[tokio::test]
async fn test_request_permission_granted() {
    let server = setup_mock_server().await;
    mock_action(
        &server,
        "requestPermission",
        mock_anki_response(serde_json::json!({
            "permission": "granted",
            "requireApikey": false,
            "version": 6
        })),
    )
    .await;

    let client = client_for_mock(&server);
    let result = client.misc().request_permission().await.unwrap();

    assert!(result.is_granted());
    assert!(!result.require_api_key);
    assert_eq!(result.version, Some(6));
}

#[tokio::test]
async fn test_request_permission_denied() {
    let server = setup_mock_server().await;
    mock_action(
        &server,
        "requestPermission",
        mock_anki_response(serde_json::json!({"permission": "denied"})),
    )
    .await;

    let client = client_for_mock(&server);
    let result = client.misc().request_permission().await.unwrap();

    assert!(!result.is_granted());
    assert_eq!(result.version, None);
}

#[tokio::test]
async fn test_request_permission_error() {
    let server = setup_mock_server().await;
    mock_action(&server, "requestPermission", mock_anki_error("Internal error")).await;

    let client = client_for_mock(&server);
    let result = client.misc().request_permission().await;

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("Internal error"));
}
