//! Tests for deck AnkiConnect actions.

mod common;

use common::{client_for_mock, mock_action, mock_anki_error, mock_anki_response, setup_mock_server};
use wiremock::matchers::{body_partial_json, method};
use wiremock::Mock;

#[tokio::test]
async fn test_deck_names_and_ids() {
    let server = setup_mock_server().await;
    mock_action(
        &server,
        "deckNamesAndIds",
        mock_anki_response(serde_json::json!({
            "Default": 1,
            "Japanese": 1234567890
        })),
    )
    .await;

    let client = client_for_mock(&server);
    let decks = client.decks().names_and_ids().await.unwrap();

    assert_eq!(decks.len(), 2);
    assert_eq!(decks.get("Default"), Some(1));
    assert_eq!(decks.get("Japanese"), Some(1234567890));
}

#[tokio::test]
async fn test_deck_names_and_ids_empty() {
    let server = setup_mock_server().await;
    mock_action(&server, "deckNamesAndIds", mock_anki_response(serde_json::json!({}))).await;

    let client = client_for_mock(&server);
    let decks = client.decks().names_and_ids().await.unwrap();

    assert!(decks.is_empty());
}

#[tokio::test]
async fn test_create_deck() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(body_partial_json(serde_json::json!({
            "action": "createDeck",
            "params": {"deck": "Spanish::Verbs"}
        })))
        .respond_with(mock_anki_response(1519323742721_i64))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for_mock(&server);
    let deck_id = client.decks().create("Spanish::Verbs").await.unwrap();

    assert_eq!(deck_id, 1519323742721);
}

#[tokio::test]
async fn test_create_deck_error() {
    let server = setup_mock_server().await;
    mock_action(&server, "createDeck", mock_anki_error("invalid deck name")).await;

    let client = client_for_mock(&server);
    let result = client.decks().create("").await;

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("invalid deck name"));
}
