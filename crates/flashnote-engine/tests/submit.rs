//! Tests for note and deck creation.

mod common;

use common::{
    engine_for_mock, engine_without_anki, mock_action, mock_anki_error, mock_anki_response,
    setup_mock_server,
};
use flashnote_engine::notice::NoticeLevel;
use flashnote_engine::submit::EntryDraft;
use wiremock::matchers::{body_json, method};
use wiremock::{Mock, ResponseTemplate};

fn spanish_draft() -> EntryDraft {
    EntryDraft::new()
        .deck("Spanish")
        .template("Basic")
        .field("Front", "Hola")
        .field("Back", "Hello")
        .tag("greeting")
}

#[tokio::test]
async fn test_submit_sends_exact_note() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(body_json(serde_json::json!({
            "action": "addNote",
            "version": 6,
            "params": {
                "note": {
                    "deckName": "Spanish",
                    "modelName": "Basic",
                    "fields": {"Front": "Hola", "Back": "Hello"},
                    "tags": ["greeting"]
                }
            }
        })))
        .respond_with(mock_anki_response(1_496_198_395_707_i64))
        .expect(1)
        .mount(&server)
        .await;

    let (engine, notices) = engine_for_mock(&server);
    assert!(engine.entries().submit(&spanish_draft()).await);

    let notice = notices.last().unwrap();
    assert_eq!(notice.level, NoticeLevel::Success);
    assert_eq!(notice.message, "Note created successfully.");
}

#[tokio::test]
async fn test_submit_empty_required_field_sends_nothing() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .respond_with(mock_anki_response(1_i64))
        .expect(0)
        .mount(&server)
        .await;

    let draft = EntryDraft::new()
        .deck("Spanish")
        .template("Basic")
        .field("Front", "")
        .field("Back", "Hello");

    let (engine, notices) = engine_for_mock(&server);
    assert!(!engine.entries().submit(&draft).await);

    let notice = notices.last().unwrap();
    assert_eq!(notice.level, NoticeLevel::Error);
    assert!(notice.message.contains("Front"));
}

#[tokio::test]
async fn test_submit_without_deck_sends_nothing() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .respond_with(mock_anki_response(1_i64))
        .expect(0)
        .mount(&server)
        .await;

    let mut draft = spanish_draft();
    draft.deck = None;

    let (engine, notices) = engine_for_mock(&server);
    assert!(!engine.entries().submit(&draft).await);
    assert!(notices.last().unwrap().message.contains("deck"));
}

#[tokio::test]
async fn test_submit_empty_third_field_is_allowed() {
    let server = setup_mock_server().await;
    mock_action(&server, "addNote", mock_anki_response(42_i64)).await;

    let draft = spanish_draft().field("Extra", "");

    let (engine, _notices) = engine_for_mock(&server);
    assert!(engine.entries().submit(&draft).await);

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["params"]["note"]["fields"]["Extra"], "");
}

#[tokio::test]
async fn test_submit_duplicate_is_reported() {
    let server = setup_mock_server().await;
    mock_action(
        &server,
        "addNote",
        mock_anki_error("cannot create note because it is a duplicate"),
    )
    .await;

    let (engine, notices) = engine_for_mock(&server);
    assert!(!engine.entries().submit(&spanish_draft()).await);

    let notice = notices.last().unwrap();
    assert_eq!(notice.level, NoticeLevel::Error);
    assert!(notice.message.contains("cannot create note because it is a duplicate"));
}

#[tokio::test]
async fn test_submit_anki_not_running() {
    let (engine, notices) = engine_without_anki();
    assert!(!engine.entries().submit(&spanish_draft()).await);
    assert!(notices.last().unwrap().message.contains("Make sure Anki is running"));
}

#[tokio::test]
async fn test_create_deck() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(body_json(serde_json::json!({
            "action": "createDeck",
            "version": 6,
            "params": {"deck": "Japanese::Vocabulary"}
        })))
        .respond_with(mock_anki_response(1_519_323_742_721_i64))
        .expect(1)
        .mount(&server)
        .await;

    let (engine, notices) = engine_for_mock(&server);
    assert!(engine.entries().create_deck("  Japanese::Vocabulary ").await);
    assert_eq!(notices.last().unwrap().level, NoticeLevel::Success);
}

#[tokio::test]
async fn test_create_deck_blank_name() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .respond_with(mock_anki_response(1_i64))
        .expect(0)
        .mount(&server)
        .await;

    let (engine, notices) = engine_for_mock(&server);
    assert!(!engine.entries().create_deck("   ").await);
    assert_eq!(notices.last().unwrap().level, NoticeLevel::Error);
}

#[tokio::test]
async fn test_create_deck_failure() {
    let server = setup_mock_server().await;
    mock_action(
        &server,
        "createDeck",
        ResponseTemplate::new(200).set_body_string("not json"),
    )
    .await;

    let (engine, notices) = engine_for_mock(&server);
    assert!(!engine.entries().create_deck("Spanish").await);

    let notice = notices.last().unwrap();
    assert_eq!(notice.level, NoticeLevel::Error);
    assert!(notice.message.starts_with("Failed to create the deck"));
}
