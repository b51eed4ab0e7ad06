//! Example: create a deck and add a note to it.
//!
//! Needs a running Anki with AnkiConnect installed.
//!
//! Run with: cargo run --example add_note

use flashnote::{AnkiClient, NoteBuilder};

#[tokio::main]
async fn main() -> flashnote::Result<()> {
    let client = AnkiClient::new();

    let permission = client.misc().request_permission().await?;
    if !permission.is_granted() {
        println!("Permission denied, continuing anyway");
    }

    let deck = "Example Deck";
    let deck_id = client.decks().create(deck).await?;
    println!("Using deck {} ({})", deck, deck_id);

    let fields = client.models().field_names("Basic").await?;
    println!("Basic has fields: {}", fields.join(", "));

    let note = NoteBuilder::new(deck, "Basic")
        .field("Front", "What is the capital of Japan?")
        .field("Back", "Tokyo")
        .tags(["geography", "capitals"])
        .build();

    match client.notes().add(&note).await {
        Ok(id) => println!("Created note with ID: {}", id),
        Err(e) => println!("Note creation failed (might be a duplicate): {}", e),
    }

    Ok(())
}
