//! Live narrative generation against a local Ollama server.
//!
//! Run with: cargo test --package storyloom_narrative --features api -- --ignored

#![cfg(feature = "api")]

use storyloom_models::OllamaClient;
use storyloom_narrative::NarrativeWorkflow;

#[tokio::test]
#[ignore] // Requires Ollama running locally
async fn test_live_book_generation() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let model = std::env::var("STORYLOOM_TEST_MODEL").unwrap_or_else(|_| "llama2".to_string());
    let client = OllamaClient::new(model)?;
    client.validate().await?;

    let workflow = NarrativeWorkflow::new(client, 2, Default::default());
    let book = workflow
        .generate_book("A lighthouse keeper befriends a storm", "Ink wash")
        .await?;

    assert!(!book.narrative().is_empty());
    assert!(book.chapters().len() <= 2);
    Ok(())
}
