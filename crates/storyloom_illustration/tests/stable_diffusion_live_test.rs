//! Live illustration against a Stable Diffusion API server.
//!
//! Run with: cargo test --package storyloom_illustration --features api -- --ignored

#![cfg(feature = "api")]

use storyloom_core::StableDiffusionConfig;
use storyloom_illustration::IllustrationWorkflow;
use storyloom_models::StableDiffusionClient;

#[tokio::test]
#[ignore] // Requires a Stable Diffusion API server on localhost:7860
async fn test_live_chapter_illustration() -> anyhow::Result<()> {
    let config = StableDiffusionConfig::default().with_steps(10);
    let client = StableDiffusionClient::connect(&config).await?;
    let workflow = IllustrationWorkflow::with_defaults(client);

    let image = workflow
        .generate_illustration("A lighthouse in a storm, ink wash", None, Some(10))
        .await?;

    assert!(image.data().starts_with(&[0x89, 0x50, 0x4E, 0x47]));
    Ok(())
}
