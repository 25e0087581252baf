//! Tests for the Stable Diffusion image backend.
//!
//! The live tests need an AUTOMATIC1111-compatible server started with
//! `--api` on localhost:7860.
//!
//! Run with: cargo test --package storyloom_models --features stable_diffusion -- --ignored

#![cfg(feature = "stable_diffusion")]

use storyloom_core::{DevicePreference, StableDiffusionConfig, SynthesisRequest};
use storyloom_interface::ImageSynthesis;
use storyloom_models::{StableDiffusionClient, StableDiffusionErrorKind};

#[tokio::test]
async fn test_unreachable_backend() {
    let config = StableDiffusionConfig::new("sdxl", "http://127.0.0.1:9");
    let err = StableDiffusionClient::connect(&config).await.unwrap_err();
    assert!(matches!(err.kind, StableDiffusionErrorKind::Unreachable(_)));
}

#[tokio::test]
async fn test_synthesis_failure_surfaces_as_models_error() {
    let config = StableDiffusionConfig::new("sdxl", "http://127.0.0.1:9");
    let client = StableDiffusionClient::new(&config).expect("valid config");

    let err = client
        .synthesize(&SynthesisRequest::new("a lighthouse", 5))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Stable Diffusion"));
}

#[tokio::test]
#[ignore] // Requires a Stable Diffusion API server
async fn test_live_txt2img_returns_png() {
    let config = StableDiffusionConfig::default()
        .with_device(DevicePreference::Auto)
        .with_steps(10);
    let client = StableDiffusionClient::connect(&config)
        .await
        .expect("backend available");

    assert!(client.device().is_some());

    let image = client
        .synthesize(&SynthesisRequest::new("A red apple on a table", 10))
        .await
        .expect("synthesis failed");

    assert_eq!(image.mime(), "image/png");
    assert!(image.data().starts_with(&[0x89, 0x50, 0x4E, 0x47]));
}
