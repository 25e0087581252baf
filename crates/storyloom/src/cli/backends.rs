//! Backend construction shared by the commands.

use storyloom_core::StoryloomConfig;
use storyloom_error::{ModelsError, StoryloomResult};
use storyloom_models::{OllamaClient, StableDiffusionClient};
use tracing::{info, warn};

/// Create the Ollama client and check the model is available.
///
/// An unavailable model is logged, not fatal: the server may come up later.
pub async fn text_backend(config: &StoryloomConfig) -> StoryloomResult<OllamaClient> {
    let client = OllamaClient::from_config(config.ollama()).map_err(ModelsError::from)?;
    match client.validate().await {
        Ok(()) => info!(model = %config.ollama().model(), "Text backend ready"),
        Err(e) => warn!(error = %e, "Text backend not ready"),
    }
    Ok(client)
}

/// Connect to the Stable Diffusion backend and load the checkpoint.
pub async fn image_backend(config: &StoryloomConfig) -> StoryloomResult<StableDiffusionClient> {
    let client = StableDiffusionClient::connect(config.stable_diffusion())
        .await
        .map_err(ModelsError::from)?;
    Ok(client)
}
