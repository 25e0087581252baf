//! Trait definitions for text and image backends.

use async_trait::async_trait;
use std::sync::Arc;
use storyloom_core::{Illustration, SynthesisRequest};
use storyloom_error::StoryloomResult;

/// A backend that completes a prompt with text.
#[async_trait]
pub trait TextCompletion: Send + Sync {
    /// Send one prompt and return the full completion.
    async fn complete(&self, prompt: &str) -> StoryloomResult<String>;

    /// Provider name (e.g., "ollama").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "llama2").
    fn model_name(&self) -> &str;
}

/// A backend that renders one image per request.
#[async_trait]
pub trait ImageSynthesis: Send + Sync {
    /// Render a single image.
    async fn synthesize(&self, request: &SynthesisRequest) -> StoryloomResult<Illustration>;

    /// Provider name (e.g., "stable-diffusion").
    fn provider_name(&self) -> &'static str;

    /// Model identifier.
    fn model_name(&self) -> &str;

    /// Human-readable compute device, when the backend reports one.
    fn device(&self) -> Option<String> {
        None
    }
}

#[async_trait]
impl<T: TextCompletion + ?Sized> TextCompletion for Arc<T> {
    async fn complete(&self, prompt: &str) -> StoryloomResult<String> {
        (**self).complete(prompt).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}

#[async_trait]
impl<T: ImageSynthesis + ?Sized> ImageSynthesis for Arc<T> {
    async fn synthesize(&self, request: &SynthesisRequest) -> StoryloomResult<Illustration> {
        (**self).synthesize(request).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }

    fn device(&self) -> Option<String> {
        (**self).device()
    }
}
