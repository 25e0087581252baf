//! Scripted in-memory backends.
//!
//! These let workflow and shell tests run without an Ollama server or a
//! diffusion backend. Enable with the `testing` feature.

use crate::{ImageSynthesis, TextCompletion};
use async_trait::async_trait;
use std::sync::{Arc, Mutex, PoisonError};
use storyloom_core::{Illustration, SynthesisRequest};
use storyloom_error::{ModelsError, ModelsErrorKind, StoryloomResult};

/// Smallest valid PNG signature, used as placeholder image data.
pub const PLACEHOLDER_PNG: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// A single scripted text response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockResponse {
    /// Return this completion
    Success(String),
    /// Fail with this transport message
    Error(String),
}

/// Behavior of [`MockTextCompletion`].
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Always return the same text
    Fixed(String),
    /// Return responses in order, repeating the last one when exhausted
    Sequence(Vec<MockResponse>),
}

/// Text backend returning scripted completions and recording prompts.
#[derive(Debug, Clone)]
pub struct MockTextCompletion {
    behavior: MockBehavior,
    prompts: Arc<Mutex<Vec<String>>>,
    model_name: String,
}

impl MockTextCompletion {
    /// Always answer with `text`.
    pub fn new_fixed(text: impl Into<String>) -> Self {
        Self::new_with_behavior(MockBehavior::Fixed(text.into()))
    }

    /// Answer with the given responses in order.
    pub fn new_sequence(responses: Vec<MockResponse>) -> Self {
        Self::new_with_behavior(MockBehavior::Sequence(responses))
    }

    /// Create a mock with custom behavior.
    pub fn new_with_behavior(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            prompts: Arc::new(Mutex::new(Vec::new())),
            model_name: "mock-text".to_string(),
        }
    }

    /// Number of `complete` calls so far.
    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Every prompt received, in order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

#[async_trait]
impl TextCompletion for MockTextCompletion {
    async fn complete(&self, prompt: &str) -> StoryloomResult<String> {
        let index = {
            let mut prompts = self.prompts.lock().unwrap_or_else(PoisonError::into_inner);
            prompts.push(prompt.to_string());
            prompts.len() - 1
        };

        let response = match &self.behavior {
            MockBehavior::Fixed(text) => MockResponse::Success(text.clone()),
            MockBehavior::Sequence(responses) => responses
                .get(index)
                .or_else(|| responses.last())
                .cloned()
                .unwrap_or_else(|| MockResponse::Error("empty mock sequence".to_string())),
        };

        match response {
            MockResponse::Success(text) => Ok(text),
            MockResponse::Error(message) => Err(ModelsError::new(ModelsErrorKind::Backend(message)).into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}

/// Image backend returning a placeholder PNG and recording requests.
#[derive(Debug, Clone)]
pub struct MockImageSynthesis {
    failing_calls: Vec<usize>,
    requests: Arc<Mutex<Vec<SynthesisRequest>>>,
    model_name: String,
}

impl Default for MockImageSynthesis {
    fn default() -> Self {
        Self::new()
    }
}

impl MockImageSynthesis {
    /// Always succeed.
    pub fn new() -> Self {
        Self {
            failing_calls: Vec::new(),
            requests: Arc::new(Mutex::new(Vec::new())),
            model_name: "mock-diffusion".to_string(),
        }
    }

    /// Fail on the given zero-based call indices, succeed otherwise.
    pub fn failing_on(calls: impl IntoIterator<Item = usize>) -> Self {
        Self {
            failing_calls: calls.into_iter().collect(),
            ..Self::new()
        }
    }

    /// Number of `synthesize` calls so far.
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Every request received, in order.
    pub fn requests(&self) -> Vec<SynthesisRequest> {
        self.requests.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

#[async_trait]
impl ImageSynthesis for MockImageSynthesis {
    async fn synthesize(&self, request: &SynthesisRequest) -> StoryloomResult<Illustration> {
        let index = {
            let mut requests = self.requests.lock().unwrap_or_else(PoisonError::into_inner);
            requests.push(request.clone());
            requests.len() - 1
        };

        if self.failing_calls.contains(&index) {
            return Err(ModelsError::new(ModelsErrorKind::Backend(format!(
                "mock synthesis failure on call {}",
                index
            )))
            .into());
        }

        Ok(Illustration::png(
            PLACEHOLDER_PNG.to_vec(),
            request.prompt().clone(),
        ))
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }

    fn device(&self) -> Option<String> {
        Some("cpu".to_string())
    }
}
