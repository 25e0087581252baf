//! Request types accepted by the workflows.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Negative prompt used when the caller supplies none.
pub const DEFAULT_NEGATIVE_PROMPT: &str = "low quality, blurry, bad composition";

/// A reference image supplied to steer the art style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceImage {
    /// Image on the local filesystem
    Path(PathBuf),
    /// Uploaded image bytes
    Upload {
        /// Client-supplied file name
        file_name: String,
        /// File contents
        data: Vec<u8>,
    },
}

impl ReferenceImage {
    /// File name used for type checks and logging.
    pub fn file_name(&self) -> String {
        match self {
            Self::Path(path) => path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            Self::Upload { file_name, .. } => file_name.clone(),
        }
    }

    /// Lowercased file extension, if any.
    pub fn extension(&self) -> Option<String> {
        let name = self.file_name();
        Path::new(&name)
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
    }
}

/// Everything the form collects for one book.
///
/// # Examples
///
/// ```
/// use storyloom_core::BookRequestBuilder;
///
/// let request = BookRequestBuilder::default()
///     .description("A young programmer's journey")
///     .genre("scifi")
///     .build()
///     .unwrap();
/// assert_eq!(request.genre().as_deref(), Some("scifi"));
/// assert!(request.custom_style().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder, derive_getters::Getters)]
#[builder(setter(into))]
pub struct BookRequest {
    /// Free-text book concept
    description: String,
    /// Selected genre
    #[builder(setter(into, strip_option), default)]
    genre: Option<String>,
    /// Selected custom style name
    #[builder(setter(into, strip_option), default)]
    custom_style: Option<String>,
    /// Uploaded reference image
    #[builder(setter(into, strip_option), default)]
    reference_image: Option<ReferenceImage>,
}

/// A single image synthesis call.
///
/// # Examples
///
/// ```
/// use storyloom_core::{SynthesisRequest, DEFAULT_NEGATIVE_PROMPT};
///
/// let request = SynthesisRequest::new("A castle at dusk", 30);
/// assert_eq!(request.negative_prompt(), DEFAULT_NEGATIVE_PROMPT);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct SynthesisRequest {
    /// What to draw
    prompt: String,
    /// What to avoid
    negative_prompt: String,
    /// Sampling steps
    steps: u32,
}

impl SynthesisRequest {
    /// Create a request with the default negative prompt.
    pub fn new(prompt: impl Into<String>, steps: u32) -> Self {
        Self {
            prompt: prompt.into(),
            negative_prompt: DEFAULT_NEGATIVE_PROMPT.to_string(),
            steps,
        }
    }

    /// Replace the negative prompt; an empty value keeps the default.
    pub fn with_negative_prompt(mut self, negative_prompt: impl Into<String>) -> Self {
        let negative_prompt = negative_prompt.into();
        if !negative_prompt.trim().is_empty() {
            self.negative_prompt = negative_prompt;
        }
        self
    }
}
