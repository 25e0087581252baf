//! Book generation pipeline.

use serde::Serialize;
use std::sync::Arc;
use storyloom_core::{BookRequest, IllustratedBook, IllustratedChapter, StoryloomConfig};
use storyloom_error::{ServerError, ServerErrorKind, StoryloomResult};
use storyloom_illustration::IllustrationWorkflow;
use storyloom_interface::{ImageSynthesis, TextCompletion};
use storyloom_narrative::NarrativeWorkflow;
use tokio::sync::Semaphore;
use tracing::{debug, info, instrument, warn};

/// Style dropdown value meaning "no custom style selected".
pub const NO_CUSTOM_STYLE: &str = "None";

/// Backend summary reported by `/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, derive_getters::Getters)]
pub struct StudioStatus {
    /// Always `"ok"` when the studio answers
    status: String,
    /// Text backend provider
    text_provider: String,
    /// Text model name
    text_model: String,
    /// Image backend provider
    image_provider: String,
    /// Image model name
    image_model: String,
    /// Compute device the image backend runs on, if known
    device: Option<String>,
    /// Configured chapter cap
    max_chapters: usize,
}

/// Pipeline context shared by every request.
///
/// Holds the configuration and both workflows. Books are generated one at a
/// time; concurrent requests wait on an internal single-permit semaphore.
pub struct BookStudio<T: TextCompletion, I: ImageSynthesis> {
    config: Arc<StoryloomConfig>,
    narrative: NarrativeWorkflow<T>,
    illustration: IllustrationWorkflow<I>,
    pipeline: Semaphore,
}

impl<T: TextCompletion, I: ImageSynthesis> BookStudio<T, I> {
    /// Build a studio from configuration and two backends.
    pub fn new(config: Arc<StoryloomConfig>, text: T, image: I) -> Self {
        let narrative = NarrativeWorkflow::from_config(text, &config);
        let illustration = IllustrationWorkflow::from_config(image, &config);
        Self {
            config,
            narrative,
            illustration,
            pipeline: Semaphore::new(1),
        }
    }

    /// Configuration the studio was built from.
    pub fn config(&self) -> &StoryloomConfig {
        &self.config
    }

    /// Narrative workflow.
    pub fn narrative(&self) -> &NarrativeWorkflow<T> {
        &self.narrative
    }

    /// Illustration workflow.
    pub fn illustration(&self) -> &IllustrationWorkflow<I> {
        &self.illustration
    }

    /// Backend summary.
    pub fn status(&self) -> StudioStatus {
        let text = self.narrative.completion();
        let image = self.illustration.synthesis();
        StudioStatus {
            status: "ok".to_string(),
            text_provider: text.provider_name().to_string(),
            text_model: text.model_name().to_string(),
            image_provider: image.provider_name().to_string(),
            image_model: image.model_name().to_string(),
            device: image.device(),
            max_chapters: self.narrative.max_chapters(),
        }
    }

    /// Resolve the art style for a request.
    ///
    /// A reference image wins, then a custom style other than
    /// [`NO_CUSTOM_STYLE`], then the genre, then the default style.
    pub async fn resolve_art_style(&self, request: &BookRequest) -> String {
        if let Some(reference) = request.reference_image() {
            debug!(file = %reference.file_name(), "Inferring style from reference image");
            return self.illustration.infer_style_from_reference(reference).await;
        }

        let custom_style = request
            .custom_style()
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty() && *s != NO_CUSTOM_STYLE);
        let genre = request
            .genre()
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());

        self.narrative.resolve_style_prompt(genre, custom_style)
    }

    /// Generate and illustrate a book.
    ///
    /// Text failures abort the book. An illustration failure is recorded on
    /// its chapter and the remaining chapters are still illustrated.
    ///
    /// # Errors
    ///
    /// Fails on an empty description or a text backend failure.
    #[instrument(
        skip(self, request),
        fields(genre = ?request.genre(), custom_style = ?request.custom_style())
    )]
    pub async fn create_book(&self, request: BookRequest) -> StoryloomResult<IllustratedBook> {
        if request.description().trim().is_empty() {
            return Err(ServerError::new(ServerErrorKind::InvalidForm(
                "a book description is required".to_string(),
            ))
            .into());
        }

        let _permit = self
            .pipeline
            .acquire()
            .await
            .map_err(|_| ServerError::new(ServerErrorKind::PipelineUnavailable))?;

        let art_style = self.resolve_art_style(&request).await;
        info!(%art_style, "Resolved art style");

        let book = self
            .narrative
            .generate_book(request.description(), &art_style)
            .await?;
        let (narrative, chapters) = book.into_parts();

        let mut illustrated = Vec::with_capacity(chapters.len());
        for (index, text) in chapters.into_iter().enumerate() {
            let number = index + 1;
            let chapter = match self.illustration.illustrate_chapter(&text, &art_style).await {
                Ok(image) => IllustratedChapter::illustrated(number, text, image),
                Err(e) => {
                    warn!(chapter = number, error = %e, "Chapter illustration failed");
                    IllustratedChapter::failed(number, text, e.to_string())
                }
            };
            illustrated.push(chapter);
        }

        let book = IllustratedBook::new(narrative, art_style, illustrated);
        info!(
            chapters = book.chapters().len(),
            illustrations = book.illustration_count(),
            "Book complete"
        );
        Ok(book)
    }
}
