//! Outline, split and expand pipeline.

use crate::{StyleResolver, expansion_prompt, outline_prompt, split_into_chapters};
use storyloom_core::{Book, DEFAULT_MAX_CHAPTERS, StoryloomConfig};
use storyloom_error::{NarrativeError, NarrativeErrorKind, StoryloomResult};
use storyloom_interface::TextCompletion;
use tracing::{debug, info, instrument, warn};

/// Generates book text through a [`TextCompletion`] backend.
///
/// The pipeline is strictly sequential: one outline call, then one expansion
/// call per chapter in order. Any backend failure aborts the book.
#[derive(Debug, Clone)]
pub struct NarrativeWorkflow<T: TextCompletion> {
    completion: T,
    max_chapters: usize,
    styles: StyleResolver,
}

impl<T: TextCompletion> NarrativeWorkflow<T> {
    /// Create a workflow with an explicit chapter cap and catalog.
    pub fn new(completion: T, max_chapters: usize, styles: StyleResolver) -> Self {
        Self {
            completion,
            max_chapters,
            styles,
        }
    }

    /// Create a workflow using the configured chapter cap and catalog.
    pub fn from_config(completion: T, config: &StoryloomConfig) -> Self {
        Self::new(
            completion,
            *config.generation_settings().max_chapters(),
            StyleResolver::from_config(config),
        )
    }

    /// Create a workflow with defaults and an empty catalog.
    pub fn with_defaults(completion: T) -> Self {
        Self::new(completion, DEFAULT_MAX_CHAPTERS, StyleResolver::default())
    }

    /// The text backend.
    pub fn completion(&self) -> &T {
        &self.completion
    }

    /// Chapter cap applied when splitting.
    pub fn max_chapters(&self) -> usize {
        self.max_chapters
    }

    /// The style catalog.
    pub fn styles(&self) -> &StyleResolver {
        &self.styles
    }

    /// Resolve an art style prompt from the catalog.
    pub fn resolve_style_prompt(&self, genre: Option<&str>, custom_style: Option<&str>) -> String {
        self.styles.resolve(genre, custom_style)
    }

    /// Ask the backend for a story outline.
    #[instrument(
        skip(self, description, art_style),
        fields(model = %self.completion.model_name(), description_length = description.len())
    )]
    pub async fn generate_narrative(
        &self,
        description: &str,
        art_style: &str,
    ) -> StoryloomResult<String> {
        debug!("Requesting story outline");
        let prompt = outline_prompt(description, art_style);

        let narrative = self.completion.complete(&prompt).await.map_err(|e| {
            warn!(error = %e, "Outline generation failed");
            NarrativeError::new(NarrativeErrorKind::OutlineFailed(e.to_string()))
        })?;

        debug!(narrative_length = narrative.len(), "Received outline");
        Ok(narrative)
    }

    /// Split a narrative into chapter fragments using the configured cap.
    pub fn split_into_chapters(&self, narrative: &str) -> Vec<String> {
        split_into_chapters(narrative, self.max_chapters)
    }

    /// Expand one chapter fragment into prose.
    #[instrument(skip(self, fragment), fields(fragment_length = fragment.len()))]
    pub async fn expand_chapter(&self, fragment: &str) -> StoryloomResult<String> {
        self.completion.complete(&expansion_prompt(fragment)).await
    }

    /// Outline, split and expand.
    ///
    /// # Errors
    ///
    /// Returns a [`NarrativeError`] naming the failed step. Blank expansions
    /// are kept as they are; only backend failures abort.
    #[instrument(skip(self, description, art_style), fields(max_chapters = self.max_chapters))]
    pub async fn generate_book(&self, description: &str, art_style: &str) -> StoryloomResult<Book> {
        let narrative = self.generate_narrative(description, art_style).await?;
        let fragments = self.split_into_chapters(&narrative);
        info!(chapters = fragments.len(), "Split narrative into chapters");

        let mut chapters = Vec::with_capacity(fragments.len());
        for (index, fragment) in fragments.iter().enumerate() {
            let number = index + 1;
            debug!(chapter = number, "Expanding chapter");

            let text = self.expand_chapter(fragment).await.map_err(|e| {
                warn!(chapter = number, error = %e, "Chapter expansion failed");
                NarrativeError::new(NarrativeErrorKind::ExpansionFailed {
                    chapter: number,
                    message: e.to_string(),
                })
            })?;

            if text.trim().is_empty() {
                warn!(chapter = number, "Chapter expansion came back empty, keeping it");
            }
            chapters.push(text);
        }

        info!(chapters = chapters.len(), "Book text generated");
        Ok(Book::new(narrative, chapters))
    }
}
