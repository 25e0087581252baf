//! Illustration generation.

use crate::{chapter_prompt, validate_reference};
use std::path::Path;
use storyloom_core::{
    ArtStyles, DEFAULT_STEPS, DEFAULT_STYLE_PROMPT, Illustration, ReferenceImage,
    StoryloomConfig, SynthesisRequest,
};
use storyloom_error::{IllustrationError, IllustrationErrorKind, StoryloomResult};
use storyloom_interface::ImageSynthesis;
use tracing::{debug, info, instrument, warn};

/// Renders illustrations through an [`ImageSynthesis`] backend.
#[derive(Debug, Clone)]
pub struct IllustrationWorkflow<I: ImageSynthesis> {
    synthesis: I,
    art_styles: ArtStyles,
    default_steps: u32,
}

impl<I: ImageSynthesis> IllustrationWorkflow<I> {
    /// Create a workflow with an explicit catalog and step count.
    pub fn new(synthesis: I, art_styles: ArtStyles, default_steps: u32) -> Self {
        Self {
            synthesis,
            art_styles,
            default_steps,
        }
    }

    /// Create a workflow from the configured catalog and step count.
    pub fn from_config(synthesis: I, config: &StoryloomConfig) -> Self {
        Self::new(
            synthesis,
            config.art_styles().clone(),
            *config.stable_diffusion().steps(),
        )
    }

    /// Create a workflow with an empty catalog and the default step count.
    pub fn with_defaults(synthesis: I) -> Self {
        Self::new(synthesis, ArtStyles::default(), DEFAULT_STEPS)
    }

    /// The image backend.
    pub fn synthesis(&self) -> &I {
        &self.synthesis
    }

    /// Steps used when a caller does not pass any.
    pub fn default_steps(&self) -> u32 {
        self.default_steps
    }

    /// Pick an art style for a reference image.
    ///
    /// The image content is not analysed: the first custom style in the
    /// catalog is returned, or the default style when the catalog has none.
    /// A reference that is missing or of an unsupported type is logged and
    /// otherwise ignored.
    #[instrument(skip(self, reference), fields(file = %reference.file_name()))]
    pub async fn infer_style_from_reference(&self, reference: &ReferenceImage) -> String {
        if let Err(e) = validate_reference(reference).await {
            warn!(error = %e, "Reference image not usable, inferring style anyway");
        }

        match self.art_styles.first_custom_style() {
            Some(style) => {
                debug!(style, "Using first custom style for reference image");
                style.to_string()
            }
            None => {
                warn!("No custom styles configured, using default style for reference image");
                DEFAULT_STYLE_PROMPT.to_string()
            }
        }
    }

    /// Render one illustration.
    ///
    /// `negative_prompt` falls back to the default negative prompt when absent
    /// or blank; `steps` falls back to the configured step count.
    ///
    /// # Errors
    ///
    /// Fails on an empty prompt, a step count of zero, or a backend failure.
    #[instrument(skip(self, prompt, negative_prompt), fields(prompt_length = prompt.len()))]
    pub async fn generate_illustration(
        &self,
        prompt: &str,
        negative_prompt: Option<&str>,
        steps: Option<u32>,
    ) -> StoryloomResult<Illustration> {
        if prompt.trim().is_empty() {
            return Err(IllustrationError::new(IllustrationErrorKind::EmptyPrompt).into());
        }

        let steps = steps.unwrap_or(self.default_steps);
        if steps == 0 {
            return Err(IllustrationError::new(IllustrationErrorKind::InvalidSteps(steps)).into());
        }

        let mut request = SynthesisRequest::new(prompt, steps);
        if let Some(negative) = negative_prompt {
            request = request.with_negative_prompt(negative);
        }

        debug!(
            steps,
            provider = self.synthesis.provider_name(),
            model = %self.synthesis.model_name(),
            "Rendering illustration"
        );

        let illustration = self.synthesis.synthesize(&request).await.map_err(|e| {
            warn!(error = %e, "Illustration synthesis failed");
            IllustrationError::new(IllustrationErrorKind::SynthesisFailed(e.to_string()))
        })?;

        debug!(bytes = illustration.data().len(), "Illustration rendered");
        Ok(illustration)
    }

    /// Render the illustration for one chapter in the given art style.
    pub async fn illustrate_chapter(
        &self,
        chapter: &str,
        art_style: &str,
    ) -> StoryloomResult<Illustration> {
        self.generate_illustration(&chapter_prompt(chapter, art_style), None, None)
            .await
    }
}

/// Base64 transport form of an illustration.
pub fn encode_base64(illustration: &Illustration) -> String {
    illustration.to_base64()
}

/// Write an illustration's bytes to disk.
///
/// # Errors
///
/// Fails with a write error if the file cannot be created.
#[instrument(skip(illustration), fields(path = %path.as_ref().display()))]
pub async fn save_illustration(
    illustration: &Illustration,
    path: impl AsRef<Path>,
) -> StoryloomResult<()> {
    let path = path.as_ref();
    tokio::fs::write(path, illustration.data()).await.map_err(|e| {
        IllustrationError::new(IllustrationErrorKind::WriteFailed(format!(
            "{}: {}",
            path.display(),
            e
        )))
    })?;
    info!(bytes = illustration.data().len(), "Illustration saved");
    Ok(())
}
