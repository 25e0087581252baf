//! Error types for the Stable Diffusion client.

use derive_more::{Display, Error};

pub use storyloom_error::StableDiffusionErrorKind;

/// Stable Diffusion error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Stable Diffusion Error: {} at {}:{}", kind, file, line)]
pub struct StableDiffusionError {
    /// The specific error kind
    pub kind: StableDiffusionErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl StableDiffusionError {
    /// Create a new error at the caller's location.
    #[track_caller]
    pub fn new(kind: StableDiffusionErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Result type for Stable Diffusion operations.
pub type StableDiffusionResult<T> = Result<T, StableDiffusionError>;

impl From<StableDiffusionError> for storyloom_error::ModelsError {
    fn from(err: StableDiffusionError) -> Self {
        storyloom_error::ModelsError::new(storyloom_error::ModelsErrorKind::StableDiffusion(
            err.kind,
        ))
    }
}
