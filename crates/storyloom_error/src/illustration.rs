//! Illustration workflow error types.

/// Specific error conditions for illustration operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum IllustrationErrorKind {
    /// Prompt was empty after trimming
    #[display("Illustration prompt is empty")]
    EmptyPrompt,
    /// Zero sampling steps
    #[display("Invalid step count {}: must be at least 1", _0)]
    InvalidSteps(u32),
    /// Reference image could not be read
    #[display("Failed to read reference image: {}", _0)]
    ReferenceRead(String),
    /// Reference image has an unsupported file type
    #[display("Unsupported reference image type: {}", _0)]
    UnsupportedReference(String),
    /// Image backend failed to synthesize
    #[display("Synthesis failed: {}", _0)]
    SynthesisFailed(String),
    /// Writing the rendered image failed
    #[display("Failed to write image: {}", _0)]
    WriteFailed(String),
}

/// Error type for illustration operations.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Illustration Error: {} at line {} in {}", kind, line, file)]
pub struct IllustrationError {
    /// The specific error condition
    pub kind: IllustrationErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl IllustrationError {
    /// Create a new IllustrationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: IllustrationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
