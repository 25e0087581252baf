//! Narrative workflow error types.

/// Specific error conditions for narrative operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum NarrativeErrorKind {
    /// Outline generation failed
    #[display("Failed to generate narrative: {}", _0)]
    OutlineFailed(String),
    /// Expanding a chapter fragment failed
    #[display("Failed to expand chapter {}: {}", chapter, message)]
    ExpansionFailed {
        /// One-based chapter number
        chapter: usize,
        /// Backend error message
        message: String,
    },
}

/// Error type for narrative operations.
///
/// # Examples
///
/// ```
/// use storyloom_error::{NarrativeError, NarrativeErrorKind};
///
/// let err = NarrativeError::new(NarrativeErrorKind::OutlineFailed("timeout".to_string()));
/// assert!(format!("{}", err).contains("Failed to generate narrative: timeout"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Narrative Error: {} at line {} in {}", kind, line, file)]
pub struct NarrativeError {
    /// The specific error condition
    pub kind: NarrativeErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl NarrativeError {
    /// Create a new NarrativeError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: NarrativeErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
