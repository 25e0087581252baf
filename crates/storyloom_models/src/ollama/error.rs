//! Error types for Ollama client.

use derive_more::{Display, Error};

pub use storyloom_error::OllamaErrorKind;

/// Ollama error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Ollama Error: {} at {}:{}", kind, file, line)]
pub struct OllamaError {
    /// The specific error kind
    pub kind: OllamaErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl OllamaError {
    /// Create a new Ollama error at the caller's location.
    #[track_caller]
    pub fn new(kind: OllamaErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Result type for Ollama operations.
pub type OllamaResult<T> = Result<T, OllamaError>;

impl From<OllamaError> for storyloom_error::ModelsError {
    fn from(err: OllamaError) -> Self {
        storyloom_error::ModelsError::new(storyloom_error::ModelsErrorKind::Ollama(err.kind))
    }
}
