//! Errors raised while writing finished books and illustrations.

/// Output failure conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum OutputErrorKind {
    /// The book could not be encoded as JSON
    #[display("Failed to serialize book: {}", _0)]
    Serialize(String),

    /// The destination could not be written
    #[display("Failed to write {}: {}", path, reason)]
    Write {
        /// Destination path
        path: String,
        /// I/O failure description
        reason: String,
    },
}

/// Output error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Output Error: {} at {}:{}", kind, file, line)]
pub struct OutputError {
    /// The specific error kind
    pub kind: OutputErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl OutputError {
    /// Create a new output error at the caller's location.
    #[track_caller]
    pub fn new(kind: OutputErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
