//! Book request assembly errors.

/// Why a book request could not be assembled.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum RequestErrorKind {
    /// A required selection was never supplied
    #[display("Missing required field: {}", _0)]
    MissingField(String),

    /// A selection was supplied but rejected
    #[display("Invalid request: {}", _0)]
    Invalid(String),
}

/// Request error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Request Error: {} at {}:{}", kind, file, line)]
pub struct RequestError {
    /// The specific error kind
    pub kind: RequestErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl RequestError {
    /// Create a new request error at the caller's location.
    #[track_caller]
    pub fn new(kind: RequestErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
