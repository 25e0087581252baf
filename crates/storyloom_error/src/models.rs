//! Model backend errors.

/// Ollama-specific error conditions.
#[cfg(feature = "ollama")]
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum OllamaErrorKind {
    /// Ollama server not running at the specified address
    #[display("Ollama server not running at {}", _0)]
    ServerNotRunning(String),

    /// Requested model has not been pulled on the server
    #[display("Model {} is not available; run `ollama pull {}`", _0, _0)]
    ModelNotFound(String),

    /// Ollama API returned an error
    #[display("API error: {}", _0)]
    ApiError(String),

    /// Invalid Ollama client configuration
    #[display("Invalid configuration: {}", _0)]
    InvalidConfiguration(String),
}

/// Stable Diffusion backend error conditions.
#[cfg(feature = "stable_diffusion")]
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum StableDiffusionErrorKind {
    /// Backend could not be reached
    #[display("Stable Diffusion backend unreachable at {}", _0)]
    Unreachable(String),

    /// Backend answered with a non-success status
    #[display("Backend returned status {}: {}", status, message)]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body or reason phrase
        message: String,
    },

    /// Checkpoint could not be loaded
    #[display("Failed to load checkpoint {}: {}", model, reason)]
    CheckpointLoad {
        /// Checkpoint name
        model: String,
        /// Failure reason
        reason: String,
    },

    /// Response body did not match the expected shape
    #[display("Malformed response: {}", _0)]
    MalformedResponse(String),

    /// Response contained no images
    #[display("Backend returned no images")]
    EmptyResponse,

    /// Image payload was not valid base64
    #[display("Image decoding failed: {}", _0)]
    Decode(String),

    /// Invalid client configuration
    #[display("Invalid configuration: {}", _0)]
    InvalidConfiguration(String),
}

/// Model backend error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display, derive_more::From)]
pub enum ModelsErrorKind {
    /// Ollama-specific error
    #[cfg(feature = "ollama")]
    #[display("Ollama: {}", _0)]
    Ollama(OllamaErrorKind),

    /// Stable Diffusion-specific error
    #[cfg(feature = "stable_diffusion")]
    #[display("Stable Diffusion: {}", _0)]
    StableDiffusion(StableDiffusionErrorKind),

    /// Backend failed without a provider-specific kind
    #[display("Backend failure: {}", _0)]
    Backend(String),
}

/// Model backend error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Models Error: {} at {}:{}", kind, file, line)]
pub struct ModelsError {
    /// The specific error kind
    pub kind: ModelsErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl ModelsError {
    /// Create a new models error.
    #[track_caller]
    pub fn new(kind: ModelsErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Result type for model operations.
pub type ModelsResult<T> = Result<T, ModelsError>;
