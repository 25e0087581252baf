//! Top-level error wrapper types.

use crate::{
    ConfigError, IllustrationError, ModelsError, NarrativeError, OutputError, RequestError,
    ServerError,
};

/// Every error condition Storyloom can surface.
///
/// # Examples
///
/// ```
/// use storyloom_error::{StoryloomError, StoryloomErrorKind, OutputError, OutputErrorKind};
///
/// let output_err = OutputError::new(OutputErrorKind::Serialize("recursion limit".to_string()));
/// let err: StoryloomError = output_err.into();
/// assert!(matches!(err.kind(), StoryloomErrorKind::Output(_)));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum StoryloomErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Book request could not be assembled
    #[from(RequestError)]
    Request(RequestError),
    /// Writing results failed
    #[from(OutputError)]
    Output(OutputError),
    /// Model backend error
    #[from(ModelsError)]
    Models(ModelsError),
    /// Narrative workflow error
    #[from(NarrativeError)]
    Narrative(NarrativeError),
    /// Illustration workflow error
    #[from(IllustrationError)]
    Illustration(IllustrationError),
    /// Presentation shell error
    #[from(ServerError)]
    Server(ServerError),
}

/// Storyloom error with kind discrimination.
///
/// # Examples
///
/// ```
/// use storyloom_error::{StoryloomResult, ConfigError, ConfigErrorKind};
///
/// fn might_fail() -> StoryloomResult<()> {
///     Err(ConfigError::new(ConfigErrorKind::Parse("missing field".to_string())))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Storyloom Error: {}", _0)]
pub struct StoryloomError(Box<StoryloomErrorKind>);

impl StoryloomError {
    /// Create a new error from a kind.
    pub fn new(kind: StoryloomErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &StoryloomErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to StoryloomErrorKind
impl<T> From<T> for StoryloomError
where
    T: Into<StoryloomErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Storyloom operations.
pub type StoryloomResult<T> = std::result::Result<T, StoryloomError>;
