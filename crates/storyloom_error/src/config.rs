//! Configuration loading errors.

/// What went wrong while loading `config.json` or its overrides.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ConfigErrorKind {
    /// The configuration file could not be read
    #[display("Failed to read configuration from {}: {}", path, reason)]
    Read {
        /// Path that was tried
        path: String,
        /// I/O failure description
        reason: String,
    },

    /// The document is not valid JSON or has the wrong shape
    #[display("Failed to parse configuration: {}", _0)]
    Parse(String),

    /// A setting has a value outside its domain
    #[display("Invalid value '{}' for {}: {}", value, key, reason)]
    InvalidValue {
        /// Dotted setting name, e.g. `generation_settings.max_chapters`
        key: String,
        /// Offending raw value
        value: String,
        /// Why it was rejected
        reason: String,
    },

    /// The environment override source could not be assembled
    #[display("Failed to read environment overrides: {}", _0)]
    Environment(String),
}

/// Configuration error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at {}:{}", kind, file, line)]
pub struct ConfigError {
    /// The specific error kind
    pub kind: ConfigErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new configuration error at the caller's location.
    ///
    /// # Examples
    ///
    /// ```
    /// use storyloom_error::{ConfigError, ConfigErrorKind};
    ///
    /// let err = ConfigError::new(ConfigErrorKind::Parse("expected `{`".to_string()));
    /// assert!(err.to_string().contains("expected `{`"));
    /// ```
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for [`ConfigErrorKind::InvalidValue`].
    #[track_caller]
    pub fn invalid_value(
        key: impl Into<String>,
        value: impl Into<String>,
        reason: impl std::fmt::Display,
    ) -> Self {
        Self::new(ConfigErrorKind::InvalidValue {
            key: key.into(),
            value: value.into(),
            reason: reason.to_string(),
        })
    }
}
