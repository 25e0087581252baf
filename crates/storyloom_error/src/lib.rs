//! Error types for Storyloom.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! Every error converts into [`StoryloomError`], so workflow code can use `?`
//! across crate boundaries.
//!
//! # Examples
//!
//! ```
//! use storyloom_error::{NarrativeError, NarrativeErrorKind, StoryloomResult};
//!
//! fn fetch_outline() -> StoryloomResult<String> {
//!     Err(NarrativeError::new(NarrativeErrorKind::OutlineFailed(
//!         "Connection refused".to_string(),
//!     )))?
//! }
//!
//! assert!(fetch_outline().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod illustration;
mod models;
mod narrative;
mod output;
mod request;
mod server;

pub use config::{ConfigError, ConfigErrorKind};
pub use error::{StoryloomError, StoryloomErrorKind, StoryloomResult};
pub use illustration::{IllustrationError, IllustrationErrorKind};
#[cfg(feature = "ollama")]
pub use models::OllamaErrorKind;
#[cfg(feature = "stable_diffusion")]
pub use models::StableDiffusionErrorKind;
pub use models::{ModelsError, ModelsErrorKind, ModelsResult};
pub use narrative::{NarrativeError, NarrativeErrorKind};
pub use output::{OutputError, OutputErrorKind};
pub use request::{RequestError, RequestErrorKind};
pub use server::{ServerError, ServerErrorKind};
