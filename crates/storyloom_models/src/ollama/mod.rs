//! Ollama text completion client.

mod client;
mod error;

pub use client::OllamaClient;
pub use error::{OllamaError, OllamaErrorKind, OllamaResult};
