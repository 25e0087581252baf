//! Backend clients for Storyloom.
//!
//! Each backend sits behind its own feature flag:
//!
//! - **Ollama** (text completion) - Enable with `ollama` feature
//! - **Stable Diffusion** (image synthesis over the AUTOMATIC1111-compatible
//!   HTTP API) - Enable with `stable_diffusion` feature
//!
//! # Example
//!
//! ```no_run
//! # #[cfg(feature = "ollama")]
//! # {
//! use storyloom_models::OllamaClient;
//! use storyloom_interface::TextCompletion;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OllamaClient::new("llama2")?;
//! let outline = client.complete("Outline a story about a lighthouse").await?;
//! # Ok(())
//! # }
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

#[cfg(feature = "ollama")]
mod ollama;

#[cfg(feature = "stable_diffusion")]
mod stable_diffusion;

#[cfg(feature = "ollama")]
pub use ollama::{OllamaClient, OllamaError, OllamaErrorKind, OllamaResult};

#[cfg(feature = "stable_diffusion")]
pub use stable_diffusion::{
    ComputeDevice, StableDiffusionClient, StableDiffusionError, StableDiffusionErrorKind,
    StableDiffusionResult, Txt2ImgRequest, Txt2ImgResponse,
};
