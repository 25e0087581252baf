//! Storyloom - illustrated book generator.
//!
//! Storyloom turns a short book concept into an illustrated book. A local
//! Ollama model writes a story outline, the outline is split into chapters on
//! blank lines, each chapter is expanded into prose, and a Stable Diffusion
//! backend renders one illustration per chapter in a configurable art style.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use storyloom::{BookRequestBuilder, BookStudio, OllamaClient, StableDiffusionClient, StoryloomConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Arc::new(StoryloomConfig::from_file("config.json")?);
//!     let text = OllamaClient::from_config(config.ollama())?;
//!     let image = StableDiffusionClient::connect(config.stable_diffusion()).await?;
//!
//!     let studio = BookStudio::new(config, text, image);
//!     let request = BookRequestBuilder::default()
//!         .description("A young programmer's journey")
//!         .genre("scifi")
//!         .build()?;
//!
//!     let book = studio.create_book(request).await?;
//!     println!("{} chapters", book.chapters().len());
//!     Ok(())
//! }
//! ```
//!
//! # Cargo Features
//!
//! - `observability` - bridge `tracing` spans to OpenTelemetry (stdout exporter)
//! - `api` - enable tests that talk to live backends
//!
//! # Architecture
//!
//! - `storyloom_error` - error types
//! - `storyloom_core` - configuration and data types
//! - `storyloom_interface` - `TextCompletion` and `ImageSynthesis` traits
//! - `storyloom_models` - Ollama and Stable Diffusion clients
//! - `storyloom_narrative` - outline, chapter splitting, expansion, style lookup
//! - `storyloom_illustration` - illustration generation and style inference
//! - `storyloom_server` - book studio pipeline and HTML form server
//!
//! This crate (`storyloom`) re-exports everything for convenience.

pub use storyloom_core::*;
pub use storyloom_error::*;
pub use storyloom_illustration::*;
pub use storyloom_interface::*;
pub use storyloom_models::*;
pub use storyloom_narrative::*;
pub use storyloom_server::{
    BookStudio, MAX_UPLOAD_BYTES, NO_CUSTOM_STYLE, StudioStatus, create_router, render_book,
    render_error, render_form, serve, serve_listener,
};

pub mod telemetry;

// OpenTelemetry bridge
#[cfg(feature = "observability")]
pub mod observability;
