//! Configuration and data types for Storyloom.
//!
//! This crate provides the configuration store and the transient data types
//! passed between the narrative workflow, the illustration workflow, and the
//! presentation shell.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod book;
mod catalog;
mod config;
mod illustration;
mod request;

pub use book::{Book, IllustratedBook, IllustratedChapter};
pub use catalog::{ArtStyles, DEFAULT_STYLE_PROMPT, OrderedMap};
pub use config::{
    DEFAULT_CONFIG_FILE, DEFAULT_DIFFUSION_MODEL, DEFAULT_DIFFUSION_URL, DEFAULT_MAX_CHAPTERS,
    DEFAULT_OLLAMA_MODEL, DEFAULT_OLLAMA_URL, DEFAULT_STEPS, DevicePreference, ENV_PREFIX,
    GenerationSettings, OllamaConfig, StableDiffusionConfig, StoryloomConfig,
};
pub use illustration::{Illustration, PNG_MIME};
pub use request::{
    BookRequest, BookRequestBuilder, BookRequestBuilderError, DEFAULT_NEGATIVE_PROMPT,
    ReferenceImage, SynthesisRequest,
};
