//! Illustration workflow for Storyloom.
//!
//! Wraps an [`ImageSynthesis`](storyloom_interface::ImageSynthesis) backend
//! with prompt validation, the default negative prompt and step count, and
//! the reference-image style inference used by the form and CLI.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod prompt;
mod reference;
mod workflow;

pub use prompt::{CHAPTER_EXCERPT_CHARS, chapter_prompt, scene_prompt};
pub use reference::{SUPPORTED_REFERENCE_EXTENSIONS, validate_reference};
pub use workflow::{IllustrationWorkflow, encode_base64, save_illustration};
