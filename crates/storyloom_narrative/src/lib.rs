//! Narrative workflow for Storyloom.
//!
//! Turns a book concept into prose through a text-completion backend:
//!
//! 1. ask for a story outline (main characters, plot structure, themes),
//! 2. split the outline on blank lines into chapter fragments,
//! 3. expand each fragment into a fuller chapter, one call at a time.
//!
//! The art-style catalog lookup used to steer illustrations lives here too,
//! since the style string is also fed into the outline prompt.
//!
//! # Example
//!
//! ```rust,ignore
//! use storyloom_narrative::{NarrativeWorkflow, StyleResolver};
//! use storyloom_models::OllamaClient;
//!
//! # async fn example(config: storyloom_core::StoryloomConfig) -> storyloom_error::StoryloomResult<()> {
//! let client = OllamaClient::from_config(config.ollama())?;
//! let workflow = NarrativeWorkflow::from_config(client, &config);
//!
//! let style = workflow.resolve_style_prompt(Some("scifi"), None);
//! let book = workflow.generate_book("A young programmer's journey", &style).await?;
//! println!("{} chapters", book.chapters().len());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod chapters;
mod prompts;
mod style;
mod workflow;

pub use chapters::split_into_chapters;
pub use prompts::{expansion_prompt, outline_prompt};
pub use style::{DEFAULT_STYLE_PROMPT, StyleResolver};
pub use workflow::NarrativeWorkflow;
