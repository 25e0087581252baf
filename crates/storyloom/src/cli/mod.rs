//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the storyloom binary.

mod backends;
mod commands;
mod generate;
mod illustrate;
mod serve;
mod styles;

pub use commands::{Cli, Commands};
pub use generate::{GenerateArgs, handle_generate};
pub use illustrate::handle_illustrate;
pub use serve::handle_serve;
pub use styles::handle_styles;
