//! Presentation shell for Storyloom.
//!
//! [`BookStudio`] is the explicitly constructed pipeline context: it owns the
//! configuration and both workflows, resolves the art style for a request,
//! generates the book text, and illustrates each chapter in order. The
//! [`create_router`] function exposes it as a one-page HTML form over axum.
//!
//! # Routes
//!
//! - `GET /` - the book form
//! - `POST /books` - multipart form submission, renders the finished book
//! - `GET /health` - JSON status with model names and compute device

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api;
mod render;
mod server;
mod studio;

pub use api::{MAX_UPLOAD_BYTES, create_router};
pub use render::{render_book, render_error, render_form};
pub use server::{serve, serve_listener};
pub use storyloom_error::{ServerError, ServerErrorKind};
pub use studio::{BookStudio, NO_CUSTOM_STYLE, StudioStatus};
