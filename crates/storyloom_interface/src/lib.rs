//! Backend capability traits for Storyloom.
//!
//! The workflows only need two capabilities from the outside world:
//! turning a prompt into text, and turning a prompt into an image. Both are
//! expressed as narrow traits so the workflow logic can run against fakes.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use traits::{ImageSynthesis, TextCompletion};
