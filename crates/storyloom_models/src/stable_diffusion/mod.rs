//! Stable Diffusion image synthesis client.

mod client;
mod device;
mod dto;
mod error;

pub use client::StableDiffusionClient;
pub use device::ComputeDevice;
pub use dto::{Txt2ImgRequest, Txt2ImgResponse};
pub use error::{StableDiffusionError, StableDiffusionErrorKind, StableDiffusionResult};
