//! Compute device selection.

use serde::{Deserialize, Serialize};
use storyloom_core::DevicePreference;
use tracing::warn;

/// Device the diffusion backend samples on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum ComputeDevice {
    /// CUDA accelerator, half precision
    #[display("cuda")]
    Cuda,
    /// CPU fallback, full precision
    #[display("cpu")]
    Cpu,
}

impl ComputeDevice {
    /// Pick a device from the configured preference and what the backend
    /// reports. The accelerator is used when available, otherwise the CPU.
    pub fn select(preference: DevicePreference, cuda_available: bool) -> Self {
        match (preference, cuda_available) {
            (DevicePreference::Cpu, _) => Self::Cpu,
            (_, true) => Self::Cuda,
            (DevicePreference::Cuda, false) => {
                warn!("CUDA requested but the backend reports no accelerator, using CPU");
                Self::Cpu
            }
            (DevicePreference::Auto, false) => Self::Cpu,
        }
    }

    /// Floating point precision the backend runs at on this device.
    pub fn precision(&self) -> &'static str {
        match self {
            Self::Cuda => "fp16",
            Self::Cpu => "fp32",
        }
    }
}
