//! Wire types for the AUTOMATIC1111-compatible HTTP API.

use serde::{Deserialize, Serialize};
use storyloom_core::SynthesisRequest;

/// Body of `POST /sdapi/v1/txt2img`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Txt2ImgRequest {
    /// Positive prompt
    pub prompt: String,
    /// Negative prompt
    pub negative_prompt: String,
    /// Sampling steps
    pub steps: u32,
    /// Images per batch
    pub batch_size: u32,
    /// Number of batches
    pub n_iter: u32,
    /// `-1` lets the backend pick a random seed
    pub seed: i64,
}

impl From<&SynthesisRequest> for Txt2ImgRequest {
    fn from(request: &SynthesisRequest) -> Self {
        Self {
            prompt: request.prompt().clone(),
            negative_prompt: request.negative_prompt().clone(),
            steps: *request.steps(),
            batch_size: 1,
            n_iter: 1,
            seed: -1,
        }
    }
}

/// Body returned by `POST /sdapi/v1/txt2img`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Txt2ImgResponse {
    /// Base64-encoded PNG images
    #[serde(default)]
    pub images: Vec<String>,
    /// Generation info as a JSON string
    #[serde(default)]
    pub info: Option<String>,
}

/// Body of `POST /sdapi/v1/options` when switching checkpoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct CheckpointOptions<'a> {
    pub sd_model_checkpoint: &'a str,
}

/// Body returned by `GET /sdapi/v1/memory`.
///
/// Only the CUDA section matters here; it is an object with an `error` key
/// when no accelerator is usable.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct MemoryReport {
    #[serde(default)]
    pub cuda: Option<serde_json::Value>,
}

impl MemoryReport {
    pub(crate) fn cuda_available(&self) -> bool {
        match &self.cuda {
            Some(serde_json::Value::Object(section)) => !section.contains_key("error"),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_carries_prompt_fields_and_single_image() {
        let request = SynthesisRequest::new("A harbour at dawn", 30)
            .with_negative_prompt("text, watermark");
        let body = Txt2ImgRequest::from(&request);

        assert_eq!(body.prompt, "A harbour at dawn");
        assert_eq!(body.negative_prompt, "text, watermark");
        assert_eq!(body.steps, 30);
        assert_eq!(body.batch_size, 1);
        assert_eq!(body.seed, -1);
    }

    #[test]
    fn cuda_report_with_error_means_no_accelerator() {
        let report: MemoryReport = serde_json::from_str(
            r#"{"ram": {"free": 1}, "cuda": {"error": "Torch not compiled with CUDA enabled"}}"#,
        )
        .unwrap();
        assert!(!report.cuda_available());

        let report: MemoryReport =
            serde_json::from_str(r#"{"cuda": {"system": {"free": 1, "total": 2}}}"#).unwrap();
        assert!(report.cuda_available());

        let report: MemoryReport = serde_json::from_str(r#"{"ram": {}}"#).unwrap();
        assert!(!report.cuda_available());
    }

    #[test]
    fn response_without_images_parses_as_empty() {
        let response: Txt2ImgResponse = serde_json::from_str(r#"{"parameters": {}}"#).unwrap();
        assert!(response.images.is_empty());
    }
}
