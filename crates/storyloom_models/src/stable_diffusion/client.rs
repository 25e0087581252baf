//! HTTP client for an AUTOMATIC1111-compatible Stable Diffusion API.

use super::dto::{CheckpointOptions, MemoryReport};
use super::{
    ComputeDevice, StableDiffusionError, StableDiffusionErrorKind, StableDiffusionResult,
    Txt2ImgRequest, Txt2ImgResponse,
};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use std::time::Duration;
use storyloom_core::{Illustration, StableDiffusionConfig, SynthesisRequest};
use storyloom_error::{ModelsError, StoryloomResult};
use storyloom_interface::ImageSynthesis;
use tracing::{debug, error, info, instrument, warn};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the diffusion backend.
///
/// Use [`StableDiffusionClient::connect`] to probe the device and load the
/// configured checkpoint before the first request.
#[derive(Debug, Clone)]
pub struct StableDiffusionClient {
    config: StableDiffusionConfig,
    client: reqwest::Client,
    base_url: String,
    device: Option<ComputeDevice>,
}

impl StableDiffusionClient {
    /// Create a client without contacting the backend.
    #[instrument(skip(config), fields(url = %config.url(), model = %config.default_model()))]
    pub fn new(config: &StableDiffusionConfig) -> StableDiffusionResult<Self> {
        debug!("Creating Stable Diffusion client");

        reqwest::Url::parse(config.url()).map_err(|e| {
            StableDiffusionError::new(StableDiffusionErrorKind::InvalidConfiguration(format!(
                "Invalid Stable Diffusion URL '{}': {}",
                config.url(),
                e
            )))
        })?;

        let client = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(|e| {
                StableDiffusionError::new(StableDiffusionErrorKind::InvalidConfiguration(
                    e.to_string(),
                ))
            })?;

        Ok(Self {
            base_url: config.url().trim_end_matches('/').to_string(),
            config: config.clone(),
            client,
            device: None,
        })
    }

    /// Create a client, select the compute device and load the default
    /// checkpoint.
    ///
    /// # Errors
    ///
    /// Fails if the backend is unreachable or refuses the checkpoint.
    #[instrument(skip(config), fields(url = %config.url(), model = %config.default_model()))]
    pub async fn connect(config: &StableDiffusionConfig) -> StableDiffusionResult<Self> {
        let mut client = Self::new(config)?;
        let device = client.probe_device().await?;
        client.device = Some(device);
        client.load_checkpoint(config.default_model()).await?;

        info!(
            device = %device,
            precision = device.precision(),
            "Stable Diffusion backend ready"
        );
        Ok(client)
    }

    /// Configuration this client was built from.
    pub fn config(&self) -> &StableDiffusionConfig {
        &self.config
    }

    /// Device selected by [`connect`](Self::connect), if it ran.
    pub fn compute_device(&self) -> Option<ComputeDevice> {
        self.device
    }

    /// Ask the backend whether an accelerator is usable and pick a device.
    #[instrument(skip(self))]
    pub async fn probe_device(&self) -> StableDiffusionResult<ComputeDevice> {
        let url = format!("{}/sdapi/v1/memory", self.base_url);
        debug!(%url, "Probing compute device");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.unreachable(e))?;
        let response = check_status(response).await?;

        let report: MemoryReport = response.json().await.map_err(|e| {
            StableDiffusionError::new(StableDiffusionErrorKind::MalformedResponse(format!(
                "Failed to parse memory report: {}",
                e
            )))
        })?;

        let device = ComputeDevice::select(*self.config.device(), report.cuda_available());
        debug!(%device, "Selected compute device");
        Ok(device)
    }

    /// Switch the backend to the named checkpoint.
    #[instrument(skip(self))]
    pub async fn load_checkpoint(&self, model: &str) -> StableDiffusionResult<()> {
        let url = format!("{}/sdapi/v1/options", self.base_url);
        info!(%model, "Loading checkpoint");

        let response = self
            .client
            .post(&url)
            .json(&CheckpointOptions {
                sd_model_checkpoint: model,
            })
            .send()
            .await
            .map_err(|e| self.unreachable(e))?;

        check_status(response).await.map_err(|e| {
            StableDiffusionError::new(StableDiffusionErrorKind::CheckpointLoad {
                model: model.to_string(),
                reason: e.kind.to_string(),
            })
        })?;

        debug!("Checkpoint loaded");
        Ok(())
    }

    /// Run one text-to-image request and return the raw response.
    #[instrument(skip(self, request), fields(steps = request.steps, prompt_length = request.prompt.len()))]
    pub async fn txt2img(&self, request: &Txt2ImgRequest) -> StableDiffusionResult<Txt2ImgResponse> {
        let url = format!("{}/sdapi/v1/txt2img", self.base_url);
        debug!(%url, "Sending txt2img request");

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| self.unreachable(e))?;
        let response = check_status(response).await?;

        let body: Txt2ImgResponse = response.json().await.map_err(|e| {
            error!("Failed to parse txt2img response: {}", e);
            StableDiffusionError::new(StableDiffusionErrorKind::MalformedResponse(format!(
                "Failed to parse txt2img response: {}",
                e
            )))
        })?;

        debug!(images = body.images.len(), "txt2img complete");
        Ok(body)
    }

    fn unreachable(&self, e: reqwest::Error) -> StableDiffusionError {
        warn!(error = %e, url = %self.base_url, "Stable Diffusion request failed");
        StableDiffusionError::new(StableDiffusionErrorKind::Unreachable(format!(
            "{}: {}",
            self.base_url, e
        )))
    }
}

async fn check_status(response: reqwest::Response) -> StableDiffusionResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .text()
        .await
        .ok()
        .filter(|body| !body.trim().is_empty())
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown").to_string());
    error!(status = status.as_u16(), %message, "Stable Diffusion backend returned error");

    Err(StableDiffusionError::new(StableDiffusionErrorKind::Status {
        status: status.as_u16(),
        message,
    }))
}

/// Decode the first image of a response, tolerating a `data:` URI prefix.
fn decode_first_image(response: &Txt2ImgResponse) -> StableDiffusionResult<Vec<u8>> {
    let encoded = response
        .images
        .first()
        .ok_or_else(|| StableDiffusionError::new(StableDiffusionErrorKind::EmptyResponse))?;

    let payload = match encoded.split_once(',') {
        Some((prefix, rest)) if prefix.starts_with("data:") => rest,
        _ => encoded.as_str(),
    };

    STANDARD
        .decode(payload.trim())
        .map_err(|e| StableDiffusionError::new(StableDiffusionErrorKind::Decode(e.to_string())))
}

#[async_trait::async_trait]
impl ImageSynthesis for StableDiffusionClient {
    #[instrument(skip(self, request), fields(model = %self.config.default_model()))]
    async fn synthesize(&self, request: &SynthesisRequest) -> StoryloomResult<Illustration> {
        let body = Txt2ImgRequest::from(request);
        let response = self.txt2img(&body).await.map_err(ModelsError::from)?;
        let bytes = decode_first_image(&response).map_err(ModelsError::from)?;

        debug!(bytes = bytes.len(), "Decoded illustration");
        Ok(Illustration::png(bytes, request.prompt().clone()))
    }

    fn provider_name(&self) -> &'static str {
        "stable_diffusion"
    }

    fn model_name(&self) -> &str {
        self.config.default_model()
    }

    fn device(&self) -> Option<String> {
        self.device.map(|d| d.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(images: &[&str]) -> Txt2ImgResponse {
        Txt2ImgResponse {
            images: images.iter().map(|s| s.to_string()).collect(),
            info: None,
        }
    }

    #[test]
    fn decodes_plain_and_data_uri_payloads() {
        assert_eq!(decode_first_image(&response(&["iVBORw=="])).unwrap(), b"\x89PNG");
        assert_eq!(
            decode_first_image(&response(&["data:image/png;base64,iVBORw=="])).unwrap(),
            b"\x89PNG"
        );
    }

    #[test]
    fn empty_image_list_is_reported() {
        let err = decode_first_image(&response(&[])).unwrap_err();
        assert_eq!(err.kind, StableDiffusionErrorKind::EmptyResponse);
    }

    #[test]
    fn invalid_base64_is_a_decode_error() {
        let err = decode_first_image(&response(&["***"])).unwrap_err();
        assert!(matches!(err.kind, StableDiffusionErrorKind::Decode(_)));
    }

    #[test]
    fn bad_url_is_rejected_up_front() {
        let config = StableDiffusionConfig::new("sdxl", "not a url");
        let err = StableDiffusionClient::new(&config).unwrap_err();
        assert!(matches!(
            err.kind,
            StableDiffusionErrorKind::InvalidConfiguration(_)
        ));
    }

    #[test]
    fn device_is_unknown_until_connected() {
        let config = StableDiffusionConfig::new("sdxl", "http://localhost:7860/");
        let client = StableDiffusionClient::new(&config).unwrap();
        assert_eq!(client.device(), None);
        assert_eq!(client.base_url, "http://localhost:7860");
    }
}
