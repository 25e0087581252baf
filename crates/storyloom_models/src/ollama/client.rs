//! Ollama client implementation.

use ollama_rs::Ollama;
use ollama_rs::generation::completion::request::GenerationRequest as OllamaRequest;

use super::{OllamaError, OllamaErrorKind, OllamaResult};
use storyloom_core::{DEFAULT_OLLAMA_URL, OllamaConfig};
use storyloom_error::{ModelsError, StoryloomResult};
use storyloom_interface::TextCompletion;
use tracing::{debug, info, instrument, warn};

/// Port Ollama listens on when the URL does not name one.
const DEFAULT_OLLAMA_PORT: u16 = 11434;

/// Ollama client for local model execution.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    /// Ollama client instance
    client: Ollama,

    /// Model name (e.g., "llama2", "mistral")
    model_name: String,

    /// Ollama server URL
    base_url: String,
}

impl OllamaClient {
    /// Create a new Ollama client with default localhost connection.
    #[instrument(name = "ollama_client_new", skip(model_name))]
    pub fn new(model_name: impl Into<String>) -> OllamaResult<Self> {
        Self::new_with_url(model_name, DEFAULT_OLLAMA_URL)
    }

    /// Create a client from the `ollama` configuration section.
    pub fn from_config(config: &OllamaConfig) -> OllamaResult<Self> {
        Self::new_with_url(config.model().clone(), config.url().clone())
    }

    /// Create a new Ollama client with custom server URL.
    ///
    /// The URL may carry a port (`http://gpu-box:11500`); without one the
    /// standard Ollama port is used.
    #[instrument(name = "ollama_client_new_with_url", skip_all)]
    pub fn new_with_url(
        model_name: impl Into<String>,
        base_url: impl Into<String>,
    ) -> OllamaResult<Self> {
        let model_name = model_name.into();
        let base_url = base_url.into();

        info!(
            model = %model_name,
            url = %base_url,
            "Creating Ollama client"
        );

        let (host, port) = split_host_port(&base_url)?;
        let client = Ollama::builder().host(host).port(port).build();

        Ok(Self {
            client,
            model_name,
            base_url,
        })
    }

    /// Server URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check if Ollama server is running and model is available.
    #[instrument(skip(self))]
    pub async fn validate(&self) -> OllamaResult<()> {
        debug!("Validating Ollama server and model availability");

        let models = self.client.list_local_models().await.map_err(|e| {
            warn!(error = %e, "Failed to connect to Ollama server");
            OllamaError::new(OllamaErrorKind::ServerNotRunning(self.base_url.clone()))
        })?;
        debug!(count = models.len(), "Found local models");

        let tagged = format!("{}:latest", self.model_name);
        if !models
            .iter()
            .any(|m| m.name == self.model_name || m.name == tagged)
        {
            warn!(
                model = %self.model_name,
                available = ?models.iter().map(|m| &m.name).collect::<Vec<_>>(),
                "Model not pulled on this server"
            );
            return Err(OllamaError::new(OllamaErrorKind::ModelNotFound(
                self.model_name.clone(),
            )));
        }

        info!("Ollama server and model validated");
        Ok(())
    }
}

/// Split a base URL into the `scheme://host` part and a port.
fn split_host_port(base_url: &str) -> OllamaResult<(String, u16)> {
    let parsed = reqwest::Url::parse(base_url).map_err(|e| {
        OllamaError::new(OllamaErrorKind::InvalidConfiguration(format!(
            "Invalid Ollama URL '{}': {}",
            base_url, e
        )))
    })?;

    let host = parsed.host_str().ok_or_else(|| {
        OllamaError::new(OllamaErrorKind::InvalidConfiguration(format!(
            "Ollama URL '{}' has no host",
            base_url
        )))
    })?;

    let port = parsed.port().unwrap_or(DEFAULT_OLLAMA_PORT);
    Ok((format!("{}://{}", parsed.scheme(), host), port))
}

#[async_trait::async_trait]
impl TextCompletion for OllamaClient {
    #[instrument(skip(self, prompt), fields(model = %self.model_name, prompt_length = prompt.len()))]
    async fn complete(&self, prompt: &str) -> StoryloomResult<String> {
        debug!("Generating with Ollama");

        let request = OllamaRequest::new(self.model_name.clone(), prompt.to_string());

        let response = self.client.generate(request).await.map_err(|e| {
            ModelsError::from(OllamaError::new(OllamaErrorKind::ApiError(e.to_string())))
        })?;

        debug!(
            response_length = response.response.len(),
            "Received response from Ollama"
        );

        Ok(response.response)
    }

    fn provider_name(&self) -> &'static str {
        "ollama"
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_port_is_kept() {
        let (host, port) = split_host_port("http://gpu-box:11500").unwrap();
        assert_eq!(host, "http://gpu-box");
        assert_eq!(port, 11500);
    }

    #[test]
    fn missing_port_uses_ollama_default() {
        let (host, port) = split_host_port("https://ollama.internal").unwrap();
        assert_eq!(host, "https://ollama.internal");
        assert_eq!(port, DEFAULT_OLLAMA_PORT);
    }

    #[test]
    fn client_targets_configured_host_and_port() {
        let client = OllamaClient::new_with_url("llama2", "http://gpu-box:11500").unwrap();
        assert_eq!(client.client.url().host_str(), Some("gpu-box"));
        assert_eq!(client.client.url().port_or_known_default(), Some(11500));

        let client = OllamaClient::new("llama2").unwrap();
        assert_eq!(client.client.url().host_str(), Some("localhost"));
        assert_eq!(client.client.url().port_or_known_default(), Some(DEFAULT_OLLAMA_PORT));
    }

    #[test]
    fn garbage_url_is_invalid_configuration() {
        let err = split_host_port("not a url").unwrap_err();
        assert!(matches!(err.kind, OllamaErrorKind::InvalidConfiguration(_)));
    }
}
