//! Configuration loading.
//!
//! The configuration is a single JSON document read once at startup:
//!
//! ```json
//! {
//!   "ollama": { "model": "llama2", "url": "http://localhost:11434" },
//!   "stable_diffusion": { "default_model": "stabilityai/stable-diffusion-xl-base-1.0" },
//!   "generation_settings": { "max_chapters": 10 },
//!   "art_styles": {
//!     "genres": { "scifi": ["Neon cyberpunk"] },
//!     "custom_styles": { "manga": "Bold black-and-white line art" }
//!   }
//! }
//! ```
//!
//! Missing keys fall back to defaults. Scalar settings can be overridden from
//! the environment with the `STORYLOOM__` prefix, e.g. `STORYLOOM__OLLAMA__URL`.

use crate::ArtStyles;
use config::{Config, Environment};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use storyloom_error::{ConfigError, ConfigErrorKind, StoryloomResult};
use tracing::{debug, info, instrument};

/// Default text model.
pub const DEFAULT_OLLAMA_MODEL: &str = "llama2";
/// Default Ollama endpoint.
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";
/// Default diffusion checkpoint.
pub const DEFAULT_DIFFUSION_MODEL: &str = "stabilityai/stable-diffusion-xl-base-1.0";
/// Default Stable Diffusion API endpoint.
pub const DEFAULT_DIFFUSION_URL: &str = "http://localhost:7860";
/// Default number of sampling steps.
pub const DEFAULT_STEPS: u32 = 50;
/// Default chapter cap.
pub const DEFAULT_MAX_CHAPTERS: usize = 10;
/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "STORYLOOM";
/// Configuration file looked up when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

/// Text-generation backend section (`ollama`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct OllamaConfig {
    /// Model name served by Ollama
    #[serde(default = "default_ollama_model")]
    model: String,
    /// Base URL of the Ollama server
    #[serde(default = "default_ollama_url")]
    url: String,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            model: default_ollama_model(),
            url: default_ollama_url(),
        }
    }
}

impl OllamaConfig {
    /// Create a section with explicit values.
    pub fn new(model: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            url: url.into(),
        }
    }
}

/// Which compute device the diffusion backend should run on.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum DevicePreference {
    /// Use the accelerator when the backend reports one
    #[default]
    #[display("auto")]
    Auto,
    /// Require the accelerator
    #[display("cuda")]
    Cuda,
    /// Force CPU sampling
    #[display("cpu")]
    Cpu,
}

impl std::str::FromStr for DevicePreference {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "cuda" | "gpu" => Ok(Self::Cuda),
            "cpu" => Ok(Self::Cpu),
            other => Err(ConfigError::invalid_value(
                "stable_diffusion.device",
                other,
                "expected auto, cuda or cpu",
            )),
        }
    }
}

/// Image backend section (`stable_diffusion`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct StableDiffusionConfig {
    /// Checkpoint loaded at startup
    #[serde(default = "default_diffusion_model")]
    default_model: String,
    /// Base URL of the Stable Diffusion API
    #[serde(default = "default_diffusion_url")]
    url: String,
    /// Device preference
    #[serde(default)]
    device: DevicePreference,
    /// Sampling steps when a caller does not specify any
    #[serde(default = "default_steps")]
    steps: u32,
}

impl Default for StableDiffusionConfig {
    fn default() -> Self {
        Self {
            default_model: default_diffusion_model(),
            url: default_diffusion_url(),
            device: DevicePreference::default(),
            steps: default_steps(),
        }
    }
}

impl StableDiffusionConfig {
    /// Create a section with explicit model and URL.
    pub fn new(default_model: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            default_model: default_model.into(),
            url: url.into(),
            ..Self::default()
        }
    }

    /// Set the device preference.
    pub fn with_device(mut self, device: DevicePreference) -> Self {
        self.device = device;
        self
    }

    /// Set the default step count.
    pub fn with_steps(mut self, steps: u32) -> Self {
        self.steps = steps;
        self
    }
}

/// Generation limits section (`generation_settings`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct GenerationSettings {
    /// Upper bound on chapters taken from a narrative
    #[serde(default = "default_max_chapters")]
    max_chapters: usize,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            max_chapters: default_max_chapters(),
        }
    }
}

impl GenerationSettings {
    /// Create settings with an explicit chapter cap.
    pub fn new(max_chapters: usize) -> Self {
        Self { max_chapters }
    }
}

/// The full configuration document.
///
/// Immutable once loaded; share it behind an `Arc`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct StoryloomConfig {
    /// Text backend
    #[serde(default)]
    ollama: OllamaConfig,
    /// Image backend
    #[serde(default)]
    stable_diffusion: StableDiffusionConfig,
    /// Generation limits
    #[serde(default)]
    generation_settings: GenerationSettings,
    /// Art-style catalog
    #[serde(default)]
    art_styles: ArtStyles,
}

impl StoryloomConfig {
    /// Assemble a configuration from its sections.
    pub fn new(
        ollama: OllamaConfig,
        stable_diffusion: StableDiffusionConfig,
        generation_settings: GenerationSettings,
        art_styles: ArtStyles,
    ) -> Self {
        Self {
            ollama,
            stable_diffusion,
            generation_settings,
            art_styles,
        }
    }

    /// Path used when the caller does not supply one.
    pub fn default_path() -> PathBuf {
        PathBuf::from(DEFAULT_CONFIG_FILE)
    }

    /// Parse a configuration document from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the document is not valid JSON, has the
    /// wrong shape, or sets `stable_diffusion.steps` to zero.
    pub fn from_json(json: &str) -> StoryloomResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| ConfigError::new(ConfigErrorKind::Parse(e.to_string())))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> StoryloomResult<()> {
        if self.stable_diffusion.steps == 0 {
            return Err(ConfigError::invalid_value(
                "stable_diffusion.steps",
                "0",
                "must be at least 1",
            )
            .into());
        }
        Ok(())
    }

    /// Load the configuration file and apply environment overrides.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file cannot be read, is malformed, or
    /// an override has an invalid value.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> StoryloomResult<Self> {
        let path = path.as_ref();
        debug!("Loading configuration from file");

        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::new(ConfigErrorKind::Read {
                path: path.display().to_string(),
                reason: e.to_string(),
            })
        })?;

        let mut config = Self::from_json(&content)?;
        config.apply_env_overrides()?;

        info!(
            text_model = %config.ollama.model,
            image_model = %config.stable_diffusion.default_model,
            max_chapters = config.generation_settings.max_chapters,
            genres = config.art_styles.genres().len(),
            custom_styles = config.art_styles.custom_styles().len(),
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Apply `STORYLOOM__SECTION__KEY` environment overrides to scalar settings.
    ///
    /// The art-style catalog is only read from the file.
    pub fn apply_env_overrides(&mut self) -> StoryloomResult<()> {
        let env = Config::builder()
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()
            .map_err(|e| ConfigError::new(ConfigErrorKind::Environment(e.to_string())))?;
        self.apply_overrides(&env)
    }

    fn apply_overrides(&mut self, source: &Config) -> StoryloomResult<()> {
        if let Ok(model) = source.get_string("ollama.model") {
            debug!(%model, "Overriding ollama.model");
            self.ollama.model = model;
        }
        if let Ok(url) = source.get_string("ollama.url") {
            debug!(%url, "Overriding ollama.url");
            self.ollama.url = url;
        }
        if let Ok(model) = source.get_string("stable_diffusion.default_model") {
            debug!(%model, "Overriding stable_diffusion.default_model");
            self.stable_diffusion.default_model = model;
        }
        if let Ok(url) = source.get_string("stable_diffusion.url") {
            debug!(%url, "Overriding stable_diffusion.url");
            self.stable_diffusion.url = url;
        }
        if let Ok(device) = source.get_string("stable_diffusion.device") {
            self.stable_diffusion.device = device.parse()?;
        }
        if let Ok(steps) = source.get_string("stable_diffusion.steps") {
            self.stable_diffusion.steps = steps
                .trim()
                .parse()
                .map_err(|e| ConfigError::invalid_value("stable_diffusion.steps", &steps, e))?;
        }
        if let Ok(max) = source.get_string("generation_settings.max_chapters") {
            self.generation_settings.max_chapters = max.trim().parse().map_err(|e| {
                ConfigError::invalid_value("generation_settings.max_chapters", &max, e)
            })?;
        }
        self.validate()
    }

    /// Genre names for the form dropdown.
    pub fn genre_names(&self) -> Vec<String> {
        self.art_styles.genre_names()
    }

    /// Custom style names for the form dropdown.
    pub fn custom_style_names(&self) -> Vec<String> {
        self.art_styles.custom_style_names()
    }
}

fn default_ollama_model() -> String {
    DEFAULT_OLLAMA_MODEL.to_string()
}

fn default_ollama_url() -> String {
    DEFAULT_OLLAMA_URL.to_string()
}

fn default_diffusion_model() -> String {
    DEFAULT_DIFFUSION_MODEL.to_string()
}

fn default_diffusion_url() -> String {
    DEFAULT_DIFFUSION_URL.to_string()
}

fn default_steps() -> u32 {
    DEFAULT_STEPS
}

fn default_max_chapters() -> usize {
    DEFAULT_MAX_CHAPTERS
}
