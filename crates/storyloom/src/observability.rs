//! OpenTelemetry bridge for `tracing` spans.
//!
//! With the `observability` feature the binary exports every span (book
//! requests, chapter expansions, diffusion calls) to stdout alongside the
//! regular console log.

use opentelemetry::{KeyValue, global, trace::TracerProvider};
use opentelemetry_sdk::{Resource, trace::SdkTracerProvider};
use opentelemetry_stdout::SpanExporter;
use storyloom_core::StoryloomConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::telemetry::{console_layer, default_filter, env_filter};

/// Resource attributes and console options for span export.
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// Reported as `service.name`
    pub service_name: String,
    /// Reported as `service.version`
    pub service_version: String,
    /// Fallback filter when `RUST_LOG` is unset
    pub log_filter: String,
    /// Line-delimited JSON console output
    pub json_logs: bool,
    /// Extra resource attributes, e.g. the configured backend models
    pub attributes: Vec<KeyValue>,
}

impl ObservabilityConfig {
    /// Create a configuration with the given service name.
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            service_version: env!("CARGO_PKG_VERSION").to_string(),
            log_filter: default_filter(false).to_string(),
            json_logs: false,
            attributes: Vec::new(),
        }
    }

    /// Use the verbose fallback filter.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.log_filter = default_filter(verbose).to_string();
        self
    }

    /// Enable JSON-formatted logs.
    pub fn with_json_logs(mut self, enabled: bool) -> Self {
        self.json_logs = enabled;
        self
    }

    /// Tag spans with the text and image models in use.
    pub fn with_backends(mut self, config: &StoryloomConfig) -> Self {
        self.attributes.extend([
            KeyValue::new("storyloom.text_model", config.ollama().model().clone()),
            KeyValue::new(
                "storyloom.image_model",
                config.stable_diffusion().default_model().clone(),
            ),
        ]);
        self
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self::new(env!("CARGO_PKG_NAME"))
    }
}

/// Install the console layer plus an OpenTelemetry layer exporting spans to
/// stdout.
///
/// Returns the tracer provider; pass it to [`shutdown_observability`] before
/// exit so buffered spans are flushed.
pub fn init_observability_with_config(
    config: ObservabilityConfig,
) -> Result<SdkTracerProvider, Box<dyn std::error::Error>> {
    let mut attributes = vec![KeyValue::new(
        "service.version",
        config.service_version.clone(),
    )];
    attributes.extend(config.attributes.iter().cloned());

    let resource = Resource::builder()
        .with_service_name(config.service_name.clone())
        .with_attributes(attributes)
        .build();

    let provider = SdkTracerProvider::builder()
        .with_simple_exporter(SpanExporter::default())
        .with_resource(resource)
        .build();
    global::set_tracer_provider(provider.clone());

    let tracer = provider.tracer(config.service_name.clone());

    tracing_subscriber::registry()
        .with(env_filter(&config.log_filter)?)
        .with(console_layer(config.json_logs))
        .with(tracing_opentelemetry::layer().with_tracer(tracer))
        .try_init()?;

    Ok(provider)
}

/// Flush and shut down the tracer provider.
pub fn shutdown_observability(provider: SdkTracerProvider) {
    if let Err(e) = provider.shutdown() {
        eprintln!("Failed to shut down tracer provider: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backends_become_resource_attributes() {
        let config = ObservabilityConfig::default().with_backends(&StoryloomConfig::default());
        let keys: Vec<_> = config.attributes.iter().map(|kv| kv.key.as_str()).collect();
        assert_eq!(keys, ["storyloom.text_model", "storyloom.image_model"]);
    }
}
