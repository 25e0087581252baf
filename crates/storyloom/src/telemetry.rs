//! Console logging setup.

use tracing::Subscriber;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info,storyloom=debug";

/// Filter used when `RUST_LOG` is unset and verbose output was requested.
pub const VERBOSE_LOG_FILTER: &str = "debug";

/// Pick the fallback filter directive for the verbosity flag.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    }
}

/// `RUST_LOG` if set, otherwise `fallback`.
pub(crate) fn env_filter(fallback: &str) -> Result<EnvFilter, Box<dyn std::error::Error>> {
    Ok(EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(fallback))?)
}

/// Human-readable or line-delimited JSON event output on stdout.
///
/// JSON output keeps targets so log shippers can route per crate.
pub(crate) fn console_layer<S>(json_logs: bool) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    if json_logs {
        tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer().with_target(false).boxed()
    }
}

/// Initialize console logging.
///
/// `RUST_LOG` takes precedence over the verbosity flag. With `json_logs` every
/// event is written as one JSON object per line.
pub fn init_console_telemetry(
    verbose: bool,
    json_logs: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(env_filter(default_filter(verbose))?)
        .with(console_layer(json_logs))
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_selects_filter() {
        assert_eq!(default_filter(false), "info,storyloom=debug");
        assert_eq!(default_filter(true), "debug");
        assert!(EnvFilter::try_new(default_filter(false)).is_ok());
    }
}
