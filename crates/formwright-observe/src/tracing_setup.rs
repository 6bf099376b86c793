//! Tracing subscriber initialization with structured logging and optional
//! OpenTelemetry trace export.
//!
//! # Usage
//!
//! ```no_run
//! use formwright_observe::tracing_setup::{TracingOptions, init_tracing};
//!
//! init_tracing(&TracingOptions::from_verbosity(1, false)).unwrap();
//! ```

use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::trace::SdkTracerProvider;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use std::sync::OnceLock;

/// Stores the OTel tracer provider so it can be shut down cleanly on exit.
static TRACER_PROVIDER: OnceLock<SdkTracerProvider> = OnceLock::new();

/// How the global subscriber is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingOptions {
    /// Filter used when `RUST_LOG` is not set.
    pub default_filter: String,
    /// Emit one JSON object per event instead of human-readable lines.
    pub json: bool,
    /// Also export spans to stdout through OpenTelemetry.
    pub otel: bool,
}

impl TracingOptions {
    /// Options for a CLI `-v` count and `--quiet` flag.
    pub fn from_verbosity(verbose: u8, quiet: bool) -> Self {
        let default_filter = match verbose {
            0 if quiet => "error",
            0 => "warn",
            1 => "info,formwright=debug",
            _ => "trace",
        };

        Self {
            default_filter: default_filter.to_string(),
            json: false,
            otel: false,
        }
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    pub fn with_otel(mut self, otel: bool) -> Self {
        self.otel = otel;
        self
    }
}

impl Default for TracingOptions {
    fn default() -> Self {
        Self::from_verbosity(0, false)
    }
}

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` wins over `default_filter` when set. Exactly one `fmt` layer is
/// installed (plain or JSON); with `otel` the spans are additionally bridged
/// to an OpenTelemetry stdout exporter.
///
/// # Errors
///
/// Returns an error if a global subscriber has already been set.
pub fn init_tracing(options: &TracingOptions) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&options.default_filter));

    let (plain_layer, json_layer) = if options.json {
        let layer = tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE);
        (None, Some(layer))
    } else {
        let layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_span_events(FmtSpan::CLOSE);
        (Some(layer), None)
    };

    let otel_layer = options.otel.then(|| {
        let provider = SdkTracerProvider::builder()
            .with_simple_exporter(opentelemetry_stdout::SpanExporter::default())
            .build();
        let tracer = provider.tracer("formwright");

        let _ = TRACER_PROVIDER.set(provider.clone());
        opentelemetry::global::set_tracer_provider(provider);

        tracing_opentelemetry::layer().with_tracer(tracer)
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(plain_layer)
        .with(json_layer)
        .with(otel_layer)
        .try_init()?;

    Ok(())
}

/// Flush pending traces and shut down the OpenTelemetry tracer provider.
///
/// No-op when OTel was not enabled.
pub fn shutdown_tracing() {
    if let Some(provider) = TRACER_PROVIDER.get() {
        if let Err(e) = provider.shutdown() {
            eprintln!("Warning: OTel tracer provider shutdown error: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_filters() {
        assert_eq!(TracingOptions::from_verbosity(0, true).default_filter, "error");
        assert_eq!(TracingOptions::from_verbosity(0, false).default_filter, "warn");
        assert_eq!(
            TracingOptions::from_verbosity(1, false).default_filter,
            "info,formwright=debug"
        );
        assert_eq!(TracingOptions::from_verbosity(3, true).default_filter, "trace");
    }

    #[test]
    fn test_builders_toggle_outputs() {
        let options = TracingOptions::default().with_json(true).with_otel(true);
        assert!(options.json);
        assert!(options.otel);
        assert_eq!(options.default_filter, "warn");
    }

    #[test]
    fn test_shutdown_without_otel_is_noop() {
        shutdown_tracing();
    }
}
