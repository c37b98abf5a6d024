//! Tracing initialization and subscriber setup.

use super::tracer;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use std::path::{Path, PathBuf};
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service and instrumentation scope name on exported spans.
pub const SERVICE_NAME: &str = "FridgeChef";

/// File name of the trace export inside the data directory.
pub const TRACE_FILE_NAME: &str = "fridgechef-otlp.json";

/// Default filter directive when neither `RUST_LOG` nor config sets one.
pub const DEFAULT_TRACE_LEVEL: &str = "info";

/// Initializes the global subscriber with file-based OTLP export.
///
/// The filter comes from `RUST_LOG` when set, otherwise from
/// `config.trace_level`, otherwise `info`. Spans are written to
/// `<data_dir>/fridgechef-otlp.json`.
///
/// Returns the trace file path, or `None` when tracing could not be set up
/// (no writable data directory, or a subscriber is already installed).
/// Observability is optional, so neither case is an error.
pub fn init_tracing(config: &Config) -> Option<PathBuf> {
    init_tracing_in(&crate::infrastructure::paths::get_data_dir(), config)
}

/// Like [`init_tracing`], writing into `data_dir`.
pub fn init_tracing_in(data_dir: &Path, config: &Config) -> Option<PathBuf> {
    std::fs::create_dir_all(data_dir).ok()?;

    let resource = Resource::new(vec![
        opentelemetry::KeyValue::new("service.name", SERVICE_NAME),
        opentelemetry::KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);

    let trace_file = data_dir.join(TRACE_FILE_NAME);
    let provider = tracer::create_tracer_provider(trace_file.clone(), resource, SERVICE_NAME);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(config.trace_level.as_deref().unwrap_or(DEFAULT_TRACE_LEVEL))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init()
        .ok()?;

    Some(trace_file)
}
