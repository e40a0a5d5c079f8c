//! Subscriber setup: `tracing` macros → OpenTelemetry → trace file.

use super::tracer;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const SERVICE_NAME: &str = "countyflow";
pub const TRACE_FILE_NAME: &str = "countyflow-otlp.json";
const DEFAULT_LEVEL: &str = "info";

/// Installs the global subscriber writing spans to
/// `<config.data_dir>/countyflow-otlp.json`.
///
/// The filter comes from `config.trace_level` (any `EnvFilter` directive,
/// e.g. `"countyflow=debug"`); an unparsable directive falls back to `info`.
///
/// Tracing is best-effort: if the data directory cannot be created, or a
/// subscriber is already installed, this returns without effect.
pub fn init_tracing(config: &Config) {
    let data_dir = &config.data_dir;
    if std::fs::create_dir_all(data_dir).is_err() {
        return;
    }

    let directive = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    let resource = Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)]);
    let provider = tracer::file_tracer_provider(data_dir.join(TRACE_FILE_NAME), resource);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME)))
        .try_init();
}
