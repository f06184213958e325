//! Tracing initialization and subscriber setup.

use super::exporter;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service name recorded on every exported span.
const SERVICE_NAME: &str = "datagrid";

/// Installs a global tracing subscriber.
///
/// The level filter comes from `config.trace_level` (any `EnvFilter`
/// directive, default `"info"`). When `config.trace_file` is set,
/// spans are exported through OpenTelemetry to that file as JSON lines;
/// otherwise events are formatted to stderr.
///
/// # Initialization Behavior
///
/// - Creates the trace file's parent directory if it doesn't exist
/// - Silently does nothing if that directory cannot be created
/// - Idempotent: safe to call multiple times (only the first call takes effect)
///
/// # Example
///
/// ```rust
/// use datagrid::observability::init_tracing;
/// use datagrid::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or("info");
    let filter = EnvFilter::new(level);

    let Some(trace_file) = config.trace_file.clone() else {
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init();
        return;
    };

    if let Some(parent) = trace_file.parent().filter(|p| !p.as_os_str().is_empty()) {
        if std::fs::create_dir_all(parent).is_err() {
            return;
        }
    }

    let resource = Resource::new(vec![opentelemetry::KeyValue::new("service.name", SERVICE_NAME)]);
    let provider = exporter::build_tracer_provider(trace_file, resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    if tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init()
        .is_ok()
    {
        // The global slot keeps the provider alive for the life of the process.
        opentelemetry::global::set_tracer_provider(provider);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_initialization_is_harmless() {
        let config = Config {
            trace_level: Some("debug".to_string()),
            ..Config::default()
        };
        init_tracing(&config);
        init_tracing(&config);
        tracing::debug!("still fine");
    }
}
