//! Tracing subscriber setup.

use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::file_writer::RotationPolicy;
use super::tracer;
use crate::Config;

/// Service name attached to exported spans.
const SERVICE_NAME: &str = "listview";

/// Level directive used when neither `RUST_LOG` nor the config sets one.
const DEFAULT_TRACE_LEVEL: &str = "info";

/// Installs the global tracing subscriber.
///
/// The filter comes from `RUST_LOG` if set, else `config.trace_level`, else
/// `info`. With `config.trace_file` set, spans are exported as OTLP JSON to
/// that file with size-based rotation; otherwise events are formatted to
/// stderr.
///
/// Never fails: an unusable trace directory falls back to stderr, and a
/// second call leaves the first subscriber in place.
///
/// # Example
///
/// ```rust
/// use listview::{observability::init_tracing, Config};
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(config.trace_level.as_deref().unwrap_or(DEFAULT_TRACE_LEVEL))
    });

    let otel_layer = config.trace_file.as_ref().and_then(|path| {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if std::fs::create_dir_all(parent).is_err() {
                return None;
            }
        }

        let resource = Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)]);
        let policy = RotationPolicy {
            max_bytes: config.trace_max_bytes,
            max_backups: config.trace_max_backups,
        };
        let provider = tracer::create_tracer_provider(path.clone(), policy, resource);

        Some(OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME)))
    });

    let fmt_layer = if otel_layer.is_none() {
        Some(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
    } else {
        None
    };

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .with(fmt_layer)
        .try_init();
}
