//! OpenTelemetry tracer provider exporting to a rotating local file.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;

use super::file_writer::{RotatingWriter, RotationPolicy};
use super::span_formatter::encode_batch;

/// Span exporter writing one OTLP JSON document per batch.
#[derive(Debug)]
struct FileSpanExporter {
    writer: RotatingWriter,
    resource: Resource,
    is_shutdown: AtomicBool,
}

impl SpanExporter for FileSpanExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = if self.is_shutdown.load(Ordering::SeqCst) {
            Err(TraceError::from("file exporter is shut down"))
        } else {
            let line = encode_batch(&self.resource, &batch).to_string();
            self.writer
                .append_line(&line)
                .map_err(|e| TraceError::from(e.to_string()))
        };
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.is_shutdown.store(true, Ordering::SeqCst);
    }

    fn set_resource(&mut self, resource: &Resource) {
        self.resource = resource.clone();
    }
}

/// Builds a provider whose spans are appended to `file_path`.
///
/// Spans are exported synchronously as they close (simple exporter), which
/// suits a library that has no async runtime of its own.
pub fn create_tracer_provider(
    file_path: PathBuf,
    policy: RotationPolicy,
    resource: Resource,
) -> TracerProvider {
    let exporter = FileSpanExporter {
        writer: RotatingWriter::new(file_path, policy),
        resource: resource.clone(),
        is_shutdown: AtomicBool::new(false),
    };

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}
