//! Tracing setup with optional file-based OpenTelemetry export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → rotating JSON file
//! ```
//!
//! Without a configured trace file, events go to stderr through
//! `tracing-subscriber`'s formatter instead.
//!
//! # Modules
//!
//! - `init`: subscriber setup
//! - `tracer`: tracer provider with the file exporter
//! - `span_formatter`: OTLP JSON encoding
//! - `file_writer`: size-rotated file writer

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use file_writer::RotationPolicy;
pub use init::init_tracing;
