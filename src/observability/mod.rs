//! File-based OpenTelemetry tracing.
//!
//! ```text
//! tracing → tracing-opentelemetry → SDK TracerProvider → FileExporter → countyflow-otlp.json
//! ```
//!
//! The plugin and its worker run in separate Wasm instances; the worker
//! joins the plugin's trace through [`crate::worker::TraceContext`].
//! The live file rotates at 10 MB, keeping three timestamped backups.

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, SERVICE_NAME, TRACE_FILE_NAME};
