//! Tracer provider backed by a local OTLP/JSON file.

use super::file_writer::RotatingFile;
use super::span_formatter::OtlpEncoder;
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::{Config, TracerProvider};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

/// Writes each exported batch as one line of OTLP/JSON.
#[derive(Debug)]
struct FileExporter {
    file: RotatingFile,
    encoder: OtlpEncoder,
    closed: AtomicBool,
}

impl SpanExporter for FileExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = if self.closed.load(Ordering::SeqCst) {
            Err(TraceError::from("trace file exporter is closed"))
        } else {
            let line = self.encoder.encode_batch(&batch).to_string();
            self.file
                .write_line(&line)
                .map_err(|e| TraceError::from(e.to_string()))
        };
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.closed.store(true, Ordering::SeqCst);
    }
}

/// Builds a provider that exports every span synchronously to `trace_file`.
pub fn file_tracer_provider(trace_file: PathBuf, resource: Resource) -> TracerProvider {
    let exporter = FileExporter {
        file: RotatingFile::new(trace_file),
        encoder: OtlpEncoder::new(resource.clone()),
        closed: AtomicBool::new(false),
    };

    TracerProvider::builder()
        .with_config(Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use opentelemetry::trace::{Tracer, TracerProvider as _};
    use opentelemetry::KeyValue;
    use tempfile::TempDir;

    #[test]
    fn finished_spans_land_in_the_trace_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("countyflow-otlp.json");
        let provider = file_tracer_provider(
            path.clone(),
            Resource::new(vec![KeyValue::new("service.name", "countyflow")]),
        );

        provider.tracer("test").in_span("load_datasets", |_cx| {});

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("\"load_datasets\""));
        assert!(written.contains("countyflow"));
    }
}
