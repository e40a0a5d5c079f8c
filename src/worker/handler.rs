//! Background loader worker.
//!
//! Runs on a Zellij worker thread, reads the two dataset documents through a
//! [`DatasetSource`] and answers with exactly one [`WorkerResponse`] per
//! request. Reading and decoding the migration document is the slow part of
//! startup, which is why it lives off the render thread.

use crate::domain::error::Result;
use crate::storage::{DatasetSource, JsonDatasetSource};
use crate::worker::{WorkerMessage, WorkerResponse};
use serde::{Deserialize, Serialize};
use zellij_tile::prelude::{PluginMessage, ZellijWorker};
use zellij_tile::shim::post_message_to_plugin;

/// Worker thread state.
///
/// Stateless between requests; each `LoadDatasets` builds its own source from
/// the paths in the message.
#[derive(Serialize, Deserialize, Default)]
pub struct CountyflowWorker {}

impl CountyflowWorker {
    /// Loads both collections from `source`.
    fn load(source: &dyn DatasetSource) -> Result<WorkerResponse> {
        let counties = source.load_county_list()?;
        let records = source.load_migration_records()?;
        Ok(WorkerResponse::DatasetsLoaded { counties, records })
    }

    fn handle_load_datasets(county_list_path: &str, migration_data_path: &str) -> WorkerResponse {
        let source = JsonDatasetSource::new(county_list_path, migration_data_path);

        match Self::load(&source) {
            Ok(response) => {
                if let WorkerResponse::DatasetsLoaded { counties, records } = &response {
                    tracing::info!(
                        county_count = counties.len(),
                        record_count = records.len(),
                        "datasets loaded"
                    );
                }
                response
            }
            Err(e) => {
                tracing::error!(error = %e, "dataset load failed");
                WorkerResponse::LoadFailed {
                    message: e.to_string(),
                }
            }
        }
    }

    /// Re-attaches the sender's trace context to this thread.
    ///
    /// The returned guard must be held while the request is handled.
    fn attach_parent_trace_context(message: &WorkerMessage) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};

        let trace_context = message.trace_context()?;

        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let span_context = SpanContext::new(trace_id, span_id, TraceFlags::SAMPLED, true, TraceState::default());
        let otel_context = opentelemetry::Context::current().with_remote_span_context(span_context);

        Some(otel_context.attach())
    }

    /// Handles one request and produces its response.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let _context_guard = Self::attach_parent_trace_context(&message);
        let _span = tracing::debug_span!("worker_handle_message", message_type = ?message).entered();

        match message {
            WorkerMessage::LoadDatasets {
                county_list_path,
                migration_data_path,
                ..
            } => Self::handle_load_datasets(&county_list_path, &migration_data_path),
        }
    }
}

/// Set once the worker thread has installed its subscriber.
static WORKER_TRACING_INITIALIZED: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);

/// Installs the worker thread's subscriber once, using the plugin's settings
/// when the first request could be decoded.
fn init_worker_tracing(message: Option<&WorkerMessage>) {
    if WORKER_TRACING_INITIALIZED.swap(true, std::sync::atomic::Ordering::Relaxed) {
        return;
    }
    let config = message.map_or_else(crate::Config::default, WorkerMessage::tracing_config);
    crate::observability::init_tracing(&config);
}

fn reply(name: String, response: &WorkerResponse) {
    match serde_json::to_string(response) {
        Ok(payload) => post_message_to_plugin(PluginMessage {
            name,
            payload,
            worker_name: None,
        }),
        Err(e) => tracing::error!(error = %e, "failed to serialize worker response"),
    }
}

impl ZellijWorker<'_> for CountyflowWorker {
    fn on_message(&mut self, message: String, payload: String) {
        let worker_message: WorkerMessage = match serde_json::from_str(&payload) {
            Ok(msg) => msg,
            Err(e) => {
                init_worker_tracing(None);
                tracing::error!(error = %e, "failed to deserialize worker message");
                reply(
                    message,
                    &WorkerResponse::LoadFailed {
                        message: format!("invalid worker request: {e}"),
                    },
                );
                return;
            }
        };

        init_worker_tracing(Some(&worker_message));
        let response = self.handle_message(worker_message);
        reply(message, &response);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_request_reads_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let list_path = dir.path().join("county_list.json");
        let data_path = dir.path().join("migration_data.json");

        std::fs::File::create(&list_path)
            .unwrap()
            .write_all(br#"[{"fips": "17_031", "name": "Cook County, IL"}]"#)
            .unwrap();
        std::fs::File::create(&data_path)
            .unwrap()
            .write_all(br#"{"17_031": {"name": "Cook County, IL", "summary": {"net_migration": -5}, "outflows": [], "inflows": []}}"#)
            .unwrap();

        let mut worker = CountyflowWorker::default();
        let response = worker.handle_message(WorkerMessage::LoadDatasets {
            county_list_path: list_path.to_string_lossy().into_owned(),
            migration_data_path: data_path.to_string_lossy().into_owned(),
            data_dir: dir.path().to_string_lossy().into_owned(),
            trace_level: None,
            trace_context: None,
        });

        match response {
            WorkerResponse::DatasetsLoaded { counties, records } => {
                assert_eq!(counties.len(), 1);
                assert_eq!(records[0].summary.net_migration, -5);
            }
            WorkerResponse::LoadFailed { message } => panic!("unexpected failure: {message}"),
        }
    }

    #[test]
    fn missing_files_produce_load_failed() {
        let dir = tempfile::tempdir().unwrap();
        let mut worker = CountyflowWorker::default();
        let response = worker.handle_message(WorkerMessage::LoadDatasets {
            county_list_path: dir.path().join("missing.json").to_string_lossy().into_owned(),
            migration_data_path: dir.path().join("missing-too.json").to_string_lossy().into_owned(),
            data_dir: dir.path().to_string_lossy().into_owned(),
            trace_level: None,
            trace_context: None,
        });

        assert!(matches!(response, WorkerResponse::LoadFailed { .. }));
    }
}
