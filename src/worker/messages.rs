//! Plugin ⇄ worker message protocol.
//!
//! Payloads travel as JSON strings through Zellij's plugin messaging. The
//! request side carries a [`TraceContext`] captured from the sending span.

use crate::domain::{CountyRecord, CountySummaryEntry};
use crate::Config;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Trace and parent span IDs, hex encoded, of the span that sent a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    pub trace_id: String,
    pub parent_span_id: String,
}

impl TraceContext {
    /// Captures the context of the current span.
    ///
    /// Returns `None` when no OpenTelemetry layer is installed or the span
    /// context is invalid.
    #[must_use]
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let span = tracing::Span::current();

        let otel_context = span.context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if !span_context.is_valid() {
            tracing::trace!("no valid span context to propagate");
            return None;
        }

        Some(Self {
            trace_id: format!("{:032x}", span_context.trace_id()),
            parent_span_id: format!("{:016x}", span_context.span_id()),
        })
    }
}

/// Generates `WorkerMessage` constructors that attach the current trace context.
macro_rules! worker_message_builders {
    (
        $(
            $builder_name:ident($variant:ident { $($field:ident: $ty:ty),* $(,)? })
        ),* $(,)?
    ) => {
        impl WorkerMessage {
            $(
                #[doc = concat!("Create a ", stringify!($variant), " message with current trace context")]
                pub fn $builder_name($($field: $ty),*) -> Self {
                    Self::$variant {
                        $($field,)*
                        trace_context: TraceContext::from_current(),
                    }
                }
            )*
        }
    };
}

worker_message_builders! {
    load_datasets(LoadDatasets {
        county_list_path: String,
        migration_data_path: String,
        data_dir: String,
        trace_level: Option<String>,
    }),
}

/// Messages sent from the plugin to the loader worker.
///
/// Every variant carries an optional trace context so the worker's spans join
/// the plugin's trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Read and decode both dataset documents.
    LoadDatasets {
        /// Path of `county_list.json`.
        county_list_path: String,

        /// Path of `migration_data.json`.
        migration_data_path: String,

        /// Plugin's data directory; the worker writes its trace file there.
        data_dir: String,

        /// Plugin's `trace_level` directive.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        trace_level: Option<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },
}

impl WorkerMessage {
    /// Trace context attached to the message, if any.
    #[must_use]
    pub const fn trace_context(&self) -> Option<&TraceContext> {
        match self {
            Self::LoadDatasets { trace_context, .. } => trace_context.as_ref(),
        }
    }

    /// Tracing settings the worker thread should install, taken from the
    /// plugin's configuration.
    #[must_use]
    pub fn tracing_config(&self) -> Config {
        match self {
            Self::LoadDatasets {
                data_dir, trace_level, ..
            } => Config {
                data_dir: PathBuf::from(data_dir),
                trace_level: trace_level.clone(),
                ..Config::default()
            },
        }
    }
}

/// Responses sent from the loader worker back to the plugin.
///
/// Exactly one response is sent per load request; a failed load is reported
/// once and never retried.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// Both documents were loaded.
    DatasetsLoaded {
        /// County list in list order.
        counties: Vec<CountySummaryEntry>,

        /// Migration records in document order.
        records: Vec<CountyRecord>,
    },

    /// Either document could not be read or decoded.
    LoadFailed {
        /// Human-readable cause.
        message: String,
    },
}
