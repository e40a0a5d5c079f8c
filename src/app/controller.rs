//! Top-level owner of the engine session.
//!
//! The [`Controller`] is the single owner of [`AppState`]. Until the worker
//! reports the datasets as loaded there is no session at all; events that
//! arrive in that window are dropped. A failed load is terminal.
//!
//! ```text
//! Loading ──DatasetsLoaded──▶ Ready(AppState)
//!    │
//!    └──────LoadFailed──────▶ Unavailable
//! ```

use crate::app::handler::{handle_event, Event};
use crate::app::router::DEFAULT_TITLE;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::CountyIdentity;
use crate::storage::Dataset;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{Body, EmptyState, FooterInfo, HeaderInfo, UIViewModel};
use crate::worker::WorkerResponse;
use std::sync::Arc;

pub const LOADING_MESSAGE: &str = "Loading migration data…";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load data.";

#[derive(Debug)]
enum Phase {
    Loading,
    Ready(Box<AppState>),
    Unavailable { reason: String },
}

/// Owns the theme, the readiness gate, and (once loaded) the session.
#[derive(Debug)]
pub struct Controller {
    theme: Theme,
    phase: Phase,
    initial_fragment: String,
    featured: Vec<CountyIdentity>,
}

impl Controller {
    /// Creates a controller waiting for its datasets.
    ///
    /// `initial_fragment` is routed as soon as the datasets arrive.
    #[must_use]
    pub fn new(theme: Theme, initial_fragment: impl Into<String>, featured: Vec<CountyIdentity>) -> Self {
        Self {
            theme,
            phase: Phase::Loading,
            initial_fragment: initial_fragment.into(),
            featured,
        }
    }

    #[must_use]
    pub const fn theme(&self) -> &Theme {
        &self.theme
    }

    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self.phase, Phase::Ready(_))
    }

    #[must_use]
    pub fn state(&self) -> Option<&AppState> {
        match &self.phase {
            Phase::Ready(state) => Some(&**state),
            Phase::Loading | Phase::Unavailable { .. } => None,
        }
    }

    /// Opens the session and routes the initial fragment.
    ///
    /// Ignored unless still loading.
    pub fn datasets_loaded(&mut self, dataset: Dataset) -> (bool, Vec<Action>) {
        if !matches!(self.phase, Phase::Loading) {
            tracing::debug!("datasets already settled, ignoring load result");
            return (false, vec![]);
        }

        tracing::info!(
            counties = dataset.counties().len(),
            records = dataset.records().len(),
            "engine ready"
        );

        let mut state = AppState::new(Arc::new(dataset), self.featured.clone());
        let initial = Event::HistoryChanged(self.initial_fragment.clone());
        let outcome = match handle_event(&mut state, &initial) {
            Ok((_, actions)) => (true, actions),
            Err(e) => {
                tracing::error!(error = %e, "initial route failed");
                (true, vec![])
            }
        };

        self.phase = Phase::Ready(Box::new(state));
        outcome
    }

    /// Records a failed load. The engine is never constructed afterwards.
    pub fn load_failed(&mut self, reason: impl Into<String>) -> bool {
        if !matches!(self.phase, Phase::Loading) {
            return false;
        }
        let reason = reason.into();
        tracing::error!(reason = %reason, "data unavailable");
        self.phase = Phase::Unavailable { reason };
        true
    }

    /// Applies a worker response to the readiness gate.
    pub fn handle_worker_response(&mut self, response: WorkerResponse) -> (bool, Vec<Action>) {
        match response {
            WorkerResponse::DatasetsLoaded { counties, records } => {
                self.datasets_loaded(Dataset::new(counties, records))
            }
            WorkerResponse::LoadFailed { message } => (self.load_failed(message), vec![]),
        }
    }

    /// Forwards an event to the session, or drops it before readiness.
    ///
    /// `CloseFocus` is honored in every phase so the pane can always be
    /// dismissed.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`handle_event`].
    pub fn dispatch(&mut self, event: &Event) -> Result<(bool, Vec<Action>)> {
        match &mut self.phase {
            Phase::Ready(state) => handle_event(state, event),
            Phase::Loading | Phase::Unavailable { .. } => {
                if matches!(event, Event::CloseFocus | Event::DismissSearch) {
                    return Ok((false, vec![Action::CloseFocus]));
                }
                tracing::debug!(event = ?event, "engine not ready, event dropped");
                Ok((false, vec![]))
            }
        }
    }

    /// View model of the current phase.
    #[must_use]
    pub fn viewmodel(&self, cols: usize) -> UIViewModel {
        let empty = |message: &str, subtitle: String| UIViewModel {
            header: HeaderInfo {
                title: DEFAULT_TITLE.to_string(),
            },
            body: Body::Empty(EmptyState {
                message: message.to_string(),
                subtitle,
            }),
            footer: FooterInfo {
                keybindings: "Esc: close".to_string(),
            },
            notice: None,
        };

        match &self.phase {
            Phase::Ready(state) => state.compute_viewmodel(cols),
            Phase::Loading => empty(LOADING_MESSAGE, String::new()),
            Phase::Unavailable { reason } => empty(LOAD_FAILED_MESSAGE, reason.clone()),
        }
    }
}
