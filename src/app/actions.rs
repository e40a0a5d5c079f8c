//! Side effects produced by the engine and applied by the plugin host.
//!
//! The router computes effects alongside the next view state; the handler
//! returns them after the state change has been committed, and the host
//! executes them in order.
//!
//! # Example
//!
//! ```rust
//! use countyflow::app::Action;
//! use countyflow::app::router::DEFAULT_TITLE;
//!
//! let effects = vec![
//!     Action::PushHistory { fragment: String::new() },
//!     Action::SetTitle(DEFAULT_TITLE.to_string()),
//!     Action::FocusSearch,
//! ];
//! assert_eq!(effects.len(), 3);
//! ```

use crate::worker::WorkerMessage;

/// Commands executed by the plugin host after a state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Pushes a new history entry carrying `fragment` (empty for search).
    PushHistory {
        fragment: String,
    },

    /// Sets the pane title.
    SetTitle(String),

    /// Returns input focus to the search surface.
    ///
    /// The host brings the plugin pane to the foreground.
    FocusSearch,

    /// Hides the plugin pane.
    CloseFocus,

    /// Posts a message to the background worker.
    PostToWorker(WorkerMessage),
}
