//! Lookup & navigation engine.
//!
//! Sits between the plugin runtime (main.rs) and the domain/storage layers.
//! Key presses become [`Event`]s, the handler mutates [`AppState`] and
//! returns [`Action`]s that the runtime applies after the state change.
//!
//! ```text
//! Key → Event → Controller → handle_event ─┬─ search / cursor (state only)
//!                                           └─ router::transition (pure) → commit → Actions
//!                                                                                    ↓
//!                          HistoryChanged ← history stack ← PushHistory / SetTitle / FocusSearch
//! ```
//!
//! # Modules
//!
//! - [`actions`]: side effects applied by the host
//! - [`controller`]: readiness gate and single owner of the session
//! - [`cursor`]: clamping selection cursor
//! - [`handler`]: event dispatch table
//! - [`history`]: in-memory history stack for the host
//! - [`modes`]: view state and cursor direction
//! - [`router`]: pure view transitions
//! - [`search`]: incremental county matcher
//! - [`state`]: session state and view model computation
//!
//! # Example
//!
//! ```rust
//! use countyflow::app::{Controller, Event};
//! use countyflow::storage::Dataset;
//! use countyflow::ui::Theme;
//!
//! let mut controller = Controller::new(Theme::default(), "", vec![]);
//! controller.datasets_loaded(Dataset::default());
//! let (render, _actions) = controller.dispatch(&Event::Char('c'))?;
//! assert!(render);
//! # Ok::<(), countyflow::CountyflowError>(())
//! ```

pub mod actions;
pub mod controller;
pub mod cursor;
pub mod handler;
pub mod history;
pub mod modes;
pub mod router;
pub mod search;
pub mod state;

pub use actions::Action;
pub use controller::Controller;
pub use cursor::SelectionCursor;
pub use handler::{handle_event, Event};
pub use history::HistoryStack;
pub use modes::{Direction, ViewState};
pub use router::{transition, RouteEvent, RouteOutcome, Transition};
pub use search::{find_matches, SearchSession};
pub use state::AppState;
