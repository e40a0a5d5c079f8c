//! View router: the Search / Results state machine.
//!
//! [`transition`] is pure. It takes the current view, a routing event and the
//! dataset, and returns the next view together with the side effects the host
//! must apply once the new view is committed. Nothing here touches history or
//! the pane title directly.
//!
//! | From        | Event                         | To                 | Effects                               |
//! |-------------|-------------------------------|--------------------|---------------------------------------|
//! | any         | `SelectCounty(id)`, known     | `Results(id)`      | push slug, county title               |
//! | `Results(id)` | `SelectCounty(id)` (same)   | unchanged          | none                                  |
//! | any         | `SelectCounty(id)`, unknown   | unchanged          | none, outcome `UnknownIdentity`       |
//! | `Results(_)`| `GoBack`                      | `Search`           | push empty, default title, focus      |
//! | any         | `BrowserNavigated(f)`, resolves | `Results(id)`    | county title (never a push)           |
//! | any         | `BrowserNavigated(f)`, otherwise | `Search`        | default title (never a push)          |

use crate::app::modes::ViewState;
use crate::app::Action;
use crate::domain::slug::{normalize_fragment, to_slug};
use crate::domain::CountyIdentity;
use crate::storage::Dataset;

/// Title shown while the search view is active.
pub const DEFAULT_TITLE: &str = "County Migration Flows — Where Are People Moving?";

/// Title shown while `name` is displayed.
#[must_use]
pub fn county_title(name: &str) -> String {
    format!("{name} Migration — Where Are People Moving?")
}

/// Routing input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteEvent {
    /// The user picked a county (search commit, featured pick, flow link).
    SelectCounty(CountyIdentity),
    /// The user asked to return to the search view.
    GoBack,
    /// History moved to an entry (back, forward, or initial load).
    BrowserNavigated(String),
}

/// What a transition did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome {
    /// The view changed.
    Navigated,
    /// The view was re-entered as it was; content should be redrawn.
    Refreshed,
    /// The event did not apply to the current view.
    Unchanged,
    /// The identity or fragment matched no record.
    UnknownIdentity(String),
}

/// Result of [`transition`]: next view, host effects, and outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub next: ViewState,
    pub effects: Vec<Action>,
    pub outcome: RouteOutcome,
}

impl Transition {
    fn stay(current: &ViewState, outcome: RouteOutcome) -> Self {
        Self {
            next: current.clone(),
            effects: vec![],
            outcome,
        }
    }
}

/// Computes the next view and its side effects.
#[must_use]
pub fn transition(current: &ViewState, event: &RouteEvent, dataset: &Dataset) -> Transition {
    match event {
        RouteEvent::SelectCounty(identity) => {
            let Some(record) = dataset.record(identity) else {
                return Transition::stay(current, RouteOutcome::UnknownIdentity(identity.to_string()));
            };

            if current.current() == Some(identity) {
                return Transition::stay(current, RouteOutcome::Refreshed);
            }

            Transition {
                next: ViewState::Results(identity.clone()),
                effects: vec![
                    Action::PushHistory {
                        fragment: to_slug(&record.name),
                    },
                    Action::SetTitle(county_title(&record.name)),
                ],
                outcome: RouteOutcome::Navigated,
            }
        }
        RouteEvent::GoBack => match current {
            ViewState::Search => Transition::stay(current, RouteOutcome::Unchanged),
            ViewState::Results(_) => Transition {
                next: ViewState::Search,
                effects: vec![
                    Action::PushHistory {
                        fragment: String::new(),
                    },
                    Action::SetTitle(DEFAULT_TITLE.to_string()),
                    Action::FocusSearch,
                ],
                outcome: RouteOutcome::Navigated,
            },
        },
        RouteEvent::BrowserNavigated(fragment) => {
            let landed = dataset
                .resolve_slug(fragment)
                .and_then(|identity| dataset.record(identity));

            let (next, title) = match landed {
                Some(record) => (ViewState::Results(record.identity.clone()), county_title(&record.name)),
                None => (ViewState::Search, DEFAULT_TITLE.to_string()),
            };

            let normalized = normalize_fragment(fragment);
            let outcome = if landed.is_none() && !normalized.is_empty() {
                RouteOutcome::UnknownIdentity(normalized)
            } else if &next == current {
                RouteOutcome::Refreshed
            } else {
                RouteOutcome::Navigated
            };

            Transition {
                next,
                effects: vec![Action::SetTitle(title)],
                outcome,
            }
        }
    }
}
