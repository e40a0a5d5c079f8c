//! Event dispatch table.
//!
//! The plugin shim maps keys (and history replays) onto [`Event`]s and hands
//! them to [`handle_event`] together with the session state. Routing events
//! go through the pure [`router::transition`](crate::app::router::transition);
//! the resulting view is committed here and the router's effects are returned
//! for the host to apply afterwards.
//!
//! # Event Types
//!
//! - **Search input**: `Char`, `Backspace`, `SubmitQuery`, `DismissSearch`
//! - **Cursor**: `MoveCursor`, `CommitSelection`, `FollowLink`
//! - **Routing**: `SelectCounty`, `SelectFeatured`, `NavigateBack`, `HistoryChanged`
//! - **Host**: `CloseFocus`
//!
//! # Example
//!
//! ```rust
//! use countyflow::app::{handle_event, AppState, Event};
//! use countyflow::storage::Dataset;
//! use std::sync::Arc;
//!
//! let mut state = AppState::new(Arc::new(Dataset::default()), vec![]);
//! let (render, actions) = handle_event(&mut state, &Event::Char('c'))?;
//! assert!(render);
//! assert!(actions.is_empty());
//! # Ok::<(), countyflow::CountyflowError>(())
//! ```

use crate::app::modes::{Direction, ViewState};
use crate::app::router::{self, RouteEvent, RouteOutcome};
use crate::app::search::SearchSession;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::CountyIdentity;

/// Logical input events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Appends a character to the search query.
    Char(char),
    /// Removes the last character of the search query.
    Backspace,
    /// Replaces the whole search query.
    SubmitQuery(String),
    /// Hides the result list while keeping the typed text.
    ///
    /// With no list shown, clears the lookup notice, then closes the plugin.
    DismissSearch,
    /// Moves the active cursor (search results or flow links).
    MoveCursor(Direction),
    /// Selects the highlighted search result.
    CommitSelection,
    /// Navigates to a county by identity.
    SelectCounty(CountyIdentity),
    /// Navigates to the n-th featured county (zero-based).
    SelectFeatured(usize),
    /// Follows the highlighted flow link of the Results view.
    FollowLink,
    /// Returns from the Results view to the search view.
    NavigateBack,
    /// History moved to an entry carrying this fragment.
    HistoryChanged(String),
    /// Hides the plugin pane.
    CloseFocus,
}

/// Processes one event against the session state.
///
/// Returns whether the UI should re-render and the actions the host must run,
/// in order, now that the state change is committed.
///
/// # Errors
///
/// Reserved for host-facing failures; every engine condition (unknown
/// county, no matches, empty commit) is handled as a state, not an error.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Char(c) => {
            if !state.view.is_search() {
                return Ok((false, vec![]));
            }
            state.search_input.push(*c);
            state.last_lookup_failure = None;
            state.refresh_search();
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if !state.view.is_search() || state.search_input.pop().is_none() {
                return Ok((false, vec![]));
            }
            state.refresh_search();
            Ok((true, vec![]))
        }
        Event::SubmitQuery(query) => {
            if !state.view.is_search() {
                return Ok((false, vec![]));
            }
            state.search_input.clone_from(query);
            state.refresh_search();
            Ok((true, vec![]))
        }
        Event::DismissSearch => {
            if state.search.take().is_some() {
                tracing::debug!(query = %state.search_input, "search dismissed");
                return Ok((true, vec![]));
            }
            if state.last_lookup_failure.take().is_some() {
                return Ok((true, vec![]));
            }
            Ok((false, vec![Action::CloseFocus]))
        }
        Event::MoveCursor(direction) => {
            let cursor = match state.view {
                ViewState::Search => match state.search.as_mut() {
                    Some(session) => &mut session.cursor,
                    None => return Ok((false, vec![])),
                },
                ViewState::Results(_) => &mut state.link_cursor,
            };

            let before = cursor.selected();
            match direction {
                Direction::Down => cursor.move_down(),
                Direction::Up => cursor.move_up(),
            }
            Ok((cursor.selected() != before, vec![]))
        }
        Event::CommitSelection => {
            let Some(identity) = state.search.as_ref().and_then(SearchSession::commit).cloned() else {
                tracing::debug!("commit without selection ignored");
                return Ok((false, vec![]));
            };
            Ok(route(state, &RouteEvent::SelectCounty(identity)))
        }
        Event::SelectCounty(identity) => Ok(route(state, &RouteEvent::SelectCounty(identity.clone()))),
        Event::SelectFeatured(slot) => {
            let Some(identity) = state.featured.get(*slot).cloned() else {
                tracing::debug!(slot = slot, "no featured county in slot");
                return Ok((false, vec![]));
            };
            Ok(route(state, &RouteEvent::SelectCounty(identity)))
        }
        Event::FollowLink => {
            let Some(identity) = state.selected_link().cloned() else {
                return Ok((false, vec![]));
            };
            if !state.dataset.contains(&identity) {
                tracing::debug!(identity = %identity, "flow counterpart not in dataset");
                return Ok((false, vec![]));
            }
            Ok(route(state, &RouteEvent::SelectCounty(identity)))
        }
        Event::NavigateBack => Ok(route(state, &RouteEvent::GoBack)),
        Event::HistoryChanged(fragment) => Ok(route(state, &RouteEvent::BrowserNavigated(fragment.clone()))),
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
    }
}

/// Runs a routing event through the router and commits the result.
fn route(state: &mut AppState, event: &RouteEvent) -> (bool, Vec<Action>) {
    let transition = router::transition(&state.view, event, &state.dataset);

    match &transition.outcome {
        RouteOutcome::Unchanged => return (false, vec![]),
        RouteOutcome::UnknownIdentity(key) => {
            tracing::warn!(key = %key, "county lookup failed");
            state.last_lookup_failure = Some(key.clone());
        }
        RouteOutcome::Navigated | RouteOutcome::Refreshed => {
            tracing::debug!(from = ?state.view, to = ?transition.next, outcome = ?transition.outcome, "view routed");
            let leaves_search = transition.outcome == RouteOutcome::Navigated && transition.next.current().is_some();
            if leaves_search || matches!(event, RouteEvent::SelectCounty(_)) {
                state.search = None;
                state.search_input.clear();
            }
            state.last_lookup_failure = None;
        }
    }

    if transition.next != state.view || transition.outcome == RouteOutcome::Refreshed {
        state.view = transition.next;
        state.reset_link_cursor();
    }

    (true, transition.effects)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CountyRecord, CountySummaryEntry, FlowRecord, MigrationSummary};
    use crate::storage::Dataset;
    use std::sync::Arc;

    fn flow(fips: &str, name: &str) -> FlowRecord {
        FlowRecord {
            counterpart_identity: CountyIdentity::new(fips),
            counterpart_name: name.to_string(),
            households: 100,
            avg_agi: None,
        }
    }

    fn state() -> AppState {
        let cook = CountyRecord {
            identity: "17_031".into(),
            name: "Cook County, IL".to_string(),
            year: None,
            summary: MigrationSummary::default(),
            outflows: vec![flow("17_043", "DuPage County, IL"), flow("99_001", "Abroad")],
            inflows: vec![],
        };
        let dupage = CountyRecord {
            identity: "17_043".into(),
            name: "DuPage County, IL".to_string(),
            year: None,
            summary: MigrationSummary::default(),
            outflows: vec![],
            inflows: vec![flow("17_031", "Cook County, IL")],
        };
        let counties = vec![
            CountySummaryEntry::new("17_031", "Cook County, IL"),
            CountySummaryEntry::new("17_043", "DuPage County, IL"),
        ];
        AppState::new(
            Arc::new(Dataset::new(counties, vec![cook, dupage])),
            vec!["17_043".into(), "00_000".into()],
        )
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_event(state, &Event::Char(c)).unwrap();
        }
    }

    #[test]
    fn typing_builds_session_after_two_chars() {
        let mut state = state();
        type_text(&mut state, "c");
        assert!(state.search.is_none());
        type_text(&mut state, "o");
        assert_eq!(state.search.as_ref().map(|s| s.matches.len()), Some(1));
    }

    #[test]
    fn keystroke_resets_cursor() {
        let mut state = state();
        type_text(&mut state, "county");
        handle_event(&mut state, &Event::MoveCursor(Direction::Down)).unwrap();
        assert_eq!(state.search.as_ref().and_then(|s| s.cursor.selected()), Some(0));

        type_text(&mut state, ",");
        assert_eq!(state.search.as_ref().and_then(|s| s.cursor.selected()), None);
    }

    #[test]
    fn commit_selects_county_and_clears_search() {
        let mut state = state();
        type_text(&mut state, "dupage");
        handle_event(&mut state, &Event::MoveCursor(Direction::Down)).unwrap();
        let (render, actions) = handle_event(&mut state, &Event::CommitSelection).unwrap();

        assert!(render);
        assert_eq!(state.view, ViewState::Results("17_043".into()));
        assert!(state.search.is_none());
        assert!(state.search_input.is_empty());
        assert_eq!(
            actions[0],
            Action::PushHistory {
                fragment: "dupage-county-il".to_string()
            }
        );
    }

    #[test]
    fn commit_without_selection_is_a_no_op() {
        let mut state = state();
        type_text(&mut state, "cook");
        let (render, actions) = handle_event(&mut state, &Event::CommitSelection).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
        assert!(state.view.is_search());
    }

    #[test]
    fn dismiss_keeps_typed_text() {
        let mut state = state();
        type_text(&mut state, "cook");
        handle_event(&mut state, &Event::DismissSearch).unwrap();
        assert!(state.search.is_none());
        assert_eq!(state.search_input, "cook");

        let (_, actions) = handle_event(&mut state, &Event::DismissSearch).unwrap();
        assert_eq!(actions, vec![Action::CloseFocus]);
    }

    #[test]
    fn unknown_featured_county_records_failure() {
        let mut state = state();
        let (render, actions) = handle_event(&mut state, &Event::SelectFeatured(1)).unwrap();
        assert!(render);
        assert!(actions.is_empty());
        assert!(state.view.is_search());
        assert_eq!(state.last_lookup_failure.as_deref(), Some("00_000"));
    }

    #[test]
    fn follow_link_navigates_only_to_known_counties() {
        let mut state = state();
        handle_event(&mut state, &Event::SelectCounty("17_031".into())).unwrap();

        handle_event(&mut state, &Event::MoveCursor(Direction::Down)).unwrap();
        handle_event(&mut state, &Event::MoveCursor(Direction::Down)).unwrap();
        let (render, _) = handle_event(&mut state, &Event::FollowLink).unwrap();
        assert!(!render);
        assert_eq!(state.view, ViewState::Results("17_031".into()));

        handle_event(&mut state, &Event::MoveCursor(Direction::Up)).unwrap();
        handle_event(&mut state, &Event::FollowLink).unwrap();
        assert_eq!(state.view, ViewState::Results("17_043".into()));
        assert_eq!(state.link_cursor.selected(), None);
    }

    #[test]
    fn navigate_back_returns_to_search() {
        let mut state = state();
        handle_event(&mut state, &Event::SelectCounty("17_031".into())).unwrap();
        let (_, actions) = handle_event(&mut state, &Event::NavigateBack).unwrap();
        assert!(state.view.is_search());
        assert!(actions.contains(&Action::FocusSearch));
    }

    #[test]
    fn history_landing_on_county_discards_search() {
        let mut state = state();
        type_text(&mut state, "dupa");
        assert!(state.search.is_some());

        handle_event(&mut state, &Event::HistoryChanged("cook-county-il".to_string())).unwrap();
        assert_eq!(state.view, ViewState::Results("17_031".into()));
        assert!(state.search.is_none());
        assert!(state.search_input.is_empty());
    }

    #[test]
    fn history_staying_on_search_keeps_typed_text() {
        let mut state = state();
        type_text(&mut state, "dupa");

        handle_event(&mut state, &Event::HistoryChanged(String::new())).unwrap();
        assert!(state.view.is_search());
        assert_eq!(state.search_input, "dupa");
    }

    #[test]
    fn typing_is_ignored_in_results_view() {
        let mut state = state();
        handle_event(&mut state, &Event::SelectCounty("17_031".into())).unwrap();
        let (render, _) = handle_event(&mut state, &Event::Char('x')).unwrap();
        assert!(!render);
        assert!(state.search_input.is_empty());
    }
}
