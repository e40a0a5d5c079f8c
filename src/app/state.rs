//! Session state and view model computation.
//!
//! [`AppState`] is the engine's session object. It exists only after the
//! datasets have loaded and is owned by the [`Controller`](crate::app::Controller),
//! which lends it `&mut` to [`handle_event`](crate::app::handle_event) for each
//! event. The dataset itself is shared and never mutated.
//!
//! # State Components
//!
//! - **View**: `Search` or `Results(identity)`
//! - **Search input**: text typed so far, kept when the list is dismissed
//! - **Search session**: matches and cursor for the current qualifying query
//! - **Link cursor**: highlighted flow row in the Results view
//! - **Featured**: quick-pick identities from configuration
//! - **Last lookup failure**: identity or fragment that matched nothing

use crate::app::cursor::SelectionCursor;
use crate::app::modes::ViewState;
use crate::app::router::{county_title, DEFAULT_TITLE};
use crate::app::search::SearchSession;
use crate::domain::{CountyIdentity, CountyRecord, FlowRecord};
use crate::storage::Dataset;
use crate::ui::format::{format_count, format_currency, format_signed_count, has_limited_data, Polarity};
use crate::ui::viewmodel::{
    Body, CountyViewModel, FeaturedItem, FlowRow, FooterInfo, HeaderInfo, Notice, ResultItem, SearchPanel,
    SearchResults, UIViewModel,
};
use std::sync::Arc;

/// Flow rows shown per direction.
pub const TOP_FLOWS: usize = 5;

/// Featured picks reachable through function keys.
pub const MAX_FEATURED: usize = 9;

/// Engine session state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
    pub view: ViewState,
    pub search_input: String,
    /// `None` while the query is too short or the list is dismissed.
    pub search: Option<SearchSession>,
    pub link_cursor: SelectionCursor,
    pub featured: Vec<CountyIdentity>,
    pub last_lookup_failure: Option<String>,
}

impl AppState {
    /// Creates the session in the search view.
    #[must_use]
    pub fn new(dataset: Arc<Dataset>, featured: Vec<CountyIdentity>) -> Self {
        let mut featured = featured;
        featured.truncate(MAX_FEATURED);

        Self {
            dataset,
            view: ViewState::Search,
            search_input: String::new(),
            search: None,
            link_cursor: SelectionCursor::new(0),
            featured,
            last_lookup_failure: None,
        }
    }

    /// Rebuilds the search session from the current input.
    ///
    /// Any change to the match list resets the cursor, so the session is
    /// always rebuilt from scratch.
    pub fn refresh_search(&mut self) {
        self.search = SearchSession::begin(&self.search_input, self.dataset.counties());
    }

    /// The record shown in the Results view.
    #[must_use]
    pub fn current_record(&self) -> Option<&CountyRecord> {
        self.view.current().and_then(|identity| self.dataset.record(identity))
    }

    /// Flow rows of the current record in display order: top outflows, then
    /// top inflows.
    fn link_rows(&self) -> Vec<&FlowRecord> {
        self.current_record().map_or_else(Vec::new, |record| {
            record
                .outflows
                .iter()
                .take(TOP_FLOWS)
                .chain(record.inflows.iter().take(TOP_FLOWS))
                .collect()
        })
    }

    /// Counterpart of the highlighted flow row.
    #[must_use]
    pub fn selected_link(&self) -> Option<&CountyIdentity> {
        let index = self.link_cursor.selected()?;
        self.link_rows()
            .get(index)
            .map(|flow| &flow.counterpart_identity)
    }

    /// Clears the link cursor and sizes it for the current view.
    pub fn reset_link_cursor(&mut self) {
        let len = self.link_rows().len();
        self.link_cursor.reset(len);
    }

    /// Computes the view model for a pane `cols` columns wide.
    #[must_use]
    pub fn compute_viewmodel(&self, cols: usize) -> UIViewModel {
        let (title, body) = match self.current_record() {
            Some(record) => (county_title(&record.name), Body::County(self.compute_county(record))),
            None => (DEFAULT_TITLE.to_string(), Body::Search(self.compute_search_panel(cols))),
        };

        UIViewModel {
            header: HeaderInfo { title },
            body,
            footer: self.compute_footer(),
            notice: self.last_lookup_failure.as_ref().map(|key| Notice {
                message: format!("No county found for \"{key}\""),
            }),
        }
    }

    fn compute_search_panel(&self, cols: usize) -> SearchPanel {
        let max_name_width = cols.saturating_sub(8).max(10);

        let results = match &self.search {
            None => SearchResults::Inactive,
            Some(session) if session.is_no_matches() => SearchResults::NoMatches,
            Some(session) => SearchResults::Matches(
                session
                    .matches
                    .iter()
                    .enumerate()
                    .map(|(index, hit)| {
                        let name = truncate_chars(&hit.entry.name, max_name_width);
                        let visible = name.chars().count();
                        ResultItem {
                            is_selected: session.cursor.selected() == Some(index),
                            highlight_ranges: hit
                                .highlight
                                .map(|(start, end)| (start.min(visible), end.min(visible)))
                                .filter(|(start, end)| start < end)
                                .into_iter()
                                .collect(),
                            name,
                        }
                    })
                    .collect(),
            ),
        };

        let featured = self
            .featured
            .iter()
            .enumerate()
            .map(|(slot, identity)| FeaturedItem {
                key: format!("F{}", slot + 1),
                name: self
                    .dataset
                    .record(identity)
                    .map_or_else(|| identity.to_string(), |record| record.name.clone()),
            })
            .collect();

        SearchPanel {
            query: self.search_input.clone(),
            results,
            featured,
        }
    }

    fn compute_county(&self, record: &CountyRecord) -> CountyViewModel {
        let selected = self.link_cursor.selected();
        let outflow_count = record.outflows.len().min(TOP_FLOWS);

        let rows = |flows: &[FlowRecord], offset: usize| -> Vec<FlowRow> {
            flows
                .iter()
                .take(TOP_FLOWS)
                .enumerate()
                .map(|(i, flow)| FlowRow {
                    rank: i + 1,
                    counterpart_identity: flow.counterpart_identity.clone(),
                    counterpart_name: flow.counterpart_name.clone(),
                    households: format_count(flow.households),
                    avg_agi: format_currency(flow.avg_agi),
                    is_link: self.dataset.contains(&flow.counterpart_identity),
                    is_selected: selected == Some(offset + i),
                })
                .collect()
        };

        let summary = &record.summary;
        CountyViewModel {
            identity: record.identity.clone(),
            name: record.name.clone(),
            year: record.year.clone(),
            net_migration: format!("{} households", format_signed_count(summary.net_migration)),
            polarity: Polarity::of(summary.net_migration),
            agi_leaving: format_currency(summary.avg_agi_leaving),
            agi_arriving: format_currency(summary.avg_agi_arriving),
            total_leaving: summary.total_leaving.map(format_count),
            total_arriving: summary.total_arriving.map(format_count),
            outflows: rows(&record.outflows, 0),
            inflows: rows(&record.inflows, outflow_count),
            limited_data: has_limited_data(record),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match (&self.view, &self.search) {
            (ViewState::Results(_), _) => {
                "j/k: select link  Enter: open  Esc: back to search  Alt+←/→: history  q: quit"
            }
            (ViewState::Search, Some(_)) => "↑/↓ or Ctrl+p/n: navigate  Enter: open  Esc: hide results",
            (ViewState::Search, None) if !self.featured.is_empty() => {
                "Type to search  F1-F9: featured  Alt+←/→: history  Esc: close"
            }
            (ViewState::Search, None) => "Type to search  Alt+←/→: history  Esc: close",
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

/// Truncates to `max` characters, ending in `...` when shortened.
fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{kept}...")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CountySummaryEntry, MigrationSummary};

    fn flow(fips: &str, households: u64) -> FlowRecord {
        FlowRecord {
            counterpart_identity: CountyIdentity::new(fips),
            counterpart_name: format!("County {fips}"),
            households,
            avg_agi: Some(50_000.0),
        }
    }

    fn state() -> AppState {
        let big = CountyRecord {
            identity: "06_037".into(),
            name: "Los Angeles County, CA".to_string(),
            year: Some("2021-2022".to_string()),
            summary: MigrationSummary {
                net_migration: -123_456,
                avg_agi_leaving: Some(98_765.4),
                avg_agi_arriving: Some(0.0),
                total_leaving: Some(400_000),
                total_arriving: None,
            },
            outflows: (0..7).map(|i| flow(&format!("06_{i:03}"), 1000 - i)).collect(),
            inflows: vec![flow("06_059", 900), flow("06_001", 800)],
        };
        let orange = CountyRecord {
            identity: "06_059".into(),
            name: "Orange County, CA".to_string(),
            year: None,
            summary: MigrationSummary::default(),
            outflows: vec![],
            inflows: vec![],
        };
        let counties = vec![
            CountySummaryEntry::new("06_037", "Los Angeles County, CA"),
            CountySummaryEntry::new("06_059", "Orange County, CA"),
        ];
        AppState::new(Arc::new(Dataset::new(counties, vec![big, orange])), vec!["06_059".into()])
    }

    #[test]
    fn county_view_truncates_flows_and_formats_figures() {
        let mut state = state();
        state.view = ViewState::Results("06_037".into());
        state.reset_link_cursor();

        let vm = state.compute_viewmodel(80);
        let Body::County(county) = vm.body else {
            panic!("expected county body");
        };

        assert_eq!(county.net_migration, "-123,456 households");
        assert_eq!(county.polarity, Polarity::Negative);
        assert_eq!(county.agi_leaving, "$98,765");
        assert_eq!(county.agi_arriving, "N/A");
        assert_eq!(county.total_leaving.as_deref(), Some("400,000"));
        assert_eq!(county.outflows.len(), 5);
        assert_eq!(county.outflows[4].rank, 5);
        assert_eq!(county.inflows.len(), 2);
        assert!(county.inflows[0].is_link);
        assert!(!county.outflows[0].is_link);
        assert!(!county.limited_data);
        assert_eq!(vm.header.title, "Los Angeles County, CA Migration — Where Are People Moving?");
    }

    #[test]
    fn link_cursor_spans_outflows_then_inflows() {
        let mut state = state();
        state.view = ViewState::Results("06_037".into());
        state.reset_link_cursor();
        assert_eq!(state.link_cursor.len(), 7);

        for _ in 0..6 {
            state.link_cursor.move_down();
        }
        assert_eq!(state.selected_link(), Some(&CountyIdentity::new("06_059")));

        let Body::County(county) = state.compute_viewmodel(80).body else {
            panic!("expected county body");
        };
        assert!(county.inflows[0].is_selected);
        assert!(county.outflows.iter().all(|row| !row.is_selected));
    }

    #[test]
    fn search_panel_shows_featured_when_inactive() {
        let state = state();
        let Body::Search(panel) = state.compute_viewmodel(80).body else {
            panic!("expected search body");
        };
        assert_eq!(panel.results, SearchResults::Inactive);
        assert_eq!(
            panel.featured,
            vec![FeaturedItem {
                key: "F1".to_string(),
                name: "Orange County, CA".to_string()
            }]
        );
    }

    #[test]
    fn search_panel_reports_no_matches() {
        let mut state = state();
        state.search_input = "zz-no-such-county".to_string();
        state.refresh_search();
        let Body::Search(panel) = state.compute_viewmodel(80).body else {
            panic!("expected search body");
        };
        assert_eq!(panel.results, SearchResults::NoMatches);
    }

    #[test]
    fn lookup_failure_becomes_notice() {
        let mut state = state();
        state.last_lookup_failure = Some("atlantis".to_string());
        let vm = state.compute_viewmodel(80);
        assert_eq!(vm.notice.map(|n| n.message), Some("No county found for \"atlantis\"".to_string()));
    }

    #[test]
    fn long_names_are_truncated() {
        assert_eq!(truncate_chars("Los Angeles County, CA", 10), "Los Ang...");
        assert_eq!(truncate_chars("Short", 10), "Short");
    }
}
