//! Scripted sessions driven through the controller the way the plugin shim drives it.

use countyflow::app::router::{county_title, DEFAULT_TITLE};
use countyflow::app::{find_matches, HistoryStack, SelectionCursor};
use countyflow::domain::{CountyIdentity, CountyRecord, CountySummaryEntry, FlowRecord, MigrationSummary};
use countyflow::storage::Dataset;
use countyflow::{Action, Controller, Direction, Event, Theme};

fn flow(fips: &str, name: &str, households: u64) -> FlowRecord {
    FlowRecord {
        counterpart_identity: CountyIdentity::new(fips),
        counterpart_name: name.to_string(),
        households,
        avg_agi: Some(60_000.0),
    }
}

fn record(fips: &str, name: &str, outflows: Vec<FlowRecord>, inflows: Vec<FlowRecord>) -> CountyRecord {
    CountyRecord {
        identity: CountyIdentity::new(fips),
        name: name.to_string(),
        year: Some("2021-2022".to_string()),
        summary: MigrationSummary {
            net_migration: -1200,
            ..MigrationSummary::default()
        },
        outflows,
        inflows,
    }
}

fn dataset() -> Dataset {
    let counties = vec![
        CountySummaryEntry::new("42_101", "Philadelphia County, PA"),
        CountySummaryEntry::new("42_045", "Delaware County, PA"),
        CountySummaryEntry::new("17_167", "Sangamon County, IL"),
        CountySummaryEntry::new("29_077", "Greene County, MO"),
        CountySummaryEntry::new("25_013", "Hampden County, MA"),
        CountySummaryEntry::new("05_143", "Washington County, AR"),
    ];
    let records = vec![
        record(
            "42_101",
            "Philadelphia County, PA",
            vec![flow("42_045", "Delaware County, PA", 5100), flow("34_007", "Camden County, NJ", 2300)],
            vec![flow("42_045", "Delaware County, PA", 3900)],
        ),
        record(
            "42_045",
            "Delaware County, PA",
            vec![flow("42_101", "Philadelphia County, PA", 3900)],
            vec![flow("42_101", "Philadelphia County, PA", 5100)],
        ),
    ];
    Dataset::new(counties, records)
}

/// Stand-in for the plugin shim: owns the history and the pane title.
struct Host {
    controller: Controller,
    history: HistoryStack,
    title: String,
    pushes: usize,
}

impl Host {
    fn boot(initial: &str) -> Self {
        let mut host = Self {
            controller: Controller::new(Theme::default(), initial, vec![CountyIdentity::new("42_045")]),
            history: HistoryStack::new(initial),
            title: String::new(),
            pushes: 0,
        };
        let (_, actions) = host.controller.datasets_loaded(dataset());
        host.apply(actions);
        host
    }

    fn apply(&mut self, actions: Vec<Action>) {
        for action in actions {
            match action {
                Action::PushHistory { fragment } => {
                    self.pushes += 1;
                    self.history.push(fragment);
                }
                Action::SetTitle(title) => self.title = title,
                Action::FocusSearch | Action::CloseFocus | Action::PostToWorker(_) => {}
            }
        }
        self.assert_single_view();
    }

    fn send(&mut self, event: Event) {
        let (_, actions) = self.controller.dispatch(&event).unwrap();
        self.apply(actions);
    }

    fn type_query(&mut self, query: &str) {
        for c in query.chars() {
            self.send(Event::Char(c));
        }
    }

    fn back(&mut self) {
        let fragment = self.history.back().unwrap().to_string();
        self.send(Event::HistoryChanged(fragment));
    }

    fn forward(&mut self) {
        let fragment = self.history.forward().unwrap().to_string();
        self.send(Event::HistoryChanged(fragment));
    }

    fn current(&self) -> Option<&str> {
        self.controller.state().unwrap().view.current().map(CountyIdentity::as_str)
    }

    fn assert_single_view(&self) {
        if let Some(state) = self.controller.state() {
            assert_ne!(state.view.is_search(), state.view.current().is_some());
        }
    }
}

#[test]
fn search_select_follow_and_replay_history() {
    let mut host = Host::boot("");
    assert_eq!(host.current(), None);
    assert_eq!(host.title, DEFAULT_TITLE);

    host.type_query("phil");
    host.send(Event::CommitSelection);
    assert_eq!(host.current(), None, "commit without a selection is a no-op");

    host.send(Event::MoveCursor(Direction::Down));
    host.send(Event::CommitSelection);
    assert_eq!(host.current(), Some("42_101"));
    assert_eq!(host.history.current(), "philadelphia-county-pa");
    assert_eq!(host.title, county_title("Philadelphia County, PA"));

    host.send(Event::MoveCursor(Direction::Down));
    host.send(Event::FollowLink);
    assert_eq!(host.current(), Some("42_045"));
    assert_eq!(host.history.current(), "delaware-county-pa");

    host.send(Event::NavigateBack);
    assert_eq!(host.current(), None);
    assert_eq!(host.history.current(), "");
    assert_eq!(host.title, DEFAULT_TITLE);
    assert_eq!(host.pushes, 3);

    host.back();
    assert_eq!(host.current(), Some("42_045"));
    host.back();
    assert_eq!(host.current(), Some("42_101"));
    host.forward();
    assert_eq!(host.current(), Some("42_045"));
    assert_eq!(host.pushes, 3, "history replays never push");
}

#[test]
fn replaying_history_onto_a_county_discards_the_typed_query() {
    let mut host = Host::boot("");
    host.send(Event::SelectCounty(CountyIdentity::new("42_101")));
    host.send(Event::NavigateBack);

    host.type_query("dela");
    assert!(host.controller.state().unwrap().search.is_some());

    host.back();
    assert_eq!(host.current(), Some("42_101"));

    host.back();
    let state = host.controller.state().unwrap();
    assert!(state.view.is_search());
    assert!(state.search.is_none());
    assert!(state.search_input.is_empty());
}

#[test]
fn reselecting_the_open_county_pushes_once() {
    let mut host = Host::boot("");

    host.send(Event::SelectCounty(CountyIdentity::new("42_101")));
    host.send(Event::SelectCounty(CountyIdentity::new("42_101")));

    assert_eq!(host.pushes, 1);
    assert_eq!(host.history.len(), 2);
}

#[test]
fn links_to_counties_outside_the_dataset_are_inert() {
    let mut host = Host::boot("philadelphia-county-pa");
    assert_eq!(host.current(), Some("42_101"));

    host.send(Event::MoveCursor(Direction::Down));
    host.send(Event::MoveCursor(Direction::Down));
    host.send(Event::FollowLink);

    assert_eq!(host.current(), Some("42_101"));
    assert_eq!(host.pushes, 0);
}

#[test]
fn unknown_identity_leaves_the_view_alone() {
    let mut host = Host::boot("delaware-county-pa");

    host.send(Event::SelectCounty(CountyIdentity::new("99_999")));

    assert_eq!(host.current(), Some("42_045"));
    assert_eq!(
        host.controller.state().unwrap().last_lookup_failure.as_deref(),
        Some("99_999")
    );
}

#[test]
fn unresolvable_initial_fragment_lands_on_search() {
    let host = Host::boot("#atlantis-county-zz");
    let state = host.controller.state().unwrap();

    assert!(state.view.is_search());
    assert_eq!(state.last_lookup_failure.as_deref(), Some("atlantis-county-zz"));
    assert_eq!(host.title, DEFAULT_TITLE);
}

#[test]
fn featured_function_keys_open_counties() {
    let mut host = Host::boot("");

    host.send(Event::SelectFeatured(0));
    assert_eq!(host.current(), Some("42_045"));

    host.send(Event::NavigateBack);
    host.send(Event::SelectFeatured(4));
    assert_eq!(host.current(), None);
}

#[test]
fn events_before_load_are_dropped() {
    let mut controller = Controller::new(Theme::default(), "", vec![]);

    assert_eq!(controller.dispatch(&Event::Char('p')).unwrap(), (false, vec![]));
    assert_eq!(
        controller.dispatch(&Event::DismissSearch).unwrap(),
        (false, vec![Action::CloseFocus])
    );
}

#[test]
fn spring_matches_are_an_ordered_capped_subsequence() {
    let names: Vec<String> = (0..30)
        .map(|i| {
            if i % 2 == 0 {
                format!("Spring{i} County, TX")
            } else {
                format!("Other{i} County, TX")
            }
        })
        .collect();
    let index: Vec<CountySummaryEntry> = names
        .iter()
        .enumerate()
        .map(|(i, name)| CountySummaryEntry::new(format!("{i:05}"), name.as_str()))
        .collect();

    let matches = find_matches("spring", &index);
    let expected: Vec<&CountySummaryEntry> = index
        .iter()
        .filter(|e| e.name.to_lowercase().contains("spring"))
        .take(10)
        .collect();

    assert_eq!(matches.len(), 10);
    assert!(matches.iter().map(|m| &m.entry).eq(expected));
    assert!(find_matches("zz-no-such-county", &index).is_empty());
}

#[test]
fn no_matches_is_a_search_state_not_an_error() {
    let mut host = Host::boot("");
    host.type_query("zz-no-such-county");

    let state = host.controller.state().unwrap();
    assert!(state.search.as_ref().unwrap().is_no_matches());
    assert!(state.last_lookup_failure.is_none());
}

#[test]
fn cursor_clamps_at_both_ends() {
    let result_count = 4;
    let mut cursor = SelectionCursor::new(result_count);

    for _ in 0..result_count + 5 {
        cursor.move_down();
    }
    assert_eq!(cursor.selected(), Some(result_count - 1));

    cursor.reset(result_count);
    cursor.move_down();
    cursor.move_up();
    assert_eq!(cursor.selected(), Some(0));
}
