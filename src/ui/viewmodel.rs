//! View model types representing renderable UI state.
//!
//! View models are computed from `AppState::compute_viewmodel()` (or by the
//! controller for the loading and failure screens) and consumed by the
//! renderer. They hold display-ready strings only; all formatting decisions
//! have been made by the time a view model exists.

use crate::domain::CountyIdentity;
use crate::ui::format::Polarity;

/// Complete UI view model for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct UIViewModel {
    pub header: HeaderInfo,
    pub body: Body,
    pub footer: FooterInfo,
    /// Diagnostic shown above the body (last failed lookup).
    pub notice: Option<Notice>,
}

/// Main content area.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// Search input, results and featured picks.
    Search(SearchPanel),
    /// Migration figures of one county.
    County(CountyViewModel),
    /// Centered message (loading, load failure).
    Empty(EmptyState),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}

/// Centered two-line message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
}

/// State of the search surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPanel {
    /// Text typed so far, untrimmed.
    pub query: String,
    pub results: SearchResults,
    /// Quick picks, shown while no search is active.
    pub featured: Vec<FeaturedItem>,
}

/// The result list below the search input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResults {
    /// Query too short, or the list was dismissed.
    Inactive,
    /// A qualifying query matched nothing.
    NoMatches,
    Matches(Vec<ResultItem>),
}

/// One row of the search result list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultItem {
    pub name: String,
    pub is_selected: bool,
    /// Character ranges `(start, end)` to highlight within `name`.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// A featured county quick pick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeaturedItem {
    /// Key that selects it, e.g. `"F1"`.
    pub key: String,
    pub name: String,
}

/// Display-ready figures of one county.
#[derive(Debug, Clone, PartialEq)]
pub struct CountyViewModel {
    pub identity: CountyIdentity,
    pub name: String,
    pub year: Option<String>,
    /// Signed household count, e.g. `"+1,234 households"`.
    pub net_migration: String,
    pub polarity: Polarity,
    pub agi_leaving: String,
    pub agi_arriving: String,
    pub total_leaving: Option<String>,
    pub total_arriving: Option<String>,
    /// Top outflows, at most five.
    pub outflows: Vec<FlowRow>,
    /// Top inflows, at most five.
    pub inflows: Vec<FlowRow>,
    pub limited_data: bool,
}

/// One ranked flow row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowRow {
    /// One-based rank within its table.
    pub rank: usize,
    pub counterpart_identity: CountyIdentity,
    pub counterpart_name: String,
    pub households: String,
    pub avg_agi: String,
    /// The counterpart exists in the dataset and can be navigated to.
    pub is_link: bool,
    pub is_selected: bool,
}
