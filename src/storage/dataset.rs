//! The loaded, read-only dataset the navigation engine works against.

use crate::domain::slug::{normalize_fragment, to_slug};
use crate::domain::{CountyIdentity, CountyRecord, CountySummaryEntry};
use std::collections::HashMap;

/// County list plus migration records, in source order.
///
/// Built once by the loader and shared with the engine behind an `Arc`.
/// Records are kept in the migration document's key order; an index by
/// identity gives constant-time lookups without losing that order.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    counties: Vec<CountySummaryEntry>,
    records: Vec<CountyRecord>,
    positions: HashMap<CountyIdentity, usize>,
}

impl Dataset {
    /// Builds a dataset from the two loaded collections.
    ///
    /// If a record identity appears twice, the first occurrence is the one
    /// reachable by lookup.
    #[must_use]
    pub fn new(counties: Vec<CountySummaryEntry>, records: Vec<CountyRecord>) -> Self {
        let mut positions = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            if positions.contains_key(&record.identity) {
                tracing::debug!(identity = %record.identity, "duplicate county record ignored for lookup");
                continue;
            }
            positions.insert(record.identity.clone(), position);
        }

        Self {
            counties,
            records,
            positions,
        }
    }

    /// The searchable county list, in list order.
    #[must_use]
    pub fn counties(&self) -> &[CountySummaryEntry] {
        &self.counties
    }

    /// All migration records, in source document order.
    #[must_use]
    pub fn records(&self) -> &[CountyRecord] {
        &self.records
    }

    #[must_use]
    pub fn record(&self, identity: &CountyIdentity) -> Option<&CountyRecord> {
        self.positions
            .get(identity)
            .and_then(|&position| self.records.get(position))
    }

    #[must_use]
    pub fn contains(&self, identity: &CountyIdentity) -> bool {
        self.positions.contains_key(identity)
    }

    /// Resolves a fragment to the first record whose name slugs to it.
    ///
    /// The fragment is normalized first (leading `#` stripped, trimmed,
    /// lower-cased). An empty fragment resolves to nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use countyflow::domain::{CountyIdentity, CountyRecord, MigrationSummary};
    /// use countyflow::storage::Dataset;
    ///
    /// let record = CountyRecord {
    ///     identity: CountyIdentity::new("17_031"),
    ///     name: "Cook County, IL".to_string(),
    ///     year: None,
    ///     summary: MigrationSummary::default(),
    ///     outflows: vec![],
    ///     inflows: vec![],
    /// };
    /// let dataset = Dataset::new(vec![], vec![record]);
    /// assert_eq!(
    ///     dataset.resolve_slug("#cook-county-il").map(CountyIdentity::as_str),
    ///     Some("17_031")
    /// );
    /// ```
    #[must_use]
    pub fn resolve_slug(&self, fragment: &str) -> Option<&CountyIdentity> {
        let target = normalize_fragment(fragment);
        if target.is_empty() {
            return None;
        }

        self.records
            .iter()
            .find(|record| to_slug(&record.name) == target)
            .map(|record| &record.identity)
    }
}
