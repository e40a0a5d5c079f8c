//! County domain model.
//!
//! These are the engine-facing types. They are produced once by the dataset
//! loader (see [`crate::storage`]) and are read-only afterwards. The JSON wire
//! shapes of the source documents live in [`crate::storage::models`]; the types
//! here are what crosses the worker boundary and what the engine consumes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque, stable key of one county (its FIPS code, e.g. `"42_101"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountyIdentity(String);

impl CountyIdentity {
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountyIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CountyIdentity {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

/// One entry of the county list used for search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountySummaryEntry {
    pub identity: CountyIdentity,
    /// Display name, e.g. `"Philadelphia County, PA"`.
    pub name: String,
    /// Two-letter state abbreviation when the source carries it.
    pub state: Option<String>,
}

impl CountySummaryEntry {
    #[must_use]
    pub fn new(identity: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            identity: CountyIdentity::new(identity),
            name: name.into(),
            state: None,
        }
    }
}

/// Aggregated migration figures for one county.
///
/// `avg_agi_*` values of `None` or `0.0` both mean "unknown"; the source
/// schema cannot tell a real zero apart from a missing value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MigrationSummary {
    /// Households arriving minus households leaving.
    pub net_migration: i64,
    pub avg_agi_leaving: Option<f64>,
    pub avg_agi_arriving: Option<f64>,
    pub total_leaving: Option<u64>,
    pub total_arriving: Option<u64>,
}

/// A directed migration flow between the owning county and a counterpart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowRecord {
    pub counterpart_identity: CountyIdentity,
    pub counterpart_name: String,
    pub households: u64,
    pub avg_agi: Option<f64>,
}

/// Full migration record for one county.
///
/// `outflows` and `inflows` arrive sorted by descending household count. The
/// engine truncates them for display and never re-sorts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountyRecord {
    pub identity: CountyIdentity,
    pub name: String,
    /// Reporting period, e.g. `"2021-2022"`.
    pub year: Option<String>,
    pub summary: MigrationSummary,
    pub outflows: Vec<FlowRecord>,
    pub inflows: Vec<FlowRecord>,
}

impl CountyRecord {
    /// Total number of flows of both directions carried by the record.
    #[must_use]
    pub fn flow_count(&self) -> usize {
        self.outflows.len() + self.inflows.len()
    }
}
