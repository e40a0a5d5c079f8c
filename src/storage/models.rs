//! Wire models for the two source documents.
//!
//! These types mirror the JSON produced by the data pipeline and are kept
//! separate from the domain types so the engine never sees source-specific
//! field names (`dest_fips`, `origin`, ...). Extra fields in the documents are
//! ignored.

use crate::domain::{CountyIdentity, CountyRecord, CountySummaryEntry, FlowRecord, MigrationSummary};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// One element of `county_list.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountyListEntry {
    pub fips: String,
    pub name: String,
    #[serde(default)]
    pub state: Option<String>,
}

impl From<CountyListEntry> for CountySummaryEntry {
    fn from(entry: CountyListEntry) -> Self {
        Self {
            identity: CountyIdentity::new(entry.fips),
            name: entry.name,
            state: entry.state,
        }
    }
}

/// The `summary` object of a migration entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryEntry {
    pub net_migration: i64,
    #[serde(default)]
    pub avg_agi_leaving: Option<f64>,
    #[serde(default)]
    pub avg_agi_arriving: Option<f64>,
    #[serde(default)]
    pub total_leaving: Option<u64>,
    #[serde(default)]
    pub total_arriving: Option<u64>,
}

/// An element of an entry's `outflows` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutflowEntry {
    pub dest_fips: String,
    pub destination: String,
    pub households: u64,
    #[serde(default)]
    pub avg_agi: Option<f64>,
}

/// An element of an entry's `inflows` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InflowEntry {
    pub origin_fips: String,
    pub origin: String,
    pub households: u64,
    #[serde(default)]
    pub avg_agi: Option<f64>,
}

/// The value stored under each FIPS key of `migration_data.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MigrationEntry {
    pub name: String,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub summary: SummaryEntry,
    #[serde(default)]
    pub outflows: Vec<OutflowEntry>,
    #[serde(default)]
    pub inflows: Vec<InflowEntry>,
}

impl MigrationEntry {
    /// Converts the wire entry into a domain record keyed by `fips`.
    #[must_use]
    pub fn into_record(self, fips: String) -> CountyRecord {
        let outflows = self
            .outflows
            .into_iter()
            .map(|flow| FlowRecord {
                counterpart_identity: CountyIdentity::new(flow.dest_fips),
                counterpart_name: flow.destination,
                households: flow.households,
                avg_agi: flow.avg_agi,
            })
            .collect();

        let inflows = self
            .inflows
            .into_iter()
            .map(|flow| FlowRecord {
                counterpart_identity: CountyIdentity::new(flow.origin_fips),
                counterpart_name: flow.origin,
                households: flow.households,
                avg_agi: flow.avg_agi,
            })
            .collect();

        CountyRecord {
            identity: CountyIdentity::new(fips),
            name: self.name,
            year: self.year,
            summary: MigrationSummary {
                net_migration: self.summary.net_migration,
                avg_agi_leaving: self.summary.avg_agi_leaving,
                avg_agi_arriving: self.summary.avg_agi_arriving,
                total_leaving: self.summary.total_leaving,
                total_arriving: self.summary.total_arriving,
            },
            outflows,
            inflows,
        }
    }
}

/// The whole `migration_data.json` document with its key order preserved.
///
/// Slug resolution walks records in the document's own order, so this type
/// decodes the top-level object into a list instead of a hash map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MigrationDocument {
    pub entries: Vec<(String, MigrationEntry)>,
}

impl MigrationDocument {
    /// Converts every entry into a domain record, keeping document order.
    #[must_use]
    pub fn into_records(self) -> Vec<CountyRecord> {
        self.entries
            .into_iter()
            .map(|(fips, entry)| entry.into_record(fips))
            .collect()
    }
}

impl<'de> Deserialize<'de> for MigrationDocument {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DocumentVisitor;

        impl<'de> Visitor<'de> for DocumentVisitor {
            type Value = MigrationDocument;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map from FIPS codes to county migration entries")
            }

            fn visit_map<A>(self, mut access: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((fips, entry)) = access.next_entry::<String, MigrationEntry>()? {
                    entries.push((fips, entry));
                }
                Ok(MigrationDocument { entries })
            }
        }

        deserializer.deserialize_map(DocumentVisitor)
    }
}
