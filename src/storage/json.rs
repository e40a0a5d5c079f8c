//! JSON file dataset source.
//!
//! Reads `county_list.json` and `migration_data.json` as produced by the data
//! pipeline. Both files are read whole; the migration document is decoded
//! with its key order intact (see [`MigrationDocument`]).
//!
//! # File Format
//!
//! ```json
//! [{ "fips": "42_101", "name": "Philadelphia County, PA", "state": "PA" }]
//! ```
//!
//! ```json
//! {
//!   "42_101": {
//!     "name": "Philadelphia County, PA",
//!     "year": "2021-2022",
//!     "summary": { "net_migration": -8123, "avg_agi_leaving": 71000, "avg_agi_arriving": 64000 },
//!     "outflows": [{ "dest_fips": "42_045", "destination": "Delaware County, PA", "households": 5100, "avg_agi": 68000 }],
//!     "inflows": [{ "origin_fips": "42_045", "origin": "Delaware County, PA", "households": 3900, "avg_agi": 52000 }]
//!   }
//! }
//! ```

use crate::domain::error::{CountyflowError, Result};
use crate::domain::{CountyRecord, CountySummaryEntry};
use crate::storage::backend::DatasetSource;
use crate::storage::models::{CountyListEntry, MigrationDocument};
use std::path::{Path, PathBuf};

/// Dataset source backed by two JSON files on disk.
#[derive(Debug, Clone)]
pub struct JsonDatasetSource {
    county_list_path: PathBuf,
    migration_data_path: PathBuf,
}

impl JsonDatasetSource {
    pub fn new(county_list_path: impl Into<PathBuf>, migration_data_path: impl Into<PathBuf>) -> Self {
        Self {
            county_list_path: county_list_path.into(),
            migration_data_path: migration_data_path.into(),
        }
    }

    /// Reads a dataset file, reporting a missing or unreadable file as
    /// [`CountyflowError::DataUnavailable`].
    fn read(path: &Path) -> Result<String> {
        tracing::debug!(path = ?path, "reading dataset file");
        std::fs::read_to_string(path).map_err(|e| {
            CountyflowError::DataUnavailable(format!("failed to read {}: {e}", path.display()))
        })
    }
}

impl DatasetSource for JsonDatasetSource {
    fn load_county_list(&self) -> Result<Vec<CountySummaryEntry>> {
        let _span = tracing::debug_span!("json_load_county_list",
            path = ?self.county_list_path
        ).entered();

        let contents = Self::read(&self.county_list_path)?;
        let counties = parse_county_list(&contents)?;

        tracing::debug!(count = counties.len(), "county list loaded");
        Ok(counties)
    }

    fn load_migration_records(&self) -> Result<Vec<CountyRecord>> {
        let _span = tracing::debug_span!("json_load_migration_records",
            path = ?self.migration_data_path
        ).entered();

        let contents = Self::read(&self.migration_data_path)?;
        let records = parse_migration_data(&contents)?;

        tracing::debug!(count = records.len(), "migration records loaded");
        Ok(records)
    }
}

/// Decodes the county list document.
///
/// # Errors
///
/// Returns [`CountyflowError::Dataset`] if the JSON is malformed.
pub fn parse_county_list(contents: &str) -> Result<Vec<CountySummaryEntry>> {
    let entries: Vec<CountyListEntry> = serde_json::from_str(contents)
        .map_err(|e| CountyflowError::Dataset(format!("failed to parse county list: {e}")))?;

    Ok(entries.into_iter().map(CountySummaryEntry::from).collect())
}

/// Decodes the migration document into records, preserving key order.
///
/// # Errors
///
/// Returns [`CountyflowError::Dataset`] if the JSON is malformed.
pub fn parse_migration_data(contents: &str) -> Result<Vec<CountyRecord>> {
    let document: MigrationDocument = serde_json::from_str(contents)
        .map_err(|e| CountyflowError::Dataset(format!("failed to parse migration data: {e}")))?;

    Ok(document.into_records())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CountyIdentity;

    const MIGRATION: &str = r#"{
        "42_101": {
            "name": "Philadelphia County, PA",
            "state": "PA",
            "fips": "42_101",
            "year": "2021-2022",
            "summary": {
                "total_leaving": 30000,
                "total_arriving": 22000,
                "net_migration": -8000,
                "avg_agi_leaving": 71000,
                "avg_agi_arriving": 0
            },
            "outflows": [
                {"destination": "Delaware County, PA", "dest_fips": "42_045", "households": 5100, "people": 9000, "total_agi": 1, "avg_agi": 68000}
            ],
            "inflows": [
                {"origin": "Montgomery County, PA", "origin_fips": "42_091", "households": 3900, "people": 7000, "total_agi": 1, "avg_agi": null}
            ]
        },
        "01_001": {
            "name": "Autauga County, AL",
            "summary": {"net_migration": 12},
            "outflows": [],
            "inflows": []
        }
    }"#;

    #[test]
    fn county_list_maps_fips_to_identity() {
        let counties = parse_county_list(
            r#"[{"fips": "01_001", "name": "Autauga County, AL", "state": "AL"}, {"fips": "01_003", "name": "Baldwin County, AL"}]"#,
        )
        .unwrap();

        assert_eq!(counties.len(), 2);
        assert_eq!(counties[0].identity, CountyIdentity::new("01_001"));
        assert_eq!(counties[0].state.as_deref(), Some("AL"));
        assert_eq!(counties[1].state, None);
    }

    #[test]
    fn migration_data_keeps_document_order() {
        let records = parse_migration_data(MIGRATION).unwrap();
        let order: Vec<&str> = records.iter().map(|r| r.identity.as_str()).collect();
        assert_eq!(order, vec!["42_101", "01_001"]);
    }

    #[test]
    fn migration_flows_are_mapped_to_counterparts() {
        let records = parse_migration_data(MIGRATION).unwrap();
        let philly = &records[0];

        assert_eq!(philly.year.as_deref(), Some("2021-2022"));
        assert_eq!(philly.summary.net_migration, -8000);
        assert_eq!(philly.summary.avg_agi_arriving, Some(0.0));
        assert_eq!(philly.summary.total_leaving, Some(30000));
        assert_eq!(philly.outflows[0].counterpart_identity, CountyIdentity::new("42_045"));
        assert_eq!(philly.outflows[0].counterpart_name, "Delaware County, PA");
        assert_eq!(philly.inflows[0].counterpart_identity, CountyIdentity::new("42_091"));
        assert_eq!(philly.inflows[0].avg_agi, None);
    }

    #[test]
    fn missing_optional_fields_default() {
        let records = parse_migration_data(MIGRATION).unwrap();
        let autauga = &records[1];
        assert_eq!(autauga.summary.avg_agi_leaving, None);
        assert_eq!(autauga.year, None);
        assert_eq!(autauga.flow_count(), 0);
    }

    #[test]
    fn malformed_documents_are_dataset_errors() {
        assert!(matches!(parse_county_list("{"), Err(CountyflowError::Dataset(_))));
        assert!(matches!(parse_migration_data("[1, 2]"), Err(CountyflowError::Dataset(_))));
    }

    #[test]
    fn missing_file_is_data_unavailable() {
        let source = JsonDatasetSource::new("/nonexistent/county_list.json", "/nonexistent/migration_data.json");
        assert!(matches!(source.load(), Err(CountyflowError::DataUnavailable(_))));
    }
}
