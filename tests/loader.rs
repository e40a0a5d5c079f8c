//! Loading the two dataset documents from disk.

use countyflow::storage::{DatasetSource, JsonDatasetSource};
use countyflow::worker::{CountyflowWorker, WorkerMessage, WorkerResponse};
use countyflow::CountyflowError;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const COUNTY_LIST: &str = r#"[
    {"fips": "06_037", "name": "Los Angeles County, CA", "state": "CA"},
    {"fips": "42_101", "name": "Philadelphia County, PA", "state": "PA"}
]"#;

const MIGRATION_DATA: &str = r#"{
    "42_101": {
        "name": "Philadelphia County, PA",
        "summary": {"net_migration": -8000, "avg_agi_leaving": 71000},
        "outflows": [{"destination": "Delaware County, PA", "dest_fips": "42_045", "households": 5100, "avg_agi": 68000}],
        "inflows": []
    },
    "06_037": {
        "name": "Los Angeles County, CA",
        "year": "2021-2022",
        "summary": {"net_migration": -91000},
        "outflows": [],
        "inflows": []
    }
}"#;

fn write_fixture(dir: &TempDir, counties: &str, migration: &str) -> (PathBuf, PathBuf) {
    let county_list = dir.path().join("county_list.json");
    let migration_data = dir.path().join("migration_data.json");
    fs::write(&county_list, counties).unwrap();
    fs::write(&migration_data, migration).unwrap();
    (county_list, migration_data)
}

#[test]
fn loads_both_documents_preserving_order() {
    let dir = TempDir::new().unwrap();
    let (county_list, migration_data) = write_fixture(&dir, COUNTY_LIST, MIGRATION_DATA);

    let dataset = JsonDatasetSource::new(county_list, migration_data).load().unwrap();

    let listed: Vec<&str> = dataset.counties().iter().map(|c| c.identity.as_str()).collect();
    assert_eq!(listed, vec!["06_037", "42_101"]);

    let keyed: Vec<&str> = dataset.records().iter().map(|r| r.identity.as_str()).collect();
    assert_eq!(keyed, vec!["42_101", "06_037"]);

    assert_eq!(
        dataset.resolve_slug("los-angeles-county-ca").map(|id| id.as_str()),
        Some("06_037")
    );
}

#[test]
fn missing_migration_file_is_data_unavailable() {
    let dir = TempDir::new().unwrap();
    let (county_list, _) = write_fixture(&dir, COUNTY_LIST, MIGRATION_DATA);

    let result = JsonDatasetSource::new(county_list, dir.path().join("absent.json")).load();

    assert!(matches!(result, Err(CountyflowError::DataUnavailable(_))));
}

#[test]
fn worker_reports_success_and_failure() {
    let dir = TempDir::new().unwrap();
    let (county_list, migration_data) = write_fixture(&dir, COUNTY_LIST, "{ not json");
    let mut worker = CountyflowWorker::default();

    let failed = worker.handle_message(WorkerMessage::load_datasets(
        county_list.display().to_string(),
        migration_data.display().to_string(),
        dir.path().display().to_string(),
        None,
    ));
    assert!(matches!(failed, WorkerResponse::LoadFailed { .. }));

    fs::write(&migration_data, MIGRATION_DATA).unwrap();
    let loaded = worker.handle_message(WorkerMessage::load_datasets(
        county_list.display().to_string(),
        migration_data.display().to_string(),
        dir.path().display().to_string(),
        None,
    ));
    match loaded {
        WorkerResponse::DatasetsLoaded { counties, records } => {
            assert_eq!(counties.len(), 2);
            assert_eq!(records.len(), 2);
        }
        WorkerResponse::LoadFailed { message } => panic!("unexpected failure: {message}"),
    }
}
