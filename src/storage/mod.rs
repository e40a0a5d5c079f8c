//! Dataset loading layer.
//!
//! Decodes the county list and migration documents into domain types and
//! assembles the read-only [`Dataset`] the engine navigates.
//!
//! # Modules
//!
//! - `backend`: [`DatasetSource`] trait
//! - `json`: JSON file implementation
//! - `models`: wire types of the two documents
//! - `dataset`: the assembled, order-preserving dataset

pub mod backend;
pub mod dataset;
pub mod json;
pub mod models;

pub use backend::DatasetSource;
pub use dataset::Dataset;
pub use json::{parse_county_list, parse_migration_data, JsonDatasetSource};
pub use models::{CountyListEntry, MigrationDocument, MigrationEntry};
