//! Dataset source abstraction.
//!
//! [`DatasetSource`] is the seam between the engine and wherever the two
//! source documents come from. The worker only talks to this trait, so tests
//! and alternative hosts can feed datasets without touching the filesystem.

use crate::domain::error::Result;
use crate::domain::{CountyRecord, CountySummaryEntry};
use crate::storage::Dataset;

/// A provider of the county list and the migration records.
///
/// # Implementations
///
/// - [`crate::storage::JsonDatasetSource`]: reads both JSON documents from disk
///
/// # Examples
///
/// ```no_run
/// use countyflow::storage::{DatasetSource, JsonDatasetSource};
///
/// let source = JsonDatasetSource::new("/data/county_list.json", "/data/migration_data.json");
/// let dataset = source.load()?;
/// println!("{} counties", dataset.counties().len());
/// # Ok::<(), countyflow::CountyflowError>(())
/// ```
pub trait DatasetSource: Send {
    /// Loads the searchable county list in list order.
    ///
    /// # Errors
    ///
    /// Returns an error if the list cannot be read or decoded.
    fn load_county_list(&self) -> Result<Vec<CountySummaryEntry>>;

    /// Loads every migration record in source document order.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be read or decoded.
    fn load_migration_records(&self) -> Result<Vec<CountyRecord>>;

    /// Loads both collections and assembles a [`Dataset`].
    ///
    /// # Errors
    ///
    /// Returns the first error of either load.
    fn load(&self) -> Result<Dataset> {
        let counties = self.load_county_list()?;
        let records = self.load_migration_records()?;
        Ok(Dataset::new(counties, records))
    }
}
