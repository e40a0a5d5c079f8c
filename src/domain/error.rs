//! Error types for the countyflow plugin.
//!
//! This module defines the centralized error type [`CountyflowError`] and a type alias
//! [`Result`] used throughout the crate. Only loader and configuration failures travel
//! as `Err` values; lookup failures inside the navigation engine are reported as
//! outcomes and never leave it as errors.

use thiserror::Error;

/// The main error type for countyflow operations.
///
/// # Examples
///
/// ```
/// use countyflow::domain::CountyflowError;
///
/// fn load() -> Result<(), CountyflowError> {
///     Err(CountyflowError::DataUnavailable("county_list.json missing".to_string()))
/// }
/// assert!(load().is_err());
/// ```
#[derive(Debug, Error)]
pub enum CountyflowError {
    /// One of the two source datasets could not be loaded.
    ///
    /// Fatal for the whole application: the navigation engine is never
    /// constructed and the load is not retried.
    #[error("Data unavailable: {0}")]
    DataUnavailable(String),

    /// A county identity or fragment did not match any loaded record.
    #[error("Unknown county: {0}")]
    UnknownIdentity(String),

    /// A dataset document was readable but malformed.
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Communication with the background worker failed.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for countyflow operations.
pub type Result<T> = std::result::Result<T, CountyflowError>;
