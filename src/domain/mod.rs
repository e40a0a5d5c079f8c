//! Domain layer for countyflow.
//!
//! Core county types, the slug codec, and the crate error type. Nothing in
//! here depends on Zellij APIs.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`county`]: County identities, records and migration flows
//! - [`slug`]: Name → fragment slug projection
//!
//! # Examples
//!
//! ```
//! use countyflow::domain::{slug::to_slug, CountySummaryEntry};
//!
//! let entry = CountySummaryEntry::new("17_031", "Cook County, IL");
//! assert_eq!(to_slug(&entry.name), "cook-county-il");
//! ```

pub mod county;
pub mod error;
pub mod slug;

pub use county::{CountyIdentity, CountyRecord, CountySummaryEntry, FlowRecord, MigrationSummary};
pub use error::{CountyflowError, Result};
