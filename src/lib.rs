//! CAP Harvester - Harvest Canadian federal legislation listings.
//!
//! This crate extracts semi-structured records from two sources and
//! normalizes them into typed records: the Consolidated Acts of Parliament
//! indexes on the Justice Laws website, and the criminal offence
//! classification tables on the Criminal Notebook wiki. Harvested act
//! records can then be aggregated into a decade-bucketed timeline document.
//!
//! # Example
//!
//! ```
//! use cap_harvester::citation::parse_citation;
//!
//! let citation = parse_citation("\nR.S.C., 1985, c. C-46");
//! assert_eq!(citation.year, "1985");
//! ```
//!
//! # Architecture
//!
//! The harvester is organized into several modules:
//!
//! - [`config`]: Configuration constants and validation
//! - [`types`]: Core data types (Act, Citation, Offence, etc.)
//! - [`error`]: Error types and Result alias
//! - [`http`]: HTTP client for downloading source pages
//! - [`citation`]: Citation fragment parsing
//! - [`acts`]: Acts index page extraction
//! - [`offences`]: Offence table parsing and excerpt filtering
//! - [`timeline`]: Decade-bucketed timeline aggregation
//! - [`output`]: JSON/YAML persistence
//! - [`harvester`]: Main harvester service
//! - [`cli`]: Command-line interface

pub mod acts;
pub mod citation;
pub mod cli;
pub mod config;
pub mod error;
pub mod harvester;
pub mod http;
pub mod offences;
pub mod output;
pub mod timeline;
pub mod types;

// Re-export main functions
pub use harvester::{harvest_acts_letter, harvest_excerpts, harvest_offences};
pub use timeline::build_timeline;

// Re-export commonly used items
pub use citation::parse_citation;
pub use error::{HarvesterError, Result};
pub use types::{Act, Citation, Offence, OffenceCategory, OffenceDetails};
