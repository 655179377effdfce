//! Error types for the harvester.
//!
//! A single `HarvesterError` enum covers all failure modes. Parsing itself
//! never fails: unparseable citations yield empty fields and malformed table
//! rows yield empty values, so the variants here are all about I/O at the
//! boundaries (HTTP, filesystem, serialization).

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the harvester library.
#[derive(Debug, Error)]
pub enum HarvesterError {
    /// Invalid index letter.
    #[error("Invalid index letter: '{0}'. Expected a single letter A-Z")]
    InvalidIndexLetter(String),

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to download an acts index page.
    #[error("Failed to download acts index for letter {letter}: {source}")]
    ActsDownload {
        letter: char,
        #[source]
        source: reqwest::Error,
    },

    /// Failed to download an offence listing or detail page.
    #[error("Failed to download page {page}: {source}")]
    PageDownload {
        page: String,
        #[source]
        source: reqwest::Error,
    },

    /// All retry attempts exhausted.
    #[error("Download failed after {attempts} attempts: {message}")]
    RetriesExhausted { attempts: u32, message: String },

    /// Input file for the timeline aggregator is missing.
    #[error("Acts file not found: {0}")]
    ActsFileNotFound(PathBuf),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization or deserialization error.
    #[error("JSON serialization failed: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    /// YAML serialization error.
    #[error("YAML serialization failed: {0}")]
    YamlSerialization(#[from] serde_yaml_ng::Error),
}

/// Result type alias for harvester operations.
pub type Result<T> = std::result::Result<T, HarvesterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_letter_display() {
        let err = HarvesterError::InvalidIndexLetter("42".to_string());
        assert!(err.to_string().contains("42"));
        assert!(err.to_string().contains("A-Z"));
    }

    #[test]
    fn test_retries_exhausted_display() {
        let err = HarvesterError::RetriesExhausted {
            attempts: 3,
            message: "Server error: 503".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Download failed after 3 attempts: Server error: 503"
        );
    }

    #[test]
    fn test_acts_file_not_found_display() {
        let err = HarvesterError::ActsFileNotFound(PathBuf::from("JSONs/all_parliament_acts.json"));
        assert!(err.to_string().contains("all_parliament_acts.json"));
    }
}
