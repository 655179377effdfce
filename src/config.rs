//! Configuration constants and validation functions for the harvester.

use crate::error::{HarvesterError, Result};

/// Base URL for the Justice Laws website hosting the Consolidated Acts.
pub const JUSTICE_BASE_URL: &str = "https://laws-lois.justice.gc.ca/";

/// Path under the base URL where the per-letter acts indexes live.
pub const ACTS_PATH: &str = "eng/acts/";

/// Base URL for the Criminal Notebook wiki hosting offence listings.
pub const NOTEBOOK_BASE_URL: &str = "http://criminalnotebook.ca/index.php/";

/// HTTP timeout in seconds.
///
/// Set to 50 seconds to accommodate the slower wiki pages.
pub const HTTP_TIMEOUT_SECS: u64 = 50;

/// Index letters under which the Consolidated Acts are published.
pub const INDEX_LETTERS: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Citation series abbreviations that identify an act's reference series.
///
/// `R.S.C.` is the Revised Statutes of Canada, `S.C.` the annual Statutes
/// of Canada.
pub const CITATION_SERIES: [&str; 2] = ["R.S.C.", "S.C."];

/// Title of the generated timeline document.
pub const TIMELINE_TITLE: &str = "Consolidated Acts of Parliament";

/// Month placeholder for timeline entries; the source data carries no finer
/// date granularity than the year.
pub const TIMELINE_MONTH: &str = "January";

/// Validate an acts index letter.
///
/// # Examples
/// ```
/// use cap_harvester::config::validate_index_letter;
///
/// assert!(validate_index_letter('A').is_ok());
/// assert!(validate_index_letter('z').is_err()); // Lowercase
/// assert!(validate_index_letter('4').is_err());
/// ```
pub fn validate_index_letter(letter: char) -> Result<()> {
    if letter.is_ascii_uppercase() {
        Ok(())
    } else {
        Err(HarvesterError::InvalidIndexLetter(letter.to_string()))
    }
}

/// Build the URL of the acts index page for a letter.
///
/// # Panics
/// Debug builds panic if the letter was not validated first.
pub fn acts_index_url(letter: char) -> String {
    debug_assert!(
        letter.is_ascii_uppercase(),
        "letter should be validated before calling acts_index_url"
    );
    format!("{JUSTICE_BASE_URL}{ACTS_PATH}{letter}.html")
}

/// Build the URL of a Criminal Notebook page from its path segment.
pub fn notebook_url(page: &str) -> String {
    format!("{NOTEBOOK_BASE_URL}{page}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_index_letter_valid() {
        for letter in INDEX_LETTERS {
            assert!(validate_index_letter(letter).is_ok());
        }
    }

    #[test]
    fn test_validate_index_letter_invalid() {
        assert!(validate_index_letter('a').is_err());
        assert!(validate_index_letter('é').is_err());
        assert!(validate_index_letter('0').is_err());
        assert!(validate_index_letter(' ').is_err());
    }

    #[test]
    fn test_acts_index_url() {
        assert_eq!(
            acts_index_url('A'),
            "https://laws-lois.justice.gc.ca/eng/acts/A.html"
        );
        assert_eq!(
            acts_index_url('Z'),
            "https://laws-lois.justice.gc.ca/eng/acts/Z.html"
        );
    }

    #[test]
    fn test_notebook_url() {
        assert_eq!(
            notebook_url("List_of_Hybrid_Offences"),
            "http://criminalnotebook.ca/index.php/List_of_Hybrid_Offences"
        );
    }

    #[test]
    fn test_index_letters_complete() {
        assert_eq!(INDEX_LETTERS.len(), 26);
        assert_eq!(INDEX_LETTERS[0], 'A');
        assert_eq!(INDEX_LETTERS[25], 'Z');
    }
}
