//! Citation parsing for Consolidated Acts index entries.
//!
//! The text fragment next to an act name carries its legal citation, e.g.
//! `R.S.C., 1985, c. C-46` or `S.C. 1979, c. 7`. The two layouts differ in
//! where commas fall: the revised-statutes form puts a comma directly after
//! the series abbreviation, the annual-statutes form does not. Parsing never
//! fails; a fragment with no four-digit year yields an all-empty citation.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::Citation;

/// Matches a four-digit year run.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static YEAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{4}").expect("valid regex"));

/// Matches a known citation series abbreviation.
///
/// `R.S.C.` must come first in the alternation so the leading `R.` is not
/// swallowed by a bare `S.C.` match.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SERIES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"R\.S\.C\.|S\.C\.").expect("valid regex"));

/// Parse a citation fragment into its category/year/code triple.
///
/// Fragments without a four-digit run are not citable and yield the
/// all-empty citation.
///
/// # Examples
/// ```
/// use cap_harvester::citation::parse_citation;
///
/// let citation = parse_citation("\nR.S.C., 1985, c. C-46");
/// assert_eq!(citation.category, "R.S.C.");
/// assert_eq!(citation.year, "1985");
/// assert_eq!(citation.code, "c. C-46");
/// ```
#[must_use]
pub fn parse_citation(fragment: &str) -> Citation {
    if !YEAR_RE.is_match(fragment) {
        return Citation::empty();
    }

    if fragment.split(',').count() < 3 {
        parse_single_comma(fragment)
    } else {
        parse_double_comma(fragment)
    }
}

/// The citation proper sits on its own line after the act's short title.
/// Returns the first non-empty line following a line break, or the whole
/// fragment when it has no line break.
fn citation_line(fragment: &str) -> &str {
    let mut lines = fragment.split('\n');
    lines.next();
    for line in lines {
        if !line.trim().is_empty() {
            return line.trim();
        }
    }
    fragment.trim()
}

/// Single-comma form, e.g. `S.C. 1979, c. 7`.
fn parse_single_comma(fragment: &str) -> Citation {
    let content = citation_line(fragment);

    Citation {
        category: find_series(content),
        year: find_year(content),
        code: content
            .split(',')
            .nth(1)
            .map(str::trim)
            .unwrap_or_default()
            .to_string(),
    }
}

/// Double-comma form, e.g. `R.S.C., 1979, c. 7`.
///
/// Known-approximate rule for irregular double citations: when the first
/// comma segment already contains the year (e.g. `S.C. 1979, c. 7, S.C.
/// 1979`), the chapter code spans segments two and three instead of sitting
/// in segment three alone.
fn parse_double_comma(fragment: &str) -> Citation {
    let content = citation_line(fragment);
    let segments: Vec<&str> = content.split(',').collect();

    let code = if segments.first().is_some_and(|s| YEAR_RE.is_match(s)) {
        match (segments.get(1), segments.get(2)) {
            (Some(second), Some(third)) => format!("{second},{third}").trim().to_string(),
            (Some(second), None) => second.trim().to_string(),
            _ => String::new(),
        }
    } else {
        segments
            .get(2)
            .map(|s| s.trim().to_string())
            .unwrap_or_default()
    };

    Citation {
        category: find_series(content),
        year: find_year(content),
        code,
    }
}

/// First four-digit run in the text, or empty.
fn find_year(content: &str) -> String {
    YEAR_RE
        .find(content)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// First known series abbreviation in the text, or empty.
fn find_series(content: &str) -> String {
    SERIES_RE
        .find(content)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}
