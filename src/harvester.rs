//! Main harvester service that ties all components together.

use std::collections::HashSet;

use reqwest::blocking::Client;

use crate::acts::parse_acts_index;
use crate::config::{acts_index_url, notebook_url, validate_index_letter};
use crate::error::{HarvesterError, Result};
use crate::http::download_string;
use crate::offences::{matching_excerpts, parse_offence_tables};
use crate::types::{Act, Offence, OffenceCategory};

/// Download and parse one letter's acts index page.
///
/// # Arguments
/// * `client` - HTTP client to use
/// * `letter` - Index letter (A-Z)
pub fn harvest_acts_letter(client: &Client, letter: char) -> Result<Vec<Act>> {
    validate_index_letter(letter)?;

    let url = acts_index_url(letter);
    let html = download_string(client, &url).map_err(|e| {
        if let HarvesterError::Http(source) = e {
            HarvesterError::ActsDownload { letter, source }
        } else {
            e
        }
    })?;

    Ok(parse_acts_index(&html))
}

/// Download and parse a category's offence listing page.
///
/// Categories without a listing page (`Unknown`) yield an empty list.
pub fn harvest_offences(client: &Client, category: OffenceCategory) -> Result<Vec<Offence>> {
    let Some(slug) = category.page_slug() else {
        tracing::warn!(category = category.as_str(), "Category has no listing page");
        return Ok(Vec::new());
    };

    let url = notebook_url(slug);
    let html = download_string(client, &url).map_err(|e| {
        if let HarvesterError::Http(source) = e {
            HarvesterError::PageDownload {
                page: slug.to_string(),
                source,
            }
        } else {
            e
        }
    })?;

    Ok(parse_offence_tables(&html, category))
}

/// Fetch each offence's detail page and collect the excerpts matching the
/// category's required keywords.
///
/// Duplicate urls are fetched once, in first-seen order. A failed page is
/// logged and skipped.
///
/// # Returns
/// Pairs of (page identifier, matching excerpt texts)
pub fn harvest_excerpts(
    client: &Client,
    category: OffenceCategory,
    offences: &[Offence],
) -> Vec<(String, Vec<String>)> {
    let keywords = category.required_keywords();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut excerpts = Vec::new();

    for offence in offences {
        if offence.url.is_empty() || !seen.insert(offence.url.as_str()) {
            continue;
        }

        let url = notebook_url(&offence.url);
        match download_string(client, &url) {
            Ok(html) => {
                let texts = matching_excerpts(&html, keywords);
                tracing::debug!(page = %offence.url, matches = texts.len(), "Filtered excerpts");
                excerpts.push((offence.url.clone(), texts));
            }
            Err(e) => {
                tracing::error!(page = %offence.url, error = %e, "Failed to fetch detail page, skipping");
            }
        }
    }

    excerpts
}
