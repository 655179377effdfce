//! Acts index page extraction.
//!
//! Each per-letter index page lists its acts in a zebra-striped list. An
//! entry carries the act name and link in its first child node, a marker
//! node whose text trims to `R` when the act has regulations, and a free
//! text citation fragment whose position depends on the entry layout.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::citation::parse_citation;
use crate::types::{Act, Citation};

/// Selector for the zebra-striped acts listing.
#[allow(clippy::expect_used)] // Static selector that is guaranteed to be valid
static ACTS_LIST_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".wet-boew-zebra").expect("valid selector"));

/// Selector for hyperlinks.
#[allow(clippy::expect_used)] // Static selector that is guaranteed to be valid
static LINK_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a").expect("valid selector"));

/// Child index of the has-regulations marker node.
const REGULATIONS_MARKER_INDEX: usize = 2;

/// Entries with fewer child nodes than this carry their citation fragment
/// at index 2, longer entries at index 4.
const LONG_ENTRY_CHILD_COUNT: usize = 5;

/// Extract all act records from an index page.
///
/// Entries that carry no hyperlink (spacer items, letter headers) are
/// skipped. Extraction never fails: entries with unparseable citations get
/// empty citation fields.
#[must_use]
pub fn parse_acts_index(html: &str) -> Vec<Act> {
    let doc = Html::parse_document(html);
    let mut acts = Vec::new();

    for list in doc.select(&ACTS_LIST_SEL) {
        for node in list.children() {
            let Some(entry) = ElementRef::wrap(node) else {
                continue; // inter-element whitespace
            };
            match parse_act_entry(entry) {
                Some(act) => acts.push(act),
                None => tracing::debug!("Skipping index entry without act link"),
            }
        }
    }

    acts
}

/// Extract a single act record from a listing entry.
///
/// Returns `None` when the entry has no hyperlink to an act.
pub fn parse_act_entry(entry: ElementRef<'_>) -> Option<Act> {
    let uri = entry
        .select(&LINK_SEL)
        .next()
        .and_then(|a| a.value().attr("href"))?
        .to_string();

    let children = child_contents(entry);
    let name = children
        .first()
        .map(|text| text.trim().to_string())
        .unwrap_or_default();

    let citation = parse_entry_citation(&children);
    let has_regulations = has_regulations(&children);
    let repealed = is_repealed(&name);

    Some(Act::new(name, uri, citation, has_regulations, repealed))
}

/// Parse the citation fragment from an entry's child node texts.
///
/// Short entries carry the fragment in the node that doubles as the
/// regulations marker position; long entries (five or more child nodes)
/// carry it two positions later.
fn parse_entry_citation(children: &[String]) -> Citation {
    let index = if children.len() < LONG_ENTRY_CHILD_COUNT {
        REGULATIONS_MARKER_INDEX
    } else {
        REGULATIONS_MARKER_INDEX + 2
    };

    children
        .get(index)
        .map(|fragment| parse_citation(fragment))
        .unwrap_or_else(Citation::empty)
}

/// An act has regulations iff the marker node's text trims to exactly "R".
fn has_regulations(children: &[String]) -> bool {
    children
        .get(REGULATIONS_MARKER_INDEX)
        .is_some_and(|text| text.trim() == "R")
}

/// An act is repealed iff its name contains the literal "Repealed".
fn is_repealed(name: &str) -> bool {
    name.contains("Repealed")
}

/// Collect the text of each direct child node in order: text nodes as-is,
/// element nodes as their concatenated descendant text. Positions mirror
/// the source markup, including whitespace-only text nodes.
fn child_contents(entry: ElementRef<'_>) -> Vec<String> {
    entry
        .children()
        .map(|node| {
            if let Some(text) = node.value().as_text() {
                text.to_string()
            } else if let Some(element) = ElementRef::wrap(node) {
                element.text().collect::<String>()
            } else {
                String::new()
            }
        })
        .collect()
}
