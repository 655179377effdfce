//! Criminal Notebook offence table extraction and excerpt filtering.
//!
//! An offence listing page holds a series of wikitables, one per punishment
//! regime, each preceded by a `mw-headline` subheading. Tables are paired
//! with headings positionally; when the counts differ, pairing stops at the
//! shorter list and the extras are dropped. That truncation matches the
//! published data sets and is logged rather than treated as an error.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::types::{Offence, OffenceCategory, OffenceDetails};

#[allow(clippy::expect_used)] // Static selector that is guaranteed to be valid
static WIKITABLE_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table.wikitable").expect("valid selector"));

#[allow(clippy::expect_used)] // Static selector that is guaranteed to be valid
static HEADLINE_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".mw-headline").expect("valid selector"));

#[allow(clippy::expect_used)] // Static selector that is guaranteed to be valid
static ROW_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tr").expect("valid selector"));

#[allow(clippy::expect_used)] // Static selector that is guaranteed to be valid
static CELL_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td").expect("valid selector"));

#[allow(clippy::expect_used)] // Static selector that is guaranteed to be valid
static LINK_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a").expect("valid selector"));

#[allow(clippy::expect_used)] // Static selector that is guaranteed to be valid
static BLOCKQUOTE_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("blockquote").expect("valid selector"));

/// Extract offence records from every table on a listing page.
///
/// The category determines how many penalty columns are read per row and
/// which named fields they fill.
#[must_use]
pub fn parse_offence_tables(html: &str, category: OffenceCategory) -> Vec<Offence> {
    let doc = Html::parse_document(html);

    let headings: Vec<String> = doc
        .select(&HEADLINE_SEL)
        .map(|h| h.text().collect::<String>().trim().to_string())
        .collect();
    let tables: Vec<ElementRef<'_>> = doc.select(&WIKITABLE_SEL).collect();

    if tables.len() != headings.len() {
        tracing::warn!(
            tables = tables.len(),
            headings = headings.len(),
            "Table/heading count mismatch, extra entries dropped"
        );
    }

    let mut offences = Vec::new();
    for (table, heading) in tables.iter().zip(headings.iter()) {
        offences.extend(parse_table(*table, heading, category));
    }
    offences
}

/// Extract one offence record per data row of a table.
///
/// Rows without data cells (header rows) are skipped; rows with missing
/// penalty columns get empty field values.
#[must_use]
pub fn parse_table(
    table: ElementRef<'_>,
    heading: &str,
    category: OffenceCategory,
) -> Vec<Offence> {
    table
        .select(&ROW_SEL)
        .filter_map(|row| {
            let cells: Vec<ElementRef<'_>> = row.select(&CELL_SEL).collect();
            if cells.is_empty() {
                return None;
            }
            Some(parse_row(&cells, heading, category))
        })
        .collect()
}

/// Build an offence record from a row's cells.
fn parse_row(cells: &[ElementRef<'_>], heading: &str, category: OffenceCategory) -> Offence {
    let details = match category {
        OffenceCategory::Summary => OffenceDetails::Summary {
            maximum_fine: cell_text(cells.get(2)),
            minimums: cell_text(cells.get(3)),
            consecutive_time: cell_text(cells.get(4)),
        },
        OffenceCategory::Indictable => OffenceDetails::Indictable {
            minimums: cell_text(cells.get(2)),
            mandatory_consecutive_time: cell_text(cells.get(3)),
        },
        OffenceCategory::Hybrid => OffenceDetails::Hybrid {
            minimums: cell_text(cells.get(2)),
            summary_election_maximum: cell_text(cells.get(3)),
            consecutive_time: cell_text(cells.get(4)),
        },
        OffenceCategory::Unknown => OffenceDetails::Unknown {},
    };

    Offence {
        offence: fix_run_together(&cell_text(cells.first())),
        section: cell_text(cells.get(1)),
        url: cells.first().map(link_identifier).unwrap_or_default(),
        punishment: heading.to_string(),
        details,
    }
}

/// Cell text with embedded line breaks removed, trimmed. Empty for absent
/// cells.
fn cell_text(cell: Option<&ElementRef<'_>>) -> String {
    cell.map(|c| {
        c.text()
            .collect::<String>()
            .replace('\n', "")
            .trim()
            .to_string()
    })
    .unwrap_or_default()
}

/// Offence names transcluded from other pages run the name into a "From"
/// source note ("TheftFrom Criminal Code"); put a space back before it.
fn fix_run_together(text: &str) -> String {
    text.replace("From", " From")
}

/// Identifier of the last hyperlink in a cell: the target's final path
/// segment, with any fragment marker and its remainder stripped.
fn link_identifier(cell: &ElementRef<'_>) -> String {
    cell.select(&LINK_SEL)
        .filter_map(|a| a.value().attr("href"))
        .last()
        .and_then(|href| {
            href.split('/')
                .filter(|segment| !segment.is_empty())
                .next_back()
        })
        .and_then(|segment| segment.split('#').next())
        .unwrap_or_default()
        .to_string()
}

/// Test whether every required substring appears in the text once it is
/// stripped down to ASCII alphanumerics and spaces.
///
/// An empty requirement list is vacuously satisfied; this is deliberate and
/// used to build a catch-all excerpt set.
#[must_use]
pub fn matches_required_keywords(keywords: &[&str], text: &str) -> bool {
    let normalized: String = text
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .collect();
    keywords.iter().all(|keyword| normalized.contains(keyword))
}

/// Collect the blockquote texts on a detail page that pass the keyword
/// filter.
#[must_use]
pub fn matching_excerpts(html: &str, keywords: &[&str]) -> Vec<String> {
    let doc = Html::parse_document(html);
    doc.select(&BLOCKQUOTE_SEL)
        .map(|b| b.text().collect::<String>())
        .filter(|text| matches_required_keywords(keywords, text))
        .collect()
}

/// Group offence records by their punishment heading, preserving first-seen
/// heading order and record order within each group.
#[must_use]
pub fn group_by_punishment(offences: &[Offence]) -> Vec<(String, Vec<Offence>)> {
    let mut groups: Vec<(String, Vec<Offence>)> = Vec::new();
    for offence in offences {
        match groups.iter_mut().find(|(p, _)| *p == offence.punishment) {
            Some((_, members)) => members.push(offence.clone()),
            None => groups.push((offence.punishment.clone(), vec![offence.clone()])),
        }
    }
    groups
}
