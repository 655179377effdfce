//! Decade-bucketed timeline aggregation over harvested act records.
//!
//! A pure transform: the same input list always yields the same document,
//! so re-running aggregation is idempotent as long as the writer overwrites
//! rather than appends.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::{TIMELINE_MONTH, TIMELINE_TITLE};
use crate::types::Act;

/// A decade-labeled entry in the exported timeline document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Period {
    /// Decade label, e.g. "1980's".
    pub name: String,

    /// One single-entry mapping per act: "January <year>" to the act name.
    pub acts: Vec<BTreeMap<String, String>>,
}

/// The exportable timeline document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineDocument {
    pub title: String,
    pub show_today: bool,

    /// Periods in ascending decade order; each period's acts in ascending
    /// year order.
    pub periods: Vec<Period>,
}

/// Floor a year string to its decade, or 0 when missing or unparseable.
fn decade_of(year: &str) -> u32 {
    year.parse::<u32>().unwrap_or(0) / 10 * 10
}

/// Group acts into decade buckets.
///
/// Acts are first grouped by exact year value and the groups iterated in
/// ascending year order, so each bucket holds its acts ordered by year and,
/// within a year, by input order. Groups whose decade computes to zero
/// (missing or unparseable years) are excluded entirely.
#[must_use]
pub fn group_by_decade(acts: &[Act]) -> BTreeMap<u32, Vec<Act>> {
    // Years are four ASCII digits when non-empty, so lexicographic order
    // over the BTreeMap keys is ascending numeric order.
    let mut year_groups: BTreeMap<&str, Vec<&Act>> = BTreeMap::new();
    for act in acts {
        year_groups.entry(act.year.as_str()).or_default().push(act);
    }

    let mut buckets: BTreeMap<u32, Vec<Act>> = BTreeMap::new();
    for (year, group) in year_groups {
        let decade = decade_of(year);
        if decade == 0 {
            continue;
        }
        buckets
            .entry(decade)
            .or_default()
            .extend(group.into_iter().cloned());
    }

    buckets
}

/// Project a flat act list into the exportable timeline document.
#[must_use]
pub fn build_timeline(acts: &[Act]) -> TimelineDocument {
    let periods = group_by_decade(acts)
        .into_iter()
        .map(|(decade, bucket)| Period {
            name: format!("{decade}'s"),
            acts: bucket
                .iter()
                .map(|act| {
                    let mut entry = BTreeMap::new();
                    entry.insert(format!("{TIMELINE_MONTH} {}", act.year), act.name.clone());
                    entry
                })
                .collect(),
        })
        .collect();

    TimelineDocument {
        title: TIMELINE_TITLE.to_string(),
        show_today: true,
        periods,
    }
}
