//! Core data types for the harvester.
//!
//! These types represent Canadian federal acts and criminal offence
//! classifications as harvested from the source pages. All records are
//! built in one pass over the source markup and are immutable afterwards.

use serde::{Deserialize, Serialize};

/// The category/year/code triple identifying an act's legal reference
/// series, e.g. `R.S.C., 1985, c. C-46`.
///
/// All fields default to the empty string when the source fragment is not
/// citable; an unparseable citation is not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    /// Citation series abbreviation (e.g. "R.S.C." or "S.C."), or empty.
    pub category: String,

    /// Four-digit year, or empty.
    pub year: String,

    /// Chapter/section designator (e.g. "c. C-46"), or empty.
    pub code: String,
}

impl Citation {
    /// Create a citation with all fields empty (the "not citable" value).
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// True if no field was parsed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.category.is_empty() && self.year.is_empty() && self.code.is_empty()
    }
}

/// A piece of enacted legislation with its citation metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Act {
    /// Act name as listed on the index page.
    pub name: String,

    /// Path segment identifying the act on the Justice Laws website.
    pub uri: String,

    /// Citation series abbreviation, or empty.
    pub category: String,

    /// Four-digit year of enactment, or empty.
    pub year: String,

    /// Chapter/section designator, or empty.
    pub code: String,

    /// True if the act has associated regulations.
    pub has_regulations: bool,

    /// True if the act has been repealed.
    pub repealed: bool,
}

impl Act {
    /// Create an act from its name, uri, citation, and flags.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        uri: impl Into<String>,
        citation: Citation,
        has_regulations: bool,
        repealed: bool,
    ) -> Self {
        Self {
            name: name.into(),
            uri: uri.into(),
            category: citation.category,
            year: citation.year,
            code: citation.code,
            has_regulations,
            repealed,
        }
    }
}

/// Classification of a criminal offence, selecting both the source listing
/// page and the shape of the per-row penalty fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OffenceCategory {
    /// Summary conviction offence.
    Summary,

    /// Straight indictable offence.
    Indictable,

    /// Hybrid offence (Crown elects summary or indictable).
    Hybrid,

    /// Category not recognized; rows carry no penalty tail fields.
    Unknown,
}

impl OffenceCategory {
    /// Get the string value for serialized output.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Summary => "summary",
            Self::Indictable => "indictable",
            Self::Hybrid => "hybrid",
            Self::Unknown => "unknown",
        }
    }

    /// Path segment of the Criminal Notebook listing page for this category.
    #[must_use]
    pub fn page_slug(&self) -> Option<&'static str> {
        match self {
            Self::Summary => Some("List_of_Summary_Conviction_Offences"),
            Self::Indictable => Some("List_of_Straight_Indictable_Offences"),
            Self::Hybrid => Some("List_of_Hybrid_Offences"),
            Self::Unknown => None,
        }
    }

    /// Substrings that must all appear in an excerpt for it to be kept.
    #[must_use]
    pub fn required_keywords(&self) -> &'static [&'static str] {
        match self {
            Self::Summary => &["summary conviction"],
            Self::Indictable => &["indictable offence"],
            Self::Hybrid => &["hybrid"],
            Self::Unknown => &[],
        }
    }

    /// The categories with a listing page, in crawl order.
    #[must_use]
    pub fn listed() -> [Self; 3] {
        [Self::Summary, Self::Indictable, Self::Hybrid]
    }
}

/// Category-dependent penalty fields of an offence record.
///
/// Serializes flattened behind the common prefix, so each category yields
/// exactly the key set listed in its variant and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OffenceDetails {
    /// Summary conviction penalties.
    Summary {
        maximum_fine: String,
        minimums: String,
        consecutive_time: String,
    },

    /// Straight indictable penalties.
    Indictable {
        minimums: String,
        mandatory_consecutive_time: String,
    },

    /// Hybrid offence penalties.
    Hybrid {
        minimums: String,
        summary_election_maximum: String,
        consecutive_time: String,
    },

    /// No penalty fields (unrecognized category).
    Unknown {},
}

/// A structured row describing a criminal offence's classification and
/// associated penalty fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offence {
    /// Whitespace-normalized offence name.
    pub offence: String,

    /// Criminal Code section, as listed in the table.
    pub section: String,

    /// Identifier derived from the last hyperlink in the offence cell.
    pub url: String,

    /// Heading label of the table this row was drawn from.
    pub punishment: String,

    /// Category-specific penalty fields.
    #[serde(flatten)]
    pub details: OffenceDetails,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_citation_empty() {
        let citation = Citation::empty();
        assert!(citation.is_empty());
        assert_eq!(citation.category, "");
        assert_eq!(citation.year, "");
        assert_eq!(citation.code, "");
    }

    #[test]
    fn test_act_new_spreads_citation() {
        let citation = Citation {
            category: "R.S.C.".to_string(),
            year: "1985".to_string(),
            code: "c. C-46".to_string(),
        };
        let act = Act::new("Criminal Code", "C-46/index.html", citation, true, false);

        assert_eq!(act.category, "R.S.C.");
        assert_eq!(act.year, "1985");
        assert_eq!(act.code, "c. C-46");
        assert!(act.has_regulations);
        assert!(!act.repealed);
    }

    #[test]
    fn test_offence_category_as_str() {
        assert_eq!(OffenceCategory::Summary.as_str(), "summary");
        assert_eq!(OffenceCategory::Indictable.as_str(), "indictable");
        assert_eq!(OffenceCategory::Hybrid.as_str(), "hybrid");
        assert_eq!(OffenceCategory::Unknown.as_str(), "unknown");
    }

    #[test]
    fn test_offence_category_page_slug() {
        assert_eq!(
            OffenceCategory::Summary.page_slug(),
            Some("List_of_Summary_Conviction_Offences")
        );
        assert_eq!(OffenceCategory::Unknown.page_slug(), None);
    }

    #[test]
    fn test_offence_category_keywords() {
        assert_eq!(
            OffenceCategory::Indictable.required_keywords(),
            &["indictable offence"]
        );
        assert!(OffenceCategory::Unknown.required_keywords().is_empty());
    }

    #[test]
    fn test_summary_offence_serializes_exact_keys() {
        let offence = Offence {
            offence: "Common Nuisance".to_string(),
            section: "180".to_string(),
            url: "Common_Nuisance".to_string(),
            punishment: "Offences".to_string(),
            details: OffenceDetails::Summary {
                maximum_fine: "$5,000".to_string(),
                minimums: "None".to_string(),
                consecutive_time: "None".to_string(),
            },
        };

        let value = serde_json::to_value(&offence).unwrap();
        let obj = value.as_object().unwrap();
        let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "consecutive_time",
                "maximum_fine",
                "minimums",
                "offence",
                "punishment",
                "section",
                "url",
            ]
        );
    }

    #[test]
    fn test_indictable_offence_serializes_exact_keys() {
        let offence = Offence {
            offence: "Treason".to_string(),
            section: "47".to_string(),
            url: "Treason".to_string(),
            punishment: "High Treason".to_string(),
            details: OffenceDetails::Indictable {
                minimums: "None".to_string(),
                mandatory_consecutive_time: "None".to_string(),
            },
        };

        let value = serde_json::to_value(&offence).unwrap();
        let obj = value.as_object().unwrap();
        let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "mandatory_consecutive_time",
                "minimums",
                "offence",
                "punishment",
                "section",
                "url",
            ]
        );
    }

    #[test]
    fn test_unknown_offence_serializes_prefix_only() {
        let offence = Offence {
            offence: "Mystery".to_string(),
            section: "0".to_string(),
            url: String::new(),
            punishment: String::new(),
            details: OffenceDetails::Unknown {},
        };

        let value = serde_json::to_value(&offence).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 4);
        assert!(obj.contains_key("offence"));
        assert!(obj.contains_key("section"));
        assert!(obj.contains_key("url"));
        assert!(obj.contains_key("punishment"));
    }

    #[test]
    fn test_offence_details_roundtrip() {
        let offence = Offence {
            offence: "Assault".to_string(),
            section: "266".to_string(),
            url: "Assault_(Offence)".to_string(),
            punishment: "Assaultive Offences".to_string(),
            details: OffenceDetails::Hybrid {
                minimums: "None".to_string(),
                summary_election_maximum: "18 months".to_string(),
                consecutive_time: "None".to_string(),
            },
        };

        let json = serde_json::to_string(&offence).unwrap();
        let back: Offence = serde_json::from_str(&json).unwrap();
        assert_eq!(back, offence);
    }

    #[test]
    fn test_act_serialization_field_names() {
        let act = Act::new(
            "Access to Information Act",
            "A-1/index.html",
            Citation {
                category: "R.S.C.".to_string(),
                year: "1985".to_string(),
                code: "c. A-1".to_string(),
            },
            true,
            false,
        );

        let value = serde_json::to_value(&act).unwrap();
        assert_eq!(value["name"], "Access to Information Act");
        assert_eq!(value["uri"], "A-1/index.html");
        assert_eq!(value["category"], "R.S.C.");
        assert_eq!(value["year"], "1985");
        assert_eq!(value["code"], "c. A-1");
        assert_eq!(value["has_regulations"], true);
        assert_eq!(value["repealed"], false);
    }
}
