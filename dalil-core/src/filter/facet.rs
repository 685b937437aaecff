//! Facet vocabulary and selection state

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::catalog::CatalogRecord;

/// The option id that stands for "no constraint"
pub const ALL_SENTINEL: &str = "all";

/// One independently filterable dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facet {
    Type,
    Status,
    Digitization,
}

impl Facet {
    pub const ALL: [Facet; 3] = [Facet::Type, Facet::Status, Facet::Digitization];

    pub fn as_str(self) -> &'static str {
        match self {
            Facet::Type => "type",
            Facet::Status => "status",
            Facet::Digitization => "digitization",
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Facet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "type" => Ok(Facet::Type),
            "status" => Ok(Facet::Status),
            "digitization" => Ok(Facet::Digitization),
            other => Err(format!(
                "Unknown facet '{other}' (expected type, status or digitization)"
            )),
        }
    }
}

/// Map the "all" sentinel and the empty string to `None`
pub fn normalize_facet_value(value: Option<&str>) -> Option<String> {
    match value {
        None | Some("") | Some(ALL_SENTINEL) => None,
        Some(value) => Some(value.to_string()),
    }
}

/// A selectable facet option as offered to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FacetOption {
    /// Value passed to `set_facet`
    pub id: &'static str,
    pub label: &'static str,
}

impl FacetOption {
    const fn new(id: &'static str, label: &'static str) -> Self {
        Self { id, label }
    }
}

const TYPE_OPTIONS: &[FacetOption] = &[
    FacetOption::new(ALL_SENTINEL, "Tous"),
    FacetOption::new("civil", "État Civil"),
    FacetOption::new("commercial", "Commercial"),
    FacetOption::new("urbanisme", "Urbanisme"),
    FacetOption::new("fiscalite", "Fiscalité"),
];

const STATUS_OPTIONS: &[FacetOption] = &[
    FacetOption::new(ALL_SENTINEL, "Tous"),
    FacetOption::new("active", "Active"),
    FacetOption::new("suspended", "Suspendue"),
    FacetOption::new("modified", "Modifiée"),
];

const DIGITIZATION_OPTIONS: &[FacetOption] = &[
    FacetOption::new(ALL_SENTINEL, "Tous"),
    FacetOption::new("yes", "Oui"),
    FacetOption::new("no", "Non"),
    FacetOption::new("partially", "Partiellement"),
];

/// Options for a facet, sentinel first
pub fn facet_options(facet: Facet) -> &'static [FacetOption] {
    match facet {
        Facet::Type => TYPE_OPTIONS,
        Facet::Status => STATUS_OPTIONS,
        Facet::Digitization => DIGITIZATION_OPTIONS,
    }
}

/// Current filter state
///
/// `None` on a facet means unconstrained. Both search fields are
/// independent and combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FacetSelection {
    pub search_text: String,
    pub quick_search_text: String,
    #[serde(rename = "type")]
    pub record_type: Option<String>,
    pub status: Option<String>,
    pub digitization: Option<String>,
}

impl FacetSelection {
    /// Current value of one facet
    pub fn get(&self, facet: Facet) -> Option<&str> {
        match facet {
            Facet::Type => self.record_type.as_deref(),
            Facet::Status => self.status.as_deref(),
            Facet::Digitization => self.digitization.as_deref(),
        }
    }

    pub(crate) fn slot_mut(&mut self, facet: Facet) -> &mut Option<String> {
        match facet {
            Facet::Type => &mut self.record_type,
            Facet::Status => &mut self.status,
            Facet::Digitization => &mut self.digitization,
        }
    }

    /// True when no facet and no search text constrains the result
    pub fn is_unconstrained(&self) -> bool {
        self.search_text.is_empty()
            && self.quick_search_text.is_empty()
            && Facet::ALL.iter().all(|&facet| self.get(facet).is_none())
    }

    /// The conjunction of every active constraint
    pub fn matches(&self, record: &CatalogRecord) -> bool {
        record.matches_text(&self.search_text)
            && record.matches_text(&self.quick_search_text)
            && self
                .record_type
                .as_deref()
                .map_or(true, |wanted| record.record_type == wanted)
            && self
                .status
                .as_deref()
                .map_or(true, |wanted| record.status == wanted)
            && self
                .digitization
                .as_deref()
                .map_or(true, |wanted| record.digitization.as_str() == wanted)
    }
}

/// Payload of the filter dialog
///
/// Only present keys are applied; absent keys leave their facet as is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterUpdate {
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub record_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digitization: Option<String>,
}

impl FilterUpdate {
    /// Present entries as (facet, value) pairs
    pub fn entries(&self) -> impl Iterator<Item = (Facet, &str)> {
        [
            (Facet::Type, self.record_type.as_deref()),
            (Facet::Status, self.status.as_deref()),
            (Facet::Digitization, self.digitization.as_deref()),
        ]
        .into_iter()
        .filter_map(|(facet, value)| value.map(|value| (facet, value)))
    }
}
