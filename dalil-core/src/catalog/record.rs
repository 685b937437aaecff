//! Catalog record types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Status keys a procedure may carry
pub const PROCEDURE_STATUSES: &[&str] = &["active", "suspended", "modified"];

/// Status keys a legal text may carry
pub const LEGAL_TEXT_STATUSES: &[&str] = &["En vigueur", "Abrogé", "Suspendu"];

/// Which domain a record belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    /// An administrative procedure
    #[default]
    Procedure,
    /// A legal text published in the Journal Officiel
    LegalText,
}

impl RecordKind {
    /// The fixed status vocabulary for this kind
    pub fn statuses(self) -> &'static [&'static str] {
        match self {
            RecordKind::Procedure => PROCEDURE_STATUSES,
            RecordKind::LegalText => LEGAL_TEXT_STATUSES,
        }
    }

    /// Path segment used when building share links
    pub fn path_segment(self) -> &'static str {
        match self {
            RecordKind::Procedure => "procedure",
            RecordKind::LegalText => "legal-text",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RecordKind::Procedure => "procedure",
            RecordKind::LegalText => "legal_text",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How far a procedure is available online
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Digitization {
    Yes,
    Partially,
    No,
}

impl Digitization {
    /// Stable key, as used by the digitization facet
    pub fn as_str(self) -> &'static str {
        match self {
            Digitization::Yes => "yes",
            Digitization::Partially => "partially",
            Digitization::No => "no",
        }
    }

    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            Digitization::Yes => "Oui",
            Digitization::Partially => "Partiellement",
            Digitization::No => "Non",
        }
    }
}

impl fmt::Display for Digitization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Digitization {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yes" => Ok(Digitization::Yes),
            "partially" => Ok(Digitization::Partially),
            "no" => Ok(Digitization::No),
            other => Err(format!(
                "Unknown digitization level '{other}' (expected yes, partially or no)"
            )),
        }
    }
}

/// One procedure or legal text
///
/// Records are plain values; the [`Catalog`](super::Catalog) that owns them
/// only hands out shared references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogRecord {
    /// Unique, stable identifier
    pub id: u64,

    /// Procedure or legal text
    #[serde(default)]
    pub kind: RecordKind,

    pub title: String,

    pub description: String,

    /// Open-ended category label ("État Civil", "Urbanisme", ...)
    pub category: String,

    /// Type key matched by the type facet ("civil", "commercial", ...)
    #[serde(rename = "type")]
    pub record_type: String,

    /// Status key, drawn from the kind's vocabulary
    pub status: String,

    pub digitization: Digitization,

    /// Estimated processing time ("7-14 jours")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complexity: Option<String>,

    /// Issuing authority (legal texts)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authority: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish_date: Option<String>,

    /// Institution handling the procedure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,

    /// Journal Officiel issue reference (legal texts)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jo_number: Option<String>,

    /// Popularity score, 0-100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popularity: Option<u32>,
}

impl CatalogRecord {
    /// Create a record with every optional field unset
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: u64,
        kind: RecordKind,
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        record_type: impl Into<String>,
        status: impl Into<String>,
        digitization: Digitization,
    ) -> Self {
        Self {
            id,
            kind,
            title: title.into(),
            description: description.into(),
            category: category.into(),
            record_type: record_type.into(),
            status: status.into(),
            digitization,
            duration: None,
            cost: None,
            complexity: None,
            authority: None,
            publish_date: None,
            institution: None,
            jo_number: None,
            popularity: None,
        }
    }

    /// Whether `needle` occurs in title, description or category
    ///
    /// Both sides are lowercased. An empty needle matches every record.
    pub fn matches_text(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        let needle = needle.to_lowercase();

        self.title.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
            || self.category.to_lowercase().contains(&needle)
    }

    /// Whether the status belongs to this record's vocabulary
    pub fn has_valid_status(&self) -> bool {
        self.kind.statuses().contains(&self.status.as_str())
    }
}
