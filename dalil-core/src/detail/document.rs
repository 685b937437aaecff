//! Detail document types
//!
//! A [`DetailDocument`] is a render-ready tree; the renderer decides what a
//! section or a step looks like.

use serde::Serialize;

use super::ActionKey;
use crate::catalog::RecordKind;

/// Full read-only view of one record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailDocument {
    pub record_id: u64,
    pub kind: RecordKind,
    pub title: String,
    /// Side panels: general information, where to apply, required documents
    pub metadata: Vec<MetadataSection>,
    pub body: DetailBody,
    /// Triggerable actions, in display order
    pub actions: Vec<ActionDescriptor>,
}

impl DetailDocument {
    /// Look up a metadata field by label across all sections
    pub fn field(&self, label: &str) -> Option<&str> {
        self.metadata
            .iter()
            .flat_map(|section| section.entries.iter())
            .find_map(|entry| match entry {
                MetadataEntry::Field(field) if field.label == label => Some(field.value.as_str()),
                _ => None,
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetadataSection {
    pub heading: String,
    pub entries: Vec<MetadataEntry>,
}

/// A labelled value or a bare list item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MetadataEntry {
    Field(Field),
    Item { text: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub label: String,
    pub value: String,
}

/// Main content block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DetailBody {
    /// Description followed by numbered steps
    Procedure {
        heading: String,
        description: String,
        steps_heading: String,
        steps: Vec<Step>,
    },
    /// Chapters of numbered articles
    LegalText {
        heading: String,
        chapters: Vec<Chapter>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    pub number: u32,
    pub title: String,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chapter {
    pub title: String,
    pub articles: Vec<Article>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    /// "Article 1er", "Article 2", ...
    pub label: String,
    pub paragraphs: Vec<String>,
}

/// An action button: stable key plus display label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionDescriptor {
    pub key: ActionKey,
    pub label: String,
}
