//! Detail View Synthesizer - turns a [`CatalogRecord`] into a [`DetailDocument`].
//!
//! Documents are rebuilt on every open and hold no reference back to the
//! synthesizer. Actions are never executed here: [`DetailSynthesizer::invoke_action`]
//! returns an [`ActionEvent`] describing what the host should do.

mod action;
mod document;
mod error;
mod template;

pub use action::{ActionEvent, ActionKey, ActionPayload};
pub use document::{
    ActionDescriptor, Article, Chapter, DetailBody, DetailDocument, Field, MetadataEntry,
    MetadataSection, Step,
};
pub use error::DetailError;
pub use template::{DEFAULT_COST, DEFAULT_DURATION, NOT_PROVIDED};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::catalog::{CatalogRecord, RecordKind};

/// Settings that shape action payloads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailConfig {
    /// Origin used to build share links
    pub share_base_url: String,
    /// Format requested by download actions
    pub download_format: String,
}

impl Default for DetailConfig {
    fn default() -> Self {
        Self {
            share_base_url: "https://dalil.local".to_string(),
            download_format: "pdf".to_string(),
        }
    }
}

/// Builds detail documents and resolves actions
#[derive(Debug, Clone, Default)]
pub struct DetailSynthesizer {
    config: DetailConfig,
}

impl DetailSynthesizer {
    pub fn new(config: DetailConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DetailConfig {
        &self.config
    }

    /// Build the full view of a record
    ///
    /// Same record in, structurally identical document out. Missing
    /// duration and cost fall back to [`DEFAULT_DURATION`] and
    /// [`DEFAULT_COST`]; other missing fields show [`NOT_PROVIDED`].
    #[instrument(name = "open_detail", skip(self, record), fields(record_id = record.id, kind = %record.kind))]
    pub fn open_detail(&self, record: &CatalogRecord) -> DetailDocument {
        let (metadata, body) = match record.kind {
            RecordKind::Procedure => (procedure_metadata(record), procedure_body(record)),
            RecordKind::LegalText => (legal_text_metadata(record), legal_text_body(record)),
        };

        let actions = ActionKey::for_kind(record.kind)
            .iter()
            .map(|&key| ActionDescriptor {
                key,
                label: key.label(record.kind).to_string(),
            })
            .collect();

        debug!(sections = metadata.len(), "Detail document built");

        DetailDocument {
            record_id: record.id,
            kind: record.kind,
            title: record.title.clone(),
            metadata,
            body,
            actions,
        }
    }

    /// Resolve an action key into an event stamped with the current time
    pub fn invoke_action(
        &self,
        record: &CatalogRecord,
        action_key: &str,
    ) -> Result<ActionEvent, DetailError> {
        self.invoke_action_at(record, action_key, Utc::now())
    }

    /// Resolve an action key into an event stamped with `timestamp`
    ///
    /// Fails with [`DetailError::InvalidActionKey`] when the key is not one
    /// of the actions offered for the record's kind.
    #[instrument(name = "invoke_action", skip(self, record, timestamp), fields(record_id = record.id))]
    pub fn invoke_action_at(
        &self,
        record: &CatalogRecord,
        action_key: &str,
        timestamp: DateTime<Utc>,
    ) -> Result<ActionEvent, DetailError> {
        let offered = ActionKey::for_kind(record.kind);
        let key = action_key
            .parse::<ActionKey>()
            .ok()
            .filter(|key| offered.contains(key))
            .ok_or_else(|| DetailError::InvalidActionKey {
                action_key: action_key.to_string(),
                record_id: record.id,
                available: offered
                    .iter()
                    .map(|key| key.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            })?;

        let payload = match key {
            ActionKey::Download => ActionPayload::Download {
                format: self.config.download_format.clone(),
            },
            ActionKey::Share => ActionPayload::Share {
                url: self.share_url(record),
            },
            _ => ActionPayload::None,
        };

        info!(action = %key, title = %record.title, "Action invoked");

        Ok(ActionEvent {
            action_key: key,
            record_id: record.id,
            record_title: record.title.clone(),
            timestamp,
            payload,
        })
    }

    /// Public link to a record
    pub fn share_url(&self, record: &CatalogRecord) -> String {
        format!(
            "{}/{}/{}",
            self.config.share_base_url.trim_end_matches('/'),
            record.kind.path_segment(),
            record.id
        )
    }
}

fn field(label: &str, value: impl Into<String>) -> MetadataEntry {
    MetadataEntry::Field(Field {
        label: label.to_string(),
        value: value.into(),
    })
}

fn or_not_provided(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(NOT_PROVIDED)
}

fn procedure_metadata(record: &CatalogRecord) -> Vec<MetadataSection> {
    let general = MetadataSection {
        heading: "Informations Générales".to_string(),
        entries: vec![
            field("Type", record.record_type.as_str()),
            field(
                "Durée estimée",
                record.duration.as_deref().unwrap_or(DEFAULT_DURATION),
            ),
            field("Coût", record.cost.as_deref().unwrap_or(DEFAULT_COST)),
            field("Complexité", or_not_provided(&record.complexity)),
            field("Numérisée", record.digitization.label()),
        ],
    };

    let mut where_to_apply = vec![field("Institution", or_not_provided(&record.institution))];
    where_to_apply.extend(
        template::WHERE_TO_APPLY
            .iter()
            .map(|&(label, value)| field(label, value)),
    );

    let documents = template::REQUIRED_DOCUMENTS
        .iter()
        .map(|&text| MetadataEntry::Item {
            text: text.to_string(),
        })
        .collect();

    vec![
        general,
        MetadataSection {
            heading: "Où s'adresser".to_string(),
            entries: where_to_apply,
        },
        MetadataSection {
            heading: "Documents requis".to_string(),
            entries: documents,
        },
    ]
}

fn procedure_body(record: &CatalogRecord) -> DetailBody {
    DetailBody::Procedure {
        heading: "Description de la procédure".to_string(),
        description: record.description.clone(),
        steps_heading: "Étapes à suivre".to_string(),
        steps: template::procedure_steps(),
    }
}

fn legal_text_metadata(record: &CatalogRecord) -> Vec<MetadataSection> {
    vec![MetadataSection {
        heading: "Informations".to_string(),
        entries: vec![
            field("Type", record.record_type.as_str()),
            field("Statut", record.status.as_str()),
            field("Publié le", or_not_provided(&record.publish_date)),
            field("Catégorie", record.category.as_str()),
            field("Autorité", or_not_provided(&record.authority)),
            field("Journal Officiel", or_not_provided(&record.jo_number)),
        ],
    }]
}

fn legal_text_body(record: &CatalogRecord) -> DetailBody {
    DetailBody::LegalText {
        heading: "Contenu du texte".to_string(),
        chapters: template::legal_chapters(&record.description),
    }
}
