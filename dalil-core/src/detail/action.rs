//! Action keys and the events they resolve to

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::catalog::RecordKind;

/// Stable identifier of a user-triggerable action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKey {
    Download,
    Share,
    Print,
    Favorite,
    /// Find the service office handling a procedure
    Locate,
    /// Estimate the fees of a procedure
    EstimateCost,
}

impl ActionKey {
    pub fn as_str(self) -> &'static str {
        match self {
            ActionKey::Download => "download",
            ActionKey::Share => "share",
            ActionKey::Print => "print",
            ActionKey::Favorite => "favorite",
            ActionKey::Locate => "locate",
            ActionKey::EstimateCost => "estimate_cost",
        }
    }

    /// Actions offered for a record kind, in display order
    pub fn for_kind(kind: RecordKind) -> &'static [ActionKey] {
        match kind {
            RecordKind::Procedure => &[
                ActionKey::Download,
                ActionKey::Locate,
                ActionKey::EstimateCost,
                ActionKey::Favorite,
            ],
            RecordKind::LegalText => &[
                ActionKey::Download,
                ActionKey::Share,
                ActionKey::Favorite,
                ActionKey::Print,
            ],
        }
    }

    /// Button label for a record kind
    pub fn label(self, kind: RecordKind) -> &'static str {
        match (self, kind) {
            (ActionKey::Download, RecordKind::Procedure) => "Télécharger Formulaire",
            (ActionKey::Download, RecordKind::LegalText) => "Télécharger PDF",
            (ActionKey::Share, _) => "Partager",
            (ActionKey::Print, _) => "Imprimer",
            (ActionKey::Favorite, _) => "Ajouter aux favoris",
            (ActionKey::Locate, _) => "Localiser Service",
            (ActionKey::EstimateCost, _) => "Calculer Coûts",
        }
    }
}

impl fmt::Display for ActionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionKey {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "download" => Ok(ActionKey::Download),
            "share" => Ok(ActionKey::Share),
            "print" => Ok(ActionKey::Print),
            "favorite" => Ok(ActionKey::Favorite),
            "locate" => Ok(ActionKey::Locate),
            "estimate_cost" => Ok(ActionKey::EstimateCost),
            _ => Err(()),
        }
    }
}

/// Action-specific details the host needs to carry the action out
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActionPayload {
    Download { format: String },
    Share { url: String },
    None,
}

/// A resolved action, ready for the host to dispatch
///
/// Nothing has been downloaded, shared or printed when this is returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionEvent {
    pub action_key: ActionKey,
    pub record_id: u64,
    pub record_title: String,
    pub timestamp: DateTime<Utc>,
    pub payload: ActionPayload,
}
