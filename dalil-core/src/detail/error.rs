//! Detail view errors

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DetailError {
    /// The key is not an action this record's view offers
    #[error("Unknown action '{action_key}' for record {record_id} (available: {available})")]
    InvalidActionKey {
        action_key: String,
        record_id: u64,
        available: String,
    },
}
