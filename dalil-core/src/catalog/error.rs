//! Catalog loading and validation errors

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building a [`Catalog`](super::Catalog)
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Two records share an id
    #[error("Duplicate record id {id}: '{first_title}' and '{second_title}'")]
    DuplicateId {
        id: u64,
        first_title: String,
        second_title: String,
    },

    /// A record's status is outside its kind's vocabulary
    #[error("Record {id} has status '{status}', expected one of: {expected}")]
    InvalidStatus {
        id: u64,
        status: String,
        expected: String,
    },

    /// The catalog file could not be read
    #[error("Failed to read catalog file: {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog document is not valid YAML for the record schema
    #[error("Failed to parse catalog YAML")]
    ParseYaml {
        #[source]
        source: serde_yaml_ng::Error,
    },

    /// The catalog document is not valid JSON for the record schema
    #[error("Failed to parse catalog JSON")]
    ParseJson {
        #[source]
        source: serde_json::Error,
    },
}
