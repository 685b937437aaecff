//! Validated, ordered record storage

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

use super::{sample, CatalogError, CatalogRecord};

/// On-disk catalog document (`catalog.yaml` / `catalog.json`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    /// Records in display order
    #[serde(default)]
    pub records: Vec<CatalogRecord>,
}

/// The canonical record list
///
/// Insertion order is the "original catalog order" that unsorted views
/// preserve. Ids are unique and every status belongs to its record's
/// vocabulary; both are checked once, at construction.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<CatalogRecord>,
    positions: HashMap<u64, usize>,
}

impl Catalog {
    /// Build a catalog, validating ids and statuses
    pub fn new(records: Vec<CatalogRecord>) -> Result<Self, CatalogError> {
        let mut positions = HashMap::with_capacity(records.len());

        for (position, record) in records.iter().enumerate() {
            if let Some(&first) = positions.get(&record.id) {
                let first: &CatalogRecord = &records[first];
                return Err(CatalogError::DuplicateId {
                    id: record.id,
                    first_title: first.title.clone(),
                    second_title: record.title.clone(),
                });
            }

            if !record.has_valid_status() {
                return Err(CatalogError::InvalidStatus {
                    id: record.id,
                    status: record.status.clone(),
                    expected: record.kind.statuses().join(", "),
                });
            }

            positions.insert(record.id, position);
        }

        debug!(records = records.len(), "Catalog validated");
        Ok(Self { records, positions })
    }

    /// The built-in catalog of eight reference procedures (ids 1-8)
    pub fn sample_procedures() -> Self {
        let records = sample::procedure_records();
        let positions = records
            .iter()
            .enumerate()
            .map(|(position, record)| (record.id, position))
            .collect();
        Self { records, positions }
    }

    /// Parse a catalog from a YAML document
    pub fn from_yaml(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_yaml_ng::from_str(content)
            .map_err(|source| CatalogError::ParseYaml { source })?;
        Self::new(file.records)
    }

    /// Parse a catalog from a JSON document
    pub fn from_json(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile =
            serde_json::from_str(content).map_err(|source| CatalogError::ParseJson { source })?;
        Self::new(file.records)
    }

    /// Load a catalog file
    ///
    /// `.json` files are parsed as JSON, anything else as YAML.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let catalog = if is_json {
            Self::from_json(&content)?
        } else {
            Self::from_yaml(&content)?
        };

        info!(
            path = %path.display(),
            records = catalog.len(),
            "Loaded catalog"
        );
        Ok(catalog)
    }

    /// All records in catalog order
    pub fn records(&self) -> &[CatalogRecord] {
        &self.records
    }

    /// Look up a record by id
    pub fn get(&self, id: u64) -> Option<&CatalogRecord> {
        self.positions.get(&id).map(|&position| &self.records[position])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
