//! Dalil Catalog - procedure and legal text records
//!
//! This module owns the canonical record list the rest of the crate reads.
//!
//! # Overview
//!
//! - [`CatalogRecord`] is one procedure or legal text, immutable once loaded
//! - [`Catalog`] validates and holds the records in their original order
//! - Catalog files are YAML or JSON documents with a top-level `records` list
//!
//! ```text
//! catalog.yaml ──► Catalog::load ──► Catalog (validated, ordered)
//!                                        │
//!                                        ▼
//!                                   FilterEngine / DetailSynthesizer
//! ```

mod error;
mod record;
mod sample;
mod store;

pub use error::CatalogError;
pub use record::{
    CatalogRecord, Digitization, RecordKind, LEGAL_TEXT_STATUSES, PROCEDURE_STATUSES,
};
pub use store::{Catalog, CatalogFile};
