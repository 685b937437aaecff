//! Dalil core library exports
//!
//! Two cooperating components over an in-memory catalog:
//! - [`filter::FilterEngine`] reconciles search text and facet selections
//!   into the ordered set of visible records.
//! - [`detail::DetailSynthesizer`] turns one record into a render-ready
//!   [`detail::DetailDocument`] and resolves user actions into
//!   [`detail::ActionEvent`] values for the host application to dispatch.

pub mod catalog;
pub mod config;
pub mod detail;
pub mod filter;

pub use catalog::{Catalog, CatalogError, CatalogRecord, Digitization, RecordKind};
pub use config::{ConfigError, DalilConfig};
pub use detail::{ActionEvent, ActionKey, DetailDocument, DetailError, DetailSynthesizer};
pub use filter::{Facet, FacetSelection, FilterEngine, FilterUpdate, SortSpec};
