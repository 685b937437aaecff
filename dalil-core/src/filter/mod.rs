//! Catalog Filter Engine
//!
//! Reconciles free-text search, quick search, and the three facets
//! (type, status, digitization) into one ordered result set.
//!
//! # Semantics
//!
//! A record is visible when it satisfies every constraint at once:
//!
//! ```text
//! search ∧ quick_search ∧ (type = ∅ ∨ type) ∧ (status = ∅ ∨ status) ∧ (digitization = ∅ ∨ digitization)
//! ```
//!
//! Search fields match case-insensitively against title, description and
//! category; an empty field matches everything. Text is not trimmed, so a
//! single space is a literal needle. A facet set to `"all"` or `""` is
//! unconstrained; unknown facet values simply match nothing.
//!
//! The visible set is computed lazily and cached; every setter drops the
//! cache, so reads always reflect the latest write.

mod facet;
mod sort;

pub use facet::{
    facet_options, normalize_facet_value, Facet, FacetOption, FacetSelection, FilterUpdate,
    ALL_SENTINEL,
};
pub use sort::{SortDirection, SortField, SortSpec};

use once_cell::unsync::OnceCell;
use tracing::{debug, trace};

use crate::catalog::{Catalog, CatalogRecord};

/// Owns the catalog plus the current filter and sort selections
#[derive(Debug)]
pub struct FilterEngine {
    catalog: Catalog,
    selection: FacetSelection,
    sort: Option<SortSpec>,
    /// Catalog positions of visible records, in display order
    visible: OnceCell<Vec<usize>>,
}

impl FilterEngine {
    /// Start a session with every facet unconstrained and no sort
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            selection: FacetSelection::default(),
            sort: None,
            visible: OnceCell::new(),
        }
    }

    /// Constrain one facet; `None` or `"all"` clears it
    pub fn set_facet(&mut self, facet: Facet, value: Option<&str>) {
        let value = normalize_facet_value(value);
        debug!(facet = %facet, value = ?value, "Facet changed");
        *self.selection.slot_mut(facet) = value;
        self.invalidate();
    }

    /// Set the main search field
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.selection.search_text = text.into();
        debug!(search = %self.selection.search_text, "Search text changed");
        self.invalidate();
    }

    /// Set the quick search field, ANDed with the main search
    pub fn set_quick_search_text(&mut self, text: impl Into<String>) {
        self.selection.quick_search_text = text.into();
        debug!(quick_search = %self.selection.quick_search_text, "Quick search changed");
        self.invalidate();
    }

    /// Apply the filter dialog's payload
    ///
    /// Keys absent from the update leave their facet untouched.
    pub fn apply_filter_update(&mut self, update: &FilterUpdate) {
        for (facet, value) in update.entries() {
            self.set_facet(facet, Some(value));
        }
    }

    /// Replace the active ordering; `None` restores catalog order
    pub fn apply_sort(&mut self, spec: Option<SortSpec>) {
        debug!(sort = ?spec.map(|s| s.to_string()), "Sort changed");
        self.sort = spec;
        self.invalidate();
    }

    /// Back to the session-start state
    pub fn reset(&mut self) {
        self.selection = FacetSelection::default();
        self.sort = None;
        self.invalidate();
    }

    /// Records satisfying every active constraint, in display order
    pub fn visible_records(&self) -> Vec<&CatalogRecord> {
        let records = self.catalog.records();
        self.visible_positions()
            .iter()
            .map(|&position| &records[position])
            .collect()
    }

    /// Number of visible records, without materializing them
    pub fn count(&self) -> usize {
        self.visible_positions().len()
    }

    pub fn selection(&self) -> &FacetSelection {
        &self.selection
    }

    pub fn sort(&self) -> Option<SortSpec> {
        self.sort
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn invalidate(&mut self) {
        self.visible = OnceCell::new();
    }

    fn visible_positions(&self) -> &[usize] {
        self.visible.get_or_init(|| self.recompute())
    }

    fn recompute(&self) -> Vec<usize> {
        let records = self.catalog.records();

        let mut positions: Vec<usize> = if self.selection.is_unconstrained() {
            (0..records.len()).collect()
        } else {
            records
                .iter()
                .enumerate()
                .filter(|(_, record)| self.selection.matches(record))
                .map(|(position, _)| position)
                .collect()
        };

        // Stable sort: ties keep catalog order
        if let Some(spec) = &self.sort {
            positions.sort_by(|&a, &b| spec.compare(&records[a], &records[b]));
        }

        trace!(
            visible = positions.len(),
            total = records.len(),
            "Recomputed visible set"
        );
        positions
    }
}
