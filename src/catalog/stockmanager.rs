//! Operator-facing façade: stock management.

use crate::catalog::error::CatalogError;
use crate::catalog::record::{Book, Isbn, StockRecord};
use crate::catalog::store::Catalog;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Thin, stateless wrapper over a shared [`Catalog`] exposing the
/// operator-facing contract.
#[derive(Clone)]
pub struct StockManager {
    catalog: Arc<Catalog>,
}

impl StockManager {
    /// Wrap a shared catalog.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        StockManager { catalog }
    }

    /// Install a batch of new titles with their initial stock.
    pub fn add_books(&self, books: Vec<(Book, u32)>) -> Result<(), CatalogError> {
        self.catalog.insert(books)
    }

    /// Increment `num_copies` for each entry in `deltas`.
    pub fn add_copies(&self, deltas: BTreeMap<Isbn, u32>) -> Result<(), CatalogError> {
        self.catalog.add_copies(deltas)
    }

    /// Full stock snapshot.
    pub fn get_books(&self) -> Vec<StockRecord> {
        self.catalog.list_all()
    }

    /// Snapshot of the requested ISBNs.
    pub fn get_books_by_isbn(&self, isbns: &[Isbn]) -> Result<Vec<StockRecord>, CatalogError> {
        self.catalog.list_by_isbn(isbns)
    }

    /// Set the editor-pick flag for each entry in `picks`.
    pub fn update_editor_picks(&self, picks: BTreeMap<Isbn, bool>) -> Result<(), CatalogError> {
        self.catalog.set_editor_picks(picks)
    }

    /// Remove every listed ISBN, or none if any is absent.
    pub fn remove_books(&self, isbns: Vec<Isbn>) -> Result<(), CatalogError> {
        self.catalog.remove(isbns)
    }

    /// Drop every record in the catalog.
    pub fn remove_all_books(&self) {
        self.catalog.remove_all()
    }

    /// Every record that has ever recorded a sale miss.
    pub fn get_books_in_demand(&self) -> Vec<StockRecord> {
        self.catalog.books_in_demand()
    }
}
