//! Customer-facing façade: browsing, purchasing, rating.

use crate::catalog::engine::BookProjection;
use crate::catalog::error::CatalogError;
use crate::catalog::record::{Isbn, StockRecord};
use crate::catalog::store::Catalog;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Thin, stateless wrapper over a shared [`Catalog`] exposing the
/// customer-facing contract. Cloning a `BookStore` clones the `Arc`, not
/// the catalog.
#[derive(Clone)]
pub struct BookStore {
    catalog: Arc<Catalog>,
}

impl BookStore {
    /// Wrap a shared catalog.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        BookStore { catalog }
    }

    /// All-or-nothing purchase of `order`, an ISBN-keyed set of requested
    /// quantities.
    pub fn buy_books(&self, order: BTreeMap<Isbn, u32>) -> Result<(), CatalogError> {
        self.catalog.buy_books(order)
    }

    /// Reduced projection of the requested ISBNs.
    pub fn get_books(&self, isbns: &[Isbn]) -> Result<Vec<BookProjection>, CatalogError> {
        self.catalog.get_books_projection(isbns)
    }

    /// Up to `k` editor-picked books, sampled without ordering guarantees.
    pub fn get_editor_picks(&self, k: i64) -> Result<Vec<StockRecord>, CatalogError> {
        self.catalog.editor_picks(k)
    }

    /// The `k` highest-rated books.
    pub fn get_top_rated_books(&self, k: i64) -> Result<Vec<StockRecord>, CatalogError> {
        self.catalog.top_rated(k)
    }

    /// Record one rating per entry in `ratings`.
    pub fn rate_books(&self, ratings: BTreeMap<Isbn, u32>) -> Result<(), CatalogError> {
        self.catalog.rate(ratings)
    }
}
