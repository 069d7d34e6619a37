//! The concurrency controller: two interchangeable locking disciplines
//! behind one operation set.
//!
//! `single_lock` implements variant S (one global `RwLock`). `two_level`
//! implements variant T (an intention lock plus per-record `RwLock`s,
//! acquired in ascending-ISBN order to stay deadlock-free). Both implement
//! [`CatalogEngine`] so [`crate::catalog::store::Catalog`] can dispatch to
//! whichever was selected at construction without runtime polymorphism on
//! the hot path.

pub mod single_lock;
pub mod two_level;

use crate::catalog::error::CatalogError;
use crate::catalog::record::{Book, Isbn, StockRecord};
use std::collections::BTreeMap;

/// A reduced, fixed projection of a stocked book: identity plus copies on
/// hand. This is the shape spec.md's `getBooksProjection` returns, distinct
/// from the full [`StockRecord`] that `listByISBN`/`listAll` return.
#[derive(Debug, Clone, PartialEq)]
pub struct BookProjection {
    /// Identity snapshot.
    pub book: Book,
    /// Copies currently in stock.
    pub num_copies: u32,
}

impl From<&StockRecord> for BookProjection {
    fn from(record: &StockRecord) -> Self {
        BookProjection {
            book: record.book.clone(),
            num_copies: record.num_copies,
        }
    }
}

/// The operation set shared by both concurrency disciplines. Every method
/// performs its own validation before any mutation (atomic validation),
/// and every set-valued argument is a `BTreeMap`/`&[Isbn]` rather than a
/// `Vec` of pairs so duplicate ISBNs in a single request collapse to one
/// entry, matching spec.md's "the input is a set keyed by ISBN."
pub trait CatalogEngine: Send + Sync {
    /// Install every book in `books` (each paired with its initial copy
    /// count), or none of them if any candidate fails validation or
    /// duplicates an existing ISBN.
    fn insert(&self, books: Vec<(Book, u32)>) -> Result<(), CatalogError>;

    /// Remove every ISBN in `isbns`, or none of them if any is absent.
    fn remove(&self, isbns: Vec<Isbn>) -> Result<(), CatalogError>;

    /// Drop every record (and, for variant T, every per-record lock).
    fn remove_all(&self);

    /// Increment `num_copies` for each entry by the paired non-negative
    /// amount.
    fn add_copies(&self, deltas: BTreeMap<Isbn, u32>) -> Result<(), CatalogError>;

    /// Set the editor-pick flag for each entry.
    fn set_editor_picks(&self, picks: BTreeMap<Isbn, bool>) -> Result<(), CatalogError>;

    /// All-or-nothing purchase. See [`crate::catalog::store::Catalog::buy_books`]
    /// for the full algorithm.
    fn reserve_and_buy(&self, order: BTreeMap<Isbn, u32>) -> Result<(), CatalogError>;

    /// Record one rating per entry.
    fn rate(&self, ratings: BTreeMap<Isbn, u32>) -> Result<(), CatalogError>;

    /// Snapshot of every record in the catalog.
    fn list_all(&self) -> Vec<StockRecord>;

    /// Snapshot of the requested ISBNs, in the order the catalog happens
    /// to produce them (callers that need a specific order re-sort).
    fn list_by_isbn(&self, isbns: &[Isbn]) -> Result<Vec<StockRecord>, CatalogError>;

    /// Reduced projection of the requested ISBNs.
    fn get_books_projection(&self, isbns: &[Isbn]) -> Result<Vec<BookProjection>, CatalogError>;

    /// Up to `k` editor-picked records, sampled uniformly without
    /// ordering guarantees.
    fn editor_picks(&self, k: i64) -> Result<Vec<StockRecord>, CatalogError>;

    /// The `k` highest-rated records, ties broken by rating count then by
    /// ascending ISBN. Records with zero ratings are excluded.
    fn top_rated(&self, k: i64) -> Result<Vec<StockRecord>, CatalogError>;

    /// Every record with `num_sale_misses > 0`.
    fn books_in_demand(&self) -> Vec<StockRecord>;
}

/// Sort `StockRecord`s by `(-average_rating, -num_times_rated, +isbn)`,
/// excluding unrated records, and truncate to `k`. Shared by both
/// engines so the ordering guarantee in spec.md §4.3 only has one
/// implementation to keep correct.
pub(crate) fn top_rated_from(mut records: Vec<StockRecord>, k: usize) -> Vec<StockRecord> {
    records.retain(|r| r.num_times_rated > 0);
    records.sort_by(|a, b| {
        let avg_a = a.average_rating().unwrap_or(f64::MIN);
        let avg_b = b.average_rating().unwrap_or(f64::MIN);
        avg_b
            .total_cmp(&avg_a)
            .then_with(|| b.num_times_rated.cmp(&a.num_times_rated))
            .then_with(|| a.book.isbn.cmp(&b.book.isbn))
    });
    records.truncate(k);
    records
}

/// Draw `k` distinct records uniformly at random from `pool`, or all of
/// `pool` when `pool.len() <= k`.
pub(crate) fn sample_editor_picks(pool: Vec<StockRecord>, k: usize) -> Vec<StockRecord> {
    if pool.len() <= k {
        return pool;
    }
    let indices = rand::seq::index::sample(&mut rand::thread_rng(), pool.len(), k);
    let mut pool: Vec<Option<StockRecord>> = pool.into_iter().map(Some).collect();
    indices
        .into_iter()
        .map(|i| pool[i].take().expect("sampled index is unique"))
        .collect()
}
