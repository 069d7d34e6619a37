//! Variant T: an intention lock over the catalog map plus per-record
//! `RwLock`s, acquired in ascending-ISBN order.
//!
//! | Operation class | Global lock | Per-record locks |
//! |---|---|---|
//! | Structural change | exclusive | - |
//! | Reads of specific ISBNs | shared | shared, sorted |
//! | Mutations of existing ISBNs | shared | exclusive, sorted |
//! | Whole-catalog reads | shared | not required; one record at a time |
//!
//! The outer `RwLock<BTreeMap<..>>` *is* the intention lock: holding it for
//! read means "global shared", for write means "global exclusive". Per-ISBN
//! operations resolve `Arc` clones under a brief outer-read critical
//! section, release the outer lock, then acquire per-record locks by
//! iterating a `BTreeMap` — whose iteration order is always ascending by
//! key, so "acquire in ascending-ISBN order" falls out of the container
//! choice rather than an explicit sort. Every guard is held in a `Vec` (or
//! a local binding) that is dropped in one scope, so release is LIFO on
//! every path, including early returns after validation failure.

use crate::catalog::engine::{BookProjection, CatalogEngine, sample_editor_picks, top_rated_from};
use crate::catalog::error::CatalogError;
use crate::catalog::record::{Book, Isbn, StockRecord};
use crate::catalog::validator;
use parking_lot::RwLock;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use tracing::{debug, trace, warn};

type RecordLock = Arc<RwLock<StockRecord>>;

/// Intention lock (outer) + per-record `RwLock`s (inner).
pub struct TwoLevelCatalog {
    inner: RwLock<BTreeMap<Isbn, RecordLock>>,
}

impl TwoLevelCatalog {
    /// Construct an empty catalog.
    pub fn new() -> Self {
        TwoLevelCatalog {
            inner: RwLock::new(BTreeMap::new()),
        }
    }

    /// Resolve a set of ISBNs to their record locks under a single brief
    /// outer-shared critical section. Fails with `NotInStock` on the first
    /// missing ISBN, touching nothing.
    fn resolve(&self, isbns: impl IntoIterator<Item = Isbn>) -> Result<BTreeMap<Isbn, RecordLock>, CatalogError> {
        let guard = self.inner.read();
        let mut resolved = BTreeMap::new();
        for isbn in isbns {
            match guard.get(&isbn) {
                Some(lock) => {
                    resolved.insert(isbn, Arc::clone(lock));
                }
                None => return Err(CatalogError::NotInStock { isbn }),
            }
        }
        Ok(resolved)
    }
}

impl Default for TwoLevelCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogEngine for TwoLevelCatalog {
    fn insert(&self, books: Vec<(Book, u32)>) -> Result<(), CatalogError> {
        let mut guard = self.inner.write();
        for (book, _) in &books {
            validator::validate_new_book(book)?;
            if guard.contains_key(&book.isbn) {
                return Err(CatalogError::Duplicate { isbn: book.isbn });
            }
        }
        let count = books.len();
        for (book, copies) in books {
            let isbn = book.isbn;
            guard.insert(isbn, Arc::new(RwLock::new(StockRecord::new(book, copies))));
        }
        debug!(added = count, "addBooks committed (variant T)");
        Ok(())
    }

    fn remove(&self, isbns: Vec<Isbn>) -> Result<(), CatalogError> {
        let mut guard = self.inner.write();
        for isbn in &isbns {
            if !guard.contains_key(isbn) {
                return Err(CatalogError::NotInStock { isbn: *isbn });
            }
        }
        for isbn in &isbns {
            // Dropping the Arc here drops the record's lock along with the
            // record itself, satisfying invariant 2.
            guard.remove(isbn);
        }
        debug!(removed = isbns.len(), "removeBooks committed (variant T)");
        Ok(())
    }

    fn remove_all(&self) {
        let mut guard = self.inner.write();
        let count = guard.len();
        guard.clear();
        debug!(removed = count, "removeAllBooks committed (variant T)");
    }

    fn add_copies(&self, deltas: BTreeMap<Isbn, u32>) -> Result<(), CatalogError> {
        let resolved = self.resolve(deltas.keys().copied())?;
        let mut guards: Vec<_> = resolved.iter().map(|(isbn, lock)| (*isbn, lock.write())).collect();
        for (isbn, guard) in guards.iter_mut() {
            guard.add_copies(deltas[isbn]);
        }
        Ok(())
    }

    fn set_editor_picks(&self, picks: BTreeMap<Isbn, bool>) -> Result<(), CatalogError> {
        let resolved = self.resolve(picks.keys().copied())?;
        let mut guards: Vec<_> = resolved.iter().map(|(isbn, lock)| (*isbn, lock.write())).collect();
        for (isbn, guard) in guards.iter_mut() {
            guard.editor_pick = picks[isbn];
        }
        Ok(())
    }

    fn reserve_and_buy(&self, order: BTreeMap<Isbn, u32>) -> Result<(), CatalogError> {
        let resolved = self.resolve(order.keys().copied())?;
        let mut guards: Vec<_> = resolved.iter().map(|(isbn, lock)| (*isbn, lock.write())).collect();

        let mut shortfalls = BTreeMap::new();
        for (isbn, guard) in guards.iter() {
            let shortfall = guard.shortfall(order[isbn]);
            if shortfall > 0 {
                shortfalls.insert(*isbn, shortfall);
            }
        }

        if !shortfalls.is_empty() {
            for (isbn, guard) in guards.iter_mut() {
                if let Some(shortfall) = shortfalls.get(isbn) {
                    guard.add_sale_miss(*shortfall);
                }
            }
            warn!(misses = shortfalls.len(), "buyBooks aborted: out of stock (variant T)");
            return Err(CatalogError::OutOfStock {
                isbns: shortfalls.into_keys().collect(),
            });
        }

        for (isbn, guard) in guards.iter_mut() {
            guard.commit_purchase(order[isbn]);
        }
        trace!("buyBooks committed (variant T)");
        Ok(())
    }

    fn rate(&self, ratings: BTreeMap<Isbn, u32>) -> Result<(), CatalogError> {
        let resolved = self.resolve(ratings.keys().copied())?;
        let mut guards: Vec<_> = resolved.iter().map(|(isbn, lock)| (*isbn, lock.write())).collect();
        for (isbn, guard) in guards.iter_mut() {
            guard.rate(ratings[isbn]);
        }
        Ok(())
    }

    fn list_all(&self) -> Vec<StockRecord> {
        let guard = self.inner.read();
        guard.values().map(|lock| lock.read().clone()).collect()
    }

    fn list_by_isbn(&self, isbns: &[Isbn]) -> Result<Vec<StockRecord>, CatalogError> {
        let unique: BTreeSet<Isbn> = isbns.iter().copied().collect();
        let resolved = self.resolve(unique)?;
        // Hold every per-record shared lock together, in ascending-ISBN
        // order (the `BTreeMap`'s iteration order), so the snapshot is
        // genuinely simultaneous rather than one record at a time.
        let guards: Vec<_> = resolved.iter().map(|(isbn, lock)| (*isbn, lock.read())).collect();
        let snapshot: BTreeMap<Isbn, StockRecord> =
            guards.iter().map(|(isbn, guard)| (*isbn, guard.clone())).collect();
        drop(guards);
        Ok(isbns.iter().map(|isbn| snapshot[isbn].clone()).collect())
    }

    fn get_books_projection(&self, isbns: &[Isbn]) -> Result<Vec<BookProjection>, CatalogError> {
        Ok(self
            .list_by_isbn(isbns)?
            .iter()
            .map(BookProjection::from)
            .collect())
    }

    fn editor_picks(&self, k: i64) -> Result<Vec<StockRecord>, CatalogError> {
        validator::validate_count(k)?;
        let pool: Vec<StockRecord> = {
            let guard = self.inner.read();
            guard
                .values()
                .filter_map(|lock| {
                    let record = lock.read();
                    record.editor_pick.then(|| record.clone())
                })
                .collect()
        };
        Ok(sample_editor_picks(pool, k as usize))
    }

    fn top_rated(&self, k: i64) -> Result<Vec<StockRecord>, CatalogError> {
        validator::validate_count(k)?;
        let records = self.list_all();
        Ok(top_rated_from(records, k as usize))
    }

    fn books_in_demand(&self) -> Vec<StockRecord> {
        let guard = self.inner.read();
        guard
            .values()
            .filter_map(|lock| {
                let record = lock.read();
                (record.num_sale_misses > 0).then(|| record.clone())
            })
            .collect()
    }
}
