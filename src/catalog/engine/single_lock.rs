//! Variant S: a single global `RwLock` guards the entire catalog.
//!
//! | Operation class | Lock held |
//! |---|---|
//! | Any read | shared |
//! | Any mutation | exclusive |

use crate::catalog::engine::{BookProjection, CatalogEngine, sample_editor_picks, top_rated_from};
use crate::catalog::error::CatalogError;
use crate::catalog::record::{Book, Isbn, StockRecord};
use crate::catalog::validator;
use parking_lot::RwLock;
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, trace, warn};

/// Single global read-write lock over the whole catalog.
pub struct SingleLockCatalog {
    inner: RwLock<HashMap<Isbn, StockRecord>>,
}

impl SingleLockCatalog {
    /// Construct an empty catalog.
    pub fn new() -> Self {
        SingleLockCatalog {
            inner: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for SingleLockCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogEngine for SingleLockCatalog {
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
            guard.insert(isbn, StockRecord::new(book, copies));
        }
        debug!(added = count, "addBooks committed (variant S)");
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
            guard.remove(isbn);
        }
        debug!(removed = isbns.len(), "removeBooks committed (variant S)");
        Ok(())
    }

    fn remove_all(&self) {
        let mut guard = self.inner.write();
        let count = guard.len();
        guard.clear();
        debug!(removed = count, "removeAllBooks committed (variant S)");
    }

    fn add_copies(&self, deltas: BTreeMap<Isbn, u32>) -> Result<(), CatalogError> {
        let mut guard = self.inner.write();
        for isbn in deltas.keys() {
            if !guard.contains_key(isbn) {
                return Err(CatalogError::NotInStock { isbn: *isbn });
            }
        }
        for (isbn, n) in deltas {
            guard.get_mut(&isbn).expect("presence checked above").add_copies(n);
        }
        Ok(())
    }

    fn set_editor_picks(&self, picks: BTreeMap<Isbn, bool>) -> Result<(), CatalogError> {
        let mut guard = self.inner.write();
        for isbn in picks.keys() {
            if !guard.contains_key(isbn) {
                return Err(CatalogError::NotInStock { isbn: *isbn });
            }
        }
        for (isbn, flag) in picks {
            guard.get_mut(&isbn).expect("presence checked above").editor_pick = flag;
        }
        Ok(())
    }

    fn reserve_and_buy(&self, order: BTreeMap<Isbn, u32>) -> Result<(), CatalogError> {
        let mut guard = self.inner.write();
        for isbn in order.keys() {
            if !guard.contains_key(isbn) {
                return Err(CatalogError::NotInStock { isbn: *isbn });
            }
        }

        let mut shortfalls = BTreeMap::new();
        for (isbn, n) in &order {
            let record = guard.get(isbn).expect("presence checked above");
            let shortfall = record.shortfall(*n);
            if shortfall > 0 {
                shortfalls.insert(*isbn, shortfall);
            }
        }

        if !shortfalls.is_empty() {
            for (isbn, shortfall) in &shortfalls {
                guard
                    .get_mut(isbn)
                    .expect("presence checked above")
                    .add_sale_miss(*shortfall);
            }
            warn!(misses = shortfalls.len(), "buyBooks aborted: out of stock (variant S)");
            return Err(CatalogError::OutOfStock {
                isbns: shortfalls.into_keys().collect(),
            });
        }

        for (isbn, n) in order {
            guard
                .get_mut(&isbn)
                .expect("presence checked above")
                .commit_purchase(n);
        }
        trace!("buyBooks committed (variant S)");
        Ok(())
    }

    fn rate(&self, ratings: BTreeMap<Isbn, u32>) -> Result<(), CatalogError> {
        let mut guard = self.inner.write();
        for isbn in ratings.keys() {
            if !guard.contains_key(isbn) {
                return Err(CatalogError::NotInStock { isbn: *isbn });
            }
        }
        for (isbn, rating) in ratings {
            guard.get_mut(&isbn).expect("presence checked above").rate(rating);
        }
        Ok(())
    }

    fn list_all(&self) -> Vec<StockRecord> {
        let guard = self.inner.read();
        guard.values().cloned().collect()
    }

    fn list_by_isbn(&self, isbns: &[Isbn]) -> Result<Vec<StockRecord>, CatalogError> {
        let guard = self.inner.read();
        let mut out = Vec::with_capacity(isbns.len());
        for isbn in isbns {
            match guard.get(isbn) {
                Some(record) => out.push(record.clone()),
                None => return Err(CatalogError::NotInStock { isbn: *isbn }),
            }
        }
        Ok(out)
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
            guard.values().filter(|r| r.editor_pick).cloned().collect()
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
        guard.values().filter(|r| r.num_sale_misses > 0).cloned().collect()
    }
}
