//! The catalog: a single entry point over whichever concurrency
//! discipline was selected at construction.

use crate::catalog::engine::single_lock::SingleLockCatalog;
use crate::catalog::engine::two_level::TwoLevelCatalog;
use crate::catalog::engine::{BookProjection, CatalogEngine};
use crate::catalog::error::CatalogError;
use crate::catalog::record::{Book, Isbn, StockRecord};
use crate::catalog::validator;
use std::collections::BTreeMap;

/// The concurrency discipline a [`Catalog`] was constructed with. Selected
/// once, at construction, from the `SINGLE_LOCK` configuration key — no
/// runtime polymorphism on the hot path, matching spec.md §9's design note
/// that "which bookstore implementation" is a configuration-time choice
/// between two concrete controllers, not a dynamic-dispatch decision made
/// per call.
enum Engine {
    /// Variant S: one global `RwLock`.
    Single(SingleLockCatalog),
    /// Variant T: intention lock + per-record `RwLock`s.
    TwoLevel(TwoLevelCatalog),
}

impl Engine {
    fn as_dyn(&self) -> &dyn CatalogEngine {
        match self {
            Engine::Single(engine) => engine,
            Engine::TwoLevel(engine) => engine,
        }
    }
}

/// The ISBN-keyed book catalog. Construct with [`Catalog::single_lock`] or
/// [`Catalog::two_level`] (or [`Catalog::new`], which reads `SINGLE_LOCK`
/// from an [`crate::config::EngineConfig`]). Every operation below
/// performs the validation of spec.md §4.1 before any mutation is visible
/// to other callers.
pub struct Catalog {
    engine: Engine,
}

impl Catalog {
    /// Construct a catalog using variant S (single global lock).
    pub fn single_lock() -> Self {
        Catalog {
            engine: Engine::Single(SingleLockCatalog::new()),
        }
    }

    /// Construct a catalog using variant T (intention lock + per-record
    /// locks).
    pub fn two_level() -> Self {
        Catalog {
            engine: Engine::TwoLevel(TwoLevelCatalog::new()),
        }
    }

    /// Construct a catalog from an [`crate::config::EngineConfig`]'s
    /// `single_lock` flag.
    pub fn new(config: &crate::config::EngineConfig) -> Self {
        if config.single_lock {
            Self::single_lock()
        } else {
            Self::two_level()
        }
    }

    fn engine(&self) -> &dyn CatalogEngine {
        self.engine.as_dyn()
    }

    /// Install a batch of new books with their initial stock. All-or-none:
    /// fails with [`CatalogError::InvalidArgument`] on a malformed
    /// candidate or [`CatalogError::Duplicate`] on an ISBN already present,
    /// in which case no book in the batch is installed.
    pub fn insert(&self, books: Vec<(Book, u32)>) -> Result<(), CatalogError> {
        for (_, copies) in &books {
            validator::validate_copies(i64::from(*copies))?;
        }
        self.engine().insert(books)
    }

    /// Remove every listed ISBN, or none of them if any is absent.
    pub fn remove(&self, isbns: Vec<Isbn>) -> Result<(), CatalogError> {
        if isbns.is_empty() {
            return Err(CatalogError::NullInput {
                field: "isbns".to_string(),
            });
        }
        for isbn in &isbns {
            validator::validate_isbn(*isbn)?;
        }
        self.engine().remove(isbns)
    }

    /// Drop every record, and every per-record lock in variant T.
    pub fn remove_all(&self) {
        self.engine().remove_all()
    }

    /// Increment `num_copies` for each entry in `deltas`.
    pub fn add_copies(&self, deltas: BTreeMap<Isbn, u32>) -> Result<(), CatalogError> {
        if deltas.is_empty() {
            return Err(CatalogError::NullInput {
                field: "deltas".to_string(),
            });
        }
        for isbn in deltas.keys() {
            validator::validate_isbn(*isbn)?;
        }
        for n in deltas.values() {
            validator::validate_copies(i64::from(*n))?;
        }
        self.engine().add_copies(deltas)
    }

    /// Set the editor-pick flag for each entry in `picks`.
    pub fn set_editor_picks(&self, picks: BTreeMap<Isbn, bool>) -> Result<(), CatalogError> {
        if picks.is_empty() {
            return Err(CatalogError::NullInput {
                field: "picks".to_string(),
            });
        }
        for isbn in picks.keys() {
            validator::validate_isbn(*isbn)?;
        }
        self.engine().set_editor_picks(picks)
    }

    /// Transactional buy: see spec.md §4.3.
    ///
    /// 1. Validate every `(isbn, n)` pair.
    /// 2. Acquire write access to every affected record.
    /// 3. Compute the shortfall for every record before deciding anything.
    /// 4. If any record is short, add every shortfall to
    ///    `num_sale_misses` and fail with [`CatalogError::OutOfStock`],
    ///    leaving every `num_copies` unchanged.
    /// 5. Otherwise decrement every `num_copies` by its requested amount.
    pub fn buy_books(&self, order: BTreeMap<Isbn, u32>) -> Result<(), CatalogError> {
        if order.is_empty() {
            return Err(CatalogError::NullInput {
                field: "order".to_string(),
            });
        }
        for isbn in order.keys() {
            validator::validate_isbn(*isbn)?;
        }
        for n in order.values() {
            validator::validate_copies(i64::from(*n))?;
        }
        self.engine().reserve_and_buy(order)
    }

    /// Record one rating per entry in `ratings`.
    pub fn rate(&self, ratings: BTreeMap<Isbn, u32>) -> Result<(), CatalogError> {
        if ratings.is_empty() {
            return Err(CatalogError::NullInput {
                field: "ratings".to_string(),
            });
        }
        for isbn in ratings.keys() {
            validator::validate_isbn(*isbn)?;
        }
        for rating in ratings.values() {
            validator::validate_rating(i64::from(*rating))?;
        }
        self.engine().rate(ratings)
    }

    /// Snapshot of every record in the catalog.
    pub fn list_all(&self) -> Vec<StockRecord> {
        self.engine().list_all()
    }

    /// Snapshot of the requested ISBNs, in request order.
    pub fn list_by_isbn(&self, isbns: &[Isbn]) -> Result<Vec<StockRecord>, CatalogError> {
        if isbns.is_empty() {
            return Err(CatalogError::NullInput {
                field: "isbns".to_string(),
            });
        }
        for isbn in isbns {
            validator::validate_isbn(*isbn)?;
        }
        self.engine().list_by_isbn(isbns)
    }

    /// Reduced projection (identity + copies) of the requested ISBNs.
    pub fn get_books_projection(&self, isbns: &[Isbn]) -> Result<Vec<BookProjection>, CatalogError> {
        if isbns.is_empty() {
            return Err(CatalogError::NullInput {
                field: "isbns".to_string(),
            });
        }
        for isbn in isbns {
            validator::validate_isbn(*isbn)?;
        }
        self.engine().get_books_projection(isbns)
    }

    /// Up to `k` editor-picked records, sampled without ordering
    /// guarantees.
    pub fn editor_picks(&self, k: i64) -> Result<Vec<StockRecord>, CatalogError> {
        self.engine().editor_picks(k)
    }

    /// The `k` highest-rated records, per spec.md §4.3's ordering tuple.
    pub fn top_rated(&self, k: i64) -> Result<Vec<StockRecord>, CatalogError> {
        self.engine().top_rated(k)
    }

    /// Every record that has ever had a sale miss.
    pub fn books_in_demand(&self) -> Vec<StockRecord> {
        self.engine().books_in_demand()
    }
}
