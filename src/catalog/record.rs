//! Book and StockRecord value types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// ISBN identifier. A thin newtype over `i32`, matching this crate's
/// `Id`/`Hash32`-style identifier wrappers: validity (`> 0`) is enforced by
/// [`crate::catalog::validator`], not by the type itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Isbn(pub i32);

impl Isbn {
    /// The raw integer value.
    pub fn value(self) -> i32 {
        self.0
    }

    /// True when the value is a well-formed ISBN per this catalog's rules
    /// (positive). Does not check presence in any catalog.
    pub fn is_well_formed(self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for Isbn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for Isbn {
    fn from(value: i32) -> Self {
        Isbn(value)
    }
}

/// Immutable identity snapshot of a book, once stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// ISBN identifier, must be > 0.
    pub isbn: Isbn,
    /// Non-empty title.
    pub title: String,
    /// Non-empty author.
    pub author: String,
    /// Non-negative price.
    pub price: f64,
}

impl Book {
    /// Construct a new book identity. Does not validate; callers go
    /// through [`crate::catalog::validator::validate_new_book`] before
    /// installing a `Book` into the catalog.
    pub fn new(isbn: impl Into<Isbn>, title: impl Into<String>, author: impl Into<String>, price: f64) -> Self {
        Book {
            isbn: isbn.into(),
            title: title.into(),
            author: author.into(),
            price,
        }
    }
}

/// Catalog entry for one ISBN: the immutable [`Book`] plus the mutable
/// fields tracked while the record is in stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockRecord {
    /// Immutable identity snapshot.
    pub book: Book,
    /// Copies currently available for sale.
    pub num_copies: u32,
    /// Count of units requested while out of stock, accumulated per
    /// shortfall (not per request).
    pub num_sale_misses: u32,
    /// Number of ratings submitted.
    pub num_times_rated: u32,
    /// Sum of individual 0-5 ratings.
    pub total_rating: u32,
    /// Editorial curation flag.
    pub editor_pick: bool,
}

impl StockRecord {
    /// Create a freshly stocked record with no sales history.
    pub fn new(book: Book, num_copies: u32) -> Self {
        StockRecord {
            book,
            num_copies,
            num_sale_misses: 0,
            num_times_rated: 0,
            total_rating: 0,
            editor_pick: false,
        }
    }

    /// Derived average rating; `None` means "unrated". Never stored.
    pub fn average_rating(&self) -> Option<f64> {
        if self.num_times_rated == 0 {
            None
        } else {
            Some(f64::from(self.total_rating) / f64::from(self.num_times_rated))
        }
    }

    /// Add `n` freshly received copies. Caller holds the record's write
    /// discipline.
    pub fn add_copies(&mut self, n: u32) {
        self.num_copies += n;
    }

    /// How many of the `n` requested copies would be unavailable right
    /// now. `0` means the purchase can be satisfied in full. Pure: does
    /// not mutate `self`, so the caller can compute shortfall across an
    /// entire purchase set before committing to either branch (spec step
    /// 3 of the transactional buy algorithm).
    pub fn shortfall(&self, n: u32) -> u32 {
        n.saturating_sub(self.num_copies)
    }

    /// Commit a purchase of `n` copies that was already confirmed
    /// available (`shortfall(n) == 0`). Caller holds the write discipline.
    pub fn commit_purchase(&mut self, n: u32) {
        debug_assert!(self.num_copies >= n, "commit_purchase called without prior shortfall check");
        self.num_copies = self.num_copies.saturating_sub(n);
    }

    /// Record sale-miss telemetry for an aborted purchase.
    pub fn add_sale_miss(&mut self, shortfall: u32) {
        self.num_sale_misses += shortfall;
    }

    /// Record a rating in `0..=5`. Caller has already validated the range.
    pub fn rate(&mut self, rating: u32) {
        self.num_times_rated += 1;
        self.total_rating += rating;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> StockRecord {
        StockRecord::new(Book::new(1, "Fixture", "Author", 9.99), 10)
    }

    #[test]
    fn shortfall_is_zero_when_stock_covers_the_request() {
        assert_eq!(fixture().shortfall(10), 0);
    }

    #[test]
    fn shortfall_is_the_difference_when_stock_is_insufficient() {
        assert_eq!(fixture().shortfall(13), 3);
    }

    #[test]
    fn commit_purchase_decrements_num_copies() {
        let mut record = fixture();
        record.commit_purchase(4);
        assert_eq!(record.num_copies, 6);
    }

    #[test]
    fn unrated_record_has_no_average() {
        assert_eq!(fixture().average_rating(), None);
    }

    #[test]
    fn average_rating_divides_total_by_count() {
        let mut record = fixture();
        record.rate(4);
        record.rate(2);
        assert_eq!(record.average_rating(), Some(3.0));
    }

    #[test]
    fn isbn_well_formed_requires_positive_value() {
        assert!(Isbn::from(1).is_well_formed());
        assert!(!Isbn::from(0).is_well_formed());
        assert!(!Isbn::from(-5).is_well_formed());
    }
}
