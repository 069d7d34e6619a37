//! Sample data generator collaborator.
//!
//! Per spec.md §6, "the sample generator must produce StockRecord
//! candidates whose fields satisfy the validator; the core is not
//! responsible for their uniqueness." This generator is best-effort on
//! ISBN uniqueness (spec.md §9 Open Question (a)); the workload driver
//! filters duplicates against the current stock snapshot before calling
//! `addBooks`.

use crate::catalog::Book;
use rand::Rng;

/// Generate `count` candidate books with random ISBNs in `isbn_range`,
/// satisfying the validator (positive ISBN, non-empty title/author,
/// non-negative price).
pub fn generate_candidates(count: u32, isbn_range: std::ops::Range<i32>) -> Vec<Book> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|i| {
            let isbn = rng.gen_range(isbn_range.clone()).max(1);
            Book::new(
                isbn,
                format!("Generated Title {i}"),
                format!("Generated Author {i}"),
                rng.gen_range(1.0..100.0),
            )
        })
        .collect()
}
