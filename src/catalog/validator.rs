//! Pure, side-effect-free validation predicates.
//!
//! Every mutating and reading entry point in [`crate::catalog::store`] calls
//! these before taking any lock beyond what is needed to check presence or
//! duplication, so a call either fully succeeds or leaves the catalog
//! untouched.

use crate::catalog::error::CatalogError;
use crate::catalog::record::{Book, Isbn};

fn invalid(field: &str, message: impl Into<String>) -> CatalogError {
    CatalogError::InvalidArgument {
        field: field.to_string(),
        message: message.into(),
    }
}

/// ISBN must be a positive integer.
pub fn validate_isbn(isbn: Isbn) -> Result<(), CatalogError> {
    if isbn.is_well_formed() {
        Ok(())
    } else {
        Err(invalid("isbn", format!("{isbn} must be > 0")))
    }
}

/// Title must be non-empty.
pub fn validate_title(title: &str) -> Result<(), CatalogError> {
    if title.trim().is_empty() {
        Err(invalid("title", "must not be empty"))
    } else {
        Ok(())
    }
}

/// Author must be non-empty.
pub fn validate_author(author: &str) -> Result<(), CatalogError> {
    if author.trim().is_empty() {
        Err(invalid("author", "must not be empty"))
    } else {
        Ok(())
    }
}

/// Price must be non-negative.
pub fn validate_price(price: f64) -> Result<(), CatalogError> {
    if price < 0.0 || !price.is_finite() {
        Err(invalid("price", format!("{price} must be >= 0")))
    } else {
        Ok(())
    }
}

/// A copy count (requested or added) must be non-negative. Takes `i64` so
/// negative literal inputs from callers using signed counters are
/// rejected rather than silently wrapping through `u32`.
pub fn validate_copies(n: i64) -> Result<(), CatalogError> {
    if n < 0 {
        Err(invalid("copies", format!("{n} must be >= 0")))
    } else {
        Ok(())
    }
}

/// A rating must be in `0..=5`.
pub fn validate_rating(rating: i64) -> Result<(), CatalogError> {
    if !(0..=5).contains(&rating) {
        Err(invalid("rating", format!("{rating} must be in 0..=5")))
    } else {
        Ok(())
    }
}

/// A requested sample count (`editorPicks(k)`, `topRated(k)`) must be
/// non-negative.
pub fn validate_count(k: i64) -> Result<(), CatalogError> {
    if k < 0 {
        Err(invalid("count", format!("{k} must be >= 0")))
    } else {
        Ok(())
    }
}

/// Full validation of a new book identity, for `addBooks`.
pub fn validate_new_book(book: &Book) -> Result<(), CatalogError> {
    validate_isbn(book.isbn)?;
    validate_title(&book.title)?;
    validate_author(&book.author)?;
    validate_price(book.price)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_isbn() {
        assert!(validate_isbn(Isbn::from(0)).is_err());
        assert!(validate_isbn(Isbn::from(-1)).is_err());
        assert!(validate_isbn(Isbn::from(1)).is_ok());
    }

    #[test]
    fn rejects_blank_title_and_author() {
        assert!(validate_title("").is_err());
        assert!(validate_title("   ").is_err());
        assert!(validate_author("").is_err());
    }

    #[test]
    fn rejects_negative_or_non_finite_price() {
        assert!(validate_price(-0.01).is_err());
        assert!(validate_price(f64::NAN).is_err());
        assert!(validate_price(0.0).is_ok());
    }

    #[test]
    fn rejects_rating_outside_zero_to_five() {
        assert!(validate_rating(-1).is_err());
        assert!(validate_rating(6).is_err());
        assert!(validate_rating(0).is_ok());
        assert!(validate_rating(5).is_ok());
    }

    #[test]
    fn validate_new_book_checks_every_field() {
        let good = Book::new(1, "Title", "Author", 5.0);
        assert!(validate_new_book(&good).is_ok());

        let bad_isbn = Book::new(-1, "Title", "Author", 5.0);
        assert!(validate_new_book(&bad_isbn).is_err());
    }
}
