//! Catalog error types

use crate::catalog::record::Isbn;
use std::collections::BTreeSet;
use std::fmt;

/// Errors that can occur within the catalog.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum CatalogError {
    /// A scalar argument failed validation (bad ISBN, empty title, negative
    /// price, out-of-range rating, negative count, ...).
    InvalidArgument {
        /// Name of the offending field.
        field: String,
        /// Human-readable description of the problem.
        message: String,
    },

    /// A required set argument was absent.
    NullInput {
        /// Name of the missing argument.
        field: String,
    },

    /// The ISBN is well-formed but absent from the catalog.
    NotInStock {
        /// The missing ISBN.
        isbn: Isbn,
    },

    /// A candidate ISBN already exists in the catalog.
    Duplicate {
        /// The duplicated ISBN.
        isbn: Isbn,
    },

    /// A `buyBooks` request could not be filled in full; every shortfalled
    /// ISBN has already had its `num_sale_misses` incremented by the time
    /// this error is returned.
    OutOfStock {
        /// ISBNs that were short, in ascending order.
        isbns: BTreeSet<Isbn>,
    },

    /// The requested operation is not implemented by the selected
    /// concurrency variant.
    Unsupported {
        /// Name of the unsupported operation.
        operation: String,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::InvalidArgument { field, message } => {
                write!(f, "invalid argument for {field}: {message}")
            }
            CatalogError::NullInput { field } => {
                write!(f, "missing required input: {field}")
            }
            CatalogError::NotInStock { isbn } => {
                write!(f, "isbn {isbn} is not in stock")
            }
            CatalogError::Duplicate { isbn } => {
                write!(f, "isbn {isbn} already exists in the catalog")
            }
            CatalogError::OutOfStock { isbns } => {
                let list = isbns
                    .iter()
                    .map(|i| i.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "out of stock for isbn(s): {list}")
            }
            CatalogError::Unsupported { operation } => {
                write!(f, "operation not supported by this variant: {operation}")
            }
        }
    }
}

impl std::error::Error for CatalogError {}
