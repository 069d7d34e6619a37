//! Prelude module that re-exports commonly used types and traits.
//!
//! Instead of importing each type individually, you can use:
//!
//! ```rust
//! use bookstore_core::prelude::*;
//! ```

// Core catalog types
pub use crate::catalog::{Book, BookProjection, BookStore, Catalog, CatalogError, Isbn, StockManager, StockRecord};

// Engine selection
pub use crate::catalog::engine::CatalogEngine;

// Configuration
pub use crate::config::EngineConfig;

// Workload driver
pub use crate::workload::{run_workload, WorkloadConfig, WorkloadReport};
