//! # Bookstore Catalog Engine
//!
//! An in-memory, concurrency-safe bookstore catalog with two interchangeable
//! locking disciplines and transactional purchase semantics.
//!
//! The catalog tracks one [`catalog::StockRecord`] per ISBN: its immutable
//! identity (title, author, price), copies on hand, sale-miss telemetry,
//! rating totals, and an editor-pick flag. Two customer-facing façades sit
//! in front of the shared [`catalog::Catalog`]:
//!
//! - [`catalog::StockManager`] — the operator contract: stocking, removal,
//!   editor-pick curation, and demand reporting.
//! - [`catalog::BookStore`] — the customer contract: browsing, purchasing,
//!   and rating.
//!
//! ## Concurrency
//!
//! Every mutating operation validates its entire argument set before
//! applying any mutation — callers never observe a partially-applied batch.
//! [`catalog::Catalog`] is constructed with one of two locking disciplines,
//! selected once at startup and fixed for the catalog's lifetime:
//!
//! - **Variant S** ([`catalog::engine::single_lock`]) — one `RwLock` guards
//!   the entire catalog. Simple, serializes all writers against each other.
//! - **Variant T** ([`catalog::engine::two_level`]) — a brief intention lock
//!   resolves which per-record locks a request needs, then those locks are
//!   acquired in ascending-ISBN order and released together, giving
//!   independent records independent write concurrency while staying
//!   deadlock-free.
//!
//! Both disciplines implement the same [`catalog::engine::CatalogEngine`]
//! trait, so [`catalog::Catalog`] dispatches to whichever was selected at
//! construction without runtime polymorphism on the hot path.
//!
//! ## Workload driver
//!
//! [`workload::run_workload`] drives a configurable mix of stocking and
//! purchasing interactions across a pool of worker threads and reports
//! throughput, success rate, and latency — useful for comparing the two
//! locking disciplines under load.

pub mod catalog;
pub mod config;
pub mod prelude;
pub mod workload;

pub use catalog::Catalog;
pub use config::EngineConfig;
