//! Runs the workload driver against both concurrency variants over an
//! identically-seeded catalog and prints the resulting throughput
//! comparison.

use bookstore_core::prelude::*;
use std::sync::Arc;

const SEED_BOOK_COUNT: i32 = 64;
const SEED_COPIES: u32 = 500;

fn seeded_catalog(catalog: Catalog) -> Arc<Catalog> {
    let books: Vec<(Book, u32)> = (1..=SEED_BOOK_COUNT)
        .map(|isbn| (Book::new(isbn, format!("Seed Title {isbn}"), "Seed Author", 12.5), SEED_COPIES))
        .collect();
    catalog.insert(books).unwrap();
    catalog
        .set_editor_picks((1..=SEED_BOOK_COUNT).map(|isbn| (Isbn::from(isbn), true)).collect())
        .unwrap();
    Arc::new(catalog)
}

fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = WorkloadConfig::default();

    println!("=== Workload Comparison ===\n");
    for (name, catalog) in [
        ("variant S (single lock)", Catalog::single_lock()),
        ("variant T (two-level lock)", Catalog::two_level()),
    ] {
        let catalog = seeded_catalog(catalog);
        let report = run_workload(catalog, config);
        println!(
            "{name}: success_rate={:.3} customer_fraction={:.3} throughput={:.1}/s avg_latency={:?}",
            report.success_rate, report.customer_fraction, report.throughput, report.average_latency
        );
    }
}
