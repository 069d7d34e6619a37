//! Walks through the catalog's end-to-end scenarios against whichever
//! concurrency variant `EngineConfig` selects.
//!
//! Run with `SINGLE_LOCK=true cargo run --bin scenario_walkthrough` to
//! exercise variant S instead of the default variant T.

use bookstore_core::prelude::*;
use clap::Parser;
use std::collections::BTreeMap;

fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = EngineConfig::parse();
    let catalog = Catalog::new(&config);
    println!(
        "=== Scenario Walkthrough ({}) ===\n",
        if config.single_lock { "variant S" } else { "variant T" }
    );

    let isbn = Isbn::from(3_044_560);
    catalog
        .insert(vec![(Book::new(isbn.value(), "Harry Potter and JUnit", "JK Unit", 10.0), 5)])
        .unwrap();
    println!("✓ Stocked ISBN {isbn} with 5 copies");

    catalog.buy_books(BTreeMap::from([(isbn, 5)])).unwrap();
    let record = &catalog.list_by_isbn(&[isbn]).unwrap()[0];
    println!(
        "✓ Bought all 5 copies: numCopies={}, numSaleMisses={}",
        record.num_copies, record.num_sale_misses
    );

    match catalog.buy_books(BTreeMap::from([(isbn, 1)])) {
        Err(CatalogError::OutOfStock { isbns }) => {
            println!("✓ Further buy correctly rejected: OUT_OF_STOCK for {isbns:?}")
        }
        other => println!("✗ unexpected result: {other:?}"),
    }

    catalog.rate(BTreeMap::from([(isbn, 4)])).unwrap();
    let record = &catalog.list_by_isbn(&[isbn]).unwrap()[0];
    println!(
        "✓ Rated 4: numTimesRated={}, averageRating={:?}",
        record.num_times_rated,
        record.average_rating()
    );

    println!("\n=== Done ===");
}
