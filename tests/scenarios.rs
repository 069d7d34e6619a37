//! End-to-end scenarios run against both concurrency variants.

use bookstore_core::prelude::*;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::thread;

fn both_variants() -> Vec<Catalog> {
    vec![Catalog::single_lock(), Catalog::two_level()]
}

fn harry_potter() -> Book {
    Book::new(3_044_560, "Harry Potter and JUnit", "JK Unit", 10.0)
}

#[test]
fn scenario_1_buy_exhausts_stock() {
    for catalog in both_variants() {
        catalog.insert(vec![(harry_potter(), 5)]).unwrap();
        let isbn = Isbn::from(3_044_560);

        catalog.buy_books(BTreeMap::from([(isbn, 5)])).unwrap();

        let record = &catalog.list_by_isbn(&[isbn]).unwrap()[0];
        assert_eq!(record.num_copies, 0);
        assert_eq!(record.num_sale_misses, 0);
    }
}

#[test]
fn scenario_2_buy_with_invalid_isbn_aborts_atomically() {
    for catalog in both_variants() {
        catalog.insert(vec![(harry_potter(), 5)]).unwrap();
        let isbn = Isbn::from(3_044_560);

        let err = catalog
            .buy_books(BTreeMap::from([(isbn, 1), (Isbn::from(-1), 1)]))
            .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidArgument { .. }));

        let record = &catalog.list_by_isbn(&[isbn]).unwrap()[0];
        assert_eq!(record.num_copies, 5);
        assert_eq!(record.num_sale_misses, 0);
    }
}

#[test]
fn scenario_3_buy_exceeding_stock_records_sale_miss() {
    for catalog in both_variants() {
        catalog.insert(vec![(harry_potter(), 5)]).unwrap();
        let isbn = Isbn::from(3_044_560);

        let err = catalog.buy_books(BTreeMap::from([(isbn, 6)])).unwrap_err();
        assert!(matches!(err, CatalogError::OutOfStock { .. }));

        let record = &catalog.list_by_isbn(&[isbn]).unwrap()[0];
        assert_eq!(record.num_copies, 5);
        assert_eq!(record.num_sale_misses, 1);
    }
}

#[test]
fn scenario_4_concurrent_buyer_and_adder_balance() {
    for catalog in both_variants() {
        let isbn = Isbn::from(42);
        catalog.insert(vec![(Book::new(42, "Concurrency 101", "A. Mutex", 20.0), 100)]).unwrap();
        let catalog = Arc::new(catalog);

        let buyer = {
            let catalog = Arc::clone(&catalog);
            thread::spawn(move || {
                for _ in 0..50 {
                    catalog.buy_books(BTreeMap::from([(isbn, 1)])).unwrap();
                }
            })
        };
        let adder = {
            let catalog = Arc::clone(&catalog);
            thread::spawn(move || {
                for _ in 0..50 {
                    catalog.add_copies(BTreeMap::from([(isbn, 1)])).unwrap();
                }
            })
        };
        buyer.join().unwrap();
        adder.join().unwrap();

        let record = &catalog.list_by_isbn(&[isbn]).unwrap()[0];
        assert_eq!(record.num_copies, 100);
    }
}

#[test]
fn scenario_5_snapshot_consistency_under_cycler() {
    for catalog in both_variants() {
        let isbn = Isbn::from(7);
        catalog.insert(vec![(Book::new(7, "Cyclic Redundancy", "CRC", 5.0), 100)]).unwrap();
        let catalog = Arc::new(catalog);

        let cycler = {
            let catalog = Arc::clone(&catalog);
            thread::spawn(move || {
                for _ in 0..50 {
                    catalog.buy_books(BTreeMap::from([(isbn, 1)])).unwrap();
                    catalog.add_copies(BTreeMap::from([(isbn, 1)])).unwrap();
                }
            })
        };

        let reader = {
            let catalog = Arc::clone(&catalog);
            thread::spawn(move || {
                for _ in 0..200 {
                    let record = &catalog.list_by_isbn(&[isbn]).unwrap()[0];
                    assert!(
                        record.num_copies == 99 || record.num_copies == 100,
                        "observed numCopies={}",
                        record.num_copies
                    );
                }
            })
        };

        cycler.join().unwrap();
        reader.join().unwrap();
        let record = &catalog.list_by_isbn(&[isbn]).unwrap()[0];
        assert_eq!(record.num_copies, 100);
    }
}

#[test]
fn scenario_6_rate_then_read() {
    for catalog in both_variants() {
        catalog.insert(vec![(harry_potter(), 5)]).unwrap();
        let isbn = Isbn::from(3_044_560);

        catalog.rate(BTreeMap::from([(isbn, 4)])).unwrap();

        let record = &catalog.list_by_isbn(&[isbn]).unwrap()[0];
        assert_eq!(record.num_times_rated, 1);
        assert_eq!(record.total_rating, 4);
        assert!((record.average_rating().unwrap() - 4.0).abs() < 1e-2);
    }
}

#[test]
fn scenario_7_top_rated_ordering() {
    for catalog in both_variants() {
        catalog
            .insert(vec![
                (Book::new(1, "Three Stars", "Author A", 9.0), 1),
                (Book::new(2, "Five Stars", "Author B", 9.0), 1),
                (Book::new(3, "Four Stars", "Author C", 9.0), 1),
            ])
            .unwrap();
        catalog
            .rate(BTreeMap::from([
                (Isbn::from(1), 3),
                (Isbn::from(2), 5),
                (Isbn::from(3), 4),
            ]))
            .unwrap();

        let top = catalog.top_rated(2).unwrap();
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].book.isbn, Isbn::from(2));
        assert_eq!(top[1].book.isbn, Isbn::from(3));
    }
}

/// The source this catalog is modeled on leaves `rateBooks`,
/// `getTopRatedBooks`, and `getBooksInDemand` unimplemented on its
/// single-lock variant. This crate resolves that open question in favor
/// of a uniform engine (see DESIGN.md): both variants implement the full
/// operation set, since doing so does not violate any of the five
/// invariants this catalog must uphold.
#[test]
fn scenario_8_uniform_engine_supports_top_rated_on_both_variants() {
    for catalog in both_variants() {
        catalog.insert(vec![(harry_potter(), 5)]).unwrap();
        catalog.rate(BTreeMap::from([(Isbn::from(3_044_560), 5)])).unwrap();

        let top = catalog.top_rated(1).unwrap();
        assert_eq!(top.len(), 1);
    }
}
