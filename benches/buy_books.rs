//! Benchmarks comparing variant S (single lock) against variant T
//! (intention lock + per-record locks) for `buyBooks` under contention.

use bookstore_core::prelude::*;
use criterion::{Criterion, criterion_group, criterion_main};
use std::collections::BTreeMap;
use std::hint::black_box;
use std::sync::Arc;

const RECORD_COUNT: i32 = 256;
const INITIAL_COPIES: u32 = 1_000_000;

fn seed(catalog: &Catalog) {
    let books: Vec<(Book, u32)> = (1..=RECORD_COUNT)
        .map(|isbn| (Book::new(isbn, format!("Bench Title {isbn}"), "Bench Author", 9.99), INITIAL_COPIES))
        .collect();
    catalog.insert(books).unwrap();
}

fn bench_single_isbn_sequential(c: &mut Criterion) {
    let mut group = c.benchmark_group("buy_books_sequential");

    for (name, catalog) in [("single_lock", Catalog::single_lock()), ("two_level", Catalog::two_level())] {
        seed(&catalog);
        let isbn = Isbn::from(1);
        group.bench_function(name, |b| {
            b.iter(|| catalog.buy_books(black_box(BTreeMap::from([(isbn, 1)]))))
        });
    }
    group.finish();
}

fn bench_disjoint_isbns_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("buy_books_disjoint_parallel");

    for (name, catalog) in [
        ("single_lock", Arc::new(Catalog::single_lock())),
        ("two_level", Arc::new(Catalog::two_level())),
    ] {
        seed(&catalog);
        group.bench_function(name, |b| {
            b.iter(|| {
                std::thread::scope(|scope| {
                    for worker in 0..8 {
                        let catalog = Arc::clone(&catalog);
                        scope.spawn(move || {
                            let isbn = Isbn::from((worker % RECORD_COUNT) + 1);
                            catalog.buy_books(BTreeMap::from([(isbn, 1)])).unwrap();
                        });
                    }
                })
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_single_isbn_sequential, bench_disjoint_isbns_parallel);
criterion_main!(benches);
