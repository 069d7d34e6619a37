//! The workload driver: `workers` threads each issuing a randomized mix
//! of three interaction classes against the catalog, per spec.md §4.6.

use crate::catalog::record::Isbn;
use crate::catalog::{BookStore, Catalog, StockManager};
use crate::workload::config::WorkloadConfig;
use crate::workload::generator::generate_candidates;
use crate::workload::stats::{WorkerStats, WorkloadReport};
use rand::Rng;
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;
use std::sync::mpsc;
use std::thread;
use std::time::Instant;
use tracing::info;

const CANDIDATE_ISBN_RANGE: std::ops::Range<i32> = 1..1_000_000;

/// Run the configured workload to completion and return the aggregated
/// report. Spawns `config.workers` OS threads (the teacher's
/// `BookManagerStd::start_trade_processor` is this crate's only other use
/// of raw `std::thread::spawn` + `std::sync::mpsc`), each running its own
/// warm-up phase (discarded) followed by its measured phase (recorded),
/// then aggregates over an `mpsc` channel once every worker has joined.
pub fn run(catalog: Arc<Catalog>, config: WorkloadConfig) -> WorkloadReport {
    assert!(
        config.probabilities_valid(),
        "interaction probabilities must sum to 100"
    );

    let (tx, rx) = mpsc::channel::<WorkerStats>();
    let handles: Vec<_> = (0..config.workers)
        .map(|worker_id| {
            let catalog = Arc::clone(&catalog);
            let tx = tx.clone();
            thread::spawn(move || {
                let stats = worker_loop(catalog, config);
                info!(worker_id, total = stats.total_runs, "worker finished");
                let _ = tx.send(stats);
            })
        })
        .collect();
    drop(tx);

    for handle in handles {
        let _ = handle.join();
    }

    let collected: Vec<WorkerStats> = rx.iter().collect();
    WorkloadReport::aggregate(&collected)
}

fn worker_loop(catalog: Arc<Catalog>, config: WorkloadConfig) -> WorkerStats {
    let bookstore = BookStore::new(Arc::clone(&catalog));
    let stock_manager = StockManager::new(catalog);
    let mut rng = rand::thread_rng();

    for _ in 0..config.warmup_runs {
        let _ = run_one_interaction(&bookstore, &stock_manager, &config, &mut rng);
    }

    let mut stats = WorkerStats::default();
    for _ in 0..config.measured_runs {
        let start = Instant::now();
        let (succeeded, is_customer) = run_one_interaction(&bookstore, &stock_manager, &config, &mut rng);
        let elapsed = start.elapsed();

        stats.total_runs += 1;
        if succeeded {
            stats.successful_runs += 1;
        }
        if is_customer {
            stats.total_customer_runs += 1;
            if succeeded {
                stats.successful_customer_runs += 1;
                stats.elapsed_nanos += elapsed.as_nanos();
            }
        }
    }
    stats
}

/// Returns `(succeeded, was_customer_interaction)`.
fn run_one_interaction(
    bookstore: &BookStore,
    stock_manager: &StockManager,
    config: &WorkloadConfig,
    rng: &mut impl Rng,
) -> (bool, bool) {
    let roll = rng.gen_range(0..100u8);
    if roll < config.prob_rare_stock {
        (rare_stock_interaction(stock_manager, config), false)
    } else if roll < config.prob_rare_stock + config.prob_frequent_stock {
        (frequent_stock_interaction(stock_manager, config), false)
    } else {
        (frequent_bookstore_interaction(bookstore, config, rng), true)
    }
}

/// Fetch the full stock snapshot, generate new candidate books, filter
/// out any ISBN already present, and insert the remainder.
fn rare_stock_interaction(stock_manager: &StockManager, config: &WorkloadConfig) -> bool {
    let existing: HashSet<Isbn> = stock_manager.get_books().into_iter().map(|r| r.book.isbn).collect();
    let fresh: Vec<(_, u32)> = generate_candidates(config.books_per_rare_interaction, CANDIDATE_ISBN_RANGE)
        .into_iter()
        .filter(|book| !existing.contains(&book.isbn))
        .map(|book| (book, config.replenish_copies))
        .collect();

    if fresh.is_empty() {
        return true;
    }
    stock_manager.add_books(fresh).is_ok()
}

/// Fetch the full stock snapshot, sort ascending by copies on hand, and
/// replenish the least-stocked books.
fn frequent_stock_interaction(stock_manager: &StockManager, config: &WorkloadConfig) -> bool {
    let mut snapshot = stock_manager.get_books();
    snapshot.sort_by_key(|r| r.num_copies);

    let deltas: BTreeMap<Isbn, u32> = snapshot
        .into_iter()
        .take(config.replenish_count as usize)
        .map(|r| (r.book.isbn, config.replenish_copies))
        .collect();

    if deltas.is_empty() {
        return true;
    }
    stock_manager.add_copies(deltas).is_ok()
}

/// Fetch up to `m` editor picks, sample up to `n` of their ISBNs without
/// replacement, and purchase `q` copies of each.
fn frequent_bookstore_interaction(bookstore: &BookStore, config: &WorkloadConfig, rng: &mut impl Rng) -> bool {
    let picks = bookstore
        .get_editor_picks(i64::from(config.editor_picks_fetched))
        .unwrap_or_default();
    if picks.is_empty() {
        return false;
    }

    let sample_size = (config.isbns_purchased as usize).min(picks.len());
    let indices = rand::seq::index::sample(rng, picks.len(), sample_size);
    let order: BTreeMap<Isbn, u32> = indices
        .into_iter()
        .map(|i| (picks[i].book.isbn, config.copies_per_purchase))
        .collect();

    if order.is_empty() {
        return false;
    }
    bookstore.buy_books(order).is_ok()
}
