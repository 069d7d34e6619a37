//! The workload benchmark driver, per spec.md §4.6.

mod config;
mod driver;
mod generator;
mod stats;

pub use config::WorkloadConfig;
pub use stats::WorkloadReport;

use crate::catalog::Catalog;
use std::sync::Arc;

/// Run the configured workload against `catalog` and return the
/// aggregated report.
pub fn run_workload(catalog: Arc<Catalog>, config: WorkloadConfig) -> WorkloadReport {
    driver::run(catalog, config)
}
