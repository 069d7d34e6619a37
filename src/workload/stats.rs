//! Per-worker and aggregate statistics.

/// Statistics accumulated by a single worker thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkerStats {
    /// Total interactions attempted (all classes).
    pub total_runs: u64,
    /// Interactions that completed without error.
    pub successful_runs: u64,
    /// Customer (bookstore) interactions attempted.
    pub total_customer_runs: u64,
    /// Customer interactions that completed without error.
    pub successful_customer_runs: u64,
    /// Wall-clock time spent running interactions, in nanoseconds.
    pub elapsed_nanos: u128,
}

impl WorkerStats {
    fn merge(&mut self, other: &WorkerStats) {
        self.total_runs += other.total_runs;
        self.successful_runs += other.successful_runs;
        self.total_customer_runs += other.total_customer_runs;
        self.successful_customer_runs += other.successful_customer_runs;
        self.elapsed_nanos += other.elapsed_nanos;
    }
}

/// Aggregate statistics across every worker's measured runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkloadReport {
    /// Fraction of attempted interactions (all classes) that succeeded.
    pub success_rate: f64,
    /// Fraction of attempted interactions that were customer interactions.
    pub customer_fraction: f64,
    /// Successful customer interactions per second.
    pub throughput: f64,
    /// Average elapsed time per successful customer interaction.
    pub average_latency: std::time::Duration,
}

impl WorkloadReport {
    /// Aggregate a set of per-worker statistics into one report.
    pub fn aggregate(per_worker: &[WorkerStats]) -> Self {
        let mut total = WorkerStats::default();
        for stats in per_worker {
            total.merge(stats);
        }

        let success_rate = if total.total_runs == 0 {
            0.0
        } else {
            total.successful_runs as f64 / total.total_runs as f64
        };
        let customer_fraction = if total.total_runs == 0 {
            0.0
        } else {
            total.total_customer_runs as f64 / total.total_runs as f64
        };
        let elapsed_secs = total.elapsed_nanos as f64 / 1e9;
        let throughput = if elapsed_secs == 0.0 {
            0.0
        } else {
            total.successful_customer_runs as f64 / elapsed_secs
        };
        let average_latency = if total.successful_customer_runs == 0 {
            std::time::Duration::ZERO
        } else {
            std::time::Duration::from_nanos((total.elapsed_nanos / total.successful_customer_runs as u128) as u64)
        };

        WorkloadReport {
            success_rate,
            customer_fraction,
            throughput,
            average_latency,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggregate_of_no_workers_is_all_zero() {
        let report = WorkloadReport::aggregate(&[]);
        assert_eq!(report.success_rate, 0.0);
        assert_eq!(report.customer_fraction, 0.0);
        assert_eq!(report.throughput, 0.0);
        assert_eq!(report.average_latency, std::time::Duration::ZERO);
    }

    #[test]
    fn aggregate_sums_worker_stats_before_dividing() {
        let a = WorkerStats {
            total_runs: 100,
            successful_runs: 80,
            total_customer_runs: 60,
            successful_customer_runs: 50,
            elapsed_nanos: 50_000,
        };
        let b = WorkerStats {
            total_runs: 100,
            successful_runs: 90,
            total_customer_runs: 40,
            successful_customer_runs: 40,
            elapsed_nanos: 40_000,
        };

        let report = WorkloadReport::aggregate(&[a, b]);
        assert!((report.success_rate - 0.85).abs() < 1e-9);
        assert!((report.customer_fraction - 0.5).abs() < 1e-9);
        assert_eq!(report.average_latency, std::time::Duration::from_nanos(1000));
    }
}
