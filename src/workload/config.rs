//! Workload driver configuration, per spec.md §4.6.

/// Every parameter the workload driver needs. All fields are positive
/// unless noted; the three `prob_*` fields must sum to 100.
#[derive(Debug, Clone, Copy)]
pub struct WorkloadConfig {
    /// Number of worker threads run in parallel.
    pub workers: u32,
    /// Warm-up runs per worker, discarded from the aggregate.
    pub warmup_runs: u32,
    /// Measured runs per worker, included in the aggregate.
    pub measured_runs: u32,
    /// Probability (0-100) a run is a "rare" stock-manager interaction.
    pub prob_rare_stock: u8,
    /// Probability (0-100) a run is a "frequent" stock-manager interaction.
    pub prob_frequent_stock: u8,
    /// Probability (0-100) a run is the measured bookstore interaction.
    /// `prob_rare_stock + prob_frequent_stock + prob_frequent_bookstore`
    /// must equal 100.
    pub prob_frequent_bookstore: u8,
    /// Number of new candidate books to generate per rare interaction.
    pub books_per_rare_interaction: u32,
    /// Number of least-stocked books to replenish per frequent-stock
    /// interaction.
    pub replenish_count: u32,
    /// Copies added per replenished book.
    pub replenish_copies: u32,
    /// Editor picks fetched per customer interaction (`m`).
    pub editor_picks_fetched: u32,
    /// ISBNs sampled from the fetched picks and purchased per customer
    /// interaction (`n`).
    pub isbns_purchased: u32,
    /// Copies purchased per purchased ISBN (`q`).
    pub copies_per_purchase: u32,
}

impl WorkloadConfig {
    /// True when the three interaction probabilities sum to exactly 100.
    pub fn probabilities_valid(&self) -> bool {
        u16::from(self.prob_rare_stock) + u16::from(self.prob_frequent_stock) + u16::from(self.prob_frequent_bookstore)
            == 100
    }
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        WorkloadConfig {
            workers: 8,
            warmup_runs: 100,
            measured_runs: 1_000,
            prob_rare_stock: 5,
            prob_frequent_stock: 15,
            prob_frequent_bookstore: 80,
            books_per_rare_interaction: 4,
            replenish_count: 3,
            replenish_copies: 10,
            editor_picks_fetched: 5,
            isbns_purchased: 2,
            copies_per_purchase: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_valid_probabilities() {
        assert!(WorkloadConfig::default().probabilities_valid());
    }

    #[test]
    fn probabilities_not_summing_to_100_are_rejected() {
        let mut config = WorkloadConfig::default();
        config.prob_frequent_bookstore -= 1;
        assert!(!config.probabilities_valid());
    }
}
