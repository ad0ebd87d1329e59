mod leaf_hits;
mod results;
mod rules;

// Re-exports.
pub use leaf_hits::{LeafHitRow, LeafHits};
pub use results::{series_by_protocol, ResultRow, ResultsDB};
pub use rules::{ProtocolRules, HIDDEN_PROTOCOL};

/// A single sweep combination: the exact parameter values a results row must
/// carry in order to be plotted in this chart.
#[derive(Debug, Clone, Copy)]
pub struct Search {
    pub lambda: f64,
    pub update_ratio: f64,
    pub range_offset: u64,
    pub range_query_ratio: f64,
    max_threads: Option<u64>,
}

impl Search {
    pub fn new(
        lambda: f64,
        update_ratio: f64,
        range_offset: u64,
        range_query_ratio: f64,
    ) -> Self {
        Self {
            lambda,
            update_ratio,
            range_offset,
            range_query_ratio,
            max_threads: None,
        }
    }

    pub fn max_threads(&mut self, max_threads: u64) -> &mut Self {
        self.max_threads = Some(max_threads);
        self
    }
}
