//! Visit Counter Module
//!
//! Counts requests per path, recorded by middleware on every matched
//! route and exposed read-only through the API.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

// == Visit Counter ==
/// Shared per-path request totals.
#[derive(Debug, Clone, Default)]
pub struct VisitCounter {
    counts: Arc<RwLock<HashMap<String, u64>>>,
}

impl VisitCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one visit to `path`.
    pub async fn record(&self, path: &str) {
        let mut counts = self.counts.write().await;
        *counts.entry(path.to_string()).or_insert(0) += 1;
    }

    /// Returns a snapshot of all per-path totals.
    pub async fn snapshot(&self) -> HashMap<String, u64> {
        self.counts.read().await.clone()
    }

    /// Returns the total across all paths.
    pub async fn total(&self) -> u64 {
        self.counts.read().await.values().sum()
    }
}
