//! Cache Statistics Module
//!
//! Tracks cache activity counters: hits, misses, evictions and expiry
//! purges.

use serde::Serialize;

// == Cache Stats ==
/// Lifetime activity counters for the cache.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Number of reads that returned a live value
    pub hits: u64,
    /// Number of reads that found nothing (absent or expired)
    pub misses: u64,
    /// Number of entries evicted to enforce the capacity bound
    pub evictions: u64,
    /// Number of entries purged because their age reached the TTL
    pub expired: u64,
    /// Current number of resident entries
    pub resident_entries: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no reads have happened.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    // == Record Hit ==
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Miss ==
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Record Eviction ==
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    // == Record Expiry ==
    /// Counts `count` entries purged by expiry.
    pub fn record_expired(&mut self, count: usize) {
        self.expired += count as u64;
    }

    // == Update Entry Count ==
    pub fn set_resident_entries(&mut self, count: usize) {
        self.resident_entries = count;
    }
}
