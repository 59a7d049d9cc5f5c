//! Cache Module
//!
//! A bounded, concurrently-accessed lookup cache shared by every service
//! domain: LRU eviction keeps the footprint under a capacity limit, TTL
//! treats stale entries as absent, and payloads are type-erased so
//! unrelated domains share one string key space.

use std::sync::Arc;

use tokio::sync::RwLock;

mod clock;
mod entry;
mod lru;
mod stats;
mod store;


// Re-export public types
pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::{CacheEntry, CacheValue};
pub use lru::LruTracker;
pub use stats::CacheStats;
pub use store::CacheStore;

/// Process-wide cache handle.
///
/// Every operation reorders recency — reads included — so all of them go
/// through the write (exclusive) half of the lock. Callers must never hold
/// the guard across another cache call or an await point that re-enters the
/// cache; each operation is a single short critical section.
pub type SharedCache = Arc<RwLock<CacheStore>>;

/// Wraps a store for shared use.
pub fn shared(store: CacheStore) -> SharedCache {
    Arc::new(RwLock::new(store))
}
