//! Cache Store Module
//!
//! The bounded recency cache: HashMap storage combined with LRU recency
//! tracking, capacity eviction and TTL expiry.
//!
//! Payloads are type-erased, so several unrelated domains can share one
//! string key space; retrieval goes through a checked downcast. Expiry is
//! honored on every read path: an entry whose age has reached the TTL is
//! treated as absent and purged on contact, never returned stale.

use std::any::{type_name, Any};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use crate::cache::{CacheEntry, CacheStats, CacheValue, Clock, LruTracker, SystemClock};
use crate::error::{BookingError, Result};

// == Cache Store ==
/// In-memory cache with LRU eviction and optional TTL expiry.
///
/// All operations mutate the recency order (even reads), so the store takes
/// `&mut self` throughout and a shared instance must be driven through one
/// exclusive lock; see [`SharedCache`](crate::cache::SharedCache).
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Recency order over resident keys
    lru: LruTracker,
    /// Activity counters
    stats: CacheStats,
    /// Maximum number of resident entries
    capacity: usize,
    /// Age at which an entry is treated as absent; `None` disables expiry
    ttl: Option<Duration>,
    /// Injected time source
    clock: Box<dyn Clock>,
}

impl CacheStore {
    // == Constructors ==
    /// Creates a store with the given capacity and TTL, on the system clock.
    ///
    /// # Errors
    /// Rejects a zero capacity and a zero TTL: both would make every `put`
    /// immediately self-defeating, so they are configuration bugs rather
    /// than tunables. Pass `ttl: None` for capacity-only eviction.
    pub fn new(capacity: usize, ttl: Option<Duration>) -> Result<Self> {
        Self::with_clock(capacity, ttl, SystemClock)
    }

    /// Creates a store on an injected clock, for tests that control time.
    pub fn with_clock(
        capacity: usize,
        ttl: Option<Duration>,
        clock: impl Clock + 'static,
    ) -> Result<Self> {
        if capacity == 0 {
            return Err(BookingError::InvalidConfig(
                "cache capacity must be at least 1".to_string(),
            ));
        }
        if ttl == Some(Duration::ZERO) {
            return Err(BookingError::InvalidConfig(
                "cache TTL must be positive; omit it to disable expiry".to_string(),
            ));
        }

        Ok(Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            stats: CacheStats::new(),
            capacity,
            ttl,
            clock: Box::new(clock),
        })
    }

    // == Put ==
    /// Inserts or overwrites the entry for `key` with a freshly timestamped
    /// payload and marks the key most recently used.
    ///
    /// If the insertion pushes the store over capacity, least-recently-used
    /// keys are evicted until the bound holds again. Never fails; an
    /// overwrite resets the entry's age.
    pub fn put<V>(&mut self, key: String, value: V)
    where
        V: Any + Send + Sync,
    {
        let now = self.clock.now();
        self.entries
            .insert(key.clone(), CacheEntry::new(Arc::new(value), now));
        self.lru.touch(&key);
        debug!(%key, "cache put");

        while self.entries.len() > self.capacity {
            match self.lru.evict_oldest() {
                Some(evicted) => {
                    self.entries.remove(&evicted);
                    self.stats.record_eviction();
                    info!(key = %evicted, "cache over capacity, evicted least-recently-used entry");
                }
                None => break,
            }
        }

        self.stats.set_resident_entries(self.entries.len());
    }

    // == Get ==
    /// Looks up `key`, returning the opaque payload if present and live.
    ///
    /// A hit marks the key most recently used. An entry whose age has
    /// reached the TTL is purged on the spot and reported as a miss, so
    /// expired data is never resurrected.
    pub fn get(&mut self, key: &str) -> Option<CacheValue> {
        let now = self.clock.now();

        if let Some(entry) = self.entries.get(key) {
            if entry.is_expired(now, self.ttl) {
                self.entries.remove(key);
                self.lru.remove(key);
                self.stats.record_expired(1);
                self.stats.record_miss();
                self.stats.set_resident_entries(self.entries.len());
                debug!(%key, "cache miss (expired)");
                return None;
            }

            let value = entry.value();
            self.lru.touch(key);
            self.stats.record_hit();
            debug!(%key, "cache hit");
            Some(value)
        } else {
            self.stats.record_miss();
            debug!(%key, "cache miss");
            None
        }
    }

    // == Get As ==
    /// Looks up `key` and downcasts the payload to `V`.
    ///
    /// Absence (including expiry) is `None`, exactly as with [`get`].
    ///
    /// # Panics
    /// Panics if the key holds a payload of a different type. Storing one
    /// type and retrieving another under the same key is a bug in the
    /// caller's key discipline, not a recoverable condition.
    ///
    /// [`get`]: CacheStore::get
    pub fn get_as<V>(&mut self, key: &str) -> Option<Arc<V>>
    where
        V: Any + Send + Sync,
    {
        let value = self.get(key)?;
        match value.downcast::<V>() {
            Ok(typed) => Some(typed),
            Err(_) => panic!(
                "cache key '{}' does not hold a value of type {}",
                key,
                type_name::<V>()
            ),
        }
    }

    // == Remove ==
    /// Deletes the entry for `key` if present.
    ///
    /// Removing an absent key is a no-op, logged for visibility.
    pub fn remove(&mut self, key: &str) {
        if self.entries.remove(key).is_some() {
            self.lru.remove(key);
            self.stats.set_resident_entries(self.entries.len());
            debug!(%key, "cache remove");
        } else {
            debug!(%key, "attempted to remove a key that is not cached");
        }
    }

    // == Size ==
    /// Sweeps expired entries, then returns the resident count.
    pub fn size(&mut self) -> usize {
        self.purge_expired();
        self.entries.len()
    }

    // == Purge Expired ==
    /// Removes every entry whose age has reached the TTL.
    ///
    /// Returns the number of entries removed. Reads already refuse expired
    /// entries, so this is a compaction pass bounding physical retention;
    /// it is also driven periodically by the background cleanup task.
    pub fn purge_expired(&mut self) -> usize {
        let now = self.clock.now();
        let ttl = self.ttl;

        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired(now, ttl))
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();
        for key in expired_keys {
            self.entries.remove(&key);
            self.lru.remove(&key);
        }

        if count > 0 {
            self.stats.record_expired(count);
            debug!(count, "purged expired cache entries");
        }
        self.stats.set_resident_entries(self.entries.len());
        count
    }

    // == Clear ==
    /// Empties the store and resets the recency order.
    ///
    /// Lifetime counters survive; the resident count reads zero.
    pub fn clear(&mut self) {
        let dropped = self.entries.len();
        self.entries.clear();
        self.lru.clear();
        self.stats.set_resident_entries(0);
        info!(dropped, "cache cleared");
    }

    // == Stats ==
    /// Returns a snapshot of the activity counters.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_resident_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the resident entry count without sweeping.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no entries are resident.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the configured capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the configured TTL, if expiry is enabled.
    pub fn ttl(&self) -> Option<Duration> {
        self.ttl
    }
}

impl fmt::Debug for CacheStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheStore")
            .field("entries", &self.entries.len())
            .field("capacity", &self.capacity)
            .field("ttl", &self.ttl)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}
