//! Cache Entry Module
//!
//! Defines the immutable wrapper pairing a stored payload with its creation
//! instant.

use std::any::Any;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Opaque payload handle stored in the cache.
///
/// The cache never inspects the payload; callers agree by convention on what
/// type a given key holds and retrieve it through a checked downcast.
pub type CacheValue = Arc<dyn Any + Send + Sync>;

// == Cache Entry ==
/// A stored payload and the instant it was inserted.
///
/// Entries are never mutated: a logically "updated" value is represented by
/// replacing the whole entry, so `created_at` is fixed for its lifetime.
#[derive(Clone)]
pub struct CacheEntry {
    value: CacheValue,
    created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Wraps `value`, capturing `now` as the creation instant.
    pub fn new(value: CacheValue, now: Instant) -> Self {
        Self {
            value,
            created_at: now,
        }
    }

    /// Returns a handle to the stored payload.
    pub fn value(&self) -> CacheValue {
        Arc::clone(&self.value)
    }

    /// Returns the instant this entry was created.
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    // == Is Expired ==
    /// Checks whether the entry's age has reached the time-to-live.
    ///
    /// Boundary condition: an entry is expired when `now - created_at >= ttl`,
    /// so an entry is treated as absent the moment the full TTL has elapsed.
    /// A cache with no TTL configured never expires entries.
    pub fn is_expired(&self, now: Instant, ttl: Option<Duration>) -> bool {
        match ttl {
            Some(ttl) => now.saturating_duration_since(self.created_at) >= ttl,
            None => false,
        }
    }
}

impl fmt::Debug for CacheEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Payload is type-erased; only the timestamp is meaningful here.
        f.debug_struct("CacheEntry")
            .field("created_at", &self.created_at)
            .finish_non_exhaustive()
    }
}
