//! API Module
//!
//! HTTP surface of the booking server: CRUD routes per domain plus cache
//! administration, visit totals and a health check.

pub mod accounts;
pub mod locations;
pub mod offerings;
pub mod routes;
pub mod staff;
pub mod system;

use std::sync::Arc;

use crate::cache::{shared, CacheStore, SharedCache};
use crate::config::Config;
use crate::error::Result;
use crate::models::{Account, Location, Offering, Staff};
use crate::service::CachedService;
use crate::visits::VisitCounter;

pub use routes::create_router;

// == App State ==
/// Application state shared across all handlers.
///
/// Every domain service memoizes through the one shared cache; the cache
/// key prefixes keep their entries apart.
#[derive(Clone)]
pub struct AppState {
    /// The shared lookup cache
    pub cache: SharedCache,
    pub staff: Arc<CachedService<Staff>>,
    pub locations: Arc<CachedService<Location>>,
    pub offerings: Arc<CachedService<Offering>>,
    pub accounts: Arc<CachedService<Account>>,
    pub visits: VisitCounter,
}

impl AppState {
    /// Creates application state around the given cache store.
    pub fn new(store: CacheStore) -> Self {
        let cache = shared(store);
        Self {
            staff: Arc::new(CachedService::new(cache.clone())),
            locations: Arc::new(CachedService::new(cache.clone())),
            offerings: Arc::new(CachedService::new(cache.clone())),
            accounts: Arc::new(CachedService::new(cache.clone())),
            visits: VisitCounter::new(),
            cache,
        }
    }

    /// Creates application state from configuration.
    ///
    /// Fails if the configuration asks for an unusable cache (zero
    /// capacity or zero TTL); that is a deployment bug surfaced at
    /// startup, not at call time.
    pub fn from_config(config: &Config) -> Result<Self> {
        let store = CacheStore::new(config.cache_capacity, config.cache_ttl())?;
        Ok(Self::new(store))
    }
}
