//! Service Module
//!
//! Cache-aside service layer shared by every domain: reads are memoized in
//! the lookup cache, writes go to the repository and invalidate whatever
//! the write made stale.
//!
//! Key discipline per domain: the full collection is cached under
//! `all_<kind>`, a single record under `<kind>_<id>`. The collection key
//! is invalidated by every write; the record key is kept fresh on create
//! and update and dropped on delete.

use tracing::debug;

use crate::cache::SharedCache;
use crate::error::{BookingError, Result};
use crate::models::Entity;
use crate::repository::InMemoryRepository;

// == Cached Service ==
/// CRUD operations for one domain, memoized through the shared cache.
#[derive(Debug)]
pub struct CachedService<T: Entity> {
    repo: InMemoryRepository<T>,
    cache: SharedCache,
}

impl<T: Entity> CachedService<T> {
    /// Creates a service with an empty repository on the shared cache.
    pub fn new(cache: SharedCache) -> Self {
        Self {
            repo: InMemoryRepository::new(),
            cache,
        }
    }

    /// Cache key for the domain's full collection.
    fn collection_key() -> String {
        format!("all_{}", T::KIND)
    }

    /// Cache key for a single record.
    fn record_key(id: u64) -> String {
        format!("{}_{}", T::KIND, id)
    }

    // == Find All ==
    /// Returns every record, served from the cache when possible.
    pub async fn find_all(&self) -> Vec<T> {
        let key = Self::collection_key();

        if let Some(rows) = self.cache.write().await.get_as::<Vec<T>>(&key) {
            return rows.as_ref().clone();
        }

        let rows = self.repo.find_all().await;
        debug!(
            kind = T::KIND,
            count = rows.len(),
            "loaded collection from repository"
        );
        self.cache.write().await.put(key, rows.clone());
        rows
    }

    // == Find By Id ==
    /// Returns one record, served from the cache when possible.
    pub async fn find_by_id(&self, id: u64) -> Result<T> {
        let key = Self::record_key(id);

        if let Some(row) = self.cache.write().await.get_as::<T>(&key) {
            return Ok(row.as_ref().clone());
        }

        let row = self
            .repo
            .find_by_id(id)
            .await
            .ok_or_else(|| BookingError::NotFound(format!("{} {} not found", T::KIND, id)))?;
        debug!(kind = T::KIND, id, "loaded record from repository");
        self.cache.write().await.put(key, row.clone());
        Ok(row)
    }

    // == Create ==
    /// Stores a new record; the collection listing is invalidated and the
    /// fresh record is cached under its id key.
    pub async fn create(&self, row: T) -> T {
        let saved = self.repo.insert(row).await;

        let mut cache = self.cache.write().await;
        cache.remove(&Self::collection_key());
        cache.put(Self::record_key(saved.id()), saved.clone());
        saved
    }

    // == Update ==
    /// Replaces an existing record, refreshing its cached copy and
    /// invalidating the collection listing.
    pub async fn update(&self, id: u64, row: T) -> Result<T> {
        let updated = self
            .repo
            .update(id, row)
            .await
            .ok_or_else(|| BookingError::NotFound(format!("{} {} not found", T::KIND, id)))?;

        let mut cache = self.cache.write().await;
        cache.put(Self::record_key(id), updated.clone());
        cache.remove(&Self::collection_key());
        Ok(updated)
    }

    // == Delete ==
    /// Removes a record along with both of its cache keys.
    pub async fn delete(&self, id: u64) -> Result<()> {
        if !self.repo.delete(id).await {
            return Err(BookingError::NotFound(format!(
                "{} {} not found",
                T::KIND,
                id
            )));
        }

        let mut cache = self.cache.write().await;
        cache.remove(&Self::record_key(id));
        cache.remove(&Self::collection_key());
        Ok(())
    }
}
