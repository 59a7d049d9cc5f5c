//! Repository Module
//!
//! In-memory record stores standing in for the relational persistence
//! layer. The services consume the same lookup surface they would use
//! against a database; nothing here survives a restart.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::RwLock;

use crate::models::Entity;

// == In-Memory Repository ==
/// Id-keyed record store for one domain.
#[derive(Debug, Default)]
pub struct InMemoryRepository<T: Entity> {
    rows: RwLock<HashMap<u64, T>>,
    next_id: AtomicU64,
}

impl<T: Entity> InMemoryRepository<T> {
    /// Creates an empty repository; ids start at 1.
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    // == Insert ==
    /// Stores a new record, assigning it the next free id.
    pub async fn insert(&self, mut row: T) -> T {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        row.set_id(id);
        self.rows.write().await.insert(id, row.clone());
        row
    }

    // == Update ==
    /// Replaces the record with the given id.
    ///
    /// Returns `None` if no such record exists; the row keeps the id it is
    /// stored under regardless of what the replacement carries.
    pub async fn update(&self, id: u64, mut row: T) -> Option<T> {
        let mut rows = self.rows.write().await;
        if !rows.contains_key(&id) {
            return None;
        }
        row.set_id(id);
        rows.insert(id, row.clone());
        Some(row)
    }

    // == Find By Id ==
    pub async fn find_by_id(&self, id: u64) -> Option<T> {
        self.rows.read().await.get(&id).cloned()
    }

    // == Find All ==
    /// Returns every record, ordered by id for stable listings.
    pub async fn find_all(&self) -> Vec<T> {
        let rows = self.rows.read().await;
        let mut all: Vec<T> = rows.values().cloned().collect();
        all.sort_by_key(|row| row.id());
        all
    }

    // == Delete ==
    /// Removes the record with the given id. Returns whether it existed.
    pub async fn delete(&self, id: u64) -> bool {
        self.rows.write().await.remove(&id).is_some()
    }

    // == Length ==
    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}
