//! Booking Server - backend of a booking application
//!
//! CRUD services for staff, locations, offerings and accounts, memoized
//! through a bounded in-memory lookup cache with LRU eviction and TTL
//! expiry.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod service;
pub mod tasks;
pub mod visits;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_cleanup_task;
