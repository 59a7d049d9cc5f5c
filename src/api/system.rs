//! System endpoints
//!
//! Cache administration (stats, clear), per-path visit totals and the
//! health check.

use std::collections::HashMap;

use axum::{extract::State, http::StatusCode, routing::get, routing::post, Json, Router};
use serde::Serialize;

use super::AppState;
use crate::cache::CacheStats;

/// System routes (`/cache/*`, `/visits`, `/health`).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/cache/stats", get(cache_stats))
        .route("/cache/clear", post(clear_cache))
        .route("/visits", get(visit_totals))
        .route("/health", get(health))
}

// == Stats Response ==
/// Body for GET /cache/stats.
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub expired: u64,
    pub resident_entries: usize,
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            expired: stats.expired,
            resident_entries: stats.resident_entries,
            hit_rate: stats.hit_rate(),
        }
    }
}

// == Health Response ==
/// Body for GET /health.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Handler for GET /cache/stats
///
/// Sweeps expired entries first so the resident count reflects live data.
async fn cache_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let mut cache = state.cache.write().await;
    cache.size();
    Json(StatsResponse::from(cache.stats()))
}

/// Handler for POST /cache/clear
async fn clear_cache(State(state): State<AppState>) -> StatusCode {
    state.cache.write().await.clear();
    StatusCode::NO_CONTENT
}

/// Handler for GET /visits
async fn visit_totals(State(state): State<AppState>) -> Json<HashMap<String, u64>> {
    Json(state.visits.snapshot().await)
}

/// Handler for GET /health
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
