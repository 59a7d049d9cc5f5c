//! API Routes
//!
//! Configures the axum router with every endpoint and the middleware
//! stack (visit counting, CORS, request tracing).

use axum::{
    extract::{Request, State},
    middleware::{self, Next},
    response::Response,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::{accounts, locations, offerings, staff, system, AppState};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - CRUD per domain: `/staff`, `/locations`, `/offerings`, `/accounts`
///   (collection: GET + POST; record: GET + PUT + DELETE)
/// - `GET /cache/stats`, `POST /cache/clear` - cache administration
/// - `GET /visits` - per-path request totals
/// - `GET /health` - health check
///
/// # Middleware
/// - Visit counter: records every request path
/// - CORS: allows any origin (configurable for production)
/// - Tracing: logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(staff::routes())
        .merge(locations::routes())
        .merge(offerings::routes())
        .merge(accounts::routes())
        .merge(system::routes())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            track_visits,
        ))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Counts the request path before handing off to the matched handler.
async fn track_visits(State(state): State<AppState>, request: Request, next: Next) -> Response {
    state.visits.record(request.uri().path()).await;
    next.run(request).await
}
