//! Location endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use super::AppState;
use crate::error::{BookingError, Result};
use crate::models::{Location, LocationPayload};

/// Routes under `/locations`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/locations", get(list_locations).post(create_location))
        .route(
            "/locations/:id",
            get(get_location).put(update_location).delete(delete_location),
        )
}

async fn list_locations(State(state): State<AppState>) -> Json<Vec<Location>> {
    Json(state.locations.find_all().await)
}

async fn get_location(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Location>> {
    Ok(Json(state.locations.find_by_id(id).await?))
}

async fn create_location(
    State(state): State<AppState>,
    Json(payload): Json<LocationPayload>,
) -> Result<(StatusCode, Json<Location>)> {
    if let Some(error_msg) = payload.validate() {
        return Err(BookingError::InvalidRequest(error_msg));
    }

    let saved = state.locations.create(payload.into_location(0)).await;
    Ok((StatusCode::CREATED, Json(saved)))
}

async fn update_location(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(payload): Json<LocationPayload>,
) -> Result<Json<Location>> {
    if let Some(error_msg) = payload.validate() {
        return Err(BookingError::InvalidRequest(error_msg));
    }

    Ok(Json(
        state.locations.update(id, payload.into_location(id)).await?,
    ))
}

async fn delete_location(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode> {
    state.locations.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
