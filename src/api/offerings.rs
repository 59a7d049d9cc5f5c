//! Offering endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use super::AppState;
use crate::error::{BookingError, Result};
use crate::models::{Offering, OfferingPayload};

/// Routes under `/offerings`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/offerings", get(list_offerings).post(create_offering))
        .route(
            "/offerings/:id",
            get(get_offering).put(update_offering).delete(delete_offering),
        )
}

async fn list_offerings(State(state): State<AppState>) -> Json<Vec<Offering>> {
    Json(state.offerings.find_all().await)
}

async fn get_offering(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Offering>> {
    Ok(Json(state.offerings.find_by_id(id).await?))
}

async fn create_offering(
    State(state): State<AppState>,
    Json(payload): Json<OfferingPayload>,
) -> Result<(StatusCode, Json<Offering>)> {
    if let Some(error_msg) = payload.validate() {
        return Err(BookingError::InvalidRequest(error_msg));
    }

    let saved = state.offerings.create(payload.into_offering(0)).await;
    Ok((StatusCode::CREATED, Json(saved)))
}

async fn update_offering(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(payload): Json<OfferingPayload>,
) -> Result<Json<Offering>> {
    if let Some(error_msg) = payload.validate() {
        return Err(BookingError::InvalidRequest(error_msg));
    }

    Ok(Json(
        state.offerings.update(id, payload.into_offering(id)).await?,
    ))
}

async fn delete_offering(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode> {
    state.offerings.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
