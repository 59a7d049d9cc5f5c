//! Account endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use super::AppState;
use crate::error::{BookingError, Result};
use crate::models::{Account, AccountPayload};

/// Routes under `/accounts`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/accounts", get(list_accounts).post(create_account))
        .route(
            "/accounts/:id",
            get(get_account).put(update_account).delete(delete_account),
        )
}

async fn list_accounts(State(state): State<AppState>) -> Json<Vec<Account>> {
    Json(state.accounts.find_all().await)
}

async fn get_account(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Account>> {
    Ok(Json(state.accounts.find_by_id(id).await?))
}

async fn create_account(
    State(state): State<AppState>,
    Json(payload): Json<AccountPayload>,
) -> Result<(StatusCode, Json<Account>)> {
    if let Some(error_msg) = payload.validate() {
        return Err(BookingError::InvalidRequest(error_msg));
    }

    let saved = state.accounts.create(payload.into_account(0)).await;
    Ok((StatusCode::CREATED, Json(saved)))
}

async fn update_account(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(payload): Json<AccountPayload>,
) -> Result<Json<Account>> {
    if let Some(error_msg) = payload.validate() {
        return Err(BookingError::InvalidRequest(error_msg));
    }

    Ok(Json(
        state.accounts.update(id, payload.into_account(id)).await?,
    ))
}

async fn delete_account(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode> {
    state.accounts.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
