//! Staff endpoints
//!
//! CRUD routes for staff members, backed by the cache-aside service.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use super::AppState;
use crate::error::{BookingError, Result};
use crate::models::{Staff, StaffPayload};

/// Routes under `/staff`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/staff", get(list_staff).post(create_staff))
        .route(
            "/staff/:id",
            get(get_staff).put(update_staff).delete(delete_staff),
        )
}

/// Handler for GET /staff
async fn list_staff(State(state): State<AppState>) -> Json<Vec<Staff>> {
    Json(state.staff.find_all().await)
}

/// Handler for GET /staff/:id
async fn get_staff(State(state): State<AppState>, Path(id): Path<u64>) -> Result<Json<Staff>> {
    Ok(Json(state.staff.find_by_id(id).await?))
}

/// Handler for POST /staff
async fn create_staff(
    State(state): State<AppState>,
    Json(payload): Json<StaffPayload>,
) -> Result<(StatusCode, Json<Staff>)> {
    if let Some(error_msg) = payload.validate() {
        return Err(BookingError::InvalidRequest(error_msg));
    }

    let saved = state.staff.create(payload.into_staff(0)).await;
    Ok((StatusCode::CREATED, Json(saved)))
}

/// Handler for PUT /staff/:id
async fn update_staff(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(payload): Json<StaffPayload>,
) -> Result<Json<Staff>> {
    if let Some(error_msg) = payload.validate() {
        return Err(BookingError::InvalidRequest(error_msg));
    }

    Ok(Json(state.staff.update(id, payload.into_staff(id)).await?))
}

/// Handler for DELETE /staff/:id
async fn delete_staff(State(state): State<AppState>, Path(id): Path<u64>) -> Result<StatusCode> {
    state.staff.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CacheStore;
    use chrono::NaiveTime;
    use std::time::Duration;

    fn test_state() -> AppState {
        AppState::new(CacheStore::new(100, Some(Duration::from_secs(60))).unwrap())
    }

    fn payload(name: &str) -> StaffPayload {
        StaffPayload {
            name: name.to_string(),
            workdays: vec!["MONDAY".to_string()],
            starts_at: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            ends_at: NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_create_and_get_staff() {
        let state = test_state();

        let (status, Json(saved)) =
            create_staff(State(state.clone()), Json(payload("Ana")))
                .await
                .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(saved.id, 1);

        let Json(found) = get_staff(State(state), Path(1)).await.unwrap();
        assert_eq!(found.name, "Ana");
    }

    #[tokio::test]
    async fn test_get_missing_staff() {
        let state = test_state();
        let result = get_staff(State(state), Path(42)).await;
        assert!(matches!(result, Err(BookingError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_create_staff_rejects_invalid_payload() {
        let state = test_state();

        let result = create_staff(State(state), Json(payload(""))).await;
        assert!(matches!(result, Err(BookingError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_update_and_delete_staff() {
        let state = test_state();
        create_staff(State(state.clone()), Json(payload("Ana")))
            .await
            .unwrap();

        let Json(updated) = update_staff(State(state.clone()), Path(1), Json(payload("Ana B.")))
            .await
            .unwrap();
        assert_eq!(updated.name, "Ana B.");

        let status = delete_staff(State(state.clone()), Path(1)).await.unwrap();
        assert_eq!(status, StatusCode::NO_CONTENT);

        let result = get_staff(State(state), Path(1)).await;
        assert!(matches!(result, Err(BookingError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_list_staff_reflects_writes() {
        let state = test_state();
        assert!(list_staff(State(state.clone())).await.0.is_empty());

        create_staff(State(state.clone()), Json(payload("Ana")))
            .await
            .unwrap();
        create_staff(State(state.clone()), Json(payload("Bo")))
            .await
            .unwrap();

        let Json(all) = list_staff(State(state)).await;
        assert_eq!(all.len(), 2);
    }
}
