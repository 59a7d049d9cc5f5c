//! Integration Tests for API Endpoints
//!
//! Drives the full router in-process: CRUD round trips per domain, error
//! bodies, cache statistics movement, visit totals and health.

use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use booking_server::{api::create_router, cache::CacheStore, AppState};
use serde_json::{json, Value};
use tower::util::ServiceExt;

// == Helper Functions ==

fn create_test_app() -> Router {
    let store = CacheStore::new(100, Some(Duration::from_secs(60))).unwrap();
    create_router(AppState::new(store))
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn staff_body(name: &str) -> Value {
    json!({
        "name": name,
        "workdays": ["MONDAY", "FRIDAY"],
        "starts_at": "08:00:00",
        "ends_at": "19:00:00"
    })
}

// == Staff CRUD ==

#[tokio::test]
async fn test_staff_create_and_get() {
    let app = create_test_app();

    let response = app
        .clone()
        .oneshot(json_request("POST", "/staff", staff_body("Ana")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = body_to_json(response.into_body()).await;
    assert_eq!(created["id"].as_u64().unwrap(), 1);
    assert_eq!(created["name"].as_str().unwrap(), "Ana");

    let response = app.oneshot(get_request("/staff/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let fetched = body_to_json(response.into_body()).await;
    assert_eq!(fetched["name"].as_str().unwrap(), "Ana");
}

#[tokio::test]
async fn test_staff_list_reflects_writes() {
    let app = create_test_app();

    let response = app.clone().oneshot(get_request("/staff")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_to_json(response.into_body()).await, json!([]));

    for name in ["Ana", "Bo"] {
        let response = app
            .clone()
            .oneshot(json_request("POST", "/staff", staff_body(name)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app.oneshot(get_request("/staff")).await.unwrap();
    let listed = body_to_json(response.into_body()).await;
    assert_eq!(listed.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_staff_update() {
    let app = create_test_app();

    app.clone()
        .oneshot(json_request("POST", "/staff", staff_body("Ana")))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(json_request("PUT", "/staff/1", staff_body("Ana B.")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(get_request("/staff/1")).await.unwrap();
    let fetched = body_to_json(response.into_body()).await;
    assert_eq!(fetched["name"].as_str().unwrap(), "Ana B.");
}

#[tokio::test]
async fn test_staff_delete() {
    let app = create_test_app();

    app.clone()
        .oneshot(json_request("POST", "/staff", staff_body("Ana")))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/staff/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.oneshot(get_request("/staff/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// == Error Responses ==

#[tokio::test]
async fn test_get_missing_staff_is_404_with_error_body() {
    let app = create_test_app();

    let response = app.oneshot(get_request("/staff/999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_to_json(response.into_body()).await;
    assert!(body["error"].as_str().unwrap().contains("staff 999"));
}

#[tokio::test]
async fn test_invalid_payload_is_400_with_error_body() {
    let app = create_test_app();

    let response = app
        .oneshot(json_request("POST", "/staff", staff_body("")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_to_json(response.into_body()).await;
    assert!(body.get("error").is_some());
}

#[tokio::test]
async fn test_malformed_json_rejected() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/staff")
                .header("content-type", "application/json")
                .body(Body::from("{\"broken"))
                .unwrap(),
        )
        .await
        .unwrap();

    // Axum rejects unparseable JSON before the handler runs.
    assert!(
        response.status() == StatusCode::BAD_REQUEST
            || response.status() == StatusCode::UNPROCESSABLE_ENTITY
    );
}

#[tokio::test]
async fn test_update_missing_location_is_404() {
    let app = create_test_app();

    let response = app
        .oneshot(json_request(
            "PUT",
            "/locations/42",
            json!({"name": "Downtown", "address": "1 Main St"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// == Other Domains ==

#[tokio::test]
async fn test_location_round_trip() {
    let app = create_test_app();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/locations",
            json!({"name": "Downtown", "address": "1 Main St", "phone": "555-0100"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app.oneshot(get_request("/locations/1")).await.unwrap();
    let fetched = body_to_json(response.into_body()).await;
    assert_eq!(fetched["address"].as_str().unwrap(), "1 Main St");
}

#[tokio::test]
async fn test_offering_round_trip_and_validation() {
    let app = create_test_app();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/offerings",
            json!({"name": "Haircut", "duration_minutes": 30, "price": 25.0}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/offerings",
            json!({"name": "Free lunch", "duration_minutes": 0, "price": 0.0}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app.oneshot(get_request("/offerings")).await.unwrap();
    let listed = body_to_json(response.into_body()).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_account_round_trip() {
    let app = create_test_app();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/accounts",
            json!({"username": "jdoe", "email": "jdoe@example.com", "display_name": "J. Doe"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app.oneshot(get_request("/accounts/1")).await.unwrap();
    let fetched = body_to_json(response.into_body()).await;
    assert_eq!(fetched["username"].as_str().unwrap(), "jdoe");
}

// == Cache Statistics ==

#[tokio::test]
async fn test_cache_stats_move_with_traffic() {
    let app = create_test_app();

    app.clone()
        .oneshot(json_request("POST", "/staff", staff_body("Ana")))
        .await
        .unwrap();

    // First listing misses and populates; second listing hits.
    app.clone().oneshot(get_request("/staff")).await.unwrap();
    app.clone().oneshot(get_request("/staff")).await.unwrap();

    let response = app.oneshot(get_request("/cache/stats")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let stats = body_to_json(response.into_body()).await;
    assert!(stats["hits"].as_u64().unwrap() >= 1);
    assert!(stats["misses"].as_u64().unwrap() >= 1);
    assert!(stats["resident_entries"].as_u64().unwrap() >= 1);
    assert!(stats.get("hit_rate").is_some());
    assert!(stats.get("evictions").is_some());
    assert!(stats.get("expired").is_some());
}

#[tokio::test]
async fn test_cache_clear_resets_residency() {
    let app = create_test_app();

    app.clone()
        .oneshot(json_request("POST", "/staff", staff_body("Ana")))
        .await
        .unwrap();
    app.clone().oneshot(get_request("/staff")).await.unwrap();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/cache/clear")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .clone()
        .oneshot(get_request("/cache/stats"))
        .await
        .unwrap();
    let stats = body_to_json(response.into_body()).await;
    assert_eq!(stats["resident_entries"].as_u64().unwrap(), 0);

    // The data itself survives in the repositories.
    let response = app.oneshot(get_request("/staff/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

// == Visits ==

#[tokio::test]
async fn test_visits_counted_per_path() {
    let app = create_test_app();

    app.clone().oneshot(get_request("/staff")).await.unwrap();
    app.clone().oneshot(get_request("/staff")).await.unwrap();
    app.clone().oneshot(get_request("/health")).await.unwrap();

    let response = app.oneshot(get_request("/visits")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let visits = body_to_json(response.into_body()).await;
    assert_eq!(visits["/staff"].as_u64().unwrap(), 2);
    assert_eq!(visits["/health"].as_u64().unwrap(), 1);
}

// == Health ==

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app();

    let response = app.oneshot(get_request("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_to_json(response.into_body()).await;
    assert_eq!(body["status"].as_str().unwrap(), "healthy");
    assert!(body.get("timestamp").is_some());
}
