//! Integration tests for spai-ie API endpoints
//!
//! Tests cover:
//! - Marketing propensity boundary at exactly 100 history items
//! - Logistics provider selection by zip first character
//! - Idempotence of both endpoints
//! - Malformed payloads rejected at deserialization

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{json, Value};
use tower::util::ServiceExt; // for `oneshot` method

use spai_ie::build_router;

/// Test helper: Build a POST request with a JSON body
fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Test helper: Extract JSON body from response
async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

/// Test helper: UserData payload with a history of the given length
fn user_payload(history_len: usize) -> Value {
    let history: Vec<String> = (0..history_len).map(|i| format!("track_{}", i)).collect();
    json!({
        "user_id": "user_001",
        "listening_history": history,
        "demographics": {"country": "ES", "age": 34, "premium_trial": false}
    })
}

/// Test helper: OrderRequest payload for the given zip
fn order_payload(zip: &str) -> Value {
    json!({
        "order_id": "order_777",
        "destination_zip": zip,
        "product_type": "Vinyl POD"
    })
}

// =============================================================================
// Health Endpoint
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let app = build_router();

    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "spai-ie");
    assert!(body["version"].is_string());
}

// =============================================================================
// Marketing Prediction
// =============================================================================

#[tokio::test]
async fn test_long_history_marks_high_value_buyer() {
    let app = build_router();

    let response = app
        .oneshot(post_json("/marketing/predict_propensity", user_payload(101)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["user_id"], "user_001");
    assert_eq!(body["propensity_to_subscribe"], 0.85);
    assert_eq!(body["ad_segment"], "High_Value_Vinyl_Buyer");
}

#[tokio::test]
async fn test_history_of_exactly_100_is_general_audience() {
    let app = build_router();

    let response = app
        .oneshot(post_json("/marketing/predict_propensity", user_payload(100)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["propensity_to_subscribe"], 0.30);
    assert_eq!(body["ad_segment"], "General_Audience");
}

#[tokio::test]
async fn test_open_ended_demographics_accepted() {
    let app = build_router();

    // Arbitrary value types must pass deserialization untouched
    let payload = json!({
        "user_id": "user_002",
        "listening_history": [],
        "demographics": {"nested": {"a": [1, 2, 3]}, "note": null}
    });

    let response = app
        .oneshot(post_json("/marketing/predict_propensity", payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_marketing_missing_field_rejected() {
    let app = build_router();

    let payload = json!({"user_id": "user_003", "demographics": {}});
    let response = app
        .oneshot(post_json("/marketing/predict_propensity", payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_marketing_prediction_is_idempotent() {
    let payload = user_payload(42);

    let mut bodies = Vec::new();
    for _ in 0..3 {
        let app = build_router();
        let response = app
            .oneshot(post_json("/marketing/predict_propensity", payload.clone()))
            .await
            .unwrap();
        bodies.push(extract_json(response.into_body()).await);
    }

    assert_eq!(bodies[0], bodies[1]);
    assert_eq!(bodies[1], bodies[2]);
}

// =============================================================================
// Logistics Optimization
// =============================================================================

#[tokio::test]
async fn test_west_coast_zip_selects_west_coast_provider() {
    let app = build_router();

    let response = app
        .oneshot(post_json("/logistics/optimize_order", order_payload("90210")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["order_id"], "order_777");
    assert_eq!(body["selected_provider"], "Provider_WestCoast_Optimized");
    assert_eq!(body["estimated_delivery_eta"], "2 days");
}

#[tokio::test]
async fn test_other_zip_selects_global_provider() {
    let app = build_router();

    let response = app
        .oneshot(post_json("/logistics/optimize_order", order_payload("10001")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["selected_provider"], "Provider_Global_Standard");
    assert_eq!(body["estimated_delivery_eta"], "4-7 days");
}

#[tokio::test]
async fn test_empty_zip_selects_global_provider() {
    let app = build_router();

    let response = app
        .oneshot(post_json("/logistics/optimize_order", order_payload("")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["selected_provider"], "Provider_Global_Standard");
}

#[tokio::test]
async fn test_logistics_optimization_is_idempotent() {
    let payload = order_payload("94110");

    let mut bodies = Vec::new();
    for _ in 0..3 {
        let app = build_router();
        let response = app
            .oneshot(post_json("/logistics/optimize_order", payload.clone()))
            .await
            .unwrap();
        bodies.push(extract_json(response.into_body()).await);
    }

    assert_eq!(bodies[0], bodies[1]);
    assert_eq!(bodies[1], bodies[2]);
}
