use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;
use trailhead_api::{app, AppState};
use trailhead_booking::{MemorySubmitter, PricingConfig};
use trailhead_catalog::{CatalogCache, FixtureCatalog};

async fn test_app() -> Router {
    let catalog = Arc::new(CatalogCache::new(Arc::new(FixtureCatalog::seeded())));
    catalog.refresh().await.unwrap();
    app(AppState {
        catalog,
        submitter: Arc::new(MemorySubmitter::new()),
        pricing: PricingConfig::default(),
    })
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn health_is_ok() {
    let app = test_app().await;
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn list_trips_returns_full_snapshot() {
    let app = test_app().await;
    let response = app
        .oneshot(Request::builder().uri("/v1/trips").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let trips = body_json(response).await;
    assert_eq!(trips.as_array().unwrap().len(), 8);
    assert_eq!(trips[0]["name"], "Winter Spiti Valley");
}

#[tokio::test]
async fn search_filters_and_sorts() {
    let app = test_app().await;
    let request = post_json(
        "/v1/trips/search",
        json!({
            "filters": { "price_range": { "min": 0, "max": 25000 } },
            "sort_key": "price-asc"
        }),
    );
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let trips = body_json(response).await;
    let prices: Vec<i64> = trips
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["price"].as_i64().unwrap())
        .collect();
    assert_eq!(prices, vec![5950, 9800, 12450, 16650, 18900, 21150]);
}

#[tokio::test]
async fn search_query_narrows_results() {
    let app = test_app().await;
    let request = post_json("/v1/trips/search", json!({ "search_query": "spiti" }));
    let response = app.oneshot(request).await.unwrap();

    let trips = body_json(response).await;
    assert_eq!(trips.as_array().unwrap().len(), 1);
    assert_eq!(trips[0]["name"], "Winter Spiti Valley");
}

#[tokio::test]
async fn malformed_search_body_is_a_client_error() {
    let app = test_app().await;
    let request = post_json(
        "/v1/trips/search",
        json!({ "filters": { "price_range": { "min": "cheap", "max": 25000 } } }),
    );
    let response = app.oneshot(request).await.unwrap();
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn get_trip_by_id() {
    let app = test_app().await;
    let response = app
        .oneshot(Request::builder().uri("/v1/trips/2").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let trip = body_json(response).await;
    assert_eq!(trip["name"], "Leh Ladakh Adventure");
    assert_eq!(trip["price"], 34650);
}

#[tokio::test]
async fn unknown_trip_is_404() {
    let app = test_app().await;
    let response = app
        .oneshot(Request::builder().uri("/v1/trips/999").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

fn traveler(name: &str, age: u32) -> Value {
    json!({
        "full_name": name,
        "age": age,
        "phone": "+91 98765 43210",
        "email": "traveler@example.com"
    })
}

#[tokio::test]
async fn booking_two_travelers_totals_44915() {
    let app = test_app().await;
    let request = post_json(
        "/v1/bookings",
        json!({
            "trip_id": 1,
            "travelers": [traveler("Asha Rao", 27), traveler("Ravi Rao", 30)],
            "payment_method": "upi",
            "terms_accepted": true
        }),
    );
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["pricing"]["subtotal"], 42300);
    assert_eq!(body["pricing"]["service_fee"], 500);
    assert_eq!(body["pricing"]["gst"], 2115);
    assert_eq!(body["pricing"]["total"], 44915);
    assert_eq!(body["confirmation"]["trip_id"], 1);
    assert_eq!(body["confirmation"]["total"], 44915);
    assert!(body["confirmation"]["id"].as_str().is_some());
}

#[tokio::test]
async fn booking_with_missing_fields_is_unprocessable() {
    let app = test_app().await;
    let request = post_json(
        "/v1/bookings",
        json!({
            "trip_id": 1,
            "travelers": [ { "full_name": "Asha Rao" } ],
            "terms_accepted": true
        }),
    );
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;
    assert_eq!(body["error"], "validation failed");
    assert!(body["details"]["travelers"]["0"].is_array());
}

#[tokio::test]
async fn booking_eleven_travelers_is_unprocessable() {
    let app = test_app().await;
    let travelers: Vec<Value> = (0..11u32).map(|i| traveler("Asha Rao", 20 + i)).collect();
    let request = post_json(
        "/v1/bookings",
        json!({
            "trip_id": 1,
            "travelers": travelers,
            "terms_accepted": true
        }),
    );
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;
    assert_eq!(body["error"], "validation failed");
    assert!(body["details"]["slots"].as_str().is_some());
}

#[tokio::test]
async fn booking_without_terms_is_unprocessable() {
    let app = test_app().await;
    let request = post_json(
        "/v1/bookings",
        json!({
            "trip_id": 1,
            "travelers": [traveler("Asha Rao", 27)],
            "terms_accepted": false
        }),
    );
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;
    assert_eq!(body["details"]["terms"], "Please accept terms");
}

#[tokio::test]
async fn booking_unknown_trip_is_404() {
    let app = test_app().await;
    let request = post_json(
        "/v1/bookings",
        json!({
            "trip_id": 999,
            "travelers": [traveler("Asha Rao", 27)],
            "terms_accepted": true
        }),
    );
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
