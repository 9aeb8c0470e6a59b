use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use tracing::info;
use trailhead_catalog::{Trip, TripId};
use trailhead_discovery::{discover, DiscoveryRequest};

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/trips", get(list_trips))
        .route("/v1/trips/search", post(search_trips))
        .route("/v1/trips/{id}", get(get_trip))
}

async fn list_trips(State(state): State<AppState>) -> Result<Json<Vec<Trip>>, AppError> {
    let snapshot = state.catalog.snapshot().await;
    Ok(Json(snapshot.as_ref().clone()))
}

async fn search_trips(
    State(state): State<AppState>,
    Json(request): Json<DiscoveryRequest>,
) -> Result<Json<Vec<Trip>>, AppError> {
    let snapshot = state.catalog.snapshot().await;
    let results = discover(&snapshot, &request);
    info!(
        query = %request.search_query,
        matched = results.len(),
        "trip search"
    );
    Ok(Json(results))
}

async fn get_trip(
    State(state): State<AppState>,
    Path(id): Path<TripId>,
) -> Result<Json<Trip>, AppError> {
    let trip = state
        .catalog
        .fetch_trip(id)
        .await
        .map_err(AppError::from_catalog)?;
    Ok(Json(trip))
}
