use std::net::SocketAddr;
use std::sync::Arc;

use trailhead_api::{app, app_config::Config, AppState};
use trailhead_booking::MemorySubmitter;
use trailhead_catalog::{CatalogCache, FixtureCatalog, TripRepository};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trailhead_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().expect("Failed to load config");
    tracing::info!("Starting Trailhead API on port {}", config.server.port);

    let repository: Arc<dyn TripRepository> = match config.catalog.source.as_str() {
        "fixture" => Arc::new(FixtureCatalog::seeded()),
        other => panic!("Unsupported catalog source: {other}"),
    };

    let catalog = Arc::new(CatalogCache::new(repository));
    catalog
        .refresh()
        .await
        .expect("Failed to load initial catalog snapshot");

    let state = AppState {
        catalog,
        submitter: Arc::new(MemorySubmitter::new()),
        pricing: config.pricing.clone().into(),
    };

    let app = app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
