pub mod cache;
pub mod fixture;
pub mod repository;
pub mod trip;

pub use cache::CatalogCache;
pub use fixture::FixtureCatalog;
pub use repository::TripRepository;
pub use trip::{Difficulty, GroupSize, Season, Trip, TripId};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Trip not found: {0}")]
    NotFound(TripId),
    #[error("Catalog provider unreachable: {0}")]
    Network(String),
    #[error("Catalog provider error: {0}")]
    Server(String),
    #[error("Invalid trip record: {0}")]
    InvalidRecord(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
