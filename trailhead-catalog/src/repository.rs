use async_trait::async_trait;

use crate::trip::{Trip, TripId};
use crate::CatalogResult;

/// Repository trait for trip catalog access. Implemented by the fixture
/// catalog here and by out-of-process providers elsewhere.
#[async_trait]
pub trait TripRepository: Send + Sync {
    /// Fetch the full catalog, in provider order.
    async fn fetch_all_trips(&self) -> CatalogResult<Vec<Trip>>;

    /// Fetch one trip by identifier.
    async fn fetch_trip(&self, id: TripId) -> CatalogResult<Trip>;
}
