use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use crate::repository::TripRepository;
use crate::trip::{Trip, TripId};
use crate::CatalogResult;

/// Snapshot cache in front of a [`TripRepository`].
///
/// Each refresh takes a generation token before fetching; a fetch that
/// completes after a newer refresh has started is discarded, so the
/// snapshot always reflects the latest request (last-request-wins).
pub struct CatalogCache {
    inner: Arc<dyn TripRepository>,
    snapshot: RwLock<Arc<Vec<Trip>>>,
    generation: AtomicU64,
}

impl CatalogCache {
    pub fn new(inner: Arc<dyn TripRepository>) -> Self {
        Self {
            inner,
            snapshot: RwLock::new(Arc::new(Vec::new())),
            generation: AtomicU64::new(0),
        }
    }

    /// Re-fetch the catalog and replace the snapshot, unless a newer
    /// refresh started while this one was in flight.
    pub async fn refresh(&self) -> CatalogResult<()> {
        let token = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let trips = self.inner.fetch_all_trips().await?;

        if self.generation.load(Ordering::SeqCst) != token {
            debug!(token, "discarding stale catalog refresh");
            return Ok(());
        }

        let mut guard = self.snapshot.write().await;
        // Re-check under the write lock: a newer refresh may have won
        // the race between the load above and lock acquisition.
        if self.generation.load(Ordering::SeqCst) == token {
            *guard = Arc::new(trips);
        }
        Ok(())
    }

    /// Current catalog snapshot, in provider order. Cheap to clone.
    pub async fn snapshot(&self) -> Arc<Vec<Trip>> {
        self.snapshot.read().await.clone()
    }

    /// Single-trip lookup. Served from the snapshot when possible,
    /// otherwise delegated to the provider.
    pub async fn fetch_trip(&self, id: TripId) -> CatalogResult<Trip> {
        if let Some(trip) = self.snapshot.read().await.iter().find(|t| t.id == id) {
            return Ok(trip.clone());
        }
        self.inner.fetch_trip(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::FixtureCatalog;
    use crate::CatalogError;
    use async_trait::async_trait;
    use std::sync::atomic::AtomicUsize;

    #[tokio::test]
    async fn refresh_populates_snapshot() {
        let cache = CatalogCache::new(Arc::new(FixtureCatalog::seeded()));
        assert!(cache.snapshot().await.is_empty());

        cache.refresh().await.unwrap();
        assert_eq!(cache.snapshot().await.len(), 8);
    }

    #[tokio::test]
    async fn lookup_falls_through_on_cold_cache() {
        let cache = CatalogCache::new(Arc::new(FixtureCatalog::seeded()));
        let trip = cache.fetch_trip(3).await.unwrap();
        assert_eq!(trip.name, "Kerala Backpacking");
    }

    /// Repository whose fetch blocks until released, to stage an
    /// overlapping pair of refreshes.
    struct GatedRepo {
        gate: tokio::sync::Semaphore,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl TripRepository for GatedRepo {
        async fn fetch_all_trips(&self) -> CatalogResult<Vec<Trip>> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            let _permit = self.gate.acquire().await.unwrap();
            let mut trips = FixtureCatalog::seeded().fetch_all_trips().await?;
            if call == 0 {
                // First (stale) response: a truncated catalog.
                trips.truncate(1);
            }
            Ok(trips)
        }

        async fn fetch_trip(&self, id: TripId) -> CatalogResult<Trip> {
            Err(CatalogError::NotFound(id))
        }
    }

    #[tokio::test]
    async fn stale_refresh_is_discarded() {
        let repo = Arc::new(GatedRepo {
            gate: tokio::sync::Semaphore::new(0),
            calls: AtomicUsize::new(0),
        });
        let cache = Arc::new(CatalogCache::new(repo.clone()));

        let first = tokio::spawn({
            let cache = cache.clone();
            async move { cache.refresh().await }
        });
        // Make sure the first refresh has taken its token before the
        // second one starts.
        tokio::task::yield_now().await;
        let second = tokio::spawn({
            let cache = cache.clone();
            async move { cache.refresh().await }
        });
        tokio::task::yield_now().await;

        // Release both fetches; the second refresh holds the newest
        // token, so the first (truncated) response must be dropped.
        repo.gate.add_permits(2);
        first.await.unwrap().unwrap();
        second.await.unwrap().unwrap();

        assert_eq!(cache.snapshot().await.len(), 8);
    }
}
