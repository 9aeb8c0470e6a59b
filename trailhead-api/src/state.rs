use std::sync::Arc;

use trailhead_booking::{BookingSubmitter, PricingConfig};
use trailhead_catalog::CatalogCache;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogCache>,
    pub submitter: Arc<dyn BookingSubmitter>,
    pub pricing: PricingConfig,
}
