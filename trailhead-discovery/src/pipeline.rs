use serde::{Deserialize, Serialize};
use tracing::debug;
use trailhead_catalog::Trip;

use crate::filter::FilterCriteria;
use crate::search;
use crate::sort::{self, SortKey};

/// One discovery query: free-text search, filter panel state, and the
/// selected sort order. All fields default to "no constraint".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryRequest {
    pub search_query: String,
    pub filters: FilterCriteria,
    pub sort_key: SortKey,
}

/// Run the discovery pipeline over a catalog snapshot.
///
/// Stages run search → filter → sort. Search and filter preserve
/// catalog order, the sort is stable, and the whole computation is a
/// pure function of its inputs: the same snapshot and request always
/// produce the same result.
pub fn discover(catalog: &[Trip], request: &DiscoveryRequest) -> Vec<Trip> {
    let criteria = request.filters.normalized();

    let mut results: Vec<Trip> = catalog
        .iter()
        .filter(|trip| search::matches(trip, &request.search_query))
        .filter(|trip| criteria.accepts(trip))
        .cloned()
        .collect();

    results.sort_by(|a, b| sort::compare(a, b, request.sort_key));

    debug!(
        candidates = catalog.len(),
        matched = results.len(),
        sort_key = ?request.sort_key,
        "discovery pipeline run"
    );
    results
}
