use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use trailhead_catalog::Trip;

/// Listing sort order. "recommended" ranks by rating, breaking ties on
/// review count, so well-reviewed trips surface first.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Recommended,
    PriceAsc,
    PriceDesc,
    RatingAsc,
    RatingDesc,
    DurationAsc,
    DurationDesc,
    NameAsc,
    NameDesc,
}

/// Compare two trips under a sort key. Used with the standard library's
/// stable `sort_by`, so equal keys keep their post-filter order.
pub fn compare(a: &Trip, b: &Trip, key: SortKey) -> Ordering {
    match key {
        SortKey::Recommended => b
            .rating
            .total_cmp(&a.rating)
            .then_with(|| b.review_count.cmp(&a.review_count)),
        SortKey::PriceAsc => a.price.cmp(&b.price),
        SortKey::PriceDesc => b.price.cmp(&a.price),
        SortKey::RatingAsc => a.rating.total_cmp(&b.rating),
        SortKey::RatingDesc => b.rating.total_cmp(&a.rating),
        SortKey::DurationAsc => a.duration_days.cmp(&b.duration_days),
        SortKey::DurationDesc => b.duration_days.cmp(&a.duration_days),
        SortKey::NameAsc => a.name.cmp(&b.name),
        SortKey::NameDesc => b.name.cmp(&a.name),
    }
}
