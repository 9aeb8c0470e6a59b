use serde::{Deserialize, Serialize};
use trailhead_catalog::{Difficulty, GroupSize, Season, Trip};

/// Inclusive price window. A reversed window (min > max) is a UI slip,
/// not an error: [`FilterCriteria::normalized`] swaps the bounds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceRange {
    pub min: i64,
    pub max: i64,
}

impl PriceRange {
    pub fn contains(&self, price: i64) -> bool {
        self.min <= price && price <= self.max
    }
}

/// Predefined trip-length buckets shown in the filter panel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DurationBucket {
    #[serde(rename = "1-2")]
    Days1To2,
    #[serde(rename = "3-5")]
    Days3To5,
    #[serde(rename = "6-9")]
    Days6To9,
    #[serde(rename = "10+")]
    Days10Plus,
}

impl DurationBucket {
    pub fn contains(&self, days: u32) -> bool {
        match self {
            DurationBucket::Days1To2 => (1..=2).contains(&days),
            DurationBucket::Days3To5 => (3..=5).contains(&days),
            DurationBucket::Days6To9 => (6..=9).contains(&days),
            DurationBucket::Days10Plus => days >= 10,
        }
    }
}

/// User-selected constraint set from the filter panel.
///
/// Fields compose with AND; selections inside a field compose with OR.
/// An empty set (or `None`) means "no constraint on that field", so the
/// default value is the identity filter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    pub price_range: Option<PriceRange>,
    pub difficulties: Vec<Difficulty>,
    pub duration_buckets: Vec<DurationBucket>,
    pub destinations: Vec<String>,
    pub seasons: Vec<Season>,
    pub group_sizes: Vec<GroupSize>,
    pub min_rating: Option<f64>,
}

impl FilterCriteria {
    /// Normalize malformed input rather than failing: a reversed price
    /// window is swapped so the caller never sees a silently empty
    /// result set from inverted bounds.
    pub fn normalized(&self) -> Self {
        let mut criteria = self.clone();
        if let Some(range) = &mut criteria.price_range {
            if range.min > range.max {
                std::mem::swap(&mut range.min, &mut range.max);
            }
        }
        criteria
    }

    /// Whether a trip satisfies every constrained field.
    pub fn accepts(&self, trip: &Trip) -> bool {
        if let Some(range) = &self.price_range {
            if !range.contains(trip.price) {
                return false;
            }
        }
        if !self.difficulties.is_empty() && !self.difficulties.contains(&trip.difficulty) {
            return false;
        }
        if !self.duration_buckets.is_empty()
            && !self
                .duration_buckets
                .iter()
                .any(|b| b.contains(trip.duration_days))
        {
            return false;
        }
        if !self.destinations.is_empty()
            && !self
                .destinations
                .iter()
                .any(|d| d.eq_ignore_ascii_case(&trip.destination))
        {
            return false;
        }
        if !self.seasons.is_empty() && !self.seasons.contains(&trip.season) {
            return false;
        }
        if !self.group_sizes.is_empty() && !self.group_sizes.contains(&trip.group_size) {
            return false;
        }
        if let Some(threshold) = self.min_rating {
            if trip.rating < threshold {
                return false;
            }
        }
        true
    }
}
