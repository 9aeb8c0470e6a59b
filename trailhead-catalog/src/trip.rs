use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type TripId = i64;

/// Trek difficulty grades as shown on trip cards.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Moderate,
    #[serde(rename = "Moderate-Hard")]
    ModerateHard,
    Hard,
}

impl Difficulty {
    /// Display label, also used for free-text search matching.
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Moderate => "Moderate",
            Difficulty::ModerateHard => "Moderate-Hard",
            Difficulty::Hard => "Hard",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Season {
    Winter,
    Summer,
    Monsoon,
    Spring,
    Fall,
}

/// Departure group-size category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum GroupSize {
    Small,
    Medium,
    Large,
}

/// A bookable travel package. Owned by the catalog provider; the
/// discovery and booking layers treat it as immutable input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trip {
    pub id: TripId,
    pub name: String,
    pub destination: String,
    /// Whole currency units (INR), never negative.
    pub price: i64,
    pub duration_days: u32,
    /// 0.0 to 5.0.
    pub rating: f64,
    pub review_count: u32,
    pub difficulty: Difficulty,
    pub season: Season,
    pub group_size: GroupSize,
    pub description: String,
    pub tags: Vec<String>,
    pub available_seats: u32,
    pub group_capacity: u32,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Trip {
    /// Check record invariants. Fixture loading and provider adapters
    /// run this before a trip is allowed into a catalog snapshot.
    pub fn validate(&self) -> Result<(), crate::CatalogError> {
        if self.price < 0 {
            return Err(crate::CatalogError::InvalidRecord(format!(
                "trip {}: negative price {}",
                self.id, self.price
            )));
        }
        if self.duration_days < 1 {
            return Err(crate::CatalogError::InvalidRecord(format!(
                "trip {}: zero duration",
                self.id
            )));
        }
        if !(0.0..=5.0).contains(&self.rating) {
            return Err(crate::CatalogError::InvalidRecord(format!(
                "trip {}: rating {} out of range",
                self.id, self.rating
            )));
        }
        if self.available_seats > self.group_capacity {
            return Err(crate::CatalogError::InvalidRecord(format!(
                "trip {}: {} seats available but capacity is {}",
                self.id, self.available_seats, self.group_capacity
            )));
        }
        Ok(())
    }
}
