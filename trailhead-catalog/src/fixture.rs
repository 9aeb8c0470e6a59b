use async_trait::async_trait;
use chrono::NaiveDate;

use crate::repository::TripRepository;
use crate::trip::{Difficulty, GroupSize, Season, Trip, TripId};
use crate::{CatalogError, CatalogResult};

/// Deterministic in-memory catalog for local runs and tests. Selected
/// explicitly through configuration; business logic never falls back to
/// fixture data on a provider failure.
pub struct FixtureCatalog {
    trips: Vec<Trip>,
}

impl FixtureCatalog {
    pub fn new(trips: Vec<Trip>) -> CatalogResult<Self> {
        for trip in &trips {
            trip.validate()?;
        }
        Ok(Self { trips })
    }

    /// The standard seed set used by the demo deployment.
    pub fn seeded() -> Self {
        Self::new(seed_trips()).expect("seed trips are valid")
    }
}

#[async_trait]
impl TripRepository for FixtureCatalog {
    async fn fetch_all_trips(&self) -> CatalogResult<Vec<Trip>> {
        Ok(self.trips.clone())
    }

    async fn fetch_trip(&self, id: TripId) -> CatalogResult<Trip> {
        self.trips
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(CatalogError::NotFound(id))
    }
}

fn seed_trips() -> Vec<Trip> {
    vec![
        Trip {
            id: 1,
            name: "Winter Spiti Valley".to_string(),
            destination: "Spiti Valley".to_string(),
            price: 21150,
            duration_days: 8,
            rating: 4.8,
            review_count: 124,
            difficulty: Difficulty::Moderate,
            season: Season::Winter,
            group_size: GroupSize::Medium,
            description: "Frozen waterfalls, monasteries and the highest villages of the cold desert".to_string(),
            tags: vec!["himalaya".into(), "snow".into(), "roadtrip".into()],
            available_seats: 12,
            group_capacity: 16,
            start_date: NaiveDate::from_ymd_opt(2025, 1, 15),
            image_url: None,
        },
        Trip {
            id: 2,
            name: "Leh Ladakh Adventure".to_string(),
            destination: "Ladakh".to_string(),
            price: 34650,
            duration_days: 7,
            rating: 4.9,
            review_count: 211,
            difficulty: Difficulty::Hard,
            season: Season::Summer,
            group_size: GroupSize::Medium,
            description: "Khardung La, Pangong Tso and the Nubra valley on two wheels".to_string(),
            tags: vec!["himalaya".into(), "biking".into(), "lakes".into()],
            available_seats: 8,
            group_capacity: 14,
            start_date: NaiveDate::from_ymd_opt(2025, 2, 20),
            image_url: None,
        },
        Trip {
            id: 3,
            name: "Kerala Backpacking".to_string(),
            destination: "Kerala".to_string(),
            price: 16650,
            duration_days: 6,
            rating: 4.7,
            review_count: 98,
            difficulty: Difficulty::Easy,
            season: Season::Monsoon,
            group_size: GroupSize::Large,
            description: "Backwaters, tea estates and beach camps across God's own country".to_string(),
            tags: vec!["beach".into(), "backwaters".into(), "camping".into()],
            available_seats: 20,
            group_capacity: 24,
            start_date: NaiveDate::from_ymd_opt(2025, 7, 5),
            image_url: None,
        },
        Trip {
            id: 4,
            name: "Valley of Flowers Trek".to_string(),
            destination: "Uttarakhand".to_string(),
            price: 12450,
            duration_days: 5,
            rating: 4.6,
            review_count: 67,
            difficulty: Difficulty::ModerateHard,
            season: Season::Monsoon,
            group_size: GroupSize::Small,
            description: "Alpine meadows in full bloom below the Nanda Devi sanctuary".to_string(),
            tags: vec!["trek".into(), "flowers".into(), "himalaya".into()],
            available_seats: 6,
            group_capacity: 10,
            start_date: NaiveDate::from_ymd_opt(2025, 8, 2),
            image_url: None,
        },
        Trip {
            id: 5,
            name: "Meghalaya Caves & Waterfalls".to_string(),
            destination: "Meghalaya".to_string(),
            price: 18900,
            duration_days: 6,
            rating: 4.5,
            review_count: 54,
            difficulty: Difficulty::Moderate,
            season: Season::Fall,
            group_size: GroupSize::Medium,
            description: "Living root bridges, limestone caves and cliffside villages".to_string(),
            tags: vec!["caves".into(), "waterfalls".into(), "northeast".into()],
            available_seats: 10,
            group_capacity: 15,
            start_date: NaiveDate::from_ymd_opt(2025, 10, 12),
            image_url: None,
        },
        Trip {
            id: 6,
            name: "Rishikesh Weekend Rafting".to_string(),
            destination: "Rishikesh".to_string(),
            price: 5950,
            duration_days: 2,
            rating: 4.4,
            review_count: 180,
            difficulty: Difficulty::Easy,
            season: Season::Spring,
            group_size: GroupSize::Large,
            description: "White water on the Ganga with riverside camping and cliff jumps".to_string(),
            tags: vec!["rafting".into(), "weekend".into(), "camping".into()],
            available_seats: 18,
            group_capacity: 30,
            start_date: NaiveDate::from_ymd_opt(2025, 3, 21),
            image_url: None,
        },
        Trip {
            id: 7,
            name: "Hampi Heritage Cycling".to_string(),
            destination: "Hampi".to_string(),
            price: 9800,
            duration_days: 3,
            rating: 4.3,
            review_count: 41,
            difficulty: Difficulty::Easy,
            season: Season::Winter,
            group_size: GroupSize::Small,
            description: "Boulder fields and Vijayanagara ruins at an easy pedalling pace".to_string(),
            tags: vec!["cycling".into(), "heritage".into(), "weekend".into()],
            available_seats: 7,
            group_capacity: 8,
            start_date: NaiveDate::from_ymd_opt(2025, 12, 5),
            image_url: None,
        },
        Trip {
            id: 8,
            name: "Everest Base Camp Expedition".to_string(),
            destination: "Nepal".to_string(),
            price: 58500,
            duration_days: 14,
            rating: 4.9,
            review_count: 302,
            difficulty: Difficulty::Hard,
            season: Season::Spring,
            group_size: GroupSize::Small,
            description: "The classic Khumbu route to 5364m with acclimatisation days built in".to_string(),
            tags: vec!["trek".into(), "expedition".into(), "himalaya".into()],
            available_seats: 4,
            group_capacity: 12,
            start_date: NaiveDate::from_ymd_opt(2025, 4, 10),
            image_url: None,
        },
    ]
}
