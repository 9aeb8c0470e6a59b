use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::draft::BookingDraft;
use crate::pricing::PricingBreakdown;
use trailhead_catalog::TripId;

#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("Booking rejected: {0}")]
    Validation(String),
    #[error("Payment failed: {0}")]
    Payment(String),
    #[error("Booking service unreachable: {0}")]
    Network(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfirmation {
    pub id: Uuid,
    pub trip_id: TripId,
    pub total: i64,
    pub created_at: DateTime<Utc>,
}

/// Collaborator that persists a finished draft. The HTTP layer wires in
/// a concrete implementation; the wizard only sees this trait.
#[async_trait]
pub trait BookingSubmitter: Send + Sync {
    async fn submit(
        &self,
        draft: &BookingDraft,
        pricing: &PricingBreakdown,
    ) -> Result<BookingConfirmation, SubmissionError>;
}

/// In-memory submitter backing local runs and tests.
pub struct MemorySubmitter {
    bookings: RwLock<HashMap<Uuid, StoredBooking>>,
}

#[derive(Debug, Clone)]
pub struct StoredBooking {
    pub confirmation: BookingConfirmation,
    pub draft: BookingDraft,
    pub pricing: PricingBreakdown,
}

impl MemorySubmitter {
    pub fn new() -> Self {
        Self {
            bookings: RwLock::new(HashMap::new()),
        }
    }

    pub async fn get(&self, id: Uuid) -> Option<StoredBooking> {
        self.bookings.read().await.get(&id).cloned()
    }

    pub async fn count(&self) -> usize {
        self.bookings.read().await.len()
    }
}

impl Default for MemorySubmitter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookingSubmitter for MemorySubmitter {
    async fn submit(
        &self,
        draft: &BookingDraft,
        pricing: &PricingBreakdown,
    ) -> Result<BookingConfirmation, SubmissionError> {
        if !draft.check_bounds() {
            return Err(SubmissionError::Validation(format!(
                "traveler count {} out of bounds",
                draft.traveler_count()
            )));
        }
        if !draft.terms_accepted {
            return Err(SubmissionError::Validation(
                "terms not accepted".to_string(),
            ));
        }

        let confirmation = BookingConfirmation {
            id: Uuid::new_v4(),
            trip_id: draft.trip_id,
            total: pricing.total,
            created_at: Utc::now(),
        };
        self.bookings.write().await.insert(
            confirmation.id,
            StoredBooking {
                confirmation: confirmation.clone(),
                draft: draft.clone(),
                pricing: *pricing,
            },
        );
        info!(booking_id = %confirmation.id, trip_id = draft.trip_id, "booking confirmed");
        Ok(confirmation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::PricingConfig;
    use crate::traveler::Traveler;

    fn draft() -> BookingDraft {
        let mut traveler = Traveler::blank(1);
        traveler.full_name = "Asha Rao".to_string();
        traveler.age = 27;
        traveler.phone = "12345".to_string();
        traveler.email = "asha@example.com".to_string();
        BookingDraft {
            trip_id: 1,
            travelers: vec![traveler],
            payment_method: Default::default(),
            terms_accepted: true,
        }
    }

    #[tokio::test]
    async fn submit_stores_and_confirms() {
        let submitter = MemorySubmitter::new();
        let pricing = PricingBreakdown::compute(21150, 1, &PricingConfig::default());
        let confirmation = submitter.submit(&draft(), &pricing).await.unwrap();

        assert_eq!(confirmation.trip_id, 1);
        assert_eq!(confirmation.total, pricing.total);
        let stored = submitter.get(confirmation.id).await.unwrap();
        assert_eq!(stored.pricing, pricing);
    }

    #[tokio::test]
    async fn rejects_draft_without_terms() {
        let submitter = MemorySubmitter::new();
        let mut d = draft();
        d.terms_accepted = false;
        let pricing = PricingBreakdown::compute(21150, 1, &PricingConfig::default());
        let err = submitter.submit(&d, &pricing).await.unwrap_err();
        assert!(matches!(err, SubmissionError::Validation(_)));
        assert_eq!(submitter.count().await, 0);
    }

    #[tokio::test]
    async fn rejects_empty_traveler_list() {
        let submitter = MemorySubmitter::new();
        let mut d = draft();
        d.travelers.clear();
        let pricing = PricingBreakdown::compute(21150, 1, &PricingConfig::default());
        assert!(submitter.submit(&d, &pricing).await.is_err());
    }
}
