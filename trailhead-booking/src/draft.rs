use serde::{Deserialize, Serialize};
use trailhead_catalog::TripId;

use crate::traveler::Traveler;

pub const MIN_TRAVELERS: usize = 1;
pub const MAX_TRAVELERS: usize = 10;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Card,
    Upi,
    Netbanking,
}

/// Everything entered during one wizard session. Discarded on
/// submission or abandonment, never partially persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingDraft {
    pub trip_id: TripId,
    pub travelers: Vec<Traveler>,
    #[serde(default)]
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub terms_accepted: bool,
}

impl BookingDraft {
    pub fn traveler_count(&self) -> usize {
        self.travelers.len()
    }

    /// Draft-level invariants: slot count within bounds. Violations are
    /// programming errors in the wizard, but drafts arriving over the
    /// wire get checked before submission too.
    pub fn check_bounds(&self) -> bool {
        (MIN_TRAVELERS..=MAX_TRAVELERS).contains(&self.travelers.len())
    }
}
