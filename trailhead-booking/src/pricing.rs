use serde::{Deserialize, Serialize};

/// Business rules for the booking summary. Loaded from service
/// configuration; the defaults match the production fee schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Flat fee per booking, in whole currency units.
    pub service_fee: i64,
    /// GST fraction applied to the subtotal.
    pub gst_rate: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            service_fee: 500,
            gst_rate: 0.05,
        }
    }
}

/// Derived price summary. Never stored: recomputed from the draft every
/// time traveler count or trip changes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PricingBreakdown {
    pub subtotal: i64,
    pub service_fee: i64,
    pub gst: i64,
    pub total: i64,
}

impl PricingBreakdown {
    /// subtotal = price × travelers; gst = round(subtotal × rate);
    /// total = subtotal + fee + gst.
    pub fn compute(trip_price: i64, traveler_count: usize, config: &PricingConfig) -> Self {
        let subtotal = trip_price * traveler_count as i64;
        let gst = (subtotal as f64 * config.gst_rate).round() as i64;
        Self {
            subtotal,
            service_fee: config.service_fee,
            gst,
            total: subtotal + config.service_fee + gst,
        }
    }
}
