use serde::Deserialize;
use std::env;
use trailhead_booking::PricingConfig;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
    pub pricing: PricingRules,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// Which trip provider to wire in. "fixture" is the only in-tree
    /// source; a remote provider ships as a separate adapter crate.
    pub source: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PricingRules {
    #[serde(default = "default_service_fee")]
    pub service_fee: i64,
    #[serde(default = "default_gst_rate")]
    pub gst_rate: f64,
}

fn default_service_fee() -> i64 {
    500
}

fn default_gst_rate() -> f64 {
    0.05
}

impl From<PricingRules> for PricingConfig {
    fn from(rules: PricingRules) -> Self {
        PricingConfig {
            service_fee: rules.service_fee,
            gst_rate: rules.gst_rate,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Per-environment overlay, optional.
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in.
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `TRAILHEAD__SERVER__PORT=8080`.
            .add_source(config::Environment::with_prefix("TRAILHEAD").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
