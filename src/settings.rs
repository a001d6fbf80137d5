use std::time::Duration;

use config::{Config, ConfigError, File};
use serde::Deserialize;

use crate::constants::{GEOCODING_API_BASE, OPEN_METEO_API_BASE};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub log_level: String,
    pub api: ApiSettings,
    pub open_meteo: OpenMeteoSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    pub ip: String,
    pub port: u16,
    pub num_workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenMeteoSettings {
    pub geocoding_url: String,
    pub forecast_url: String,
    pub timeout_secs: u64,
    /// Retries for the forecast call; geocoding is never retried.
    pub retries: u32,
    /// Seconds; the n-th retry waits `backoff_factor * 2^n`.
    pub backoff_factor: f64,
    pub max_backoff_ms: u64,
    /// Zero disables the response cache.
    pub cache_ttl_secs: u64,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let environment = std::env::var("APP_ENVIRONMENT")
            .unwrap_or_else(|_| "local".into())
            .to_lowercase();

        Self::builder()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{environment}")).required(false))
            .add_source(config::Environment::with_prefix("WEATHER_API").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// Builder pre-populated with every default, so no file is required.
    pub fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("log_level", "info")?
            .set_default("api.ip", "0.0.0.0")?
            .set_default("api.port", 8000)?
            .set_default("open_meteo.geocoding_url", GEOCODING_API_BASE)?
            .set_default("open_meteo.forecast_url", OPEN_METEO_API_BASE)?
            .set_default("open_meteo.timeout_secs", 10)?
            .set_default("open_meteo.retries", 5)?
            .set_default("open_meteo.backoff_factor", 0.2)?
            .set_default("open_meteo.max_backoff_ms", 5000)?
            .set_default("open_meteo.cache_ttl_secs", 3600)
    }
}

impl ApiSettings {
    pub fn listener_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}

impl OpenMeteoSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}
