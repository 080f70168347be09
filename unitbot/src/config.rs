//! Bot configuration
//!
//! Loaded from environment variables with fallback to defaults:
//!
//! - `CURRENCY_KEY`: API key for the currency rate service
//! - `UNIT_BOT_SECRET`: JSON secret; its `CurrencyAPIKey` field is used when
//!   `CURRENCY_KEY` is unset
//! - `CURRENCY_ENDPOINT`: base URL of the rate service
//! - `CURRENCY_TIMEOUT_SECS`: request timeout for the rate service

use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use unitbot_units::{DEFAULT_ENDPOINT, DEFAULT_SWEEP_INTERVAL, DEFAULT_TTL};

use crate::error::{BotError, BotResult};

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Rate service API key. Without one, currency conversion is disabled.
    pub currency_api_key: Option<String>,

    /// Rate service base URL
    pub currency_endpoint: String,

    /// Lifetime of a cached exchange rate
    pub rate_ttl_secs: u64,

    /// Minimum time between sweeps of expired rates
    pub sweep_interval_secs: u64,

    /// Timeout for each rate service request
    pub request_timeout_secs: u64,
}

/// Shape of the `UNIT_BOT_SECRET` JSON document
#[derive(Debug, Deserialize)]
struct BotSecret {
    #[serde(rename = "CurrencyAPIKey", default)]
    currency_api_key: Option<String>,
}

impl BotConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> BotResult<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to
    /// its value
    pub fn from_lookup<F>(lookup: F) -> BotResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = BotConfig::default();

        config.currency_api_key = match lookup("CURRENCY_KEY").filter(|k| !k.is_empty()) {
            Some(key) => Some(key),
            None => match lookup("UNIT_BOT_SECRET") {
                Some(secret) => parse_secret(&secret)?,
                None => None,
            },
        };

        if let Some(endpoint) = lookup("CURRENCY_ENDPOINT").filter(|e| !e.is_empty()) {
            config.currency_endpoint = endpoint;
        }

        if let Some(timeout) = lookup("CURRENCY_TIMEOUT_SECS") {
            config.request_timeout_secs = timeout.trim().parse().map_err(|_| {
                BotError::Config(format!("CURRENCY_TIMEOUT_SECS is not a number: {}", timeout))
            })?;
        }

        Ok(config)
    }

    pub fn rate_ttl(&self) -> Duration {
        Duration::from_secs(self.rate_ttl_secs)
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        BotConfig {
            currency_api_key: None,
            currency_endpoint: DEFAULT_ENDPOINT.to_string(),
            rate_ttl_secs: DEFAULT_TTL.as_secs(),
            sweep_interval_secs: DEFAULT_SWEEP_INTERVAL.as_secs(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

fn parse_secret(secret: &str) -> BotResult<Option<String>> {
    let secret: BotSecret = serde_json::from_str(secret)
        .map_err(|e| BotError::Config(format!("UNIT_BOT_SECRET is not valid JSON: {}", e)))?;
    Ok(secret.currency_api_key.filter(|k| !k.is_empty()))
}
