//! Remote currency service
//!
//! [`CurrencyService`] is the seam between the registry and the network.
//! [`CurrConvClient`] talks to a currconv-style HTTP API with a blocking
//! client; tests substitute in-memory implementations.

use std::collections::HashMap;
use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::error::CurrencyServiceError;

/// Default base URL of the rate service
pub const DEFAULT_ENDPOINT: &str = "https://free.currconv.com/api/v7";

/// Extra spellings for common currencies, keyed by code
pub const CURRENCY_ALIASES: &[(&str, &[&str])] = &[
    ("USD", &["$", "us$", "dollar", "dollars"]),
    ("EUR", &["€", "euro", "euros"]),
    ("JPY", &["¥", "yen"]),
    ("GBP", &["£"]),
    ("CAD", &["ca$"]),
    ("AUD", &["aus$", "a$"]),
];

/// Aliases registered for `code` beyond the code itself
pub fn extra_aliases(code: &str) -> &'static [&'static str] {
    CURRENCY_ALIASES
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(code))
        .map(|(_, aliases)| *aliases)
        .unwrap_or(&[])
}

/// A currency advertised by the rate service
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CurrencyInfo {
    pub id: String,
    #[serde(rename = "currencyName", default)]
    pub name: String,
}

/// Source of supported currencies and pairwise exchange rates
pub trait CurrencyService: Send + Sync {
    /// All currencies the service can convert
    fn currencies(&self) -> Result<Vec<CurrencyInfo>, CurrencyServiceError>;

    /// Multiplier from one currency code to another
    fn rate(&self, from: &str, to: &str) -> Result<f64, CurrencyServiceError>;
}

#[derive(Debug, Deserialize)]
struct CurrenciesResponse {
    results: HashMap<String, CurrencyInfo>,
}

/// Blocking client for the currconv API
#[derive(Debug, Clone)]
pub struct CurrConvClient {
    http: reqwest::blocking::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl CurrConvClient {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, CurrencyServiceError> {
        let http = reqwest::blocking::Client::builder().timeout(timeout).build()?;
        let endpoint = endpoint.into().trim_end_matches('/').to_string();
        let api_key = api_key.filter(|k| !k.is_empty());
        Ok(CurrConvClient { http, endpoint, api_key })
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    fn api_key(&self) -> Result<&str, CurrencyServiceError> {
        self.api_key.as_deref().ok_or(CurrencyServiceError::MissingCredential)
    }
}

impl CurrencyService for CurrConvClient {
    fn currencies(&self) -> Result<Vec<CurrencyInfo>, CurrencyServiceError> {
        let key = self.api_key()?;
        let url = format!("{}/currencies", self.endpoint);
        debug!(url = %url, "fetching supported currencies");

        let response: CurrenciesResponse = self
            .http
            .get(&url)
            .query(&[("apiKey", key)])
            .send()?
            .error_for_status()?
            .json()?;

        let mut currencies: Vec<CurrencyInfo> = response.results.into_values().collect();
        currencies.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(currencies)
    }

    fn rate(&self, from: &str, to: &str) -> Result<f64, CurrencyServiceError> {
        let key = self.api_key()?;
        let pair = pair_key(from, to);
        let url = format!("{}/convert", self.endpoint);
        debug!(pair = %pair, "fetching exchange rate");

        let response: HashMap<String, f64> = self
            .http
            .get(&url)
            .query(&[("apiKey", key), ("compact", "ultra"), ("q", pair.as_str())])
            .send()?
            .error_for_status()?
            .json()?;

        response
            .get(&pair)
            .copied()
            .ok_or_else(|| CurrencyServiceError::UnexpectedResponse(format!("{:?}", response)))
    }
}

/// Cache and query key for a currency pair, e.g. `USD_EUR`
pub fn pair_key(from: &str, to: &str) -> String {
    format!("{}_{}", from, to)
}
