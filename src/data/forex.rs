//! Forex-list API client
//!
//! Fetches currency-pair quotes from the financial-data provider. The
//! provider has returned this listing both as a bare array and as an
//! object wrapping the array under `forexList`, so normalization accepts
//! either shape.

use reqwest::Client;
use serde_json::Value;

use super::shape::{self, text_field, ResponseShape};
use super::{ApiError, ForexRow};

/// Default base URL for the financial-data provider
const FMP_BASE_URL: &str = "https://financialmodelingprep.com";

/// Wrapper keys under which the provider has nested the pair list
const FOREX_WRAPPER_KEYS: &[&str] = &["forexList"];

/// Maximum forex rows rendered in either front-end
pub const FOREX_ROW_LIMIT: usize = 10;

/// Cache key for the forex listing (no user filter applies)
pub const FOREX_CACHE_KEY: &str = "forex_data";

/// Client for the financial-data provider's forex listing
#[derive(Debug, Clone)]
pub struct ForexClient {
    http_client: Client,
    api_key: String,
    base_url: String,
}

impl ForexClient {
    /// Creates a new ForexClient with the provider's production URL
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: super::http_client(),
            api_key: api_key.into(),
            base_url: FMP_BASE_URL.to_string(),
        }
    }

    /// Overrides the base URL (for tests against a local stand-in provider)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetches the forex listing and normalizes it into rows
    pub async fn fetch_forex(&self) -> Result<Vec<ForexRow>, ApiError> {
        let url = format!("{}/api/v3/forex?apikey={}", self.base_url, self.api_key);
        let body = super::fetch_json(self.http_client.get(&url)).await?;
        Ok(normalize_forex(body))
    }
}

/// Normalizes a raw forex response into at most [`FOREX_ROW_LIMIT`] rows
///
/// Fallback order per field is significant: pair prefers `ticker` over
/// `symbol`, rate prefers `bid` over `price`. An element that is not a
/// JSON object is logged and skipped.
pub fn normalize_forex(body: Value) -> Vec<ForexRow> {
    let mut rows = Vec::new();

    for (index, item) in ResponseShape::classify(body, FOREX_WRAPPER_KEYS)
        .into_rows()
        .into_iter()
        .take(FOREX_ROW_LIMIT)
        .enumerate()
    {
        match shape::as_record(&item, index) {
            Ok(record) => rows.push(ForexRow {
                pair: text_field(record, &["ticker", "symbol"], "N/A"),
                rate: text_field(record, &["bid", "price"], "N/A"),
                timestamp: text_field(record, &["timestamp"], "N/A"),
            }),
            Err(e) => tracing::warn!(error = %e, "skipping unreadable forex row"),
        }
    }

    rows
}
