//! Bonds-by-type API client
//!
//! Fetches fixed-income listings from the bonds provider, filtered by a
//! user-supplied bond type (e.g. CB, SGB, GS). Authentication is a pair
//! of `x-rapidapi-*` headers read from the environment at startup.

use reqwest::Client;
use serde_json::Value;

use super::shape::{self, text_field, ResponseShape};
use super::{ApiError, BondRow};

/// Default base URL for the bonds provider
const BONDS_BASE_URL: &str = "https://bonds-ncd-fixed-income.p.rapidapi.com";

/// Maximum bond rows rendered by the web front-end
pub const WEB_BOND_LIMIT: usize = 100;

/// Maximum bond rows printed by the CLI front-end
pub const CLI_BOND_LIMIT: usize = 10;

/// Client for the bonds-by-type provider
#[derive(Debug, Clone)]
pub struct BondsClient {
    http_client: Client,
    api_key: String,
    api_host: String,
    base_url: String,
}

impl BondsClient {
    /// Creates a new BondsClient with the provider's production URL
    pub fn new(api_key: impl Into<String>, api_host: impl Into<String>) -> Self {
        Self {
            http_client: super::http_client(),
            api_key: api_key.into(),
            api_host: api_host.into(),
            base_url: BONDS_BASE_URL.to_string(),
        }
    }

    /// Overrides the base URL (for tests against a local stand-in provider)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Cache key for a bond-type filter (case-normalized to uppercase)
    pub fn cache_key(bond_type: &str) -> String {
        format!("bonds_{}", bond_type.trim().to_uppercase())
    }

    /// Fetches bonds of the given type and normalizes them into rows
    ///
    /// Single attempt, fail fast. `limit` caps the number of rows and
    /// differs between front-ends ([`WEB_BOND_LIMIT`] / [`CLI_BOND_LIMIT`]).
    pub async fn fetch_bonds(
        &self,
        bond_type: &str,
        limit: usize,
    ) -> Result<Vec<BondRow>, ApiError> {
        let url = format!("{}/Type?type={}", self.base_url, bond_type.trim());
        let request = self
            .http_client
            .get(&url)
            .header("x-rapidapi-key", &self.api_key)
            .header("x-rapidapi-host", &self.api_host);

        let body = super::fetch_json(request).await?;
        Ok(normalize_bonds(body, limit))
    }
}

/// Normalizes a raw bonds response into at most `limit` rows
///
/// The provider returns a bare JSON array; any other shape yields no
/// rows. An element that is not a JSON object is logged and skipped,
/// and extraction continues with the remaining elements.
pub fn normalize_bonds(body: Value, limit: usize) -> Vec<BondRow> {
    let mut rows = Vec::new();

    for (index, item) in ResponseShape::classify(body, &[])
        .into_rows()
        .into_iter()
        .take(limit)
        .enumerate()
    {
        match shape::as_record(&item, index) {
            Ok(record) => rows.push(BondRow {
                issuer_name: text_field(record, &["Issuer_Name"], "Unknown"),
                name: text_field(record, &["ISIN"], "Unknown"),
                yield_value: text_field(record, &["Hair_Cut"], "N/A"),
                date: text_field(record, &["Expiry_Date"], "N/A"),
            }),
            Err(e) => tracing::warn!(error = %e, "skipping unreadable bond row"),
        }
    }

    rows
}
