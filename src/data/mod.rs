//! Core data models for InvestIQ
//!
//! This module contains the normalized row types shared by both
//! front-ends, the error taxonomy for upstream API calls, and the
//! per-category API clients.

pub mod bonds;
pub mod forex;
pub mod shape;
pub mod stocks;

pub use bonds::{normalize_bonds, BondsClient};
pub use forex::{normalize_forex, ForexClient};
pub use stocks::{normalize_stocks, StocksClient};

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Fixed timeout applied to every upstream request
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors that can occur when querying an upstream provider
///
/// Every fetch is a single attempt: no retries, no backoff. Front-ends
/// degrade any of these to an empty row list plus a logged message, so
/// the user sees an empty table rather than a propagated failure.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Provider replied with a non-success status
    #[error("fetch failed with status {status}: {body}")]
    FetchFailed { status: u16, body: String },

    /// Request could not complete (timeout, DNS, connection error)
    #[error("fetch failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body is not valid JSON
    #[error("failed to parse response body as JSON: {0}")]
    ParseFailed(#[from] serde_json::Error),
}

/// A normalized government/corporate bond listing
///
/// Field names follow the rendered table: `name` carries the ISIN and
/// `yield` carries the provider's haircut figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BondRow {
    pub issuer_name: String,
    pub name: String,
    #[serde(rename = "yield")]
    pub yield_value: String,
    pub date: String,
}

/// A normalized forex pair quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForexRow {
    pub pair: String,
    pub rate: String,
    pub timestamp: String,
}

/// A normalized stock quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockRow {
    pub symbol: String,
    pub name: String,
    pub price: String,
    pub change: String,
}

/// A row that can be rendered as one line of a table
///
/// Both the terminal renderer and the HTML renderer consume rows through
/// this trait, so the two front-ends cannot drift apart on headers.
pub trait TableRow {
    /// Column headers for this row type
    const HEADERS: &'static [&'static str];

    /// Display cells in header order; every cell is always present
    /// (sentinel values stand in for missing source data)
    fn cells(&self) -> Vec<String>;
}

impl TableRow for BondRow {
    const HEADERS: &'static [&'static str] = &["Issuer", "ISIN", "Yield", "Expiry"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.issuer_name.clone(),
            self.name.clone(),
            self.yield_value.clone(),
            self.date.clone(),
        ]
    }
}

impl TableRow for ForexRow {
    const HEADERS: &'static [&'static str] = &["Pair", "Rate", "Timestamp"];

    fn cells(&self) -> Vec<String> {
        vec![self.pair.clone(), self.rate.clone(), self.timestamp.clone()]
    }
}

impl TableRow for StockRow {
    const HEADERS: &'static [&'static str] = &["Symbol", "Company", "Price", "Change"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.symbol.clone(),
            self.name.clone(),
            self.price.clone(),
            self.change.clone(),
        ]
    }
}

/// Builds the shared HTTP client with the fixed request timeout
///
/// Construction only fails if the TLS backend cannot be initialized, in
/// which case no request could ever succeed, so this panics the same way
/// `reqwest::Client::new()` does.
pub(crate) fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .expect("failed to construct HTTP client")
}

/// Performs a single GET and returns the parsed JSON body
///
/// # Errors
/// * `ApiError::FetchFailed` for a non-2xx status (carries status and body)
/// * `ApiError::Transport` for timeouts and connection failures
/// * `ApiError::ParseFailed` when the body is not valid JSON
pub(crate) async fn fetch_json(request: reqwest::RequestBuilder) -> Result<Value, ApiError> {
    let response = request.send().await?;
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(ApiError::FetchFailed {
            status: status.as_u16(),
            body,
        });
    }

    Ok(serde_json::from_str(&body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bond_row_cells_match_header_count() {
        let row = BondRow {
            issuer_name: "Acme".to_string(),
            name: "US1".to_string(),
            yield_value: "5%".to_string(),
            date: "2030-01-01".to_string(),
        };
        assert_eq!(row.cells().len(), BondRow::HEADERS.len());
    }

    #[test]
    fn test_forex_row_cells_match_header_count() {
        let row = ForexRow {
            pair: "EURUSD".to_string(),
            rate: "1.08".to_string(),
            timestamp: "N/A".to_string(),
        };
        assert_eq!(row.cells().len(), ForexRow::HEADERS.len());
    }

    #[test]
    fn test_stock_row_cells_match_header_count() {
        let row = StockRow {
            symbol: "AAPL".to_string(),
            name: "Apple Inc.".to_string(),
            price: "$190.5".to_string(),
            change: "1.2%".to_string(),
        };
        assert_eq!(row.cells().len(), StockRow::HEADERS.len());
    }

    #[test]
    fn test_bond_row_serializes_yield_field_name() {
        let row = BondRow {
            issuer_name: "Acme".to_string(),
            name: "US1".to_string(),
            yield_value: "5%".to_string(),
            date: "2030-01-01".to_string(),
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["yield"], "5%");
        assert!(json.get("yield_value").is_none());
    }
}
