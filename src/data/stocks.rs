//! Stock-quote API client
//!
//! Fetches quotes for a comma-separated list of symbols from the
//! financial-data provider. Unlike bonds and forex, the quote listing is
//! not truncated: the user asked for exactly these symbols.

use reqwest::Client;
use serde_json::Value;

use super::shape::{self, opt_text_field, text_field, ResponseShape};
use super::{ApiError, StockRow};

/// Default base URL for the financial-data provider
const FMP_BASE_URL: &str = "https://financialmodelingprep.com";

/// Client for the financial-data provider's quote endpoint
#[derive(Debug, Clone)]
pub struct StocksClient {
    http_client: Client,
    api_key: String,
    base_url: String,
}

impl StocksClient {
    /// Creates a new StocksClient with the provider's production URL
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

    /// Splits a raw comma-separated filter into cleaned uppercase symbols
    pub fn parse_symbols(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(|s| s.trim().to_uppercase())
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Cache key for a symbol filter
    pub fn cache_key(symbols: &[String]) -> String {
        format!("stocks_{}", symbols.join(","))
    }

    /// Fetches quotes for the given symbols and normalizes them into rows
    pub async fn fetch_stocks(&self, symbols: &[String]) -> Result<Vec<StockRow>, ApiError> {
        let url = format!(
            "{}/api/v3/quote/{}?apikey={}",
            self.base_url,
            symbols.join(","),
            self.api_key
        );

        let body = super::fetch_json(self.http_client.get(&url)).await?;
        Ok(normalize_stocks(body))
    }
}

/// Normalizes a raw quote response into rows (no truncation)
///
/// Price and percent-change get their display affixes only when the
/// source value is present; a missing field stays the bare sentinel.
pub fn normalize_stocks(body: Value) -> Vec<StockRow> {
    let mut rows = Vec::new();

    for (index, item) in ResponseShape::classify(body, &[])
        .into_rows()
        .into_iter()
        .enumerate()
    {
        match shape::as_record(&item, index) {
            Ok(record) => rows.push(StockRow {
                symbol: text_field(record, &["symbol"], "N/A"),
                name: text_field(record, &["name"], "N/A"),
                price: opt_text_field(record, &["price"])
                    .map(|p| format!("${p}"))
                    .unwrap_or_else(|| "N/A".to_string()),
                change: opt_text_field(record, &["changesPercentage"])
                    .map(|c| format!("{c}%"))
                    .unwrap_or_else(|| "N/A".to_string()),
            }),
            Err(e) => tracing::warn!(error = %e, "skipping unreadable stock row"),
        }
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_formats_price_and_change() {
        let body = json!([{
            "symbol": "AAPL",
            "name": "Apple Inc.",
            "price": 190.5,
            "changesPercentage": 1.23
        }]);

        let rows = normalize_stocks(body);
        assert_eq!(
            rows,
            vec![StockRow {
                symbol: "AAPL".to_string(),
                name: "Apple Inc.".to_string(),
                price: "$190.5".to_string(),
                change: "1.23%".to_string(),
            }]
        );
    }

    #[test]
    fn test_normalize_missing_fields_stay_bare_sentinels() {
        let rows = normalize_stocks(json!([{"symbol": "MSFT"}]));
        assert_eq!(rows[0].name, "N/A");
        assert_eq!(rows[0].price, "N/A", "No $ prefix on the sentinel");
        assert_eq!(rows[0].change, "N/A", "No % suffix on the sentinel");
    }

    #[test]
    fn test_normalize_is_unbounded() {
        let items: Vec<_> = (0..150).map(|i| json!({"symbol": format!("S{i}")})).collect();
        let rows = normalize_stocks(Value::Array(items));
        assert_eq!(rows.len(), 150);
    }

    #[test]
    fn test_normalize_skips_non_object_rows() {
        let rows = normalize_stocks(json!([null, {"symbol": "TSLA"}]));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].symbol, "TSLA");
    }

    #[test]
    fn test_parse_symbols_cleans_and_uppercases() {
        assert_eq!(
            StocksClient::parse_symbols(" aapl, msft ,,tsla "),
            vec!["AAPL", "MSFT", "TSLA"]
        );
        assert!(StocksClient::parse_symbols("  ,").is_empty());
    }

    #[test]
    fn test_cache_key_joins_symbols() {
        let symbols = StocksClient::parse_symbols("aapl,msft");
        assert_eq!(StocksClient::cache_key(&symbols), "stocks_AAPL,MSFT");
    }
}
