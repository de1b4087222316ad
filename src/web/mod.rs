//! Web front-end: axum router and form handlers
//!
//! Each handler follows the same flow: derive a cache key from the
//! category (plus filter, where one applies), return the cached rows on
//! a hit, otherwise perform one upstream fetch, cache the normalized
//! rows on success only, and render the shared HTML table. Fetch and
//! parse failures degrade to an empty table with a logged error; they
//! never populate the cache and never surface as an error page.

pub mod render;

use std::net::SocketAddr;

use axum::{
    extract::State,
    response::Html,
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use crate::cache::CacheManager;
use crate::config::Settings;
use crate::data::bonds::WEB_BOND_LIMIT;
use crate::data::forex::FOREX_CACHE_KEY;
use crate::data::{BondRow, BondsClient, ForexClient, ForexRow, StockRow, StocksClient};

/// How long cached row lists are served before re-fetching
pub const CACHE_TTL_HOURS: u64 = 24;

/// Shared state injected into every handler
///
/// Explicitly constructed and passed via axum state rather than held in
/// globals, so handlers stay testable against stand-in providers and a
/// temporary cache directory.
#[derive(Debug, Clone)]
pub struct AppState {
    pub cache: CacheManager,
    pub bonds: BondsClient,
    pub forex: ForexClient,
    pub stocks: StocksClient,
}

impl AppState {
    /// Builds state from environment settings
    ///
    /// The web front-end serves all three categories, so every provider
    /// key must be configured up front.
    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        let cache = match &settings.cache_dir {
            Some(dir) => CacheManager::with_dir(dir.clone()),
            None => CacheManager::new()
                .ok_or_else(|| anyhow::anyhow!("could not determine a cache directory"))?,
        };

        Ok(Self {
            cache,
            bonds: BondsClient::new(
                settings.require_rapid_api_key()?,
                settings.require_rapid_api_host()?,
            ),
            forex: ForexClient::new(settings.require_fmp_api_key()?),
            stocks: StocksClient::new(settings.require_fmp_api_key()?),
        })
    }
}

/// Form body for `POST /get-bonds`
#[derive(Debug, Deserialize)]
pub struct BondsForm {
    #[serde(rename = "bondType", default)]
    pub bond_type: String,
}

/// Form body for `POST /get-stocks`
#[derive(Debug, Deserialize)]
pub struct StocksForm {
    #[serde(rename = "stockSymbols", default)]
    pub stock_symbols: String,
}

/// Builds the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/get-bonds", post(get_bonds))
        .route("/get-forex", post(get_forex))
        .route("/get-stocks", post(get_stocks))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Binds the listener and serves until ctrl-c
pub async fn serve(state: AppState, port: u16) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "web front-end listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

/// `GET /` - index page with the three query forms
pub async fn index() -> Html<String> {
    Html(render::index_page())
}

/// `POST /get-bonds` - bond table filtered by `bondType`
pub async fn get_bonds(State(state): State<AppState>, Form(form): Form<BondsForm>) -> Html<String> {
    let bond_type = form.bond_type.trim().to_uppercase();
    let cache_key = BondsClient::cache_key(&bond_type);

    let rows: Vec<BondRow> = match state.cache.get(&cache_key) {
        Some(rows) => rows,
        None => match state.bonds.fetch_bonds(&bond_type, WEB_BOND_LIMIT).await {
            Ok(rows) => {
                store(&state.cache, &cache_key, &rows);
                rows
            }
            Err(e) => {
                tracing::error!(error = %e, %bond_type, "bond fetch failed");
                Vec::new()
            }
        },
    };

    Html(render::display_page("Bonds", &rows))
}

/// `POST /get-forex` - forex table (no filter)
pub async fn get_forex(State(state): State<AppState>) -> Html<String> {
    let rows: Vec<ForexRow> = match state.cache.get(FOREX_CACHE_KEY) {
        Some(rows) => rows,
        None => match state.forex.fetch_forex().await {
            Ok(rows) => {
                store(&state.cache, FOREX_CACHE_KEY, &rows);
                rows
            }
            Err(e) => {
                tracing::error!(error = %e, "forex fetch failed");
                Vec::new()
            }
        },
    };

    Html(render::display_page("Forex", &rows))
}

/// `POST /get-stocks` - stock quote table filtered by `stockSymbols`
pub async fn get_stocks(
    State(state): State<AppState>,
    Form(form): Form<StocksForm>,
) -> Html<String> {
    let symbols = StocksClient::parse_symbols(&form.stock_symbols);
    if symbols.is_empty() {
        return Html(render::display_page::<StockRow>("Stocks", &[]));
    }
    let cache_key = StocksClient::cache_key(&symbols);

    let rows: Vec<StockRow> = match state.cache.get(&cache_key) {
        Some(rows) => rows,
        None => match state.stocks.fetch_stocks(&symbols).await {
            Ok(rows) => {
                store(&state.cache, &cache_key, &rows);
                rows
            }
            Err(e) => {
                tracing::error!(error = %e, symbols = %symbols.join(","), "stock fetch failed");
                Vec::new()
            }
        },
    };

    Html(render::display_page("Stocks", &rows))
}

/// Caches normalized rows; a cache write failure is logged, not fatal
fn store<T: serde::Serialize>(cache: &CacheManager, key: &str, rows: &T) {
    if let Err(e) = cache.set(key, rows, CACHE_TTL_HOURS) {
        tracing::warn!(error = %e, key, "cache write failed");
    }
}
