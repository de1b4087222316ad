//! Environment-based configuration
//!
//! API keys and hosts are read from environment variables (optionally
//! populated from a local `.env` file at startup). Each provider key is
//! optional at load time; front-ends that need a key request it through
//! a `require_*` accessor and surface a readable error when it is absent.

use std::path::PathBuf;

use anyhow::Context;

/// Runtime settings resolved from the environment
#[derive(Debug, Clone)]
pub struct Settings {
    /// API key for the financial-data provider (forex and stock quotes)
    pub fmp_api_key: Option<String>,
    /// API key for the bonds-by-type provider
    pub rapid_api_key: Option<String>,
    /// Host header value for the bonds-by-type provider
    pub rapid_api_host: Option<String>,
    /// Override for the cache directory (defaults to the XDG cache path)
    pub cache_dir: Option<PathBuf>,
}

impl Settings {
    /// Reads settings from the process environment
    ///
    /// Missing variables are recorded as `None` rather than failing here,
    /// so the CLI can still serve categories whose provider is configured.
    pub fn from_env() -> Self {
        Self {
            fmp_api_key: std::env::var("FMP_API_KEY").ok(),
            rapid_api_key: std::env::var("RAPID_API_KEY").ok(),
            rapid_api_host: std::env::var("RAPID_API_HOST").ok(),
            cache_dir: std::env::var("INVESTIQ_CACHE_DIR").ok().map(PathBuf::from),
        }
    }

    /// Returns the financial-data provider key or a readable error
    pub fn require_fmp_api_key(&self) -> anyhow::Result<&str> {
        self.fmp_api_key
            .as_deref()
            .context("FMP_API_KEY is required")
    }

    /// Returns the bonds provider key or a readable error
    pub fn require_rapid_api_key(&self) -> anyhow::Result<&str> {
        self.rapid_api_key
            .as_deref()
            .context("RAPID_API_KEY is required")
    }

    /// Returns the bonds provider host or a readable error
    pub fn require_rapid_api_host(&self) -> anyhow::Result<&str> {
        self.rapid_api_host
            .as_deref()
            .context("RAPID_API_HOST is required")
    }
}
