//! Cache manager for persisting normalized row lists to disk
//!
//! Provides a `CacheManager` with a `set`/`get` contract over JSON files:
//! `set` replaces an entry wholesale with an expiry timestamp, and `get`
//! returns the stored value only while the entry is fresh. There is no
//! invalidation beyond expiry and no partial updates.

use chrono::{DateTime, Duration, Utc};
use directories::ProjectDirs;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Wrapper struct for cached data stored on disk
#[derive(Debug, Serialize, Deserialize)]
struct CacheEntry<T> {
    /// The cached row list
    data: T,
    /// When the entry was written
    cached_at: DateTime<Utc>,
    /// When the entry stops being served
    expires_at: DateTime<Utc>,
}

/// Manages reading and writing cached row lists to disk
///
/// Entries are stored as JSON files in an XDG-compliant cache directory
/// (`~/.cache/investiq/` on Linux). Keys are derived from the category and
/// optional filter, e.g. `bonds_CB` or `forex_data`. A `get` on an expired
/// entry is indistinguishable from a miss, so callers re-fetch and replace
/// the entry via `set` (last write wins).
#[derive(Debug, Clone)]
pub struct CacheManager {
    /// Directory where cache files are stored
    cache_dir: PathBuf,
}

impl CacheManager {
    /// Creates a new CacheManager using the XDG-compliant cache directory
    ///
    /// Returns `None` if the cache directory cannot be determined (e.g. no
    /// home directory).
    pub fn new() -> Option<Self> {
        let project_dirs = ProjectDirs::from("", "", "investiq")?;
        let cache_dir = project_dirs.cache_dir().to_path_buf();
        Some(Self { cache_dir })
    }

    /// Creates a new CacheManager with a custom cache directory
    ///
    /// Used when `INVESTIQ_CACHE_DIR` is set, and by tests.
    pub fn with_dir(cache_dir: PathBuf) -> Self {
        Self { cache_dir }
    }

    /// Returns the path to the cache file for the given key
    fn cache_path(&self, key: &str) -> PathBuf {
        self.cache_dir.join(format!("{}.json", key))
    }

    /// Stores a row list under `key`, replacing any previous entry
    ///
    /// # Arguments
    /// * `key` - Cache key (e.g. `bonds_CB`)
    /// * `rows` - The value to cache (must implement Serialize)
    /// * `ttl_hours` - How long the entry is served before it expires
    pub fn set<T: Serialize>(&self, key: &str, rows: &T, ttl_hours: u64) -> std::io::Result<()> {
        fs::create_dir_all(&self.cache_dir)?;

        let now = Utc::now();
        let entry = CacheEntry {
            data: rows,
            cached_at: now,
            expires_at: now + Duration::hours(ttl_hours as i64),
        };

        let json = serde_json::to_string_pretty(&entry)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        fs::write(self.cache_path(key), json)
    }

    /// Reads the row list stored under `key`
    ///
    /// Returns `None` if the entry does not exist, cannot be parsed, or has
    /// expired. A corrupt file is treated as a miss so the caller simply
    /// re-fetches and overwrites it.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let content = fs::read_to_string(self.cache_path(key)).ok()?;
        let entry: CacheEntry<T> = serde_json::from_str(&content).ok()?;

        if Utc::now() > entry.expires_at {
            return None;
        }

        Some(entry.data)
    }
}
