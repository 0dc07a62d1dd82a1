//! Cache manager for persisting API responses to disk
//!
//! Provides a `CacheManager` that stores serializable data to JSON files,
//! stamped with the time the data was fetched. Freshness is evaluated by the
//! reader against a caller-supplied TTL, so stale entries read the same as
//! missing ones from the caller's point of view.

use chrono::{DateTime, Duration, Utc};
use directories::ProjectDirs;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Wrapper struct for cached data stored on disk
///
/// Serialized as a single JSON document, so an entry on disk is either absent
/// or holds a payload and fetch time that were written together.
#[derive(Debug, Serialize, Deserialize)]
struct CacheEnvelope<T> {
    /// The cached data
    data: T,
    /// When the data was fetched
    fetched_at: DateTime<Utc>,
}

/// Result of reading from cache
#[derive(Debug)]
pub struct CachedEntry<T> {
    /// The cached data
    pub data: T,
    /// When the data was originally fetched
    pub fetched_at: DateTime<Utc>,
}

impl<T> CachedEntry<T> {
    /// Whether this entry was fetched less than `ttl` ago
    pub fn is_fresh(&self, ttl: Duration) -> bool {
        is_fresh(self.fetched_at, Utc::now(), ttl)
    }
}

/// Returns true iff an entry fetched at `fetched_at` is still fresh at `now`.
///
/// The gate is strict: an entry aged exactly `ttl` is already stale.
pub fn is_fresh(fetched_at: DateTime<Utc>, now: DateTime<Utc>, ttl: Duration) -> bool {
    now.signed_duration_since(fetched_at) < ttl
}

/// Manages reading and writing cached data to disk
///
/// The cache manager stores data as JSON files in an XDG-compliant cache
/// directory (`~/.cache/skycast/` on Linux). Entries are overwritten in place
/// on each write and never deleted.
#[derive(Debug, Clone)]
pub struct CacheManager {
    /// Directory where cache files are stored
    cache_dir: PathBuf,
}

impl CacheManager {
    /// Creates a new CacheManager using XDG-compliant cache directory
    ///
    /// Uses `~/.cache/skycast/` on Linux, or equivalent XDG path on other platforms.
    /// Returns `None` if the cache directory cannot be determined (e.g., no home directory).
    pub fn new() -> Option<Self> {
        let project_dirs = ProjectDirs::from("", "", "skycast")?;
        let cache_dir = project_dirs.cache_dir().to_path_buf();
        Some(Self { cache_dir })
    }

    /// Creates a new CacheManager with a custom cache directory
    ///
    /// Useful for testing or when a specific cache location is needed.
    pub fn with_dir(cache_dir: PathBuf) -> Self {
        Self { cache_dir }
    }

    /// Returns the path to a cache file for the given key
    fn cache_path(&self, key: &str) -> PathBuf {
        self.cache_dir.join(format!("{}.json", key))
    }

    /// Ensures the cache directory exists
    fn ensure_dir(&self) -> std::io::Result<()> {
        fs::create_dir_all(&self.cache_dir)
    }

    /// Writes data to the cache, stamped with the current time
    ///
    /// Overwrites any previous entry under the same key.
    ///
    /// # Arguments
    /// * `key` - Unique identifier for the cache entry (e.g., "weather_data")
    /// * `data` - The data to cache (must implement Serialize)
    ///
    /// # Returns
    /// * `Ok(())` on success
    /// * `Err` if directory creation or file writing fails
    pub fn write<T: Serialize>(&self, key: &str, data: &T) -> std::io::Result<()> {
        self.ensure_dir()?;

        let envelope = CacheEnvelope {
            data,
            fetched_at: Utc::now(),
        };

        let json = serde_json::to_string_pretty(&envelope)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        fs::write(self.cache_path(key), json)
    }

    /// Reads data from the cache
    ///
    /// Returns `None` if the cache entry doesn't exist or cannot be parsed;
    /// a malformed entry on disk is indistinguishable from a missing one.
    ///
    /// # Arguments
    /// * `key` - The cache key to read
    ///
    /// # Returns
    /// * `Some(CachedEntry<T>)` if the entry exists and can be parsed
    /// * `None` if the entry doesn't exist or parsing fails
    pub fn read<T: DeserializeOwned>(&self, key: &str) -> Option<CachedEntry<T>> {
        let path = self.cache_path(key);
        let content = fs::read_to_string(path).ok()?;
        let envelope: CacheEnvelope<T> = serde_json::from_str(&content).ok()?;

        Some(CachedEntry {
            data: envelope.data,
            fetched_at: envelope.fetched_at,
        })
    }
}
