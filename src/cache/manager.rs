//! In-memory response cache keyed by operation name
//!
//! Provides a `ResponseCache` that stores decoded API payloads together with the
//! time they were fetched, and a read-through helper that only invokes the
//! underlying fetch when the stored entry is missing or older than the TTL.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use tracing::debug;

/// A cached payload and the time it was fetched
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry<T> {
    /// When the data was fetched
    pub cached_at: DateTime<Utc>,
    /// The cached data
    pub data: T,
}

impl<T> CacheEntry<T> {
    /// Whether this entry is still fresh at `now` for the given TTL
    ///
    /// An entry is valid iff `now - cached_at < ttl`, so a zero TTL never
    /// serves from cache.
    pub fn is_fresh(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now - self.cached_at < ttl
    }
}

/// Stores at most one entry per cache key
///
/// Entries are never evicted. A stale entry stays in the map until the next
/// fetch for its key overwrites it.
///
/// The key is fixed per operation and does not include call arguments, so
/// only zero-argument operations should be routed through here.
#[derive(Debug, Clone)]
pub struct ResponseCache<T> {
    entries: HashMap<String, CacheEntry<T>>,
}

impl<T> Default for ResponseCache<T> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<T: Clone> ResponseCache<T> {
    /// Creates an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the entry stored under `key`, fresh or not
    pub fn entry(&self, key: &str) -> Option<&CacheEntry<T>> {
        self.entries.get(key)
    }

    /// Number of keys that have ever been stored
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the payload for `key` if it is fresh, otherwise runs `fetch`
    ///
    /// `clock` is read once for the freshness check and, on a miss, again
    /// after `fetch` returns; the entry is stamped with the second reading so
    /// a slow fetch does not eat into the TTL. Errors from `fetch` are
    /// returned as-is and leave the cache untouched.
    ///
    /// # Arguments
    /// * `key` - Name of the cached operation (e.g. "surveys")
    /// * `ttl` - How long an entry is served without refetching
    /// * `clock` - Source of the current time
    /// * `fetch` - Produces a fresh payload on a miss
    pub fn get_or_fetch<E, C, F>(
        &mut self,
        key: &str,
        ttl: Duration,
        clock: C,
        fetch: F,
    ) -> Result<T, E>
    where
        C: Fn() -> DateTime<Utc>,
        F: FnOnce() -> Result<T, E>,
    {
        if let Some(entry) = self.entries.get(key) {
            if entry.is_fresh(clock(), ttl) {
                debug!(key, cached_at = %entry.cached_at, "cache hit");
                return Ok(entry.data.clone());
            }
            debug!(key, cached_at = %entry.cached_at, "cache entry stale");
        } else {
            debug!(key, "cache miss");
        }

        let data = fetch()?;
        let cached_at = clock();
        self.entries.insert(
            key.to_string(),
            CacheEntry {
                cached_at,
                data: data.clone(),
            },
        );
        debug!(key, %cached_at, "cache entry stored");
        Ok(data)
    }
}
