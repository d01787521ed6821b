//! A single keyed namespace of the cache store.

use std::future::Future;
use std::time::Duration;

use moka::future::Cache;
use tracing::debug;

use crate::telemetry;

/// One independent key/value namespace.
///
/// Thread-safe and cheap to share behind an `Arc`. Keys are strings; values
/// are cloned out on read.
pub struct Namespace<V> {
    name: &'static str,
    entries: Cache<String, V>,
}

impl<V> Namespace<V>
where
    V: Clone + Send + Sync + 'static,
{
    /// Create a namespace. `None` limits mean unbounded size and entries
    /// that live until the process exits.
    pub(crate) fn new(name: &'static str, max_entries: Option<u64>, ttl: Option<Duration>) -> Self {
        let mut builder = Cache::builder().name(name);
        if let Some(max) = max_entries {
            builder = builder.max_capacity(max);
        }
        if let Some(ttl) = ttl {
            builder = builder.time_to_live(ttl);
        }
        Self {
            name,
            entries: builder.build(),
        }
    }

    /// Namespace name, used in logs and metric labels.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether `key` currently has a value.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Look up `key`.
    ///
    /// Returns `None` on cache miss. Emits cache hit/miss metrics.
    pub async fn get(&self, key: &str) -> Option<V> {
        let value = self.entries.get(key).await;
        if value.is_some() {
            metrics::counter!(telemetry::CACHE_HITS_TOTAL, "namespace" => self.name).increment(1);
            debug!(namespace = self.name, key, "cache hit");
        } else {
            metrics::counter!(telemetry::CACHE_MISSES_TOTAL, "namespace" => self.name)
                .increment(1);
            debug!(namespace = self.name, key, "cache miss");
        }
        value
    }

    /// Look up `key` without recording hit/miss metrics.
    pub(crate) async fn peek(&self, key: &str) -> Option<V> {
        self.entries.get(key).await
    }

    /// Insert (or overwrite) `key`.
    pub async fn put(&self, key: impl Into<String>, value: V) {
        self.entries.insert(key.into(), value).await;
    }

    /// Return the cached value for `key`, or run `fetch` and cache its result.
    ///
    /// Concurrent callers missing on the same key share a single `fetch`;
    /// the others wait for it and receive its result. A `None` from `fetch`
    /// is returned to every waiter and nothing is stored, so the next call
    /// fetches again.
    pub async fn get_or_fetch<F>(&self, key: &str, fetch: F) -> Option<V>
    where
        F: Future<Output = Option<V>>,
    {
        if let Some(hit) = self.get(key).await {
            return Some(hit);
        }
        self.entries.optionally_get_with(key.to_string(), fetch).await
    }

    /// Approximate number of entries. Pending writes may not be counted yet.
    pub fn len(&self) -> u64 {
        self.entries.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Evict all entries.
    pub fn clear(&self) {
        self.entries.invalidate_all();
    }

    /// Apply pending maintenance so that [`len`](Self::len) is exact.
    pub async fn sync(&self) {
        self.entries.run_pending_tasks().await;
    }
}
