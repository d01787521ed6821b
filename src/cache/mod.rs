//! Caching subsystem.
//!
//! [`CacheStore`] holds three independent namespaces:
//!
//! - **albums**: album id → ordered song ids
//! - **songs**: song id → [`SongRecord`]
//! - **lyrics**: [`lyric_key`] of (display id, verbatim flag) → [`LyricRecord`]
//!
//! The store is constructed once and shared (`Arc<CacheStore>`) with every
//! [`CachedProvider`](crate::providers::CachedProvider) that should see the
//! same entries. With the default [`CacheConfig`] there is no eviction:
//! entries live until the process exits.

mod namespace;

pub use namespace::Namespace;

use std::time::Duration;

use tokio::sync::{Mutex, MutexGuard};

use crate::telemetry::{NAMESPACE_ALBUM, NAMESPACE_LYRIC, NAMESPACE_SONG};
use crate::types::{LyricRecord, SongRecord};

/// Configuration for the cache store.
///
/// Both limits are off by default.
///
/// ```rust
/// # use lyricfetch::CacheConfig;
/// # use std::time::Duration;
/// let config = CacheConfig::new()
///     .max_entries(10_000)
///     .ttl(Duration::from_secs(3600));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CacheConfig {
    /// Maximum number of entries per namespace. `None` = unbounded.
    pub max_entries: Option<u64>,
    /// Time-to-live for entries. `None` = process lifetime.
    pub ttl: Option<Duration>,
}

impl CacheConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bound each namespace to `n` entries.
    pub fn max_entries(mut self, n: u64) -> Self {
        self.max_entries = Some(n);
        self
    }

    /// Expire entries `ttl` after insertion.
    pub fn ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }
}

/// In-memory store for album track listings, song metadata and lyrics.
pub struct CacheStore {
    albums: Namespace<Vec<String>>,
    songs: Namespace<SongRecord>,
    lyrics: Namespace<LyricRecord>,
    /// Serializes batch song misses across every facade sharing this store.
    song_writer: Mutex<()>,
}

impl CacheStore {
    /// Create an unbounded store.
    pub fn new() -> Self {
        Self::with_config(&CacheConfig::default())
    }

    pub fn with_config(config: &CacheConfig) -> Self {
        Self {
            albums: Namespace::new(NAMESPACE_ALBUM, config.max_entries, config.ttl),
            songs: Namespace::new(NAMESPACE_SONG, config.max_entries, config.ttl),
            lyrics: Namespace::new(NAMESPACE_LYRIC, config.max_entries, config.ttl),
            song_writer: Mutex::new(()),
        }
    }

    /// Lock held while a batch of song misses is fetched and written back.
    pub(crate) async fn lock_song_writer(&self) -> MutexGuard<'_, ()> {
        self.song_writer.lock().await
    }

    /// Album id → song ids.
    pub fn albums(&self) -> &Namespace<Vec<String>> {
        &self.albums
    }

    /// Song id → song metadata.
    pub fn songs(&self) -> &Namespace<SongRecord> {
        &self.songs
    }

    /// Lyric key → lyric. Keys are built with [`lyric_key`].
    pub fn lyrics(&self) -> &Namespace<LyricRecord> {
        &self.lyrics
    }

    /// Evict every entry in all three namespaces.
    pub fn clear(&self) {
        self.albums.clear();
        self.songs.clear();
        self.lyrics.clear();
    }
}

impl Default for CacheStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Cache key for a lyric: `"{display_id}_True"` or `"{display_id}_False"`.
///
/// The capitalised flag spelling is part of the key format and must not
/// change, or previously written keys stop matching.
pub fn lyric_key(display_id: &str, verbatim: bool) -> String {
    let flag = if verbatim { "True" } else { "False" };
    format!("{display_id}_{flag}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lyric_key_format() {
        assert_eq!(lyric_key("123", true), "123_True");
        assert_eq!(lyric_key("123", false), "123_False");
    }

    #[test]
    fn lyric_key_separates_variants() {
        assert_ne!(lyric_key("abc", true), lyric_key("abc", false));
    }

    #[test]
    fn cache_config_defaults_are_unbounded() {
        let config = CacheConfig::default();
        assert!(config.max_entries.is_none());
        assert!(config.ttl.is_none());
    }

    #[test]
    fn cache_config_builder() {
        let config = CacheConfig::new()
            .max_entries(500)
            .ttl(Duration::from_secs(60));
        assert_eq!(config.max_entries, Some(500));
        assert_eq!(config.ttl, Some(Duration::from_secs(60)));
    }

    #[tokio::test]
    async fn namespaces_are_independent() {
        let store = CacheStore::new();
        store.albums().put("1", vec!["10".to_string()]).await;

        assert!(store.albums().contains("1"));
        assert!(!store.songs().contains("1"));
        assert!(!store.lyrics().contains("1"));
    }

    #[tokio::test]
    async fn clear_empties_all_namespaces() {
        let store = CacheStore::new();
        store.albums().put("a", vec![]).await;
        store
            .songs()
            .put("s", SongRecord::new("s", "name", "singer"))
            .await;
        store
            .lyrics()
            .put(lyric_key("s", false), LyricRecord::new("la", false))
            .await;

        store.clear();

        assert!(!store.albums().contains("a"));
        assert!(!store.songs().contains("s"));
        assert!(!store.lyrics().contains("s_False"));
    }
}
