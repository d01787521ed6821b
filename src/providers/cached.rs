//! Read-through caching facade over a [`MusicProvider`].
//!
//! [`CachedProvider`] consults the shared [`CacheStore`] first and only
//! calls the wrapped provider on a miss. Successful fetches are written
//! back; failures are never cached, so the next call with the same key
//! fetches again.
//!
//! # At most one fetch per key
//!
//! Album and lyric lookups coalesce concurrent misses on the same key into
//! a single provider call (see [`Namespace::get_or_fetch`]). Batch song
//! lookups serve hits without locking; the miss path runs under a single
//! writer lock owned by the [`CacheStore`] and re-checks the cache after
//! acquiring it, so ids that a concurrent batch just fetched are not
//! requested again, even by another facade sharing the store.
//!
//! The lock is held across the provider's batch call. Batches with no ids
//! in common still run one after another.
//!
//! [`Namespace::get_or_fetch`]: crate::cache::Namespace::get_or_fetch

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::{debug, warn};

use super::traits::MusicProvider;
use crate::cache::{CacheStore, lyric_key};
use crate::telemetry::{self, NAMESPACE_ALBUM, NAMESPACE_LYRIC, NAMESPACE_SONG};
use crate::types::{FetchOutcome, LyricRecord, SongRecord};

/// Caching facade over one provider.
pub struct CachedProvider {
    inner: Arc<dyn MusicProvider>,
    cache: Arc<CacheStore>,
}

impl CachedProvider {
    /// Wrap `inner`, caching into `cache`.
    ///
    /// Several facades may share one store; keys are not namespaced by
    /// provider, so share a store only between facades whose ids cannot
    /// collide.
    pub fn new(inner: Arc<dyn MusicProvider>, cache: Arc<CacheStore>) -> Self {
        Self { inner, cache }
    }

    /// Name of the wrapped provider.
    pub fn name(&self) -> &str {
        self.inner.name()
    }

    /// The shared cache store.
    pub fn cache(&self) -> &Arc<CacheStore> {
        &self.cache
    }

    /// Song ids of an album.
    ///
    /// Returns `None` if the album is not cached and the provider fetch
    /// fails.
    pub async fn album_song_ids(&self, album_id: &str) -> Option<Vec<String>> {
        self.cache
            .albums()
            .get_or_fetch(album_id, async {
                let result = self.inner.album_song_ids(album_id).await;
                self.record_fetch(NAMESPACE_ALBUM, result.is_ok());
                match result {
                    Ok(ids) => {
                        debug!(provider = self.name(), album_id, count = ids.len(), "fetched album");
                        Some(ids)
                    }
                    Err(e) => {
                        warn!(provider = self.name(), album_id, error = %e, "album fetch failed");
                        None
                    }
                }
            })
            .await
    }

    /// Metadata for a batch of songs.
    ///
    /// The result has one entry per distinct requested id (plus any extra
    /// ids the provider chose to return). Cached ids are served without a
    /// provider call; the rest are fetched in a single batch. Ids the
    /// provider leaves out of its response map to a failure.
    pub async fn song_metadata(&self, song_ids: &[String]) -> HashMap<String, FetchOutcome<SongRecord>> {
        let (mut result, pending) = self.partition_songs(song_ids, true).await;
        if pending.is_empty() {
            return result;
        }

        let _writer = self.cache.lock_song_writer().await;

        // A concurrent batch may have fetched some of these while we waited.
        let (hits, pending) = self.partition_songs(&pending, false).await;
        result.extend(hits);
        if pending.is_empty() {
            return result;
        }

        debug!(provider = self.name(), count = pending.len(), "fetching song batch");
        let fetched = self.inner.song_metadata(&pending).await;

        for (song_id, outcome) in fetched {
            self.record_fetch(NAMESPACE_SONG, outcome.is_success());
            match &outcome {
                FetchOutcome::Success(song) => {
                    self.cache.songs().put(song_id.clone(), song.clone()).await;
                }
                FetchOutcome::Failure(reason) => {
                    warn!(provider = self.name(), song_id = %song_id, reason = %reason, "song fetch failed");
                }
            }
            result.insert(song_id, outcome);
        }

        for song_id in pending {
            result
                .entry(song_id)
                .or_insert_with(|| FetchOutcome::failure("song missing from provider response"));
        }

        result
    }

    /// Lyric of `song`, verbatim or synchronized.
    ///
    /// Returns `None` if the lyric is not cached and the provider fetch
    /// fails.
    pub async fn lyric(&self, song: &SongRecord, verbatim: bool) -> Option<LyricRecord> {
        let key = lyric_key(&song.display_id, verbatim);
        self.cache
            .lyrics()
            .get_or_fetch(&key, async {
                let result = self.inner.lyric(song, verbatim).await;
                self.record_fetch(NAMESPACE_LYRIC, result.is_ok());
                match result {
                    Ok(lyric) => Some(lyric),
                    Err(e) => {
                        warn!(
                            provider = self.name(),
                            song_id = %song.display_id,
                            verbatim,
                            error = %e,
                            "lyric fetch failed"
                        );
                        None
                    }
                }
            })
            .await
    }

    /// Split `song_ids` into cached outcomes and ids still to request.
    ///
    /// Duplicate ids are requested once.
    async fn partition_songs(
        &self,
        song_ids: &[String],
        record_metrics: bool,
    ) -> (HashMap<String, FetchOutcome<SongRecord>>, Vec<String>) {
        let mut cached = HashMap::new();
        let mut pending = Vec::new();
        let mut seen = HashSet::new();

        for song_id in song_ids {
            if !seen.insert(song_id.as_str()) {
                continue;
            }
            let hit = if record_metrics {
                self.cache.songs().get(song_id).await
            } else {
                self.cache.songs().peek(song_id).await
            };
            match hit {
                Some(song) => {
                    cached.insert(song_id.clone(), FetchOutcome::Success(song));
                }
                None => pending.push(song_id.clone()),
            }
        }

        (cached, pending)
    }

    fn record_fetch(&self, namespace: &'static str, ok: bool) {
        metrics::counter!(telemetry::PROVIDER_FETCHES_TOTAL,
            "namespace" => namespace,
            "provider" => self.name().to_owned(),
            "status" => telemetry::status_label(ok),
        )
        .increment(1);
    }
}
