//! Provider traits.
//!
//! [`MusicProvider`] is the fetch capability of one music catalog: it talks
//! to the provider's API and knows nothing about caching. Wrap it in a
//! [`CachedProvider`](super::CachedProvider) to get read-through caching.
//!
//! # Failure semantics
//!
//! Single-item fetches return `Err` on failure. The batch song fetch reports
//! failures per id as [`FetchOutcome::Failure`] so that one bad id does not
//! sink the rest of the batch.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::Result;
use crate::types::{FetchOutcome, LyricRecord, SongRecord};

/// Fetch capability for one music catalog.
#[async_trait]
pub trait MusicProvider: Send + Sync {
    /// Provider name for logging/metrics.
    fn name(&self) -> &str;

    /// Song ids of an album, in track order.
    async fn album_song_ids(&self, album_id: &str) -> Result<Vec<String>>;

    /// Metadata for a batch of songs, keyed by song id.
    ///
    /// Must accept an empty slice and return an empty map for it.
    async fn song_metadata(&self, song_ids: &[String]) -> HashMap<String, FetchOutcome<SongRecord>>;

    /// Lyric of `song`. `verbatim` selects the unsynchronized variant.
    async fn lyric(&self, song: &SongRecord, verbatim: bool) -> Result<LyricRecord>;
}

/// Plain HTTP GET capability, used to resolve short links.
#[async_trait]
pub trait HttpFetch: Send + Sync {
    /// Fetch `url` and return the response body as text.
    async fn get_text(&self, url: &str) -> Result<String>;
}
