//! Offline provider backed by a JSON catalog file.
//!
//! The catalog format mirrors what the provider APIs return, keyed the way
//! the cache is:
//!
//! ```json
//! {
//!   "name": "netease",
//!   "albums": { "100": ["1", "2"] },
//!   "songs": {
//!     "1": { "id": "1", "display_id": "1", "name": "Song", "singer": "Singer" }
//!   },
//!   "lyrics": {
//!     "1": { "synced": { "lyric": "[00:01.00]la" }, "verbatim": { "lyric": "la", "verbatim": true } }
//!   }
//! }
//! ```
//!
//! Lyrics are keyed by the song's display id.

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::traits::MusicProvider;
use crate::types::{FetchOutcome, LyricRecord, SongRecord};
use crate::{LyricError, Result};

/// Both lyric variants of one song.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogLyrics {
    #[serde(default)]
    pub synced: Option<LyricRecord>,
    #[serde(default)]
    pub verbatim: Option<LyricRecord>,
}

/// In-memory catalog contents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub albums: HashMap<String, Vec<String>>,
    #[serde(default)]
    pub songs: HashMap<String, SongRecord>,
    #[serde(default)]
    pub lyrics: HashMap<String, CatalogLyrics>,
}

fn default_name() -> String {
    "catalog".to_string()
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            name: default_name(),
            albums: HashMap::new(),
            songs: HashMap::new(),
            lyrics: HashMap::new(),
        }
    }
}

/// [`MusicProvider`] serving from a [`Catalog`].
pub struct CatalogProvider {
    catalog: Catalog,
}

impl CatalogProvider {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Parse a catalog from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    /// Load a catalog file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            LyricError::Configuration(format!("failed to read catalog {}: {e}", path.display()))
        })?;
        let provider = Self::from_json(&content)?;
        info!(
            path = %path.display(),
            albums = provider.catalog.albums.len(),
            songs = provider.catalog.songs.len(),
            "loaded catalog"
        );
        Ok(provider)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

#[async_trait]
impl MusicProvider for CatalogProvider {
    fn name(&self) -> &str {
        &self.catalog.name
    }

    async fn album_song_ids(&self, album_id: &str) -> Result<Vec<String>> {
        self.catalog
            .albums
            .get(album_id)
            .cloned()
            .ok_or_else(|| LyricError::NotFound(format!("album {album_id}")))
    }

    async fn song_metadata(&self, song_ids: &[String]) -> HashMap<String, FetchOutcome<SongRecord>> {
        song_ids
            .iter()
            .map(|id| {
                let outcome = match self.catalog.songs.get(id) {
                    Some(song) => FetchOutcome::Success(song.clone()),
                    None => FetchOutcome::failure(format!("song {id} not in catalog")),
                };
                (id.clone(), outcome)
            })
            .collect()
    }

    async fn lyric(&self, song: &SongRecord, verbatim: bool) -> Result<LyricRecord> {
        let entry = self.catalog.lyrics.get(&song.display_id);
        let variant = entry.and_then(|l| if verbatim { l.verbatim.clone() } else { l.synced.clone() });
        variant.ok_or_else(|| {
            LyricError::NotFound(format!(
                "lyric for song {} (verbatim: {verbatim})",
                song.display_id
            ))
        })
    }
}
