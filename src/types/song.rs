//! Song and lyric payloads returned by providers.

use serde::{Deserialize, Serialize};

/// Metadata for one song.
///
/// The cache layer only reads [`display_id`](Self::display_id); everything
/// else is carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongRecord {
    /// Provider-internal id used for API calls.
    pub id: String,
    /// Id shown to users and used to key lyric lookups.
    pub display_id: String,
    pub name: String,
    pub singer: String,
    #[serde(default)]
    pub album: String,
    #[serde(default)]
    pub duration_ms: u64,
    /// Release date as epoch milliseconds, when the provider reports one.
    #[serde(default)]
    pub publish_time_ms: Option<i64>,
}

impl SongRecord {
    /// Create a record whose display id equals its id.
    pub fn new(id: impl Into<String>, name: impl Into<String>, singer: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            display_id: id.clone(),
            id,
            name: name.into(),
            singer: singer.into(),
            album: String::new(),
            duration_ms: 0,
            publish_time_ms: None,
        }
    }

    pub fn with_display_id(mut self, display_id: impl Into<String>) -> Self {
        self.display_id = display_id.into();
        self
    }

    pub fn with_album(mut self, album: impl Into<String>) -> Self {
        self.album = album.into();
        self
    }

    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn with_publish_time_ms(mut self, millis: i64) -> Self {
        self.publish_time_ms = Some(millis);
        self
    }
}

/// Lyric payload for one (song, verbatim) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LyricRecord {
    /// Original lyric text.
    pub lyric: String,
    #[serde(default)]
    pub translation: Option<String>,
    #[serde(default)]
    pub transliteration: Option<String>,
    /// Whether this is the verbatim (unsynchronized) variant.
    #[serde(default)]
    pub verbatim: bool,
}

impl LyricRecord {
    pub fn new(lyric: impl Into<String>, verbatim: bool) -> Self {
        Self {
            lyric: lyric.into(),
            translation: None,
            transliteration: None,
            verbatim,
        }
    }

    pub fn with_translation(mut self, translation: impl Into<String>) -> Self {
        self.translation = Some(translation.into());
        self
    }

    pub fn with_transliteration(mut self, transliteration: impl Into<String>) -> Self {
        self.transliteration = Some(transliteration.into());
        self
    }
}
