//! lyricfetch - cache-fronted song, album and lyric lookups
//!
//! This crate sits between a caller and the music-provider APIs it pulls
//! metadata from. It provides two pieces:
//!
//! - [`Resolver`] classifies whatever the user pasted (a bare id, a web
//!   URL, or a short link) into a provider, resource type and id.
//! - [`CachedProvider`] wraps a provider's fetch capability
//!   ([`MusicProvider`]) with a read-through [`CacheStore`], so repeated
//!   lookups of the same album, song or lyric do not hit the network.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use lyricfetch::{
//!     CacheStore, CachedProvider, CatalogProvider, ReqwestFetcher, Resolver, Selection,
//! };
//!
//! #[tokio::main]
//! async fn main() -> lyricfetch::Result<()> {
//!     let resolver = Resolver::new(Arc::new(ReqwestFetcher::new()?));
//!     let input = resolver
//!         .resolve("https://music.163.com/album?id=34720", Selection::default())
//!         .await?;
//!
//!     let provider = CatalogProvider::from_path("catalog.json".as_ref())?;
//!     let api = CachedProvider::new(Arc::new(provider), Arc::new(CacheStore::new()));
//!
//!     if let Some(song_ids) = api.album_song_ids(&input.id).await {
//!         for (id, outcome) in api.song_metadata(&song_ids).await {
//!             println!("{id}: {:?}", outcome.data().map(|s| &s.name));
//!         }
//!     }
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod output;
pub mod providers;
pub mod resolve;
pub mod telemetry;
pub mod types;

// Re-export main types at crate root
pub use cache::{CacheConfig, CacheStore};
pub use config::Config;
pub use error::{LyricError, Result};
pub use providers::{
    CachedProvider, CatalogProvider, HttpFetch, MusicProvider, ReqwestFetcher,
};
pub use resolve::Resolver;

pub use output::{OutputFilenameFormat, format_timestamp_millis, output_name, safe_filename};
pub use types::{
    FetchOutcome, LyricRecord, Provider, ResolvedInput, ResourceType, Selection, SongRecord,
};

/// Package version from Cargo.toml.
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
