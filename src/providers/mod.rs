//! Provider capabilities and the caching facade.
//!
//! Concrete provider API clients implement [`MusicProvider`]; this crate
//! ships [`CatalogProvider`] for offline use. [`CachedProvider`] adds the
//! read-through cache on top of any of them.

pub mod cached;
pub mod catalog;
pub mod http;
pub mod traits;

pub use cached::CachedProvider;
pub use catalog::{Catalog, CatalogLyrics, CatalogProvider};
pub use http::ReqwestFetcher;
pub use traits::{HttpFetch, MusicProvider};
