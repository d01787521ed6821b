//! Public types for the lyricfetch API.

mod outcome;
mod song;
mod source;

pub use outcome::FetchOutcome;
pub use song::{LyricRecord, SongRecord};
pub use source::{Provider, ResolvedInput, ResourceType, Selection};
