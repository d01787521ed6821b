//! Telemetry metric name constants.
//!
//! Consumers install their own `metrics` recorder (e.g. prometheus,
//! statsd); without a recorder installed, all metric calls are no-ops.
//!
//! # Metric naming conventions
//!
//! All metrics are prefixed with `lyricfetch_`. Counters end in `_total`.
//!
//! # Common labels
//!
//! - `namespace`: cache namespace: "album", "song" or "lyric"
//! - `provider`: provider name (e.g. "netease", "qq")
//! - `status`: outcome: "ok" or "error"

/// Total cache hits.
///
/// Labels: `namespace`.
pub const CACHE_HITS_TOTAL: &str = "lyricfetch_cache_hits_total";

/// Total cache misses.
///
/// Labels: `namespace`.
pub const CACHE_MISSES_TOTAL: &str = "lyricfetch_cache_misses_total";

/// Total fetches dispatched to a provider after a cache miss.
///
/// Labels: `namespace`, `provider`, `status` ("ok" | "error").
pub const PROVIDER_FETCHES_TOTAL: &str = "lyricfetch_provider_fetches_total";

/// Total short-link resolution attempts.
///
/// Labels: `status` ("ok" | "error").
pub const SHORT_LINK_RESOLUTIONS_TOTAL: &str = "lyricfetch_short_link_resolutions_total";

pub(crate) const NAMESPACE_ALBUM: &str = "album";
pub(crate) const NAMESPACE_SONG: &str = "song";
pub(crate) const NAMESPACE_LYRIC: &str = "lyric";

pub(crate) fn status_label(ok: bool) -> &'static str {
    if ok { "ok" } else { "error" }
}
