//! QQ Music short-link resolution.
//!
//! Short links (`https://c6.y.qq.com/base/fcgi-bin/u?__=...`) carry no id.
//! The page they serve embeds its first-page state as
//! `window.__ssrFirstPageData__ = {...}</script>`; the song id is read from
//! `songList[0].id` in that object.

use serde_json::Value;
use tracing::{debug, warn};

use crate::providers::HttpFetch;
use crate::telemetry;

const SSR_DATA_MARKER: &str = "window.__ssrFirstPageData__";
const SCRIPT_END: &str = "</script>";

/// Fetch `url` and pull the first song id out of the page.
///
/// Every failure (network, missing marker, bad JSON, empty list) is logged
/// and yields `None`.
pub async fn resolve(http: &dyn HttpFetch, url: &str) -> Option<String> {
    let id = match http.get_text(url).await {
        Ok(page) => {
            let id = song_id_from_page(&page);
            if id.is_none() {
                debug!(url, "no song id in short-link page");
            }
            id
        }
        Err(e) => {
            warn!(url, error = %e, "short-link fetch failed");
            None
        }
    };
    metrics::counter!(telemetry::SHORT_LINK_RESOLUTIONS_TOTAL,
        "status" => telemetry::status_label(id.is_some()),
    )
    .increment(1);
    id
}

/// Extract `songList[0].id` from the page's embedded first-page data.
pub fn song_id_from_page(page: &str) -> Option<String> {
    let start = page.find(SSR_DATA_MARKER)? + SSR_DATA_MARKER.len();
    let end = start + page[start..].find(SCRIPT_END)?;

    // Skip the `=` of the assignment.
    let mut data = page[start..end].trim().chars();
    data.next()?;

    let state: Value = serde_json::from_str(data.as_str()).ok()?;
    let first = state.get("songList")?.as_array()?.first()?;
    match first.get("id")? {
        Value::String(id) if !id.is_empty() => Some(id.clone()),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(state: &str) -> String {
        format!(
            "<html><head><script>window.__ssrFirstPageData__ = {state}</script></head></html>"
        )
    }

    #[test]
    fn extracts_string_id() {
        let html = page(r#"{"songList":[{"id":"001g0Dcb0nxHiP"},{"id":"other"}]}"#);
        assert_eq!(song_id_from_page(&html).as_deref(), Some("001g0Dcb0nxHiP"));
    }

    #[test]
    fn extracts_numeric_id() {
        let html = page(r#"{"songList":[{"id":97773}]}"#);
        assert_eq!(song_id_from_page(&html).as_deref(), Some("97773"));
    }

    #[test]
    fn missing_marker() {
        assert!(song_id_from_page("<html><script>var x = 1</script></html>").is_none());
    }

    #[test]
    fn missing_script_end() {
        let html = r#"window.__ssrFirstPageData__ = {"songList":[{"id":"a"}]}"#;
        assert!(song_id_from_page(html).is_none());
    }

    #[test]
    fn empty_song_list() {
        assert!(song_id_from_page(&page(r#"{"songList":[]}"#)).is_none());
    }

    #[test]
    fn malformed_json() {
        assert!(song_id_from_page(&page("{not json")).is_none());
    }
}
