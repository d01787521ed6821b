//! Input classification.
//!
//! Turns whatever the user pasted (a bare id, a web URL, or a short link)
//! into a [`ResolvedInput`]. Rules run cheapest first:
//!
//! 1. blank input is rejected;
//! 2. the provider is detected from its domain, then the resource type
//!    from the URL path (see [`keywords`]), both starting from the
//!    caller's [`Selection`];
//! 3. a bare id in the provider's id format is returned as is;
//! 4. otherwise the id is sliced out of the URL after the type keyword;
//! 5. QQ Music short links are fetched and the id read from the page.
//!
//! Only step 5 touches the network.

pub mod keywords;
pub mod short_link;

use std::sync::Arc;

use tracing::debug;

use crate::providers::HttpFetch;
use crate::types::{Provider, ResolvedInput, ResourceType, Selection};
use crate::{LyricError, Result};

use keywords::{PROVIDER_KEYWORDS, QQ_MUSIC_SHORT_LINK, type_keyword, type_keywords};

/// Classifies raw inputs into provider, resource type and id.
pub struct Resolver {
    http: Arc<dyn HttpFetch>,
}

impl Resolver {
    /// Create a resolver that uses `http` for short-link lookups.
    pub fn new(http: Arc<dyn HttpFetch>) -> Self {
        Self { http }
    }

    /// Classify `input`, starting from the caller's current `preset`.
    ///
    /// Fails with [`LyricError::InputInvalid`] when no rule yields an id.
    pub async fn resolve(&self, input: &str, preset: Selection) -> Result<ResolvedInput> {
        let input = input.trim();
        if input.is_empty() {
            return Err(LyricError::input_invalid("input is empty"));
        }

        let selection = detect(input, preset);

        if let Some(id) = extract_id(input, selection) {
            debug!(input, provider = %selection.provider, resource_type = %selection.resource_type, id = %id, "resolved input");
            return Ok(ResolvedInput::new(
                selection.provider,
                selection.resource_type,
                id,
            ));
        }

        if selection.provider == Provider::QqMusic
            && input.contains(QQ_MUSIC_SHORT_LINK)
            && let Some(id) = short_link::resolve(self.http.as_ref(), input).await
        {
            debug!(input, id = %id, "resolved short link");
            return Ok(ResolvedInput::new(Provider::QqMusic, ResourceType::Song, id));
        }

        Err(LyricError::input_invalid(format!(
            "cannot find a {} {} id in '{input}'",
            selection.provider, selection.resource_type
        )))
    }
}

/// Detect provider and resource type, overriding `preset` where `input`
/// names them. When several keywords match, the last table entry wins.
pub fn detect(input: &str, preset: Selection) -> Selection {
    let mut selection = preset;

    for (provider, keyword) in PROVIDER_KEYWORDS {
        if input.contains(keyword) {
            selection.provider = *provider;
        }
    }

    for (resource_type, keyword) in type_keywords(selection.provider) {
        if input.contains(keyword) {
            selection.resource_type = *resource_type;
        }
    }

    selection
}

/// Extract the id without touching the network.
///
/// Returns `input` itself when it already is an id in the provider's
/// format, or the alphanumeric run following the type keyword in a URL.
/// An empty run yields `None` rather than an empty id, so a URL such as
/// `song?id=&x=1` is rejected instead of resolving to `""`.
pub fn extract_id(input: &str, selection: Selection) -> Option<String> {
    if is_bare_id(input, selection.provider) {
        return Some(input.to_string());
    }

    let keyword = type_keyword(selection.provider, selection.resource_type)?;
    let start = input.find(keyword)? + keyword.len();
    let id: String = input[start..]
        .chars()
        .take_while(|c| c.is_alphanumeric())
        .collect();

    (!id.is_empty()).then_some(id)
}

/// Whether `input` is, as a whole, an id in `provider`'s format.
pub fn is_bare_id(input: &str, provider: Provider) -> bool {
    match provider {
        Provider::NetEase => !input.is_empty() && input.chars().all(|c| c.is_ascii_digit()),
        Provider::QqMusic => input.chars().all(|c| c.is_ascii_alphanumeric()),
    }
}
