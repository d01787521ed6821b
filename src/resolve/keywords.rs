//! Keyword tables used to classify inputs.
//!
//! Tables are scanned in order and every match overwrites the previous
//! one, so later entries take precedence. Keep the order as is.

use crate::types::{Provider, ResourceType};

/// Domain fragment identifying each provider.
pub const PROVIDER_KEYWORDS: &[(Provider, &str)] = &[
    (Provider::NetEase, "163.com"),
    (Provider::QqMusic, "qq.com"),
];

const NETEASE_TYPE_KEYWORDS: &[(ResourceType, &str)] = &[
    (ResourceType::Song, "song?id="),
    (ResourceType::Album, "album?id="),
    (ResourceType::Playlist, "playlist?id="),
];

const QQ_MUSIC_TYPE_KEYWORDS: &[(ResourceType, &str)] = &[
    (ResourceType::Song, "songDetail/"),
    (ResourceType::Album, "albumDetail/"),
    (ResourceType::Playlist, "playlist/"),
];

/// URL fragment that precedes a QQ Music short link's query.
pub const QQ_MUSIC_SHORT_LINK: &str = "fcgi-bin/u";

/// URL fragments that precede a resource id, per resource type.
pub fn type_keywords(provider: Provider) -> &'static [(ResourceType, &'static str)] {
    match provider {
        Provider::NetEase => NETEASE_TYPE_KEYWORDS,
        Provider::QqMusic => QQ_MUSIC_TYPE_KEYWORDS,
    }
}

/// URL fragment preceding an id of `resource_type` on `provider`.
pub fn type_keyword(provider: Provider, resource_type: ResourceType) -> Option<&'static str> {
    type_keywords(provider)
        .iter()
        .find(|(t, _)| *t == resource_type)
        .map(|(_, keyword)| *keyword)
}
