//! Music sources and the kinds of resources they serve.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::LyricError;

/// A music catalog service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Provider {
    /// NetEase Cloud Music. Ids are digits only.
    #[serde(rename = "netease")]
    NetEase,
    /// QQ Music. Ids are ASCII alphanumeric.
    #[serde(rename = "qq")]
    QqMusic,
}

impl Provider {
    /// Short lowercase name, as used in config files and metric labels.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NetEase => "netease",
            Self::QqMusic => "qq",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = LyricError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "netease" | "163" => Ok(Self::NetEase),
            "qq" | "qqmusic" => Ok(Self::QqMusic),
            other => Err(LyricError::input_invalid(format!(
                "unknown provider '{other}'"
            ))),
        }
    }
}

/// The kind of entity a resource id refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Song,
    Album,
    Playlist,
}

impl ResourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Song => "song",
            Self::Album => "album",
            Self::Playlist => "playlist",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = LyricError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "song" => Ok(Self::Song),
            "album" => Ok(Self::Album),
            "playlist" => Ok(Self::Playlist),
            other => Err(LyricError::input_invalid(format!(
                "unknown resource type '{other}'"
            ))),
        }
    }
}

/// The provider and resource type a caller currently has selected.
///
/// The classifier starts from this selection and overrides either part
/// when the input names a different one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub provider: Provider,
    pub resource_type: ResourceType,
}

impl Selection {
    pub fn new(provider: Provider, resource_type: ResourceType) -> Self {
        Self {
            provider,
            resource_type,
        }
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::new(Provider::NetEase, ResourceType::Song)
    }
}

/// A fully classified input: where to look, what to look for, and its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedInput {
    pub provider: Provider,
    pub resource_type: ResourceType,
    pub id: String,
}

impl ResolvedInput {
    pub fn new(provider: Provider, resource_type: ResourceType, id: impl Into<String>) -> Self {
        Self {
            provider,
            resource_type,
            id: id.into(),
        }
    }
}

impl fmt::Display for ResolvedInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.provider, self.resource_type, self.id)
    }
}
