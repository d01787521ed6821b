//! reqwest-backed [`HttpFetch`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use super::traits::HttpFetch;
use crate::config::HttpConfig;
use crate::{LyricError, Result};

/// Default timeout for a single GET.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default `User-Agent` header.
pub const DEFAULT_USER_AGENT: &str = concat!("lyricfetch/", env!("CARGO_PKG_VERSION"));

/// HTTP client with a bounded per-request timeout.
#[derive(Clone)]
pub struct ReqwestFetcher {
    http: Client,
}

impl ReqwestFetcher {
    /// Create a fetcher with the default timeout and user agent.
    pub fn new() -> Result<Self> {
        Self::with_options(DEFAULT_TIMEOUT, DEFAULT_USER_AGENT)
    }

    pub fn from_config(config: &HttpConfig) -> Result<Self> {
        Self::with_options(
            Duration::from_secs(config.timeout_secs),
            &config.user_agent,
        )
    }

    pub fn with_options(timeout: Duration, user_agent: &str) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| LyricError::Configuration(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { http })
    }
}

#[async_trait]
impl HttpFetch for ReqwestFetcher {
    async fn get_text(&self, url: &str) -> Result<String> {
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LyricError::Api {
                status: status.as_u16(),
                message: format!("GET {url} returned HTTP {status}"),
            });
        }

        Ok(response.text().await?)
    }
}
