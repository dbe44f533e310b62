//! Client configuration.

use std::time::Duration;

use anyhow::Context;
use reqwest::Url;

use crate::error::ApiError;

pub const DEFAULT_API_URL: &str = "http://localhost:3333";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for the remote marketplace API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL, without a trailing slash.
    pub api_url: String,
    /// Bearer token for an authenticated seller session.
    pub token: Option<String>,
    /// Per-request timeout enforced by the transport.
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: normalize_url(api_url.into()),
            token: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load from `SELLERDESK_API_URL`, `SELLERDESK_TOKEN` and
    /// `SELLERDESK_TIMEOUT_SECS`, falling back to defaults for unset values.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let api_url = lookup("SELLERDESK_API_URL").unwrap_or_else(|| {
            tracing::warn!("SELLERDESK_API_URL not set; using {DEFAULT_API_URL}");
            DEFAULT_API_URL.to_string()
        });
        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            anyhow::bail!("SELLERDESK_API_URL must be an http(s) URL, got {api_url:?}");
        }

        let timeout = match lookup("SELLERDESK_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("invalid SELLERDESK_TIMEOUT_SECS value {raw:?}"))?;
                Duration::from_secs(secs)
            }
            None => DEFAULT_TIMEOUT,
        };

        let token = lookup("SELLERDESK_TOKEN").filter(|t| !t.trim().is_empty());

        Ok(Self {
            api_url: normalize_url(api_url),
            token,
            timeout,
        })
    }

    /// Absolute URL for the given path segments, appended to the base URL.
    ///
    /// Each segment is percent-encoded, so an opaque id containing `/`, `?`
    /// or `#` stays a single segment.
    pub fn endpoint<'a>(
        &self,
        segments: impl IntoIterator<Item = &'a str>,
    ) -> Result<Url, ApiError> {
        let mut url = Url::parse(&self.api_url)
            .map_err(|e| ApiError::InvalidRequest(format!("invalid API URL {:?}: {e}", self.api_url)))?;

        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidRequest(format!("API URL {:?} cannot take a path", self.api_url)))?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

fn normalize_url(url: String) -> String {
    url.trim().trim_end_matches('/').to_string()
}
