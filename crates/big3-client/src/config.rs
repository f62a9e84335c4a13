//! Client configuration
//!
//! [`ClientConfig`] is plain serde data so a host application can embed it in
//! its own config file, e.g. under a `[big3]` table:
//!
//! ```toml
//! base_url = "http://localhost:3000/api"
//! api_key = "sk-..."
//! timeout_ms = 30000
//! ```
//!
//! Timeouts are whole milliseconds. Timeouts left unset keep the HTTP
//! transport's own defaults; a zero timeout is rejected when the client is
//! built.

use big3_core::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use url::Url;

/// Connection settings for the orchestration API
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API origin plus path prefix (e.g. "http://localhost:3000/api")
    pub base_url: String,

    /// Bearer token sent as `Authorization: Bearer <key>`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Whole-request timeout in milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,

    /// Connect timeout in milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connect_timeout_ms: Option<u64>,

    /// `User-Agent` header value
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_user_agent() -> String {
    concat!("big3-client/", env!("CARGO_PKG_VERSION")).to_string()
}

// Round up so a non-zero duration never stores as zero.
fn ceil_millis(duration: Duration) -> u64 {
    let millis = duration.as_nanos().div_ceil(1_000_000);
    u64::try_from(millis).unwrap_or(u64::MAX)
}

fn checked_timeout(
    field: &'static str,
    millis: Option<u64>,
) -> Result<Option<Duration>, ValidationError> {
    match millis {
        Some(0) => Err(ValidationError::ZeroTimeout { field }),
        Some(ms) => Ok(Some(Duration::from_millis(ms))),
        None => Ok(None),
    }
}

impl ClientConfig {
    /// Settings for `base_url` with no key and transport-default timeouts.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            timeout_ms: None,
            connect_timeout_ms: None,
            user_agent: default_user_agent(),
        }
    }

    /// Set or clear the bearer token.
    pub fn with_api_key(mut self, api_key: Option<impl Into<String>>) -> Self {
        self.api_key = api_key.map(Into::into);
        self
    }

    /// Set the whole-request timeout, rounded up to the next millisecond.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = Some(ceil_millis(timeout));
        self
    }

    /// Set the connect timeout, rounded up to the next millisecond.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout_ms = Some(ceil_millis(timeout));
        self
    }

    /// Whole-request timeout to hand the transport. Zero is rejected.
    pub fn request_timeout(&self) -> Result<Option<Duration>, ValidationError> {
        checked_timeout("timeout_ms", self.timeout_ms)
    }

    /// Connect timeout to hand the transport. Zero is rejected.
    pub fn connect_timeout(&self) -> Result<Option<Duration>, ValidationError> {
        checked_timeout("connect_timeout_ms", self.connect_timeout_ms)
    }

    /// Parse settings from a TOML fragment.
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Token to send, if any. An empty key counts as no key.
    pub fn bearer_token(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|key| !key.is_empty())
    }

    /// Parse and check `base_url`.
    pub fn base(&self) -> Result<Url, ValidationError> {
        let invalid = |reason: String| ValidationError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason,
        };

        if self.base_url.trim().is_empty() {
            return Err(invalid("must not be empty".to_string()));
        }
        let url = Url::parse(self.base_url.trim()).map_err(|e| invalid(e.to_string()))?;
        match url.scheme() {
            "http" | "https" => {}
            other => return Err(invalid(format!("unsupported scheme '{other}'"))),
        }
        if url.cannot_be_a_base() {
            return Err(invalid("cannot carry a path".to_string()));
        }
        Ok(url)
    }

    /// Resolve an endpoint by appending path segments to `base_url`.
    ///
    /// Each segment is percent-encoded on its own, so an id containing `/`
    /// stays a single segment.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, ValidationError> {
        let mut url = self.base()?;
        url.path_segments_mut()
            .map_err(|()| ValidationError::InvalidBaseUrl {
                url: self.base_url.clone(),
                reason: "cannot carry a path".to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout_ms", &self.timeout_ms)
            .field("connect_timeout_ms", &self.connect_timeout_ms)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
