use serde::Serialize;
use url::Url;

use super::{is_wildcard, PurgeError, Result};

/// What gets deleted: one exact key or every key matching a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "key", rename_all = "snake_case")]
pub enum PurgeRequest {
    Key(String),
    Pattern(String),
    /// A URL no purge key could be derived from. Nothing was deleted.
    Url(String),
}

impl PurgeRequest {
    /// Classifies a derived purge key. Keys containing `*` are patterns.
    pub fn from_key(key: impl Into<String>) -> Self {
        let key = key.into();
        if is_wildcard(&key) {
            Self::Pattern(key)
        } else {
            Self::Key(key)
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Self::Key(key) | Self::Pattern(key) | Self::Url(key) => key,
        }
    }

    pub fn is_pattern(&self) -> bool {
        matches!(self, Self::Pattern(_))
    }
}

/// Reach of a purge-all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PurgeScope {
    /// Every key under the prefix, across all sites.
    Network,
    /// Only keys of the configured home URL.
    #[default]
    Site,
}

/// Outcome of one purge request.
///
/// `Ok(n)` holds the number of keys removed. A request that matched
/// nothing is `Err(PurgeError::NotFound)`, except for purge-all where an
/// empty cache is `Ok(0)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurgeResult {
    pub request: PurgeRequest,
    pub outcome: Result<u64>,
}

impl PurgeResult {
    pub fn new(request: PurgeRequest, outcome: Result<u64>) -> Self {
        Self { request, outcome }
    }

    /// Number of keys removed, 0 on any error.
    pub fn purged(&self) -> u64 {
        self.outcome.as_ref().copied().unwrap_or(0)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self.outcome, Err(PurgeError::NotFound(_)))
    }

    pub fn error(&self) -> Option<&PurgeError> {
        self.outcome.as_ref().err()
    }
}

/// Settings the purger needs to derive keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurgerConfig {
    /// Key prefix shared by every cached page.
    pub prefix: String,
    /// Home URL of the site, used for site-scope and custom purges.
    pub home_url: Url,
    /// Extra URL suffixes (absolute paths, `*` allowed) purged on demand.
    pub purge_urls: Vec<String>,
}

impl PurgerConfig {
    /// Creates a config with no custom purge URLs. The prefix is trimmed.
    pub fn new(prefix: impl AsRef<str>, home_url: Url) -> Self {
        Self {
            prefix: prefix.as_ref().trim().to_string(),
            home_url,
            purge_urls: Vec::new(),
        }
    }

    pub fn with_purge_urls(mut self, purge_urls: Vec<String>) -> Self {
        self.purge_urls = purge_urls;
        self
    }
}
