use async_trait::async_trait;

use super::Result;

/// Backend holding the cached pages.
#[async_trait]
pub trait PurgeStore: Send + Sync {
    /// Deletes a single key. Returns `true` if the key existed.
    async fn delete_key(&self, key: &str) -> Result<bool>;

    /// Deletes every key matching `pattern` and returns how many were removed.
    ///
    /// Enumeration and deletion must happen as one atomic step on the
    /// store, so concurrent writers can neither slip a matching key past
    /// the purge nor get a key counted twice.
    async fn delete_matching(&self, pattern: &str) -> Result<u64>;
}

/// Extension points around purge operations.
///
/// Every method has a pass-through default, so implementors only override
/// what they need.
pub trait PurgeHooks: Send + Sync {
    /// Rewrites a URL before its purge key is derived.
    ///
    /// Appending `*` (e.g. `--*`) turns the purge into a wildcard purge.
    fn rewrite_url(&self, url: String) -> String {
        url
    }

    /// Adjusts the list of custom URL suffixes before they are purged.
    fn filter_purge_urls(&self, urls: Vec<String>, _wildcard_allowed: bool) -> Vec<String> {
        urls
    }

    /// Called once a purge-all finished, whatever its outcome.
    fn after_purge_all(&self) {}
}

/// Hooks that change nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHooks;

impl PurgeHooks for NoopHooks {}
