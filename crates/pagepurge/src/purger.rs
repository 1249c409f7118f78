//! Cache purger.
//!
//! Turns purge intents (everything, one URL, the custom URL list) into key
//! deletions against a [`PurgeStore`].
//!
//! Store failures are logged once, at the point of the store call, and then
//! travel back inside the [`PurgeResult`]. Nothing here panics or aborts a
//! batch: one failed key never stops the purge of the next.

use std::sync::Arc;

use url::Url;

use pagepurge_core::purge::{
    custom_key_base, is_wildcard, network_pattern, purge_key, site_pattern, NoopHooks, PurgeError,
    PurgeHooks, PurgeRequest, PurgeResult, PurgeScope, PurgeStore, PurgerConfig, Result,
};

/// Purges cached pages by URL.
///
/// # Type Parameters
///
/// * `S` - The store holding the cached pages
pub struct CachePurger<S> {
    store: Arc<S>,
    config: PurgerConfig,
    hooks: Arc<dyn PurgeHooks>,
}

impl<S> Clone for CachePurger<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            config: self.config.clone(),
            hooks: Arc::clone(&self.hooks),
        }
    }
}

impl<S: PurgeStore> CachePurger<S> {
    /// Creates a purger with no-op hooks.
    pub fn new(store: Arc<S>, config: PurgerConfig) -> Self {
        Self {
            store,
            config,
            hooks: Arc::new(NoopHooks),
        }
    }

    pub fn with_hooks(mut self, hooks: Arc<dyn PurgeHooks>) -> Self {
        self.hooks = hooks;
        self
    }

    /// Purges every cached page of the site, or of every site sharing the
    /// prefix when `scope` is [`PurgeScope::Network`].
    ///
    /// An empty cache is `Ok(0)`, not `NotFound`. The `after_purge_all`
    /// hook runs whatever the outcome.
    pub async fn purge_all(&self, scope: PurgeScope) -> PurgeResult {
        let pattern = match scope {
            PurgeScope::Network => Ok(network_pattern(&self.config.prefix)),
            PurgeScope::Site => site_pattern(&self.config.prefix, &self.config.home_url),
        };

        let result = match pattern {
            Ok(pattern) => {
                tracing::info!(?scope, %pattern, "Purging all cached pages");
                let outcome = self.delete_keys_by_wildcard(&pattern).await;
                PurgeResult::new(PurgeRequest::Pattern(pattern), outcome)
            }
            Err(err) => {
                tracing::warn!(
                    home_url = %self.config.home_url,
                    error = %err,
                    "Cannot derive site pattern"
                );
                PurgeResult::new(PurgeRequest::Url(self.config.home_url.to_string()), Err(err))
            }
        };

        if let Ok(purged) = result.outcome {
            match scope {
                PurgeScope::Network => tracing::info!(purged, "Purged everything"),
                PurgeScope::Site => {
                    tracing::info!(home_url = %self.config.home_url, purged, "Purged site")
                }
            }
        }

        self.hooks.after_purge_all();
        result
    }

    /// Purges the cached page of one URL.
    ///
    /// The URL goes through the `rewrite_url` hook first. If the rewritten
    /// URL carries a `*`, every key matching it is purged.
    pub async fn purge_url(&self, url: &str) -> PurgeResult {
        let url = self.hooks.rewrite_url(url.to_string());
        tracing::info!(%url, "Purging URL");

        let key = Url::parse(&url)
            .map_err(|err| PurgeError::InvalidUrl(format!("{}: {}", url, err)))
            .and_then(|parsed| purge_key(&self.config.prefix, &parsed));

        match key {
            Ok(key) => self.purge_key(key).await,
            Err(err) => {
                tracing::warn!(%url, error = %err, "Cannot derive purge key");
                PurgeResult::new(PurgeRequest::Url(url), Err(err))
            }
        }
    }

    /// Purges a list of URL suffixes relative to the home URL's host.
    ///
    /// Suffixes are trimmed and blank ones skipped. Each suffix is purged
    /// independently; failures are reported per entry.
    pub async fn purge_custom_list(&self, urls: &[String]) -> Vec<PurgeResult> {
        let suffixes = urls.iter().map(|url| url.trim()).filter(|url| !url.is_empty());

        let base = match custom_key_base(&self.config.prefix, &self.config.home_url) {
            Ok(base) => base,
            Err(err) => {
                tracing::warn!(
                    home_url = %self.config.home_url,
                    error = %err,
                    "Cannot derive custom key base"
                );
                return suffixes
                    .map(|suffix| {
                        PurgeResult::new(PurgeRequest::Url(suffix.to_string()), Err(err.clone()))
                    })
                    .collect();
            }
        };

        let mut results = Vec::new();
        for suffix in suffixes {
            results.push(self.purge_key(format!("{}{}", base, suffix)).await);
        }
        results
    }

    /// Purges the configured custom URL list, after the `filter_purge_urls`
    /// hook had its say.
    pub async fn purge_custom_urls(&self) -> Vec<PurgeResult> {
        let urls = self
            .hooks
            .filter_purge_urls(self.config.purge_urls.clone(), true);
        self.purge_custom_list(&urls).await
    }

    /// Purges a raw purge key; keys containing `*` are purged as patterns.
    ///
    /// Matching nothing is reported as `Err(PurgeError::NotFound)`.
    pub async fn purge_key(&self, key: impl Into<String>) -> PurgeResult {
        let key = key.into();
        let (request, outcome) = if is_wildcard(&key) {
            let outcome = self.delete_keys_by_wildcard(&key).await;
            (PurgeRequest::Pattern(key), outcome)
        } else {
            let outcome = self.delete_single_key(&key).await.map(u64::from);
            (PurgeRequest::Key(key), outcome)
        };

        let outcome = outcome.and_then(|purged| match purged {
            0 => Err(PurgeError::NotFound(request.key().to_string())),
            purged => Ok(purged),
        });

        let key = request.key();
        match &outcome {
            Ok(purged) if request.is_pattern() => {
                tracing::info!(pattern = %key, purged, "Purged wildcard URL")
            }
            Ok(_) => tracing::info!(%key, "Purged URL"),
            Err(PurgeError::NotFound(_)) => tracing::info!(%key, "Cache not found"),
            // Already logged by the store call
            Err(_) => {}
        }

        PurgeResult::new(request, outcome)
    }

    /// Purges every key matching `pattern`, taken as is.
    ///
    /// Unlike [`purge_key`](Self::purge_key), matching nothing is `Ok(0)`.
    pub async fn purge_pattern(&self, pattern: impl Into<String>) -> PurgeResult {
        let pattern = pattern.into();
        let outcome = self.delete_keys_by_wildcard(&pattern).await;
        if let Ok(purged) = outcome {
            tracing::info!(%pattern, purged, "Purged pattern");
        }
        PurgeResult::new(PurgeRequest::Pattern(pattern), outcome)
    }

    /// Deletes one key. `Ok(false)` means the key did not exist.
    pub async fn delete_single_key(&self, key: &str) -> Result<bool> {
        self.store
            .delete_key(key)
            .await
            .inspect_err(|err| tracing::error!(%key, error = %err, "Failed to delete key"))
    }

    /// Atomically deletes every key matching `pattern`. `Ok(0)` means nothing
    /// matched.
    pub async fn delete_keys_by_wildcard(&self, pattern: &str) -> Result<u64> {
        self.store.delete_matching(pattern).await.inspect_err(
            |err| tracing::error!(%pattern, error = %err, "Failed to delete keys by pattern"),
        )
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use pagepurge_core::purge::MemoryStore;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

    use super::*;

    const PREFIX: &str = "nginx-cache:";

    fn config(home_url: &str) -> PurgerConfig {
        PurgerConfig::new(PREFIX, Url::parse(home_url).unwrap())
    }

    async fn store_with(keys: &[&str]) -> Arc<MemoryStore> {
        let store = MemoryStore::new();
        for key in keys {
            store.insert(*key, "<html></html>").await;
        }
        Arc::new(store)
    }

    /// Store whose backend is never reachable.
    struct UnreachableStore;

    #[async_trait]
    impl PurgeStore for UnreachableStore {
        async fn delete_key(&self, _key: &str) -> Result<bool> {
            Err(PurgeError::Connection("connection refused".to_string()))
        }

        async fn delete_matching(&self, _pattern: &str) -> Result<u64> {
            Err(PurgeError::Connection("connection refused".to_string()))
        }
    }

    #[derive(Default)]
    struct RecordingHooks {
        suffix: Option<String>,
        extra_url: Option<String>,
        purge_all_calls: AtomicUsize,
    }

    impl PurgeHooks for RecordingHooks {
        fn rewrite_url(&self, url: String) -> String {
            match &self.suffix {
                Some(suffix) => format!("{}{}", url, suffix),
                None => url,
            }
        }

        fn filter_purge_urls(&self, mut urls: Vec<String>, wildcard_allowed: bool) -> Vec<String> {
            assert!(wildcard_allowed);
            urls.extend(self.extra_url.clone());
            urls
        }

        fn after_purge_all(&self) {
            self.purge_all_calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    /// Counts ERROR events seen by the current thread's subscriber.
    struct ErrorCounter(Arc<AtomicUsize>);

    impl<S: tracing::Subscriber> Layer<S> for ErrorCounter {
        fn on_event(
            &self,
            event: &tracing::Event<'_>,
            _ctx: tracing_subscriber::layer::Context<'_, S>,
        ) {
            if *event.metadata().level() == tracing::Level::ERROR {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    #[tokio::test]
    async fn test_delete_single_key() {
        let store = store_with(&["nginx-cache:httpGETexample.com/"]).await;
        let purger = CachePurger::new(store.clone(), config("http://example.com"));

        assert!(purger
            .delete_single_key("nginx-cache:httpGETexample.com/")
            .await
            .unwrap());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_delete_single_key_missing() {
        let store = store_with(&[]).await;
        let purger = CachePurger::new(store, config("http://example.com"));

        let deleted = purger
            .delete_single_key("nginx-cache:httpGETexample.com/missing")
            .await;
        assert_eq!(deleted, Ok(false));
    }

    #[tokio::test]
    async fn test_delete_keys_by_wildcard() {
        let store = store_with(&[
            "prefix:httpGETexample.com/",
            "prefix:httpGETexample.com/a",
            "other:key",
        ])
        .await;
        let purger = CachePurger::new(store.clone(), config("http://example.com"));

        let deleted = purger
            .delete_keys_by_wildcard("prefix:httpGETexample.com*")
            .await;
        assert_eq!(deleted, Ok(2));
        assert_eq!(store.keys().await, vec!["other:key".to_string()]);
    }

    #[tokio::test]
    async fn test_delete_keys_by_wildcard_no_match() {
        let store = store_with(&["other:key"]).await;
        let purger = CachePurger::new(store.clone(), config("http://example.com"));

        assert_eq!(purger.delete_keys_by_wildcard("prefix:*").await, Ok(0));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_purge_all_site_scope_keeps_other_hosts() {
        let store = store_with(&[
            "nginx-cache:httpsGETexample.com/",
            "nginx-cache:httpsGETexample.com/about/",
            "nginx-cache:httpsGETother.org/",
            "nginx-cache:httpGETexample.com/",
        ])
        .await;
        let purger = CachePurger::new(store.clone(), config("https://example.com"));

        let result = purger.purge_all(PurgeScope::Site).await;

        assert_eq!(
            result.request,
            PurgeRequest::Pattern("nginx-cache:httpsGETexample.com/*".to_string())
        );
        assert_eq!(result.outcome, Ok(2));
        assert_eq!(
            store.keys().await,
            vec![
                "nginx-cache:httpGETexample.com/".to_string(),
                "nginx-cache:httpsGETother.org/".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_purge_all_site_scope_subdirectory() {
        let store = store_with(&[
            "nginx-cache:httpsGETexample.com/site2/",
            "nginx-cache:httpsGETexample.com/site2/post/",
            "nginx-cache:httpsGETexample.com/site3/",
        ])
        .await;
        let purger = CachePurger::new(store.clone(), config("https://example.com/site2/"));

        assert_eq!(purger.purge_all(PurgeScope::Site).await.outcome, Ok(2));
        assert!(store.contains("nginx-cache:httpsGETexample.com/site3/").await);
    }

    #[tokio::test]
    async fn test_purge_all_network_scope() {
        let store = store_with(&[
            "nginx-cache:httpsGETexample.com/",
            "nginx-cache:httpsGETother.org/",
            "sessions:abc",
        ])
        .await;
        let purger = CachePurger::new(store.clone(), config("https://example.com"));

        let result = purger.purge_all(PurgeScope::Network).await;

        assert_eq!(result.request.key(), "nginx-cache:*");
        assert_eq!(result.outcome, Ok(2));
        assert_eq!(store.keys().await, vec!["sessions:abc".to_string()]);
    }

    #[tokio::test]
    async fn test_purge_all_empty_cache_is_ok() {
        let store = store_with(&[]).await;
        let purger = CachePurger::new(store, config("https://example.com"));

        assert_eq!(purger.purge_all(PurgeScope::Site).await.outcome, Ok(0));
    }

    #[tokio::test]
    async fn test_purge_all_without_host_reports_url() {
        let hooks = Arc::new(RecordingHooks::default());
        let purger = CachePurger::new(store_with(&[]).await, config("mailto:someone@example.com"))
            .with_hooks(hooks.clone());

        let result = purger.purge_all(PurgeScope::Site).await;

        assert_eq!(
            result.request,
            PurgeRequest::Url("mailto:someone@example.com".to_string())
        );
        assert!(matches!(result.outcome, Err(PurgeError::InvalidUrl(_))));
        assert_eq!(hooks.purge_all_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_purge_all_fires_hook_even_on_failure() {
        let hooks = Arc::new(RecordingHooks::default());
        let purger = CachePurger::new(Arc::new(UnreachableStore), config("https://example.com"))
            .with_hooks(hooks.clone());

        let result = purger.purge_all(PurgeScope::Network).await;

        assert!(matches!(result.outcome, Err(PurgeError::Connection(_))));
        assert_eq!(hooks.purge_all_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_purge_url() {
        let store = store_with(&[
            "nginx-cache:httpsGETexample.com/hello-world/",
            "nginx-cache:httpsGETexample.com/",
        ])
        .await;
        let purger = CachePurger::new(store.clone(), config("https://example.com"));

        let result = purger.purge_url("https://example.com/hello-world/").await;

        assert_eq!(
            result.request,
            PurgeRequest::Key("nginx-cache:httpsGETexample.com/hello-world/".to_string())
        );
        assert_eq!(result.outcome, Ok(1));
        assert_eq!(
            store.keys().await,
            vec!["nginx-cache:httpsGETexample.com/".to_string()]
        );
    }

    #[tokio::test]
    async fn test_purge_url_not_found() {
        let store = store_with(&[]).await;
        let purger = CachePurger::new(store, config("https://example.com"));

        let result = purger.purge_url("https://example.com/missing/").await;

        assert!(result.is_not_found());
        assert_eq!(result.purged(), 0);
    }

    #[tokio::test]
    async fn test_purge_url_rewritten_to_wildcard() {
        let store = store_with(&[
            "nginx-cache:httpsGETexample.com/post/--mobile",
            "nginx-cache:httpsGETexample.com/post/--desktop",
            "nginx-cache:httpsGETexample.com/other/--mobile",
        ])
        .await;
        let hooks = Arc::new(RecordingHooks {
            suffix: Some("--*".to_string()),
            ..RecordingHooks::default()
        });
        let purger = CachePurger::new(store.clone(), config("https://example.com"))
            .with_hooks(hooks);

        let result = purger.purge_url("https://example.com/post/").await;

        assert_eq!(
            result.request,
            PurgeRequest::Pattern("nginx-cache:httpsGETexample.com/post/--*".to_string())
        );
        assert_eq!(result.outcome, Ok(2));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_purge_bare_host_device_variants() {
        let store = store_with(&[
            "nginx-cache:httpsGETexample.com/--mobile",
            "nginx-cache:httpsGETexample.com/--desktop",
            "nginx-cache:httpsGETexample.com/about/--mobile",
        ])
        .await;
        let purger = CachePurger::new(store.clone(), config("https://example.com"))
            .with_hooks(Arc::new(crate::hooks::SuffixHooks::new("--*")));

        let result = purger.purge_url("https://example.com").await;

        assert_eq!(
            result.request,
            PurgeRequest::Pattern("nginx-cache:httpsGETexample.com/--*".to_string())
        );
        assert_eq!(result.outcome, Ok(2));
        assert_eq!(
            store.keys().await,
            vec!["nginx-cache:httpsGETexample.com/about/--mobile".to_string()]
        );
    }

    #[tokio::test]
    async fn test_purge_url_wildcard_not_found() {
        let store = store_with(&["nginx-cache:httpsGETexample.com/"]).await;
        let purger = CachePurger::new(store, config("https://example.com"));

        let result = purger.purge_url("https://example.com/tag/*").await;

        assert!(result.request.is_pattern());
        assert!(result.is_not_found());
    }

    #[tokio::test]
    async fn test_purge_url_invalid() {
        let store = store_with(&[]).await;
        let purger = CachePurger::new(store, config("https://example.com"));

        let result = purger.purge_url("not a url").await;
        assert_eq!(result.request, PurgeRequest::Url("not a url".to_string()));
        assert!(matches!(result.outcome, Err(PurgeError::InvalidUrl(_))));

        // A stray `*` in an unparsable URL is not a pattern
        let result = purger.purge_url("not a url*").await;
        assert_eq!(result.request, PurgeRequest::Url("not a url*".to_string()));

        let result = purger.purge_url("mailto:someone@example.com").await;
        assert!(matches!(result.outcome, Err(PurgeError::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn test_purge_custom_list() {
        let store = store_with(&[
            "nginx-cache:httpsGETexample.com/feed/",
            "nginx-cache:httpsGETexample.com/sitemap.xml",
            "nginx-cache:httpsGETexample.com/sitemap-posts.xml",
            "nginx-cache:httpsGETexample.com/keep/",
        ])
        .await;
        // Custom suffixes are relative to the host, not the home path
        let purger = CachePurger::new(store.clone(), config("https://example.com/blog/"));

        let urls = vec![
            " /feed/ ".to_string(),
            String::new(),
            "/missing/".to_string(),
            "/sitemap*".to_string(),
        ];
        let results = purger.purge_custom_list(&urls).await;

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].outcome, Ok(1));
        assert!(results[1].is_not_found());
        assert_eq!(results[2].outcome, Ok(2));
        assert_eq!(
            store.keys().await,
            vec!["nginx-cache:httpsGETexample.com/keep/".to_string()]
        );
    }

    #[tokio::test]
    async fn test_purge_custom_urls_uses_config_and_filter_hook() {
        let store = store_with(&[
            "nginx-cache:httpsGETexample.com/feed/",
            "nginx-cache:httpsGETexample.com/shop/",
        ])
        .await;
        let hooks = Arc::new(RecordingHooks {
            extra_url: Some("/shop/".to_string()),
            ..RecordingHooks::default()
        });
        let config = config("https://example.com").with_purge_urls(vec!["/feed/".to_string()]);
        let purger = CachePurger::new(store.clone(), config).with_hooks(hooks);

        let results = purger.purge_custom_urls().await;

        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.outcome == Ok(1)));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_purge_key_raw() {
        let store = store_with(&["nginx-cache:httpGETexample.com/a", "x"]).await;
        let purger = CachePurger::new(store.clone(), config("http://example.com"));

        assert_eq!(purger.purge_key("x").await.outcome, Ok(1));
        assert_eq!(
            purger.purge_key("nginx-cache:httpGETexample.com*").await.outcome,
            Ok(1)
        );
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_purge_custom_list_without_host() {
        let purger = CachePurger::new(store_with(&[]).await, config("mailto:someone@example.com"));

        let results = purger.purge_custom_list(&["/feed/*".to_string()]).await;

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].request, PurgeRequest::Url("/feed/*".to_string()));
        assert!(matches!(results[0].outcome, Err(PurgeError::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn test_purge_pattern() {
        let store = store_with(&[
            "nginx-cache:httpsGETexample.com/a",
            "nginx-cache:httpsGETexample.com/b",
            "sessions:abc",
        ])
        .await;
        let purger = CachePurger::new(store.clone(), config("https://example.com"));

        let result = purger.purge_pattern("nginx-cache:*").await;
        assert_eq!(result.request, PurgeRequest::Pattern("nginx-cache:*".to_string()));
        assert_eq!(result.outcome, Ok(2));

        // Nothing left to match is a zero count, not an error
        let result = purger.purge_pattern("nginx-cache:*").await;
        assert_eq!(result.outcome, Ok(0));
        assert_eq!(store.keys().await, vec!["sessions:abc".to_string()]);
    }

    #[tokio::test]
    async fn test_unreachable_backend_logs_one_error_per_delete() {
        let errors = Arc::new(AtomicUsize::new(0));
        let _guard = tracing_subscriber::registry()
            .with(ErrorCounter(errors.clone()))
            .set_default();

        let purger = CachePurger::new(Arc::new(UnreachableStore), config("http://example.com"));

        let deleted = purger.delete_single_key("nginx-cache:httpGETexample.com/").await;
        assert!(matches!(deleted, Err(PurgeError::Connection(_))));
        assert_eq!(errors.load(Ordering::SeqCst), 1);

        let deleted = purger
            .delete_keys_by_wildcard("nginx-cache:httpGETexample.com*")
            .await;
        assert!(matches!(deleted, Err(PurgeError::Connection(_))));
        assert_eq!(errors.load(Ordering::SeqCst), 2);

        // The URL purge does not log the failure a second time
        let result = purger.purge_url("http://example.com/").await;
        assert!(result.error().is_some_and(PurgeError::is_backend));
        assert_eq!(errors.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_backend_failure_does_not_abort_batch() {
        let purger = CachePurger::new(Arc::new(UnreachableStore), config("http://example.com"));

        let urls = vec!["/a/".to_string(), "/b/*".to_string(), "/c/".to_string()];
        let results = purger.purge_custom_list(&urls).await;

        assert_eq!(results.len(), 3);
        assert!(results
            .iter()
            .all(|r| matches!(r.outcome, Err(PurgeError::Connection(_)))));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_overlapping_wildcards_count_each_key_once() {
        let store = Arc::new(MemoryStore::new());
        for i in 0..200 {
            store
                .insert(format!("nginx-cache:httpGETexample.com/post-{}/", i), "page")
                .await;
        }
        store.insert("nginx-cache:httpGETother.org/", "page").await;

        let purger = CachePurger::new(store.clone(), config("http://example.com"));
        let patterns = [
            "nginx-cache:httpGETexample.com*",
            "nginx-cache:httpGETexample.com/post-1*",
            "nginx-cache:httpGETexample.com/post-*",
            "nginx-cache:httpGETexample.com/*/",
            "nginx-cache:httpGETexample.com/post-2*",
            "nginx-cache:httpGETexample.com/post-19*",
        ];

        let mut handles = Vec::new();
        for pattern in patterns {
            let purger = purger.clone();
            handles.push(tokio::spawn(async move {
                purger.delete_keys_by_wildcard(pattern).await.unwrap()
            }));
        }

        let mut total = 0;
        for handle in handles {
            total += handle.await.unwrap();
        }

        assert_eq!(total, 200);
        assert_eq!(
            store.keys().await,
            vec!["nginx-cache:httpGETother.org/".to_string()]
        );
    }
}
