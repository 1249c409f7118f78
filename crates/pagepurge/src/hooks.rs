//! Purge hooks wired from configuration.

use std::sync::Arc;

use pagepurge_core::purge::{NoopHooks, PurgeHooks};
use url::Url;

use crate::config::Config;

/// Appends a fixed suffix to every purged URL.
///
/// With a suffix such as `--*`, purging `https://example.com/post/` also
/// removes the device variants the page cache stores next to it
/// (`.../post/--mobile`, `.../post/--desktop`).
///
/// The suffix extends the URL path, so a bare host purges `/--*` and a
/// query string stays out of the way.
#[derive(Debug, Clone)]
pub struct SuffixHooks {
    suffix: String,
}

impl SuffixHooks {
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }
}

impl PurgeHooks for SuffixHooks {
    fn rewrite_url(&self, url: String) -> String {
        match Url::parse(&url) {
            Ok(mut parsed) => {
                let path = format!("{}{}", parsed.path(), self.suffix);
                parsed.set_path(&path);
                parsed.into()
            }
            // Left for key derivation to reject
            Err(_) => format!("{}{}", url, self.suffix),
        }
    }
}

/// Picks the hooks matching the configuration.
pub fn from_config(config: &Config) -> Arc<dyn PurgeHooks> {
    match &config.purge_url_suffix {
        Some(suffix) => Arc::new(SuffixHooks::new(suffix.clone())),
        None => Arc::new(NoopHooks),
    }
}
