//! Purge-key derivation.
//!
//! A cached page lives under `<prefix><scheme>GET<host><path>`, the same
//! key the page cache writes (`$scheme$request_method$host$request_uri`).
//! Only GET responses are cached, so the method is fixed.

use url::Url;

use super::{PurgeError, Result};

/// Request method segment of every purge key.
pub const REQUEST_METHOD: &str = "GET";

/// Glob character that turns a purge key into a pattern.
pub const WILDCARD: char = '*';

fn host(url: &Url) -> Result<&str> {
    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(host),
        _ => Err(PurgeError::InvalidUrl(format!("{} has no host", url))),
    }
}

/// Returns `<prefix><scheme>GET<host>`, the key base that custom purge
/// suffixes are appended to.
///
/// The URL path is deliberately left out: custom suffixes are absolute
/// paths on the host.
pub fn custom_key_base(prefix: &str, url: &Url) -> Result<String> {
    Ok(format!(
        "{}{}{}{}",
        prefix,
        url.scheme(),
        REQUEST_METHOD,
        host(url)?
    ))
}

/// Returns the purge key for a URL.
///
/// Port, query and fragment are not part of the key. A `*` in the path is
/// kept, which makes the key a wildcard pattern.
///
/// # Examples
///
/// ```
/// use pagepurge_core::purge::purge_key;
/// use url::Url;
///
/// let url = Url::parse("https://example.com/blog/?p=1").unwrap();
/// assert_eq!(
///     purge_key("nginx-cache:", &url).unwrap(),
///     "nginx-cache:httpsGETexample.com/blog/"
/// );
/// ```
pub fn purge_key(prefix: &str, url: &Url) -> Result<String> {
    Ok(format!("{}{}", custom_key_base(prefix, url)?, url.path()))
}

/// Returns the pattern matching every cached page of the site at `home_url`.
pub fn site_pattern(prefix: &str, home_url: &Url) -> Result<String> {
    let path = match home_url.path() {
        "" => "/",
        path => path,
    };
    Ok(format!(
        "{}{}{}",
        custom_key_base(prefix, home_url)?,
        path,
        WILDCARD
    ))
}

/// Returns the pattern matching every key under the prefix.
pub fn network_pattern(prefix: &str) -> String {
    format!("{}{}", prefix, WILDCARD)
}

/// Checks whether a key must be purged as a pattern.
pub fn is_wildcard(key: &str) -> bool {
    key.contains(WILDCARD)
}
