//! Glob matching for purge patterns.
//!
//! Only `*` is special: it matches any run of characters, including an
//! empty one. Redis `KEYS` also understands `?`, `[...]` and `\` escapes;
//! purge keys never rely on those, so the in-process store does not either.

use super::WILDCARD;

/// Checks if a key matches a purge pattern.
///
/// # Examples
///
/// ```
/// use pagepurge_core::purge::pattern_matches;
///
/// assert!(pattern_matches("cache:httpGETexample.com*", "cache:httpGETexample.com/a"));
/// assert!(pattern_matches("cache:*/feed/", "cache:httpsGETexample.com/feed/"));
/// assert!(!pattern_matches("cache:httpGETexample.com*", "other:key"));
/// ```
pub fn pattern_matches(pattern: &str, key: &str) -> bool {
    let mut segments = pattern.split(WILDCARD);

    // split() always yields at least one item
    let head = segments.next().unwrap_or_default();
    let Some(mut rest) = key.strip_prefix(head) else {
        return false;
    };

    let tail: Vec<&str> = segments.collect();
    let Some((last, middle)) = tail.split_last() else {
        // No wildcard at all
        return rest.is_empty();
    };

    for segment in middle.iter().filter(|s| !s.is_empty()) {
        match rest.find(segment) {
            Some(pos) => rest = &rest[pos + segment.len()..],
            None => return false,
        }
    }

    rest.ends_with(last)
}
