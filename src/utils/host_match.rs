//! Hostname extraction and directory-alias matching.
//!
//! Matching is deliberately prefix-based, not exact: a directory alias
//! `api.example.com` matches a probed target of `api.example.com:8443` or
//! `api.example.com/health`. This mirrors the observed upstream behavior and
//! may admit false positives for unrelated hosts sharing a prefix; exact
//! matching would be a behavior change, not a fix.

use crate::domain::entities::HostEntry;

/// Returns the part of a URL after the scheme separator (`//`).
///
/// Note this is the raw remainder, so it can carry a port or a path:
/// `https://api.example.com:8443/health` → `api.example.com:8443/health`.
/// Returns `None` when the URL has no scheme separator.
pub fn post_scheme(url: &str) -> Option<&str> {
    url.split_once("//").map(|(_, rest)| rest)
}

/// Tests whether `target` starts with any alias of any directory entry.
///
/// Empty aliases are skipped; they would otherwise match every target.
pub fn matches_any_alias(target: &str, entries: &[HostEntry]) -> bool {
    entries
        .iter()
        .flat_map(|entry| entry.domain_names.iter())
        .any(|alias| !alias.is_empty() && target.starts_with(alias.as_str()))
}
