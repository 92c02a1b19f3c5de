//! URL-set generation (pagination links, sort options, ...).

use std::fmt::Display;

use crate::relative::RelativeUrl;

/// Builds one URL per value of `key`, all derived from `base_url`.
///
/// Each URL keeps the base URL's existing query parameters (flags included,
/// order unchanged), sets `key` to the value, and sets every `extra_params`
/// entry. Output order mirrors `values`; nothing is deduplicated or sorted.
/// An empty `values` slice yields an empty vector.
///
/// # Examples
///
/// - `build_url_set("/mens/clothing", "offset", &[0, 5], &[])` →
///   `["/mens/clothing?offset=0", "/mens/clothing?offset=5"]`
/// - `build_url_set("/a?server_only", "offset", &[0], &[])` → `["/a?server_only&offset=0"]`
pub fn build_url_set<V: Display>(
    base_url: &str,
    key: &str,
    values: &[V],
    extra_params: &[(&str, &str)],
) -> Vec<String> {
    if values.is_empty() {
        return Vec::new();
    }
    let base = RelativeUrl::parse(base_url);
    let urls: Vec<String> = values
        .iter()
        .map(|value| {
            let mut url = base.clone();
            url.query.set(key, value.to_string());
            url.query.merge(extra_params.iter().map(|(k, v)| (*k, Some(*v))));
            url.to_url_string()
        })
        .collect();
    tracing::trace!(base_url, key, count = urls.len(), "built url set");
    urls
}
