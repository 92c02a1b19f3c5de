//! Error types surfaced by the URL builders.

use thiserror::Error;

/// Errors that URL building can report.
///
/// Malformed caller input (empty value lists, empty search terms, unknown
/// locale or site tokens) is never an error; only a deployment that cannot
/// produce correct links is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlError {
    /// The storefront configuration has no `[url]` policy, so there is no way
    /// to know where locale and site tokens go.
    #[error("URL configuration not found: set the [url] section (locale/site positions)")]
    MissingUrlConfig,

    /// No storefront configuration has been loaded into the handle.
    #[error("storefront configuration has not been loaded")]
    MissingConfig,

    /// `default_site` does not name any configured site.
    #[error("default site `{0}` is not among the configured sites")]
    UnknownDefaultSite(String),
}
