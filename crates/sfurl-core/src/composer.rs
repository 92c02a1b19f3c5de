//! Path segment composer.
//!
//! Inserts and strips the leading site/locale segments of a path. The number
//! of token segments (0, 1 or 2) comes from configuration alone; segment
//! content is never inspected, so a resource path like `/category/men` is
//! only ever treated as tokens if the deployment says paths carry tokens.
//! When both are path-encoded the site comes first: `/{site}/{locale}/...`.

use crate::config::{TokenPosition, UrlConfig};
use crate::relative::UrlPath;

/// Tokens found in (or destined for) the leading path segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathTokens {
    pub site: Option<String>,
    pub locale: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathComposer {
    site_in_path: bool,
    locale_in_path: bool,
}

impl PathComposer {
    pub fn new(site_in_path: bool, locale_in_path: bool) -> Self {
        Self {
            site_in_path,
            locale_in_path,
        }
    }

    pub fn from_config(config: &UrlConfig) -> Self {
        Self::new(
            config.site == TokenPosition::Path,
            config.locale == TokenPosition::Path,
        )
    }

    /// How many leading segments are tokens under this configuration.
    pub fn token_count(&self) -> usize {
        usize::from(self.site_in_path) + usize::from(self.locale_in_path)
    }

    /// Reads the token segments without modifying the path.
    pub fn peek(&self, path: &UrlPath) -> PathTokens {
        let mut leading = path.segments.iter().take(self.token_count()).cloned();
        let site = if self.site_in_path { leading.next() } else { None };
        let locale = if self.locale_in_path { leading.next() } else { None };
        PathTokens { site, locale }
    }

    /// Removes the token segments and returns them by role. Paths shorter than
    /// the configured count lose what they have (`/uk` with two tokens yields
    /// a site and no locale).
    pub fn strip(&self, path: &mut UrlPath) -> PathTokens {
        let tokens = self.peek(path);
        let n = self.token_count().min(path.segments.len());
        let _ = path.segments.drain(..n);
        tokens
    }

    /// Prepends the path-encoded tokens that are present.
    pub fn compose(&self, path: &mut UrlPath, site: Option<&str>, locale: Option<&str>) {
        let mut prefix = Vec::with_capacity(self.token_count());
        if self.site_in_path {
            prefix.extend(site.map(str::to_string));
        }
        if self.locale_in_path {
            prefix.extend(locale.map(str::to_string));
        }
        // `/` parses without a trailing slash, so `/` + tokens renders as
        // `/uk/en-GB`, while a stripped `/uk/en-GB/` keeps its slash.
        let _ = path.segments.splice(0..0, prefix);
    }
}
