//! Site descriptors.

use serde::{Deserialize, Serialize};

/// A configured storefront instance (e.g. a regional store).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    /// Site identifier, e.g. `uk`.
    pub id: String,
    /// Optional shorter URL token. When the engine picks a site itself (home
    /// links, default-site fallback) it emits this instead of the id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    /// Locales this site serves, in preference order.
    pub supported_locales: Vec<String>,
    /// Must be one of `supported_locales`.
    pub default_locale: String,
}

impl Site {
    pub fn new(id: &str, supported_locales: &[&str], default_locale: &str) -> Self {
        Self {
            id: id.to_string(),
            alias: None,
            supported_locales: supported_locales.iter().map(|l| l.to_string()).collect(),
            default_locale: default_locale.to_string(),
        }
    }

    pub fn with_alias(mut self, alias: &str) -> Self {
        self.alias = Some(alias.to_string());
        self
    }

    /// The token that represents this site in URLs.
    pub fn url_token(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.id)
    }

    /// True if `token` is this site's id or alias.
    pub fn matches(&self, token: &str) -> bool {
        self.id == token || self.alias.as_deref() == Some(token)
    }

    pub fn supports_locale(&self, locale: &str) -> bool {
        self.supported_locales.iter().any(|l| l == locale)
    }

    pub fn is_default_locale(&self, locale: &str) -> bool {
        self.default_locale == locale
    }
}
