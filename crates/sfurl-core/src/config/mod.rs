//! Storefront URL configuration.
//!
//! Describes, per deployment, where locale and site tokens live in a URL and
//! which sites/locales exist. Loaded once from `~/.config/sfurl/storefront.toml`
//! (or an explicit TOML/JSON file) and treated as read-only afterwards; see
//! [`ConfigHandle`] for atomic replacement.

mod handle;
mod site;

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::UrlError;

pub use handle::ConfigHandle;
pub use site::Site;

/// Where a token (locale or site) is placed in generated URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenPosition {
    /// Leading path segment: `/uk/en-GB/category/men`.
    #[default]
    Path,
    /// Query parameter: `/category/men?locale=en-GB`.
    QueryParam,
    /// Never emitted.
    None,
}

/// Locale/site encoding policy (the `[url]` section).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UrlConfig {
    pub locale: TokenPosition,
    pub site: TokenPosition,
    /// Keep default locale/site tokens in home URLs instead of omitting them.
    #[serde(default)]
    pub show_defaults: bool,
}

impl UrlConfig {
    pub fn new(locale: TokenPosition, site: TokenPosition) -> Self {
        Self {
            locale,
            site,
            show_defaults: false,
        }
    }
}

/// Whole-deployment configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Site used when a URL does not name one.
    pub default_site: String,
    /// Encoding policy; `None` means the deployment is unconfigured and every
    /// builder that needs it fails with [`UrlError::MissingUrlConfig`].
    #[serde(default)]
    pub url: Option<UrlConfig>,
    pub sites: Vec<Site>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            default_site: "RefArch".to_string(),
            url: Some(UrlConfig::default()),
            sites: vec![
                Site::new("RefArch", &["en-US", "en-CA"], "en-US").with_alias("us"),
                Site::new(
                    "RefArchGlobal",
                    &["en-GB", "fr-FR", "it-IT", "de-DE"],
                    "en-GB",
                )
                .with_alias("global"),
            ],
        }
    }
}

impl StorefrontConfig {
    /// The URL policy, or the fatal configuration error if it is absent.
    pub fn url_config(&self) -> Result<&UrlConfig, UrlError> {
        self.url.as_ref().ok_or(UrlError::MissingUrlConfig)
    }

    /// Finds a site by id or alias.
    pub fn site(&self, token: &str) -> Option<&Site> {
        self.sites.iter().find(|s| s.matches(token))
    }

    pub fn default_site(&self) -> Result<&Site, UrlError> {
        self.site(&self.default_site)
            .ok_or_else(|| UrlError::UnknownDefaultSite(self.default_site.clone()))
    }

    /// True if `token` names the default site (by id or alias).
    pub fn is_default_site(&self, token: &str) -> bool {
        match self.site(&self.default_site) {
            Some(site) => site.matches(token),
            None => self.default_site == token,
        }
    }

    /// Checks cross-field invariants that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sites.is_empty() {
            return Err(ConfigError::Validation("no sites configured".into()));
        }
        let mut seen = HashSet::new();
        for site in &self.sites {
            if !seen.insert(site.id.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate site id `{}`",
                    site.id
                )));
            }
            if !site.supports_locale(&site.default_locale) {
                return Err(ConfigError::Validation(format!(
                    "site `{}`: default locale `{}` is not in supported_locales",
                    site.id, site.default_locale
                )));
            }
        }
        if self.site(&self.default_site).is_none() {
            return Err(ConfigError::Validation(format!(
                "default_site `{}` is not among the configured sites",
                self.default_site
            )));
        }
        Ok(())
    }
}

/// Errors while reading or validating a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("config serialization error")]
    TomlSer(#[from] toml::ser::Error),

    #[error("JSON config parsing error")]
    Json(#[from] serde_json::Error),

    #[error("config validation error: {0}")]
    Validation(String),

    #[error("cannot locate XDG config directory")]
    Xdg(#[from] xdg::BaseDirectoriesError),
}

pub fn config_path() -> Result<PathBuf, ConfigError> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("sfurl")?;
    xdg_dirs
        .place_config_file("storefront.toml")
        .map_err(|e| ConfigError::Io(PathBuf::from("storefront.toml"), e))
}

/// Load and validate a configuration file. `.json` files are read as JSON,
/// anything else as TOML.
pub fn load_from_path(path: &Path) -> Result<StorefrontConfig, ConfigError> {
    let data = fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
    let cfg: StorefrontConfig = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => serde_json::from_str(&data)?,
        _ => toml::from_str(&data)?,
    };
    cfg.validate()?;
    tracing::debug!(path = %path.display(), sites = cfg.sites.len(), "loaded storefront config");
    Ok(cfg)
}

/// Load configuration from the XDG config dir, creating a default file if none exists.
pub fn load_or_init() -> Result<StorefrontConfig, ConfigError> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = StorefrontConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io(parent.to_path_buf(), e))?;
        }
        fs::write(&path, toml).map_err(|e| ConfigError::Io(path.clone(), e))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from_path(&path)
}
