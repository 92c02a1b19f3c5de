//! Locale/site-aware URL building.
//!
//! Every decision about where a locale or site token goes is made in
//! [`apply_tokens`]; the public builders only decide which tokens to pass.
//! The reverse direction ([`get_params_from_path`]) reads tokens back out of
//! an incoming URL with the same composer.

use crate::composer::{PathComposer, PathTokens};
use crate::config::{Site, StorefrontConfig, TokenPosition, UrlConfig};
use crate::error::UrlError;
use crate::query::{QueryMap, QueryValue};
use crate::relative::{Location, RelativeUrl, UrlPath};

/// Query key used when the locale is `query_param`-encoded.
pub const LOCALE_PARAM: &str = "locale";
/// Query key used when the site is `query_param`-encoded.
pub const SITE_PARAM: &str = "site";

/// Tokens to emit; `None` emits nothing for that role.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UrlTokens<'a> {
    pub locale: Option<&'a str>,
    pub site: Option<&'a str>,
}

/// Options for [`get_url_with_locale`].
#[derive(Debug, Clone, Copy)]
pub struct LocaleUrlOptions<'a> {
    /// Current location (pathname + search).
    pub location: &'a Location,
    /// Site token to emit. When `None`, the site already in the URL is kept,
    /// falling back to the default site's URL token (its alias, if any).
    pub site: Option<&'a str>,
    /// Query keys dropped from the result (e.g. stale `refine` facets).
    pub disallow_params: &'a [&'a str],
}

impl<'a> LocaleUrlOptions<'a> {
    pub fn new(location: &'a Location) -> Self {
        Self {
            location,
            site: None,
            disallow_params: &[],
        }
    }

    pub fn site(mut self, site: &'a str) -> Self {
        self.site = Some(site);
        self
    }

    pub fn disallow(mut self, params: &'a [&'a str]) -> Self {
        self.disallow_params = params;
        self
    }
}

/// Site and locale tokens read from an incoming URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct UrlParams {
    pub site: Option<String>,
    pub locale: Option<String>,
}

/// Places `tokens` per `config`: path tokens are prepended to the
/// path segments (site before locale), query tokens are merged into the
/// query in place, `none` positions emit nothing.
fn apply_tokens(
    config: &UrlConfig,
    path: &mut UrlPath,
    query: &mut QueryMap,
    tokens: UrlTokens<'_>,
) {
    PathComposer::from_config(config).compose(path, tokens.site, tokens.locale);
    for (position, key, value) in [
        (config.site, SITE_PARAM, tokens.site),
        (config.locale, LOCALE_PARAM, tokens.locale),
    ] {
        if let (TokenPosition::QueryParam, Some(value)) = (position, value) {
            query.set(key, value);
        }
    }
}

/// Decorates a logical `path` with locale and site tokens.
///
/// Fails with [`UrlError::MissingUrlConfig`] when the configuration has no URL
/// policy; an unconfigured deployment cannot produce correct links.
///
/// # Examples
///
/// With `locale = "path"`, `site = "path"`:
/// `build_path_with_url_config(cfg, "/category/men", {locale: "en-GB", site: "uk"})`
/// → `/uk/en-GB/category/men`.
///
/// With `locale = "query_param"`, `site = "none"`:
/// `build_path_with_url_config(cfg, "/search?q=shirt", {locale: "en-GB", site: "uk"})`
/// → `/search?q=shirt&locale=en-GB`.
pub fn build_path_with_url_config(
    config: &StorefrontConfig,
    path: &str,
    tokens: UrlTokens<'_>,
) -> Result<String, UrlError> {
    let url_config = config.url_config()?;
    let mut url = RelativeUrl::parse(path);
    let mut segments = url.segments();
    apply_tokens(url_config, &mut segments, &mut url.query, tokens);
    // Without path tokens the caller's path text is kept as written.
    if PathComposer::from_config(url_config).token_count() > 0 {
        url.set_segments(&segments);
    }
    let out = url.to_url_string();
    tracing::debug!(
        path,
        locale = ?tokens.locale,
        site = ?tokens.site,
        url = %out,
        "built path with url config"
    );
    Ok(out)
}

/// Rewrites the current location for `target_locale`.
///
/// Strips the token segments the configuration says the path carries,
/// re-composes them with the (current or given) site and the new locale,
/// sets query tokens, then drops `disallow_params`. Applying it to a URL
/// that already encodes `target_locale` returns that URL unchanged.
pub fn get_url_with_locale(
    config: &StorefrontConfig,
    target_locale: &str,
    opts: LocaleUrlOptions<'_>,
) -> Result<String, UrlError> {
    let url_config = config.url_config()?;
    let mut url = RelativeUrl::from_location(opts.location);

    let composer = PathComposer::from_config(url_config);
    let mut path = url.segments();
    let current = composer.strip(&mut path);

    let current_site = match url_config.site {
        TokenPosition::Path => current.site,
        TokenPosition::QueryParam => query_token(&url, SITE_PARAM),
        TokenPosition::None => None,
    };
    let site = match opts.site.or(current_site.as_deref()) {
        Some(site) => site,
        None => config.default_site()?.url_token(),
    };

    apply_tokens(
        url_config,
        &mut path,
        &mut url.query,
        UrlTokens {
            locale: Some(target_locale),
            site: Some(site),
        },
    );
    url.set_segments(&path);
    for key in opts.disallow_params {
        let _ = url.query.remove(key);
    }

    let out = url.to_url_string();
    tracing::debug!(
        from = %opts.location.pathname,
        locale = target_locale,
        site,
        url = %out,
        "rewrote url for locale"
    );
    Ok(out)
}

/// Applies query updates to `url`; `None` deletes the key. The path is left
/// exactly as given.
///
/// `rebuild_path_with_params("/p?color=black", &[("pid", None)])` → `/p?color=black`
pub fn rebuild_path_with_params(url: &str, updates: &[(&str, Option<&str>)]) -> String {
    let mut parsed = RelativeUrl::parse(url);
    parsed.query.merge(updates.iter().copied());
    parsed.to_url_string()
}

/// Removes every key in `keys` from the query of `url`.
pub fn remove_query_params_from_path(url: &str, keys: &[&str]) -> String {
    let updates: Vec<(&str, Option<&str>)> = keys.iter().map(|k| (*k, None)).collect();
    rebuild_path_with_params(url, &updates)
}

/// Reads the site and locale tokens out of an incoming URL.
///
/// Path-encoded tokens are taken by position (see [`PathComposer`]);
/// query-encoded tokens from the `site` / `locale` keys. Tokens the URL does
/// not carry are `None`.
pub fn get_params_from_path(config: &StorefrontConfig, url: &str) -> Result<UrlParams, UrlError> {
    let url_config = config.url_config()?;
    let parsed = RelativeUrl::parse(url);
    let PathTokens {
        site: path_site,
        locale: path_locale,
    } = PathComposer::from_config(url_config).peek(&parsed.segments());

    let pick = |position: TokenPosition, from_path: Option<String>, key: &str| match position {
        TokenPosition::Path => from_path.filter(|t| !t.is_empty()),
        TokenPosition::QueryParam => query_token(&parsed, key),
        TokenPosition::None => None,
    };
    Ok(UrlParams {
        site: pick(url_config.site, path_site, SITE_PARAM),
        locale: pick(url_config.locale, path_locale, LOCALE_PARAM),
    })
}

/// The site an incoming URL belongs to, by id or alias; the default site when
/// the URL names none or an unknown one.
pub fn resolve_site_from_url<'c>(
    config: &'c StorefrontConfig,
    url: &str,
) -> Result<&'c Site, UrlError> {
    let params = get_params_from_path(config, url)?;
    match params.site.as_deref().and_then(|token| config.site(token)) {
        Some(site) => Ok(site),
        None => config.default_site(),
    }
}

/// The locale an incoming URL asks for if its site supports it, otherwise
/// that site's default locale.
pub fn resolve_locale_from_url(config: &StorefrontConfig, url: &str) -> Result<String, UrlError> {
    let site = resolve_site_from_url(config, url)?;
    let params = get_params_from_path(config, url)?;
    Ok(params
        .locale
        .filter(|l| site.supports_locale(l))
        .unwrap_or_else(|| site.default_locale.clone()))
}

fn query_token(url: &RelativeUrl, key: &str) -> Option<String> {
    url.query
        .get(key)
        .and_then(QueryValue::as_str)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
