//! Resource URL builders: bare logical paths for categories, products,
//! search and home.
//!
//! Category, product and search paths are independent of locale/site
//! encoding; pass them through [`build_path_with_url_config`] to decorate.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

use crate::composer::PathComposer;
use crate::config::StorefrontConfig;
use crate::error::UrlError;
use crate::locale_url::{build_path_with_url_config, UrlTokens};
use crate::query::encode_component;

/// Characters `encodeURI` leaves alone.
const URI: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b';')
    .remove(b'/')
    .remove(b'?')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'+')
    .remove(b'$')
    .remove(b',')
    .remove(b'#');

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
}

impl Category {
    pub fn new(id: impl ToString) -> Self {
        Self { id: id.to_string() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
}

impl Product {
    pub fn new(id: impl ToString) -> Self {
        Self { id: id.to_string() }
    }
}

/// `/category/{id}`
pub fn category_url_builder(category: &Category) -> String {
    format!("/category/{}", utf8_percent_encode(&category.id, &URI))
}

/// `/product/{id}`
pub fn product_url_builder(product: &Product) -> String {
    format!("/product/{}", utf8_percent_encode(&product.id, &URI))
}

/// `/search?q={term}`; an empty term still yields `/search?q=`.
///
/// The term is form-encoded like every other query value, so later query
/// rewrites leave it byte-for-byte unchanged.
pub fn search_url_builder(term: &str) -> String {
    format!("/search?q={}", encode_component(term))
}

/// Locale and site the home link is being built for.
#[derive(Debug, Clone, Copy, Default)]
pub struct HomeOptions<'a> {
    pub locale: Option<&'a str>,
    pub site: Option<&'a str>,
}

/// Decorates `base_path` (usually `/`) with locale/site per configuration,
/// keeping the home URL clean:
///
/// - the locale is omitted when it is the site's default locale;
/// - the site is omitted when it is the configured default site, unless a
///   path-encoded locale follows it;
/// - neither omission applies when `show_defaults` is set.
///
/// Path tokens are read back by position, so a kept path locale always has
/// its site segment in front of it: with no `opts.site`, the default site's
/// URL token is emitted in that case.
///
/// A site the configuration does not know carries no locale information, so
/// the locale portion is left off and `base_path` stays unmodified for it.
/// The site token itself is still emitted, verbatim.
pub fn home_url_builder(
    config: &StorefrontConfig,
    base_path: &str,
    opts: HomeOptions<'_>,
) -> Result<String, UrlError> {
    let url_config = config.url_config()?;
    let show_defaults = url_config.show_defaults;
    let resolved = config.site(opts.site.unwrap_or(&config.default_site));

    let locale = opts.locale.filter(|locale| match resolved {
        Some(site) => show_defaults || !site.is_default_locale(locale),
        None => {
            tracing::debug!(site = ?opts.site, "home url: unknown site, locale left off");
            false
        }
    });
    // both tokens in the path: a lone locale segment would be read as the site
    let locale_needs_site =
        locale.is_some() && PathComposer::from_config(url_config).token_count() == 2;
    let site_token = match opts.site {
        Some(token) => Some(token)
            .filter(|t| show_defaults || locale_needs_site || !config.is_default_site(t)),
        None if locale_needs_site => Some(config.default_site()?.url_token()),
        None => None,
    };

    build_path_with_url_config(
        config,
        base_path,
        UrlTokens {
            locale,
            site: site_token,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Site, TokenPosition, UrlConfig};

    fn config(locale: TokenPosition, site: TokenPosition) -> StorefrontConfig {
        StorefrontConfig {
            default_site: "us".to_string(),
            url: Some(UrlConfig::new(locale, site)),
            sites: vec![
                Site::new("us", &["en-US", "es-US"], "en-US"),
                Site::new("uk", &["en-GB", "fr-FR"], "en-GB"),
            ],
        }
    }

    #[test]
    fn category_and_product_paths() {
        assert_eq!(category_url_builder(&Category::new("men")), "/category/men");
        assert_eq!(
            category_url_builder(&Category::new("mens clothing")),
            "/category/mens%20clothing"
        );
        assert_eq!(product_url_builder(&Product::new("25501032M")), "/product/25501032M");
        assert_eq!(product_url_builder(&Product::new(701642811398_u64)), "/product/701642811398");
    }

    #[test]
    fn search_term_is_form_encoded() {
        assert_eq!(search_url_builder("shirt"), "/search?q=shirt");
        assert_eq!(search_url_builder("red shoes"), "/search?q=red+shoes");
        assert_eq!(search_url_builder("a&b=c/d"), "/search?q=a%26b%3Dc%2Fd");
        assert_eq!(search_url_builder(""), "/search?q=");
    }

    #[test]
    fn decorated_search_link_keeps_term_encoding() {
        let cfg = config(TokenPosition::Path, TokenPosition::Path);
        let path = search_url_builder("it's ~ok");
        assert_eq!(path, "/search?q=it%27s+%7Eok");
        let url = build_path_with_url_config(
            &cfg,
            &path,
            UrlTokens {
                locale: Some("fr-FR"),
                site: Some("uk"),
            },
        )
        .unwrap();
        assert_eq!(url, "/uk/fr-FR/search?q=it%27s+%7Eok");
    }

    #[test]
    fn home_omits_default_locale() {
        let cfg = config(TokenPosition::Path, TokenPosition::Path);
        let url = home_url_builder(
            &cfg,
            "/",
            HomeOptions {
                locale: Some("en-GB"),
                site: Some("uk"),
            },
        )
        .unwrap();
        assert_eq!(url, "/uk");
    }

    #[test]
    fn home_keeps_non_default_locale() {
        let cfg = config(TokenPosition::Path, TokenPosition::Path);
        let url = home_url_builder(
            &cfg,
            "/",
            HomeOptions {
                locale: Some("fr-FR"),
                site: Some("uk"),
            },
        )
        .unwrap();
        assert_eq!(url, "/uk/fr-FR");
    }

    #[test]
    fn home_path_locale_keeps_default_site_segment() {
        let cfg = config(TokenPosition::Path, TokenPosition::Path);
        let home = |site| {
            home_url_builder(
                &cfg,
                "/",
                HomeOptions {
                    locale: Some("es-US"),
                    site,
                },
            )
            .unwrap()
        };
        assert_eq!(home(Some("us")), "/us/es-US");
        assert_eq!(home(None), "/us/es-US");
    }

    #[test]
    fn home_query_locale_still_drops_default_site() {
        let cfg = config(TokenPosition::QueryParam, TokenPosition::Path);
        let url = home_url_builder(
            &cfg,
            "/",
            HomeOptions {
                locale: Some("es-US"),
                site: Some("us"),
            },
        )
        .unwrap();
        assert_eq!(url, "/?locale=es-US");
    }

    #[test]
    fn home_default_site_and_locale_is_clean() {
        let cfg = config(TokenPosition::Path, TokenPosition::Path);
        let url = home_url_builder(
            &cfg,
            "/",
            HomeOptions {
                locale: Some("en-US"),
                site: Some("us"),
            },
        )
        .unwrap();
        assert_eq!(url, "/");
    }

    #[test]
    fn home_show_defaults_keeps_tokens() {
        let mut cfg = config(TokenPosition::QueryParam, TokenPosition::Path);
        cfg.url.as_mut().unwrap().show_defaults = true;
        let url = home_url_builder(
            &cfg,
            "/",
            HomeOptions {
                locale: Some("en-US"),
                site: Some("us"),
            },
        )
        .unwrap();
        assert_eq!(url, "/us?locale=en-US");
    }

    #[test]
    fn home_unknown_site_leaves_locale_off() {
        let cfg = config(TokenPosition::Path, TokenPosition::Path);
        let url = home_url_builder(
            &cfg,
            "/",
            HomeOptions {
                locale: Some("de-DE"),
                site: Some("de"),
            },
        )
        .unwrap();
        assert_eq!(url, "/de");
    }

    #[test]
    fn home_requires_url_config() {
        let mut cfg = config(TokenPosition::Path, TokenPosition::Path);
        cfg.url = None;
        assert_eq!(
            home_url_builder(&cfg, "/", HomeOptions::default()).unwrap_err(),
            UrlError::MissingUrlConfig
        );
    }
}
