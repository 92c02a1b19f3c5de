//! Locale- and site-aware URL resolution for multi-site storefronts.
//!
//! Logical paths come from the [`resource`] builders; [`locale_url`] decorates
//! them with locale/site tokens according to a [`config::StorefrontConfig`],
//! using the [`composer`] for path segments and the [`query`] codec for query
//! parameters. All operations are synchronous and pure.

pub mod composer;
pub mod config;
pub mod error;
pub mod locale_url;
pub mod logging;
pub mod query;
pub mod relative;
pub mod resource;
pub mod url_set;

pub use config::{ConfigHandle, Site, StorefrontConfig, TokenPosition, UrlConfig};
pub use error::UrlError;
pub use locale_url::{
    build_path_with_url_config, get_params_from_path, get_url_with_locale,
    rebuild_path_with_params, remove_query_params_from_path, resolve_locale_from_url,
    resolve_site_from_url, LocaleUrlOptions, UrlParams, UrlTokens,
};
pub use relative::Location;
pub use resource::{
    category_url_builder, home_url_builder, product_url_builder, search_url_builder, Category,
    HomeOptions, Product,
};
pub use url_set::build_url_set;
