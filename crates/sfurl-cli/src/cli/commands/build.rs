//! `sfurl build` and `sfurl home` – decorate paths with locale/site tokens.

use anyhow::Result;
use sfurl_core::{
    build_path_with_url_config, home_url_builder, HomeOptions, StorefrontConfig, UrlTokens,
};

pub fn run_build(
    cfg: &StorefrontConfig,
    path: &str,
    locale: Option<&str>,
    site: Option<&str>,
) -> Result<()> {
    let url = build_path_with_url_config(cfg, path, UrlTokens { locale, site })?;
    println!("{url}");
    Ok(())
}

pub fn run_home(
    cfg: &StorefrontConfig,
    base: &str,
    locale: Option<&str>,
    site: Option<&str>,
) -> Result<()> {
    let url = home_url_builder(cfg, base, HomeOptions { locale, site })?;
    println!("{url}");
    Ok(())
}
