//! `sfurl switch-locale` and `sfurl params` – rewrite and read locale/site tokens.

use anyhow::Result;
use sfurl_core::{
    get_params_from_path, get_url_with_locale, resolve_locale_from_url, resolve_site_from_url,
    LocaleUrlOptions, Location, StorefrontConfig,
};

pub fn run_switch_locale(
    cfg: &StorefrontConfig,
    url: &str,
    locale: &str,
    site: Option<&str>,
    disallow: &[String],
) -> Result<()> {
    let location = Location::from_url(url);
    let disallow: Vec<&str> = disallow.iter().map(String::as_str).collect();
    let mut opts = LocaleUrlOptions::new(&location).disallow(&disallow);
    if let Some(site) = site {
        opts = opts.site(site);
    }
    println!("{}", get_url_with_locale(cfg, locale, opts)?);
    Ok(())
}

/// Prints the raw tokens found in `url` and what they resolve to.
pub fn run_params(cfg: &StorefrontConfig, url: &str, json: bool) -> Result<()> {
    let params = get_params_from_path(cfg, url)?;
    let site = resolve_site_from_url(cfg, url)?;
    let locale = resolve_locale_from_url(cfg, url)?;

    if json {
        let out = serde_json::json!({
            "site": params.site,
            "locale": params.locale,
            "resolved_site": site.id,
            "resolved_locale": locale,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{:<8} {:<16} {}", "TOKEN", "FROM URL", "RESOLVED");
        println!(
            "{:<8} {:<16} {}",
            "site",
            params.site.as_deref().unwrap_or("-"),
            site.id
        );
        println!(
            "{:<8} {:<16} {}",
            "locale",
            params.locale.as_deref().unwrap_or("-"),
            locale
        );
    }
    Ok(())
}
