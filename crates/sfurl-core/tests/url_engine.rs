//! Integration test: configuration file → handle → builders, end to end.

mod common;

use sfurl_core::config::{TokenPosition, UrlConfig};
use sfurl_core::query::QueryMap;
use sfurl_core::{
    build_path_with_url_config, build_url_set, category_url_builder, get_params_from_path,
    get_url_with_locale, home_url_builder, product_url_builder, rebuild_path_with_params,
    remove_query_params_from_path, resolve_locale_from_url, resolve_site_from_url,
    search_url_builder, Category, ConfigHandle, HomeOptions, Location, LocaleUrlOptions, Product,
    UrlError, UrlTokens,
};

#[test]
fn category_link_for_non_default_locale() {
    let handle = ConfigHandle::new(common::load(common::PATH_PATH));
    let cfg = handle.load().unwrap();

    let path = category_url_builder(&Category::new("womens-clothing-tops"));
    let url = build_path_with_url_config(
        &cfg,
        &path,
        UrlTokens {
            locale: Some("fr-FR"),
            site: Some("global"),
        },
    )
    .unwrap();
    assert_eq!(url, "/global/fr-FR/category/womens-clothing-tops");

    let params = get_params_from_path(&cfg, &url).unwrap();
    assert_eq!(params.site.as_deref(), Some("global"));
    assert_eq!(params.locale.as_deref(), Some("fr-FR"));
}

#[test]
fn search_link_in_query_deployment() {
    let cfg = common::load(common::QUERY_NONE);
    let path = search_url_builder("red dress");
    let url = build_path_with_url_config(
        &cfg,
        &path,
        UrlTokens {
            locale: Some("fr-FR"),
            site: Some("RefArchGlobal"),
        },
    )
    .unwrap();
    // the codec re-serializes in form encoding
    assert_eq!(url, "/search?q=red+dress&locale=fr-FR");
}

#[test]
fn language_switcher_round_trip() {
    let cfg = common::load(common::PATH_PATH);
    let product = product_url_builder(&Product::new("25501032M"));
    let current = build_path_with_url_config(
        &cfg,
        &format!("{product}?color=black&refine=c_size%3DM"),
        UrlTokens {
            locale: Some("en-GB"),
            site: Some("global"),
        },
    )
    .unwrap();
    assert_eq!(current, "/global/en-GB/product/25501032M?color=black&refine=c_size%3DM");

    let location = Location::from_url(&current);
    let switched = get_url_with_locale(
        &cfg,
        "it-IT",
        LocaleUrlOptions::new(&location).disallow(&["refine"]),
    )
    .unwrap();
    assert_eq!(switched, "/global/it-IT/product/25501032M?color=black");

    let location = Location::from_url(&switched);
    let back = get_url_with_locale(&cfg, "en-GB", LocaleUrlOptions::new(&location)).unwrap();
    assert_eq!(back, "/global/en-GB/product/25501032M?color=black");
}

#[test]
fn home_links_per_site() {
    let cfg = common::load(common::PATH_PATH);
    let home = |locale, site| {
        home_url_builder(
            &cfg,
            "/",
            HomeOptions {
                locale: Some(locale),
                site: Some(site),
            },
        )
        .unwrap()
    };
    assert_eq!(home("en-US", "us"), "/");
    assert_eq!(home("en-CA", "us"), "/us/en-CA");
    assert_eq!(home("en-GB", "global"), "/global");
    assert_eq!(home("fr-FR", "global"), "/global/fr-FR");
}

#[test]
fn home_links_read_back_under_every_encoding() {
    let positions = [TokenPosition::Path, TokenPosition::QueryParam];
    // (locale, site given, expected site id)
    let cases = [
        ("en-US", Some("us"), "RefArch"),
        ("en-CA", Some("us"), "RefArch"),
        ("en-CA", None, "RefArch"),
        ("en-GB", Some("global"), "RefArchGlobal"),
        ("fr-FR", Some("global"), "RefArchGlobal"),
    ];
    for locale_pos in positions {
        for site_pos in positions {
            let mut cfg = common::load(common::PATH_PATH);
            cfg.url = Some(UrlConfig::new(locale_pos, site_pos));
            for (locale, site, site_id) in cases {
                let home = home_url_builder(
                    &cfg,
                    "/",
                    HomeOptions {
                        locale: Some(locale),
                        site,
                    },
                )
                .unwrap();
                let ctx = format!("{locale_pos:?}/{site_pos:?} {locale} {site:?} -> {home}");

                assert_eq!(resolve_site_from_url(&cfg, &home).unwrap().id, site_id, "{ctx}");
                assert_eq!(resolve_locale_from_url(&cfg, &home).unwrap(), locale, "{ctx}");
                if let Some(token) = get_params_from_path(&cfg, &home).unwrap().locale {
                    assert_eq!(token, locale, "{ctx}");
                }

                let location = Location::from_url(&home);
                let switched =
                    get_url_with_locale(&cfg, locale, LocaleUrlOptions::new(&location)).unwrap();
                let params = get_params_from_path(&cfg, &switched).unwrap();
                assert_eq!(params.locale.as_deref(), Some(locale), "{ctx} => {switched}");
                assert_eq!(resolve_site_from_url(&cfg, &switched).unwrap().id, site_id, "{ctx}");
            }
        }
    }
}

#[test]
fn pagination_set_keeps_query_state() {
    let urls = build_url_set(
        "/global/en-GB/category/mens?sort=price&server_only",
        "offset",
        &[0, 25, 50],
        &[("limit", "25")],
    );
    assert_eq!(urls.len(), 3);
    for (url, offset) in urls.iter().zip(["0", "25", "50"]) {
        let (path, query) = url.split_once('?').unwrap();
        assert_eq!(path, "/global/en-GB/category/mens");
        let query = QueryMap::parse(query);
        let keys: Vec<_> = query.keys().collect();
        assert_eq!(keys, ["sort", "server_only", "offset", "limit"]);
        assert_eq!(query.get("offset").and_then(|v| v.as_str()), Some(offset));
    }
}

#[test]
fn literal_query_rewrites() {
    assert_eq!(
        rebuild_path_with_params("/en/product/25501032M?color=black&size=M", &[("pid", None)]),
        "/en/product/25501032M?color=black&size=M"
    );
    assert_eq!(
        remove_query_params_from_path(
            "/en/product/25501032M?color=black&size=M&something=123",
            &["color", "size"]
        ),
        "/en/product/25501032M?something=123"
    );
}

#[test]
fn unconfigured_deployment_is_fatal() {
    let cfg = common::load(common::UNCONFIGURED);
    let err = build_path_with_url_config(
        &cfg,
        "/",
        UrlTokens {
            locale: Some("en-US"),
            site: None,
        },
    )
    .unwrap_err();
    assert_eq!(err, UrlError::MissingUrlConfig);
    assert!(home_url_builder(&cfg, "/", HomeOptions::default()).is_err());
    assert!(get_params_from_path(&cfg, "/").is_err());
}

#[test]
fn reload_swaps_policy_for_new_readers() {
    let handle = ConfigHandle::new(common::load(common::PATH_PATH));
    let old = handle.load().unwrap();
    let _ = handle.store(common::load(common::QUERY_NONE));
    let new = handle.load().unwrap();

    let tokens = UrlTokens {
        locale: Some("fr-FR"),
        site: Some("global"),
    };
    assert_eq!(build_path_with_url_config(&old, "/cart", tokens).unwrap(), "/global/fr-FR/cart");
    assert_eq!(build_path_with_url_config(&new, "/cart", tokens).unwrap(), "/cart?locale=fr-FR");
}
