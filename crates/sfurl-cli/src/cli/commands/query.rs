//! `sfurl url-set`, `sfurl rebuild`, `sfurl strip-params` – query rewriting.

use sfurl_core::{build_url_set, rebuild_path_with_params, remove_query_params_from_path};

/// clap value parser for `KEY=VALUE` arguments.
pub fn parse_key_value(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got `{s}`"))?;
    if key.is_empty() {
        return Err(format!("empty key in `{s}`"));
    }
    Ok((key.to_string(), value.to_string()))
}

pub fn run_url_set(base: &str, key: &str, values: &[String], extra: &[(String, String)]) {
    let extra: Vec<(&str, &str)> = extra.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
    for url in build_url_set(base, key, values, &extra) {
        println!("{url}");
    }
}

pub fn run_rebuild(url: &str, set: &[(String, String)], unset: &[String]) {
    let updates: Vec<(&str, Option<&str>)> = set
        .iter()
        .map(|(k, v)| (k.as_str(), Some(v.as_str())))
        .chain(unset.iter().map(|k| (k.as_str(), None)))
        .collect();
    println!("{}", rebuild_path_with_params(url, &updates));
}

pub fn run_strip_params(url: &str, keys: &[String]) {
    let keys: Vec<&str> = keys.iter().map(String::as_str).collect();
    println!("{}", remove_query_params_from_path(url, &keys));
}
