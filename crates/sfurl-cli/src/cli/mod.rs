//! CLI for the sfurl storefront URL engine.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use sfurl_core::config::{self, StorefrontConfig};
use std::path::PathBuf;

use commands::{
    parse_key_value, run_build, run_category, run_home, run_params, run_product, run_rebuild,
    run_search, run_strip_params, run_switch_locale, run_url_set,
};

/// Top-level CLI for sfurl.
#[derive(Debug, Parser)]
#[command(name = "sfurl")]
#[command(about = "sfurl: locale- and site-aware storefront URL builder", long_about = None)]
pub struct Cli {
    /// Storefront config file (TOML or JSON). Defaults to ~/.config/sfurl/storefront.toml.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Decorate a logical path with locale/site tokens.
    Build {
        /// Logical path, e.g. /category/men or /search?q=shirt.
        path: String,
        #[arg(long)]
        locale: Option<String>,
        #[arg(long)]
        site: Option<String>,
    },

    /// Rewrite a URL for another locale (language switcher).
    SwitchLocale {
        /// Current URL (pathname and query).
        url: String,
        /// Target locale, e.g. fr-FR.
        locale: String,
        /// Site to emit instead of the one in the URL.
        #[arg(long)]
        site: Option<String>,
        /// Query parameter to drop; repeatable.
        #[arg(long = "disallow", value_name = "KEY")]
        disallow: Vec<String>,
    },

    /// Build the home URL, omitting default locale/site.
    Home {
        #[arg(long, default_value = "/")]
        base: String,
        #[arg(long)]
        locale: Option<String>,
        #[arg(long)]
        site: Option<String>,
    },

    /// Logical path for a category.
    Category { id: String },

    /// Logical path for a product.
    Product { id: String },

    /// Logical path for a search term.
    Search {
        #[arg(default_value = "")]
        term: String,
    },

    /// One URL per value of a query parameter (pagination, sorting).
    UrlSet {
        base: String,
        key: String,
        values: Vec<String>,
        /// Extra KEY=VALUE set on every URL; repeatable.
        #[arg(long = "extra", value_name = "KEY=VALUE", value_parser = parse_key_value)]
        extra: Vec<(String, String)>,
    },

    /// Set or delete query parameters, leaving the path untouched.
    Rebuild {
        url: String,
        /// KEY=VALUE to set; repeatable.
        #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_key_value)]
        set: Vec<(String, String)>,
        /// KEY to delete; repeatable.
        #[arg(long = "unset", value_name = "KEY")]
        unset: Vec<String>,
    },

    /// Remove query parameters from a URL.
    StripParams {
        url: String,
        #[arg(required = true)]
        keys: Vec<String>,
    },

    /// Show the site and locale an incoming URL resolves to.
    Params {
        url: String,
        /// Print JSON instead of plain text.
        #[arg(long)]
        json: bool,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Build { path, locale, site } => {
                let cfg = load_config(cli.config)?;
                run_build(&cfg, &path, locale.as_deref(), site.as_deref())?;
            }
            CliCommand::SwitchLocale {
                url,
                locale,
                site,
                disallow,
            } => {
                let cfg = load_config(cli.config)?;
                run_switch_locale(&cfg, &url, &locale, site.as_deref(), &disallow)?;
            }
            CliCommand::Home { base, locale, site } => {
                let cfg = load_config(cli.config)?;
                run_home(&cfg, &base, locale.as_deref(), site.as_deref())?;
            }
            CliCommand::Category { id } => run_category(&id),
            CliCommand::Product { id } => run_product(&id),
            CliCommand::Search { term } => run_search(&term),
            CliCommand::UrlSet {
                base,
                key,
                values,
                extra,
            } => run_url_set(&base, &key, &values, &extra),
            CliCommand::Rebuild { url, set, unset } => run_rebuild(&url, &set, &unset),
            CliCommand::StripParams { url, keys } => run_strip_params(&url, &keys),
            CliCommand::Params { url, json } => {
                let cfg = load_config(cli.config)?;
                run_params(&cfg, &url, json)?;
            }
        }

        Ok(())
    }
}

fn load_config(path: Option<PathBuf>) -> Result<StorefrontConfig> {
    let cfg = match path {
        Some(p) => config::load_from_path(&p)?,
        None => config::load_or_init()?,
    };
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

#[cfg(test)]
mod tests;
