//! Shared storefront fixtures for integration tests.

use std::io::Write;

use sfurl_core::config::{self, StorefrontConfig};
use tempfile::NamedTempFile;

/// Two sites, both tokens in the path.
pub const PATH_PATH: &str = r#"
default_site = "RefArch"

[url]
locale = "path"
site = "path"

[[sites]]
id = "RefArch"
alias = "us"
supported_locales = ["en-US", "en-CA"]
default_locale = "en-US"

[[sites]]
id = "RefArchGlobal"
alias = "global"
supported_locales = ["en-GB", "fr-FR", "it-IT"]
default_locale = "en-GB"
"#;

/// Single-site deployment: locale as a query parameter, no site token.
pub const QUERY_NONE: &str = r#"
default_site = "RefArchGlobal"

[url]
locale = "query_param"
site = "none"

[[sites]]
id = "RefArchGlobal"
supported_locales = ["en-GB", "fr-FR"]
default_locale = "en-GB"
"#;

/// Same sites as [`PATH_PATH`] but with the `[url]` section missing.
pub const UNCONFIGURED: &str = r#"
default_site = "RefArch"

[[sites]]
id = "RefArch"
supported_locales = ["en-US"]
default_locale = "en-US"
"#;

/// Writes `toml` to a temp file and loads it through the regular loader.
pub fn load(toml: &str) -> StorefrontConfig {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(toml.as_bytes()).unwrap();
    f.flush().unwrap();
    config::load_from_path(f.path()).unwrap()
}
