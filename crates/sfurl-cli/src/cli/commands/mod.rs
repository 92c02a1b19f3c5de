//! CLI command handlers, grouped by the part of the engine they drive.

mod build;
mod locale;
mod query;
mod resource;

pub use build::{run_build, run_home};
pub use locale::{run_params, run_switch_locale};
pub use query::{parse_key_value, run_rebuild, run_strip_params, run_url_set};
pub use resource::{run_category, run_product, run_search};
