//! Query-string codec.
//!
//! Parses a query string into an ordered, key-unique mapping that keeps
//! valueless flags (`?server_only`) distinct from empty values (`?q=`), and
//! serializes it back deterministically.

mod map;
mod parse;

pub use map::{QueryMap, QueryValue};
pub(crate) use parse::encode_component;
