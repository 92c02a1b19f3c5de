//! Relative URL model: raw path, ordered query, optional fragment.
//!
//! The path is kept as the caller wrote it so operations that only touch the
//! query (`rebuild_path_with_params`) leave it byte-for-byte intact. Code that
//! needs to work on segments converts through [`UrlPath`].

use crate::query::QueryMap;

/// A relative URL split at its `?` and `#` boundaries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelativeUrl {
    pub path: String,
    pub query: QueryMap,
    pub fragment: Option<String>,
}

impl RelativeUrl {
    pub fn parse(url: &str) -> Self {
        let (rest, fragment) = match url.split_once('#') {
            Some((r, f)) => (r, Some(f.to_string())),
            None => (url, None),
        };
        let (path, query) = match rest.split_once('?') {
            Some((p, q)) => (p, QueryMap::parse(q)),
            None => (rest, QueryMap::new()),
        };
        Self {
            path: path.to_string(),
            query,
            fragment,
        }
    }

    /// Builds from a location-style `pathname` and `search` pair.
    pub fn from_location(location: &Location) -> Self {
        Self {
            path: location.pathname.clone(),
            query: QueryMap::parse(&location.search),
            fragment: None,
        }
    }

    pub fn segments(&self) -> UrlPath {
        UrlPath::parse(&self.path)
    }

    pub fn set_segments(&mut self, path: &UrlPath) {
        self.path = path.to_string();
    }

    /// Renders `path[?query][#fragment]`; no `?` is emitted for an empty query.
    pub fn to_url_string(&self) -> String {
        let mut out = self.path.clone();
        if !self.query.is_empty() {
            out.push('?');
            out.push_str(&self.query.serialize());
        }
        if let Some(fragment) = &self.fragment {
            out.push('#');
            out.push_str(fragment);
        }
        out
    }
}

impl std::fmt::Display for RelativeUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_url_string())
    }
}

/// The part of a browser/router location the engine reads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pub pathname: String,
    /// Query string, with or without the leading `?`.
    pub search: String,
}

impl Location {
    pub fn new(pathname: impl Into<String>, search: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
            search: search.into(),
        }
    }

    /// Splits a relative URL into pathname and search (fragment dropped).
    pub fn from_url(url: &str) -> Self {
        let url = url.split_once('#').map_or(url, |(r, _)| r);
        match url.split_once('?') {
            Some((p, q)) => Self::new(p, format!("?{q}")),
            None => Self::new(url, ""),
        }
    }
}

/// Absolute path as ordered segments.
///
/// `/` has no segments. A trailing slash on a non-root path is remembered so
/// re-rendering does not change it. Empty inner segments (`/a//b`) are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlPath {
    pub segments: Vec<String>,
    pub trailing_slash: bool,
}

impl UrlPath {
    pub fn parse(path: &str) -> Self {
        let trimmed = path.strip_prefix('/').unwrap_or(path);
        if trimmed.is_empty() {
            return Self::default();
        }
        let mut segments: Vec<String> = trimmed.split('/').map(str::to_string).collect();
        let trailing_slash = segments.last().is_some_and(|s| s.is_empty());
        if trailing_slash {
            let _ = segments.pop();
        }
        Self {
            segments,
            trailing_slash,
        }
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl std::fmt::Display for UrlPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("/");
        }
        for segment in &self.segments {
            write!(f, "/{segment}")?;
        }
        if self.trailing_slash {
            f.write_str("/")?;
        }
        Ok(())
    }
}
