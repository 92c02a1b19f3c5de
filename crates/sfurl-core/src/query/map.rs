//! Ordered query-parameter mapping.

use std::fmt;

use super::parse::{decode_component, encode_component, split_pair};

/// Value half of a query entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    /// `key=value` (the value may be empty, as in `q=`).
    Value(String),
    /// Bare `key` with no `=`: a presence marker.
    Flag,
}

impl QueryValue {
    /// The value as a string slice; `None` for a flag.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            QueryValue::Value(v) => Some(v),
            QueryValue::Flag => None,
        }
    }
}

/// Query string as an ordered list of unique keys.
///
/// Keys keep the position at which they first appeared. Setting an existing
/// key overwrites it in place; new keys are appended.
///
/// A flag with an empty key is never stored: it has no serialized form, so
/// `parse(serialize(m)) == m` holds for every map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryMap {
    entries: Vec<(String, QueryValue)>,
}

impl QueryMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a raw query string; a leading `?` is ignored.
    ///
    /// Duplicate keys are last-wins: the later value replaces the earlier one
    /// but the entry stays where the key was first seen.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        let mut map = Self::new();
        for (key, value) in raw.split('&').filter_map(split_pair) {
            let key = decode_component(key);
            let value = match value {
                Some(v) => QueryValue::Value(decode_component(v)),
                None => QueryValue::Flag,
            };
            map.insert(key, value);
        }
        map
    }

    /// Serializes entries in order, joined by `&`. Flags render as the bare
    /// key. An empty map yields an empty string; adding `?` is up to the caller.
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                out.push('&');
            }
            out.push_str(&encode_component(key));
            if let QueryValue::Value(v) = value {
                out.push('=');
                out.push_str(&encode_component(v));
            }
        }
        out
    }

    /// Applies updates in order. `None` deletes the key (no-op when missing);
    /// `Some(v)` sets it, in place if present, otherwise at the end.
    pub fn merge<I, K, V>(&mut self, updates: I)
    where
        I: IntoIterator<Item = (K, Option<V>)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (key, value) in updates {
            match value {
                Some(v) => self.set(key.as_ref(), v),
                None => {
                    let _ = self.remove(key.as_ref());
                }
            }
        }
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.insert(key.to_string(), QueryValue::Value(value.into()));
    }

    /// Sets `key` as a valueless flag; ignored when `key` is empty.
    pub fn set_flag(&mut self, key: &str) {
        self.insert(key.to_string(), QueryValue::Flag);
    }

    /// Removes `key`, returning its value if it was present.
    pub fn remove(&mut self, key: &str) -> Option<QueryValue> {
        let idx = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(idx).1)
    }

    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    fn insert(&mut self, key: String, value: QueryValue) {
        if key.is_empty() && value == QueryValue::Flag {
            return;
        }
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }
}

impl fmt::Display for QueryMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k.into(), QueryValue::Value(v.into()));
        }
        map
    }
}
