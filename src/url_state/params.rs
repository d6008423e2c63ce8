use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Managed URL parameters and their defaults.
///
/// A parameter whose value equals its default is never written to the
/// address bar. Keys that are not configured default to the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UrlParamConfig {
    defaults: BTreeMap<String, String>,
}

impl UrlParamConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, default: impl Into<String>) -> Self {
        self.insert(key, default);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, default: impl Into<String>) {
        self.defaults.insert(key.into(), default.into());
    }

    /// Add `key` only if it is not configured yet.
    pub fn insert_if_absent(&mut self, key: &str, default: impl Into<String>) {
        self.defaults
            .entry(key.to_string())
            .or_insert_with(|| default.into());
    }

    pub fn default_for(&self, key: &str) -> &str {
        self.defaults.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn contains(&self, key: &str) -> bool {
        self.defaults.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.defaults.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.defaults.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defaults.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for UrlParamConfig
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            defaults: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
