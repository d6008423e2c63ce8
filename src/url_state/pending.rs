use std::collections::BTreeMap;

/// Staged parameter writes waiting for the next flush.
///
/// Later writes to the same key replace earlier ones, so a burst of updates
/// collapses into one value per key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingWrites {
    writes: BTreeMap<String, String>,
}

impl PendingWrites {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.writes.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.writes.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.writes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.writes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Drop the staged write for `key`. Returns true if one was staged.
    pub fn remove(&mut self, key: &str) -> bool {
        self.writes.remove(key).is_some()
    }

    pub fn clear(&mut self) {
        self.writes.clear();
    }

    /// Take every staged write, leaving the buffer empty.
    pub fn drain(&mut self) -> BTreeMap<String, String> {
        std::mem::take(&mut self.writes)
    }
}
