//! `application/x-www-form-urlencoded` query strings as ordered pairs.

use tracing::warn;

pub type QueryPairs = Vec<(String, String)>;

/// Parse a query string, with or without the leading `?`.
///
/// Malformed input yields no pairs rather than an error.
pub fn parse_query(query: &str) -> QueryPairs {
    let query = query.strip_prefix('?').unwrap_or(query);
    if query.is_empty() {
        return Vec::new();
    }
    serde_urlencoded::from_str::<QueryPairs>(query).unwrap_or_else(|e| {
        warn!(error = %e, query, "ignoring malformed query string");
        Vec::new()
    })
}

/// Serialize pairs without a leading `?`.
pub fn serialize_query(pairs: &[(String, String)]) -> String {
    serde_urlencoded::to_string(pairs).unwrap_or_else(|e| {
        warn!(error = %e, "failed to encode query string");
        String::new()
    })
}

/// First value for `key`, if any.
pub fn get_pair<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// Set `key` to `value` in place of its first occurrence, dropping any
/// duplicates. A new key is appended.
pub fn set_pair(pairs: &mut QueryPairs, key: &str, value: &str) {
    match pairs.iter().position(|(k, _)| k == key) {
        Some(index) => {
            pairs[index].1 = value.to_string();
            let mut seen = false;
            pairs.retain(|(k, _)| {
                if k != key {
                    return true;
                }
                let keep = !seen;
                seen = true;
                keep
            });
        }
        None => pairs.push((key.to_string(), value.to_string())),
    }
}

pub fn remove_pair(pairs: &mut QueryPairs, key: &str) {
    pairs.retain(|(k, _)| k != key);
}
