//! Query map extracted from a location hash.

use indexmap::IndexMap;
use indexmap::map::Iter;
use serde::{Deserialize, Serialize};

use super::trim_hash;

/// String keys to string values, in first-insertion order.
///
/// Inserting an existing key replaces its value in place, so the last
/// occurrence wins while the key keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryMap {
    entries: IndexMap<String, String>,
}

impl QueryMap {
    /// Creates an empty query map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`, returning the previous value if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    /// Returns the value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Returns true if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> Iter<'_, String, String> {
        self.entries.iter()
    }

    /// Iterates over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<'a> IntoIterator for &'a QueryMap {
    type Item = (&'a String, &'a String);
    type IntoIter = Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for QueryMap {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Parses the query part of a location hash.
///
/// The hash is trimmed, everything up to and including the first `?` is
/// dropped (without a `?` the whole hash is the query), and the rest is
/// split on `&`. Each segment splits at its first `=` into key and value.
///
/// A segment without `=` maps to itself: `flag` yields `flag -> flag`.
/// An empty hash therefore yields a single `"" -> ""` entry.
#[must_use]
pub fn parse_query(hash: &str) -> QueryMap {
    let trimmed = trim_hash(hash);
    let query = trimmed.split_once('?').map_or(trimmed, |(_, rest)| rest);

    query.split('&').map(split_pair).collect()
}

fn split_pair(segment: &str) -> (&str, &str) {
    segment.split_once('=').unwrap_or((segment, segment))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entries(map: &QueryMap) -> Vec<(&str, &str)> {
        map.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect()
    }

    #[test]
    fn test_key_value_pairs() {
        let map = parse_query("#/path?a=1&b=2");
        assert_eq!(entries(&map), vec![("a", "1"), ("b", "2")]);
    }

    #[test]
    fn test_empty_hash_yields_single_empty_entry() {
        let map = parse_query("");
        assert_eq!(entries(&map), vec![("", "")]);
    }

    #[test]
    fn test_segment_without_equals_maps_to_itself() {
        let map = parse_query("#/path?flag");
        assert_eq!(entries(&map), vec![("flag", "flag")]);
    }

    #[test]
    fn test_hash_without_question_mark_is_whole_query() {
        let map = parse_query("#/users");
        assert_eq!(entries(&map), vec![("#/users", "#/users")]);
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let map = parse_query("  #/poll?id=3 \n");
        assert_eq!(map.get("id"), Some("3"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_byte_order_mark_is_trimmed() {
        let map = parse_query("\u{feff}#/poll?id=3\u{feff}");
        assert_eq!(entries(&map), vec![("id", "3")]);
    }

    #[test]
    fn test_last_duplicate_wins_in_first_position() {
        let map = parse_query("#/?a=1&b=2&a=3");
        assert_eq!(entries(&map), vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn test_value_keeps_text_after_first_equals() {
        let map = parse_query("#/?token=abc==&empty=");
        assert_eq!(map.get("token"), Some("abc=="));
        assert_eq!(map.get("empty"), Some(""));
    }

    #[test]
    fn test_no_percent_decoding() {
        let map = parse_query("#/?q=a%20b+c");
        assert_eq!(map.get("q"), Some("a%20b+c"));
    }

    #[test]
    fn test_collect_from_pairs() {
        let map: QueryMap = [("x", "1"), ("y", "2")].into_iter().collect();
        assert!(map.contains_key("x"));
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["x", "y"]);
    }
}
