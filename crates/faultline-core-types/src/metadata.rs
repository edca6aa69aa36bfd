use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Open metadata bag attached to an error
///
/// Stores arbitrary diagnostic values as JSON, keyed by name. Contents are
/// never validated. Backed by an ordered map so that serialized output is
/// stable: two errors built from identical inputs serialize identically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Metadata {
    entries: BTreeMap<String, serde_json::Value>,
}

impl Metadata {
    /// Create a new empty bag
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Get a value by key
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.entries.get(key)
    }

    /// Set a value by key
    pub fn set(&mut self, key: impl Into<String>, value: serde_json::Value) {
        self.entries.insert(key.into(), value);
    }

    /// Remove a value by key
    pub fn remove(&mut self, key: &str) -> Option<serde_json::Value> {
        self.entries.remove(key)
    }

    /// Check if a key exists
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// All keys, in order
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the bag is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<BTreeMap<String, serde_json::Value>> for Metadata {
    fn from(entries: BTreeMap<String, serde_json::Value>) -> Self {
        Self { entries }
    }
}

impl From<Metadata> for BTreeMap<String, serde_json::Value> {
    fn from(metadata: Metadata) -> Self {
        metadata.entries
    }
}

impl FromIterator<(String, serde_json::Value)> for Metadata {
    fn from_iter<I: IntoIterator<Item = (String, serde_json::Value)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_and_get() {
        let mut meta = Metadata::new();
        meta.set("method", json!("get"));
        meta.set("attempt", json!(3));

        assert_eq!(meta.get("method"), Some(&json!("get")));
        assert_eq!(meta.get("attempt"), Some(&json!(3)));
        assert_eq!(meta.get("missing"), None);
        assert_eq!(meta.len(), 2);
    }

    #[test]
    fn test_remove() {
        let mut meta = Metadata::new();
        meta.set("key", json!("value"));

        assert_eq!(meta.remove("key"), Some(json!("value")));
        assert!(meta.is_empty());
        assert_eq!(meta.remove("key"), None);
    }

    #[test]
    fn test_serialization_is_key_ordered() {
        let mut meta = Metadata::new();
        meta.set("zulu", json!(1));
        meta.set("alpha", json!(2));
        meta.set("mike", json!(3));

        let json = serde_json::to_string(&meta).unwrap();
        assert_eq!(json, r#"{"alpha":2,"mike":3,"zulu":1}"#);
    }

    #[test]
    fn test_serde_round_trip() {
        let mut meta = Metadata::new();
        meta.set("query", json!({"filter": "active"}));

        let json = serde_json::to_string(&meta).unwrap();
        let back: Metadata = serde_json::from_str(&json).unwrap();
        assert_eq!(meta, back);
    }

    #[test]
    fn test_from_iterator() {
        let meta: Metadata = [("a".to_string(), json!(1)), ("b".to_string(), json!(2))]
            .into_iter()
            .collect();

        assert_eq!(meta.len(), 2);
        assert!(meta.contains_key("a"));
    }
}
