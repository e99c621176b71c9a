#![forbid(unsafe_code)]

//! Trail persistence.
//!
//! The trail lives in an external key/value store behind the [`TrailStore`]
//! trait; the widget only reads and writes one configurable key. An absent
//! key is the empty-trail case, never an error, and an undecodable stored
//! value degrades to an empty trail with a warning. Write failures belong
//! to the store implementation's own contract.

use ahash::AHashMap;

use crate::trail::Trail;

/// Key/value persistence collaborator.
pub trait TrailStore {
    /// Fetch the value stored at `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Unconditionally overwrite the value at `key`.
    fn set(&mut self, key: &str, value: String);
}

/// In-memory reference store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: AHashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TrailStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.slots.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.slots.insert(key.to_string(), value);
    }
}

/// Load the trail stored at `key`; absent or undecodable yields an empty
/// trail.
#[must_use]
pub fn load_trail(store: &dyn TrailStore, key: &str) -> Trail {
    let Some(raw) = store.get(key) else {
        return Trail::new();
    };
    match serde_json::from_str(&raw) {
        Ok(trail) => trail,
        Err(error) => {
            tracing::warn!(message = "trail.load.undecodable", key, error = %error);
            Trail::new()
        }
    }
}

/// Persist the trail at `key`, overwriting any previous value.
pub fn save_trail(store: &mut dyn TrailStore, key: &str, trail: &Trail) {
    match serde_json::to_string(trail) {
        Ok(raw) => store.set(key, raw),
        Err(error) => {
            tracing::warn!(message = "trail.save.unencodable", key, error = %error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trail::CrumbEntry;

    #[test]
    fn absent_key_is_empty_trail() {
        let store = MemoryStore::new();
        assert!(load_trail(&store, "breadcrumb_trail").is_empty());
    }

    #[test]
    fn save_then_load_roundtrips() {
        let mut store = MemoryStore::new();
        let mut trail = Trail::new();
        trail.record(CrumbEntry::new("https://site/a", "A"));
        trail.record(CrumbEntry::new("https://site/b", "B"));
        save_trail(&mut store, "breadcrumb_trail", &trail);
        assert_eq!(load_trail(&store, "breadcrumb_trail"), trail);
    }

    #[test]
    fn undecodable_value_degrades_to_empty() {
        let mut store = MemoryStore::new();
        store.set("breadcrumb_trail", "not json".to_string());
        assert!(load_trail(&store, "breadcrumb_trail").is_empty());
    }

    #[test]
    fn save_overwrites_unconditionally() {
        let mut store = MemoryStore::new();
        store.set("breadcrumb_trail", "stale".to_string());
        let trail = Trail::new();
        save_trail(&mut store, "breadcrumb_trail", &trail);
        assert_eq!(store.get("breadcrumb_trail").as_deref(), Some("[]"));
    }

    #[test]
    fn stored_shape_is_an_array_of_url_title_records() {
        let mut store = MemoryStore::new();
        let mut trail = Trail::new();
        trail.record(CrumbEntry::new("https://site/a", "A"));
        save_trail(&mut store, "breadcrumb_trail", &trail);

        let raw = store.get("breadcrumb_trail").unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value[0]["url"], "https://site/a");
        assert_eq!(value[0]["title"], "A");
    }

    #[test]
    fn keys_are_independent() {
        let mut store = MemoryStore::new();
        let mut trail = Trail::new();
        trail.record(CrumbEntry::new("https://site/a", "A"));
        save_trail(&mut store, "one", &trail);
        assert!(load_trail(&store, "two").is_empty());
        assert_eq!(load_trail(&store, "one"), trail);
    }
}
