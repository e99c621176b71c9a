#![forbid(unsafe_code)]

//! OSC 8 hyperlink registry.
//!
//! Crumbs carry their page URL as a link target. The `LinkRegistry` maps
//! those URLs to compact 24-bit link IDs so cells store an id instead of a
//! full URL string. Registration deduplicates: revisited pages reuse their
//! existing id.

use ahash::AHashMap;

const MAX_LINK_ID: u32 = 0x00FF_FFFF;

/// Registry for OSC 8 hyperlink URLs.
///
/// Id 0 is reserved for "no link".
#[derive(Debug, Clone, Default)]
pub struct LinkRegistry {
    /// Link slots indexed by ID (0 reserved).
    links: Vec<Option<String>>,
    /// URL to ID lookup for deduplication.
    lookup: AHashMap<String, u32>,
}

impl LinkRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            links: vec![None],
            lookup: AHashMap::new(),
        }
    }

    /// Register a URL and return its link ID.
    ///
    /// If the URL is already registered, returns the existing ID. Returns 0
    /// (the reserved "no link" id) if the id space is exhausted.
    pub fn register(&mut self, url: &str) -> u32 {
        if let Some(&id) = self.lookup.get(url) {
            return id;
        }

        let id = self.links.len() as u32;
        if id > MAX_LINK_ID {
            return 0;
        }
        self.links.push(Some(url.to_string()));
        self.lookup.insert(url.to_string(), id);
        id
    }

    /// Get the URL for a link ID.
    pub fn get(&self, id: u32) -> Option<&str> {
        self.links
            .get(id as usize)
            .and_then(|slot| slot.as_ref())
            .map(|s| s.as_str())
    }

    /// Clear all links.
    pub fn clear(&mut self) {
        self.links.clear();
        self.links.push(None);
        self.lookup.clear();
    }

    /// Number of registered links.
    #[must_use]
    pub fn len(&self) -> usize {
        self.links.len().saturating_sub(1)
    }

    /// Check if the registry is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if the registry contains a link ID.
    #[inline]
    #[must_use]
    pub fn contains(&self, id: u32) -> bool {
        self.get(id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_and_get() {
        let mut registry = LinkRegistry::new();
        let id = registry.register("https://site/Dashboard");
        assert_eq!(registry.get(id), Some("https://site/Dashboard"));
    }

    #[test]
    fn deduplication() {
        let mut registry = LinkRegistry::new();
        let id1 = registry.register("https://site/Dashboard");
        let id2 = registry.register("https://site/Dashboard");
        assert_eq!(id1, id2);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn distinct_urls_distinct_ids() {
        let mut registry = LinkRegistry::new();
        let id1 = registry.register("https://one");
        let id2 = registry.register("https://two");
        assert_ne!(id1, id2);
        assert_eq!(registry.get(id1), Some("https://one"));
        assert_eq!(registry.get(id2), Some("https://two"));
    }

    #[test]
    fn id_zero_is_reserved() {
        let registry = LinkRegistry::new();
        assert_eq!(registry.get(0), None);
        assert!(!registry.contains(0));
    }

    #[test]
    fn register_returns_nonzero() {
        let mut registry = LinkRegistry::new();
        for i in 0..20 {
            let id = registry.register(&format!("https://site/{i}"));
            assert_ne!(id, 0, "register must never return id 0");
        }
    }

    #[test]
    fn get_out_of_bounds_returns_none() {
        let registry = LinkRegistry::new();
        assert_eq!(registry.get(999), None);
        assert_eq!(registry.get(u32::MAX), None);
    }

    #[test]
    fn clear_resets() {
        let mut registry = LinkRegistry::new();
        let id = registry.register("https://site/a");
        registry.register("https://site/b");
        registry.clear();
        assert!(registry.is_empty());
        assert_eq!(registry.get(id), None);

        let fresh = registry.register("https://site/c");
        assert_ne!(fresh, 0);
        assert_eq!(registry.get(fresh), Some("https://site/c"));
    }

    mod property {
        use super::*;
        use proptest::prelude::*;

        fn arb_url() -> impl Strategy<Value = String> {
            "[a-z]{3,12}".prop_map(|s| format!("https://{s}.example"))
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(256))]

            /// Register/get roundtrip always returns the original URL.
            #[test]
            fn register_get_roundtrip(url in arb_url()) {
                let mut registry = LinkRegistry::new();
                let id = registry.register(&url);
                prop_assert_ne!(id, 0);
                prop_assert_eq!(registry.get(id), Some(url.as_str()));
            }

            /// Duplicate registration returns the same ID and len stays 1.
            #[test]
            fn dedup_same_id(url in arb_url()) {
                let mut registry = LinkRegistry::new();
                let id1 = registry.register(&url);
                let id2 = registry.register(&url);
                prop_assert_eq!(id1, id2);
                prop_assert_eq!(registry.len(), 1);
            }

            /// len equals the number of distinct registered URLs.
            #[test]
            fn len_counts_distinct(count in 1usize..20) {
                let mut registry = LinkRegistry::new();
                for i in 0..count {
                    registry.register(&format!("https://u{i}.example"));
                    registry.register(&format!("https://u{i}.example"));
                }
                prop_assert_eq!(registry.len(), count);
            }
        }
    }
}
