#![forbid(unsafe_code)]

//! The breadcrumb trail: an append-only visit log.
//!
//! # Invariants
//!
//! 1. Entry order is visit order; nothing is ever removed.
//! 2. Consecutive entries never share a `url` — a revisit (refresh) of the
//!    current page is recorded at most once.
//! 3. Windowing is a read-time view; the full history stays intact.

use serde::{Deserialize, Serialize};

/// One crumb: a visited page and its display title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrumbEntry {
    /// Page URL, the entry's identity key.
    pub url: String,
    /// Derived human-readable label.
    pub title: String,
}

impl CrumbEntry {
    /// Create an entry.
    #[must_use]
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
        }
    }
}

/// Ordered visit log, serialized transparently as a JSON array of entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trail {
    entries: Vec<CrumbEntry>,
}

impl Trail {
    /// Create an empty trail.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the trail has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in visit order.
    #[must_use]
    pub fn entries(&self) -> &[CrumbEntry] {
        &self.entries
    }

    /// The most recently recorded entry.
    #[must_use]
    pub fn last(&self) -> Option<&CrumbEntry> {
        self.entries.last()
    }

    /// Record a visit. Returns whether the entry was appended.
    ///
    /// A url equal to the last entry's url is a revisit and is not
    /// re-appended.
    pub fn record(&mut self, entry: CrumbEntry) -> bool {
        if self.entries.last().is_some_and(|last| last.url == entry.url) {
            tracing::trace!(message = "trail.revisit", url = %entry.url);
            return false;
        }
        tracing::debug!(
            message = "trail.append",
            url = %entry.url,
            title = %entry.title,
            len = self.entries.len() + 1
        );
        self.entries.push(entry);
        true
    }

    /// The last `levels` entries, fewer if the trail is shorter.
    #[must_use]
    pub fn window(&self, levels: usize) -> &[CrumbEntry] {
        let start = self.entries.len().saturating_sub(levels);
        &self.entries[start..]
    }
}
