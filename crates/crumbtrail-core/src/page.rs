#![forbid(unsafe_code)]

//! Page-context collaborator.
//!
//! The widget never touches a document model directly; it asks a
//! [`PageContext`] for the three things it needs: the current URL, the
//! document title, and the `title` attribute of an on-page marker element
//! looked up by selector.

use ahash::AHashMap;

/// The current page as seen by the breadcrumb widget.
pub trait PageContext {
    /// The page URL (absolute or relative).
    fn url(&self) -> &str;

    /// The document title, used as a last-resort crumb title.
    fn document_title(&self) -> &str;

    /// The `title` attribute of the element matching `selector`, if the
    /// element exists and carries one. Emptiness is the caller's concern.
    fn marker_title(&self, selector: &str) -> Option<String>;
}

/// An immutable page snapshot; the reference [`PageContext`] used by tests
/// and the demo.
#[derive(Debug, Clone, Default)]
pub struct StaticPage {
    url: String,
    document_title: String,
    markers: AHashMap<String, String>,
}

impl StaticPage {
    /// Create a page snapshot for a URL.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            document_title: String::new(),
            markers: AHashMap::new(),
        }
    }

    /// Set the document title.
    #[must_use]
    pub fn document_title(mut self, title: impl Into<String>) -> Self {
        self.document_title = title.into();
        self
    }

    /// Add a marker element: `selector` carries the given `title` attribute.
    #[must_use]
    pub fn marker(mut self, selector: impl Into<String>, title: impl Into<String>) -> Self {
        self.markers.insert(selector.into(), title.into());
        self
    }
}

impl PageContext for StaticPage {
    fn url(&self) -> &str {
        &self.url
    }

    fn document_title(&self) -> &str {
        &self.document_title
    }

    fn marker_title(&self, selector: &str) -> Option<String> {
        self.markers.get(selector).cloned()
    }
}
