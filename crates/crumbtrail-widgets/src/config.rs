#![forbid(unsafe_code)]

//! Widget configuration.

/// Configuration for one breadcrumb binding, immutable once resolved.
///
/// Constructed with [`BreadcrumbConfig::new`] and the builder methods;
/// every field has a documented default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreadcrumbConfig {
    /// Number of most-recent crumbs to display. Home is not counted.
    pub levels: usize,
    /// Always display a fixed home crumb first.
    pub show_home: bool,
    /// Link target of the home crumb.
    pub home_url: String,
    /// Style class applied to the home crumb.
    pub home_class: String,
    /// Text of the home crumb.
    pub home_text: String,
    /// Selector of the on-page marker element whose `title` attribute
    /// overrides derived titles.
    pub title_element: String,
    /// Key under which the trail is persisted.
    pub storage_key: String,
    /// Slide the crumbs out after rendering.
    pub animate_crumbs: bool,
    /// Easing curve for the reveal, by name. `None` or an unknown name
    /// falls back to `swing`.
    pub easing: Option<String>,
    /// Also collapse all-digit path segments to the parent segment, the
    /// way GUID segments always are. Off by default: a path segment is
    /// always a string, so a value-type numeric test can never match one.
    pub collapse_numeric_ids: bool,
}

impl Default for BreadcrumbConfig {
    fn default() -> Self {
        Self {
            levels: 2,
            show_home: false,
            home_url: String::new(),
            home_class: "homeBreadcrumb".to_string(),
            home_text: "Home".to_string(),
            title_element: "#breadcrumb_title".to_string(),
            storage_key: "breadcrumb_trail".to_string(),
            animate_crumbs: true,
            easing: Some("swing".to_string()),
            collapse_numeric_ids: false,
        }
    }
}

impl BreadcrumbConfig {
    /// Create a configuration with the documented defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of displayed crumbs.
    #[must_use]
    pub fn levels(mut self, levels: usize) -> Self {
        self.levels = levels;
        self
    }

    /// Toggle the fixed home crumb.
    #[must_use]
    pub fn show_home(mut self, show_home: bool) -> Self {
        self.show_home = show_home;
        self
    }

    /// Set the home crumb's link target.
    #[must_use]
    pub fn home_url(mut self, home_url: impl Into<String>) -> Self {
        self.home_url = home_url.into();
        self
    }

    /// Set the home crumb's style class.
    #[must_use]
    pub fn home_class(mut self, home_class: impl Into<String>) -> Self {
        self.home_class = home_class.into();
        self
    }

    /// Set the home crumb's text.
    #[must_use]
    pub fn home_text(mut self, home_text: impl Into<String>) -> Self {
        self.home_text = home_text.into();
        self
    }

    /// Set the title-marker selector.
    #[must_use]
    pub fn title_element(mut self, title_element: impl Into<String>) -> Self {
        self.title_element = title_element.into();
        self
    }

    /// Set the persistence key.
    #[must_use]
    pub fn storage_key(mut self, storage_key: impl Into<String>) -> Self {
        self.storage_key = storage_key.into();
        self
    }

    /// Toggle the reveal animation.
    #[must_use]
    pub fn animate_crumbs(mut self, animate_crumbs: bool) -> Self {
        self.animate_crumbs = animate_crumbs;
        self
    }

    /// Set the reveal easing curve by name.
    #[must_use]
    pub fn easing(mut self, easing: impl Into<String>) -> Self {
        self.easing = Some(easing.into());
        self
    }

    /// Opt in to collapsing all-digit path segments.
    #[must_use]
    pub fn collapse_numeric_ids(mut self, collapse_numeric_ids: bool) -> Self {
        self.collapse_numeric_ids = collapse_numeric_ids;
        self
    }
}
