#![forbid(unsafe_code)]

//! Title derivation.
//!
//! A crumb title comes from, in strict precedence order:
//!
//! 1. The `title` attribute of the configured marker element, verbatim.
//! 2. The final URL path segment, run through a pipeline of steps:
//!    [`last_segment`], [`strip_extension`], query-marker truncation,
//!    identifier collapse to the parent segment, [`space_camel`].
//! 3. The document title, when the path segment is empty or only a query
//!    string remained.
//!
//! Every step degrades instead of failing: unparseable input passes
//! through unchanged.

use std::sync::OnceLock;

use regex::Regex;

use crate::config::BreadcrumbConfig;
use crumbtrail_core::page::PageContext;

const QUERY_MARKER: char = '?';

fn guid_pattern() -> &'static Regex {
    static GUID: OnceLock<Regex> = OnceLock::new();
    GUID.get_or_init(|| {
        Regex::new(
            r"^\{?[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}\}?$",
        )
        .expect("guid regex")
    })
}

fn camel_boundary() -> &'static Regex {
    static CAMEL: OnceLock<Regex> = OnceLock::new();
    CAMEL.get_or_init(|| Regex::new(r"([a-z])([A-Z])").expect("camel boundary regex"))
}

/// Derive the display title for the current page.
pub fn resolve(page: &dyn PageContext, config: &BreadcrumbConfig) -> String {
    if let Some(title) = page.marker_title(&config.title_element)
        && !title.is_empty()
    {
        tracing::trace!(message = "title.marker", title = %title);
        return title;
    }

    let url = page.url();
    let mut title = strip_extension(last_segment(url)).to_string();

    if let Some(pos) = title.find(QUERY_MARKER)
        && pos > 0
    {
        title.truncate(pos);
    }

    // An empty segment or a bare query string means there was no view in
    // the path (a landing page); the document title stands in.
    if title.is_empty() || title.starts_with(QUERY_MARKER) {
        title = page.document_title().to_string();
    }

    // Identifier segments (a GUID, or all digits when opted in) mark an
    // edit view; the parent segment names it better than a raw id.
    if is_guid(&title) || is_numeric_id(&title, config.collapse_numeric_ids) {
        title = parent_segment(url).to_string();
    }

    space_camel(&title)
}

/// Everything after the last `/`, or the whole string if there is none.
#[must_use]
pub fn last_segment(url: &str) -> &str {
    match url.rfind('/') {
        Some(i) => &url[i + 1..],
        None => url,
    }
}

/// Drop a trailing file extension (the last `.` and everything after it).
#[must_use]
pub fn strip_extension(segment: &str) -> &str {
    match segment.rfind('.') {
        Some(i) => &segment[..i],
        None => segment,
    }
}

/// Whether the string is a GUID (8-4-4-4-12 hex groups, braces optional).
#[must_use]
pub fn is_guid(s: &str) -> bool {
    guid_pattern().is_match(s)
}

/// Whether the string should be collapsed as a numeric identifier.
///
/// Only ever true when `collapse_numeric_ids` is enabled; the default
/// behavior never collapses digit segments (a path segment is always a
/// string, never a number value).
#[must_use]
pub fn is_numeric_id(s: &str, collapse_numeric_ids: bool) -> bool {
    collapse_numeric_ids && !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// The second-to-last `/`-delimited part of the URL, empty if there are
/// fewer than two parts.
#[must_use]
pub fn parent_segment(url: &str) -> &str {
    url.rsplit('/').nth(1).unwrap_or("")
}

/// Insert a space between a lowercase letter and a following uppercase
/// letter: `ProviderConfiguration` becomes `Provider Configuration`.
#[must_use]
pub fn space_camel(s: &str) -> String {
    camel_boundary().replace_all(s, "$1 $2").into_owned()
}
