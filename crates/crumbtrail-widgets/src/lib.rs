#![forbid(unsafe_code)]

//! Breadcrumb-trail widget for crumbtrail.
//!
//! Records each visited page as a `(url, title)` crumb in a persistent
//! trail and renders the most recent crumbs as a row of hyperlinked cells.
//! The pieces line up with one page view:
//!
//! 1. [`title::resolve`] derives a display title from the page context.
//! 2. [`Trail::record`] appends the crumb (revisits are suppressed).
//! 3. [`store::save_trail`] persists the trail under its storage key.
//! 4. [`Breadcrumb`] renders the windowed trail, optionally animating each
//!    crumb's width into view.
//!
//! [`BreadcrumbWidget`] bundles the four steps for one bound container.

pub mod breadcrumb;
pub mod config;
pub mod store;
pub mod title;
pub mod trail;

pub use breadcrumb::{Breadcrumb, BreadcrumbState, BreadcrumbWidget, ClassStyles};
pub use config::BreadcrumbConfig;
pub use store::{MemoryStore, TrailStore};
pub use trail::{CrumbEntry, Trail};

use crumbtrail_core::buffer::{Buffer, Cell};
use crumbtrail_core::geometry::Rect;
use crumbtrail_core::style::Style;
use unicode_width::UnicodeWidthChar;

/// A `Widget` is a renderable component.
///
/// Widgets render themselves into a `Buffer` within a given `Rect`.
pub trait Widget {
    /// Render the widget into the buffer at the given area.
    fn render(&self, area: Rect, buf: &mut Buffer);
}

/// A `StatefulWidget` is a widget that renders based on mutable state.
pub trait StatefulWidget {
    type State;
    /// Render the widget into the buffer with mutable state.
    fn render(&self, area: Rect, buf: &mut Buffer, state: &mut Self::State);
}

/// Draw a text span at (x, y), clipped at `max_x`. Returns the next x.
pub fn draw_text_span(buf: &mut Buffer, x: u16, y: u16, text: &str, style: Style, max_x: u16) -> u16 {
    draw_linked_span(buf, x, y, text, style, 0, max_x)
}

/// Draw a text span whose cells carry a link id. Returns the next x.
///
/// Characters that would cross `max_x` are not drawn at all; a wide char
/// occupies its width in cells, the continuation cell blank-filled with the
/// same style and link.
pub fn draw_linked_span(
    buf: &mut Buffer,
    mut x: u16,
    y: u16,
    text: &str,
    style: Style,
    link: u32,
    max_x: u16,
) -> u16 {
    for ch in text.chars() {
        let Some(w) = ch.width().map(|w| w as u16).filter(|w| *w > 0) else {
            continue;
        };
        if x.saturating_add(w) > max_x {
            break;
        }
        buf.set(x, y, Cell::new(ch).with_style(style).with_link(link));
        for fill in 1..w {
            buf.set(x + fill, y, Cell::new(' ').with_style(style).with_link(link));
        }
        x += w;
    }
    x
}

/// Apply a style to every cell in an area, keeping characters and links.
pub fn set_style_area(buf: &mut Buffer, area: Rect, style: Style) {
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.get(x, y).copied() {
                buf.set(x, y, cell.with_style(style));
            }
        }
    }
}
