#![forbid(unsafe_code)]

//! Breadcrumb widget.
//!
//! Renders an optional home crumb followed by the most recent trail
//! entries, each a hyperlinked span, with a width-toggle reveal animation.
//! [`BreadcrumbWidget`] wires the per-page-view sequence (resolve title,
//! update trail, persist, render) for one bound container.

use std::time::Duration;

use ahash::AHashMap;
use unicode_width::UnicodeWidthStr;

use crumbtrail_core::animation::{self, Animation, Reveal};
use crumbtrail_core::buffer::Buffer;
use crumbtrail_core::geometry::Rect;
use crumbtrail_core::page::PageContext;
use crumbtrail_core::style::Style;

use crate::config::BreadcrumbConfig;
use crate::store::{self, TrailStore};
use crate::title;
use crate::trail::{CrumbEntry, Trail};
use crate::{StatefulWidget, Widget, draw_linked_span, draw_text_span};

/// Separator drawn between crumbs (the carat).
pub const DEFAULT_SEPARATOR: &str = " › ";

/// Duration of the width-toggle reveal.
const REVEAL_DURATION: Duration = Duration::from_millis(400);

// ---------------------------------------------------------------------------
// Class styles
// ---------------------------------------------------------------------------

/// Style-class registry: maps class names to styles, the way a stylesheet
/// would. The home crumb's `home_class` is resolved through this table.
#[derive(Debug, Clone)]
pub struct ClassStyles {
    styles: AHashMap<String, Style>,
}

impl Default for ClassStyles {
    fn default() -> Self {
        let mut styles = AHashMap::new();
        styles.insert("homeBreadcrumb".to_string(), Style::new().bold());
        Self { styles }
    }
}

impl ClassStyles {
    /// Create the default registry (the stock home class is bold).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or replace a class style.
    pub fn set(&mut self, class: impl Into<String>, style: Style) {
        self.styles.insert(class.into(), style);
    }

    /// Resolve a class name; unregistered classes are plain.
    #[must_use]
    pub fn get(&self, class: &str) -> Style {
        self.styles.get(class).copied().unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// Reveal state
// ---------------------------------------------------------------------------

/// Animation state for a [`Breadcrumb`].
///
/// Holds the reveal progress; tick it between frames. The reveal is
/// cosmetic and fire-and-forget: whether it ever finishes has no effect on
/// the trail.
#[derive(Debug, Clone)]
pub struct BreadcrumbState {
    reveal: Reveal,
    animate: bool,
}

impl BreadcrumbState {
    /// Create state for a configuration: its `animate_crumbs` flag and
    /// `easing` name (unknown names fall back to `swing`).
    #[must_use]
    pub fn new(config: &BreadcrumbConfig) -> Self {
        let easing = match config.easing.as_deref() {
            Some(name) => animation::by_name(name).unwrap_or_else(|| {
                tracing::debug!(message = "breadcrumb.easing.unknown", name);
                animation::swing
            }),
            None => animation::swing,
        };
        Self {
            reveal: Reveal::new(REVEAL_DURATION).easing(easing),
            animate: config.animate_crumbs,
        }
    }

    /// Restart the reveal from collapsed.
    pub fn restart(&mut self) {
        self.reveal.reset();
    }

    /// Advance the reveal by a frame delta. No-op when animation is off.
    pub fn tick(&mut self, dt: Duration) {
        if self.animate {
            self.reveal.tick(dt);
        }
    }

    /// Jump straight to the fully revealed end state.
    pub fn finish(&mut self) {
        self.reveal.tick(Duration::MAX);
    }

    /// Whether the crumbs are fully revealed.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        !self.animate || self.reveal.is_complete()
    }

    /// Fraction of each crumb's width to expose, in `[0, 1]`.
    fn fraction(&self) -> f32 {
        if self.animate {
            self.reveal.value().clamp(0.0, 1.0)
        } else {
            1.0
        }
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

struct CrumbItem<'a> {
    url: &'a str,
    text: &'a str,
    class: Option<&'a str>,
}

/// Breadcrumb widget: renders a trail window into a buffer row.
#[derive(Debug, Clone)]
pub struct Breadcrumb<'a> {
    trail: &'a Trail,
    config: &'a BreadcrumbConfig,
    style: Style,
    separator: &'a str,
    classes: ClassStyles,
}

impl<'a> Breadcrumb<'a> {
    /// Create a breadcrumb over a trail and configuration.
    #[must_use]
    pub fn new(trail: &'a Trail, config: &'a BreadcrumbConfig) -> Self {
        Self {
            trail,
            config,
            style: Style::default(),
            separator: DEFAULT_SEPARATOR,
            classes: ClassStyles::default(),
        }
    }

    /// Set the style for crumbs and separators.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set the separator drawn between crumbs.
    #[must_use]
    pub fn separator(mut self, separator: &'a str) -> Self {
        self.separator = separator;
        self
    }

    /// Replace the style-class registry.
    #[must_use]
    pub fn class_styles(mut self, classes: ClassStyles) -> Self {
        self.classes = classes;
        self
    }

    /// The items to draw: optional home first, then the trail window.
    fn items(&self) -> Vec<CrumbItem<'_>> {
        let mut items = Vec::new();
        if self.config.show_home {
            items.push(CrumbItem {
                url: &self.config.home_url,
                text: &self.config.home_text,
                class: Some(&self.config.home_class),
            });
        }
        for entry in self.trail.window(self.config.levels) {
            items.push(CrumbItem {
                url: &entry.url,
                text: &entry.title,
                class: None,
            });
        }
        items
    }
}

impl StatefulWidget for Breadcrumb<'_> {
    type State = BreadcrumbState;

    fn render(&self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if area.is_empty() {
            return;
        }
        let items = self.items();
        if items.is_empty() {
            return;
        }

        // Width toggle: every crumb exposes only the leading `fraction` of
        // its cells, and later crumbs shift left accordingly.
        let fraction = state.fraction();
        let last = items.len() - 1;
        let y = area.top();
        let max_x = area.right();
        let mut x = area.left();

        for (i, item) in items.iter().enumerate() {
            let sep_width = if i < last { self.separator.width() } else { 0 };
            let full = item.text.width() + sep_width;
            let visible = if fraction >= 1.0 {
                full
            } else {
                ((fraction * full as f32).round() as usize).min(full)
            };
            if visible == 0 {
                continue;
            }

            let budget = x
                .saturating_add(u16::try_from(visible).unwrap_or(u16::MAX))
                .min(max_x);
            let style = item.class.map_or(self.style, |class| self.classes.get(class));
            let link = if item.url.is_empty() {
                0
            } else {
                buf.register_link(item.url)
            };

            x = draw_linked_span(buf, x, y, item.text, style, link, budget);
            if i < last {
                x = draw_text_span(buf, x, y, self.separator, self.style, budget);
            }
            if x >= max_x {
                break;
            }
        }

        tracing::trace!(message = "breadcrumb.render", items = items.len(), fraction);
    }
}

impl Widget for Breadcrumb<'_> {
    /// Stateless render: the fully revealed end state.
    fn render(&self, area: Rect, buf: &mut Buffer) {
        let mut state = BreadcrumbState::new(self.config);
        state.finish();
        StatefulWidget::render(self, area, buf, &mut state);
    }
}

// ---------------------------------------------------------------------------
// Orchestrator
// ---------------------------------------------------------------------------

/// One breadcrumb binding: owns its configuration, the loaded trail, and
/// the reveal state for one target container.
#[derive(Debug, Clone)]
pub struct BreadcrumbWidget {
    config: BreadcrumbConfig,
    trail: Trail,
    state: BreadcrumbState,
}

impl BreadcrumbWidget {
    /// Bind a configuration to a container.
    #[must_use]
    pub fn new(config: BreadcrumbConfig) -> Self {
        let state = BreadcrumbState::new(&config);
        Self {
            config,
            trail: Trail::new(),
            state,
        }
    }

    /// The binding's configuration.
    #[must_use]
    pub fn config(&self) -> &BreadcrumbConfig {
        &self.config
    }

    /// The trail as of the last [`visit`](Self::visit).
    #[must_use]
    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    /// Record a page view: resolve the title, load the stored trail,
    /// append the crumb (a revisit of the last page is a no-op), persist,
    /// and restart the reveal.
    pub fn visit(&mut self, page: &dyn PageContext, store: &mut dyn TrailStore) {
        let crumb_title = title::resolve(page, &self.config);
        let mut trail = store::load_trail(store, &self.config.storage_key);
        let appended = trail.record(CrumbEntry::new(page.url(), crumb_title));
        store::save_trail(store, &self.config.storage_key, &trail);
        tracing::debug!(
            message = "breadcrumb.visit",
            url = page.url(),
            appended,
            len = trail.len()
        );
        self.trail = trail;
        self.state.restart();
    }

    /// Advance the reveal animation by a frame delta.
    pub fn tick(&mut self, dt: Duration) {
        self.state.tick(dt);
    }

    /// Whether the reveal has finished (always true with animation off).
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.state.is_settled()
    }

    /// A [`Breadcrumb`] over the current trail, for custom composition.
    #[must_use]
    pub fn widget(&self) -> Breadcrumb<'_> {
        Breadcrumb::new(&self.trail, &self.config)
    }

    /// Render the current trail window into the buffer.
    pub fn render(&mut self, area: Rect, buf: &mut Buffer) {
        let Self {
            config,
            trail,
            state,
        } = self;
        let widget = Breadcrumb::new(trail, config);
        StatefulWidget::render(&widget, area, buf, state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crumbtrail_core::style::StyleFlags;

    fn trail_of(urls: &[(&str, &str)]) -> Trail {
        let mut trail = Trail::new();
        for (url, title) in urls {
            trail.record(CrumbEntry::new(*url, *title));
        }
        trail
    }

    fn render_settled(trail: &Trail, config: &BreadcrumbConfig, width: u16) -> Buffer {
        let mut buf = Buffer::new(width, 1);
        Widget::render(
            &Breadcrumb::new(trail, config),
            Rect::from_size(width, 1),
            &mut buf,
        );
        buf
    }

    #[test]
    fn renders_last_levels_entries() {
        let trail = trail_of(&[
            ("https://site/0", "Zero"),
            ("https://site/1", "One"),
            ("https://site/2", "Two"),
            ("https://site/3", "Three"),
            ("https://site/4", "Four"),
        ]);
        let config = BreadcrumbConfig::new().levels(2);
        let buf = render_settled(&trail, &config, 40);
        assert_eq!(buf.row_text(0), "Three › Four");
    }

    #[test]
    fn short_trail_renders_from_start() {
        let trail = trail_of(&[("https://site/0", "Zero")]);
        let config = BreadcrumbConfig::new().levels(4);
        let buf = render_settled(&trail, &config, 40);
        assert_eq!(buf.row_text(0), "Zero");
    }

    #[test]
    fn home_is_always_first() {
        let trail = trail_of(&[("https://site/a", "Alpha")]);
        let config = BreadcrumbConfig::new().show_home(true).home_url("https://site/");
        let buf = render_settled(&trail, &config, 40);
        assert_eq!(buf.row_text(0), "Home › Alpha");
    }

    #[test]
    fn home_renders_even_with_empty_trail() {
        let trail = Trail::new();
        let config = BreadcrumbConfig::new().show_home(true);
        let buf = render_settled(&trail, &config, 40);
        assert_eq!(buf.row_text(0), "Home");
    }

    #[test]
    fn home_does_not_consume_a_level() {
        let trail = trail_of(&[
            ("https://site/a", "Alpha"),
            ("https://site/b", "Beta"),
        ]);
        let config = BreadcrumbConfig::new().levels(2).show_home(true);
        let buf = render_settled(&trail, &config, 40);
        assert_eq!(buf.row_text(0), "Home › Alpha › Beta");
    }

    #[test]
    fn home_style_comes_from_its_class() {
        let trail = Trail::new();
        let config = BreadcrumbConfig::new().show_home(true);
        let buf = render_settled(&trail, &config, 40);
        let style = buf.get(0, 0).map(|c| c.style).unwrap();
        assert!(style.attrs.contains(StyleFlags::BOLD));
    }

    #[test]
    fn crumb_cells_link_to_entry_urls() {
        let trail = trail_of(&[("https://site/Reports", "Reports")]);
        let config = BreadcrumbConfig::new();
        let buf = render_settled(&trail, &config, 40);
        let link = buf.get(0, 0).map(|c| c.link).unwrap();
        assert_eq!(buf.links().get(link), Some("https://site/Reports"));
    }

    #[test]
    fn empty_home_url_is_not_linked() {
        let trail = Trail::new();
        let config = BreadcrumbConfig::new().show_home(true);
        let buf = render_settled(&trail, &config, 40);
        assert_eq!(buf.get(0, 0).map(|c| c.link), Some(0));
    }

    #[test]
    fn levels_zero_renders_only_home() {
        let trail = trail_of(&[("https://site/a", "Alpha")]);
        let config = BreadcrumbConfig::new().levels(0).show_home(true);
        let buf = render_settled(&trail, &config, 40);
        assert_eq!(buf.row_text(0), "Home");
    }

    #[test]
    fn clips_at_area_edge() {
        let trail = trail_of(&[("https://site/a", "Alphabetical")]);
        let config = BreadcrumbConfig::new();
        let buf = render_settled(&trail, &config, 5);
        assert_eq!(buf.row_text(0), "Alpha");
    }

    // ---- reveal animation -------------------------------------------------

    #[test]
    fn collapsed_state_draws_nothing() {
        let trail = trail_of(&[("https://site/a", "Alpha")]);
        let config = BreadcrumbConfig::new().easing("linear");
        let mut state = BreadcrumbState::new(&config);
        let mut buf = Buffer::new(40, 1);
        StatefulWidget::render(
            &Breadcrumb::new(&trail, &config),
            Rect::from_size(40, 1),
            &mut buf,
            &mut state,
        );
        assert_eq!(buf.row_text(0), "");
        assert!(!state.is_settled());
    }

    #[test]
    fn midway_reveal_draws_partial_width() {
        let trail = trail_of(&[("https://site/a", "abcdefghij")]);
        let config = BreadcrumbConfig::new().easing("linear");
        let mut state = BreadcrumbState::new(&config);
        state.tick(REVEAL_DURATION / 2);
        let mut buf = Buffer::new(40, 1);
        StatefulWidget::render(
            &Breadcrumb::new(&trail, &config),
            Rect::from_size(40, 1),
            &mut buf,
            &mut state,
        );
        assert_eq!(buf.row_text(0), "abcde");
    }

    #[test]
    fn finished_reveal_draws_everything() {
        let trail = trail_of(&[("https://site/a", "Alpha")]);
        let config = BreadcrumbConfig::new().easing("linear");
        let mut state = BreadcrumbState::new(&config);
        state.tick(REVEAL_DURATION);
        let mut buf = Buffer::new(40, 1);
        StatefulWidget::render(
            &Breadcrumb::new(&trail, &config),
            Rect::from_size(40, 1),
            &mut buf,
            &mut state,
        );
        assert_eq!(buf.row_text(0), "Alpha");
        assert!(state.is_settled());
    }

    #[test]
    fn animation_off_reveals_immediately() {
        let trail = trail_of(&[("https://site/a", "Alpha")]);
        let config = BreadcrumbConfig::new().animate_crumbs(false);
        let mut state = BreadcrumbState::new(&config);
        let mut buf = Buffer::new(40, 1);
        StatefulWidget::render(
            &Breadcrumb::new(&trail, &config),
            Rect::from_size(40, 1),
            &mut buf,
            &mut state,
        );
        assert_eq!(buf.row_text(0), "Alpha");
        assert!(state.is_settled());
    }

    #[test]
    fn unknown_easing_falls_back_to_swing() {
        let config = BreadcrumbConfig::new().easing("wobble");
        let mut state = BreadcrumbState::new(&config);
        state.finish();
        assert!(state.is_settled());
        assert!((state.fraction() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn custom_class_style_applies() {
        let trail = Trail::new();
        let config = BreadcrumbConfig::new().show_home(true).home_class("navRoot");
        let mut classes = ClassStyles::new();
        classes.set("navRoot", Style::new().underline());
        let mut buf = Buffer::new(40, 1);
        Widget::render(
            &Breadcrumb::new(&trail, &config).class_styles(classes),
            Rect::from_size(40, 1),
            &mut buf,
        );
        let style = buf.get(0, 0).map(|c| c.style).unwrap();
        assert!(style.attrs.contains(StyleFlags::UNDERLINE));
        assert!(!style.attrs.contains(StyleFlags::BOLD));
    }
}
