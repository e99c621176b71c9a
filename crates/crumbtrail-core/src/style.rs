#![forbid(unsafe_code)]

//! Style primitives applied to buffer cells.

use bitflags::bitflags;

/// A terminal color: the classic named palette or 24-bit RGB.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    /// 24-bit true color.
    Rgb(u8, u8, u8),
}

bitflags! {
    /// Text attribute flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct StyleFlags: u8 {
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
    }
}

/// A cell style: optional foreground/background plus attribute flags.
///
/// `None` for a color means "leave the terminal default".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub attrs: StyleFlags,
}

impl Style {
    /// Create an empty style.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            attrs: StyleFlags::empty(),
        }
    }

    /// Set the foreground color.
    #[must_use]
    pub const fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    /// Set the background color.
    #[must_use]
    pub const fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    /// Add the bold attribute.
    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.attrs = self.attrs.union(StyleFlags::BOLD);
        self
    }

    /// Add the dim attribute.
    #[must_use]
    pub const fn dim(mut self) -> Self {
        self.attrs = self.attrs.union(StyleFlags::DIM);
        self
    }

    /// Add the italic attribute.
    #[must_use]
    pub const fn italic(mut self) -> Self {
        self.attrs = self.attrs.union(StyleFlags::ITALIC);
        self
    }

    /// Add the underline attribute.
    #[must_use]
    pub const fn underline(mut self) -> Self {
        self.attrs = self.attrs.union(StyleFlags::UNDERLINE);
        self
    }

    /// Check whether the style changes nothing.
    #[must_use]
    pub const fn is_plain(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attrs.is_empty()
    }
}
