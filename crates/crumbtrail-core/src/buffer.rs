#![forbid(unsafe_code)]

//! Cell grid render target.
//!
//! Widgets draw into a [`Buffer`]; the [`crate::ansi`] presenter turns a
//! finished buffer into terminal output. The buffer owns its
//! [`LinkRegistry`] so cells can carry compact link ids.

use crate::link_registry::LinkRegistry;
use crate::style::Style;

/// A single buffer cell: character, style, and optional link id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: Style,
    /// OSC 8 link id, 0 for "no link".
    pub link: u32,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: Style::default(),
            link: 0,
        }
    }
}

impl Cell {
    /// Create a cell from a character with default style and no link.
    #[must_use]
    pub fn new(ch: char) -> Self {
        Self {
            ch,
            ..Self::default()
        }
    }

    /// Set the style.
    #[must_use]
    pub const fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set the link id.
    #[must_use]
    pub const fn with_link(mut self, link: u32) -> Self {
        self.link = link;
        self
    }
}

/// A rectangular grid of cells.
#[derive(Debug, Clone, Default)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
    links: LinkRegistry,
}

impl Buffer {
    /// Create a buffer filled with blank cells.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![Cell::default(); size],
            links: LinkRegistry::new(),
        }
    }

    /// Buffer width.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Buffer height.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Convert (x, y) to linear index.
    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Get the cell at (x, y).
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Set the cell at (x, y). Out-of-bounds writes are ignored.
    #[inline]
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Reset all cells to blanks and drop registered links.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
        self.links.clear();
    }

    /// Register a link URL, returning its id for use in cells.
    pub fn register_link(&mut self, url: &str) -> u32 {
        self.links.register(url)
    }

    /// The buffer's link registry.
    #[inline]
    pub fn links(&self) -> &LinkRegistry {
        &self.links
    }

    /// Plain text of a row with trailing blanks trimmed.
    ///
    /// Test and debugging helper; styles and links are ignored.
    #[must_use]
    pub fn row_text(&self, y: u16) -> String {
        let mut text: String = (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|cell| cell.ch)
            .collect();
        text.truncate(text.trim_end().len());
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Color, Style};

    #[test]
    fn new_buffer_is_blank() {
        let buf = Buffer::new(4, 2);
        assert_eq!(buf.get(0, 0), Some(&Cell::default()));
        assert_eq!(buf.row_text(0), "");
        assert_eq!(buf.row_text(1), "");
    }

    #[test]
    fn set_and_get_roundtrip() {
        let mut buf = Buffer::new(4, 2);
        let cell = Cell::new('x').with_style(Style::new().fg(Color::Red)).with_link(3);
        buf.set(2, 1, cell);
        assert_eq!(buf.get(2, 1), Some(&cell));
    }

    #[test]
    fn out_of_bounds_ignored() {
        let mut buf = Buffer::new(4, 2);
        buf.set(4, 0, Cell::new('x'));
        buf.set(0, 2, Cell::new('x'));
        assert_eq!(buf.get(4, 0), None);
        assert_eq!(buf.get(0, 2), None);
        assert_eq!(buf.row_text(0), "");
    }

    #[test]
    fn row_text_trims_trailing_blanks() {
        let mut buf = Buffer::new(8, 1);
        for (i, ch) in "hi".chars().enumerate() {
            buf.set(i as u16, 0, Cell::new(ch));
        }
        assert_eq!(buf.row_text(0), "hi");
    }

    #[test]
    fn clear_resets_cells_and_links() {
        let mut buf = Buffer::new(4, 1);
        buf.set(0, 0, Cell::new('x'));
        let id = buf.register_link("https://site/a");
        assert!(buf.links().contains(id));
        buf.clear();
        assert_eq!(buf.row_text(0), "");
        assert!(buf.links().is_empty());
    }
}
