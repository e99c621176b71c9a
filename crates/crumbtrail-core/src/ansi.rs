#![forbid(unsafe_code)]

//! State-tracked ANSI emission.
//!
//! Turns a finished [`Buffer`] into terminal output: SGR sequences are
//! emitted only where the style actually changes, and link runs are wrapped
//! in OSC 8 open/close pairs resolved through the buffer's link registry.
//! Each row ends with a style reset, a closed link, and a newline.

use std::fmt::Write;

use crate::buffer::Buffer;
use crate::style::{Color, Style, StyleFlags};

const SGR_RESET: &str = "\x1b[0m";
const OSC8_CLOSE: &str = "\x1b]8;;\x1b\\";

/// Render the buffer as a string of ANSI escape sequences.
#[must_use]
pub fn present(buf: &Buffer) -> String {
    let mut out = String::new();
    for y in 0..buf.height() {
        let mut style = Style::default();
        let mut link = 0u32;
        for x in 0..buf.width() {
            let Some(cell) = buf.get(x, y) else { continue };
            if cell.link != link {
                if link != 0 {
                    out.push_str(OSC8_CLOSE);
                }
                if cell.link != 0
                    && let Some(url) = buf.links().get(cell.link)
                {
                    let _ = write!(out, "\x1b]8;;{url}\x1b\\");
                }
                link = cell.link;
            }
            if cell.style != style {
                push_sgr(&mut out, cell.style);
                style = cell.style;
            }
            out.push(cell.ch);
        }
        if link != 0 {
            out.push_str(OSC8_CLOSE);
        }
        if !style.is_plain() {
            out.push_str(SGR_RESET);
        }
        out.push('\n');
    }
    out
}

/// Emit a full SGR sequence for a style (reset followed by active codes).
fn push_sgr(out: &mut String, style: Style) {
    out.push_str(SGR_RESET);
    if style.attrs.contains(StyleFlags::BOLD) {
        out.push_str("\x1b[1m");
    }
    if style.attrs.contains(StyleFlags::DIM) {
        out.push_str("\x1b[2m");
    }
    if style.attrs.contains(StyleFlags::ITALIC) {
        out.push_str("\x1b[3m");
    }
    if style.attrs.contains(StyleFlags::UNDERLINE) {
        out.push_str("\x1b[4m");
    }
    if let Some(fg) = style.fg {
        push_color(out, fg, 30);
    }
    if let Some(bg) = style.bg {
        push_color(out, bg, 40);
    }
}

fn push_color(out: &mut String, color: Color, base: u8) {
    let code = match color {
        Color::Black => 0,
        Color::Red => 1,
        Color::Green => 2,
        Color::Yellow => 3,
        Color::Blue => 4,
        Color::Magenta => 5,
        Color::Cyan => 6,
        Color::White => 7,
        Color::Rgb(r, g, b) => {
            let _ = write!(out, "\x1b[{};2;{r};{g};{b}m", base + 8);
            return;
        }
    };
    let _ = write!(out, "\x1b[{}m", base + code);
}
