#![forbid(unsafe_code)]

//! Core: render target, animation, and page-context primitives.
//!
//! # Role in crumbtrail
//! `crumbtrail-core` owns everything the breadcrumb widget draws *into* and
//! animates *with*: the cell [`buffer::Buffer`] (with its OSC 8
//! [`link_registry::LinkRegistry`]), [`style::Style`] primitives, the
//! [`animation`] module (easing curves and the width-toggle
//! [`animation::Reveal`]), and the [`page::PageContext`] collaborator that
//! abstracts the current page (URL, document title, title-marker lookup).
//!
//! # How it fits in the system
//! The widget layer (`crumbtrail-widgets`) renders into a `Buffer`; the
//! [`ansi`] presenter turns a finished buffer into terminal output. Nothing
//! in this crate knows about trails, titles, or persistence.

pub mod animation;
pub mod ansi;
pub mod buffer;
pub mod geometry;
pub mod link_registry;
pub mod page;
pub mod style;

pub use buffer::{Buffer, Cell};
pub use geometry::Rect;
pub use style::{Color, Style, StyleFlags};
