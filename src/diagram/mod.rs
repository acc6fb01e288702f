//! Conversion between directory trees and their text diagrams.
//!
//! ```text
//! project/
//! ├── src/
//! │   └── main.rs
//! └── README.md
//! ```
//!
//! [`render`] walks a real directory and produces a diagram, [`parse`] reads
//! a (possibly hand-edited) diagram back into [`PathEntry`] values. Both
//! sides follow the grammar in [`glyphs`].

mod entry;
pub mod glyphs;
mod parse;
mod preview;
mod render;

pub use entry::{EntryKind, PathEntry, is_safe_segment};
pub use parse::{FormatError, ParsedDiagram, parse, parse_bytes};
pub use preview::{Palette, preview_lines, summary};
pub use render::{RenderError, RenderRequest, Selection, list_children, render};
