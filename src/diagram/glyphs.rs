//! The textual grammar shared by the renderer and the parser.
//!
//! Every indent level is exactly [`CELL_WIDTH`] characters wide. A line is
//! the concatenation of its ancestors' continuation cells, a connector and
//! the entry name (with a trailing `/` for directories).

/// Number of characters per indentation level.
pub const CELL_WIDTH: usize = 4;

/// Connector for every child except the last one of its directory.
pub const MID_CHILD: &str = "├── ";
/// Connector for the last child of its directory.
pub const LAST_CHILD: &str = "└── ";
/// Indent cell below a mid-child: the parent still has siblings to come.
pub const CONTINUATION: &str = "│   ";
/// Indent cell below a last child.
pub const BLANK: &str = "    ";

pub const DIRECTORY_SUFFIX: char = '/';

/// Characters stripped from the start of a line before reading the name.
pub const INDENT_CHARS: [char; 5] = ['│', '├', '└', '─', ' '];

pub const PERMISSION_DENIED_PLACEHOLDER: &str = "<Permission Denied>";
const ERROR_PLACEHOLDER_PREFIX: &str = "<Error: ";

pub fn error_placeholder(message: impl std::fmt::Display) -> String {
    format!("{ERROR_PLACEHOLDER_PREFIX}{message}>")
}

/// Whether `name` is one of the lines the renderer writes in place of an
/// unreadable directory's children.
pub fn is_placeholder(name: &str) -> bool {
    name == PERMISSION_DENIED_PLACEHOLDER
        || (name.starts_with(ERROR_PLACEHOLDER_PREFIX) && name.ends_with('>'))
}

pub fn connector(is_last: bool) -> &'static str {
    if is_last { LAST_CHILD } else { MID_CHILD }
}

/// The cell that a child contributes to the indent of its own descendants.
pub fn descendant_cell(is_last: bool) -> &'static str {
    if is_last { BLANK } else { CONTINUATION }
}
