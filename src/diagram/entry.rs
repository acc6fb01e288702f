use std::path::PathBuf;

use derive_more::Display;

/// Whether an entry is a directory or a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
pub enum EntryKind {
    #[display("directory")]
    Directory,
    #[display("file")]
    File,
}

impl EntryKind {
    pub fn is_directory(self) -> bool {
        matches!(self, EntryKind::Directory)
    }

    pub fn from_is_directory(is_directory: bool) -> Self {
        if is_directory {
            EntryKind::Directory
        } else {
            EntryKind::File
        }
    }
}

/// A path relative to the diagram root, tagged with its kind.
///
/// Segments are ordered root-to-leaf and never contain a path separator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PathEntry {
    segments: Vec<String>,
    kind: EntryKind,
}

impl PathEntry {
    pub fn new(segments: Vec<String>, kind: EntryKind) -> Self {
        PathEntry { segments, kind }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn is_directory(&self) -> bool {
        self.kind.is_directory()
    }

    /// The entry's path joined with the platform separator.
    pub fn relative_path(&self) -> PathBuf {
        self.segments.iter().collect()
    }
}

/// Always uses `/`, independent of the platform.
impl std::fmt::Display for PathEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.segments.join("/"))
    }
}

/// A segment is safe when joining it onto a destination can neither escape
/// the destination nor introduce extra path components.
pub fn is_safe_segment(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\', '\0'])
}
