use std::collections::HashMap;

use snafu::{Snafu, ensure};

use crate::diagram::{EntryKind, PathEntry, is_safe_segment};

/// In-memory tree of everything a batch of entries will create. Building it
/// before touching the disk catches entries that cannot coexist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilesystemNode {
    File,
    Directory {
        children: HashMap<String, FilesystemNode>,
    },
}

impl FilesystemNode {
    pub fn root() -> Self {
        FilesystemNode::Directory {
            children: HashMap::new(),
        }
    }

    pub fn kind(&self) -> EntryKind {
        match self {
            FilesystemNode::File => EntryKind::File,
            FilesystemNode::Directory { .. } => EntryKind::Directory,
        }
    }

    pub fn try_from_entries<'a>(
        entries: impl IntoIterator<Item = &'a PathEntry>,
    ) -> Result<Self, PlanConflict> {
        entries
            .into_iter()
            .try_fold(Self::root(), |mut root, entry| {
                root.try_insert_entry(entry)?;
                Ok(root)
            })
    }

    /// Inserts `entry`, creating missing parents as directories. Inserting an
    /// entry that already exists with the same kind is a no-op.
    pub fn try_insert_entry(&mut self, entry: &PathEntry) -> Result<(), PlanConflict> {
        ensure!(!entry.segments().is_empty(), EmptyEntrySnafu);

        let mut current = self;
        let last_index = entry.segments().len() - 1;

        for (index, segment) in entry.segments().iter().enumerate() {
            ensure!(
                is_safe_segment(segment),
                UnsafeSegmentSnafu {
                    path: entry.to_string(),
                    segment: segment.clone(),
                }
            );

            let FilesystemNode::Directory { children } = current else {
                return FileAsParentSnafu {
                    path: entry.to_string(),
                    parent: entry.segments()[..index].join("/"),
                }
                .fail();
            };

            if index == last_index {
                match children.get(segment) {
                    Some(existing) => ensure!(
                        existing.kind() == entry.kind(),
                        KindMismatchSnafu {
                            path: entry.to_string(),
                            existing: existing.kind(),
                            requested: entry.kind(),
                        }
                    ),
                    None => {
                        let node = match entry.kind() {
                            EntryKind::Directory => Self::root(),
                            EntryKind::File => FilesystemNode::File,
                        };
                        children.insert(segment.clone(), node);
                    }
                }
                return Ok(());
            }

            current = children
                .entry(segment.clone())
                .or_insert_with(Self::root);
        }

        Ok(())
    }

    /// Number of directories and files below this node.
    pub fn count(&self) -> (usize, usize) {
        let mut directories = 0;
        let mut files = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            if let FilesystemNode::Directory { children } = node {
                for child in children.values() {
                    match child {
                        FilesystemNode::File => files += 1,
                        FilesystemNode::Directory { .. } => directories += 1,
                    }
                    pending.push(child);
                }
            }
        }
        (directories, files)
    }
}

#[derive(Debug, Snafu)]
pub enum PlanConflict {
    #[snafu(display("Cannot create an entry with an empty path"))]
    EmptyEntry,
    #[snafu(display("'{}' contains the unsafe name '{}'", path, segment))]
    UnsafeSegment { path: String, segment: String },
    #[snafu(display("Cannot create '{}' because '{}' is a file", path, parent))]
    FileAsParent { path: String, parent: String },
    #[snafu(display("'{}' is declared both as a {} and as a {}", path, existing, requested))]
    KindMismatch {
        path: String,
        existing: EntryKind,
        requested: EntryKind,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(path: &str) -> PathEntry {
        PathEntry::new(path.split('/').map(str::to_string).collect(), EntryKind::File)
    }

    fn dir(path: &str) -> PathEntry {
        PathEntry::new(
            path.split('/').map(str::to_string).collect(),
            EntryKind::Directory,
        )
    }

    #[test]
    fn test_entries_build_a_tree_with_implicit_parents() {
        let entries = vec![dir("src"), file("src/main.rs"), file("docs/guide/intro.md")];

        let tree = FilesystemNode::try_from_entries(&entries).expect("Failed to plan");

        // src, docs, docs/guide
        assert_eq!(tree.count(), (3, 2));
    }

    #[test]
    fn test_duplicates_with_the_same_kind_are_allowed() {
        let entries = vec![dir("a"), dir("a"), file("a/b.txt"), file("a/b.txt")];

        let tree = FilesystemNode::try_from_entries(&entries).expect("Failed to plan");

        assert_eq!(tree.count(), (1, 1));
    }

    #[test]
    fn test_file_cannot_be_a_parent() {
        let entries = vec![file("a"), file("a/b.txt")];

        let result = FilesystemNode::try_from_entries(&entries);

        match result {
            Err(PlanConflict::FileAsParent { path, parent }) => {
                assert_eq!(path, "a/b.txt");
                assert_eq!(parent, "a");
            }
            other => panic!("Expected FileAsParent, got {other:?}"),
        }
    }

    #[test]
    fn test_same_path_cannot_be_file_and_directory() {
        let result = FilesystemNode::try_from_entries(&[dir("data"), file("data")]);

        assert!(matches!(
            result,
            Err(PlanConflict::KindMismatch {
                existing: EntryKind::Directory,
                requested: EntryKind::File,
                ..
            })
        ));
    }

    #[test]
    fn test_implicit_parent_conflicts_with_later_file() {
        let result = FilesystemNode::try_from_entries(&[file("a/b.txt"), file("a")]);

        assert!(matches!(result, Err(PlanConflict::KindMismatch { .. })));
    }

    #[test]
    fn test_unsafe_segments_are_rejected() {
        let traversal = PathEntry::new(
            vec!["..".to_string(), "etc".to_string()],
            EntryKind::Directory,
        );

        let result = FilesystemNode::try_from_entries(&[traversal]);

        assert!(matches!(result, Err(PlanConflict::UnsafeSegment { .. })));
    }

    #[test]
    fn test_empty_entries_are_rejected() {
        let empty = PathEntry::new(Vec::new(), EntryKind::File);

        let result = FilesystemNode::root().try_insert_entry(&empty);

        assert!(matches!(result, Err(PlanConflict::EmptyEntry)));
    }

    #[test]
    fn test_conflict_display() {
        let error = FilesystemNode::try_from_entries(&[file("a"), file("a/b.txt")])
            .expect_err("Plan should conflict");

        assert_eq!(error.to_string(), "Cannot create 'a/b.txt' because 'a' is a file");
    }
}
