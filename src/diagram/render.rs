use std::{
    collections::HashSet,
    fs, io,
    path::{Path, PathBuf},
};

use snafu::prelude::*;
use tracing::{debug, warn};

use crate::{
    diagram::{EntryKind, glyphs, is_safe_segment},
    ext::BestEffortPathExt,
};

/// An immediate child of a directory as seen by the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildEntry {
    pub name: String,
    pub kind: EntryKind,
}

impl ChildEntry {
    pub fn new(name: impl Into<String>, kind: EntryKind) -> Self {
        ChildEntry {
            name: name.into(),
            kind,
        }
    }

    /// The name as it appears in a diagram, `/`-suffixed for directories.
    pub fn display_name(&self) -> String {
        match self.kind {
            EntryKind::Directory => format!("{}{}", self.name, glyphs::DIRECTORY_SUFFIX),
            EntryKind::File => self.name.clone(),
        }
    }
}

/// Source of directory listings for the renderer.
pub trait DirectoryLister {
    /// Lists the files and directories directly inside `dir`, in any order.
    fn list(&self, dir: &Path) -> io::Result<Vec<ChildEntry>>;
}

impl<F> DirectoryLister for F
where
    F: Fn(&Path) -> io::Result<Vec<ChildEntry>>,
{
    fn list(&self, dir: &Path) -> io::Result<Vec<ChildEntry>> {
        self(dir)
    }
}

/// Lists the real filesystem. Symbolic links and special files are skipped
/// without being followed.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsLister;

impl DirectoryLister for OsLister {
    fn list(&self, dir: &Path) -> io::Result<Vec<ChildEntry>> {
        let mut children = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let file_type = entry.file_type()?;
            let kind = if file_type.is_dir() {
                EntryKind::Directory
            } else if file_type.is_file() {
                EntryKind::File
            } else {
                debug!("Skipping non-regular entry {}", entry.path().display());
                continue;
            };
            children.push(ChildEntry::new(
                entry.file_name().to_string_lossy().into_owned(),
                kind,
            ));
        }
        Ok(children)
    }
}

/// Which of the root's immediate children take part in a render.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    All,
    /// Matched case-insensitively, ignoring a trailing `/`.
    Names(Vec<String>),
}

impl Selection {
    fn apply(&self, children: Vec<ChildEntry>) -> Vec<ChildEntry> {
        let Selection::Names(names) = self else {
            return children;
        };

        let wanted = names
            .iter()
            .map(|name| normalize_selection_name(name))
            .collect::<HashSet<_>>();
        let selected = children
            .into_iter()
            .filter(|child| wanted.contains(&child.name.to_lowercase()))
            .collect::<Vec<_>>();

        let found = selected
            .iter()
            .map(|child| child.name.to_lowercase())
            .collect::<HashSet<_>>();
        for name in names {
            if !found.contains(&normalize_selection_name(name)) {
                warn!("Selected item '{}' does not exist in the root directory", name);
            }
        }

        selected
    }
}

fn normalize_selection_name(name: &str) -> String {
    name.trim_end_matches(glyphs::DIRECTORY_SUFFIX).to_lowercase()
}

/// Everything a single render needs to know.
#[derive(Debug, Clone)]
pub struct RenderRequest {
    root: PathBuf,
    selection: Selection,
}

impl RenderRequest {
    pub fn new(root: impl Into<PathBuf>, selection: Selection) -> Self {
        RenderRequest {
            root: root.into(),
            selection,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }
}

/// Renders `request` from the real filesystem.
pub fn render(request: &RenderRequest) -> Result<String, RenderError> {
    TreeRenderer::new(OsLister).render(request)
}

/// Sorted immediate children of `dir`, as offered for selection.
pub fn list_children(dir: &Path) -> Result<Vec<ChildEntry>, RenderError> {
    TreeRenderer::new(OsLister).list_children(dir)
}

/// Directories first, then case-insensitive name. Exact name breaks ties.
pub fn sort_children(children: &mut [ChildEntry]) {
    children.sort_by_cached_key(|child| (child.kind, child.name.to_lowercase(), child.name.clone()));
}

pub struct TreeRenderer<L> {
    lister: L,
}

/// A child that still has to be written out, with the indent its line
/// starts with.
struct Pending {
    path: PathBuf,
    child: ChildEntry,
    indent: String,
    is_last: bool,
}

impl<L: DirectoryLister> TreeRenderer<L> {
    pub fn new(lister: L) -> Self {
        TreeRenderer { lister }
    }

    pub fn list_children(&self, dir: &Path) -> Result<Vec<ChildEntry>, RenderError> {
        ensure!(
            dir.is_dir(),
            RootNotDirectorySnafu {
                path: dir.to_path_buf()
            }
        );
        self.list_sorted(dir).context(ListRootSnafu {
            path: dir.to_path_buf(),
        })
    }

    pub fn render(&self, request: &RenderRequest) -> Result<String, RenderError> {
        let root = request.root();
        let children = self.list_children(root)?;
        let selected = request.selection().apply(children);
        debug!(
            "Rendering {} selected entries of {}",
            selected.len(),
            root.best_effort_path_display()
        );

        let mut lines = vec![format!(
            "{}{}",
            root_display_name(root),
            glyphs::DIRECTORY_SUFFIX
        )];
        let mut pending = Vec::new();
        push_children(&mut pending, root, "", selected);

        while let Some(item) = pending.pop() {
            lines.push(format!(
                "{}{}{}",
                item.indent,
                glyphs::connector(item.is_last),
                item.child.display_name()
            ));

            if !item.child.kind.is_directory() {
                continue;
            }

            let child_indent = format!("{}{}", item.indent, glyphs::descendant_cell(item.is_last));
            match self.list_sorted(&item.path) {
                Ok(grandchildren) => {
                    push_children(&mut pending, &item.path, &child_indent, grandchildren)
                }
                Err(err) => {
                    warn!(
                        "Failed to list {}: {}",
                        item.path.best_effort_path_display(),
                        err
                    );
                    lines.push(format!(
                        "{}{}{}",
                        child_indent,
                        glyphs::LAST_CHILD,
                        placeholder_for(&err)
                    ));
                }
            }
        }

        Ok(lines.join("\n"))
    }

    fn list_sorted(&self, dir: &Path) -> io::Result<Vec<ChildEntry>> {
        let mut children = self.lister.list(dir)?;
        sort_children(&mut children);
        Ok(children)
    }
}

/// Pushes in reverse so that popping yields the sorted order.
fn push_children(pending: &mut Vec<Pending>, dir: &Path, indent: &str, children: Vec<ChildEntry>) {
    let count = children.len();
    for (index, child) in children.into_iter().enumerate().rev() {
        pending.push(Pending {
            path: dir.join(&child.name),
            child,
            indent: indent.to_string(),
            is_last: index + 1 == count,
        });
    }
}

fn placeholder_for(err: &io::Error) -> String {
    match err.kind() {
        io::ErrorKind::PermissionDenied => glyphs::PERMISSION_DENIED_PLACEHOLDER.to_string(),
        _ => glyphs::error_placeholder(err),
    }
}

/// Root line label for directories without a name of their own, e.g. `/`.
const UNNAMED_ROOT: &str = "root";

fn root_display_name(root: &Path) -> String {
    root.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .or_else(|| {
            root.canonicalize()
                .ok()
                .and_then(|canonical| canonical.file_name().map(|n| n.to_string_lossy().into_owned()))
        })
        .filter(|name| is_safe_segment(name))
        .unwrap_or_else(|| UNNAMED_ROOT.to_string())
}

#[derive(Debug, Snafu)]
pub enum RenderError {
    #[snafu(display("{} is not a directory", path.best_effort_path_display()))]
    RootNotDirectory { path: PathBuf },
    #[snafu(display("Failed to list the contents of {}", path.best_effort_path_display()))]
    ListRoot { path: PathBuf, source: io::Error },
}
