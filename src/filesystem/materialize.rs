use std::{
    fs, io,
    path::{Path, PathBuf},
};

use snafu::prelude::*;
use tracing::{debug, info};

use crate::{
    diagram::{EntryKind, PathEntry},
    ext::BestEffortPathExt,
    filesystem::tree::{FilesystemNode, PlanConflict},
    templates::TemplateRegistry,
};

/// Where the diagram's root line ends up relative to the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RootPlacement {
    /// The destination is the root; the root line's name is ignored.
    #[default]
    Flatten,
    /// Entries go into `destination/<root name>`. Diagrams without a root
    /// line fall back to the destination itself.
    Nested,
}

impl RootPlacement {
    pub fn from_nest_root(nest_root: bool) -> Self {
        if nest_root {
            RootPlacement::Nested
        } else {
            RootPlacement::Flatten
        }
    }

    pub fn target(self, destination: &Path, root: Option<&str>) -> PathBuf {
        match (self, root) {
            (RootPlacement::Nested, Some(root)) => destination.join(root),
            _ => destination.to_path_buf(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaterializeReport {
    pub directories: usize,
    pub files: usize,
}

/// Creates directories and template-seeded files from path entries.
pub struct Materializer<'a> {
    templates: &'a TemplateRegistry,
}

impl<'a> Materializer<'a> {
    pub fn new(templates: &'a TemplateRegistry) -> Self {
        Materializer { templates }
    }

    /// Creates every entry below `destination`, in order.
    ///
    /// Conflicting entries are rejected before anything is written. After
    /// that, the first I/O failure stops the batch and entries created so far
    /// stay on disk. Running the same batch again is safe: directories are
    /// reused and files are rewritten with their template content.
    pub fn materialize(
        &self,
        destination: &Path,
        entries: &[PathEntry],
    ) -> Result<MaterializeReport, MaterializeError> {
        let plan = FilesystemNode::try_from_entries(entries).context(ConflictSnafu)?;
        let (planned_directories, planned_files) = plan.count();
        debug!(
            "Planned {} directories and {} files below {}",
            planned_directories,
            planned_files,
            destination.display()
        );

        fs::create_dir_all(destination).context(CreateDestinationSnafu {
            path: destination.to_path_buf(),
        })?;

        let mut report = MaterializeReport::default();
        for entry in entries {
            let path = destination.join(entry.relative_path());
            match entry.kind() {
                EntryKind::Directory => {
                    fs::create_dir_all(&path).context(CreateDirectorySnafu { path: path.clone() })?;
                    debug!("Created directory {}", path.display());
                    report.directories += 1;
                }
                EntryKind::File => {
                    if let Some(parent) = path.parent() {
                        fs::create_dir_all(parent).context(CreateDirectorySnafu {
                            path: parent.to_path_buf(),
                        })?;
                    }
                    let content = self.templates.content_for(&path);
                    fs::write(&path, content).context(WriteFileSnafu { path: path.clone() })?;
                    debug!("Created file {} ({} bytes)", path.display(), content.len());
                    report.files += 1;
                }
            }
        }

        info!(
            "Created {} directories and {} files in {}",
            report.directories,
            report.files,
            destination.best_effort_path_display()
        );
        Ok(report)
    }
}

#[derive(Debug, Snafu)]
pub enum MaterializeError {
    #[snafu(display("The diagram cannot be built"))]
    ConflictError { source: PlanConflict },
    #[snafu(display("Failed to create the destination {}", path.best_effort_path_display()))]
    CreateDestinationError { path: PathBuf, source: io::Error },
    #[snafu(display("Failed to create directory {}", path.best_effort_path_display()))]
    CreateDirectoryError { path: PathBuf, source: io::Error },
    #[snafu(display("Failed to write file {}", path.best_effort_path_display()))]
    WriteFileError { path: PathBuf, source: io::Error },
}

impl MaterializeError {
    /// The path the batch stopped at, if the failure came from the disk.
    pub fn path(&self) -> Option<&Path> {
        match self {
            MaterializeError::ConflictError { .. } => None,
            MaterializeError::CreateDestinationError { path, .. }
            | MaterializeError::CreateDirectoryError { path, .. }
            | MaterializeError::WriteFileError { path, .. } => Some(path),
        }
    }

    pub fn is_access_denied(&self) -> bool {
        match self {
            MaterializeError::ConflictError { .. } => false,
            MaterializeError::CreateDestinationError { source, .. }
            | MaterializeError::CreateDirectoryError { source, .. }
            | MaterializeError::WriteFileError { source, .. } => {
                source.kind() == io::ErrorKind::PermissionDenied
            }
        }
    }
}
