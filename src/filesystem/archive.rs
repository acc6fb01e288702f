use std::{
    collections::HashSet,
    fs::File,
    io,
    path::{Path, PathBuf},
};

use snafu::prelude::*;
use tempfile::TempDir;
use tracing::{debug, info};
use zip::{CompressionMethod, ZipWriter, result::ZipError, write::SimpleFileOptions};

use crate::{
    diagram::{EntryKind, PathEntry},
    ext::BestEffortPathExt,
    filesystem::materialize::{MaterializeError, Materializer, RootPlacement},
    templates::TemplateRegistry,
};

/// Packs a diagram into a zip archive by materializing it into a staging
/// directory first, so the archive holds exactly what `build` would create.
pub struct ZipExporter<'a> {
    templates: &'a TemplateRegistry,
    placement: RootPlacement,
}

impl<'a> ZipExporter<'a> {
    pub fn new(templates: &'a TemplateRegistry, placement: RootPlacement) -> Self {
        ZipExporter {
            templates,
            placement,
        }
    }

    /// Writes the archive and returns the number of entries in it.
    pub fn export(
        &self,
        root: Option<&str>,
        entries: &[PathEntry],
        archive_path: &Path,
    ) -> Result<usize, ArchiveError> {
        let staging = TempDir::new().context(StagingSnafu)?;
        let prefix = match (self.placement, root) {
            (RootPlacement::Nested, Some(root)) => Some(root),
            _ => None,
        };
        let target = self.placement.target(staging.path(), root);
        debug!("Staging archive contents in {}", target.display());
        Materializer::new(self.templates)
            .materialize(&target, entries)
            .context(MaterializeSnafu)?;

        let file = File::create(archive_path).context(CreateArchiveSnafu {
            path: archive_path.to_path_buf(),
        })?;
        let mut writer = ZipWriter::new(file);
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        let mut written = HashSet::new();

        if let Some(prefix) = prefix {
            writer
                .add_directory(format!("{prefix}/"), options)
                .context(ZipSnafu {
                    path: archive_path.to_path_buf(),
                })?;
            written.insert(prefix.to_string());
        }

        for entry in entries {
            let name = match prefix {
                Some(prefix) => format!("{prefix}/{entry}"),
                None => entry.to_string(),
            };
            if !written.insert(name.clone()) {
                continue;
            }

            match entry.kind() {
                EntryKind::Directory => {
                    writer
                        .add_directory(format!("{name}/"), options)
                        .context(ZipSnafu {
                            path: archive_path.to_path_buf(),
                        })?;
                }
                EntryKind::File => {
                    let staged_path = target.join(entry.relative_path());
                    let mut staged = File::open(&staged_path).context(ReadStagedSnafu {
                        path: staged_path.clone(),
                    })?;
                    writer.start_file(name, options).context(ZipSnafu {
                        path: archive_path.to_path_buf(),
                    })?;
                    io::copy(&mut staged, &mut writer).context(WriteArchiveSnafu {
                        path: archive_path.to_path_buf(),
                    })?;
                }
            }
        }

        writer.finish().context(ZipSnafu {
            path: archive_path.to_path_buf(),
        })?;
        info!(
            "Wrote {} entries to {}",
            written.len(),
            archive_path.best_effort_path_display()
        );
        Ok(written.len())
    }
}

#[derive(Debug, Snafu)]
pub enum ArchiveError {
    #[snafu(display("Failed to create a staging directory"))]
    StagingError { source: io::Error },
    #[snafu(display("Failed to stage the tree for archiving"))]
    MaterializeError { source: MaterializeError },
    #[snafu(display("Failed to create archive {}", path.best_effort_path_display()))]
    CreateArchiveError { path: PathBuf, source: io::Error },
    #[snafu(display("Failed to read staged file {}", path.best_effort_path_display()))]
    ReadStagedError { path: PathBuf, source: io::Error },
    #[snafu(display("Failed to write to archive {}", path.best_effort_path_display()))]
    WriteArchiveError { path: PathBuf, source: io::Error },
    #[snafu(display("Failed to assemble archive {}", path.best_effort_path_display()))]
    ZipError { path: PathBuf, source: ZipError },
}
