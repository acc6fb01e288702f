use std::{
    fs, io,
    path::{Path, PathBuf},
};

use snafu::prelude::*;
use tracing::debug;

use crate::ext::BestEffortPathExt;

/// Extension given to saved diagrams when the user names none.
pub const PRESET_EXTENSION: &str = "tree";

pub fn with_default_extension(path: &Path) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(PRESET_EXTENSION)
    }
}

/// Raw diagram bytes; decoding is left to the lenient parser.
pub fn load_diagram(path: &Path) -> Result<Vec<u8>, PresetFileError> {
    debug!("Loading diagram from {}", path.best_effort_path_display());
    fs::read(path).context(ReadSnafu {
        path: path.to_path_buf(),
    })
}

/// Writes `diagram` with a trailing newline and returns the path written.
pub fn save_diagram(path: &Path, diagram: &str) -> Result<PathBuf, PresetFileError> {
    let path = with_default_extension(path);
    let mut contents = diagram.trim_end_matches(['\r', '\n']).to_string();
    contents.push('\n');
    fs::write(&path, contents).context(WriteSnafu { path: path.clone() })?;
    debug!("Saved diagram to {}", path.best_effort_path_display());
    Ok(path)
}

#[derive(Debug, Snafu)]
pub enum PresetFileError {
    #[snafu(display("Failed to read diagram file {}", path.best_effort_path_display()))]
    ReadError { path: PathBuf, source: io::Error },
    #[snafu(display("Failed to write diagram file {}", path.best_effort_path_display()))]
    WriteError { path: PathBuf, source: io::Error },
}
