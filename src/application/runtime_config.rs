use std::path::PathBuf;

use crate::{cli::Cli, diagram::Palette};

/// Process-wide choices taken from the command line, fixed for the run.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub settings_path: Option<PathBuf>,
    pub settings_dir: PathBuf,
    pub palette: Palette,
}

impl From<&Cli> for RuntimeConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            settings_path: cli.config.clone(),
            settings_dir: PathBuf::from("."),
            palette: cli.color.palette(),
        }
    }
}
