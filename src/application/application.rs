use std::{
    io::{self, Write},
    path::PathBuf,
};

use snafu::Snafu;
use snafu::prelude::*;
use tracing::debug;

use crate::application::RuntimeConfig;
use crate::cli::{Cli, Command, PresetsCommand};
use crate::config::{Settings, SettingsError};
use crate::diagram::{FormatError, RenderError, RenderRequest, Selection};
use crate::ext::BestEffortPathExt;
use crate::filesystem::{ArchiveError, MaterializeError, RootPlacement};
use crate::presets::{PresetCatalog, PresetFileError, PresetLookupError};
use crate::templates::TemplateRegistry;

pub struct Application {
    pub(super) config: RuntimeConfig,
    pub(super) templates: TemplateRegistry,
    pub(super) presets: PresetCatalog,
}

impl Application {
    pub fn run(cli: Cli) -> Result<(), ApplicationError> {
        let application = Self::new(RuntimeConfig::from(&cli))?;
        let stdout = io::stdout();
        let mut out = stdout.lock();
        application.execute(cli.command, &mut out)
    }

    pub fn new(config: RuntimeConfig) -> Result<Self, ApplicationError> {
        let settings = Settings::read(config.settings_path.as_deref(), &config.settings_dir)
            .context(SettingsSnafu)?;
        debug!("Loaded settings: {:?}", settings);

        let templates = settings.template_registry();
        let presets = settings.preset_catalog();
        debug!(
            "{} presets available, templates for {:?}",
            presets.iter().count(),
            templates.extensions()
        );

        Ok(Application {
            config,
            templates,
            presets,
        })
    }

    pub fn execute(&self, command: Command, out: &mut impl Write) -> Result<(), ApplicationError> {
        match command {
            Command::List { directory } => self.list(&directory, out),
            Command::Render {
                directory,
                include,
                output,
            } => {
                let selection = if include.is_empty() {
                    Selection::All
                } else {
                    Selection::Names(include)
                };
                let request = RenderRequest::new(directory, selection);
                self.render(&request, output.as_deref(), out)
            }
            Command::Preview { source } => self.preview(&source, out),
            Command::Build {
                source,
                dest,
                nest_root,
            } => self.build(&source, &dest, RootPlacement::from_nest_root(nest_root), out),
            Command::Export {
                source,
                output,
                nest_root,
            } => self.export(&source, &output, RootPlacement::from_nest_root(nest_root), out),
            Command::Presets { action } => match action {
                PresetsCommand::List => self.list_presets(out),
                PresetsCommand::Show { name } => self.show_preset(&name, out),
                PresetsCommand::Save { name, file } => self.save_preset(&name, &file, out),
            },
        }
    }
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(super)))]
pub enum ApplicationError {
    #[snafu(display("Critical failure encountered while loading settings"))]
    SettingsError { source: SettingsError },
    #[snafu(display("Failed to read the directory tree"))]
    RenderError { source: RenderError },
    #[snafu(display("Failed to load the diagram"))]
    DiagramSourceError { source: PresetFileError },
    #[snafu(display("Failed to read the diagram from standard input"))]
    StdinError { source: io::Error },
    #[snafu(display("Failed to find the preset"))]
    PresetError { source: PresetLookupError },
    #[snafu(display("Invalid tree format"))]
    InvalidDiagramError { source: FormatError },
    #[snafu(display("Failed to build the structure in {}", destination.best_effort_path_display()))]
    BuildError {
        destination: PathBuf,
        source: MaterializeError,
    },
    #[snafu(display("Failed to export the zip archive"))]
    ExportError { source: ArchiveError },
    #[snafu(display("Failed to save the diagram"))]
    SaveError { source: PresetFileError },
    #[snafu(display("Failed to write output"))]
    OutputError { source: io::Error },
}
