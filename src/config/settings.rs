use hashlink::LinkedHashMap;
use saphyr::{LoadableYamlNode, Scalar, Yaml};
use snafu::prelude::*;
use std::{
    borrow::Cow,
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;

use crate::{ext::BestEffortPathExt, presets::PresetCatalog, templates::TemplateRegistry};

const SETTINGS_FILE_NAME: &str = "filetree.yaml";

fn get_settings_file_path(dir: &Path) -> PathBuf {
    dir.join(SETTINGS_FILE_NAME)
}

/// User additions to the built-in templates and presets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub templates: Vec<(String, String)>,
    pub presets: Vec<(String, String)>,
}

impl Settings {
    /// Reads `explicit` when given, which then has to exist. Otherwise
    /// `filetree.yaml` in `dir` is used if present.
    pub fn read(explicit: Option<&Path>, dir: &Path) -> Result<Self, SettingsError> {
        if let Some(path) = explicit {
            return Self::from_path(path);
        }

        let path = get_settings_file_path(dir);
        if path.is_file() {
            Self::from_path(&path)
        } else {
            debug!("No settings file at {}, using defaults", path.best_effort_path_display());
            Ok(Self::default())
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, SettingsError> {
        debug!("Reading settings file: {}", path.best_effort_path_display());
        let contents = fs::read_to_string(path).context(ReadSnafu {
            file_path: path.best_effort_path_display(),
        })?;
        debug!("Successfully read settings file: {} bytes", contents.len());
        contents.as_str().try_into()
    }

    pub fn template_registry(&self) -> TemplateRegistry {
        let mut registry = TemplateRegistry::builtin();
        for (extension, content) in &self.templates {
            registry.insert(extension, content.clone());
        }
        registry
    }

    pub fn preset_catalog(&self) -> PresetCatalog {
        let mut catalog = PresetCatalog::builtin();
        for (label, diagram) in &self.presets {
            catalog.insert(label.clone(), diagram.clone());
        }
        catalog
    }

    fn parse_string_map(
        top_level: &LinkedHashMap<Yaml, Yaml>,
        section: &'static str,
    ) -> Result<Vec<(String, String)>, SettingsError> {
        let Some(value) = top_level.get(&Yaml::Value(Scalar::String(Cow::Borrowed(section)))) else {
            return Ok(Vec::new());
        };

        let pairs = value
            .as_mapping()
            .context(SectionNotMapSnafu { section })?
            .iter()
            .filter_map(|(key, value)| match (key.as_str(), value.as_str()) {
                (Some(key), Some(value)) => Some((key.to_string(), value.to_string())),
                _ => {
                    debug!("Skipping invalid {} entry: {:?}", section, key);
                    None
                }
            })
            .collect();

        Ok(pairs)
    }
}

impl TryFrom<&str> for Settings {
    type Error = SettingsError;

    fn try_from(contents: &str) -> Result<Self, Self::Error> {
        let documents = Yaml::load_from_str(contents).context(ParseSnafu)?;
        let Some(document) = documents.first() else {
            return Ok(Self::default());
        };

        let top_level = document.as_mapping().context(TopLevelNotMapSnafu)?;

        Ok(Settings {
            templates: Self::parse_string_map(top_level, "templates")?,
            presets: Self::parse_string_map(top_level, "presets")?,
        })
    }
}

#[derive(Debug, Snafu)]
pub enum SettingsError {
    #[snafu(display("Failed to read the settings file: {}", file_path))]
    ReadError {
        file_path: String,
        source: std::io::Error,
    },
    #[snafu(display("Failed to parse the settings file"))]
    ParseError { source: saphyr::ScanError },
    #[snafu(display("Top level of the settings file should be a map"))]
    TopLevelNotMap,
    #[snafu(display("The '{}' section should be a map", section))]
    SectionNotMap { section: &'static str },
}
