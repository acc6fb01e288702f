use hashlink::LinkedHashMap;
use snafu::Snafu;
use tracing::debug;

use crate::presets::builtin::BUILTIN_PRESETS;

/// Named starting diagrams, kept in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetCatalog {
    presets: LinkedHashMap<String, String>,
}

impl Default for PresetCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PresetCatalog {
    pub fn empty() -> Self {
        PresetCatalog {
            presets: LinkedHashMap::new(),
        }
    }

    pub fn builtin() -> Self {
        let mut catalog = Self::empty();
        for (label, diagram) in BUILTIN_PRESETS {
            catalog.insert(label, diagram);
        }
        catalog
    }

    /// Adds a preset, replacing the diagram of an existing one with the same
    /// label.
    pub fn insert(&mut self, label: impl Into<String>, diagram: impl Into<String>) {
        let label = label.into();
        if self.presets.insert(label.clone(), diagram.into()).is_some() {
            debug!("Replaced preset '{}'", label);
        }
    }

    /// Looks a preset up by its exact label, its label ignoring case, or its
    /// slug (`"Top-Level Structure"` → `top-level-structure`).
    pub fn get(&self, name: &str) -> Result<&str, PresetLookupError> {
        if let Some(diagram) = self.presets.get(name) {
            return Ok(diagram);
        }

        let wanted_slug = slugify(name);
        self.presets
            .iter()
            .find(|(label, _)| label.eq_ignore_ascii_case(name) || slugify(label) == wanted_slug)
            .map(|(_, diagram)| diagram.as_str())
            .ok_or_else(|| PresetLookupError::UnknownPreset {
                name: name.to_string(),
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.presets
            .iter()
            .map(|(label, diagram)| (label.as_str(), diagram.as_str()))
    }

}

/// Lowercase ASCII alphanumerics separated by single dashes.
pub fn slugify(label: &str) -> String {
    label
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

#[derive(Debug, Snafu)]
pub enum PresetLookupError {
    #[snafu(display("Unknown preset '{}', see `filetree presets list`", name))]
    UnknownPreset { name: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagram::parse;
    use rstest::*;

    #[test]
    fn test_builtin_catalog_keeps_menu_order() {
        let catalog = PresetCatalog::builtin();

        let labels = catalog.iter().map(|(label, _)| label).collect::<Vec<_>>();

        assert_eq!(catalog.iter().count(), 11);
        assert_eq!(labels.first(), Some(&"Top-Level Structure"));
        assert_eq!(labels.last(), Some(&"Security-Focused or Encryption Library"));
    }

    #[test]
    fn test_every_builtin_preset_is_a_valid_diagram() {
        for (label, diagram) in PresetCatalog::builtin().iter() {
            let parsed = parse(diagram);
            assert!(parsed.is_clean(), "preset '{label}' has issues: {:?}", parsed.issues);
            assert!(parsed.root.is_some(), "preset '{label}' has no root line");
            assert!(!parsed.entries.is_empty(), "preset '{label}' is empty");
        }
    }

    #[rstest]
    #[case("Testing Directory (tests/)")]
    #[case("testing directory (TESTS/)")]
    #[case("testing-directory-tests")]
    fn test_lookup_by_label_case_or_slug(#[case] name: &str) {
        let catalog = PresetCatalog::builtin();

        let diagram = catalog.get(name).expect("Preset should exist");

        assert!(diagram.starts_with("project_name/\n└── tests/"));
    }

    #[test]
    fn test_unknown_preset_is_an_error() {
        let catalog = PresetCatalog::builtin();

        let result = catalog.get("no such preset");

        assert!(matches!(result, Err(PresetLookupError::UnknownPreset { .. })));
    }

    #[test]
    fn test_insert_overrides_and_appends() {
        let mut catalog = PresetCatalog::builtin();
        catalog.insert("Top-Level Structure", "mine/\n└── a.txt");
        catalog.insert("Rust Binary", "bin/\n└── src/");

        assert_eq!(catalog.iter().count(), 12);
        assert_eq!(catalog.get("top-level-structure").ok(), Some("mine/\n└── a.txt"));
        assert_eq!(catalog.get("rust-binary").ok(), Some("bin/\n└── src/"));
    }

    #[rstest]
    #[case("Top-Level Structure", "top-level-structure")]
    #[case("Other Directories (docs/, scripts/, data/)", "other-directories-docs-scripts-data")]
    #[case("Minimal Microservice / API-Only Structure", "minimal-microservice-api-only-structure")]
    #[case("  ", "")]
    fn test_slugify(#[case] label: &str, #[case] expected: &str) {
        assert_eq!(slugify(label), expected);
    }
}
