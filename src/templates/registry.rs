use std::{collections::HashMap, path::Path};

use tracing::debug;

/// Default contents for newly created files, looked up by the final file
/// extension. Lookups are case-sensitive; unknown extensions get an empty
/// file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRegistry {
    by_extension: HashMap<String, String>,
}

const BUILTIN_TEMPLATES: [(&str, &str); 9] = [
    (
        "py",
        "\"\"\"Auto-generated Python file\"\"\"\n\nif __name__ == \"__main__\":\n    pass\n",
    ),
    ("json", "{}\n"),
    ("md", "# New Document\n"),
    ("rst", "# New RST Document\n"),
    ("sh", "#!/bin/bash\n\n# Auto-generated shell script\n"),
    ("yml", "# Auto-generated YAML file\n"),
    ("qss", "/* Auto-generated QSS file */\n"),
    ("txt", "# Auto-generated text file\n"),
    ("ipynb", "# Auto-generated Jupyter Notebook\n"),
];

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TemplateRegistry {
    pub fn empty() -> Self {
        TemplateRegistry {
            by_extension: HashMap::new(),
        }
    }

    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        for (extension, content) in BUILTIN_TEMPLATES {
            registry.insert(extension, content);
        }
        registry
    }

    /// Registers `content` for `extension`, given with or without the
    /// leading dot. Replaces any previous template for it.
    pub fn insert(&mut self, extension: &str, content: impl Into<String>) {
        let extension = extension.trim_start_matches('.').to_string();
        if let Some(_previous) = self.by_extension.insert(extension.clone(), content.into()) {
            debug!("Replaced template for '.{}'", extension);
        }
    }

    pub fn content_for(&self, path: &Path) -> &str {
        path.extension()
            .and_then(|extension| extension.to_str())
            .and_then(|extension| self.by_extension.get(extension))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn extensions(&self) -> Vec<&str> {
        let mut extensions = self.by_extension.keys().map(String::as_str).collect::<Vec<_>>();
        extensions.sort_unstable();
        extensions
    }
}
