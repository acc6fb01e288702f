use std::path::{Path, PathBuf};

use clap::Args;

/// Where a command reads its diagram from.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagramSource {
    /// Diagram file to read; `-` or nothing reads standard input
    pub diagram: Option<PathBuf>,
    /// Use a preset from the catalog instead of a file
    #[clap(long, short, conflicts_with = "diagram")]
    pub preset: Option<String>,
}

impl DiagramSource {
    /// The file to read, or `None` for standard input.
    pub fn file(&self) -> Option<&Path> {
        self.diagram
            .as_deref()
            .filter(|path| *path != Path::new("-"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dash_means_stdin() {
        let source = DiagramSource {
            diagram: Some(PathBuf::from("-")),
            preset: None,
        };

        assert_eq!(source.file(), None);
        assert_eq!(DiagramSource::default().file(), None);
    }

    #[test]
    fn test_path_is_a_file() {
        let source = DiagramSource {
            diagram: Some(PathBuf::from("layout.tree")),
            preset: None,
        };

        assert_eq!(source.file(), Some(Path::new("layout.tree")));
    }
}
