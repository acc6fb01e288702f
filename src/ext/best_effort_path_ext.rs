use std::path::{Component, Path, PathBuf};

/// Absolute, normalized form of `path` for messages. Symlinks are resolved
/// when the path exists; otherwise `.` and `..` are resolved lexically.
pub fn best_effort_path_display(path: &Path) -> String {
    if let Ok(canonical_path) = path.canonicalize() {
        return canonical_path.display().to_string();
    }

    let absolute_path = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    normalize_path(&absolute_path).display().to_string()
}

fn normalize_path(path: &Path) -> PathBuf {
    let mut components = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(components.last(), Some(Component::Normal(_))) {
                    components.pop();
                }
            }
            _ => components.push(component),
        }
    }

    components.iter().collect()
}

pub trait BestEffortPathExt {
    fn best_effort_path_display(&self) -> String;
}

impl<P: AsRef<Path> + ?Sized> BestEffortPathExt for P {
    fn best_effort_path_display(&self) -> String {
        best_effort_path_display(self.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_existing_path_is_canonicalized() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let dotted = temp_dir.path().join(".").join("x").join("..");

        let expected = temp_dir
            .path()
            .canonicalize()
            .expect("Failed to canonicalize")
            .display()
            .to_string();
        std::fs::create_dir(temp_dir.path().join("x")).expect("Failed to create directory");

        assert_eq!(dotted.best_effort_path_display(), expected);
    }

    #[cfg(unix)]
    #[test]
    fn test_missing_path_is_normalized_lexically() {
        let display = Path::new("/no/such/./place/../dir").best_effort_path_display();

        assert_eq!(display, "/no/such/dir");
    }

    #[cfg(unix)]
    #[test]
    fn test_parent_of_root_stays_at_root() {
        assert_eq!("/../../missing-dir".best_effort_path_display(), "/missing-dir");
    }

    #[test]
    fn test_relative_missing_path_becomes_absolute() {
        let display = "missing/child".best_effort_path_display();

        assert!(Path::new(&display).is_absolute(), "{display}");
        assert!(display.ends_with("child"));
    }
}
