//! Recursive discovery of markdown note files.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Collect every `.md` file under `root`, sorted for a deterministic
/// processing order. Unreadable entries are skipped with a warning.
pub fn markdown_files(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                tracing::warn!("skipping unreadable entry: {err}");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "md"))
        .map(|entry| entry.into_path())
        .collect();
    files.sort();

    if files.is_empty() {
        tracing::warn!("no markdown files found in folder: {}", root.display());
    }
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn finds_nested_markdown_files_sorted() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("b.md"), "").unwrap();
        fs::write(dir.path().join("a.md"), "").unwrap();
        fs::write(dir.path().join("nested/c.md"), "").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();

        let files = markdown_files(dir.path());
        let names: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.md", "b.md", "nested/c.md"]);
    }

    #[test]
    fn empty_folder_yields_nothing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(markdown_files(dir.path()).is_empty());
    }
}
