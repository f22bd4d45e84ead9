use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Recursively list every regular file under `root`.
///
/// Directories are not included and the order is unspecified. A missing
/// root, or entries that cannot be read, contribute nothing.
pub fn list_files(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .collect()
}
