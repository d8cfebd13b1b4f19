//! Filesystem scanning helpers for the index build.

use std::path::{Path, PathBuf};

/// Collect every file under `root`, recursively.
///
/// Files in a directory are emitted before the contents of its
/// subdirectories; within a directory, entries keep whatever order
/// `read_dir` yields. Traversal order is therefore filesystem-dependent
/// and callers must not rely on a stable ordering. Missing or unreadable
/// directories contribute no entries.
pub fn iter_dist_files(root: &Path) -> Vec<PathBuf> {
    let mut result = Vec::new();
    walk_dir(root, &mut result);
    result
}

fn walk_dir(dir: &Path, result: &mut Vec<PathBuf>) {
    let entries = match std::fs::read_dir(dir) {
        Ok(e) => e,
        Err(_) => return,
    };

    let mut dirs = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            dirs.push(path);
        } else {
            result.push(path);
        }
    }

    for dir_path in dirs {
        walk_dir(&dir_path, result);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_directory_yields_nothing() {
        let files = iter_dist_files(Path::new("/nonexistent/dist/dir"));
        assert!(files.is_empty());
    }

    #[test]
    fn test_recursive_walk_finds_nested_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.whl"), b"").unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        std::fs::write(dir.path().join("sub").join("b.whl"), b"").unwrap();

        let files = iter_dist_files(dir.path());
        assert_eq!(files.len(), 2);
        assert!(files.iter().any(|p| p.ends_with("a.whl")));
        assert!(files.iter().any(|p| p.ends_with("sub/b.whl")));
    }

    #[test]
    fn test_files_come_before_subdirectory_contents() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        std::fs::write(dir.path().join("sub").join("inner.whl"), b"").unwrap();
        std::fs::write(dir.path().join("top.whl"), b"").unwrap();

        let files = iter_dist_files(dir.path());
        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("top.whl"));
        assert!(files[1].ends_with("sub/inner.whl"));
    }
}
