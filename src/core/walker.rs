//! Directory walker
//!
//! walkdir traversal with name-based subtree pruning: any directory whose
//! base name is in the exclusion set is removed from the traversal before
//! descent, so excluded subtrees are never entered. Matching is on the base
//! name only, at any depth. The walk root itself is never pruned.

use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Files discovered by a walk, plus any traversal diagnostics.
#[derive(Debug, Default)]
pub struct WalkResult {
    /// File paths in the order the filesystem listed them (not sorted)
    pub files: Vec<PathBuf>,

    /// Unreadable directories and other traversal errors, skipped over
    pub warnings: Vec<String>,
}

fn is_pruned(entry: &DirEntry, exclude: &[String]) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| exclude.iter().any(|e| e == name))
}

/// Walk the tree under `root`, pruning excluded directories before descent.
/// Traversal errors (typically permission failures) are collected as
/// warnings rather than aborting the walk.
pub fn walk_files(root: &Path, exclude: &[String]) -> WalkResult {
    let mut result = WalkResult::default();

    let walker = WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| !is_pruned(e, exclude));

    for entry in walker {
        match entry {
            Ok(e) if e.file_type().is_file() => result.files.push(e.into_path()),
            Ok(_) => {}
            Err(e) => result.warnings.push(e.to_string()),
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "").unwrap();
    }

    fn names(result: &WalkResult) -> Vec<String> {
        let mut names: Vec<String> = result
            .files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_walk_empty_dir() {
        let temp = tempdir().unwrap();
        let result = walk_files(temp.path(), &[]);
        assert!(result.files.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_walk_collects_files_recursively() {
        let temp = tempdir().unwrap();
        touch(&temp.path().join("a.cs"));
        touch(&temp.path().join("sub/b.cs"));
        touch(&temp.path().join("sub/deeper/c.txt"));

        let result = walk_files(temp.path(), &[]);
        assert_eq!(names(&result), vec!["a.cs", "b.cs", "c.txt"]);
    }

    #[test]
    fn test_excluded_directory_is_pruned() {
        let temp = tempdir().unwrap();
        touch(&temp.path().join("keep.cs"));
        touch(&temp.path().join("styles/drop.cs"));

        let result = walk_files(temp.path(), &["styles".to_string()]);
        assert_eq!(names(&result), vec!["keep.cs"]);
    }

    #[test]
    fn test_exclusion_applies_at_any_depth() {
        let temp = tempdir().unwrap();
        touch(&temp.path().join("a/b/styles/d.cs"));
        touch(&temp.path().join("a/b/e.cs"));

        let result = walk_files(temp.path(), &["styles".to_string()]);
        assert_eq!(names(&result), vec!["e.cs"]);
    }

    #[test]
    fn test_exclusion_matches_base_name_not_path() {
        let temp = tempdir().unwrap();
        // A file named like an excluded directory is still visited
        touch(&temp.path().join("styles"));
        touch(&temp.path().join("sub/styles/x.cs"));

        let result = walk_files(temp.path(), &["styles".to_string()]);
        assert_eq!(names(&result), vec!["styles"]);
    }

    #[test]
    fn test_root_is_never_pruned() {
        let temp = tempdir().unwrap();
        let root = temp.path().join("styles");
        touch(&root.join("a.cs"));

        let result = walk_files(&root, &["styles".to_string()]);
        assert_eq!(names(&result), vec!["a.cs"]);
    }

    #[test]
    fn test_hidden_files_are_visited() {
        let temp = tempdir().unwrap();
        touch(&temp.path().join(".hidden/a.cs"));

        let result = walk_files(temp.path(), &[]);
        assert_eq!(names(&result), vec!["a.cs"]);
    }
}
