use crate::utils::file::is_path_excluded;
use anyhow::{Context, Result};
use glob::Pattern;
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

pub struct WalkResult {
    pub files: Vec<PathBuf>,
    pub excluded_count: usize,
}

/// Collect every regular file below `path`.
///
/// Files of a directory come before the contents of its subdirectories;
/// no other ordering is applied. Symlinked directories are not followed.
/// An unreadable root is an error, unreadable subdirectories are logged and
/// skipped.
pub fn walk<P: AsRef<Path>>(
    path: P,
    max_depth: usize,
    exclude_patterns: &[Pattern],
) -> Result<WalkResult> {
    let path = path.as_ref();

    if is_path_excluded(path, exclude_patterns) {
        return Ok(WalkResult {
            files: Vec::new(),
            excluded_count: 1,
        });
    }

    let mut files = Vec::new();
    let mut dirs = Vec::new();
    let mut excluded_count = 0;

    let entries = fs::read_dir(path).with_context(|| format!("read directory {}", path.display()))?;
    for entry in entries.filter_map(Result::ok) {
        let entry_path = entry.path();

        if is_path_excluded(&entry_path, exclude_patterns) {
            excluded_count += 1;
            continue;
        }

        match entry.file_type() {
            Ok(file_type) if file_type.is_dir() => dirs.push(entry_path),
            Ok(_) if entry_path.is_file() => files.push(entry_path),
            _ => continue,
        }
    }

    if max_depth > 0 {
        for dir in dirs {
            match walk(&dir, max_depth - 1, exclude_patterns) {
                Ok(mut result) => {
                    files.append(&mut result.files);
                    excluded_count += result.excluded_count;
                }
                Err(e) => warn!("Skipping directory {}: {:#}", dir.display(), e),
            }
        }
    } else {
        for dir in &dirs {
            debug!("Not descending into {}: depth limit reached", dir.display());
        }
    }

    Ok(WalkResult {
        files,
        excluded_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::file::compile_exclude_patterns;
    use tempfile::TempDir;

    fn create_tree() -> TempDir {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path();
        fs::create_dir_all(root.join("cpukit/score")).expect("Failed to create dirs");
        fs::create_dir_all(root.join(".git/objects")).expect("Failed to create dirs");
        fs::write(root.join("README"), "readme\n").expect("Failed to write file");
        fs::write(root.join("cpukit/init.c"), "int x;\n").expect("Failed to write file");
        fs::write(root.join("cpukit/score/thread.c"), "int y;\n").expect("Failed to write file");
        fs::write(root.join(".git/objects/ab"), "blob\n").expect("Failed to write file");
        temp_dir
    }

    fn relative_names(root: &Path, files: &[PathBuf]) -> Vec<String> {
        let mut names: Vec<String> = files
            .iter()
            .map(|f| {
                f.strip_prefix(root)
                    .expect("walked file should be under root")
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_walk_finds_every_file() {
        let temp_dir = create_tree();

        let result = walk(temp_dir.path(), 50, &[]).expect("Walk should succeed");

        assert_eq!(
            relative_names(temp_dir.path(), &result.files),
            vec![".git/objects/ab", "README", "cpukit/init.c", "cpukit/score/thread.c"]
        );
        assert_eq!(result.excluded_count, 0);
    }

    #[test]
    fn test_walk_lists_directory_files_before_subdirectories() {
        let temp_dir = create_tree();

        let result = walk(temp_dir.path().join("cpukit"), 50, &[]).expect("Walk should succeed");

        assert_eq!(result.files[0], temp_dir.path().join("cpukit/init.c"));
    }

    #[test]
    fn test_walk_honors_exclusions_and_depth() {
        let temp_dir = create_tree();
        let patterns = compile_exclude_patterns(&[".git".to_string()]);

        let result = walk(temp_dir.path(), 1, &patterns).expect("Walk should succeed");

        assert_eq!(
            relative_names(temp_dir.path(), &result.files),
            vec!["README", "cpukit/init.c"]
        );
        assert_eq!(result.excluded_count, 1);
    }

    #[test]
    fn test_walk_depth_zero_stays_in_root() {
        let temp_dir = create_tree();

        let result = walk(temp_dir.path(), 0, &[]).expect("Walk should succeed");

        assert_eq!(relative_names(temp_dir.path(), &result.files), vec!["README"]);
        assert_eq!(result.excluded_count, 0);
    }

    #[test]
    fn test_walk_fails_on_missing_root() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");

        assert!(walk(temp_dir.path().join("missing"), 50, &[]).is_err());
    }
}
