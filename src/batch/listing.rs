//! Directory listing for batch selection

use std::io;
use std::path::{Path, PathBuf};

use log::{info, warn};
use walkdir::WalkDir;

use crate::errors::{ProfileError, ProfileResult};

/// List the regular files in `dir` whose name starts with `prefix`
///
/// Only the top level of `dir` is searched. The comparison is byte-exact and
/// case-sensitive. Matches are returned sorted by file name so the first
/// file of a batch does not depend on the order the filesystem lists
/// entries in. An entry that cannot be inspected (a dangling symlink, say)
/// is skipped when its name does not match, and otherwise kept so decoding
/// reports it by name.
///
/// # Returns
/// The matching paths, or `Directory` if `dir` cannot be read
pub fn matching_files(dir: &Path, prefix: &str) -> ProfileResult<Vec<PathBuf>> {
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    let mut matches = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => match err.path().filter(|_| err.depth() > 0) {
                Some(path) if !has_prefix(path, prefix) => {
                    skipping(path, dir);
                    continue;
                }
                Some(path) => {
                    warn!("Cannot inspect {}: {}", path.display(), err);
                    matches.push(path.to_path_buf());
                    continue;
                }
                None => {
                    return Err(ProfileError::Directory {
                        path: dir.to_path_buf(),
                        source: io::Error::from(err),
                    })
                }
            },
        };

        if !has_prefix(entry.path(), prefix) {
            skipping(entry.path(), dir);
            continue;
        }

        if !entry.file_type().is_file() {
            warn!("Skipping {} in {}: not a regular file", entry.file_name().to_string_lossy(), dir.display());
            continue;
        }

        matches.push(entry.into_path());
    }

    Ok(matches)
}

fn has_prefix(path: &Path, prefix: &str) -> bool {
    path.file_name()
        .is_some_and(|name| name.as_encoded_bytes().starts_with(prefix.as_bytes()))
}

fn skipping(path: &Path, dir: &Path) {
    let name = path.file_name().map(|name| name.to_string_lossy()).unwrap_or_default();
    info!("Skipping {} in {}", name, dir.display());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::TempDir;

    fn names(paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_prefix_match_is_case_sensitive_and_sorted() {
        let dir = TempDir::new().unwrap();
        for name in ["scan_2.png", "scan_10.png", "Scan_1.png", "other.png", "scan_1.png"] {
            File::create(dir.path().join(name)).unwrap();
        }

        let found = matching_files(dir.path(), "scan_").unwrap();
        assert_eq!(names(&found), vec!["scan_1.png", "scan_10.png", "scan_2.png"]);
    }

    #[test]
    fn test_directories_are_skipped() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("scan_dir")).unwrap();
        File::create(dir.path().join("scan_a.png")).unwrap();

        let found = matching_files(dir.path(), "scan").unwrap();
        assert_eq!(names(&found), vec!["scan_a.png"]);
    }

    #[test]
    fn test_no_matches_is_empty() {
        let dir = TempDir::new().unwrap();
        File::create(dir.path().join("a.png")).unwrap();
        assert!(matching_files(dir.path(), "b").unwrap().is_empty());
    }

    #[test]
    fn test_missing_directory() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        let err = matching_files(&missing, "x").unwrap_err();
        assert!(matches!(err, ProfileError::Directory { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_without_prefix_is_skipped() {
        let dir = TempDir::new().unwrap();
        File::create(dir.path().join("scan_a.png")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("gone"), dir.path().join("zzz_other")).unwrap();

        let found = matching_files(dir.path(), "scan").unwrap();
        assert_eq!(names(&found), vec!["scan_a.png"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_with_prefix_is_kept_for_decoding() {
        let dir = TempDir::new().unwrap();
        File::create(dir.path().join("scan_a.png")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("gone"), dir.path().join("scan_b.png")).unwrap();

        let found = matching_files(dir.path(), "scan").unwrap();
        assert_eq!(names(&found), vec!["scan_a.png", "scan_b.png"]);
    }
}
