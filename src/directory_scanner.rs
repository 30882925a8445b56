// SPDX-License-Identifier: MPL-2.0
//! Directory scanner module for the folder tree and the image list.
//!
//! Both listings skip hidden entries (names starting with `.`) and sort by
//! file name, case-insensitively, so the panes read the same on every
//! platform.

use crate::error::Result;
use crate::media::{FilterChoice, NameFilters};
use std::fs;
use std::path::{Path, PathBuf};

/// Lists the visible subdirectories of `directory`.
///
/// Symlinks to directories are followed. Entries that vanish or cannot be
/// inspected while scanning are skipped.
///
/// # Errors
///
/// Returns an error if `directory` itself cannot be read.
pub fn list_subdirectories(directory: &Path) -> Result<Vec<PathBuf>> {
    let mut folders = Vec::new();

    for entry in fs::read_dir(directory)? {
        let Ok(entry) = entry else { continue };
        let path = entry.path();

        if !is_hidden(&path) && path.is_dir() {
            folders.push(path);
        }
    }

    sort_by_name(&mut folders);
    Ok(folders)
}

/// Returns true if `directory` has at least one visible subdirectory.
///
/// Unreadable directories report `false`.
#[must_use]
pub fn has_subdirectories(directory: &Path) -> bool {
    fs::read_dir(directory)
        .map(|entries| {
            entries
                .flatten()
                .any(|entry| !is_hidden(&entry.path()) && entry.path().is_dir())
        })
        .unwrap_or(false)
}

/// Lists the visible files of `directory` whose name passes `choice`.
///
/// # Errors
///
/// Returns an error if `directory` cannot be read.
pub fn scan_images(
    directory: &Path,
    filters: &NameFilters,
    choice: &FilterChoice,
) -> Result<Vec<PathBuf>> {
    let mut images = Vec::new();

    for entry in fs::read_dir(directory)? {
        let Ok(entry) = entry else { continue };
        let path = entry.path();

        if is_hidden(&path) || !path.is_file() {
            continue;
        }
        let matches = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| filters.matches(choice, name));
        if matches {
            images.push(path);
        }
    }

    sort_by_name(&mut images);
    Ok(images)
}

/// Returns the display name of a path (its last component), falling back to
/// the full path for roots.
#[must_use]
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'))
}

fn sort_by_name(paths: &mut [PathBuf]) {
    paths.sort_by_cached_key(|path| {
        path.file_name()
            .map(|name| name.to_string_lossy().to_lowercase())
            .unwrap_or_default()
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn create_file(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).expect("failed to create test file");
        file.write_all(b"fake image data")
            .expect("failed to write test file");
        path
    }

    fn default_filters() -> NameFilters {
        NameFilters::new(["*.png", "*.jpg", "*.jpeg"]).unwrap()
    }

    #[test]
    fn list_subdirectories_excludes_files_and_hidden_entries() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::create_dir(temp_dir.path().join("Beta")).unwrap();
        fs::create_dir(temp_dir.path().join("alpha")).unwrap();
        fs::create_dir(temp_dir.path().join(".cache")).unwrap();
        create_file(temp_dir.path(), "photo.png");

        let folders = list_subdirectories(temp_dir.path()).expect("scan should succeed");
        let names: Vec<_> = folders.iter().map(|p| display_name(p)).collect();
        assert_eq!(names, vec!["alpha", "Beta"]);
    }

    #[test]
    fn list_subdirectories_of_missing_directory_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        assert!(list_subdirectories(&temp_dir.path().join("missing")).is_err());
    }

    #[test]
    fn has_subdirectories_detects_children() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        assert!(!has_subdirectories(temp_dir.path()));

        fs::create_dir(temp_dir.path().join(".hidden")).unwrap();
        assert!(!has_subdirectories(temp_dir.path()));

        fs::create_dir(temp_dir.path().join("child")).unwrap();
        assert!(has_subdirectories(temp_dir.path()));
    }

    #[test]
    fn scan_images_applies_all_filter() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_file(temp_dir.path(), "c.jpeg");
        create_file(temp_dir.path(), "a.PNG");
        create_file(temp_dir.path(), "B.jpg");
        create_file(temp_dir.path(), "notes.txt");
        create_file(temp_dir.path(), ".hidden.png");
        fs::create_dir(temp_dir.path().join("folder.png")).unwrap();

        let images = scan_images(temp_dir.path(), &default_filters(), &FilterChoice::All)
            .expect("scan should succeed");
        let names: Vec<_> = images.iter().map(|p| display_name(p)).collect();
        assert_eq!(names, vec!["a.PNG", "B.jpg", "c.jpeg"]);
    }

    #[test]
    fn scan_images_applies_single_pattern() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_file(temp_dir.path(), "a.png");
        create_file(temp_dir.path(), "b.jpg");
        create_file(temp_dir.path(), "c.jpeg");

        let choice = FilterChoice::Pattern("*.jpeg".to_string());
        let images =
            scan_images(temp_dir.path(), &default_filters(), &choice).expect("scan should succeed");
        assert_eq!(images, vec![temp_dir.path().join("c.jpeg")]);
    }

    #[test]
    fn display_name_falls_back_for_root() {
        assert_eq!(display_name(Path::new("/")), "/");
        assert_eq!(display_name(Path::new("/home/user")), "user");
    }
}
