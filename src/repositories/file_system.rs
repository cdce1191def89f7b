//! File system helpers.

use crate::domain::{AppError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Copy a file or a whole directory tree to `dest`, overwriting existing files.
///
/// Returns the number of files copied.
pub fn copy_recursive(src: &Path, dest: &Path) -> Result<u64> {
    if !src.exists() {
        return Err(AppError::not_found("source path", src));
    }

    if src.is_file() {
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(src, dest)?;
        return Ok(1);
    }

    let mut copied = 0;
    for entry in WalkDir::new(src).follow_links(false) {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(src)
            .map_err(|e| AppError::FileSystem(e.to_string()))?;
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }
    Ok(copied)
}

/// Immediate children of `dir`.
pub fn list_dir(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .collect::<Vec<_>>();
    entries.sort();
    Ok(entries)
}

pub fn read_text(path: &Path, what: &'static str) -> Result<String> {
    if !path.is_file() {
        return Err(AppError::not_found(what, path));
    }
    Ok(fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn copies_a_single_file_creating_parents() {
        let tmp = TempDir::new().expect("temp dir");
        let src = tmp.path().join("a.txt");
        fs::write(&src, "alpha").expect("write");

        let dest = tmp.path().join("out/nested/a.txt");
        assert_eq!(copy_recursive(&src, &dest).expect("copy"), 1);
        assert_eq!(fs::read_to_string(dest).expect("read"), "alpha");
    }

    #[test]
    fn copies_a_tree_and_overwrites() {
        let tmp = TempDir::new().expect("temp dir");
        let src = tmp.path().join("cfg");
        fs::create_dir_all(src.join("sub/empty")).expect("mkdir");
        fs::write(src.join("one.ini"), "1").expect("write");
        fs::write(src.join("sub/two.ini"), "2").expect("write");

        let dest = tmp.path().join("backup/cfg");
        fs::create_dir_all(&dest).expect("mkdir");
        fs::write(dest.join("one.ini"), "stale").expect("write");

        assert_eq!(copy_recursive(&src, &dest).expect("copy"), 2);
        assert_eq!(fs::read_to_string(dest.join("one.ini")).expect("read"), "1");
        assert_eq!(fs::read_to_string(dest.join("sub/two.ini")).expect("read"), "2");
        assert!(dest.join("sub/empty").is_dir());
    }

    #[test]
    fn missing_source_is_not_found() {
        let tmp = TempDir::new().expect("temp dir");
        let err = copy_recursive(&tmp.path().join("nope"), &tmp.path().join("x"))
            .expect_err("missing source");
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[test]
    fn read_text_rejects_directories() {
        let tmp = TempDir::new().expect("temp dir");
        let err = read_text(tmp.path(), "text file").expect_err("directory");
        assert!(err.to_string().starts_with("The text file does not exist"));
    }
}
