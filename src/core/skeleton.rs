use std::fs;
use std::path::Path;

use crate::core::error::{Error, Result};

/// Skeleton provenance artifacts that must not ship with a generated package.
const PRUNE_FILES: &[&str] = &["README.md"];
const PRUNE_DIRS: &[&str] = &[".git"];

/// Recursively copy the contents of `src` into `dst`. `dst` must exist.
pub fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<()> {
    let entries = fs::read_dir(src)
        .map_err(|e| Error::internal_io(e.to_string(), Some(format!("list {}", src.display()))))?;

    for entry in entries {
        let entry = entry.map_err(|e| {
            Error::internal_io(e.to_string(), Some(format!("list {}", src.display())))
        })?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            fs::create_dir_all(&dst_path).map_err(|e| {
                Error::internal_io(e.to_string(), Some(format!("create {}", dst_path.display())))
            })?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            fs::copy(&src_path, &dst_path).map_err(|e| {
                Error::internal_io(e.to_string(), Some(format!("copy {}", src_path.display())))
            })?;
        }
    }

    Ok(())
}

/// Remove a directory tree: recurse into subdirectories, unlink files,
/// then remove the directory itself.
///
/// A path that does not denote a directory is a no-op, which covers
/// skeletons that carry no `.git` directory.
pub fn remove_dir_recursive(path: &Path) -> Result<()> {
    if !path.is_dir() {
        return Ok(());
    }

    let entries = fs::read_dir(path)
        .map_err(|e| Error::internal_io(e.to_string(), Some(format!("list {}", path.display()))))?;

    for entry in entries {
        let entry = entry.map_err(|e| {
            Error::internal_io(e.to_string(), Some(format!("list {}", path.display())))
        })?;
        let child = entry.path();

        if child.is_dir() {
            remove_dir_recursive(&child)?;
        } else {
            fs::remove_file(&child).map_err(|e| {
                Error::internal_io(e.to_string(), Some(format!("delete {}", child.display())))
            })?;
        }
    }

    fs::remove_dir(path)
        .map_err(|e| Error::internal_io(e.to_string(), Some(format!("delete {}", path.display()))))
}

/// Delete skeleton-only files from a freshly generated package directory.
/// Returns the names of the artifacts that were actually removed.
pub fn prune_skeleton_artifacts(package_dir: &Path) -> Result<Vec<String>> {
    let mut removed = Vec::new();

    for name in PRUNE_FILES {
        let path = package_dir.join(name);
        if path.is_file() {
            fs::remove_file(&path).map_err(|e| {
                Error::internal_io(e.to_string(), Some(format!("delete {}", path.display())))
            })?;
            removed.push((*name).to_string());
        }
    }

    for name in PRUNE_DIRS {
        let path = package_dir.join(name);
        if path.is_dir() {
            remove_dir_recursive(&path)?;
            removed.push((*name).to_string());
        }
    }

    Ok(removed)
}
