//! Utility functions for file system operations
//!
//! This module walks the root directory and collects the files the index
//! lists, as forward-slash paths relative to the root.

use log::{debug, warn};
use std::{
    fs,
    path::{Component, Path},
};

use crate::errors::AppError;

/// Recursively find all files under `root` whose name ends with `suffix`
///
/// Directory symlinks are not followed. Files whose names are not valid
/// UTF-8 are skipped with a warning.
///
/// # Arguments
///
/// * `root` - The directory to start searching from
/// * `suffix` - Case-sensitive suffix the file name must end with
///
/// # Returns
///
/// Relative, forward-slash separated paths in no particular order.
///
/// # Errors
///
/// Returns an error if `root` is not a directory or any directory under it
/// cannot be read.
pub fn find_files_with_suffix(root: &Path, suffix: &str) -> Result<Vec<String>, AppError> {
    if !root.is_dir() {
        return Err(AppError::RootNotFound {
            path: root.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    collect_files(root, root, suffix, &mut files)?;
    Ok(files)
}

fn collect_files(
    root: &Path,
    dir: &Path,
    suffix: &str,
    files: &mut Vec<String>,
) -> Result<(), AppError> {
    let entries = fs::read_dir(dir).map_err(|e| AppError::traversal(dir, e))?;

    for entry in entries {
        let entry = entry.map_err(|e| AppError::traversal(dir, e))?;
        let path = entry.path();
        let file_type = entry
            .file_type()
            .map_err(|e| AppError::traversal(&path, e))?;

        if file_type.is_dir() {
            collect_files(root, &path, suffix, files)?;
            continue;
        }
        if file_type.is_symlink() && path.is_dir() {
            debug!("Not following directory symlink {:?}", path);
            continue;
        }

        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            warn!("Skipping file with non-UTF-8 name: {:?}", path);
            continue;
        };
        if !name.ends_with(suffix) {
            continue;
        }

        match path.strip_prefix(root).ok().and_then(relative_slash_path) {
            Some(relative) => {
                debug!("Found {}", relative);
                files.push(relative);
            }
            None => warn!("Skipping path that is not valid UTF-8: {:?}", path),
        }
    }

    Ok(())
}

/// Join the normal components of a relative path with `/`
///
/// Returns `None` when a component is not valid UTF-8 or the path is not
/// purely relative (root, prefix or `..` components).
pub fn relative_slash_path(path: &Path) -> Option<String> {
    let mut segments = Vec::new();
    for component in path.components() {
        match component {
            Component::Normal(segment) => segments.push(segment.to_str()?),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    Some(segments.join("/"))
}
