//! Generate command implementation
//!
//! Runs the whole pipeline once: collect matching files under the root,
//! group them into a [`PathTree`], render the document and write it out.

use log::{debug, info};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    config::Config,
    errors::AppError,
    html::render_document,
    tree::PathTree,
    utils::{find_files_with_suffix, relative_slash_path},
};

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSummary {
    /// Number of files listed in the document
    pub files: usize,
    /// Path the document was written to
    pub output: PathBuf,
}

/// Generate the index document and write it to `config.output`
///
/// This function:
/// 1. Validates the configuration
/// 2. Builds the document with [`build_document`]
/// 3. Writes it, replacing any existing file
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the root cannot be
/// walked, or the output cannot be written.
pub fn generate_index(config: &Config) -> Result<IndexSummary, AppError> {
    config.validate()?;
    info!(
        "Indexing {:?} files under {:?}",
        config.suffix, config.root_dir
    );

    let (document, files) = build_document(config)?;

    fs::write(&config.output, document).map_err(|source| AppError::Write {
        path: config.output.clone(),
        source,
    })?;
    info!("Saved index of {} file(s) to {:?}", files, config.output);

    Ok(IndexSummary {
        files,
        output: config.output.clone(),
    })
}

/// Collect, group and render without touching the output file
///
/// The output file itself is left out of the listing when it lives under
/// the root, so a rerun over an unchanged tree produces the same document.
///
/// # Returns
///
/// The rendered document and the number of files it lists.
pub fn build_document(config: &Config) -> Result<(String, usize), AppError> {
    let mut files = find_files_with_suffix(&config.root_dir, &config.suffix)?;
    info!("Found {} matching file(s)", files.len());

    if let Some(own_output) = output_relative_to_root(&config.root_dir, &config.output) {
        let before = files.len();
        files.retain(|f| *f != own_output);
        if files.len() != before {
            debug!("Excluded previous output {}", own_output);
        }
    }

    let tree = PathTree::from_paths(&files);
    let count = tree.file_count();
    Ok((render_document(&tree, &config.base_url), count))
}

/// Location of `output` relative to `root`, if it lies inside it
///
/// The output does not need to exist yet; only its parent directory is
/// resolved.
fn output_relative_to_root(root: &Path, output: &Path) -> Option<String> {
    let root = fs::canonicalize(root).ok()?;
    let file_name = output.file_name()?;
    let parent = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let parent = fs::canonicalize(parent).ok()?;
    let location = parent.join(file_name);
    relative_slash_path(location.strip_prefix(&root).ok()?)
}
