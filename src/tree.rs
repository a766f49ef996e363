use log::warn;
use std::collections::{BTreeMap, BTreeSet};

use crate::errors::AppError;

/// A directory level of the index
///
/// Files and subdirectories are kept apart, so a file and a directory can
/// never shadow each other's entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathTree {
    /// Subdirectories keyed by segment name
    pub subdirectories: BTreeMap<String, PathTree>,
    /// File names directly in this directory
    pub files: BTreeSet<String>,
}

/// A child of a [`PathTree`] node, as visited by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeEntry<'a> {
    File(&'a str),
    Directory(&'a str, &'a PathTree),
}

impl<'a> TreeEntry<'a> {
    pub fn name(&self) -> &'a str {
        match *self {
            TreeEntry::File(name) | TreeEntry::Directory(name, _) => name,
        }
    }
}

impl PathTree {
    /**
     * Build a tree from forward-slash relative paths
     *
     * Malformed paths are logged and skipped; the rest of the input is
     * still filed.
     *
     * @param paths Relative paths in any order
     * @return The populated tree
     */
    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tree = PathTree::default();
        for path in paths {
            if let Err(e) = tree.insert(path.as_ref()) {
                warn!("Skipping entry: {}", e);
            }
        }
        tree
    }

    /**
     * File one relative path into the tree
     *
     * Every segment but the last names a directory, the last names the
     * file. Directory nodes are shared between paths with a common prefix.
     *
     * @param path Relative path such as `a/b/c.html`
     * @return MalformedPath if the path is empty, absolute or has an empty segment
     */
    pub fn insert(&mut self, path: &str) -> Result<(), AppError> {
        let segments: Vec<&str> = path.split('/').collect();
        if segments.iter().any(|s| s.is_empty()) {
            return Err(AppError::MalformedPath {
                path: path.to_string(),
            });
        }

        let (file, directories) = segments
            .split_last()
            .ok_or_else(|| AppError::MalformedPath {
                path: path.to_string(),
            })?;

        let mut node = self;
        for directory in directories {
            node = node
                .subdirectories
                .entry((*directory).to_string())
                .or_default();
        }
        node.files.insert((*file).to_string());
        Ok(())
    }

    /// Whether this node or any descendant holds a file
    pub fn has_files(&self) -> bool {
        !self.files.is_empty() || self.subdirectories.values().any(PathTree::has_files)
    }

    /// Number of files in this node and all descendants
    pub fn file_count(&self) -> usize {
        self.files.len()
            + self
                .subdirectories
                .values()
                .map(PathTree::file_count)
                .sum::<usize>()
    }

    /// Files and subdirectories merged into one list sorted by name
    ///
    /// Ties between a file and a directory of the same name put the
    /// directory first.
    pub fn entries(&self) -> Vec<TreeEntry<'_>> {
        let mut entries: Vec<TreeEntry<'_>> = self
            .subdirectories
            .iter()
            .map(|(name, node)| TreeEntry::Directory(name, node))
            .chain(self.files.iter().map(|name| TreeEntry::File(name)))
            .collect();
        // Stable sort keeps directories ahead of equally named files.
        entries.sort_by(|a, b| a.name().cmp(b.name()));
        entries
    }
}
