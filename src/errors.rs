//! Error types for the application
//!
//! This module defines all error types used throughout the application using the
//! `thiserror` crate. Each error variant provides detailed context about what went wrong.

use std::path::PathBuf;

use thiserror::Error;

/// Application error types
///
/// Everything except [`AppError::MalformedPath`] aborts the run. Malformed
/// paths are reported per entry and skipped by the tree builder.
#[derive(Error, Debug)]
pub enum AppError {
    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    /// Root directory is missing or is not a directory
    #[error("Root directory not found: {}", path.display())]
    RootNotFound { path: PathBuf },
    /// Reading a directory or entry failed while walking the tree
    #[error("Failed to read {}: {source}", path.display())]
    Traversal {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Writing the output document failed
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Relative path with an empty segment
    #[error("Malformed relative path: {path:?}")]
    MalformedPath { path: String },
    /// Configuration rejected before the run starts
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl AppError {
    /// Create a new Traversal error
    pub fn traversal(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::Traversal {
            path: path.into(),
            source,
        }
    }
}
