//! Run configuration
//!
//! All values the pipeline depends on are carried in a [`Config`] and passed
//! in explicitly, so nothing in the pipeline reads global state.

use std::path::PathBuf;

use crate::errors::AppError;

/// Prefix prepended to every generated link
pub const DEFAULT_BASE_URL: &str = "https://michaelwoodc.github.io/spanish_articulation/";
/// Directory scanned when no root is given
pub const DEFAULT_ROOT_DIR: &str = ".";
/// Filename suffix a file must end with to be listed
pub const DEFAULT_SUFFIX: &str = ".html";
/// Name of the generated document
pub const DEFAULT_OUTPUT: &str = "directory.html";

/// Configuration for a single index generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory to walk
    pub root_dir: PathBuf,
    /// String prefix for link targets, never dereferenced
    pub base_url: String,
    /// Case-sensitive filename suffix
    pub suffix: String,
    /// Where the document is written
    pub output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            root_dir: PathBuf::from(DEFAULT_ROOT_DIR),
            base_url: DEFAULT_BASE_URL.to_string(),
            suffix: DEFAULT_SUFFIX.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl Config {
    /**
     * Check the configuration before any filesystem access
     *
     * An empty suffix would match every file, which is never what a
     * caller wants from an extension filter.
     *
     * @return Ok if the configuration is usable
     */
    pub fn validate(&self) -> Result<(), AppError> {
        if self.suffix.is_empty() {
            return Err(AppError::InvalidConfig {
                reason: "suffix must not be empty".to_string(),
            });
        }
        if self.output.file_name().is_none() {
            return Err(AppError::InvalidConfig {
                reason: format!("output {} does not name a file", self.output.display()),
            });
        }
        Ok(())
    }
}
