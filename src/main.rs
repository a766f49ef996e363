#![forbid(unsafe_code)]

//! Directory index generator
//!
//! This program walks a directory tree, collects every file whose name ends
//! with a given suffix, and writes a static HTML page listing them as nested
//! lists of links. Run without arguments it indexes the current directory's
//! `.html` files into `directory.html`.

use std::path::PathBuf;

use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use log::debug;

// Import modules
mod commands;
mod config;
mod errors;
mod html;
mod tree;
mod utils;

use crate::commands::generate::generate_index;
use crate::config::{Config, DEFAULT_BASE_URL, DEFAULT_OUTPUT, DEFAULT_ROOT_DIR, DEFAULT_SUFFIX};
use crate::errors::AppError;

#[derive(Parser, Debug)]
#[command(name = "dirindex")]
#[command(about = "Generate a nested HTML index of the files under a directory")]
struct Cli {
    /// Directory to scan
    #[arg(long, default_value = DEFAULT_ROOT_DIR)]
    root: PathBuf,
    /// Prefix prepended to every link
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,
    /// Only list files whose name ends with this suffix
    #[arg(long, default_value = DEFAULT_SUFFIX)]
    suffix: String,
    /// File to write the index to
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    #[command(flatten)]
    verbose: Verbosity<InfoLevel>,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            root_dir: cli.root,
            base_url: cli.base_url,
            suffix: cli.suffix,
            output: cli.output,
        }
    }
}

/**
 * Main function
 *
 * This function parses command-line arguments, initializes the logger,
 * and runs the index generation once.
 *
 * @return Result indicating success or error
 */
fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    // Initialize logger; RUST_LOG overrides the verbosity flags
    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .parse_default_env()
        .init();

    let summary = generate_index(&Config::from(cli))?;
    debug!("{} file(s) listed", summary.files);

    println!("✅ {} generated", summary.output.display());
    Ok(())
}
