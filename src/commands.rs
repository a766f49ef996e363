//! Command implementations
//!
//! - [`generate`] - Scan a directory and write the nested HTML index

pub mod generate;
