//! Command-line interface definitions
//!
//! A thin wrapper around [`crate::copy_sync`], present so the engine can
//! be exercised manually and from `assert_cmd`-based integration tests.
//! It carries no safety-analysis logic of its own.

use std::path::PathBuf;

use clap::Parser;

use crate::options::CopyOptionsArgs;

/// Recursively copy a file, directory, or symlink.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Source path
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Destination path
    #[arg(value_name = "DESTINATION")]
    pub destination: PathBuf,

    /// Copy options
    #[command(flatten)]
    pub options: CopyOptionsArgs,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
