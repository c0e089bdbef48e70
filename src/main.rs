//! srctally - count and gather source files across a project tree
//!
//! srctally provides:
//! - Line/file/image tallies filtered by extension (`count`)
//! - Concatenation of cleaned source files into one artifact (`gather`)
//! - Unified output format (text/json)

use anyhow::Result;
use clap::Parser;

mod cli;
mod core;
mod ops;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
