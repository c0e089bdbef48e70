//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::read::EncodingPolicy;
use crate::core::render::{OutputFormat, RenderConfig};
use crate::ops::count::CountOptions;
use crate::ops::gather::GatherOptions;

/// srctally - count lines and gather cleaned sources across a project tree.
#[derive(Parser, Debug)]
#[command(name = "srctally")]
#[command(
    author,
    version,
    about,
    long_about = r#"srctally walks a directory tree, skipping a fixed set of excluded directory
names, and classifies every file by its extension.

Commands:
- count: tally line counts for text files and a separate count of image files
- gather: concatenate cleaned sources of one target extension into a single
  combined file

Output formats:
- text: human-friendly listing plus summary block (default)
- json: the full run report as a single JSON object

Examples:
    srctally count
    srctally count --exclude styles,vendor --format json
    srctally gather
    srctally gather --target-ext .py --output bundle.py
"#
)]
pub struct Cli {
    /// Root directory for all operations.
    #[arg(
        long,
        global = true,
        default_value = ".",
        value_name = "ROOT",
        long_help = "Root directory for all operations (defaults to the current directory).\n\n\
All paths emitted in results are relative to this root."
    )]
    pub root: PathBuf,

    /// Output format (text/json).
    #[arg(
        long,
        global = true,
        default_value = "text",
        value_name = "FORMAT",
        long_help = "Select the output format for the run report.\n\n\
Supported values:\n\
- text (default): per-file listing plus summary block\n\
- json: the full report as one JSON object\n\n\
Diagnostics (skipped files, unreadable directories) go to stderr in every format."
    )]
    pub format: String,

    /// Pretty-print JSON output with indentation.
    #[arg(
        long,
        global = true,
        long_help = "Pretty-print JSON output with indentation for human readability.\n\n\
Has no effect on the text format."
    )]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Count lines in text files and tally images under ROOT.
    #[command(
        long_about = "Walk the tree under ROOT, skipping excluded directories, and count the\n\
lines of every file whose extension is in the text allow-list (case-sensitive\n\
match). Files with an image extension are tallied without being opened.\n\n\
Examples:\n\
  srctally count\n\
  srctally count --exclude styles,email --ext .cs,.py\n\
  srctally count --fail-fast\n"
    )]
    Count {
        /// Directory base names to skip, at any depth.
        #[arg(
            long,
            value_name = "NAMES",
            value_delimiter = ',',
            default_value = "styles,fpdf,email,image",
            long_help = "Comma-separated directory base names to prune from the walk.\n\n\
Matching is on the base name only, so an excluded name is skipped at any depth,\n\
together with everything beneath it."
        )]
        exclude: Vec<String>,

        /// Text extensions to count (case-sensitive).
        #[arg(
            long,
            value_name = "EXTS",
            value_delimiter = ',',
            default_value = ".cs,.py,.html,.js,.php,.txt"
        )]
        ext: Vec<String>,

        /// Image extensions to tally without reading.
        #[arg(
            long = "image-ext",
            value_name = "EXTS",
            value_delimiter = ',',
            default_value = ".png,.jpg,.giff",
            long_help = "Comma-separated image extensions, tallied without reading content.\n\n\
The default keeps the legacy .giff spelling; pass your own list to change it."
        )]
        image_ext: Vec<String>,

        /// Abort the run on the first unreadable text file.
        #[arg(
            long,
            long_help = "Abort on the first text file that cannot be read or decoded, discarding\n\
partial totals. Without this flag such files are reported to stderr, recorded\n\
in the report, and skipped."
        )]
        fail_fast: bool,

        /// Read non-UTF-8 files with replacement characters instead of skipping.
        #[arg(long)]
        lossy: bool,
    },

    /// Gather cleaned sources of one extension into a combined file.
    #[command(
        long_about = "Walk the tree under ROOT and concatenate every file of the target\n\
extension (case-insensitive match) into one combined output file, created\n\
fresh each run. Each file's content is cleaned first: comments stripped,\n\
blank and 'using'-containing lines dropped, whitespace collapsed. A separator\n\
line with the file's base name precedes each chunk.\n\n\
Other text extensions are counted but never opened; image extensions are\n\
tallied only. Files that cannot be read are reported and skipped; the run\n\
continues.\n\n\
Examples:\n\
  srctally gather\n\
  srctally gather --target-ext .py --output bundle.py\n\
  srctally gather --exclude styles,Migrations,vendor\n"
    )]
    Gather {
        /// Directory base names to skip, at any depth.
        #[arg(
            long,
            value_name = "NAMES",
            value_delimiter = ',',
            default_value = "styles,fpdf,email,image,Migrations"
        )]
        exclude: Vec<String>,

        /// Text extensions to count (case-insensitive).
        #[arg(
            long,
            value_name = "EXTS",
            value_delimiter = ',',
            default_value = ".cs,.py,.html,.js,.php,.txt"
        )]
        ext: Vec<String>,

        /// Image extensions to tally without reading.
        #[arg(
            long = "image-ext",
            value_name = "EXTS",
            value_delimiter = ',',
            default_value = ".png,.jpg,.giff"
        )]
        image_ext: Vec<String>,

        /// The extension whose content is gathered.
        #[arg(
            long = "target-ext",
            value_name = "EXT",
            default_value = ".cs",
            long_help = "The one extension whose files are read, cleaned, and appended to the\n\
combined output. Files of the other text extensions are counted but never\n\
opened."
        )]
        target_ext: String,

        /// Combined output file, relative to ROOT.
        #[arg(
            long,
            value_name = "FILE",
            long_help = "Path of the combined output file, relative to ROOT.\n\n\
Defaults to all_<ext>_files_combined_cleaned.<ext> derived from the target\n\
extension. The file is truncated at the start of each run."
        )]
        output: Option<PathBuf>,

        /// Read non-UTF-8 files with replacement characters instead of skipping.
        #[arg(long)]
        lossy: bool,
    },
}

fn encoding_policy(lossy: bool) -> EncodingPolicy {
    if lossy {
        EncodingPolicy::Lossy
    } else {
        EncodingPolicy::Strict
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let format: OutputFormat = cli.format.parse().unwrap_or_default();
    let render_config = RenderConfig::with_pretty(format, cli.pretty);

    // Get absolute root path
    let root = cli.root.canonicalize().unwrap_or(cli.root);

    match cli.command {
        Commands::Count {
            exclude,
            ext,
            image_ext,
            fail_fast,
            lossy,
        } => {
            let opts = CountOptions {
                exclude,
                text_exts: ext,
                image_exts: image_ext,
                fail_fast,
                encoding: encoding_policy(lossy),
            };
            crate::ops::count::run_count(&root, &opts, render_config)
        }

        Commands::Gather {
            exclude,
            ext,
            image_ext,
            target_ext,
            output,
            lossy,
        } => {
            let opts = GatherOptions {
                exclude,
                text_exts: ext,
                image_exts: image_ext,
                target_ext,
                output,
                encoding: encoding_policy(lossy),
            };
            crate::ops::gather::run_gather(&root, &opts, render_config)
        }
    }
}
