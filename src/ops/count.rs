//! Line counting over a filtered tree walk
//!
//! Walks the tree, counts lines in every allow-listed text file, and tallies
//! image files without opening them. Extension matching is case-sensitive.

use anyhow::{anyhow, Result};
use std::path::Path;

use crate::core::classify::{Bucket, Classifier};
use crate::core::model::{CountReport, FileCount, SkippedFile};
use crate::core::paths::display_relative;
use crate::core::read::{read_text, EncodingPolicy};
use crate::core::render::{RenderConfig, Renderer};
use crate::core::walker::walk_files;

/// Options for the count command
#[derive(Debug, Clone)]
pub struct CountOptions {
    /// Directory base names pruned from the walk
    pub exclude: Vec<String>,

    /// Text extensions to count, matched case-sensitively
    pub text_exts: Vec<String>,

    /// Image extensions to tally, matched case-sensitively
    pub image_exts: Vec<String>,

    /// Abort the run on the first unreadable text file instead of
    /// warning and continuing
    pub fail_fast: bool,

    pub encoding: EncodingPolicy,
}

/// Count lines and tally files under `root`.
pub fn count_tree(root: &Path, opts: &CountOptions) -> Result<CountReport> {
    let classifier = Classifier::new(&opts.text_exts, &opts.image_exts, false);
    let walk = walk_files(root, &opts.exclude);
    for warning in &walk.warnings {
        eprintln!("warning: {}", warning);
    }

    let mut report = CountReport::default();

    for path in walk.files {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };

        match classifier.bucket(name) {
            Bucket::Text => {
                report.total_files += 1;
                let relative = display_relative(&path, root);
                match read_text(&path, opts.encoding) {
                    Ok(content) => {
                        let lines = content.lines().count() as u64;
                        report.total_lines += lines;
                        report.files.push(FileCount {
                            path: relative,
                            lines,
                        });
                    }
                    Err(reason) if opts.fail_fast => {
                        return Err(anyhow!(reason)
                            .context(format!("Failed to read {}", path.display())));
                    }
                    Err(reason) => {
                        eprintln!("Error reading {}: {}", path.display(), reason);
                        report.skipped.push(SkippedFile::new(relative, &reason));
                    }
                }
            }
            Bucket::Image => report.total_images += 1,
            Bucket::Ignored => {}
        }
    }

    Ok(report)
}

/// Run the count command
pub fn run_count(root: &Path, opts: &CountOptions, config: RenderConfig) -> Result<()> {
    let report = count_tree(root, opts)?;

    let renderer = Renderer::with_config(config);
    println!("{}", renderer.render(&report));

    Ok(())
}
