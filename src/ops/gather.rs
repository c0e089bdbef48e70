//! Source gathering - concatenate cleaned target files into one artifact
//!
//! Walks the tree, counts every allow-listed text file, and for files of the
//! target extension reads, cleans, and appends their content to a single
//! combined output file, each chunk preceded by a separator line derived
//! from the file's base name. Extension matching is case-insensitive.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::core::classify::{suffix, Bucket, Classifier};
use crate::core::model::{GatherReport, SkippedFile};
use crate::core::paths::{display_relative, normalize_path};
use crate::core::read::{read_text, EncodingPolicy};
use crate::core::render::{RenderConfig, Renderer};
use crate::core::walker::walk_files;
use crate::ops::clean::clean_source;

/// Two-character marker opening each separator line in the artifact.
pub const SEPARATOR_MARKER: &str = "//";

/// Options for the gather command
#[derive(Debug, Clone)]
pub struct GatherOptions {
    /// Directory base names pruned from the walk
    pub exclude: Vec<String>,

    /// Text extensions to count, matched case-insensitively
    pub text_exts: Vec<String>,

    /// Image extensions to tally, matched case-insensitively
    pub image_exts: Vec<String>,

    /// The one extension whose content is read, cleaned, and appended
    pub target_ext: String,

    /// Artifact path relative to root; derived from the target extension
    /// when not set
    pub output: Option<PathBuf>,

    pub encoding: EncodingPolicy,
}

/// Default artifact file name for a target extension:
/// `.cs` -> `all_cs_files_combined_cleaned.cs`.
pub fn default_output_name(target_ext: &str) -> String {
    let stem = target_ext.trim_start_matches('.').to_lowercase();
    format!("all_{stem}_files_combined_cleaned.{stem}")
}

fn normalize_target(target_ext: &str) -> String {
    let ext = target_ext.to_lowercase();
    if ext.starts_with('.') {
        ext
    } else {
        format!(".{ext}")
    }
}

/// Gather cleaned target-extension sources under `root` into the artifact.
pub fn gather_tree(root: &Path, opts: &GatherOptions) -> Result<GatherReport> {
    let target = normalize_target(&opts.target_ext);
    let classifier = Classifier::new(&opts.text_exts, &opts.image_exts, true);

    let out_path = root.join(
        opts.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(default_output_name(&target))),
    );
    // Created fresh per run; a re-run discards prior combined output.
    let out_file = File::create(&out_path)
        .with_context(|| format!("Failed to create output file: {}", out_path.display()))?;
    let mut out = BufWriter::new(out_file);

    let walk = walk_files(root, &opts.exclude);
    for warning in &walk.warnings {
        eprintln!("warning: {}", warning);
    }

    let mut report = GatherReport {
        target: target.clone(),
        output: display_relative(&out_path, root),
        ..Default::default()
    };

    for path in walk.files {
        // Never gather the artifact itself
        if path == out_path {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };

        match classifier.bucket(name) {
            Bucket::Text => {
                report.total_files += 1;

                let is_target = suffix(name)
                    .map(|ext| ext.to_lowercase() == target)
                    .unwrap_or(false);
                if !is_target {
                    continue;
                }

                match read_text(&path, opts.encoding) {
                    Ok(content) => {
                        let cleaned = clean_source(&content);
                        let base = base_name(name);
                        write!(out, "\n{}{}\n{}", SEPARATOR_MARKER, base, cleaned)
                            .with_context(|| {
                                format!("Failed to write to {}", out_path.display())
                            })?;
                        report.gathered.push(base.to_string());
                    }
                    Err(reason) => {
                        eprintln!("Error reading {}: {}", path.display(), reason);
                        report
                            .skipped
                            .push(SkippedFile::new(display_relative(&path, root), &reason));
                    }
                }
            }
            Bucket::Image => report.total_images += 1,
            Bucket::Ignored => {}
        }
    }

    out.flush()
        .with_context(|| format!("Failed to flush {}", normalize_path(&out_path)))?;

    Ok(report)
}

/// File name with the final extension stripped.
fn base_name(name: &str) -> &str {
    match suffix(name) {
        Some(ext) => &name[..name.len() - ext.len()],
        None => name,
    }
}

/// Run the gather command
pub fn run_gather(root: &Path, opts: &GatherOptions, config: RenderConfig) -> Result<()> {
    let report = gather_tree(root, opts)?;

    let renderer = Renderer::with_config(config);
    println!("{}", renderer.render(&report));

    Ok(())
}
