//! Run report model
//!
//! Every command accumulates its results into one of these reports and hands
//! it to the renderer. Counters live in the report, not in process-wide
//! state, so a run's totals are just the returned value.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a single file was skipped instead of processed.
///
/// The outer loop of each operation decides what a skip means: the counter
/// either warns and continues or aborts (fail-fast), the gatherer always
/// warns and continues.
#[derive(Debug, Error)]
pub enum SkipReason {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("invalid UTF-8 in file content")]
    InvalidUtf8,
}

/// Line count for a single text file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileCount {
    /// Path relative to root, using '/' as separator
    pub path: String,
    pub lines: u64,
}

/// A file that was classified for processing but could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedFile {
    pub path: String,
    pub reason: String,
}

impl SkippedFile {
    pub fn new(path: impl Into<String>, reason: &SkipReason) -> Self {
        Self {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

/// Result of a `count` run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CountReport {
    /// Per-file line counts, in walk order
    pub files: Vec<FileCount>,

    /// Files skipped due to read errors (empty under fail-fast)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedFile>,

    pub total_lines: u64,
    pub total_files: u64,
    pub total_images: u64,
}

/// Result of a `gather` run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GatherReport {
    /// The target extension whose content was gathered (normalized, e.g. ".cs")
    pub target: String,

    /// Combined artifact path relative to root
    pub output: String,

    /// Base names appended to the artifact, in walk order
    pub gathered: Vec<String>,

    /// Target files skipped due to read errors
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedFile>,

    pub total_files: u64,
    pub total_images: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_reason_display() {
        let reason = SkipReason::InvalidUtf8;
        assert_eq!(reason.to_string(), "invalid UTF-8 in file content");
    }

    #[test]
    fn test_skip_reason_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let reason: SkipReason = io.into();
        assert!(matches!(reason, SkipReason::Io(_)));
        assert!(reason.to_string().contains("gone"));
    }

    #[test]
    fn test_skipped_file_new() {
        let skip = SkippedFile::new("src/a.cs", &SkipReason::InvalidUtf8);
        assert_eq!(skip.path, "src/a.cs");
        assert_eq!(skip.reason, "invalid UTF-8 in file content");
    }

    #[test]
    fn test_count_report_serialization_omits_empty_skips() {
        let mut report = CountReport::default();
        report.files.push(FileCount {
            path: "a.cs".to_string(),
            lines: 3,
        });
        report.total_lines = 3;
        report.total_files = 1;

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"total_lines\":3"));
        assert!(!json.contains("skipped"));
    }

    #[test]
    fn test_gather_report_roundtrip() {
        let report = GatherReport {
            target: ".cs".to_string(),
            output: "all_cs_files_combined_cleaned.cs".to_string(),
            gathered: vec!["Foo".to_string()],
            skipped: vec![SkippedFile {
                path: "Bad.cs".to_string(),
                reason: "invalid UTF-8 in file content".to_string(),
            }],
            total_files: 2,
            total_images: 0,
        };

        let json = serde_json::to_string(&report).unwrap();
        let back: GatherReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.gathered, vec!["Foo".to_string()]);
        assert_eq!(back.skipped.len(), 1);
        assert_eq!(back.total_files, 2);
    }
}
