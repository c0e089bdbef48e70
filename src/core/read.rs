//! File reading policies
//!
//! Provides consistent handling for files that cannot be read or are not
//! valid UTF-8. The per-file `Result` is the explicit success/skip outcome
//! the operation loops consume; whether a skip aborts the run or merely
//! warns is the caller's policy, not decided here.

use std::fs;
use std::path::Path;

use crate::core::model::SkipReason;

/// Strategy for handling non-UTF-8 content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EncodingPolicy {
    /// Fail the file on invalid UTF-8
    #[default]
    Strict,
    /// Replace invalid sequences with U+FFFD and continue
    Lossy,
}

/// Read a file to a string under the given encoding policy.
pub fn read_text(path: &Path, policy: EncodingPolicy) -> Result<String, SkipReason> {
    let bytes = fs::read(path)?;
    match policy {
        EncodingPolicy::Strict => {
            String::from_utf8(bytes).map_err(|_| SkipReason::InvalidUtf8)
        }
        EncodingPolicy::Lossy => Ok(String::from_utf8_lossy(&bytes).into_owned()),
    }
}
