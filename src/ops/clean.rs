//! Source text cleanup
//!
//! Condenses raw source text for concatenation: strips line and block
//! comments, drops blank and import-style lines, and collapses runs of
//! whitespace. This is textual pattern matching, not a lexer. Two known
//! consequences of that: a `//` inside a string literal still starts a
//! "comment", and the import filter is a plain substring check, so a line
//! like `var usingAccount = 5;` is dropped as well.

use once_cell::sync::Lazy;
use regex::Regex;

/// Everything from a line-comment marker to end of line
static LINE_COMMENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"//.*").expect("Invalid LINE_COMMENT_RE regex"));

/// Block comments, non-greedy; an unclosed opener consumes to end of input
static BLOCK_COMMENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)/\*.*?(\*/|$)").expect("Invalid BLOCK_COMMENT_RE regex"));

/// Any run of whitespace within a line
static WHITESPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("Invalid WHITESPACE_RE regex"));

/// Lines whose trimmed content contains this substring anywhere are dropped.
pub const IMPORT_TOKEN: &str = "using";

/// Clean a source document: remove comments, drop blank and
/// `using`-containing lines, collapse internal whitespace, and rejoin the
/// surviving lines with single line breaks. Deterministic, and idempotent
/// when re-applied to its own output.
pub fn clean_source(code: &str) -> String {
    let no_line_comments = LINE_COMMENT_RE.replace_all(code, "");
    let no_comments = BLOCK_COMMENT_RE.replace_all(&no_line_comments, "");

    no_comments
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.contains(IMPORT_TOKEN) {
                return None;
            }
            Some(WHITESPACE_RE.replace_all(trimmed, " ").into_owned())
        })
        .collect::<Vec<_>>()
        .join("\n")
}
