//! Diff parsing and fine-grained comparison
//!
//! This module turns raw diff text into structured data and computes the
//! finer-grained differences a renderer needs:
//!
//! - `diff_line`: Stateless single-line classifier
//! - `hunk_header`: `@@ -a,b +c,d @@` range parsing
//! - `unified_diff`: Full `git diff` parser (files, hunks, changes, stats)
//! - `lcs`: Longest-common-subsequence diff over arbitrary token sequences
//! - `word_diff`: Word-level segments for intra-line highlighting
//! - `split_view`: Pairing of changes for side-by-side display

pub mod diff_line;
pub mod hunk_header;
pub mod lcs;
pub mod split_view;
pub mod unified_diff;
pub mod word_diff;

pub const DEV_NULL: &str = "/dev/null";
pub const FILE_HEADER_PREFIX: &str = "diff --git ";
pub const HUNK_HEADER_PREFIX: &str = "@@";
pub const HUNK_HEADER_REGEX: &str = r"^@@ -(\d+)(?:,(\d+))? \+(\d+)(?:,(\d+))? @@(.*)$";
pub const WORD_TOKEN_REGEX: &str = r"\s+|\S+";
