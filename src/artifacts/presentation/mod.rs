//! Categorical lookups used when rendering history and diffs
//!
//! - `file_status`: `git status` pairs to labels and colours
//! - `heat`: Activity heat, author colours and blame-age buckets

pub mod file_status;
pub mod heat;
