//! `histview` subcommands
//!
//! Each subcommand is an `impl Viewer` block that reads text input, runs it
//! through the engine and prints the result as text or JSON:
//!
//! - `graph`: Lane layout for a commit history
//! - `diff`: Structured unified diff, split view and diffstat
//! - `word_diff`: Word-level comparison of two strings
//! - `status`: Labels for porcelain status codes
//!
//! `viewer` holds the shared output context and `pager` the terminal pager.

pub mod diff;
pub mod graph;
pub mod pager;
pub mod status;
pub mod viewer;
pub mod word_diff;
