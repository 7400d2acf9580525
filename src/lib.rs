//! Commit graph lanes and structured diffs
//!
//! The library is a pure engine with no I/O:
//!
//! - [`artifacts::graph`] assigns visual lanes to a newest-first commit history
//! - [`artifacts::diff`] parses unified diffs, computes word-level diffs and
//!   pairs changes for side-by-side display
//! - [`artifacts::presentation`] maps statuses and magnitudes to labels and colours
//!
//! [`commands`] holds the `histview` binary's subcommands, which read text
//! input and print what the engine produces.

pub mod artifacts;
pub mod commands;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}
