//! Commit graph layout
//!
//! - `commit_entry`: History entries as supplied by the history provider
//! - `lane_assigner`: Stable lane (column) assignment for newest-first histories

pub mod commit_entry;
pub mod lane_assigner;
