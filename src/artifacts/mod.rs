//! History graph and diff data structures and algorithms
//!
//! This module contains the pure computational engine:
//!
//! - `graph`: Commit entries and lane assignment for graph rendering
//! - `diff`: Unified diff parsing, word-level diff and split-view pairing
//! - `presentation`: Status, heat and colour lookups

pub mod diff;
pub mod graph;
pub mod presentation;
