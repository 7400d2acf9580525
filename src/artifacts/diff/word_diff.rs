//! Word-level diff for intra-line highlighting
//!
//! Both strings are split into alternating runs of whitespace and
//! non-whitespace, so spacing changes show up as their own segments. The
//! token sequences are compared with [`LcsDiff`] and consecutive edits of the
//! same kind are merged into a single [`WordSegment`].

use crate::artifacts::diff::WORD_TOKEN_REGEX;
use crate::artifacts::diff::lcs::{DiffAlgorithm, Edit, LcsDiff};
use derive_new::new;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static WORD_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(WORD_TOKEN_REGEX).expect("static regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WordSegmentKind {
    Equal,
    Add,
    Del,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, new)]
pub struct WordSegment {
    pub kind: WordSegmentKind,
    pub value: String,
}

impl WordSegment {
    pub fn is_equal(&self) -> bool {
        self.kind == WordSegmentKind::Equal
    }
}

/// Split into whitespace and non-whitespace runs; concatenating the tokens
/// gives back the input
pub fn tokenize(input: &str) -> Vec<&str> {
    WORD_TOKEN.find_iter(input).map(|m| m.as_str()).collect()
}

pub fn compute_word_diff(old: &str, new: &str) -> Vec<WordSegment> {
    if old == new {
        return vec![WordSegment::new(WordSegmentKind::Equal, old.to_string())];
    }

    let old_tokens = tokenize(old);
    let new_tokens = tokenize(new);

    tracing::trace!(
        old_tokens = old_tokens.len(),
        new_tokens = new_tokens.len(),
        "word diff table"
    );

    let edits = LcsDiff::new(&old_tokens, &new_tokens).diff();
    merge_edits(edits)
}

fn merge_edits(edits: Vec<Edit<&str>>) -> Vec<WordSegment> {
    let mut segments: Vec<WordSegment> = Vec::new();

    for edit in edits {
        let (kind, value) = match edit {
            Edit::Equal { value } => (WordSegmentKind::Equal, value),
            Edit::Insert { value } => (WordSegmentKind::Add, value),
            Edit::Delete { value } => (WordSegmentKind::Del, value),
        };

        match segments.last_mut() {
            Some(last) if last.kind == kind => last.value.push_str(value),
            _ => segments.push(WordSegment::new(kind, value.to_string())),
        }
    }

    segments
}
