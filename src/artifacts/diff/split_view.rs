use crate::artifacts::diff::unified_diff::{Change, ChangeKind};
use crate::artifacts::diff::word_diff::{WordSegment, compute_word_diff};
use derive_new::new;
use serde::Serialize;

/// One row of a side-by-side diff; either side may be blank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, new)]
pub struct SplitRow<'c> {
    pub left: Option<&'c Change>,
    pub right: Option<&'c Change>,
}

impl SplitRow<'_> {
    /// Word segments for a row pairing a deletion with an addition
    pub fn word_diff(&self) -> Option<Vec<WordSegment>> {
        match (self.left, self.right) {
            (Some(left), Some(right)) if left.is_del() && right.is_add() => {
                Some(compute_word_diff(&left.content, &right.content))
            }
            _ => None,
        }
    }

    pub fn is_context(&self) -> bool {
        matches!(self.left, Some(change) if change.is_ctx())
    }
}

/// Pair a hunk's changes for side-by-side display
///
/// A run of deletions directly followed by a run of additions is laid out
/// index by index, so a modified region lines up; the shorter run leaves
/// blanks. Context fills both sides, lone additions only the right.
pub fn pair_changes_for_split(changes: &[Change]) -> Vec<SplitRow<'_>> {
    let mut rows = Vec::with_capacity(changes.len());
    let mut idx = 0;

    while idx < changes.len() {
        let change = &changes[idx];
        match change.kind {
            ChangeKind::Ctx => {
                rows.push(SplitRow::new(Some(change), Some(change)));
                idx += 1;
            }
            ChangeKind::Add => {
                rows.push(SplitRow::new(None, Some(change)));
                idx += 1;
            }
            ChangeKind::Del => {
                let deletions = run_of(&changes[idx..], ChangeKind::Del);
                let additions = run_of(&changes[idx + deletions.len()..], ChangeKind::Add);

                for row in 0..deletions.len().max(additions.len()) {
                    rows.push(SplitRow::new(deletions.get(row), additions.get(row)));
                }

                idx += deletions.len() + additions.len();
            }
        }
    }

    rows
}

fn run_of(changes: &[Change], kind: ChangeKind) -> &[Change] {
    let len = changes
        .iter()
        .position(|change| change.kind != kind)
        .unwrap_or(changes.len());
    &changes[..len]
}
