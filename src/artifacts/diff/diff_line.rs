use crate::artifacts::diff::HUNK_HEADER_PREFIX;
use derive_new::new;
use serde::Serialize;

/// Prefixes of the extended header lines `git diff` emits between sections
pub const META_PREFIXES: &[&str] = &[
    "diff --git ",
    "--- ",
    "+++ ",
    "index ",
    "new file mode",
    "deleted file mode",
    "old mode",
    "new mode",
    "similarity index",
    "dissimilarity index",
    "rename from",
    "rename to",
    "copy from",
    "copy to",
    "Binary files",
    "GIT binary patch",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffLineKind {
    Add,
    Del,
    Hunk,
    Meta,
    Ctx,
}

impl From<&DiffLineKind> for &str {
    fn from(kind: &DiffLineKind) -> Self {
        match kind {
            DiffLineKind::Add => "add",
            DiffLineKind::Del => "del",
            DiffLineKind::Hunk => "hunk",
            DiffLineKind::Meta => "meta",
            DiffLineKind::Ctx => "ctx",
        }
    }
}

/// A raw diff line with its classification; the content is kept verbatim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, new)]
pub struct ParsedDiffLine<'l> {
    pub kind: DiffLineKind,
    pub content: &'l str,
}

/// Classify a single diff line without any surrounding context
///
/// Precedence is add, del, hunk header, meta, context. `+++`/`---` file
/// headers are meta, not changes.
pub fn parse_diff_line(line: &str) -> ParsedDiffLine<'_> {
    let kind = if line.starts_with('+') && !line.starts_with("+++") {
        DiffLineKind::Add
    } else if line.starts_with('-') && !line.starts_with("---") {
        DiffLineKind::Del
    } else if line.starts_with(HUNK_HEADER_PREFIX) {
        DiffLineKind::Hunk
    } else if is_meta_line(line) {
        DiffLineKind::Meta
    } else {
        DiffLineKind::Ctx
    };

    ParsedDiffLine::new(kind, line)
}

pub(crate) fn is_meta_line(line: &str) -> bool {
    META_PREFIXES.iter().any(|prefix| line.starts_with(prefix))
}
