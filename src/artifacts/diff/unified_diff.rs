//! Unified diff parser
//!
//! Turns the text produced by `git diff` into files, hunks and line changes.
//!
//! ## Format
//!
//! ```text
//! diff --git a/<old path> b/<new path>
//! [extended header lines: new file mode, rename from, index, ...]
//! --- a/<old path> | /dev/null
//! +++ b/<new path> | /dev/null
//! @@ -<old start>[,<old lines>] +<new start>[,<new lines>] @@ [section]
//! <' ' | '+' | '-'><line>
//! ```
//!
//! The parser never fails. Lines outside a `diff --git` section are ignored,
//! a malformed hunk header drops that hunk and everything up to the next
//! valid header, and unknown lines inside a hunk are read as context.
//! File and global statistics are running sums updated as changes are read.

use crate::artifacts::diff::hunk_header::HunkHeader;
use crate::artifacts::diff::{DEV_NULL, FILE_HEADER_PREFIX, HUNK_HEADER_PREFIX};
use bitflags::bitflags;
use derive_new::new;
use serde::Serialize;
use serde::ser::{SerializeStruct, Serializer};

const NO_NEWLINE_MARKER: char = '\\';

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct FileFlags: u8 {
        const BINARY = 0b0001;
        const RENAMED = 0b0010;
        const NEW = 0b0100;
        const DELETED = 0b1000;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Add,
    Del,
    Ctx,
}

/// One line of a hunk, without its leading marker
///
/// Context and deletions carry the old line number, context and additions
/// the new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, new)]
pub struct Change {
    pub kind: ChangeKind,
    pub content: String,
    pub old_line_no: Option<usize>,
    pub new_line_no: Option<usize>,
}

impl Change {
    pub fn is_add(&self) -> bool {
        self.kind == ChangeKind::Add
    }

    pub fn is_del(&self) -> bool {
        self.kind == ChangeKind::Del
    }

    pub fn is_ctx(&self) -> bool {
        self.kind == ChangeKind::Ctx
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hunk {
    pub header: String,
    pub old_start: usize,
    pub old_lines: usize,
    pub new_start: usize,
    pub new_lines: usize,
    pub section: Option<String>,
    pub changes: Vec<Change>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FileStats {
    pub additions: usize,
    pub deletions: usize,
}

/// One `diff --git` section
///
/// Serializes its flags as `is_binary`, `is_renamed`, `is_new` and
/// `is_deleted` booleans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDiff {
    pub old_path: String,
    pub new_path: String,
    pub flags: FileFlags,
    pub hunks: Vec<Hunk>,
    pub stats: FileStats,
}

impl FileDiff {
    fn from_header(line: &str) -> Self {
        let (old_path, new_path) = parse_header_paths(&line[FILE_HEADER_PREFIX.len()..]);

        FileDiff {
            old_path,
            new_path,
            flags: FileFlags::empty(),
            hunks: Vec::new(),
            stats: FileStats::default(),
        }
    }

    pub fn is_binary(&self) -> bool {
        self.flags.contains(FileFlags::BINARY)
    }

    pub fn is_renamed(&self) -> bool {
        self.flags.contains(FileFlags::RENAMED)
    }

    pub fn is_new(&self) -> bool {
        self.flags.contains(FileFlags::NEW)
    }

    pub fn is_deleted(&self) -> bool {
        self.flags.contains(FileFlags::DELETED)
    }

    /// Path to show for this file: the new path, or the old one for deletions
    pub fn display_path(&self) -> &str {
        if self.is_deleted() || self.new_path == DEV_NULL {
            &self.old_path
        } else {
            &self.new_path
        }
    }

    fn apply_meta(&mut self, line: &str) {
        if let Some(path) = line.strip_prefix("--- ") {
            let path = strip_side_prefix(path, "a/");
            if path == DEV_NULL {
                self.flags.insert(FileFlags::NEW);
            }
            self.old_path = path;
        } else if let Some(path) = line.strip_prefix("+++ ") {
            let path = strip_side_prefix(path, "b/");
            if path == DEV_NULL {
                self.flags.insert(FileFlags::DELETED);
            }
            self.new_path = path;
        } else if line.starts_with("new file mode") {
            self.flags.insert(FileFlags::NEW);
            self.old_path = DEV_NULL.to_string();
        } else if line.starts_with("deleted file mode") {
            self.flags.insert(FileFlags::DELETED);
            self.new_path = DEV_NULL.to_string();
        } else if let Some(path) = line.strip_prefix("rename from ") {
            self.flags.insert(FileFlags::RENAMED);
            self.old_path = path.to_string();
        } else if let Some(path) = line.strip_prefix("rename to ") {
            self.flags.insert(FileFlags::RENAMED);
            self.new_path = path.to_string();
        } else if line.starts_with("Binary files") || line.starts_with("GIT binary patch") {
            self.flags.insert(FileFlags::BINARY);
        }
    }
}

impl Serialize for FileDiff {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("FileDiff", 8)?;
        state.serialize_field("old_path", &self.old_path)?;
        state.serialize_field("new_path", &self.new_path)?;
        state.serialize_field("is_binary", &self.is_binary())?;
        state.serialize_field("is_renamed", &self.is_renamed())?;
        state.serialize_field("is_new", &self.is_new())?;
        state.serialize_field("is_deleted", &self.is_deleted())?;
        state.serialize_field("hunks", &self.hunks)?;
        state.serialize_field("stats", &self.stats)?;
        state.end()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiffStats {
    pub files_changed: usize,
    pub additions: usize,
    pub deletions: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UnifiedDiff {
    pub files: Vec<FileDiff>,
    pub stats: DiffStats,
}

/// Open hunk plus its running line counters
#[derive(Debug)]
struct HunkCursor {
    hunk: Hunk,
    old_line_no: usize,
    new_line_no: usize,
    old_remaining: usize,
    new_remaining: usize,
}

impl HunkCursor {
    fn new(line: &str, header: HunkHeader) -> Self {
        HunkCursor {
            old_line_no: header.old_start,
            new_line_no: header.new_start,
            old_remaining: header.old_lines,
            new_remaining: header.new_lines,
            hunk: Hunk {
                header: line.to_string(),
                old_start: header.old_start,
                old_lines: header.old_lines,
                new_start: header.new_start,
                new_lines: header.new_lines,
                section: header.section,
                changes: Vec::new(),
            },
        }
    }

    /// Read one hunk body line; `None` when the line belongs to the file header
    fn read(&mut self, line: &str) -> Option<ChangeKind> {
        let change = if let Some(content) = line.strip_prefix('+') {
            if line.starts_with("+++") && self.new_remaining == 0 {
                return None;
            }
            let change = Change::new(
                ChangeKind::Add,
                content.to_string(),
                None,
                Some(self.new_line_no),
            );
            self.new_line_no = self.new_line_no.saturating_add(1);
            self.new_remaining = self.new_remaining.saturating_sub(1);
            change
        } else if let Some(content) = line.strip_prefix('-') {
            if line.starts_with("---") && self.old_remaining == 0 {
                return None;
            }
            let change = Change::new(
                ChangeKind::Del,
                content.to_string(),
                Some(self.old_line_no),
                None,
            );
            self.old_line_no = self.old_line_no.saturating_add(1);
            self.old_remaining = self.old_remaining.saturating_sub(1);
            change
        } else {
            let content = line.strip_prefix(' ').unwrap_or(line);
            let change = Change::new(
                ChangeKind::Ctx,
                content.to_string(),
                Some(self.old_line_no),
                Some(self.new_line_no),
            );
            self.old_line_no = self.old_line_no.saturating_add(1);
            self.new_line_no = self.new_line_no.saturating_add(1);
            self.old_remaining = self.old_remaining.saturating_sub(1);
            self.new_remaining = self.new_remaining.saturating_sub(1);
            change
        };

        let kind = change.kind;
        self.hunk.changes.push(change);
        Some(kind)
    }
}

/// Line-by-line parser state
#[derive(Debug, Default)]
pub struct UnifiedDiffParser {
    files: Vec<FileDiff>,
    file: Option<FileDiff>,
    hunk: Option<HunkCursor>,
    /// Set after a malformed hunk header until the next header line
    skipping_hunk: bool,
    stats: DiffStats,
}

impl UnifiedDiffParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feed(&mut self, line: &str) {
        if line.starts_with(FILE_HEADER_PREFIX) {
            self.close_file();
            self.skipping_hunk = false;
            self.file = Some(FileDiff::from_header(line));
            return;
        }

        if self.file.is_none() {
            return;
        }

        if line.starts_with(HUNK_HEADER_PREFIX) {
            self.close_hunk();
            match HunkHeader::try_parse(line) {
                Ok(header) => {
                    self.skipping_hunk = false;
                    self.hunk = Some(HunkCursor::new(line, header));
                }
                Err(err) => {
                    tracing::debug!("skipping hunk: {err}");
                    self.skipping_hunk = true;
                }
            }
            return;
        }

        if self.skipping_hunk || line.starts_with(NO_NEWLINE_MARKER) {
            return;
        }

        if let Some(cursor) = self.hunk.as_mut() {
            match cursor.read(line) {
                Some(ChangeKind::Add) => self.count(FileStats {
                    additions: 1,
                    deletions: 0,
                }),
                Some(ChangeKind::Del) => self.count(FileStats {
                    additions: 0,
                    deletions: 1,
                }),
                Some(ChangeKind::Ctx) => {}
                None => self.apply_meta(line),
            }
            return;
        }

        self.apply_meta(line);
    }

    pub fn finish(mut self) -> UnifiedDiff {
        self.close_file();

        UnifiedDiff {
            files: self.files,
            stats: self.stats,
        }
    }

    fn apply_meta(&mut self, line: &str) {
        if let Some(file) = self.file.as_mut() {
            file.apply_meta(line);
        }
    }

    fn count(&mut self, delta: FileStats) {
        if let Some(file) = self.file.as_mut() {
            file.stats.additions += delta.additions;
            file.stats.deletions += delta.deletions;
        }
        self.stats.additions += delta.additions;
        self.stats.deletions += delta.deletions;
    }

    fn close_hunk(&mut self) {
        if let Some(cursor) = self.hunk.take()
            && let Some(file) = self.file.as_mut()
        {
            file.hunks.push(cursor.hunk);
        }
    }

    fn close_file(&mut self) {
        self.close_hunk();
        if let Some(file) = self.file.take() {
            self.stats.files_changed += 1;
            self.files.push(file);
        }
    }
}

pub fn parse_unified_diff(raw: &str) -> UnifiedDiff {
    let mut parser = UnifiedDiffParser::new();
    for line in raw.lines() {
        parser.feed(line);
    }

    let diff = parser.finish();
    tracing::debug!(
        files = diff.stats.files_changed,
        additions = diff.stats.additions,
        deletions = diff.stats.deletions,
        "parsed unified diff"
    );

    diff
}

/// Split `a/<old> b/<new>` into its two paths
fn parse_header_paths(paths: &str) -> (String, String) {
    if let Some(idx) = paths.find(" b/") {
        let old = &paths[..idx];
        let new = &paths[idx + 1..];
        (strip_side_prefix(old, "a/"), strip_side_prefix(new, "b/"))
    } else if let Some((old, new)) = paths.split_once(' ') {
        (strip_side_prefix(old, "a/"), strip_side_prefix(new, "b/"))
    } else {
        let path = strip_side_prefix(paths, "a/");
        (path.clone(), path)
    }
}

fn strip_side_prefix(path: &str, prefix: &str) -> String {
    // plain `diff -u` appends a tab and a timestamp to the path
    let path = path.split('\t').next().unwrap_or(path).trim_end();
    path.strip_prefix(prefix).unwrap_or(path).to_string()
}
