use crate::OutputFormat;
use crate::artifacts::diff::split_view::{SplitRow, pair_changes_for_split};
use crate::artifacts::diff::unified_diff::{
    Change, ChangeKind, DiffStats, FileDiff, Hunk, UnifiedDiff, parse_unified_diff,
};
use crate::artifacts::diff::word_diff::{WordSegment, WordSegmentKind};
use crate::artifacts::presentation::file_status::FileStatus;
use crate::commands::viewer::Viewer;
use colored::{ColoredString, Colorize};
use derive_new::new;
use serde::Serialize;

const LINE_NO_WIDTH: usize = 4;
const STAT_BAR_WIDTH: usize = 40;

#[derive(Debug, Clone, new)]
pub struct DiffOptions {
    pub split: bool,
    pub stat: bool,
    /// Width of each side in split mode
    pub column_width: usize,
}

#[derive(Serialize)]
struct SplitHunk<'d> {
    header: &'d str,
    rows: Vec<SplitRow<'d>>,
}

#[derive(Serialize)]
struct SplitFile<'d> {
    old_path: &'d str,
    new_path: &'d str,
    status: String,
    hunks: Vec<SplitHunk<'d>>,
}

impl From<&FileDiff> for FileStatus {
    fn from(file: &FileDiff) -> Self {
        if file.is_new() {
            FileStatus::Added
        } else if file.is_deleted() {
            FileStatus::Deleted
        } else if file.is_renamed() {
            FileStatus::Renamed
        } else {
            FileStatus::Modified
        }
    }
}

impl Viewer {
    pub fn diff(&self, input: &str, opts: &DiffOptions) -> anyhow::Result<()> {
        let diff = parse_unified_diff(input);

        match (self.format(), opts.stat, opts.split) {
            (OutputFormat::Json, true, _) => self.write_json(&diff.stats),
            (OutputFormat::Json, false, true) => self.write_json(&split_files(&diff)),
            (OutputFormat::Json, false, false) => self.write_json(&diff),
            (OutputFormat::Text, true, _) => self.show_diff_stat(&diff),
            (OutputFormat::Text, false, split) => {
                for file in &diff.files {
                    self.show_file_header(file)?;
                    for hunk in &file.hunks {
                        if split {
                            self.show_split_hunk(hunk, opts.column_width)?;
                        } else {
                            self.show_unified_hunk(hunk)?;
                        }
                    }
                }
                self.show_summary(&diff.stats)
            }
        }
    }

    fn show_file_header(&self, file: &FileDiff) -> anyhow::Result<()> {
        let status = FileStatus::from(file);
        let path = if file.is_renamed() {
            format!("{} -> {}", file.old_path, file.new_path)
        } else {
            file.display_path().to_string()
        };
        let binary = if file.is_binary() { " (binary)" } else { "" };

        writeln!(self.writer(), "{} {}{}", status, path.bold(), binary)?;
        Ok(())
    }

    fn show_unified_hunk(&self, hunk: &Hunk) -> anyhow::Result<()> {
        writeln!(self.writer(), "{}", hunk.header.cyan())?;

        for change in &hunk.changes {
            let marker = match change.kind {
                ChangeKind::Add => "+",
                ChangeKind::Del => "-",
                ChangeKind::Ctx => " ",
            };
            let text = format!("{}{}", marker, change.content);

            writeln!(
                self.writer(),
                "{} {} {}",
                line_no(change.old_line_no),
                line_no(change.new_line_no),
                paint(change.kind, &text)
            )?;
        }

        Ok(())
    }

    fn show_split_hunk(&self, hunk: &Hunk, column_width: usize) -> anyhow::Result<()> {
        writeln!(self.writer(), "{}", hunk.header.cyan())?;

        for row in pair_changes_for_split(&hunk.changes) {
            let (left, right) = match row.word_diff() {
                Some(segments) => (
                    highlight(&segments, WordSegmentKind::Del, column_width),
                    highlight(&segments, WordSegmentKind::Add, column_width),
                ),
                None => (
                    side(row.left, column_width),
                    side(row.right, column_width),
                ),
            };

            writeln!(
                self.writer(),
                "{} {} │ {} {}",
                line_no(row.left.and_then(|c| c.old_line_no)),
                left,
                line_no(row.right.and_then(|c| c.new_line_no)),
                right
            )?;
        }

        Ok(())
    }

    fn show_diff_stat(&self, diff: &UnifiedDiff) -> anyhow::Result<()> {
        let path_width = diff
            .files
            .iter()
            .map(|file| file.display_path().chars().count())
            .max()
            .unwrap_or(0);
        let largest = diff
            .files
            .iter()
            .map(|file| file.stats.additions + file.stats.deletions)
            .max()
            .unwrap_or(0);

        for file in &diff.files {
            let total = file.stats.additions + file.stats.deletions;
            let (plus, minus) = scale_bar(file.stats.additions, file.stats.deletions, largest);
            let count = if file.is_binary() {
                "Bin".to_string()
            } else {
                total.to_string()
            };

            writeln!(
                self.writer(),
                " {:<width$} | {:>5} {}{}",
                file.display_path(),
                count,
                "+".repeat(plus).green(),
                "-".repeat(minus).red(),
                width = path_width
            )?;
        }

        self.show_summary(&diff.stats)
    }

    fn show_summary(&self, stats: &DiffStats) -> anyhow::Result<()> {
        writeln!(
            self.writer(),
            " {} file{} changed, {} insertion{}(+), {} deletion{}(-)",
            stats.files_changed,
            plural(stats.files_changed),
            stats.additions,
            plural(stats.additions),
            stats.deletions,
            plural(stats.deletions)
        )?;
        Ok(())
    }
}

fn split_files(diff: &UnifiedDiff) -> Vec<SplitFile<'_>> {
    diff.files
        .iter()
        .map(|file| SplitFile {
            old_path: &file.old_path,
            new_path: &file.new_path,
            status: FileStatus::from(file).label().to_string(),
            hunks: file
                .hunks
                .iter()
                .map(|hunk| SplitHunk {
                    header: &hunk.header,
                    rows: pair_changes_for_split(&hunk.changes),
                })
                .collect(),
        })
        .collect()
}

fn line_no(number: Option<usize>) -> String {
    match number {
        Some(number) => format!("{:>width$}", number, width = LINE_NO_WIDTH),
        None => " ".repeat(LINE_NO_WIDTH),
    }
}

fn paint(kind: ChangeKind, text: &str) -> ColoredString {
    match kind {
        ChangeKind::Add => text.green(),
        ChangeKind::Del => text.red(),
        ChangeKind::Ctx => text.normal(),
    }
}

fn fit(text: &str, width: usize) -> String {
    let truncated: String = text.chars().take(width).collect();
    format!("{:<width$}", truncated, width = width)
}

fn side(change: Option<&Change>, width: usize) -> String {
    match change {
        Some(change) => paint(change.kind, &fit(&change.content, width)).to_string(),
        None => " ".repeat(width),
    }
}

/// One side of a paired row, with the changed words emphasised
fn highlight(segments: &[WordSegment], changed: WordSegmentKind, width: usize) -> String {
    let mut remaining = width;
    let mut out = String::new();

    for segment in segments
        .iter()
        .filter(|segment| segment.is_equal() || segment.kind == changed)
    {
        let text: String = segment.value.chars().take(remaining).collect();
        remaining -= text.chars().count();

        let painted = match (segment.is_equal(), changed) {
            (true, WordSegmentKind::Del) => text.red(),
            (true, _) => text.green(),
            (false, WordSegmentKind::Del) => text.red().bold().underline(),
            (false, _) => text.green().bold().underline(),
        };
        out.push_str(&painted.to_string());
    }

    out.push_str(&" ".repeat(remaining));
    out
}

/// Split a `+`/`-` bar so the largest file fills `STAT_BAR_WIDTH`
fn scale_bar(additions: usize, deletions: usize, largest: usize) -> (usize, usize) {
    let total = additions + deletions;
    if total == 0 || largest <= STAT_BAR_WIDTH {
        return (additions, deletions);
    }

    let scaled = (total * STAT_BAR_WIDTH).div_ceil(largest);
    let plus = (additions * scaled).div_ceil(total).min(scaled);
    (plus, scaled - plus)
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}
