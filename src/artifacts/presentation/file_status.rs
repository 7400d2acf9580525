use colored::{ColoredString, Colorize};
use serde::Serialize;

const LABEL_WIDTH: usize = 10;

/// Status of a file as reported by `git status --porcelain`
///
/// Built from the index (`X`) and worktree (`Y`) status characters.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum FileStatus {
    Untracked,
    Added,
    Deleted,
    Renamed,
    Modified,
    Copied,
    /// Any other pair, kept as its raw two-character code
    Other(String),
}

impl FileStatus {
    pub fn from_pair(index: char, worktree: char) -> Self {
        match (index, worktree) {
            ('?', '?') => FileStatus::Untracked,
            ('A', _) => FileStatus::Added,
            ('D', _) | (_, 'D') => FileStatus::Deleted,
            ('R', _) => FileStatus::Renamed,
            ('M', _) | (_, 'M') => FileStatus::Modified,
            ('C', _) => FileStatus::Copied,
            (x, y) => FileStatus::Other(format!("{x}{y}")),
        }
    }

    /// Parse the leading `XY` of a porcelain status line
    pub fn try_parse(code: &str) -> anyhow::Result<Self> {
        let mut chars = code.chars();
        match (chars.next(), chars.next()) {
            (Some(index), Some(worktree)) => Ok(Self::from_pair(index, worktree)),
            _ => anyhow::bail!("status code '{}' must have two characters", code),
        }
    }

    pub fn label(&self) -> &str {
        self.into()
    }

    /// Hex colour used by the renderer
    pub fn color(&self) -> &'static str {
        match self {
            FileStatus::Untracked => "#8b949e",
            FileStatus::Added => "#3fb950",
            FileStatus::Deleted => "#f85149",
            FileStatus::Renamed => "#a371f7",
            FileStatus::Modified => "#d29922",
            FileStatus::Copied => "#58a6ff",
            FileStatus::Other(_) => "#6e7681",
        }
    }

    pub fn colorize(&self, text: &str) -> ColoredString {
        match self {
            FileStatus::Untracked => text.dimmed(),
            FileStatus::Added => text.green(),
            FileStatus::Deleted => text.red(),
            FileStatus::Renamed => text.magenta(),
            FileStatus::Modified => text.yellow(),
            FileStatus::Copied => text.blue(),
            FileStatus::Other(_) => text.normal(),
        }
    }
}

impl<'s> From<&'s FileStatus> for &'s str {
    fn from(status: &'s FileStatus) -> Self {
        match status {
            FileStatus::Untracked => "Untracked",
            FileStatus::Added => "Added",
            FileStatus::Deleted => "Deleted",
            FileStatus::Renamed => "Renamed",
            FileStatus::Modified => "Modified",
            FileStatus::Copied => "Copied",
            FileStatus::Other(code) => code.as_str(),
        }
    }
}

impl std::fmt::Display for FileStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = format!("{:<width$}", self.label(), width = LABEL_WIDTH);
        write!(f, "{}", self.colorize(&label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case('?', '?', "Untracked")]
    #[case('A', ' ', "Added")]
    #[case('A', 'M', "Added")]
    #[case('D', ' ', "Deleted")]
    #[case(' ', 'D', "Deleted")]
    #[case('R', ' ', "Renamed")]
    #[case('M', ' ', "Modified")]
    #[case(' ', 'M', "Modified")]
    #[case('C', ' ', "Copied")]
    #[case('U', 'U', "UU")]
    #[case('!', '!', "!!")]
    fn label_for_status_pair(#[case] index: char, #[case] worktree: char, #[case] label: &str) {
        assert_eq!(FileStatus::from_pair(index, worktree).label(), label);
    }

    #[test]
    fn deletion_wins_over_rename_and_modification() {
        assert_eq!(FileStatus::from_pair('R', 'D'), FileStatus::Deleted);
        assert_eq!(FileStatus::from_pair('M', 'D'), FileStatus::Deleted);
    }

    #[test]
    fn parse_status_code() {
        assert_eq!(FileStatus::try_parse("MM").unwrap(), FileStatus::Modified);
        assert_eq!(FileStatus::try_parse("?? file.txt").unwrap(), FileStatus::Untracked);
        assert!(FileStatus::try_parse("M").is_err());
        assert!(FileStatus::try_parse("").is_err());
    }

    #[test]
    fn fallback_keeps_raw_code_and_neutral_color() {
        let status = FileStatus::from_pair('U', 'U');
        assert_eq!(status, FileStatus::Other("UU".to_string()));
        assert_eq!(status.color(), "#6e7681");
    }

    #[test]
    fn display_pads_label() {
        colored::control::set_override(false);
        assert_eq!(FileStatus::Added.to_string(), "Added     ");
    }
}
