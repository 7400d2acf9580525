use crate::artifacts::diff::HUNK_HEADER_REGEX;
use anyhow::Context;
use regex::Regex;
use std::sync::LazyLock;

static HUNK_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(HUNK_HEADER_REGEX).expect("static regex"));

/// Ranges declared by a `@@ -a,b +c,d @@` line
///
/// A missing line count defaults to 1, as in `@@ -3 +3 @@`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HunkHeader {
    pub old_start: usize,
    pub old_lines: usize,
    pub new_start: usize,
    pub new_lines: usize,
    /// Trailing text after the closing `@@`, usually the enclosing function
    pub section: Option<String>,
}

impl HunkHeader {
    pub fn try_parse(line: &str) -> anyhow::Result<Self> {
        let caps = HUNK_HEADER
            .captures(line)
            .ok_or_else(|| anyhow::anyhow!("malformed hunk header '{}'", line))?;

        let number = |idx: usize, default: Option<usize>| -> anyhow::Result<usize> {
            match caps.get(idx) {
                Some(m) => m
                    .as_str()
                    .parse::<usize>()
                    .with_context(|| format!("invalid line number in hunk header '{}'", line)),
                None => default
                    .ok_or_else(|| anyhow::anyhow!("missing start in hunk header '{}'", line)),
            }
        };

        let section = caps
            .get(5)
            .map(|m| m.as_str().trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Ok(HunkHeader {
            old_start: number(1, None)?,
            old_lines: number(2, Some(1))?,
            new_start: number(3, None)?,
            new_lines: number(4, Some(1))?,
            section,
        })
    }
}
