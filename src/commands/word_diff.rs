use crate::OutputFormat;
use crate::artifacts::diff::word_diff::{WordSegmentKind, compute_word_diff, tokenize};
use crate::commands::viewer::Viewer;
use colored::Colorize;
use derive_new::new;

pub const DEFAULT_MAX_TOKENS: usize = 2000;

#[derive(Debug, Clone, new)]
pub struct WordDiffOptions {
    /// Reject inputs with more tokens than this on either side
    pub max_tokens: usize,
}

impl Viewer {
    pub fn word_diff(&self, old: &str, new: &str, opts: &WordDiffOptions) -> anyhow::Result<()> {
        for (side, text) in [("old", old), ("new", new)] {
            let tokens = tokenize(text).len();
            if tokens > opts.max_tokens {
                anyhow::bail!(
                    "{} input has {} tokens, limit is {}",
                    side,
                    tokens,
                    opts.max_tokens
                );
            }
        }

        let segments = compute_word_diff(old, new);

        match self.format() {
            OutputFormat::Json => self.write_json(&segments),
            OutputFormat::Text => {
                // git --word-diff=plain markers, so the output reads without colour
                let line = segments
                    .iter()
                    .map(|segment| match segment.kind {
                        WordSegmentKind::Equal => segment.value.normal().to_string(),
                        WordSegmentKind::Del => format!("[-{}-]", segment.value).red().to_string(),
                        WordSegmentKind::Add => {
                            format!("{{+{}+}}", segment.value).green().to_string()
                        }
                    })
                    .collect::<String>();

                writeln!(self.writer(), "{}", line)?;
                Ok(())
            }
        }
    }
}
