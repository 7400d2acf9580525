//! History entries consumed by the lane assigner
//!
//! A `CommitEntry` is what the external history provider hands over for each
//! position in the log: the commit hash, its ordered parent hashes and some
//! metadata that is passed through untouched.
//!
//! ## Line format
//!
//! ```text
//! <hash>\t<parent> <parent>...\t<author>\t<iso-8601 date>\t<refs>\t<subject>
//! ```
//!
//! This is what `git log --format='%H%x09%P%x09%an%x09%aI%x09%D%x09%s'` prints.
//! Only the hash is required.

use anyhow::Context;
use derive_new::new;
use serde::Serialize;

const FIELD_SEPARATOR: char = '\t';

/// Metadata the lane engine never looks at
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, new)]
pub struct CommitMetadata {
    pub author: String,
    pub date: Option<chrono::DateTime<chrono::FixedOffset>>,
    pub refs: Vec<String>,
    pub message: String,
}

/// One commit of the history, as supplied newest-first
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitEntry {
    hash: String,
    parent_hashes: Vec<String>,
    metadata: CommitMetadata,
}

impl CommitEntry {
    pub fn new(hash: impl Into<String>, parent_hashes: Vec<String>) -> Self {
        CommitEntry {
            hash: hash.into(),
            parent_hashes,
            metadata: CommitMetadata::default(),
        }
    }

    /// Parse a single tab-separated history line
    pub fn try_parse(line: &str) -> anyhow::Result<Self> {
        let mut fields = line.split(FIELD_SEPARATOR);

        let hash = fields
            .next()
            .map(str::trim)
            .filter(|hash| !hash.is_empty())
            .ok_or_else(|| anyhow::anyhow!("missing commit hash in line '{}'", line))?;

        if hash.contains(char::is_whitespace) {
            anyhow::bail!("invalid commit hash '{}'", hash);
        }

        let parent_hashes = fields
            .next()
            .map(|parents| parents.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default();

        let author = fields.next().unwrap_or_default().trim().to_string();

        let date = match fields.next().map(str::trim) {
            Some(date) if !date.is_empty() => Some(
                chrono::DateTime::parse_from_rfc3339(date)
                    .with_context(|| format!("invalid commit date '{}'", date))?,
            ),
            _ => None,
        };

        let refs = fields
            .next()
            .map(|refs| {
                refs.split(',')
                    .map(str::trim)
                    .filter(|r| !r.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        // the subject may itself contain tabs
        let message = fields.collect::<Vec<_>>().join("\t");

        Ok(CommitEntry {
            hash: hash.to_string(),
            parent_hashes,
            metadata: CommitMetadata::new(author, date, refs, message),
        })
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    pub fn parent_hashes(&self) -> &[String] {
        &self.parent_hashes
    }

    pub fn metadata(&self) -> &CommitMetadata {
        &self.metadata
    }

    pub fn is_root(&self) -> bool {
        self.parent_hashes.is_empty()
    }

    pub fn is_merge(&self) -> bool {
        self.parent_hashes.len() > 1
    }

    pub fn short_hash(&self) -> &str {
        let end = self
            .hash
            .char_indices()
            .nth(7)
            .map(|(idx, _)| idx)
            .unwrap_or(self.hash.len());
        &self.hash[..end]
    }
}
