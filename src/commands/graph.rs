use crate::OutputFormat;
use crate::artifacts::graph::commit_entry::CommitEntry;
use crate::artifacts::graph::lane_assigner::{LaneAssignment, assign_lanes};
use crate::artifacts::presentation::heat::author_color;
use crate::commands::viewer::{Viewer, hex_to_rgb};
use anyhow::Context;
use colored::Colorize;
use derive_new::new;
use serde::Serialize;
use std::collections::HashMap;

const LANE_MARKER: &str = "*";

#[derive(Debug, Clone, new)]
pub struct GraphOptions {
    pub abbrev_commit: bool,
    pub decorate: bool,
}

#[derive(Serialize)]
struct GraphRow<'e> {
    #[serde(flatten)]
    entry: &'e CommitEntry,
    #[serde(flatten)]
    lane: LaneAssignment,
}

/// Parse newest-first history lines, skipping blank ones
pub fn parse_history(input: &str) -> anyhow::Result<Vec<CommitEntry>> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            CommitEntry::try_parse(line).with_context(|| format!("history line {}", idx + 1))
        })
        .collect()
}

impl Viewer {
    pub fn graph(&self, input: &str, opts: &GraphOptions) -> anyhow::Result<()> {
        let entries = parse_history(input)?;
        let lanes = assign_lanes(&entries);

        let rows = entries
            .iter()
            .filter_map(|entry| {
                lanes
                    .get(entry.hash())
                    .map(|lane| GraphRow { entry, lane: *lane })
            })
            .collect::<Vec<_>>();

        match self.format() {
            OutputFormat::Json => self.write_json(&rows),
            OutputFormat::Text => {
                let mut authors = HashMap::new();
                for row in &rows {
                    self.show_graph_row(row, lanes.width(), &mut authors, opts)?;
                }
                Ok(())
            }
        }
    }

    fn show_graph_row(
        &self,
        row: &GraphRow,
        width: usize,
        authors: &mut HashMap<String, usize>,
        opts: &GraphOptions,
    ) -> anyhow::Result<()> {
        let entry = row.entry;
        let metadata = entry.metadata();

        let next_ordinal = authors.len();
        let ordinal = *authors
            .entry(metadata.author.clone())
            .or_insert(next_ordinal);
        let marker = match hex_to_rgb(author_color(ordinal)) {
            Some((r, g, b)) => LANE_MARKER.truecolor(r, g, b).bold(),
            None => LANE_MARKER.bold(),
        };

        let lanes = (0..width)
            .map(|lane| {
                if lane == row.lane.lane {
                    marker.to_string()
                } else {
                    " ".to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ");

        let hash = if opts.abbrev_commit {
            entry.short_hash()
        } else {
            entry.hash()
        };

        let decoration = if opts.decorate && !metadata.refs.is_empty() {
            format!(" ({})", metadata.refs.join(", "))
        } else {
            String::new()
        };

        writeln!(
            self.writer(),
            "{} {}{} {}",
            lanes,
            hash.yellow(),
            decoration.cyan(),
            metadata.message
        )?;

        Ok(())
    }
}
