use anyhow::Result;
use clap::{Parser, Subcommand};
use histview::commands::diff::DiffOptions;
use histview::commands::graph::GraphOptions;
use histview::commands::pager::Output;
use histview::commands::viewer::{Viewer, read_input};
use histview::commands::word_diff::{DEFAULT_MAX_TOKENS, WordDiffOptions};
use histview::{ColorMode, OutputFormat};
use is_terminal::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "histview",
    version = "0.1.0",
    about = "Commit graph lanes and structured diffs",
    long_about = "Lays out a commit history as graph lanes and turns unified diff text \
    into structured files, hunks and word-level changes. \
    Input comes from files or stdin, typically piped from git.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, global = true, help = "Enable debug logging")]
    verbose: bool,
    #[arg(long, global = true, value_enum, default_value_t = ColorMode::Auto, help = "When to colour the output")]
    color: ColorMode,
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text, help = "Output format")]
    format: OutputFormat,
    #[arg(long, global = true, help = "Never page the output")]
    no_pager: bool,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "graph",
        about = "Assign graph lanes to a commit history",
        long_about = "Reads one commit per line, newest first, as produced by \
        git log --format='%H%x09%P%x09%an%x09%aI%x09%D%x09%s', and prints each commit in its lane."
    )]
    Graph {
        #[arg(index = 1, help = "History file (defaults to stdin)")]
        file: Option<PathBuf>,
        #[arg(long, help = "Show abbreviated commit hashes")]
        abbrev_commit: bool,
        #[arg(long, help = "Show ref names next to commits")]
        decorate: bool,
    },
    #[command(
        name = "diff",
        about = "Parse unified diff text",
        long_about = "Parses the output of git diff into files, hunks and line changes \
        and prints them with line numbers, side by side, or as a diffstat."
    )]
    Diff {
        #[arg(index = 1, help = "Diff file (defaults to stdin)")]
        file: Option<PathBuf>,
        #[arg(long, help = "Show old and new content side by side")]
        split: bool,
        #[arg(long, conflicts_with = "split", help = "Show only per-file statistics")]
        stat: bool,
        #[arg(long, default_value_t = 60, help = "Width of each side in split mode")]
        column_width: usize,
    },
    #[command(
        name = "word-diff",
        about = "Compare two strings word by word",
        long_about = "Prints the word-level difference between OLD and NEW, \
        marking removed words as [-word-] and added words as {+word+}."
    )]
    WordDiff {
        #[arg(index = 1)]
        old: String,
        #[arg(index = 2)]
        new: String,
        #[arg(long, default_value_t = DEFAULT_MAX_TOKENS, help = "Refuse inputs with more tokens than this")]
        max_tokens: usize,
    },
    #[command(
        name = "status",
        about = "Label porcelain status codes",
        long_about = "Maps two-character git status --porcelain codes (e.g. '??', 'M ', ' D') to labels."
    )]
    Status {
        #[arg(required = true, num_args = 1.., help = "Status codes")]
        codes: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.color {
        ColorMode::Always => colored::control::set_override(true),
        ColorMode::Never => colored::control::set_override(false),
        ColorMode::Auto => {
            if !std::io::stdout().is_terminal() {
                colored::control::set_override(false);
            }
        }
    }

    let paging_allowed = !cli.no_pager && cli.format == OutputFormat::Text;

    match &cli.command {
        Commands::Graph {
            file,
            abbrev_commit,
            decorate,
        } => {
            let input = read_input(file.as_deref())?;
            let output = Output::select(paging_allowed);
            let viewer = Viewer::new(output.writer(), cli.format);

            viewer.graph(&input, &GraphOptions::new(*abbrev_commit, *decorate))?;
            output.finish()?
        }
        Commands::Diff {
            file,
            split,
            stat,
            column_width,
        } => {
            let input = read_input(file.as_deref())?;
            let output = Output::select(paging_allowed && !*stat);
            let viewer = Viewer::new(output.writer(), cli.format);

            viewer.diff(&input, &DiffOptions::new(*split, *stat, *column_width))?;
            output.finish()?
        }
        Commands::WordDiff {
            old,
            new,
            max_tokens,
        } => {
            let viewer = Viewer::new(Box::new(std::io::stdout()), cli.format);
            viewer.word_diff(old, new, &WordDiffOptions::new(*max_tokens))?
        }
        Commands::Status { codes } => {
            let viewer = Viewer::new(Box::new(std::io::stdout()), cli.format);
            viewer.status(codes)?
        }
    }

    Ok(())
}
