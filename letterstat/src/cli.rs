// letterstat/src/cli.rs
//! This file defines the command-line interface (CLI) for the letterstat application,
//! including all available commands and their arguments.
//! License: MIT OR Apache-2.0

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "letterstat",
    author = "Obscura Team",
    version = env!("CARGO_PKG_VERSION"),
    about = "Letter and bigram statistics, entropy and redundancy of Cyrillic text",
    long_about = "Letterstat counts letters and letter pairs in Cyrillic text corpora, estimates their frequencies and reports Shannon entropy per symbol and redundancy relative to a uniform alphabet, with and without whitespace and for overlapping and disjoint bigrams.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG for the letterstat crates to DEBUG)
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// Explicitly disable debug logging, even if RUST_LOG is set to DEBUG
    #[arg(long = "disable-debug", global = true, help = "Disable debug logging, overriding RUST_LOG.")]
    pub disable_debug: bool,

    /// Specify the path to a custom YAML theme file.
    #[arg(long = "theme", value_name = "FILE", global = true, help = "Specify the path to a custom YAML theme file.")]
    pub theme: Option<PathBuf>,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `letterstat` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Counts n-grams in one or more files and reports entropy and redundancy.
    #[command(about = "Counts n-grams in one or more files and reports entropy and redundancy.")]
    Analyze(AnalyzeCommand),

    /// Draws a horizontal bar chart of a labeled series.
    #[command(about = "Draws a horizontal bar chart of a labeled series.")]
    Chart(ChartCommand),

    /// Estimates redundancy from lower/upper entropy bounds.
    #[command(about = "Estimates redundancy from lower/upper entropy bounds.")]
    Redundancy(RedundancyCommand),
}

/// Arguments for the `analyze` command.
#[derive(Args, Debug)]
pub struct AnalyzeCommand {
    /// Text files to analyze.
    #[arg(long, short = 'f', value_name = "FILE", num_args = 1.., required = true, help = "Text files to analyze.")]
    pub files: Vec<PathBuf>,

    /// Path to a custom analysis configuration file (YAML).
    #[arg(long = "config", value_name = "FILE", help = "Path to a custom analysis configuration file (YAML).")]
    pub config: Option<PathBuf>,

    /// Directory receiving one `<stem>_stats.json` per input file.
    #[arg(long = "stats-dir", value_name = "DIR", help = "Write the full report of each file as JSON into this directory.")]
    pub stats_dir: Option<PathBuf>,

    /// Print reports as JSON to stdout instead of tables.
    #[arg(long = "json-stdout", help = "Print the reports to stdout as JSON instead of tables.")]
    pub json_stdout: bool,

    /// Number of monograms shown in the console ranking.
    #[arg(long = "top", value_name = "N", help = "Show the N most frequent letters (overrides the config).")]
    pub top: Option<usize>,

    /// Draw a bar chart of letter frequencies.
    #[arg(long = "chart", help = "Draw a bar chart of letter frequencies (with whitespace).")]
    pub chart: bool,
}

/// Arguments for the `chart` command.
#[derive(Args, Debug)]
pub struct ChartCommand {
    /// JSON file holding `[{"label": ..., "value": ...}, ...]`.
    #[arg(long, short = 'i', value_name = "FILE", conflicts_with_all = ["labels", "values"], required_unless_present = "labels", help = "Read the series from a JSON file of {label, value} objects.")]
    pub input: Option<PathBuf>,

    #[arg(long, value_delimiter = ',', requires = "values", help = "Comma-separated bar labels.")]
    pub labels: Vec<String>,

    #[arg(long, value_delimiter = ',', allow_negative_numbers = true, requires = "labels", help = "Comma-separated bar values.")]
    pub values: Vec<f64>,

    #[arg(long, help = "Chart title.")]
    pub title: Option<String>,

    #[arg(long = "x-label", help = "Label printed below the bars.")]
    pub x_label: Option<String>,

    #[arg(long = "y-label", help = "Label printed above the bar labels.")]
    pub y_label: Option<String>,

    #[arg(long = "show-values", help = "Print each value next to its bar.")]
    pub show_values: bool,

    #[arg(long, value_name = "N", default_value_t = 50, help = "Width of the longest bar in characters.")]
    pub width: usize,

    /// Write the chart to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write the chart to a file instead of stdout.")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `redundancy` command.
#[derive(Args, Debug)]
pub struct RedundancyCommand {
    /// Named bounds such as `H10=3.196:3.555`.
    #[arg(long = "estimate", value_name = "NAME=LOW:HIGH", required = true, help = "Entropy bounds to average, e.g. H10=3.196:3.555 (repeatable).")]
    pub estimates: Vec<String>,

    #[arg(long = "alphabet-size", value_name = "N", default_value_t = 32, help = "Alphabet size of the uniform baseline.")]
    pub alphabet_size: usize,

    #[arg(long, value_name = "N", default_value_t = 4, help = "Decimal places in the output.")]
    pub precision: usize,
}
