//! `analyze` command: per-file n-gram statistics, console tables and JSON export.

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use is_terminal::IsTerminal;
use log::{debug, info};
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use letterstat_core::{
    analyze_text, build_report, merge_config, ranked_monograms, Alphabet, AnalysisConfig, CountPolicy,
    NgramOrder, SheetData, TextAnalysis, TextReport,
};

use crate::cli::AnalyzeCommand;
use crate::commands::{error_msg, info_msg, success_msg, warn_msg};
use crate::input::read_text;
use crate::ui::bar_chart::BarChart;
use crate::ui::output_format::{print_header, print_tagged};
use crate::ui::tables::{display_label, metrics_table, ranking_table};
use crate::ui::theme::ThemeMap;

/// Everything written for one file by `--stats-dir` and `--json-stdout`.
#[derive(Debug, Serialize)]
pub struct ExportedReport {
    pub generated_at: DateTime<Utc>,
    pub tool_version: &'static str,
    pub encoding: &'static str,
    #[serde(flatten)]
    pub report: TextReport,
}

/// Loads the embedded defaults and merges the user's file over them.
pub fn load_config(path: Option<&PathBuf>) -> Result<AnalysisConfig> {
    let default_config = AnalysisConfig::load_default().context("Failed to load default analysis config")?;
    let user_config = match path {
        Some(path) => Some(AnalysisConfig::load_from_file(path)?),
        None => None,
    };
    Ok(merge_config(default_config, user_config))
}

/// Path of the JSON export for `input` inside `stats_dir`.
pub fn stats_path(stats_dir: &Path, input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "input".to_string());
    stats_dir.join(format!("{}_stats.json", stem))
}

pub fn write_stats_file(stats_dir: &Path, input: &Path, export: &ExportedReport) -> Result<PathBuf> {
    fs::create_dir_all(stats_dir)
        .with_context(|| format!("Failed to create stats directory {}", stats_dir.display()))?;
    let path = stats_path(stats_dir, input);
    let file = fs::File::create(&path).with_context(|| format!("Failed to create stats file {}", path.display()))?;
    serde_json::to_writer_pretty(io::BufWriter::new(file), export)
        .with_context(|| format!("Failed to write stats file {}", path.display()))?;
    Ok(path)
}

/// Runs the analysis over every file, reporting failures and carrying on.
///
/// Returns an error at the end if at least one file could not be analyzed.
pub fn run_analyze(cmd: &AnalyzeCommand, quiet: bool, theme_map: &ThemeMap) -> Result<()> {
    info!("Starting analyze over {} file(s).", cmd.files.len());
    let config = load_config(cmd.config.as_ref())?;
    if let (Some(path), false) = (&cmd.config, quiet) {
        info_msg(
            format!("Using analysis config {} ({} policies).", path.display(), config.policies.len()),
            theme_map,
        );
    }
    let alphabet = Alphabet::cyrillic();

    let mut exports = Vec::new();
    let mut failed = 0usize;

    for path in &cmd.files {
        match analyze_file(path, &config, alphabet, cmd, quiet, theme_map) {
            Ok(Some(export)) => exports.push(export),
            Ok(None) => {}
            Err(e) => {
                failed += 1;
                error_msg(format!("{}: {:#}", path.display(), e), theme_map);
            }
        }
    }

    if cmd.json_stdout {
        let stdout = io::stdout();
        let mut writer = stdout.lock();
        serde_json::to_writer_pretty(&mut writer, &exports).context("Failed to write JSON to stdout")?;
        writeln!(writer)?;
    }

    if failed > 0 {
        bail!("{} of {} file(s) could not be analyzed", failed, cmd.files.len());
    }
    info!("Analyze operation completed.");
    Ok(())
}

/// Analyzes one file. Returns the export when `--json-stdout` needs it later.
fn analyze_file(
    path: &Path,
    config: &AnalysisConfig,
    alphabet: &Alphabet,
    cmd: &AnalyzeCommand,
    quiet: bool,
    theme_map: &ThemeMap,
) -> Result<Option<ExportedReport>> {
    let decoded = read_text(path)?;
    debug!("{}: {} characters decoded from {}.", path.display(), decoded.text.chars().count(), decoded.encoding);

    let analysis = analyze_text(&decoded.text, alphabet, config);
    let export = ExportedReport {
        generated_at: Utc::now(),
        tool_version: env!("CARGO_PKG_VERSION"),
        encoding: decoded.encoding,
        report: build_report(&path.display().to_string(), &analysis, alphabet),
    };

    if let Some(stats_dir) = &cmd.stats_dir {
        let written = write_stats_file(stats_dir, path, &export)?;
        if !quiet {
            success_msg(format!("Statistics written to {}", written.display()), theme_map);
        }
    }

    if cmd.json_stdout {
        return Ok(Some(export));
    }

    let stdout = io::stdout();
    let mut writer = stdout.lock();
    let supports_color = stdout.is_terminal();
    print_console_report(&mut writer, &export, &analysis, config, cmd, theme_map, supports_color)?;

    if analysis.failures() > 0 && !quiet {
        warn_msg(
            format!("{}: {} policy combination(s) had no observations.", path.display(), analysis.failures()),
            theme_map,
        );
    }
    Ok(None)
}

/// Prints the per-file console section: header, encoding, metrics, ranking, chart.
pub fn print_console_report<W: Write>(
    writer: &mut W,
    export: &ExportedReport,
    analysis: &TextAnalysis,
    config: &AnalysisConfig,
    cmd: &AnalyzeCommand,
    theme_map: &ThemeMap,
    supports_color: bool,
) -> Result<()> {
    let report = &export.report;
    let precision = config.report.precision();

    print_header(writer, &report.source, theme_map, supports_color)?;
    print_tagged(writer, "Encoding", export.encoding, theme_map, supports_color)?;
    print_tagged(writer, "Text length", &report.text_length.to_string(), theme_map, supports_color)?;
    writeln!(writer, "{}", metrics_table(&report.metrics, precision, theme_map, supports_color))?;

    let top = cmd.top.unwrap_or_else(|| config.report.top());
    if top > 0 {
        let ranking = report
            .sheets
            .iter()
            .filter(|sheet| sheet.name.starts_with("MG_FR"))
            .chain(report.sheets.iter().filter(|sheet| sheet.name.starts_with("CO_MG")))
            .find_map(|sheet| match &sheet.data {
                SheetData::Ranking { column, rows } => Some((sheet, column, rows)),
                SheetData::Matrix { .. } => None,
            });
        if let Some((sheet, column, rows)) = ranking {
            print_tagged(writer, "Top letters", &sheet.policy.to_string(), theme_map, supports_color)?;
            writeln!(writer, "{}", ranking_table(column, rows, top, precision, theme_map, supports_color))?;
        }
    }

    if cmd.chart {
        print_frequency_chart(writer, analysis, config, &report.source, theme_map, supports_color)?;
    }
    Ok(())
}

/// Charts monogram frequencies, preferring the whitespace-inclusive policy.
fn print_frequency_chart<W: Write>(
    writer: &mut W,
    analysis: &TextAnalysis,
    config: &AnalysisConfig,
    source: &str,
    theme_map: &ThemeMap,
    supports_color: bool,
) -> Result<()> {
    let metrics = [CountPolicy::monogram(true), CountPolicy::monogram(false)]
        .into_iter()
        .filter_map(|policy| analysis.get(policy))
        .chain(analysis.policies.iter().filter(|p| p.policy.order == NgramOrder::Monogram))
        .find_map(|entry| entry.metrics.as_ref().ok());

    let Some(metrics) = metrics else {
        debug!("No monogram frequencies available for {}; skipping chart.", source);
        return Ok(());
    };

    let entries = ranked_monograms(&metrics.distribution, Alphabet::cyrillic())
        .into_iter()
        .map(|(label, p)| (display_label(&label), p))
        .collect();
    let chart = BarChart::from_entries(entries, config.report.chart_width())?
        .with_title(Some(format!("Letter frequencies: {}", source)))
        .with_axis_labels(Some("frequency".to_string()), Some("letter".to_string()))
        .with_values(true);
    chart.render(writer, theme_map, supports_color)?;
    Ok(())
}
