//! `chart` command: renders a labeled series from a JSON file or the command line.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::info;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;

use crate::cli::ChartCommand;
use crate::commands::success_msg;
use crate::ui::bar_chart::BarChart;
use crate::ui::theme::ThemeMap;

/// One bar of a series file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

/// Reads `[{"label": "а", "value": 0.08}, ...]` from `path`.
pub fn load_series(path: &Path) -> Result<Vec<SeriesPoint>> {
    let text = fs::read_to_string(path).with_context(|| format!("Failed to read series file {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Failed to parse series file {}", path.display()))
}

/// Builds the chart described by `cmd` without rendering it.
pub fn build_chart(cmd: &ChartCommand) -> Result<BarChart> {
    let chart = match &cmd.input {
        Some(path) => {
            let entries = load_series(path)?.into_iter().map(|p| (p.label, p.value)).collect();
            BarChart::from_entries(entries, cmd.width)?
        }
        None => BarChart::new(cmd.labels.clone(), cmd.values.clone(), cmd.width)?,
    };
    Ok(chart
        .with_title(cmd.title.clone())
        .with_axis_labels(cmd.x_label.clone(), cmd.y_label.clone())
        .with_values(cmd.show_values))
}

pub fn run_chart(cmd: &ChartCommand, quiet: bool, theme_map: &ThemeMap) -> Result<()> {
    let chart = build_chart(cmd)?;
    info!("Rendering chart with {} bars.", chart.entries().len());

    match &cmd.output {
        Some(path) => {
            let mut file = fs::File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            chart.render(&mut file, theme_map, false)?;
            if !quiet {
                success_msg(format!("Chart written to {}", path.display()), theme_map);
            }
        }
        None => {
            let stdout = io::stdout();
            let supports_color = stdout.is_terminal();
            chart.render(&mut stdout.lock(), theme_map, supports_color)?;
        }
    }
    Ok(())
}
