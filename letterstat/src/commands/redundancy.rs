//! `redundancy` command: redundancy estimates from entropy bounds.

use anyhow::{anyhow, Context, Result};
use is_terminal::IsTerminal;
use std::io::{self, Write};

use letterstat_core::{redundancy_from_bounds, BoundsEstimate};

use crate::cli::RedundancyCommand;
use crate::ui::tables::estimates_table;
use crate::ui::theme::ThemeMap;

/// A named pair of entropy bounds, e.g. `H10=3.196:3.555`.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedBounds {
    pub name: String,
    pub low: f64,
    pub high: f64,
}

/// Parses `NAME=LOW:HIGH`.
pub fn parse_estimate(raw: &str) -> Result<NamedBounds> {
    let (name, bounds) = raw
        .split_once('=')
        .ok_or_else(|| anyhow!("Expected NAME=LOW:HIGH, got '{}'", raw))?;
    let (low, high) = bounds
        .split_once(':')
        .ok_or_else(|| anyhow!("Expected LOW:HIGH after '{}=', got '{}'", name, bounds))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(anyhow!("Estimate name is empty in '{}'", raw));
    }
    let low: f64 = low.trim().parse().with_context(|| format!("Invalid lower bound in '{}'", raw))?;
    let high: f64 = high.trim().parse().with_context(|| format!("Invalid upper bound in '{}'", raw))?;

    Ok(NamedBounds { name: name.to_string(), low, high })
}

/// Estimates every named pair against a uniform alphabet of `alphabet_size` symbols.
pub fn estimate_all(raw: &[String], alphabet_size: usize) -> Result<Vec<(String, BoundsEstimate)>> {
    raw.iter()
        .map(|entry| {
            let bounds = parse_estimate(entry)?;
            let estimate = redundancy_from_bounds(&[bounds.low, bounds.high], alphabet_size)
                .with_context(|| format!("Cannot estimate redundancy for {}", bounds.name))?;
            Ok((bounds.name, estimate))
        })
        .collect()
}

pub fn run_redundancy(cmd: &RedundancyCommand, theme_map: &ThemeMap) -> Result<()> {
    let estimates = estimate_all(&cmd.estimates, cmd.alphabet_size)?;

    let stdout = io::stdout();
    let supports_color = stdout.is_terminal();
    let mut writer = stdout.lock();
    writeln!(writer, "{}", estimates_table(&estimates, cmd.precision, theme_map, supports_color))?;
    Ok(())
}
