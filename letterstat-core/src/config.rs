//! Configuration management for `letterstat-core`.
//!
//! This module defines the analysis settings: which counting policies run,
//! whether the raw text is trimmed first, and presentation hints for
//! reporters. Settings are read from YAML, with defaults embedded in the
//! library and user files merged on top.
//!
//! License: MIT OR Apache-2.0

use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::ngram::CountPolicy;

/// Rows shown in console rankings when nothing is configured.
pub const DEFAULT_TOP: usize = 10;
/// Decimal places for printed metrics when nothing is configured.
pub const DEFAULT_PRECISION: usize = 6;
/// Bar chart width in characters when nothing is configured.
pub const DEFAULT_CHART_WIDTH: usize = 50;

/// Presentation settings consumed by reporters. Unset fields fall back to defaults.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ReportConfig {
    /// Number of monograms listed in console rankings.
    pub top: Option<usize>,
    /// Decimal places for entropy and redundancy values.
    pub precision: Option<usize>,
    /// Width of the longest bar in frequency charts.
    pub chart_width: Option<usize>,
}

impl ReportConfig {
    pub fn top(&self) -> usize {
        self.top.unwrap_or(DEFAULT_TOP)
    }

    pub fn precision(&self) -> usize {
        self.precision.unwrap_or(DEFAULT_PRECISION)
    }

    pub fn chart_width(&self) -> usize {
        self.chart_width.unwrap_or(DEFAULT_CHART_WIDTH)
    }
}

/// Top-level analysis configuration.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Strip leading and trailing whitespace from the raw text before normalizing.
    pub trim_input: Option<bool>,
    /// Counting policies to run, in report order.
    pub policies: Vec<CountPolicy>,
    pub report: ReportConfig,
}

impl AnalysisConfig {
    /// Loads an analysis configuration from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading analysis config from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config: AnalysisConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config.normalize_policies();
        validate_policies(&config.policies)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        info!("Loaded {} policies from file {}.", config.policies.len(), path.display());

        Ok(config)
    }

    /// Loads the default configuration embedded in the library.
    pub fn load_default() -> Result<Self> {
        debug!("Loading default analysis config from embedded string...");
        let default_yaml = include_str!("../config/default_analysis.yaml");
        let mut config: AnalysisConfig = serde_yml::from_str(default_yaml)
            .context("Failed to parse default analysis config")?;

        config.normalize_policies();
        validate_policies(&config.policies)?;
        debug!("Loaded {} default policies.", config.policies.len());
        Ok(config)
    }

    pub fn trim_input(&self) -> bool {
        self.trim_input.unwrap_or(true)
    }

    fn normalize_policies(&mut self) {
        for policy in &mut self.policies {
            *policy = policy.normalized();
        }
    }
}

/// Merges a user configuration over the defaults.
///
/// A non-empty user policy list replaces the default list; scalar settings
/// override individually.
pub fn merge_config(default_config: AnalysisConfig, user_config: Option<AnalysisConfig>) -> AnalysisConfig {
    let mut merged = default_config;

    if let Some(user) = user_config {
        if !user.policies.is_empty() {
            debug!("Replacing {} default policies with {} user policies.", merged.policies.len(), user.policies.len());
            merged.policies = user.policies;
        }

        if let Some(trim) = user.trim_input {
            debug!("Overriding trim_input with user value: {}", trim);
            merged.trim_input = Some(trim);
        }

        if let Some(top) = user.report.top {
            debug!("Overriding report top with user value: {}", top);
            merged.report.top = Some(top);
        }

        if let Some(precision) = user.report.precision {
            debug!("Overriding report precision with user value: {}", precision);
            merged.report.precision = Some(precision);
        }

        if let Some(width) = user.report.chart_width {
            debug!("Overriding chart width with user value: {}", width);
            merged.report.chart_width = Some(width);
        }
    }

    if merged.policies.is_empty() {
        merged.policies = CountPolicy::all().to_vec();
    }

    merged
}

/// Rejects duplicate policies. An empty list is allowed and means "use defaults".
fn validate_policies(policies: &[CountPolicy]) -> Result<()> {
    let mut seen = HashSet::new();
    let duplicates: Vec<String> = policies
        .iter()
        .filter(|policy| !seen.insert(**policy))
        .map(|policy| format!("Duplicate policy found: '{}'.", policy))
        .collect();

    if duplicates.is_empty() {
        Ok(())
    } else {
        Err(anyhow!("Policy validation failed:\n{}", duplicates.join("\n")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_covers_all_policies() {
        let config = AnalysisConfig::load_default().unwrap();
        assert_eq!(config.policies, CountPolicy::all().to_vec());
        assert!(config.trim_input());
        assert_eq!(config.report.top(), 10);
        assert_eq!(config.report.precision(), 6);
        assert_eq!(config.report.chart_width(), 50);
    }

    #[test]
    fn duplicate_policies_are_rejected() {
        let policies = [CountPolicy::monogram(true), CountPolicy::monogram(true)];
        let err = validate_policies(&policies).unwrap_err();
        assert!(err.to_string().contains("H1 with ws"));
    }

    #[test]
    fn merge_falls_back_to_all_policies() {
        let merged = merge_config(AnalysisConfig::default(), None);
        assert_eq!(merged.policies.len(), 6);
        assert!(merged.trim_input());
    }
}
