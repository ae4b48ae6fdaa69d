// letterstat/src/ui/bar_chart.rs
//! Horizontal bar charts for labeled numeric series.
//!
//! One row per label, bars scaled so the largest value spans `width` cells.
//! The y-axis label sits above the label column and the x-axis label below
//! the baseline.

use std::io::{self, Write};

use thiserror::Error;

use crate::ui::output_format::paint;
use crate::ui::theme::{ThemeEntry, ThemeMap};

const BAR: char = '█';
const AXIS: char = '│';
const BASELINE: char = '─';
const CORNER: char = '└';

#[derive(Debug, Error, PartialEq)]
pub enum ChartError {
    #[error("Nothing to plot: the series is empty")]
    EmptySeries,

    #[error("Got {labels} labels but {values} values")]
    LengthMismatch { labels: usize, values: usize },

    #[error("Value {value} for '{label}' cannot be plotted (must be finite and non-negative)")]
    InvalidValue { label: String, value: f64 },

    #[error("Chart width must be at least 1")]
    ZeroWidth,
}

/// Formats a bar value: integral numbers without decimals, others with four.
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{:.4}", value)
    }
}

/// A validated series plus presentation options.
#[derive(Debug, Clone)]
pub struct BarChart {
    pub title: Option<String>,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub show_values: bool,
    pub width: usize,
    entries: Vec<(String, f64)>,
}

impl BarChart {
    pub fn new(labels: Vec<String>, values: Vec<f64>, width: usize) -> Result<Self, ChartError> {
        if labels.len() != values.len() {
            return Err(ChartError::LengthMismatch { labels: labels.len(), values: values.len() });
        }
        Self::from_entries(labels.into_iter().zip(values).collect(), width)
    }

    pub fn from_entries(entries: Vec<(String, f64)>, width: usize) -> Result<Self, ChartError> {
        if entries.is_empty() {
            return Err(ChartError::EmptySeries);
        }
        if width == 0 {
            return Err(ChartError::ZeroWidth);
        }
        if let Some((label, value)) = entries.iter().find(|(_, v)| !v.is_finite() || *v < 0.0) {
            return Err(ChartError::InvalidValue { label: label.clone(), value: *value });
        }
        Ok(BarChart {
            title: None,
            x_label: None,
            y_label: None,
            show_values: false,
            width,
            entries,
        })
    }

    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    pub fn with_axis_labels(mut self, x_label: Option<String>, y_label: Option<String>) -> Self {
        self.x_label = x_label;
        self.y_label = y_label;
        self
    }

    pub fn with_values(mut self, show_values: bool) -> Self {
        self.show_values = show_values;
        self
    }

    pub fn entries(&self) -> &[(String, f64)] {
        &self.entries
    }

    /// Bar length in cells for `value`.
    fn bar_len(&self, value: f64, max: f64) -> usize {
        if max <= 0.0 {
            return 0;
        }
        ((value / max) * self.width as f64).round() as usize
    }

    pub fn render<W: Write>(&self, writer: &mut W, theme_map: &ThemeMap, supports_color: bool) -> io::Result<()> {
        let label_width = self.entries.iter().map(|(l, _)| l.chars().count()).max().unwrap_or(0);
        let max = self.entries.iter().map(|(_, v)| *v).fold(0.0, f64::max);

        if let Some(title) = &self.title {
            writeln!(writer, "{}", paint(title, ThemeEntry::Header, theme_map, supports_color))?;
        }
        if let Some(y_label) = &self.y_label {
            writeln!(writer, "{}", paint(y_label, ThemeEntry::Label, theme_map, supports_color))?;
        }

        for (label, value) in &self.entries {
            let bar: String = std::iter::repeat(BAR).take(self.bar_len(*value, max)).collect();
            write!(
                writer,
                "{:>width$} {}{}",
                label,
                AXIS,
                paint(&bar, ThemeEntry::ChartBar, theme_map, supports_color),
                width = label_width
            )?;
            if self.show_values {
                let text = format_value(*value);
                write!(writer, " {}", paint(&text, ThemeEntry::ChartValue, theme_map, supports_color))?;
            }
            writeln!(writer)?;
        }

        let baseline: String = std::iter::repeat(BASELINE).take(self.width).collect();
        writeln!(writer, "{:>width$} {}{}", "", CORNER, baseline, width = label_width)?;
        if let Some(x_label) = &self.x_label {
            writeln!(
                writer,
                "{:>width$}  {}",
                "",
                paint(x_label, ThemeEntry::Label, theme_map, supports_color),
                width = label_width
            )?;
        }
        Ok(())
    }
}
