// letterstat/src/ui/mod.rs
//! Console presentation: theme, messages, tables and bar charts.

pub mod bar_chart;
pub mod output_format;
pub mod tables;
pub mod theme;
