//! Module for managing the application's command-line interface (CLI) theme.
//!
//! This module defines the structure for theme configuration, allowing users
//! to customize the colors of various output elements. It supports 16-color
//! ANSI named colors for foreground styling and provides functionality to
//! load themes from YAML files and manage default theme settings.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use anyhow::{Context, Result};
use owo_colors::AnsiColors;

/// Type alias for the theme map, providing a consistent type definition.
pub type ThemeMap = HashMap<ThemeEntry, ThemeStyle>;

/// The different logical parts of the output that can be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeEntry {
    /// Section titles and file separators.
    Header,
    /// Successful operation messages.
    Success,
    /// General informational messages.
    Info,
    /// Warning messages.
    Warn,
    /// Error messages.
    Error,
    /// The tag half of a "tag: value" line.
    Label,
    /// The value half of a "tag: value" line.
    Value,
    /// Table bodies.
    Table,
    /// Bars in bar charts.
    ChartBar,
    /// Value labels in bar charts.
    ChartValue,
}

impl ThemeEntry {
    /// Every entry, used to fill in missing styles.
    pub const ALL: [ThemeEntry; 10] = [
        ThemeEntry::Header, ThemeEntry::Success, ThemeEntry::Info, ThemeEntry::Warn,
        ThemeEntry::Error, ThemeEntry::Label, ThemeEntry::Value, ThemeEntry::Table,
        ThemeEntry::ChartBar, ThemeEntry::ChartValue,
    ];
}

/// Represents an ANSI color that can be used in the theme.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ThemeColor {
    /// A named ANSI color (e.g., "red", "brightgreen").
    Named(String),
}

/// Error type for parsing an invalid `ThemeColor` string.
#[derive(Debug, Clone)]
pub struct ParseThemeColorError;

impl fmt::Display for ParseThemeColorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Invalid theme color; expected one of: black, red, green, yellow, blue, \
            magenta, cyan, white, brightblack, brightred, brightgreen, brightyellow, \
            brightblue, brightmagenta, brightcyan, brightwhite."
        )
    }
}

impl std::error::Error for ParseThemeColorError {}

impl FromStr for ThemeColor {
    type Err = ParseThemeColorError;

    /// Attempts to parse a string into a `ThemeColor`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        match lower.as_str() {
            "black" | "red" | "green" | "yellow" | "blue" | "magenta" | "cyan" | "white" |
            "brightblack" | "brightred" | "brightgreen" | "brightyellow" | "brightblue" |
            "brightmagenta" | "brightcyan" | "brightwhite" => Ok(ThemeColor::Named(lower)),
            _ => Err(ParseThemeColorError),
        }
    }
}

impl ThemeColor {
    fn named(name: &str) -> Self {
        ThemeColor::Named(name.to_string())
    }

    /// Converts the `ThemeColor` enum variant into its corresponding `owo_colors::AnsiColors`.
    pub fn to_ansi_color(&self) -> AnsiColors {
        match self {
            ThemeColor::Named(name) => match name.as_str() {
                "black" => AnsiColors::Black,
                "red" => AnsiColors::Red,
                "green" => AnsiColors::Green,
                "yellow" => AnsiColors::Yellow,
                "blue" => AnsiColors::Blue,
                "magenta" => AnsiColors::Magenta,
                "cyan" => AnsiColors::Cyan,
                "white" => AnsiColors::White,
                "brightblack" => AnsiColors::BrightBlack,
                "brightred" => AnsiColors::BrightRed,
                "brightgreen" => AnsiColors::BrightGreen,
                "brightyellow" => AnsiColors::BrightYellow,
                "brightblue" => AnsiColors::BrightBlue,
                "brightmagenta" => AnsiColors::BrightMagenta,
                "brightcyan" => AnsiColors::BrightCyan,
                "brightwhite" => AnsiColors::BrightWhite,
                _ => AnsiColors::White,
            },
        }
    }

    /// Converts the color into its `comfy_table` equivalent for table cells.
    pub fn to_table_color(&self) -> comfy_table::Color {
        use comfy_table::Color;
        match self {
            ThemeColor::Named(name) => match name.as_str() {
                "black" => Color::Black,
                "red" => Color::DarkRed,
                "green" => Color::DarkGreen,
                "yellow" => Color::DarkYellow,
                "blue" => Color::DarkBlue,
                "magenta" => Color::DarkMagenta,
                "cyan" => Color::DarkCyan,
                "white" => Color::Grey,
                "brightblack" => Color::DarkGrey,
                "brightred" => Color::Red,
                "brightgreen" => Color::Green,
                "brightyellow" => Color::Yellow,
                "brightblue" => Color::Blue,
                "brightmagenta" => Color::Magenta,
                "brightcyan" => Color::Cyan,
                "brightwhite" => Color::White,
                _ => Color::Reset,
            },
        }
    }
}

/// Represents the style configuration for a specific `ThemeEntry`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeStyle {
    /// An optional `ThemeColor` to apply as the foreground color.
    pub fg: Option<ThemeColor>,
}

/// Loads a theme configuration from a YAML file or returns the default theme.
pub fn build_theme_map(theme_path: Option<&PathBuf>) -> Result<ThemeMap> {
    if let Some(path) = theme_path {
        ThemeStyle::load_from_file(path)
    } else {
        Ok(ThemeStyle::default_theme_map())
    }
}

/// Foreground color configured for `entry`, if any.
pub fn color_for(entry: ThemeEntry, theme_map: &ThemeMap) -> Option<&ThemeColor> {
    theme_map.get(&entry).and_then(|style| style.fg.as_ref())
}

impl ThemeStyle {
    /// Loads a theme configuration from a YAML file on disk and merges it with default styles.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ThemeMap> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read theme file {}", path.display()))?;
        let mut custom: ThemeMap = serde_yaml::from_str(&text)
            .with_context(|| format!("Failed to parse theme file {}", path.display()))?;

        let defaults = Self::default_theme_map();
        for entry in ThemeEntry::ALL {
            if !custom.contains_key(&entry) {
                custom.insert(entry, defaults.get(&entry).cloned().unwrap_or_default());
            }
        }
        Ok(custom)
    }

    /// Returns a default theme map with predefined color mappings.
    pub fn default_theme_map() -> ThemeMap {
        let mut default_theme = HashMap::new();
        default_theme.insert(ThemeEntry::Header, ThemeStyle { fg: Some(ThemeColor::named("brightgreen")) });
        default_theme.insert(ThemeEntry::Success, ThemeStyle { fg: Some(ThemeColor::named("green")) });
        default_theme.insert(ThemeEntry::Warn, ThemeStyle { fg: Some(ThemeColor::named("yellow")) });
        default_theme.insert(ThemeEntry::Error, ThemeStyle { fg: Some(ThemeColor::named("red")) });
        default_theme.insert(ThemeEntry::Label, ThemeStyle { fg: Some(ThemeColor::named("brightgreen")) });
        default_theme.insert(ThemeEntry::Value, ThemeStyle { fg: Some(ThemeColor::named("brightblue")) });
        default_theme.insert(ThemeEntry::Table, ThemeStyle { fg: Some(ThemeColor::named("brightcyan")) });
        default_theme.insert(ThemeEntry::ChartBar, ThemeStyle { fg: Some(ThemeColor::named("cyan")) });

        for entry in ThemeEntry::ALL {
            default_theme.entry(entry).or_insert_with(|| ThemeStyle { fg: Some(ThemeColor::named("white")) });
        }
        default_theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_named_colors() {
        assert!("red".parse::<ThemeColor>().is_ok());
        assert!("BrightGreen".parse::<ThemeColor>().is_ok());
        assert!("unknown".parse::<ThemeColor>().is_err());
    }

    #[test]
    fn to_ansi_color_roundtrip() {
        let tc: ThemeColor = "blue".parse().unwrap();
        assert_eq!(tc.to_ansi_color(), AnsiColors::Blue);
        let tc: ThemeColor = "brightmagenta".parse().unwrap();
        assert_eq!(tc.to_ansi_color(), AnsiColors::BrightMagenta);
    }

    #[test]
    fn default_theme_covers_every_entry() {
        let theme = ThemeStyle::default_theme_map();
        for entry in ThemeEntry::ALL {
            assert!(color_for(entry, &theme).is_some(), "{:?} has no color", entry);
        }
        assert_eq!(color_for(ThemeEntry::Error, &theme), Some(&ThemeColor::named("red")));
    }

    #[test]
    fn custom_theme_is_merged_with_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "error:\n  fg: magenta\nchart_bar:\n  fg: brightyellow").unwrap();

        let theme = ThemeStyle::load_from_file(file.path()).unwrap();
        assert_eq!(color_for(ThemeEntry::Error, &theme), Some(&ThemeColor::named("magenta")));
        assert_eq!(color_for(ThemeEntry::ChartBar, &theme), Some(&ThemeColor::named("brightyellow")));
        assert_eq!(color_for(ThemeEntry::Header, &theme), Some(&ThemeColor::named("brightgreen")));
    }
}
