// letterstat/src/ui/output_format.rs
//! Themed message and "tag: value" line output.
//!
//! Every printer takes the writer and an explicit `supports_color` flag so
//! callers decide whether escape codes are emitted (terminal vs. file/pipe).

use std::io::{self, Write};

use owo_colors::OwoColorize;

use crate::ui::theme::{color_for, ThemeEntry, ThemeMap};

/// Paints `text` with the theme color of `entry` when color is supported.
pub fn paint(text: &str, entry: ThemeEntry, theme_map: &ThemeMap, supports_color: bool) -> String {
    match color_for(entry, theme_map) {
        Some(color) if supports_color => text.color(color.to_ansi_color()).to_string(),
        _ => text.to_string(),
    }
}

fn print_message<W: Write>(
    writer: &mut W,
    message: &str,
    entry: ThemeEntry,
    theme_map: &ThemeMap,
    supports_color: bool,
) -> io::Result<()> {
    writeln!(writer, "{}", paint(message, entry, theme_map, supports_color))
}

pub fn print_info_message<W: Write>(writer: &mut W, message: &str, theme_map: &ThemeMap, supports_color: bool) -> io::Result<()> {
    print_message(writer, message, ThemeEntry::Info, theme_map, supports_color)
}

pub fn print_success_message<W: Write>(writer: &mut W, message: &str, theme_map: &ThemeMap, supports_color: bool) -> io::Result<()> {
    print_message(writer, message, ThemeEntry::Success, theme_map, supports_color)
}

pub fn print_warn_message<W: Write>(writer: &mut W, message: &str, theme_map: &ThemeMap, supports_color: bool) -> io::Result<()> {
    print_message(writer, &format!("Warning: {}", message), ThemeEntry::Warn, theme_map, supports_color)
}

pub fn print_error_message<W: Write>(writer: &mut W, message: &str, theme_map: &ThemeMap, supports_color: bool) -> io::Result<()> {
    print_message(writer, &format!("Error: {}", message), ThemeEntry::Error, theme_map, supports_color)
}

/// Prints a section title such as the file name being analyzed.
pub fn print_header<W: Write>(writer: &mut W, title: &str, theme_map: &ThemeMap, supports_color: bool) -> io::Result<()> {
    writeln!(writer)?;
    print_message(writer, &format!("=== {} ===", title), ThemeEntry::Header, theme_map, supports_color)
}

/// Prints a `tag: value` line, tag and value styled separately.
pub fn print_tagged<W: Write>(
    writer: &mut W,
    tag: &str,
    value: &str,
    theme_map: &ThemeMap,
    supports_color: bool,
) -> io::Result<()> {
    writeln!(
        writer,
        "{}: {}",
        paint(tag, ThemeEntry::Label, theme_map, supports_color),
        paint(value, ThemeEntry::Value, theme_map, supports_color)
    )
}
