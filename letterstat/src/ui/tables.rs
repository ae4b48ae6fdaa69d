// letterstat/src/ui/tables.rs
//! Console tables for metrics, rankings and bound estimates.

use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use letterstat_core::{BoundsEstimate, MetricRow, RankedEntry};

use crate::ui::theme::{color_for, ThemeEntry, ThemeMap};

/// Shown in place of the whitespace symbol so it stays visible in a cell.
pub const WHITESPACE_LABEL: &str = "␣";

/// Makes an n-gram label printable, replacing spaces with [`WHITESPACE_LABEL`].
pub fn display_label(label: &str) -> String {
    label.replace(' ', WHITESPACE_LABEL)
}

fn new_table(headers: &[&str], theme_map: &ThemeMap, supports_color: bool) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_content_arrangement(ContentArrangement::Dynamic);
    if supports_color {
        table.enforce_styling();
    } else {
        table.force_no_tty();
    }

    let header_color = color_for(ThemeEntry::Header, theme_map).map(|c| c.to_table_color());
    table.set_header(headers.iter().map(|h| match header_color {
        Some(color) if supports_color => Cell::new(h).fg(color),
        _ => Cell::new(h),
    }));
    table
}

fn themed_cell(text: String, entry: ThemeEntry, theme_map: &ThemeMap, supports_color: bool) -> Cell {
    let cell = Cell::new(text);
    match color_for(entry, theme_map) {
        Some(color) if supports_color => cell.fg(color.to_table_color()),
        _ => cell,
    }
}

fn number_cell(text: String, theme_map: &ThemeMap, supports_color: bool) -> Cell {
    themed_cell(text, ThemeEntry::Value, theme_map, supports_color).set_alignment(CellAlignment::Right)
}

/// One row per policy. Failed policies show their error in place of the metrics.
pub fn metrics_table(rows: &[MetricRow], precision: usize, theme_map: &ThemeMap, supports_color: bool) -> Table {
    let mut table = new_table(&["Policy", "Alphabet", "Total", "Entropy", "Redundancy"], theme_map, supports_color);
    for row in rows {
        let mut cells = vec![
            themed_cell(row.label.clone(), ThemeEntry::Label, theme_map, supports_color),
            number_cell(row.alphabet_size.to_string(), theme_map, supports_color),
            number_cell(row.total.to_string(), theme_map, supports_color),
        ];
        match (row.entropy, row.redundancy, &row.error) {
            (Some(h), Some(r), _) => {
                cells.push(number_cell(format!("{:.*}", precision, h), theme_map, supports_color));
                cells.push(number_cell(format!("{:.*}", precision, r), theme_map, supports_color));
            }
            (_, _, error) => {
                let message = error.clone().unwrap_or_else(|| "unavailable".to_string());
                cells.push(themed_cell(message.clone(), ThemeEntry::Error, theme_map, supports_color));
                cells.push(themed_cell(message, ThemeEntry::Error, theme_map, supports_color));
            }
        }
        table.add_row(cells);
    }
    table
}

/// The first `top` entries of a ranking sheet.
pub fn ranking_table(
    column: &str,
    rows: &[RankedEntry],
    top: usize,
    precision: usize,
    theme_map: &ThemeMap,
    supports_color: bool,
) -> Table {
    let mut table = new_table(&["#", "N-gram", column], theme_map, supports_color);
    for (rank, entry) in rows.iter().take(top).enumerate() {
        let value = match entry.value {
            letterstat_core::Cell::Count(count) => count.to_string(),
            letterstat_core::Cell::Frequency(p) => format!("{:.*}", precision, p),
        };
        table.add_row(vec![
            themed_cell((rank + 1).to_string(), ThemeEntry::Table, theme_map, supports_color)
                .set_alignment(CellAlignment::Right),
            themed_cell(display_label(&entry.ngram), ThemeEntry::Label, theme_map, supports_color),
            number_cell(value, theme_map, supports_color),
        ]);
    }
    table
}

/// One row per named bounds estimate.
pub fn estimates_table(
    estimates: &[(String, BoundsEstimate)],
    precision: usize,
    theme_map: &ThemeMap,
    supports_color: bool,
) -> Table {
    let mut table = new_table(&["Estimate", "Entropy", "Spread", "Max entropy", "Redundancy"], theme_map, supports_color);
    for (name, estimate) in estimates {
        table.add_row(vec![
            themed_cell(name.clone(), ThemeEntry::Label, theme_map, supports_color),
            number_cell(format!("{:.*}", precision, estimate.entropy), theme_map, supports_color),
            number_cell(format!("{:.*}", precision, estimate.spread), theme_map, supports_color),
            number_cell(format!("{:.*}", precision, estimate.max_entropy), theme_map, supports_color),
            number_cell(format!("{:.*}", precision, estimate.redundancy), theme_map, supports_color),
        ]);
    }
    table
}
