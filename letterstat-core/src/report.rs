//! Serializable report sheets built from a [`TextAnalysis`].
//!
//! Monogram sheets are rankings sorted by value, bigram sheets are square
//! first-symbol × second-symbol matrices. Reporters decide how to persist
//! or print them.

use serde::Serialize;

use crate::alphabet::{Alphabet, Symbol};
use crate::counter::OccurrenceTable;
use crate::frequency::FrequencyDistribution;
use crate::ngram::{CountPolicy, Ngram, NgramOrder};
use crate::pipeline::TextAnalysis;

/// A single numeric cell: an integer count or a float frequency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Count(u64),
    Frequency(f64),
}

impl Cell {
    pub fn as_f64(self) -> f64 {
        match self {
            Cell::Count(count) => count as f64,
            Cell::Frequency(p) => p,
        }
    }
}

/// One row of a ranking sheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    pub ngram: String,
    pub value: Cell,
}

/// The body of a sheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "layout", rename_all = "snake_case")]
pub enum SheetData {
    /// Rows sorted by value, descending.
    Ranking { column: String, rows: Vec<RankedEntry> },
    /// `rows[i][j]` is the value of the bigram `labels[i] labels[j]`.
    Matrix { labels: Vec<String>, rows: Vec<Vec<Cell>> },
}

/// A named table destined for one export sheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sheet {
    pub name: String,
    pub policy: CountPolicy,
    #[serde(flatten)]
    pub data: SheetData,
}

/// Scalar results for one policy; `error` is set instead of the metrics on failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricRow {
    pub label: String,
    pub policy: CountPolicy,
    pub count_sheet: String,
    /// Absent when the policy failed and no frequency sheet was written.
    pub frequency_sheet: Option<String>,
    pub alphabet_size: usize,
    pub total: u64,
    pub entropy: Option<f64>,
    pub redundancy: Option<f64>,
    pub error: Option<String>,
}

/// The full report for one text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextReport {
    pub source: String,
    pub alphabet: String,
    /// `(source, target)` letter folds applied during normalization.
    pub folds: Vec<(char, char)>,
    pub text_length: usize,
    pub metrics: Vec<MetricRow>,
    pub sheets: Vec<Sheet>,
}

/// Builds the report. Count sheets come first, then frequency sheets of the
/// policies that succeeded, mirroring the order they are computed in.
pub fn build_report(source: &str, analysis: &TextAnalysis, alphabet: &Alphabet) -> TextReport {
    let metrics = analysis
        .policies
        .iter()
        .map(|entry| {
            let (entropy, redundancy, error) = match &entry.metrics {
                Ok(m) => (Some(m.entropy), Some(m.redundancy), None),
                Err(e) => (None, None, Some(e.to_string())),
            };
            MetricRow {
                label: entry.policy.to_string(),
                policy: entry.policy,
                count_sheet: entry.policy.count_sheet_name(),
                frequency_sheet: entry.metrics.as_ref().ok().map(|_| entry.policy.frequency_sheet_name()),
                alphabet_size: entry.table.alphabet_size(),
                total: entry.table.total(),
                entropy,
                redundancy,
                error,
            }
        })
        .collect();

    let count_sheets = analysis
        .policies
        .iter()
        .map(|entry| count_sheet(&entry.table, entry.policy, alphabet));
    let frequency_sheets = analysis.policies.iter().filter_map(|entry| {
        entry
            .metrics
            .as_ref()
            .ok()
            .map(|m| frequency_sheet(&m.distribution, entry.policy, alphabet))
    });

    TextReport {
        source: source.to_string(),
        alphabet: alphabet.to_string(),
        folds: alphabet.folds().to_vec(),
        text_length: analysis.text_length,
        metrics,
        sheets: count_sheets.chain(frequency_sheets).collect(),
    }
}

/// Sheet of raw counts for `policy`.
pub fn count_sheet(table: &OccurrenceTable, policy: CountPolicy, alphabet: &Alphabet) -> Sheet {
    Sheet {
        name: policy.count_sheet_name(),
        policy,
        data: layout(
            table.iter().map(|(ngram, count)| (ngram, Cell::Count(count))),
            table.order(),
            table.alphabet_size(),
            "Count",
            alphabet,
        ),
    }
}

/// Sheet of relative frequencies for `policy`.
pub fn frequency_sheet(distribution: &FrequencyDistribution, policy: CountPolicy, alphabet: &Alphabet) -> Sheet {
    Sheet {
        name: policy.frequency_sheet_name(),
        policy,
        data: layout(
            distribution.iter().map(|(ngram, p)| (ngram, Cell::Frequency(p))),
            distribution.order(),
            distribution.alphabet_size(),
            "Frequency",
            alphabet,
        ),
    }
}

/// Monogram `(label, frequency)` pairs sorted by frequency, for charts.
pub fn ranked_monograms(distribution: &FrequencyDistribution, alphabet: &Alphabet) -> Vec<(String, f64)> {
    let mut entries: Vec<(String, f64)> = distribution
        .iter()
        .filter(|(ngram, _)| ngram.order() == NgramOrder::Monogram)
        .map(|(ngram, p)| (ngram.label(alphabet), p))
        .collect();
    entries.sort_by(|a, b| b.1.total_cmp(&a.1));
    entries
}

fn layout<I>(cells: I, order: NgramOrder, alphabet_size: usize, column: &str, alphabet: &Alphabet) -> SheetData
where
    I: Iterator<Item = (Ngram, Cell)>,
{
    match order {
        NgramOrder::Monogram => {
            let mut rows: Vec<RankedEntry> = cells
                .map(|(ngram, value)| RankedEntry { ngram: ngram.label(alphabet), value })
                .collect();
            // Stable sort keeps alphabet order among ties.
            rows.sort_by(|a, b| b.value.as_f64().total_cmp(&a.value.as_f64()));
            SheetData::Ranking { column: column.to_string(), rows }
        }
        NgramOrder::Bigram => {
            let labels = (0..alphabet_size)
                .map(|index| alphabet.char_of(Symbol::from_index(index)).to_string())
                .collect();
            let values: Vec<Cell> = cells.map(|(_, value)| value).collect();
            let rows = values.chunks(alphabet_size.max(1)).map(<[Cell]>::to_vec).collect();
            SheetData::Matrix { labels, rows }
        }
    }
}
