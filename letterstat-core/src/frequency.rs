//! Frequency estimator: occurrence counts to relative frequencies.

use crate::counter::OccurrenceTable;
use crate::errors::LetterstatError;
use crate::ngram::{Ngram, NgramOrder};

/// Relative frequency of every n-gram in an [`OccurrenceTable`].
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyDistribution {
    order: NgramOrder,
    alphabet_size: usize,
    frequencies: Vec<f64>,
}

impl FrequencyDistribution {
    /// Divides each count by the table total.
    ///
    /// Returns [`LetterstatError::EmptyStream`] when the table has no observations.
    pub fn from_table(table: &OccurrenceTable) -> Result<Self, LetterstatError> {
        if table.total() == 0 {
            return Err(LetterstatError::EmptyStream);
        }

        let total = table.total() as f64;
        let frequencies = table
            .counts()
            .iter()
            .map(|&count| count as f64 / total)
            .collect();

        Ok(Self {
            order: table.order(),
            alphabet_size: table.alphabet_size(),
            frequencies,
        })
    }

    pub fn get(&self, ngram: Ngram) -> Option<f64> {
        if ngram.order() != self.order {
            return None;
        }
        ngram.position(self.alphabet_size).map(|p| self.frequencies[p])
    }

    pub fn order(&self) -> NgramOrder {
        self.order
    }

    pub fn alphabet_size(&self) -> usize {
        self.alphabet_size
    }

    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Frequencies in row-major n-gram order.
    pub fn values(&self) -> &[f64] {
        &self.frequencies
    }

    pub fn iter(&self) -> impl Iterator<Item = (Ngram, f64)> + '_ {
        self.frequencies
            .iter()
            .enumerate()
            .map(move |(position, &p)| (Ngram::at(self.order, position, self.alphabet_size), p))
    }

    /// Sum over all entries; 1.0 up to rounding.
    pub fn sum(&self) -> f64 {
        self.frequencies.iter().sum()
    }
}
