//! N-gram keys and the counting policies a report is built from.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::alphabet::{Alphabet, Symbol};

/// Length of the n-grams being counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NgramOrder {
    Monogram,
    Bigram,
}

impl NgramOrder {
    /// Number of symbols in one n-gram.
    pub fn len(self) -> usize {
        match self {
            NgramOrder::Monogram => 1,
            NgramOrder::Bigram => 2,
        }
    }

    /// Number of distinct n-grams over an alphabet of `alphabet_size` symbols.
    pub fn key_count(self, alphabet_size: usize) -> usize {
        alphabet_size.pow(self.len() as u32)
    }
}

/// An ordered tuple of one or two symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Ngram {
    Monogram(Symbol),
    Bigram(Symbol, Symbol),
}

impl Ngram {
    pub fn order(&self) -> NgramOrder {
        match self {
            Ngram::Monogram(_) => NgramOrder::Monogram,
            Ngram::Bigram(..) => NgramOrder::Bigram,
        }
    }

    pub fn first(&self) -> Symbol {
        match *self {
            Ngram::Monogram(a) | Ngram::Bigram(a, _) => a,
        }
    }

    pub fn second(&self) -> Option<Symbol> {
        match *self {
            Ngram::Monogram(_) => None,
            Ngram::Bigram(_, b) => Some(b),
        }
    }

    /// The n-gram spelled out with the alphabet's display characters.
    pub fn label(&self, alphabet: &Alphabet) -> String {
        let mut label = String::with_capacity(8);
        label.push(alphabet.char_of(self.first()));
        if let Some(second) = self.second() {
            label.push(alphabet.char_of(second));
        }
        label
    }

    /// Dense row-major position of this n-gram, or `None` if a symbol lies
    /// outside the alphabet.
    pub(crate) fn position(&self, alphabet_size: usize) -> Option<usize> {
        match *self {
            Ngram::Monogram(a) if a.index() < alphabet_size => Some(a.index()),
            Ngram::Bigram(a, b) if a.index() < alphabet_size && b.index() < alphabet_size => {
                Some(a.index() * alphabet_size + b.index())
            }
            _ => None,
        }
    }

    pub(crate) fn at(order: NgramOrder, position: usize, alphabet_size: usize) -> Ngram {
        match order {
            NgramOrder::Monogram => Ngram::Monogram(Symbol::from_index(position)),
            NgramOrder::Bigram => Ngram::Bigram(
                Symbol::from_index(position / alphabet_size),
                Symbol::from_index(position % alphabet_size),
            ),
        }
    }
}

/// One combination of n-gram order, whitespace handling and bigram overlap.
///
/// `overlap` only applies to bigrams and is always `false` for monograms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct CountPolicy {
    pub order: NgramOrder,
    pub include_whitespace: bool,
    #[serde(default)]
    pub overlap: bool,
}

impl CountPolicy {
    pub fn monogram(include_whitespace: bool) -> Self {
        Self {
            order: NgramOrder::Monogram,
            include_whitespace,
            overlap: false,
        }
    }

    pub fn bigram(include_whitespace: bool, overlap: bool) -> Self {
        Self {
            order: NgramOrder::Bigram,
            include_whitespace,
            overlap,
        }
    }

    /// The policy with `overlap` cleared for monograms.
    pub fn normalized(self) -> Self {
        match self.order {
            NgramOrder::Monogram => Self::monogram(self.include_whitespace),
            NgramOrder::Bigram => self,
        }
    }

    /// Every combination, in report order.
    pub fn all() -> [CountPolicy; 6] {
        [
            Self::monogram(false),
            Self::monogram(true),
            Self::bigram(false, false),
            Self::bigram(true, false),
            Self::bigram(false, true),
            Self::bigram(true, true),
        ]
    }

    fn sheet_suffix(&self) -> &'static str {
        if self.include_whitespace { "_WS" } else { "" }
    }

    /// Name of the sheet holding this policy's occurrence counts (e.g. `CO_BG_OV_WS`).
    pub fn count_sheet_name(&self) -> String {
        let base = match (self.order, self.overlap) {
            (NgramOrder::Monogram, _) => "CO_MG",
            (NgramOrder::Bigram, false) => "CO_BG_NOT_OV",
            (NgramOrder::Bigram, true) => "CO_BG_OV",
        };
        format!("{}{}", base, self.sheet_suffix())
    }

    /// Name of the sheet holding this policy's frequencies (e.g. `BG_FR_OV_WS`).
    pub fn frequency_sheet_name(&self) -> String {
        let base = match (self.order, self.overlap) {
            (NgramOrder::Monogram, _) => "MG_FR",
            (NgramOrder::Bigram, false) => "BG_FR_NOT_OV",
            (NgramOrder::Bigram, true) => "BG_FR_OV",
        };
        format!("{}{}", base, self.sheet_suffix())
    }
}

impl fmt::Display for CountPolicy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (self.order, self.overlap) {
            (NgramOrder::Monogram, _) => write!(f, "H1")?,
            (NgramOrder::Bigram, false) => write!(f, "H2 not overlapped")?,
            (NgramOrder::Bigram, true) => write!(f, "H2 overlapping")?,
        }
        if self.include_whitespace {
            write!(f, " with ws")?;
        }
        Ok(())
    }
}
