//! N-gram counter: canonical stream to occurrence table.
//!
//! Tables are dense. Every n-gram of the active alphabet has a slot from
//! the start, so unseen n-grams read as zero instead of missing.

use log::debug;

use crate::ngram::{CountPolicy, Ngram, NgramOrder};
use crate::normalizer::SymbolStream;

/// Occurrence counts for every n-gram of one order over an active alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccurrenceTable {
    order: NgramOrder,
    alphabet_size: usize,
    counts: Vec<u64>,
    total: u64,
}

impl OccurrenceTable {
    /// A table with a zero entry for each of the `alphabet_size^n` n-grams.
    pub fn zeroed(order: NgramOrder, alphabet_size: usize) -> Self {
        Self {
            order,
            alphabet_size,
            counts: vec![0; order.key_count(alphabet_size)],
            total: 0,
        }
    }

    fn record(&mut self, ngram: Ngram) {
        if let Some(position) = ngram.position(self.alphabet_size) {
            self.counts[position] += 1;
            self.total += 1;
        }
    }

    /// Count for `ngram`, or `None` if it does not belong to this table.
    pub fn get(&self, ngram: Ngram) -> Option<u64> {
        if ngram.order() != self.order {
            return None;
        }
        ngram.position(self.alphabet_size).map(|p| self.counts[p])
    }

    /// Total number of observations recorded.
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn order(&self) -> NgramOrder {
        self.order
    }

    pub fn alphabet_size(&self) -> usize {
        self.alphabet_size
    }

    /// Number of keys, zero-count entries included.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Raw counts in row-major n-gram order.
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Every `(ngram, count)` pair in alphabet order.
    pub fn iter(&self) -> impl Iterator<Item = (Ngram, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .map(move |(position, &count)| (Ngram::at(self.order, position, self.alphabet_size), count))
    }
}

/// Counts n-grams of `order` in `stream`.
///
/// Monograms count every symbol. Overlapping bigrams slide a window of two
/// over the stream (`len - 1` pairs). Disjoint bigrams split it into
/// consecutive pairs starting at offset 0 and drop a trailing odd symbol
/// (`len / 2` pairs). `overlap` is ignored for monograms.
pub fn count_ngrams(stream: &SymbolStream, order: NgramOrder, overlap: bool) -> OccurrenceTable {
    let mut table = OccurrenceTable::zeroed(order, stream.alphabet_size());
    let symbols = stream.symbols();

    match order {
        NgramOrder::Monogram => {
            for &symbol in symbols {
                table.record(Ngram::Monogram(symbol));
            }
        }
        NgramOrder::Bigram if overlap => {
            for pair in symbols.windows(2) {
                table.record(Ngram::Bigram(pair[0], pair[1]));
            }
        }
        NgramOrder::Bigram => {
            for pair in symbols.chunks_exact(2) {
                table.record(Ngram::Bigram(pair[0], pair[1]));
            }
        }
    }

    debug!(
        "Counted {} {:?} observations over {} keys (overlap: {}).",
        table.total,
        order,
        table.len(),
        overlap
    );
    table
}

/// Counts according to a [`CountPolicy`]. The stream must have been
/// normalized with the policy's whitespace setting.
pub fn count_with_policy(stream: &SymbolStream, policy: CountPolicy) -> OccurrenceTable {
    count_ngrams(stream, policy.order, policy.overlap)
}
