//! Entropy and redundancy calculator.
//!
//! Thin typed layer over `letterstat-entropy`: distributions in, per-symbol
//! entropy and redundancy out, with every undefined baseline reported as a
//! [`LetterstatError`].

use serde::Serialize;

use letterstat_entropy::{compute_stats, entropy_per_symbol, max_entropy};

use crate::errors::LetterstatError;
use crate::frequency::FrequencyDistribution;

/// Shannon entropy of `distribution`, in bits per single symbol.
///
/// Bigram entropy is divided by two so both orders are comparable.
pub fn entropy(distribution: &FrequencyDistribution) -> f64 {
    entropy_per_symbol(distribution.values().iter().copied(), distribution.order().len())
}

/// `1 - H / log2(alphabet_size)`.
///
/// `alphabet_size` is the number of distinct single symbols (31, or 32 with
/// whitespace), not the number of keys in a bigram distribution.
pub fn redundancy(entropy: f64, alphabet_size: usize) -> Result<f64, LetterstatError> {
    Ok(letterstat_entropy::redundancy(entropy, alphabet_size)?)
}

/// A point entropy estimate derived from lower/upper bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundsEstimate {
    /// Mean of the bounds, used as the entropy estimate.
    pub entropy: f64,
    /// Population standard deviation of the bounds.
    pub spread: f64,
    /// `log2(alphabet_size)`.
    pub max_entropy: f64,
    pub redundancy: f64,
}

/// Collapses entropy bounds into their mean and derives redundancy from it.
pub fn redundancy_from_bounds(bounds: &[f64], alphabet_size: usize) -> Result<BoundsEstimate, LetterstatError> {
    if bounds.is_empty() {
        return Err(LetterstatError::EmptyStream);
    }

    let stats = compute_stats(bounds);
    Ok(BoundsEstimate {
        entropy: stats.mean,
        spread: stats.std_dev,
        max_entropy: max_entropy(alphabet_size)?,
        redundancy: redundancy(stats.mean, alphabet_size)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::Alphabet;
    use crate::counter::count_ngrams;
    use crate::ngram::NgramOrder;
    use crate::normalizer::normalize;

    const EPSILON: f64 = 1e-12;

    fn distribution(text: &str, order: NgramOrder, overlap: bool) -> FrequencyDistribution {
        let stream = normalize(text, Alphabet::cyrillic(), false);
        FrequencyDistribution::from_table(&count_ngrams(&stream, order, overlap)).unwrap()
    }

    #[test]
    fn constant_text_is_fully_redundant() {
        let h = entropy(&distribution("аааа", NgramOrder::Monogram, false));
        assert_eq!(h, 0.0);
        assert_eq!(redundancy(h, 31).unwrap(), 1.0);
    }

    #[test]
    fn two_equally_likely_letters_carry_one_bit() {
        let h = entropy(&distribution("абаб", NgramOrder::Monogram, false));
        assert!((h - 1.0).abs() < EPSILON);
    }

    #[test]
    fn bigram_entropy_is_per_symbol() {
        // Disjoint pairs "аб", "вг": two equally likely bigrams, 1 bit per pair.
        let h = entropy(&distribution("абвг", NgramOrder::Bigram, false));
        assert!((h - 0.5).abs() < EPSILON);
    }

    #[test]
    fn redundancy_requires_two_symbols() {
        assert!(matches!(redundancy(0.5, 1), Err(LetterstatError::InvalidAlphabetSize(1))));
        assert!(matches!(redundancy(0.5, 0), Err(LetterstatError::InvalidAlphabetSize(0))));
    }

    #[test]
    fn uniform_entropy_has_zero_redundancy() {
        let h0 = (32f64).log2();
        assert!(redundancy(h0, 32).unwrap().abs() < EPSILON);
    }

    #[test]
    fn bounds_are_averaged() {
        let estimate = redundancy_from_bounds(&[1.934, 2.78], 32).unwrap();
        assert!((estimate.entropy - 2.357).abs() < 1e-9);
        assert!((estimate.max_entropy - 5.0).abs() < 1e-9);
        assert!((estimate.redundancy - (1.0 - 2.357 / 5.0)).abs() < 1e-9);
    }

    #[test]
    fn bounds_errors() {
        assert!(matches!(redundancy_from_bounds(&[], 32), Err(LetterstatError::EmptyStream)));
        assert!(matches!(
            redundancy_from_bounds(&[1.0, 2.0], 1),
            Err(LetterstatError::InvalidAlphabetSize(1))
        ));
    }
}
