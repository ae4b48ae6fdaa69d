// letterstat-entropy/src/entropy/mod.rs
use libm::log2;

use crate::EntropyScore;

/// Calculates the Shannon entropy of a probability distribution.
///
/// Returns the entropy in bits. Entries with `p <= 0` contribute nothing,
/// so a zero-filled distribution never produces `NaN`.
pub fn shannon_entropy<I>(probabilities: I) -> EntropyScore
where
    I: IntoIterator<Item = f64>,
{
    let mut entropy = 0.0;

    for p in probabilities {
        if p > 0.0 {
            entropy -= p * log2(p);
        }
    }

    entropy
}

/// Shannon entropy of a distribution over n-grams of length `order`,
/// normalized to bits per single symbol.
pub fn entropy_per_symbol<I>(probabilities: I, order: usize) -> EntropyScore
where
    I: IntoIterator<Item = f64>,
{
    shannon_entropy(probabilities) / order.max(1) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_entropy_empty() {
        assert_eq!(shannon_entropy([0.0f64; 0]), 0.0);
        assert_eq!(shannon_entropy([0.0, 0.0, 0.0]), 0.0);
    }

    #[test]
    fn test_entropy_zero_randomness() {
        assert_eq!(shannon_entropy([1.0, 0.0, 0.0]), 0.0);
    }

    #[test]
    fn test_entropy_uniform_over_eight() {
        let entropy = shannon_entropy([0.125; 8]);
        assert!((entropy - 3.0).abs() < EPSILON);
    }

    #[test]
    fn test_entropy_per_symbol_halves_bigram_entropy() {
        // Four equally likely bigrams carry 2 bits, i.e. 1 bit per symbol.
        let probabilities = [0.25, 0.25, 0.25, 0.25];
        assert!((shannon_entropy(probabilities) - 2.0).abs() < EPSILON);
        assert!((entropy_per_symbol(probabilities, 2) - 1.0).abs() < EPSILON);
        assert!((entropy_per_symbol(probabilities, 1) - 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_entropy_skewed_distribution() {
        // H(0.5, 0.25, 0.25) = 0.5 + 0.5 + 0.5
        let entropy = shannon_entropy([0.5, 0.25, 0.25]);
        assert!((entropy - 1.5).abs() < EPSILON);
    }
}
