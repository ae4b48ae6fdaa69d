// letterstat-entropy/src/redundancy/mod.rs
use core::fmt;
use libm::log2;

use crate::EntropyScore;

/// Error returned when an alphabet is too small to form a uniform baseline.
///
/// `log2(1)` is zero and `log2(0)` is undefined, so at least two symbols are required.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidAlphabetSize(pub usize);

impl fmt::Display for InvalidAlphabetSize {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "alphabet size {} is too small for a uniform baseline; at least 2 symbols are required",
            self.0
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidAlphabetSize {}

/// Entropy of the uniform distribution over `alphabet_size` symbols (`H0 = log2(n)`).
pub fn max_entropy(alphabet_size: usize) -> Result<EntropyScore, InvalidAlphabetSize> {
    if alphabet_size < 2 {
        return Err(InvalidAlphabetSize(alphabet_size));
    }
    Ok(log2(alphabet_size as f64))
}

/// Redundancy of a source with per-symbol `entropy` relative to a uniform
/// alphabet of `alphabet_size` symbols: `R = 1 - H / log2(n)`.
///
/// The result is not clamped. An entropy estimate above the theoretical
/// maximum yields a negative redundancy.
pub fn redundancy(entropy: EntropyScore, alphabet_size: usize) -> Result<f64, InvalidAlphabetSize> {
    let baseline = max_entropy(alphabet_size)?;
    Ok(1.0 - entropy / baseline)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_rejects_degenerate_alphabets() {
        assert_eq!(max_entropy(0), Err(InvalidAlphabetSize(0)));
        assert_eq!(redundancy(0.0, 1), Err(InvalidAlphabetSize(1)));
    }

    #[test]
    fn test_zero_entropy_is_fully_redundant() {
        assert_eq!(redundancy(0.0, 31), Ok(1.0));
    }

    #[test]
    fn test_uniform_entropy_has_no_redundancy() {
        let r = redundancy(5.0, 32).unwrap();
        assert!(r.abs() < EPSILON);
    }

    #[test]
    fn test_not_clamped_above_baseline() {
        let r = redundancy(6.0, 32).unwrap();
        assert!((r - (-0.2)).abs() < EPSILON);
    }

    #[test]
    fn test_max_entropy_of_binary_alphabet() {
        assert!((max_entropy(2).unwrap() - 1.0).abs() < EPSILON);
    }
}
