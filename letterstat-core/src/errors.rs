//! errors.rs - Custom error types for the letterstat-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//! Every failure that would otherwise surface as a division by zero or an
//! undefined logarithm is reported through one of these variants.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

use letterstat_entropy::InvalidAlphabetSize;

/// This enum represents all possible error types in the `letterstat-core` library.
///
/// Marked `#[non_exhaustive]` so new variants can be added without
/// breaking downstream `match` statements.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum LetterstatError {
    /// The input file is missing, not text, or could not be decoded.
    #[error("Unreadable input: {0}")]
    UnreadableInput(String),

    /// A table or estimate has zero observations, so no frequency can be derived.
    #[error("No observations: the symbol stream is empty")]
    EmptyStream,

    #[error("Alphabet size {0} is too small for a uniform baseline (need at least 2 symbols)")]
    InvalidAlphabetSize(usize),

    #[error("Alphabet symbol '{0}' appears more than once")]
    DuplicateSymbol(char),

    #[error("Invalid letter fold '{from}' -> '{to}': the target must be a base letter and the source must not")]
    InvalidFold { from: char, to: char },

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<InvalidAlphabetSize> for LetterstatError {
    fn from(err: InvalidAlphabetSize) -> Self {
        LetterstatError::InvalidAlphabetSize(err.0)
    }
}
