//! The fixed symbol set that text is normalized against.
//!
//! An [`Alphabet`] is an ordered list of base letters plus a set of letter
//! folds (a source letter counted as its target). The whitespace class is
//! not a base letter: it is an extra symbol appended after the letters when
//! a policy includes whitespace, so the active alphabet has either `len()` or
//! `len() + 1` symbols.
//!
//! License: MIT OR Apache-2.0

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::{Serialize, Serializer};

use crate::errors::LetterstatError;

/// The 31 base letters of the Russian alphabet used for analysis.
pub const CYRILLIC_LETTERS: &str = "абвгдежзийклмнопрстуфхцчшщыьэюя";

/// Letters merged into a canonical counterpart before filtering: `ё` counts as `е`, `ъ` as `ь`.
pub const CYRILLIC_FOLDS: [(char, char); 2] = [('ё', 'е'), ('ъ', 'ь')];

/// The character used to display the whitespace class.
pub const WHITESPACE_SYMBOL: char = ' ';

static CYRILLIC: Lazy<Alphabet> = Lazy::new(|| {
    Alphabet::new(CYRILLIC_LETTERS, &CYRILLIC_FOLDS)
        .expect("built-in Cyrillic alphabet must be valid")
});

/// A symbol of the active alphabet, stored as its position.
///
/// Positions `0..len()` are base letters; position `len()` is the whitespace class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(usize);

impl Symbol {
    pub(crate) fn from_index(index: usize) -> Self {
        Symbol(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// An ordered, duplicate-free set of base letters with optional letter folds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    letters: Vec<char>,
    lookup: HashMap<char, Symbol>,
    folds: Vec<(char, char)>,
}

impl Alphabet {
    /// Builds an alphabet from its base letters and `(source, target)` folds.
    ///
    /// Fails if a letter repeats, if the whitespace symbol is used as a
    /// letter, if fewer than two letters are given, or if a fold does not map
    /// a non-letter onto a base letter.
    pub fn new(letters: &str, folds: &[(char, char)]) -> Result<Self, LetterstatError> {
        let letters: Vec<char> = letters.chars().collect();
        let mut lookup = HashMap::with_capacity(letters.len() + folds.len());

        for (index, &letter) in letters.iter().enumerate() {
            if letter == WHITESPACE_SYMBOL || lookup.insert(letter, Symbol(index)).is_some() {
                return Err(LetterstatError::DuplicateSymbol(letter));
            }
        }

        if letters.len() < 2 {
            return Err(LetterstatError::InvalidAlphabetSize(letters.len()));
        }

        for &(from, to) in folds {
            let target = match lookup.get(&to) {
                Some(&symbol) if symbol.0 < letters.len() && !letters.contains(&from) => symbol,
                _ => return Err(LetterstatError::InvalidFold { from, to }),
            };
            lookup.insert(from, target);
        }

        Ok(Self {
            letters,
            lookup,
            folds: folds.to_vec(),
        })
    }

    /// The built-in 31-letter Cyrillic alphabet with `ё→е` and `ъ→ь` folds.
    pub fn cyrillic() -> &'static Alphabet {
        &CYRILLIC
    }

    /// Number of base letters (whitespace excluded).
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Number of distinct single symbols under a whitespace policy.
    pub fn active_size(&self, include_whitespace: bool) -> usize {
        self.letters.len() + usize::from(include_whitespace)
    }

    /// Maps an already lowercased character to its symbol, applying folds.
    pub fn symbol_of(&self, ch: char) -> Option<Symbol> {
        self.lookup.get(&ch).copied()
    }

    /// The symbol standing for any run of non-alphabet characters.
    pub fn whitespace(&self) -> Symbol {
        Symbol(self.letters.len())
    }

    /// Display character for a symbol.
    pub fn char_of(&self, symbol: Symbol) -> char {
        self.letters
            .get(symbol.0)
            .copied()
            .unwrap_or(WHITESPACE_SYMBOL)
    }

    /// Symbols of the active alphabet in order, whitespace last.
    pub fn symbols(&self, include_whitespace: bool) -> impl Iterator<Item = Symbol> {
        (0..self.active_size(include_whitespace)).map(Symbol)
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn folds(&self) -> &[(char, char)] {
        &self.folds
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for letter in &self.letters {
            write!(f, "{}", letter)?;
        }
        Ok(())
    }
}

impl Serialize for Alphabet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cyrillic_has_31_letters_and_32_with_whitespace() {
        let alphabet = Alphabet::cyrillic();
        assert_eq!(alphabet.len(), 31);
        assert_eq!(alphabet.active_size(false), 31);
        assert_eq!(alphabet.active_size(true), 32);
        assert_eq!(alphabet.whitespace().index(), 31);
        assert_eq!(alphabet.char_of(alphabet.whitespace()), ' ');
    }

    #[test]
    fn folds_map_onto_their_targets() {
        let alphabet = Alphabet::cyrillic();
        assert_eq!(alphabet.symbol_of('ё'), alphabet.symbol_of('е'));
        assert_eq!(alphabet.symbol_of('ъ'), alphabet.symbol_of('ь'));
        assert!(alphabet.symbol_of('a').is_none());
        assert!(alphabet.symbol_of(' ').is_none());
    }

    #[test]
    fn symbols_are_ordered_with_whitespace_last() {
        let alphabet = Alphabet::cyrillic();
        let chars: String = alphabet
            .symbols(true)
            .map(|s| alphabet.char_of(s))
            .collect();
        assert_eq!(chars, format!("{} ", CYRILLIC_LETTERS));
    }

    #[test]
    fn rejects_duplicate_letters() {
        let err = Alphabet::new("абва", &[]).unwrap_err();
        assert!(matches!(err, LetterstatError::DuplicateSymbol('а')));
    }

    #[test]
    fn rejects_whitespace_as_letter() {
        let err = Alphabet::new("а б", &[]).unwrap_err();
        assert!(matches!(err, LetterstatError::DuplicateSymbol(' ')));
    }

    #[test]
    fn rejects_single_letter_alphabet() {
        let err = Alphabet::new("а", &[]).unwrap_err();
        assert!(matches!(err, LetterstatError::InvalidAlphabetSize(1)));
    }

    #[test]
    fn rejects_folds_onto_unknown_or_from_known_letters() {
        assert!(matches!(
            Alphabet::new("аб", &[('в', 'г')]).unwrap_err(),
            LetterstatError::InvalidFold { from: 'в', to: 'г' }
        ));
        assert!(matches!(
            Alphabet::new("аб", &[('а', 'б')]).unwrap_err(),
            LetterstatError::InvalidFold { from: 'а', to: 'б' }
        ));
    }

    #[test]
    fn displays_as_its_letters() {
        assert_eq!(Alphabet::cyrillic().to_string(), CYRILLIC_LETTERS);
    }
}
