//! Alphabet normalizer: raw text to a canonical symbol stream.
//!
//! Characters are lowercased and folded, then kept if they are base
//! letters. Everything else either disappears or, when whitespace is
//! included, becomes a single whitespace symbol per run.

use log::debug;

use crate::alphabet::{Alphabet, Symbol};

/// The normalized sequence of alphabet and whitespace symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolStream {
    symbols: Vec<Symbol>,
    include_whitespace: bool,
    alphabet_size: usize,
}

impl SymbolStream {
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Number of emitted symbols (the stream total).
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn include_whitespace(&self) -> bool {
        self.include_whitespace
    }

    /// Size of the active alphabet the stream was built against.
    pub fn alphabet_size(&self) -> usize {
        self.alphabet_size
    }

    /// Renders the stream back to text, mostly useful in tests and logs.
    pub fn render(&self, alphabet: &Alphabet) -> String {
        self.symbols.iter().map(|&s| alphabet.char_of(s)).collect()
    }
}

/// Normalizes `text` against `alphabet`.
///
/// A non-alphabet character emits whitespace only if the last emitted
/// symbol is not already whitespace. At the very start nothing has been
/// emitted yet, so a leading non-alphabet run produces one whitespace symbol.
pub fn normalize(text: &str, alphabet: &Alphabet, include_whitespace: bool) -> SymbolStream {
    let whitespace = alphabet.whitespace();
    let mut last_emitted: Option<Symbol> = None;
    let mut symbols = Vec::with_capacity(text.len() / 2);

    for ch in text.chars().flat_map(char::to_lowercase) {
        let symbol = match alphabet.symbol_of(ch) {
            Some(symbol) => symbol,
            None if include_whitespace && last_emitted != Some(whitespace) => whitespace,
            None => continue,
        };
        symbols.push(symbol);
        last_emitted = Some(symbol);
    }

    debug!(
        "Normalized {} bytes into {} symbols (whitespace: {}).",
        text.len(),
        symbols.len(),
        include_whitespace
    );

    SymbolStream {
        symbols,
        include_whitespace,
        alphabet_size: alphabet.active_size(include_whitespace),
    }
}
