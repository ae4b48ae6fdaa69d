// letterstat-core/src/lib.rs
//! # letterstat Core Library
//!
//! `letterstat-core` provides the platform-independent logic for measuring
//! the information content of natural-language text: letter and bigram
//! frequencies, Shannon entropy per symbol, and redundancy relative to a
//! uniform alphabet.
//!
//! The library is pure and stateless. It takes an already decoded string
//! and returns immutable tables and metrics, leaving file access, encoding
//! detection and presentation to its callers.
//!
//! ## Modules
//!
//! * `alphabet`: The fixed Cyrillic symbol set, letter folds and the whitespace class.
//! * `normalizer`: Maps raw text to a canonical symbol stream.
//! * `ngram`: N-gram keys and the counting policies (order × whitespace × overlap).
//! * `counter`: Builds zero-filled occurrence tables from a symbol stream.
//! * `frequency`: Converts occurrence tables into frequency distributions.
//! * `metrics`: Per-symbol entropy and redundancy, including estimates from entropy bounds.
//! * `pipeline`: Runs every configured policy over one text.
//! * `report`: Serializable sheets and metric rows for exporters.
//! * `config`: YAML analysis configuration with embedded defaults.
//! * `errors`: Typed errors for empty streams and degenerate alphabets.
//!
//! ## Usage Example
//!
//! ```rust
//! use letterstat_core::{analyze_text, merge_config, Alphabet, AnalysisConfig, CountPolicy};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let config = merge_config(AnalysisConfig::load_default()?, None);
//!     let analysis = analyze_text("Съешь же ещё этих мягких французских булок.", Alphabet::cyrillic(), &config);
//!
//!     let monograms = analysis.get(CountPolicy::monogram(false)).unwrap();
//!     let metrics = monograms.metrics.as_ref().unwrap();
//!     println!("H1 = {:.4}, R = {:.4}", metrics.entropy, metrics.redundancy);
//!     assert!(metrics.entropy > 0.0);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Numeric preconditions are reported through [`LetterstatError`]: an empty
//! stream never turns into `NaN`, and an alphabet with fewer than two
//! symbols never reaches `log2`. Configuration loading uses `anyhow::Error`
//! with context.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod alphabet;
pub mod config;
pub mod counter;
pub mod errors;
pub mod frequency;
pub mod metrics;
pub mod ngram;
pub mod normalizer;
pub mod pipeline;
pub mod report;

/// Re-exports the alphabet and its built-in constants.
pub use alphabet::{Alphabet, Symbol, CYRILLIC_FOLDS, CYRILLIC_LETTERS, WHITESPACE_SYMBOL};

/// Re-exports the configuration types and loaders.
pub use config::{merge_config, AnalysisConfig, ReportConfig};

/// Re-exports the custom error type for clear error reporting.
pub use errors::LetterstatError;

/// Re-exports the counting pipeline stages.
pub use counter::{count_ngrams, count_with_policy, OccurrenceTable};
pub use frequency::FrequencyDistribution;
pub use metrics::{entropy, redundancy, redundancy_from_bounds, BoundsEstimate};
pub use ngram::{CountPolicy, Ngram, NgramOrder};
pub use normalizer::{normalize, SymbolStream};

/// Re-exports the one-shot analysis entry points.
pub use pipeline::{analyze_text, derive_metrics, PolicyAnalysis, PolicyMetrics, TextAnalysis};

/// Re-exports report types for exporters.
pub use report::{build_report, ranked_monograms, Cell, MetricRow, RankedEntry, Sheet, SheetData, TextReport};
