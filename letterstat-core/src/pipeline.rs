// File: letterstat-core/src/pipeline.rs

//! One-shot analysis of a decoded text.
//!
//! Normalizes the text once per whitespace mode, then counts, estimates
//! frequencies and derives metrics for every configured policy. Each policy
//! carries its own `Result`, so an empty stream under one policy does not
//! hide the results of the others.

use log::{debug, info, warn};

use crate::alphabet::Alphabet;
use crate::config::AnalysisConfig;
use crate::counter::{count_with_policy, OccurrenceTable};
use crate::errors::LetterstatError;
use crate::frequency::FrequencyDistribution;
use crate::metrics::{entropy, redundancy};
use crate::ngram::CountPolicy;
use crate::normalizer::{normalize, SymbolStream};

/// Derived statistics for one policy.
#[derive(Debug, Clone, PartialEq)]
pub struct PolicyMetrics {
    pub distribution: FrequencyDistribution,
    /// Bits per symbol.
    pub entropy: f64,
    pub redundancy: f64,
}

/// Everything computed for one policy combination.
#[derive(Debug)]
pub struct PolicyAnalysis {
    pub policy: CountPolicy,
    pub table: OccurrenceTable,
    pub metrics: Result<PolicyMetrics, LetterstatError>,
}

/// The results for a single text.
#[derive(Debug)]
pub struct TextAnalysis {
    /// Length of the raw input in characters, before trimming.
    pub text_length: usize,
    pub policies: Vec<PolicyAnalysis>,
}

impl TextAnalysis {
    pub fn get(&self, policy: CountPolicy) -> Option<&PolicyAnalysis> {
        self.policies.iter().find(|analysis| analysis.policy == policy)
    }

    /// Number of policies whose metrics could not be computed.
    pub fn failures(&self) -> usize {
        self.policies.iter().filter(|analysis| analysis.metrics.is_err()).count()
    }
}

/// Frequencies, entropy and redundancy for one occurrence table.
pub fn derive_metrics(table: &OccurrenceTable) -> Result<PolicyMetrics, LetterstatError> {
    let distribution = FrequencyDistribution::from_table(table)?;
    let entropy = entropy(&distribution);
    let redundancy = redundancy(entropy, table.alphabet_size())?;
    Ok(PolicyMetrics {
        distribution,
        entropy,
        redundancy,
    })
}

/// Runs every policy in `config` over `text`.
pub fn analyze_text(text: &str, alphabet: &Alphabet, config: &AnalysisConfig) -> TextAnalysis {
    let text_length = text.chars().count();
    let prepared = if config.trim_input() { text.trim() } else { text };
    info!("Analyzing text of {} characters with {} policies.", text_length, config.policies.len());

    let mut streams: [Option<SymbolStream>; 2] = [None, None];
    let mut policies = Vec::with_capacity(config.policies.len());

    for &policy in &config.policies {
        let slot = usize::from(policy.include_whitespace);
        let stream = streams[slot]
            .get_or_insert_with(|| normalize(prepared, alphabet, policy.include_whitespace));

        let table = count_with_policy(stream, policy);
        let metrics = derive_metrics(&table);

        match &metrics {
            Ok(m) => debug!("{}: total {}, entropy {:.6}, redundancy {:.6}", policy, table.total(), m.entropy, m.redundancy),
            Err(e) => warn!("{}: {}", policy, e),
        }

        policies.push(PolicyAnalysis { policy, table, metrics });
    }

    TextAnalysis { text_length, policies }
}
