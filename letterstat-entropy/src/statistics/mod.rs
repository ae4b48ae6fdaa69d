use libm::sqrt;

/// Summary statistics for a set of entropy estimates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntropyStats {
    /// The arithmetic mean of the estimates.
    pub mean: f64,
    /// The population standard deviation of the estimates.
    pub std_dev: f64,
}

/// Calculates mean and standard deviation for a slice of values.
///
/// Used to collapse lower/upper entropy bounds (e.g. H10 read off a
/// predictability chart) into a single point estimate plus its spread.
pub fn compute_stats(values: &[f64]) -> EntropyStats {
    if values.is_empty() {
        return EntropyStats { mean: 0.0, std_dev: 0.0 };
    }

    let len = values.len() as f64;

    let mean = values.iter().sum::<f64>() / len;

    // Population variance: average of squared deviations from the mean.
    let variance = values.iter()
        .map(|value| {
            let diff = mean - value;
            diff * diff
        })
        .sum::<f64>() / len;

    EntropyStats {
        mean,
        std_dev: sqrt(variance),
    }
}
