use std::time::Duration;

/// Mean of the recorded pass durations
pub fn mean(durations: &[Duration]) -> Duration {
    if durations.is_empty() {
        return Duration::ZERO;
    }

    let total: Duration = durations.iter().sum();
    total / durations.len() as u32
}

/// Median pass duration
///
/// The input is left untouched; ordering happens on a copy.
pub fn median(durations: &[Duration]) -> Duration {
    if durations.is_empty() {
        return Duration::ZERO;
    }

    let mut sorted = durations.to_vec();
    sorted.sort();

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        // Even number of passes - average the two middle values
        (sorted[mid - 1] + sorted[mid]) / 2
    } else {
        sorted[mid]
    }
}

/// Sample standard deviation of the pass durations
pub fn std_dev(durations: &[Duration], mean: Duration) -> Duration {
    if durations.len() <= 1 {
        return Duration::ZERO;
    }

    let mean_nanos = mean.as_nanos() as f64;

    let variance: f64 = durations
        .iter()
        .map(|d| {
            let diff = d.as_nanos() as f64 - mean_nanos;
            diff * diff
        })
        .sum::<f64>()
        / (durations.len() - 1) as f64; // Sample standard deviation (n-1)

    Duration::from_nanos(variance.sqrt() as u64)
}
