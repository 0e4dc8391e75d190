use std::time::Duration;

use crate::stats;

/// Timing record for one completed pass.
#[derive(Debug, Clone)]
pub struct PassTiming {
    /// 1-based pass index, as printed.
    pub index: u32,
    /// Measured pass duration.
    pub duration: Duration,
    /// Pass duration in milliseconds, divided down from the nanosecond reading.
    pub duration_ms: f64,
    /// Accumulator value after this pass, in milliseconds.
    pub cumulative_ms: f64,
}

/// Results from a full benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkReport {
    /// One timing record per completed pass, in pass order.
    pub passes: Vec<PassTiming>,
    /// Total elapsed milliseconds across all passes.
    pub accumulated_ms: f64,
    /// Wall-clock time measured around the whole run, including loop overhead.
    pub wall_clock: Duration,
}

impl BenchmarkReport {
    /// Render the aggregate statistics block printed when the summary is
    /// requested. Meaningful only when at least one pass ran; the caller is
    /// expected to skip it otherwise.
    pub fn summary_lines(&self) -> Vec<String> {
        let durations: Vec<Duration> = self.passes.iter().map(|p| p.duration).collect();
        let mean = stats::mean(&durations);
        let median = stats::median(&durations);
        let std_dev = stats::std_dev(&durations, mean);
        let min = durations.iter().min().copied().unwrap_or(Duration::ZERO);
        let max = durations.iter().max().copied().unwrap_or(Duration::ZERO);

        vec![
            format!("Avg Time : {:.4}ms", millis(mean)),
            format!("Median Time : {:.4}ms", millis(median)),
            format!("Std Dev : {:.4}ms", millis(std_dev)),
            format!("Min Time : {:.4}ms", millis(min)),
            format!("Max Time : {:.4}ms", millis(max)),
            format!("Wall Clock Time : {:.4}s", self.wall_clock.as_secs_f64()),
        ]
    }
}

/// The per-pass report line: 1-based pass index, pass duration in
/// milliseconds to 4 decimals, and the accumulator so far converted to
/// seconds, also to 4 decimals.
pub fn format_pass_line(timing: &PassTiming) -> String {
    format!(
        "Request - {} : Time {:.4}ms;  Elapsed Time: {:.4}s",
        timing.index,
        timing.duration_ms,
        timing.cumulative_ms / 1000.0
    )
}

/// Milliseconds for a duration, divided down from the nanosecond reading.
pub(crate) fn millis(duration: Duration) -> f64 {
    duration.as_nanos() as f64 / 1_000_000.0
}
