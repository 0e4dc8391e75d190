use std::time::Instant;

use reqwest::{Client, Url};

use crate::client::fetch_asset;
use crate::config::BenchmarkConfig;
use crate::error::{FetchmarkError, Result};
use crate::report::{format_pass_line, millis, BenchmarkReport, PassTiming};

/// Drives the benchmark: a configured number of passes over the reversed
/// asset list, one timing record and one stdout report line per pass.
#[derive(Debug)]
pub struct BenchmarkRunner {
    config: BenchmarkConfig,
    client: Client,
}

impl BenchmarkRunner {
    /// Builds a runner for the given configuration.
    ///
    /// The HTTP client is created once and shared across every request, so
    /// connections are pooled between requests of the same run. The client
    /// keeps its defaults; no request timeout is configured.
    ///
    /// # Errors
    ///
    /// Returns [`FetchmarkError::Configuration`] when the base URL does not
    /// parse, or [`FetchmarkError::Http`] when the client cannot be built.
    pub fn new(config: BenchmarkConfig) -> Result<Self> {
        Url::parse(&config.base_url).map_err(|e| {
            FetchmarkError::Configuration(format!("Invalid base URL {:?}: {}", config.base_url, e))
        })?;

        let client = Client::builder().build()?;

        Ok(Self { config, client })
    }

    /// Runs all configured passes and returns the collected timings.
    ///
    /// Each pass traverses the asset list in reverse declared order, awaiting
    /// every request to completion before issuing the next. The pass duration
    /// is measured around the whole traversal, added to the running
    /// accumulator, and reported on stdout as one line per pass. When the
    /// summary is enabled and at least one pass ran, the aggregate statistics
    /// block follows the final pass line.
    ///
    /// # Errors
    ///
    /// The first failed request (connection failure, timeout, non-2xx status)
    /// aborts the run immediately: no further requests are issued, no line is
    /// printed for the incomplete pass, and the error propagates to the
    /// caller. Failures are never retried.
    pub async fn run(&self) -> Result<BenchmarkReport> {
        let urls = self.config.request_urls();

        tracing::info!(
            target: "fetchmark::runner",
            "Running {} pass(es) of {} requests against {}",
            self.config.passes,
            urls.len(),
            self.config.base_url
        );

        let mut passes = Vec::with_capacity(self.config.passes as usize);
        let mut accumulated_ms = 0.0_f64;

        let wall_start = Instant::now();
        for index in 1..=self.config.passes {
            let pass_start = Instant::now();
            for url in &urls {
                let bytes = fetch_asset(&self.client, url).await?;
                tracing::debug!(
                    target: "fetchmark::runner",
                    "GET {} ({} bytes)",
                    url,
                    bytes
                );
            }
            let duration = pass_start.elapsed();

            let duration_ms = millis(duration);
            accumulated_ms += duration_ms;

            let timing = PassTiming {
                index,
                duration,
                duration_ms,
                cumulative_ms: accumulated_ms,
            };
            println!("{}", format_pass_line(&timing));
            passes.push(timing);
        }
        let wall_clock = wall_start.elapsed();

        let report = BenchmarkReport {
            passes,
            accumulated_ms,
            wall_clock,
        };

        if self.config.summary && !report.passes.is_empty() {
            for line in report.summary_lines() {
                println!("{}", line);
            }
        }

        tracing::debug!(
            target: "fetchmark::runner",
            "Completed {} pass(es) in {:?}",
            report.passes.len(),
            report.wall_clock
        );

        Ok(report)
    }
}
