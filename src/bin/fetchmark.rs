use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use fetchmark::{init_tracing, BenchmarkConfig, BenchmarkRunner, DEFAULT_BASE_URL, FetchmarkError};

/// Timing benchmark for a static-asset HTTP server
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Base URL of the server under measurement
    #[clap(long, value_name = "URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Number of benchmark passes over the asset list
    #[clap(long, value_name = "COUNT", default_value_t = 1)]
    passes: u32,

    /// Print aggregate timing statistics after the final pass
    #[clap(long)]
    summary: bool,

    /// Directory for log files; logging stays on stderr when omitted
    #[clap(long, value_name = "PATH")]
    logs_dir: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), FetchmarkError> {
    let args = Args::parse();

    if let Some(dir) = &args.logs_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create logs directory: {:?}", dir))
            .map_err(FetchmarkError::from)?;
    }
    init_tracing(args.logs_dir.as_deref())?;

    tracing::info!("=== Starting Fetchmark ===");

    let config = BenchmarkConfig {
        base_url: args.base_url,
        passes: args.passes,
        summary: args.summary,
    };

    let runner = BenchmarkRunner::new(config)?;
    runner.run().await?;

    tracing::info!("=== Benchmark Completed ===");

    Ok(())
}
