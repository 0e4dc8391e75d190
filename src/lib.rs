pub use crate::config::{BenchmarkConfig, DEFAULT_ASSET_PATHS, DEFAULT_BASE_URL};
pub use crate::error::{FetchmarkError, Result};
pub use crate::report::{format_pass_line, BenchmarkReport, PassTiming};
pub use crate::runner::BenchmarkRunner;

use once_cell::sync::OnceCell;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{filter::EnvFilter, fmt::Layer, prelude::*, registry::Registry};

use std::path::Path;
use std::sync::Mutex;

mod client;
mod config;
mod error;
mod report;
mod runner;
mod stats;

static TRACING_GUARDS: OnceCell<Mutex<Option<(WorkerGuard, Option<WorkerGuard>)>>> =
    OnceCell::new();
static TRACING_INIT: OnceCell<()> = OnceCell::new();

/// Initializes tracing with a non-blocking stderr layer and, when `logs_dir`
/// is given, a daily-rolling file layer in that directory. stdout is left
/// untouched: it carries the benchmark report lines.
///
/// The filter honors `RUST_LOG` and defaults to `info`. Only the first call
/// configures anything; later calls are no-ops.
///
/// # Errors
///
/// Returns [`FetchmarkError::LoggingSetup`] if the file appender cannot be
/// created in `logs_dir`.
pub fn init_tracing(logs_dir: Option<&Path>) -> Result<()> {
    TRACING_INIT
        .get_or_try_init(|| -> Result<()> {
            let (file_writer, file_guard) = match logs_dir {
                Some(dir) => {
                    let file_appender = tracing_appender::rolling::RollingFileAppender::builder()
                        .rotation(tracing_appender::rolling::Rotation::DAILY)
                        .filename_prefix("fetchmark")
                        .filename_suffix("log")
                        .build(dir)
                        .map_err(|e| FetchmarkError::LoggingSetup(e.to_string()))?;
                    let (writer, guard) = tracing_appender::non_blocking(file_appender);
                    (Some(writer), Some(guard))
                }
                None => (None, None),
            };
            let (non_blocking_stderr, stderr_guard) =
                tracing_appender::non_blocking(std::io::stderr());

            TRACING_GUARDS
                .set(Mutex::new(Some((stderr_guard, file_guard))))
                .ok();

            let stderr_layer = Layer::new()
                .with_writer(non_blocking_stderr)
                .with_ansi(true)
                .with_target(true);

            let file_layer = file_writer
                .map(|writer| Layer::new().with_writer(writer).with_ansi(false).with_target(true));

            Registry::default()
                .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
                .with(stderr_layer)
                .with(file_layer)
                .init();

            Ok(())
        })
        .map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // A single test covers the whole lifecycle: the global subscriber can only
    // be installed once per process, so ordering between separate tests would
    // be nondeterministic.
    #[test]
    fn test_init_tracing_lifecycle() {
        let logs_dir = TempDir::new().expect("Failed to create temp logs dir");

        // A path that is a file, not a directory, cannot host the appender.
        let blocked = logs_dir.path().join("blocked");
        std::fs::write(&blocked, "not a directory").unwrap();
        let result = init_tracing(Some(&blocked));
        assert!(matches!(result, Err(FetchmarkError::LoggingSetup(_))));

        // A failed attempt leaves initialization available.
        assert!(init_tracing(Some(logs_dir.path())).is_ok());

        // Later calls are no-ops, whatever their arguments.
        assert!(init_tracing(None).is_ok());
        assert!(init_tracing(Some(logs_dir.path())).is_ok());
    }
}
