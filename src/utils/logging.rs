// src/utils/logging.rs
use tracing_subscriber::{fmt, EnvFilter};

// Used when RUST_LOG is unset: the grader's own progress at info, dependencies only on warnings.
const DEFAULT_FILTER: &str = "warn,exam_grader=info";

/// Installs the global subscriber for a grading run.
///
/// `RUST_LOG` overrides the filter (`RUST_LOG=exam_grader=debug` shows
/// per-document extraction). Log lines go to stderr so the results table
/// on stdout can be piped on its own.
pub fn setup_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Logging ready (filter from RUST_LOG or '{}')", DEFAULT_FILTER);
}
