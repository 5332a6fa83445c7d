//! Tracing subscriber setup
//!
//! The terminal is owned by the UI while the demo runs, so diagnostics are
//! written to a log file instead of stderr.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the global tracing subscriber, logging to `log_file_path`.
///
/// Filtering follows `RUST_LOG` with a DEBUG default. Returns `false` if the
/// log file could not be created; the demo then runs without logging.
pub fn init_global(log_file_path: &Path) -> bool {
    match File::create(log_file_path) {
        Ok(log_file) => build_subscriber(log_file).init(),
        Err(_) => return false,
    }
    true
}

/// Subscriber writing to `log_file`, shared by the binary and tests
pub fn build_subscriber(log_file: File) -> impl tracing::Subscriber + Send + Sync {
    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into());

    let fmt_layer = fmt::layer().with_ansi(false).with_writer(Arc::new(log_file));

    tracing_subscriber::registry().with(fmt_layer).with(env_filter)
}
