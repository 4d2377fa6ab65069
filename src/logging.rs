//! Logging setup
//!
//! The terminal belongs to the UI, so log output goes to JSON lines in a
//! daily rolling file instead of stdout/stderr.
//!
//! Precedence for the filter: RUST_LOG env var > config `logging.level` > "info".

use crate::config::LoggingConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_FILE_PREFIX: &str = "bookshelf-tui.log";

/// Filter directive used when RUST_LOG is unset
pub fn default_filter(level: &str) -> String {
    let level = if level.trim().is_empty() { "info" } else { level.trim() };
    format!("bookshelf_tui={}", level)
}

/// Install the global subscriber.
///
/// The returned guard flushes buffered lines when dropped and must be kept
/// alive until the program exits. Problems are reported on stderr, before
/// the alternate screen is entered, and leave logging disabled.
pub fn init(config: &LoggingConfig) -> Option<WorkerGuard> {
    if !config.file_enabled {
        return None;
    }

    let Some(dir) = config.resolved_dir() else {
        eprintln!("Warning: Could not determine log directory, logging disabled");
        return None;
    };
    if let Err(e) = std::fs::create_dir_all(&dir) {
        eprintln!("Warning: Could not create log directory {:?}: {}", dir, e);
        return None;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter(&config.level).into());

    let file_appender = tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(non_blocking)
                .with_ansi(false),
        )
        .try_init();

    if let Err(e) = installed {
        eprintln!("Warning: Could not initialize logging: {}", e);
        return None;
    }
    Some(guard)
}
