//! Logging infrastructure
//!
//! Structured logging with an optional daily-rolling file appender so the
//! request/response trail survives restarts.

use std::path::Path;

/// Initialize the logger from the environment
///
/// Reads `LABEL_LOG_DIR` (default `logs`) for the rolling file location and
/// `LABEL_LOG_LEVEL` (default `info`) for the level filter.
pub fn init_logger() {
    let level = std::env::var("LABEL_LOG_LEVEL").unwrap_or_else(|_| "info".into());
    let log_dir = std::env::var("LABEL_LOG_DIR").unwrap_or_else(|_| "logs".into());
    init_logger_with(&level, Some(&log_dir));
}

/// Initialize the logger with explicit settings
pub fn init_logger_with(log_level: &str, log_dir: Option<&str>) {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(log_level.parse().unwrap_or(tracing::Level::INFO))
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    // Roll the request log daily when a writable directory is available
    if let Some(dir) = log_dir {
        let created = Path::new(dir).exists() || std::fs::create_dir_all(dir).is_ok();
        if created {
            let file_appender = tracing_appender::rolling::daily(dir, "label-server");
            subscriber.with_writer(file_appender).init();
            return;
        }
    }

    subscriber.init();
}
