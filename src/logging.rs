//! Logging configuration using tracing
//!
//! The catalog runs inside a terminal UI, so log output never goes to
//! stdout/stderr. Everything is written to a daily rolling file instead.

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "CATALOG_LOG";

const LOG_FILE_NAME: &str = "catalog.log";

/// Initialize the logging subsystem
///
/// Logs are written to `<data-local-dir>/catalog-widgets/logs/`.
/// Log level is controlled by the `CATALOG_LOG` environment variable.
///
/// # Examples
/// ```bash
/// CATALOG_LOG=debug my-catalog-app
/// CATALOG_LOG=catalog_widgets=trace my-catalog-app
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new("catalog_widgets=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("catalog starting, log directory: {}", log_dir.display());

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join(crate::config::APP_DIR_NAME).join("logs")
}

/// Get the path prefix shared by all log files
///
/// The appender rotates daily and appends the UTC date, so the file actually
/// written is `<prefix>.YYYY-MM-DD`. See [`get_log_file_for_date`].
pub fn get_log_file_prefix() -> PathBuf {
    get_log_directory().join(LOG_FILE_NAME)
}

/// Get the log file written on `date` (formatted `YYYY-MM-DD`, UTC)
pub fn get_log_file_for_date(date: &str) -> PathBuf {
    get_log_directory().join(format!("{LOG_FILE_NAME}.{date}"))
}
