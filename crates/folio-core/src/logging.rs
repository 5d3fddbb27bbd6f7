//! Logging configuration using tracing
//!
//! The TUI owns stdout/stderr, so logs go to rolling files only.

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/termfolio/logs/`
/// Log level is controlled by the `FOLIO_LOG` environment variable.
///
/// # Examples
/// ```bash
/// FOLIO_LOG=debug folio
/// FOLIO_LOG=trace folio
/// ```
pub fn init() -> Result<()> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "folio.log");

    // Default to info, allow override via FOLIO_LOG
    let env_filter = EnvFilter::try_from_env("FOLIO_LOG")
        .unwrap_or_else(|_| EnvFilter::new("termfolio=info,folio_app=info,folio_tui=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    tracing::info!("termfolio starting");
    tracing::info!("Log directory: {}", log_dir.display());

    Ok(())
}

/// Get the log directory path
fn log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("termfolio").join("logs")
}
