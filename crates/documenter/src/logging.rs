//! Tracing setup.
//!
//! `-v` flags add a stderr layer (info, debug, trace). Setting `DOCUMENTER_LOG_LEVEL` adds a file
//! layer under the user's cache directory filtered by that value.

use std::path::PathBuf;

use thiserror::Error;
use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::{
    EnvFilter,
    ParseError,
};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{
    SubscriberInitExt,
    TryInitError,
};
use tracing_subscriber::{
    Layer,
    fmt,
};

use crate::constants::{
    APP_DIR_NAME,
    LOG_FILE_NAME,
    LOG_LEVEL_ENV,
};

#[derive(Debug, Error)]
pub enum LogError {
    #[error("no cache directory available for the log file")]
    NoLogDir,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("invalid {LOG_LEVEL_ENV}: {0}")]
    Filter(#[from] ParseError),
    #[error(transparent)]
    Init(#[from] TryInitError),
}

/// Keeps the file writer alive; dropping it flushes buffered log lines.
#[must_use]
#[derive(Debug)]
pub struct LogGuard {
    _file_guard: Option<WorkerGuard>,
}

pub fn log_dir() -> Result<PathBuf, LogError> {
    dirs::cache_dir()
        .map(|dir| dir.join(APP_DIR_NAME).join("logs"))
        .ok_or(LogError::NoLogDir)
}

pub fn verbosity_level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::OFF,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// The most verbose level any installed layer will record.
pub fn get_log_level_max() -> LevelFilter {
    LevelFilter::current()
}

pub fn initialize_logging(verbosity: u8) -> Result<LogGuard, LogError> {
    let stderr_layer = (verbosity > 0).then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_filter(verbosity_level(verbosity))
    });

    let (file_layer, file_guard) = match std::env::var(LOG_LEVEL_ENV) {
        Ok(level) => {
            let filter = EnvFilter::try_new(level)?;
            let dir = log_dir()?;
            std::fs::create_dir_all(&dir)?;
            let appender = tracing_appender::rolling::never(&dir, LOG_FILE_NAME);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_writer(writer).with_ansi(false).with_filter(filter);
            (Some(layer), Some(guard))
        },
        Err(_) => (None, None),
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .try_init()?;

    Ok(LogGuard {
        _file_guard: file_guard,
    })
}
