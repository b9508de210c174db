//! A file logger for hosts that do not install one.
//!
//! The log file is opened once, when the logger is installed, so a bad path
//! is reported up front instead of silently dropping every record.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

use log::{LevelFilter, Metadata, Record, SetLoggerError};
use thiserror::Error;

/// Why the file logger could not be installed.
#[derive(Error, Debug)]
pub enum LogInitError {
    #[error("cannot open log file {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Another logger is already installed for this process.
    #[error(transparent)]
    AlreadySet(#[from] SetLoggerError),
}

struct SessionLogger {
    level: LevelFilter,
    file: Mutex<File>,
}

impl log::Log for SessionLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(
                file,
                "{:<5} {}: {}",
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

/// Installs a logger appending debug-level records to `path`.
pub fn init_logger(path: impl AsRef<Path>) -> Result<(), LogInitError> {
    init_logger_with_level(path, LevelFilter::Debug)
}

/// Installs a logger appending records up to `level` to `path`.
///
/// Hosts that already run a logger should skip this; a second call returns
/// [`LogInitError::AlreadySet`].
pub fn init_logger_with_level(
    path: impl AsRef<Path>,
    level: LevelFilter,
) -> Result<(), LogInitError> {
    let path = path.as_ref();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LogInitError::Open {
            path: path.display().to_string(),
            source,
        })?;

    log::set_boxed_logger(Box::new(SessionLogger {
        level,
        file: Mutex::new(file),
    }))?;
    log::set_max_level(level);
    Ok(())
}
