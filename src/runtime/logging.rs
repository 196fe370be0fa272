// SPDX-License-Identifier: MIT OR Apache-2.0

//! Process-wide logging bootstrap.
//!
//! The monitor logs to the console and to a log file next to the
//! process. Built on `tracing` with one `fmt` layer per target; the
//! `RUST_LOG` environment variable overrides the configured level.
//!
//! # Example
//!
//! ```no_run
//! use pve_config_rs::runtime::{LogLevel, LoggingConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! LoggingConfig::new()
//!     .with_level(LogLevel::Debug)
//!     .init()?;
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::Dispatch;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt as fmt_layer, EnvFilter};

use crate::error::{PveError, Result};

/// Default log file, created in the working directory of the process.
pub const DEFAULT_LOG_FILE: &str = "monitor_app.log";

/// Log level for the bootstrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Trace level - most verbose.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warn level.
    Warn,
    /// Error level - only errors.
    Error,
    /// Disabled - no logging.
    Off,
}

impl LogLevel {
    /// The filter directive understood by `EnvFilter`.
    #[must_use]
    pub fn directive(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Off => "off",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Off => write!(f, "OFF"),
        }
    }
}

/// Configuration for the logging bootstrap.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Level applied when `RUST_LOG` is not set.
    pub level: LogLevel,
    /// Log file target; `None` logs to the console only.
    pub file: Option<PathBuf>,
    /// Whether console output uses ANSI colors.
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            file: Some(PathBuf::from(DEFAULT_LOG_FILE)),
            ansi: true,
        }
    }
}

impl LoggingConfig {
    /// Create a new logging configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fallback log level.
    #[must_use]
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Set the log file target.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Log to the console only.
    #[must_use]
    pub fn without_file(mut self) -> Self {
        self.file = None;
        self
    }

    /// Enable or disable ANSI colors on the console.
    #[must_use]
    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }

    /// Build the subscriber for this configuration.
    ///
    /// The log file is opened in append mode and shared with previous
    /// runs of the process.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file cannot be opened.
    pub fn dispatch(&self) -> Result<Dispatch> {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.level.directive()));
        let console = fmt_layer::layer().with_ansi(self.ansi);
        let base = tracing_subscriber::registry().with(filter).with(console);

        match &self.file {
            Some(path) => {
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(|e| {
                        PveError::Logging(format!(
                            "failed to open log file {}: {e}",
                            path.display()
                        ))
                    })?;
                let file_layer = fmt_layer::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file));
                Ok(Dispatch::new(base.with(file_layer)))
            }
            None => Ok(Dispatch::new(base)),
        }
    }

    /// Install this configuration as the global default subscriber.
    ///
    /// Call once at process start, before the first connection attempt.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file cannot be opened or a global
    /// subscriber is already installed.
    pub fn init(&self) -> Result<()> {
        tracing::dispatcher::set_global_default(self.dispatch()?)
            .map_err(|e| PveError::Logging(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevel::Trace.to_string(), "TRACE");
        assert_eq!(LogLevel::Info.to_string(), "INFO");
        assert_eq!(LogLevel::Off.to_string(), "OFF");
    }

    #[test]
    fn test_log_level_default() {
        assert_eq!(LogLevel::default(), LogLevel::Info);
    }

    #[test]
    fn test_log_level_directives() {
        assert_eq!(LogLevel::Debug.directive(), "debug");
        assert_eq!(LogLevel::Off.directive(), "off");
    }

    #[test]
    fn test_logging_config_default() {
        let config = LoggingConfig::default();

        assert_eq!(config.level, LogLevel::Info);
        assert_eq!(config.file, Some(PathBuf::from(DEFAULT_LOG_FILE)));
        assert!(config.ansi);
    }

    #[test]
    fn test_logging_config_builder() {
        let config = LoggingConfig::new()
            .with_level(LogLevel::Warn)
            .with_file("/tmp/other.log")
            .with_ansi(false);

        assert_eq!(config.level, LogLevel::Warn);
        assert_eq!(config.file, Some(PathBuf::from("/tmp/other.log")));
        assert!(!config.ansi);
    }

    #[test]
    fn test_logging_config_without_file() {
        let config = LoggingConfig::new().without_file();
        assert_eq!(config.file, None);
    }

    #[test]
    fn test_dispatch_fails_for_unwritable_file() {
        let config = LoggingConfig::new().with_file("/nonexistent-dir/monitor.log");

        let err = config.dispatch().unwrap_err();
        assert!(matches!(err, PveError::Logging(_)));
    }

    #[test]
    fn test_dispatch_writes_events_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("monitor.log");

        let dispatch = LoggingConfig::new()
            .with_level(LogLevel::Info)
            .with_file(&path)
            .dispatch()
            .unwrap();

        tracing::dispatcher::with_default(&dispatch, || {
            tracing::info!("connected to proxmox host");
        });

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("connected to proxmox host"));
    }
}
