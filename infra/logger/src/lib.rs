//! # Logger
//!
//! Installs the global `tracing` subscriber for tradepost binaries.
//!
//! * Console output is compact and goes to **stderr**, so tools can keep stdout for
//!   their actual output.
//! * File output rolls with [`Rotation`] and can be written as JSON.
//! * Filtering follows `RUST_LOG` when it is set, then the builder's directive, then
//!   the builder's level.
//!
//! ## Example
//!
//! ```rust
//! # use tpost_logger::{Logger, LevelFilter};
//!
//! let _logger = Logger::builder()
//!     .name("tpost-inspect")
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod builder;
mod error;

pub use crate::builder::{LoggerBuilder, NoFile, NoName, WithFile, WithName};
pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use tpost_domain::config::LogConfig;
use tracing_appender::non_blocking::WorkerGuard;

/// Handle to the installed logging system.
///
/// Holds the non-blocking file writer's guard. Keep it alive until shutdown.
#[must_use = "Dropping this handle stops the background file writer."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Returns a new [`LoggerBuilder`].
    ///
    /// The name prefixes rolling log files (e.g. `tpost-inspect.2026-10-19.log`).
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Installs the subscriber described by a [`LogConfig`].
    ///
    /// `level` is used as the filter directive. `json` only affects file output, which is
    /// enabled when `directory` is set.
    ///
    /// # Errors
    /// Same as [`LoggerBuilder::init`].
    pub fn from_config(name: impl Into<String>, config: &LogConfig) -> Result<Self, LoggerError> {
        let builder = Self::builder().name(name).env_filter(config.level.as_str());

        match &config.directory {
            Some(directory) if config.json => builder.path(directory).json().init(),
            Some(directory) => builder.path(directory).init(),
            None => builder.init(),
        }
    }

    pub(crate) const fn new(guard: Option<WorkerGuard>) -> Self {
        Self { guard }
    }

    /// `true` when file output is active.
    #[must_use]
    pub const fn has_file_output(&self) -> bool {
        self.guard.is_some()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::debug!("Logger shutting down, flushing file output");
        }
    }
}
