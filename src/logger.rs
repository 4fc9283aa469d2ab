//! Logging setup.
//!
//! The crate logs through the `log` facade; this module wires a `fern`
//! dispatcher from [`LoggingConfig`] that writes timestamped lines to a file
//! under the user's data directory.

use std::path::PathBuf;

use anyhow::{Context, Result};
use log::LevelFilter;

use crate::config::LoggingConfig;
use crate::constants::{APP_NAME, LOG_FILE_NAME};

/// Logging settings resolved from configuration
#[derive(Debug, Clone)]
pub struct Logger {
    enabled: bool,
    level: LevelFilter,
    log_file: Option<PathBuf>,
}

impl Logger {
    pub fn from_config(config: &LoggingConfig) -> Result<Self> {
        let level = config
            .level_filter()
            .ok_or_else(|| anyhow::anyhow!("Invalid logging.level '{}'", config.level))?;

        let log_file = if config.enabled {
            let path = Self::get_log_file_path()?;
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
            }
            Some(path)
        } else {
            None
        };

        Ok(Self {
            enabled: config.enabled,
            level,
            log_file,
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn has_file_writer(&self) -> bool {
        self.log_file.is_some()
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }

    pub fn log_file(&self) -> Option<&PathBuf> {
        self.log_file.as_ref()
    }

    /// Dispatcher with the line format and level filter but no output.
    pub fn base_dispatch(&self) -> fern::Dispatch {
        fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{} {} {}] {}",
                    chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                    record.level(),
                    record.target(),
                    message
                ))
            })
            .level(self.level)
    }

    /// Install the file dispatcher as the global logger. Does nothing when
    /// logging is disabled.
    pub fn install(&self) -> Result<()> {
        let Some(path) = &self.log_file else {
            return Ok(());
        };

        let file = fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

        self.base_dispatch()
            .chain(file)
            .apply()
            .context("A global logger is already installed")?;

        log::info!("Logging to {}", path.display());
        Ok(())
    }

    /// Get the log file path under the user's local data directory
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::data_local_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join(APP_NAME).join(LOG_FILE_NAME))
    }
}
