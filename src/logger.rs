//! Logging setup.
//!
//! Every module logs through the `log` facade. [`Logger::install`] routes those
//! records through a `fern` dispatch into a bounded in-memory buffer (shown in the
//! log viewer) and, when enabled in the config, into a log file.

use crate::config::LoggingConfig;
use crate::constants::LOG_BUFFER_LINES;
use anyhow::{Context, Result};
use chrono::Utc;
use log::LevelFilter;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Shared logger that can be used across the application
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<VecDeque<String>>>,
    capacity: usize,
    file_enabled: bool,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(VecDeque::new())),
            capacity: LOG_BUFFER_LINES,
            file_enabled: false,
        }
    }

    pub fn from_config(config: &LoggingConfig) -> Self {
        Self {
            file_enabled: config.enabled,
            ..Self::new()
        }
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity.max(1);
        self
    }

    /// Whether records are also written to the log file
    pub fn is_enabled(&self) -> bool {
        self.file_enabled
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        let timestamp = Utc::now().format("%H:%M:%S%.3f").to_string();
        self.push(format!("[{}] {}", timestamp, message));
    }

    fn push(&self, line: String) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.push_back(line);
            while logs.len() > self.capacity {
                logs.pop_front();
            }
        }
    }

    /// Get all logs, newest first
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            logs.iter().rev().cloned().collect()
        } else {
            Vec::new()
        }
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }

    /// Path of the log file: `<data dir>/opsdesk/opsdesk.log`
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::data_dir()
            .or_else(dirs::home_dir)
            .map(|dir| dir.join("opsdesk").join("opsdesk.log"))
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
    }

    /// Build the dispatch feeding this buffer and, optionally, `file`.
    pub fn dispatch(&self, level: LevelFilter, file: Option<&Path>) -> Result<fern::Dispatch> {
        let buffer = self.clone();
        let mut dispatch = fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{}] {:<5} {}: {}",
                    Utc::now().format("%H:%M:%S%.3f"),
                    record.level(),
                    record.target(),
                    message
                ))
            })
            .level(level)
            .chain(fern::Output::call(move |record| buffer.push(record.args().to_string())));

        if let Some(path) = file {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
            }
            let log_file =
                fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;
            dispatch = dispatch.chain(log_file);
        }

        Ok(dispatch)
    }

    /// Install as the global `log` backend.
    pub fn install(&self, level: LevelFilter) -> Result<()> {
        let file = if self.file_enabled {
            Some(Self::get_log_file_path()?)
        } else {
            None
        };

        self.dispatch(level, file.as_deref())?
            .apply()
            .context("A global logger is already installed")?;

        match file {
            Some(path) => log::info!("Logging initialized, writing to {}", path.display()),
            None => log::info!("Logging initialized, file output off"),
        }
        Ok(())
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
