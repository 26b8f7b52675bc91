use anyhow::{Context, Result};
use chrono::Utc;
use log::LevelFilter;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Entries kept in memory for the logs dialog
const MAX_MEMORY_LOGS: usize = 1_000;

/// Shared logger that can be used across the application
///
/// Every entry is kept in memory for the logs dialog. When file logging is
/// enabled the dispatcher also appends each record to the log file.
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<Vec<String>>>,
    log_file: Option<PathBuf>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            log_file: None,
        }
    }

    /// Create a logger, preparing the log directory when `enabled`
    pub fn from_config(enabled: bool) -> Result<Self> {
        if !enabled {
            return Ok(Self::new());
        }
        Self::with_log_file(Self::get_log_file_path()?)
    }

    /// Create a logger that also writes to `path`
    pub fn with_log_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }

        Ok(Self {
            log_file: Some(path),
            ..Self::new()
        })
    }

    /// Location of the log file
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::cache_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine cache directory"))
            .map(|dir| dir.join("admindash").join("admindash.log"))
    }

    pub fn is_enabled(&self) -> bool {
        self.log_file.is_some()
    }

    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    /// Add a log entry to the in-memory buffer
    pub fn log(&self, message: String) {
        let timestamp = Utc::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        if let Ok(mut logs) = self.logs.lock() {
            logs.push(formatted_message);
            if logs.len() > MAX_MEMORY_LOGS {
                let overflow = logs.len() - MAX_MEMORY_LOGS;
                logs.drain(..overflow);
            }
        }
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            let mut sorted_logs = logs.clone();
            // Reverse to show newest logs first (descending order by timestamp)
            sorted_logs.reverse();
            sorted_logs
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

    /// Build the dispatcher feeding the memory buffer and, when enabled, the log file.
    ///
    /// Debug records are only kept when file logging is enabled.
    pub fn dispatch(&self) -> Result<fern::Dispatch> {
        let level = if self.is_enabled() {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };
        let sink = self.clone();

        let mut dispatch = fern::Dispatch::new()
            .level(level)
            .level_for("sqlx", LevelFilter::Warn)
            .level_for("sea_orm", LevelFilter::Warn)
            .level_for("hyper", LevelFilter::Warn)
            .level_for("hyper_util", LevelFilter::Warn)
            .level_for("reqwest", LevelFilter::Warn)
            .chain(fern::Output::call(move |record| {
                sink.log(format!("{:<5} {}: {}", record.level(), record.target(), record.args()));
            }));

        if let Some(path) = &self.log_file {
            let file = fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;
            dispatch = dispatch.chain(
                fern::Dispatch::new()
                    .format(|out, message, record| {
                        out.finish(format_args!(
                            "[{}] {:<5} {}: {}",
                            Utc::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                            record.level(),
                            record.target(),
                            message
                        ))
                    })
                    .chain(file),
            );
        }

        Ok(dispatch)
    }

    /// Route the `log` facade into this logger. Can only succeed once per process.
    pub fn install(&self) -> Result<()> {
        self.dispatch()?.apply().context("Failed to install logger")?;
        Ok(())
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
