//! A small file-backed logger for tracing layout and raster decisions.
//!
//! Disabled by default: nothing in this crate requires `init()` to have been
//! called, and every logging call below is a no-op until it has. Hosts that
//! want a trace of row splits, ridge composition, or degenerate-input skips
//! call `logging::init()` once at startup.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use std::time::SystemTime;

static LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

/// Log levels, ordered so that `Debug < Info < Warn < Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

struct Logger {
    file: Option<File>,
    min_level: LogLevel,
}

impl Logger {
    fn new() -> Self {
        let log_path = Self::get_log_path();
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&log_path)
            .ok();

        if file.is_some() {
            eprintln!("[treemap_core] logging to: {}", log_path.display());
        }

        Self {
            file,
            min_level: LogLevel::Debug,
        }
    }

    fn get_log_path() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."))
            .join("treemap_core.log")
    }

    fn log(&mut self, level: LogLevel, module: &str, message: &str) {
        if level < self.min_level {
            return;
        }

        let timestamp = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);

        let entry = format!("[{:013}] [{:5}] [{}] {}\n", timestamp, level, module, message);

        if let Some(ref mut file) = self.file {
            let _ = file.write_all(entry.as_bytes());
            let _ = file.flush();
        }
    }
}

/// Initialize the global logger. Calling this more than once is harmless —
/// only the first call takes effect.
pub fn init() {
    let _ = LOGGER.set(Mutex::new(Logger::new()));
}

fn log(level: LogLevel, module: &str, message: &str) {
    if let Some(logger) = LOGGER.get() {
        if let Ok(mut l) = logger.lock() {
            l.log(level, module, message);
        }
    }
}

pub fn debug(module: &str, message: &str) {
    log(LogLevel::Debug, module, message);
}

pub fn info(module: &str, message: &str) {
    log(LogLevel::Info, module, message);
}

pub fn warn(module: &str, message: &str) {
    log(LogLevel::Warn, module, message);
}

pub fn error(module: &str, message: &str) {
    log(LogLevel::Error, module, message);
}

/// Write a separator line, useful to mark the start of a draw call in the
/// log when debugging a specific layout.
pub fn separator(label: &str) {
    info("---", &format!("========== {} ==========", label));
}
