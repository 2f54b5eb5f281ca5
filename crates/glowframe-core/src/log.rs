//! File-based logger with size-based rotation.
//!
//! Logs are written to `~/.config/glowframe/logs/glowframe.log`. When
//! the file exceeds the configured max size, it is rotated to
//! `glowframe.log.1` (one backup kept).

use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

use serde::{Deserialize, Serialize};

static LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

const LOG_FILE_NAME: &str = "glowframe.log";
const BACKUP_SUFFIX: &str = ".1";

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Whether file logging is enabled. Defaults to `false`.
    pub enabled: bool,
    /// Minimum log level: "debug", "info", "warn", or "error".
    pub level: String,
    /// Maximum log file size in megabytes before rotation.
    pub max_file_mb: u64,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".into(),
            max_file_mb: 10,
        }
    }
}

/// Log severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }

    /// Parses a level name, defaulting to `Info` for anything unknown.
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Self::Debug,
            "warn" => Self::Warn,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }
}

struct Logger {
    file: File,
    path: PathBuf,
    min_level: Level,
    max_bytes: u64,
    written: u64,
}

/// Initialises the global logger. Call once at startup.
///
/// Does nothing if `config.enabled` is `false`.
pub fn init(config: &LogConfig) {
    if !config.enabled {
        return;
    }
    let Some(dir) = crate::config::config_dir() else {
        return;
    };
    let log_dir = dir.join("logs");
    let _ = fs::create_dir_all(&log_dir);
    let path = log_dir.join(LOG_FILE_NAME);

    let Some(logger) = Logger::open(path, config) else {
        return;
    };
    let _ = LOGGER.set(Mutex::new(logger));
}

/// Writes a log line if the level is at or above the configured minimum.
pub fn write(level: Level, args: fmt::Arguments<'_>) {
    let Some(mutex) = LOGGER.get() else {
        return;
    };
    let Ok(mut logger) = mutex.lock() else {
        return;
    };
    logger.write(level, args);
}

impl Logger {
    fn open(path: PathBuf, config: &LogConfig) -> Option<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .ok()?;
        let written = file.metadata().map(|m| m.len()).unwrap_or(0);

        Some(Self {
            file,
            path,
            min_level: Level::parse(&config.level),
            max_bytes: config.max_file_mb * 1024 * 1024,
            written,
        })
    }

    fn write(&mut self, level: Level, args: fmt::Arguments<'_>) {
        if level < self.min_level {
            return;
        }
        let line = format!("{} [{}] {args}\n", timestamp(), level.as_str());

        let _ = self.file.write_all(line.as_bytes());
        self.written += line.len() as u64;

        if self.max_bytes > 0 && self.written >= self.max_bytes {
            self.rotate();
        }
    }

    fn rotate(&mut self) {
        let _ = fs::rename(&self.path, backup_path(&self.path));
        if let Ok(f) = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
        {
            self.file = f;
        }
        self.written = 0;
    }
}

fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(BACKUP_SUFFIX);
    PathBuf::from(name)
}

fn timestamp() -> String {
    let dur = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default();
    let secs = dur.as_secs();
    let (h, m, s) = (secs / 3600 % 24, secs / 60 % 60, secs % 60);
    format!("{h:02}:{m:02}:{s:02}")
}

/// Logs at DEBUG level.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Debug, format_args!($($arg)*)) };
}

/// Logs at INFO level.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Info, format_args!($($arg)*)) };
}

/// Logs at WARN level.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Warn, format_args!($($arg)*)) };
}

/// Logs at ERROR level.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Error, format_args!($($arg)*)) };
}
