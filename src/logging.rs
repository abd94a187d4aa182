//! Structured logging for the latency probe
//!
//! Diagnostic output goes to stderr so stdout carries nothing but the
//! statistics lines. The level is read from the `ULP_LOG` environment
//! variable and defaults to `warn`.

use crate::error::{AppError, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// Environment variable controlling the minimum log level
pub const LOG_LEVEL_ENV: &str = "ULP_LOG";

/// Log level enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LogLevel {
    /// Trace level - most detailed
    Trace = 0,
    /// Debug level - detailed information for debugging
    Debug = 1,
    /// Info level - general application information
    Info = 2,
    /// Warning level - potentially harmful situations
    Warn = 3,
    /// Error level - error events
    Error = 4,
    /// Fatal level - severe errors that cause termination
    Fatal = 5,
}

impl LogLevel {
    /// Get log level name as string
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
        }
    }

    /// Get ANSI color code for console output
    pub fn color_code(&self) -> &'static str {
        match self {
            LogLevel::Trace => "\x1b[37m", // White
            LogLevel::Debug => "\x1b[36m", // Cyan
            LogLevel::Info => "\x1b[32m",  // Green
            LogLevel::Warn => "\x1b[33m",  // Yellow
            LogLevel::Error => "\x1b[31m", // Red
            LogLevel::Fatal => "\x1b[35m", // Magenta
        }
    }

    /// Reset ANSI color code
    pub fn reset_code() -> &'static str {
        "\x1b[0m"
    }
}

impl std::str::FromStr for LogLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "TRACE" => Ok(LogLevel::Trace),
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            "FATAL" => Ok(LogLevel::Fatal),
            _ => Err(AppError::parse(format!("Invalid log level: {}", s))),
        }
    }
}

/// Leveled logger writing timestamped lines to stderr
#[derive(Debug, Clone)]
pub struct Logger {
    /// Minimum log level to output
    min_level: LogLevel,
    /// Whether to use colored output
    use_color: bool,
    /// Logger name/component
    name: String,
}

impl Logger {
    /// Create a logger for a component with an explicit level
    pub fn new(name: &str, min_level: LogLevel) -> Self {
        Self {
            min_level,
            use_color: crate::cli::supports_color(),
            name: name.to_string(),
        }
    }

    /// Create a logger whose level comes from [`LOG_LEVEL_ENV`]
    pub fn from_env(name: &str) -> Self {
        let min_level = std::env::var(LOG_LEVEL_ENV)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(LogLevel::Warn);
        Self::new(name, min_level)
    }

    /// Emit a message at the given level
    pub fn log(&self, level: LogLevel, message: &str) {
        if level < self.min_level {
            return;
        }

        let timestamp = Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ");
        let line = if self.use_color {
            format!(
                "[{}] {}{}{} [{}] {}",
                timestamp,
                level.color_code(),
                level.as_str(),
                LogLevel::reset_code(),
                self.name,
                message
            )
        } else {
            format!(
                "[{}] {} [{}] {}",
                timestamp,
                level.as_str(),
                self.name,
                message
            )
        };

        // Logging must never take the process down
        let _ = writeln!(io::stderr(), "{}", line);
    }

    /// Emit a trace-level message
    pub fn trace(&self, message: &str) {
        self.log(LogLevel::Trace, message);
    }

    /// Emit a debug-level message
    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    /// Emit an info-level message
    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    /// Emit a warning-level message
    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    /// Emit an error-level message
    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }
}
