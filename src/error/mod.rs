//! Error handling for the UDP latency probe

use thiserror::Error;

/// Custom error types for the latency probe
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Socket and network errors
    #[error("Socket error: {0}")]
    Socket(String),

    /// The echoed timestamp did not match the one sent
    #[error("Echo mismatch on round {round}: received {received}, sent {sent}")]
    EchoMismatch {
        /// 1-based round number on which the mismatch occurred
        round: u32,
        /// Timestamp that was sent, seconds since epoch
        sent: f64,
        /// Timestamp decoded from the reply
        received: f64,
    },

    /// Statistics calculation errors
    #[error("Statistics error: {0}")]
    Statistics(String),

    /// Parsing errors (reply payloads, addresses)
    #[error("Parsing error: {0}")]
    Parse(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    /// Create a new socket error
    pub fn socket<S: Into<String>>(message: S) -> Self {
        Self::Socket(message.into())
    }

    /// Create a new echo mismatch error
    pub fn echo_mismatch(round: u32, sent: f64, received: f64) -> Self {
        Self::EchoMismatch {
            round,
            sent,
            received,
        }
    }

    /// Create a new statistics error
    pub fn statistics<S: Into<String>>(message: S) -> Self {
        Self::Statistics(message.into())
    }

    /// Create a new parsing error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse(message.into())
    }

    /// Create a new I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io(message.into())
    }

    /// Create a new internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Get error category for logging and reporting
    pub fn category(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG",
            Self::Socket(_) => "SOCKET",
            Self::EchoMismatch { .. } => "MISMATCH",
            Self::Statistics(_) => "STATS",
            Self::Parse(_) => "PARSE",
            Self::Io(_) => "IO",
            Self::Internal(_) => "INTERNAL",
        }
    }

    /// Check if error is recoverable (can retry)
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Socket(_) => true,
            Self::Config(_)
            | Self::EchoMismatch { .. }
            | Self::Statistics(_)
            | Self::Parse(_)
            | Self::Io(_)
            | Self::Internal(_) => false,
        }
    }

    /// Get exit code for this error type
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::Parse(_) => 1, // Invalid configuration/usage
            Self::Socket(_) => 2,                  // Network issues
            Self::EchoMismatch { .. } => 3,        // Echo verification failure
            Self::Io(_) => 5,                      // I/O issues
            Self::Statistics(_) => 6,              // Statistics issues
            Self::Internal(_) => 99,               // Internal/unexpected errors
        }
    }

    /// Format error for console display with color coding
    pub fn format_for_console(&self, use_color: bool) -> String {
        let category = self.category();
        let message = self.to_string();

        if use_color {
            use colored::Colorize;
            match self {
                Self::Config(_) | Self::Parse(_) => {
                    format!("[{}] {}", category.red().bold(), message.red())
                }
                Self::Socket(_) => {
                    format!("[{}] {}", category.yellow().bold(), message.yellow())
                }
                Self::EchoMismatch { .. } | Self::Internal(_) => {
                    format!(
                        "[{}] {}",
                        category.bright_red().bold(),
                        message.bright_red()
                    )
                }
                Self::Statistics(_) | Self::Io(_) => {
                    format!("[{}] {}", category.cyan().bold(), message.cyan())
                }
            }
        } else {
            format!("[{}] {}", category, message)
        }
    }
}

// Standard library error conversions
impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::io(error.to_string())
    }
}

impl From<std::net::AddrParseError> for AppError {
    fn from(error: std::net::AddrParseError) -> Self {
        Self::parse(format!("Address parse error: {}", error))
    }
}

impl From<std::num::ParseIntError> for AppError {
    fn from(error: std::num::ParseIntError) -> Self {
        Self::parse(format!("Integer parse error: {}", error))
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::internal(error.to_string())
    }
}

/// Result type alias using our custom error
pub type Result<T> = std::result::Result<T, AppError>;
