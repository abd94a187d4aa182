//! Command-line interface

use clap::Parser;

/// UDP Echo Latency Probe - measures round-trip latency to a UDP echo endpoint
///
/// Sends timestamped datagrams to the target's echo port, verifies each
/// reply, and prints mean/min/max/std of the observed delays.
#[derive(Parser, Debug, Clone)]
#[command(name = "udp-latency-probe")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Host or IP address of the UDP echo endpoint
    pub target: String,

    /// Number of probe rounds
    #[arg(default_value_t = crate::defaults::DEFAULT_ROUNDS)]
    pub rounds: u32,
}

impl Cli {
    /// Validate CLI arguments beyond what clap enforces
    pub fn validate(&self) -> Result<(), String> {
        if self.target.trim().is_empty() {
            return Err("Target host must not be empty".to_string());
        }

        if self.rounds == 0 {
            return Err("Round count must be at least 1".to_string());
        }

        Ok(())
    }

    /// Check if colors should be enabled
    pub fn use_colors(&self) -> bool {
        supports_color()
    }
}

/// Check if the terminal supports color output
pub fn supports_color() -> bool {
    // Check for common environment variables that indicate color support
    if let Ok(term) = std::env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    // Check for NO_COLOR environment variable
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check for FORCE_COLOR environment variable
    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    // Default to true on Unix-like systems, false elsewhere
    #[cfg(unix)]
    {
        true
    }
    #[cfg(not(unix))]
    {
        false
    }
}
