//! UDP Echo Latency Probe
//!
//! Measures round-trip latency to a remote UDP echo endpoint by sending
//! timestamped datagrams, verifying each reply bit-for-bit, and computing
//! statistics (mean, min, max, sample standard deviation) over the
//! observed delays.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod probe;
pub mod stats;
pub mod types;

// Re-export commonly used types
pub use error::{AppError, Result};
pub use models::{Config, ProbeReport, RoundMetrics};
pub use output::OutputFormatter;
pub use probe::LatencyProber;
pub use stats::Statistics;
pub use types::Target;

/// Application version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Default configuration values
pub mod defaults {
    /// Number of probe rounds when none is given on the command line
    pub const DEFAULT_ROUNDS: u32 = 100;

    /// UDP port the echo endpoint listens on
    pub const ECHO_PORT: u16 = 12345;

    /// Colored diagnostic output by default
    pub const DEFAULT_ENABLE_COLOR: bool = true;
}
