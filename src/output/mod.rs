//! Console output formatting
//!
//! The statistics block on stdout is a fixed, literal format; color is
//! reserved for diagnostics on stderr.

use crate::error::AppError;
use crate::stats::Statistics;
use std::fmt::Write as _;

/// Formatter for console output
pub struct OutputFormatter {
    /// Enable colored output for errors and warnings
    enable_color: bool,
}

impl OutputFormatter {
    /// Create a formatter
    pub fn new(enable_color: bool) -> Self {
        Self { enable_color }
    }

    /// Format the statistics block
    ///
    /// Exactly four lines, three decimal places, milliseconds. Never
    /// colored: this is the machine-readable result surface.
    pub fn format_report(&self, stats: &Statistics) -> String {
        let mut output = String::new();
        // Unwrap: writing to a String cannot fail
        writeln!(output, "mean delay: {:.3}ms", stats.mean_ms).unwrap();
        writeln!(output, "min delay: {:.3}ms", stats.min_ms).unwrap();
        writeln!(output, "max delay: {:.3}ms", stats.max_ms).unwrap();
        write!(output, "std delay: {:.3}ms", stats.std_dev_ms).unwrap();
        output
    }

    /// Format an error message for the console
    pub fn format_error(&self, error: &AppError) -> String {
        error.format_for_console(self.enable_color)
    }

    /// Format a warning message for the console
    pub fn format_warning(&self, warning: &str) -> String {
        if self.enable_color {
            use colored::Colorize;
            format!("{} {}", "Warning:".yellow().bold(), warning.yellow())
        } else {
            format!("Warning: {}", warning)
        }
    }
}
