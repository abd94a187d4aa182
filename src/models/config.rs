//! Runtime configuration model

use crate::error::{AppError, Result};
use crate::types::Target;
use serde::{Deserialize, Serialize};

/// Complete runtime configuration for a probe run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Host or IP address of the echo endpoint
    pub target: String,

    /// Number of probe rounds to run
    pub rounds: u32,

    /// Whether diagnostic output may use color
    pub enable_color: bool,
}

impl Config {
    /// Create a configuration for the given target with default settings
    pub fn new<S: Into<String>>(target: S) -> Self {
        Self {
            target: target.into(),
            rounds: crate::defaults::DEFAULT_ROUNDS,
            enable_color: crate::defaults::DEFAULT_ENABLE_COLOR,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.target.trim().is_empty() {
            return Err(AppError::config("Target host must not be empty"));
        }
        if self.rounds == 0 {
            return Err(AppError::config("Round count must be at least 1"));
        }
        Ok(())
    }

    /// The echo endpoint this configuration probes
    pub fn echo_target(&self) -> Target {
        Target::new(self.target.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::new("127.0.0.1");
        assert_eq!(config.rounds, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_rejects_empty_target() {
        let config = Config::new("   ");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_rejects_zero_rounds() {
        let mut config = Config::new("127.0.0.1");
        config.rounds = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_echo_target_uses_fixed_port() {
        let config = Config::new("10.0.0.1");
        assert_eq!(config.echo_target().to_string(), "10.0.0.1:12345");
    }
}
