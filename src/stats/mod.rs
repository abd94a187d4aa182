//! Statistical analysis of recorded delay series

use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};

/// Arithmetic mean of a delay series
pub fn mean(samples: &[f64]) -> Result<f64> {
    if samples.is_empty() {
        return Err(AppError::statistics("Cannot compute mean of empty series"));
    }
    Ok(samples.iter().sum::<f64>() / samples.len() as f64)
}

/// Minimum of a delay series
pub fn min(samples: &[f64]) -> Result<f64> {
    if samples.is_empty() {
        return Err(AppError::statistics("Cannot compute min of empty series"));
    }
    Ok(samples.iter().cloned().fold(f64::INFINITY, f64::min))
}

/// Maximum of a delay series
pub fn max(samples: &[f64]) -> Result<f64> {
    if samples.is_empty() {
        return Err(AppError::statistics("Cannot compute max of empty series"));
    }
    Ok(samples.iter().cloned().fold(f64::NEG_INFINITY, f64::max))
}

/// Sample standard deviation of a delay series
///
/// Uses the Bessel-corrected (n-1) divisor, the unbiased estimator. A
/// series of fewer than two samples has no sample standard deviation and
/// is an error rather than a silent zero.
pub fn std_dev(samples: &[f64]) -> Result<f64> {
    if samples.len() < 2 {
        return Err(AppError::statistics(format!(
            "Standard deviation requires at least 2 samples, got {}",
            samples.len()
        )));
    }
    let avg = mean(samples)?;
    let sum_squared_diff: f64 = samples.iter().map(|&x| (x - avg).powi(2)).sum();
    let variance = sum_squared_diff / (samples.len() - 1) as f64;
    Ok(variance.sqrt())
}

/// Summary statistics of a completed probe run, in milliseconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    /// Average round-trip delay
    pub mean_ms: f64,

    /// Minimum round-trip delay
    pub min_ms: f64,

    /// Maximum round-trip delay
    pub max_ms: f64,

    /// Sample standard deviation of the round-trip delays
    pub std_dev_ms: f64,

    /// Number of samples included in the statistics
    pub sample_count: usize,
}

impl Statistics {
    /// Calculate summary statistics from a series of delay samples
    pub fn from_delays(delays: &[f64]) -> Result<Self> {
        Ok(Self {
            mean_ms: mean(delays)?,
            min_ms: min(delays)?,
            max_ms: max(delays)?,
            std_dev_ms: std_dev(delays)?,
            sample_count: delays.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_of_literal_series() {
        assert_eq!(mean(&[1.0, 2.0, 3.0]).unwrap(), 2.0);
    }

    #[test]
    fn test_min_of_literal_series() {
        assert_eq!(min(&[1.0, 2.0, 3.0]).unwrap(), 1.0);
    }

    #[test]
    fn test_max_of_literal_series() {
        assert_eq!(max(&[1.0, 2.0, 3.0]).unwrap(), 3.0);
    }

    #[test]
    fn test_std_dev_of_literal_series() {
        // Sample standard deviation of [1, 2, 3] with the n-1 divisor
        assert_eq!(std_dev(&[1.0, 2.0, 3.0]).unwrap(), 1.0);
    }

    #[test]
    fn test_std_dev_fails_with_single_sample() {
        let err = std_dev(&[5.0]).unwrap_err();
        assert!(matches!(err, AppError::Statistics(_)));
    }

    #[test]
    fn test_std_dev_fails_with_empty_series() {
        assert!(std_dev(&[]).is_err());
    }

    #[test]
    fn test_mean_fails_with_empty_series() {
        assert!(mean(&[]).is_err());
        assert!(min(&[]).is_err());
        assert!(max(&[]).is_err());
    }

    #[test]
    fn test_statistics_from_delays() {
        let stats = Statistics::from_delays(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(stats.mean_ms, 2.0);
        assert_eq!(stats.min_ms, 1.0);
        assert_eq!(stats.max_ms, 3.0);
        assert_eq!(stats.std_dev_ms, 1.0);
        assert_eq!(stats.sample_count, 3);
    }

    #[test]
    fn test_statistics_from_single_sample_fails() {
        // A single round has no sample standard deviation; the whole
        // summary must fail rather than report a partial result.
        assert!(Statistics::from_delays(&[10.0]).is_err());
    }

    #[test]
    fn test_std_dev_of_constant_series() {
        let stats = Statistics::from_delays(&[4.0, 4.0, 4.0, 4.0]).unwrap();
        assert_eq!(stats.std_dev_ms, 0.0);
        assert_eq!(stats.mean_ms, 4.0);
    }
}
