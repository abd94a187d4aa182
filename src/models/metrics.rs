//! Per-round measurements and probe run results

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Measurement recorded for a single successful probe round
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundMetrics {
    /// 1-based round number
    pub round: u32,

    /// Timestamp that was sent on the wire, seconds since epoch
    pub sent_timestamp: f64,

    /// Observed round-trip delay in milliseconds
    pub delay_ms: f64,

    /// When the round completed
    pub timestamp: DateTime<Utc>,
}

impl RoundMetrics {
    /// Record a completed round
    pub fn new(round: u32, sent_timestamp: f64, delay_ms: f64) -> Self {
        Self {
            round,
            sent_timestamp,
            delay_ms,
            timestamp: Utc::now(),
        }
    }
}

/// Results from a full probe run against one echo endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeReport {
    /// Target that was probed, as "host:port"
    pub target: String,

    /// Configured number of rounds
    pub rounds: u32,

    /// Per-round measurements, in round order
    pub samples: Vec<RoundMetrics>,

    /// When the run started
    pub started_at: DateTime<Utc>,

    /// When the run completed, if it did
    pub completed_at: Option<DateTime<Utc>>,
}

impl ProbeReport {
    /// Create an empty report for a run about to start
    pub fn new(target: String, rounds: u32) -> Self {
        Self {
            target,
            rounds,
            samples: Vec::with_capacity(rounds as usize),
            started_at: Utc::now(),
            completed_at: None,
        }
    }

    /// Append a round measurement
    pub fn add_sample(&mut self, sample: RoundMetrics) {
        self.samples.push(sample);
    }

    /// Mark the run as complete
    pub fn finish(&mut self) {
        self.completed_at = Some(Utc::now());
    }

    /// The recorded delay series in milliseconds
    pub fn delays_ms(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.delay_ms).collect()
    }

    /// Whether every configured round produced a sample
    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some() && self.samples.len() == self.rounds as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_collects_samples_in_order() {
        let mut report = ProbeReport::new("127.0.0.1:12345".to_string(), 3);
        for round in 1..=3 {
            report.add_sample(RoundMetrics::new(round, 1723111200.0, round as f64 * 0.5));
        }
        report.finish();

        assert!(report.is_complete());
        assert_eq!(report.delays_ms(), vec![0.5, 1.0, 1.5]);
    }

    #[test]
    fn test_report_incomplete_without_finish() {
        let mut report = ProbeReport::new("127.0.0.1:12345".to_string(), 2);
        report.add_sample(RoundMetrics::new(1, 0.0, 1.0));
        report.add_sample(RoundMetrics::new(2, 0.0, 1.0));
        assert!(!report.is_complete());
    }

    #[test]
    fn test_report_incomplete_with_missing_rounds() {
        let mut report = ProbeReport::new("127.0.0.1:12345".to_string(), 5);
        report.add_sample(RoundMetrics::new(1, 0.0, 1.0));
        report.finish();
        assert!(!report.is_complete());
    }
}
