//! The latency prober: a synchronous UDP round-trip measurement loop

pub mod wire;

use std::net::{SocketAddr, UdpSocket};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{AppError, Result};
use crate::logging::Logger;
use crate::models::{Config, ProbeReport, RoundMetrics};

/// Measures round-trip latency by sending timestamped datagrams to a UDP
/// echo endpoint and verifying each reply against the timestamp sent.
///
/// The loop is deliberately sequential and blocking: one datagram in
/// flight at a time, and the receive step waits forever if the endpoint
/// never replies.
pub struct LatencyProber {
    socket: UdpSocket,
    target: SocketAddr,
    rounds: u32,
    logger: Logger,
}

impl LatencyProber {
    /// Create a prober from the runtime configuration
    pub fn new(config: &Config) -> Result<Self> {
        let target = config.echo_target().resolve()?;
        Self::connect_to(target, config.rounds)
    }

    /// Create a prober against an explicit socket address
    ///
    /// Binds an ephemeral local port in the target's address family.
    pub fn connect_to(target: SocketAddr, rounds: u32) -> Result<Self> {
        let bind_addr: SocketAddr = if target.is_ipv4() {
            "0.0.0.0:0".parse()?
        } else {
            "[::]:0".parse()?
        };
        let socket = UdpSocket::bind(bind_addr)
            .map_err(|e| AppError::socket(format!("Failed to bind local socket: {}", e)))?;

        Ok(Self {
            socket,
            target,
            rounds,
            logger: Logger::from_env("probe"),
        })
    }

    /// The resolved target address
    pub fn target(&self) -> SocketAddr {
        self.target
    }

    /// Run the full measurement loop
    ///
    /// Returns a report with exactly `rounds` samples, or fails on the
    /// first reply whose timestamp is not bit-for-bit the one sent.
    pub fn run(&mut self) -> Result<ProbeReport> {
        let mut report = ProbeReport::new(self.target.to_string(), self.rounds);
        self.logger.info(&format!(
            "Probing {} over {} rounds",
            self.target, self.rounds
        ));

        for round in 1..=self.rounds {
            let start_time = unix_time_secs()?;
            let payload = wire::encode_timestamp(start_time);
            self.socket.send_to(&payload, self.target).map_err(|e| {
                AppError::socket(format!("Failed to send probe to {}: {}", self.target, e))
            })?;

            // Blocks without timeout until a datagram arrives from any
            // sender. A datagram longer than the buffer is truncated to
            // the timestamp bytes, matching the echo contract.
            let mut buf = [0u8; wire::TIMESTAMP_LEN];
            let (len, _from) = self
                .socket
                .recv_from(&mut buf)
                .map_err(|e| AppError::socket(format!("Failed to receive reply: {}", e)))?;
            let received = wire::decode_timestamp(&buf[..len])?;

            if received.to_bits() != start_time.to_bits() {
                self.logger.error(&format!(
                    "round {}: reply {} does not match sent {}",
                    round, received, start_time
                ));
                return Err(AppError::echo_mismatch(round, start_time, received));
            }

            let end_time = unix_time_secs()?;
            let delay_ms = (end_time - start_time) * 1000.0;
            self.logger
                .debug(&format!("round {}: {:.3}ms", round, delay_ms));
            report.add_sample(RoundMetrics::new(round, start_time, delay_ms));
        }

        report.finish();
        self.logger.info(&format!(
            "Completed {} rounds against {}",
            report.samples.len(),
            self.target
        ));
        Ok(report)
    }
}

/// Current wall-clock time as floating-point seconds since the epoch
fn unix_time_secs() -> Result<f64> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .map_err(|e| AppError::internal(format!("System clock is before the epoch: {}", e)))
}
