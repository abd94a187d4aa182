//! UDP Echo Latency Probe - Main CLI Application

use clap::Parser;
use std::process;
use udp_latency_probe::{
    cli::{self, Cli},
    config::{display_config_summary, load_config},
    error::{AppError, Result},
    logging::Logger,
    output::OutputFormatter,
    probe::LatencyProber,
    stats::Statistics,
};

fn main() {
    // Set up better panic handling
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panic: {}", panic_info);
        process::exit(1);
    }));

    // Parse command line arguments
    let cli = Cli::parse();

    // Handle the actual application logic
    if let Err(e) = run_application(cli) {
        let formatter = OutputFormatter::new(cli::supports_color());
        eprintln!("{}", formatter.format_error(&e));

        // Print suggestions for common errors
        print_error_suggestions(&e);

        process::exit(e.exit_code());
    }
}

/// Main application logic
fn run_application(cli: Cli) -> Result<()> {
    if let Err(message) = cli.validate() {
        return Err(AppError::config(message));
    }

    // Load and validate configuration
    let config = load_config(&cli)?;

    let logger = Logger::from_env("main");
    logger.debug(&format!(
        "Configuration loaded:\n{}",
        display_config_summary(&config)
    ));

    // Run the measurement loop; aborts on the first echo mismatch
    let mut prober = LatencyProber::new(&config)?;
    let report = prober.run()?;

    // Compute and display the delay statistics
    let stats = Statistics::from_delays(&report.delays_ms())?;
    let formatter = OutputFormatter::new(config.enable_color);
    println!("{}", formatter.format_report(&stats));

    Ok(())
}

/// Print helpful suggestions for common errors
fn print_error_suggestions(error: &AppError) {
    match error {
        AppError::Config(_) => {
            eprintln!();
            eprintln!("Usage help:");
            eprintln!("  - First argument: target host or IP of the echo endpoint");
            eprintln!("  - Second argument (optional): round count, default 100");
        }
        AppError::Socket(_) => {
            eprintln!();
            eprintln!("Network troubleshooting:");
            eprintln!("  - Check that the target host is reachable");
            eprintln!("  - Verify an echo endpoint is listening on UDP port 12345");
            eprintln!("  - Check firewall settings for outbound UDP");
        }
        AppError::EchoMismatch { .. } => {
            eprintln!();
            eprintln!("Echo verification help:");
            eprintln!("  - The endpoint must return exactly the 8 bytes it received");
            eprintln!("  - Another process may be answering on the echo port");
        }
        AppError::Statistics(_) => {
            eprintln!();
            eprintln!("Statistics help:");
            eprintln!("  - The standard deviation needs at least 2 rounds");
            eprintln!("  - Increase the round count argument");
        }
        _ => {}
    }
}
