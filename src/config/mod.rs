//! Configuration loading and validation

use crate::{
    cli::Cli,
    error::Result,
    models::Config,
};

/// Build the runtime configuration from CLI arguments
pub fn load_config(cli: &Cli) -> Result<Config> {
    let config = Config {
        target: cli.target.clone(),
        rounds: cli.rounds,
        enable_color: cli.use_colors(),
    };

    config.validate()?;

    Ok(config)
}

/// Display configuration summary for debug purposes
pub fn display_config_summary(config: &Config) -> String {
    let mut summary = Vec::new();

    summary.push(format!("Target: {}", config.echo_target()));
    summary.push(format!("Rounds: {}", config.rounds));
    summary.push(format!("Color Output: {}", config.enable_color));

    summary.join("\n")
}
