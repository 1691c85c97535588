//! Aquarium Monitor CLI
//!
//! Command-line interface for the simulated aquarium telemetry service.

use std::path::PathBuf;

use aquarium_monitor::{load_config, AquariumBuilder, Config, SimulatedSource, SnapshotSource};
use clap::Parser;
use tracing::Level;

#[derive(Parser)]
#[command(name = "aquarium-monitor")]
#[command(about = "Simulated aquarium telemetry, alerts and dashboard")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Dashboard port (overrides config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Seed for the simulated readings (overrides config file)
    #[arg(long)]
    seed: Option<u64>,

    /// Print a single snapshot as JSON and exit
    #[arg(long)]
    once: bool,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: Level,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(
        "Parsed command line arguments: config={:?}, port={:?}, seed={:?}, once={}",
        args.config,
        args.port,
        args.seed,
        args.once
    );

    let mut config = if let Some(config_path) = &args.config {
        tracing::debug!("Loading configuration from {:?}", config_path);
        load_config(config_path)?
    } else {
        tracing::debug!("Using default configuration");
        Config::default()
    };

    if let Some(port) = args.port {
        config.dashboard.port = port;
    }
    if let Some(seed) = args.seed {
        config.generator.seed = Some(seed);
    }

    if args.once {
        config.validate()?;
        let snapshot = SimulatedSource::new(&config).fetch().await?;
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    tracing::info!("Starting aquarium monitor");
    AquariumBuilder::new(config).build()?.start().await?;

    Ok(())
}
