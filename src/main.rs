use clap::Parser;
use pyth_signal::cli::{Cli, Commands};
use pyth_signal::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
        eprintln!("Using default configuration");
        toml::from_str(include_str!("../config.toml.example")).expect("Invalid default config")
    });

    // Initialize telemetry
    pyth_signal::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Run(args) => {
            args.execute(&config).await?;
        }
        Commands::Config => {
            println!("Current configuration:");
            println!("  Feed: {} ({})", config.feed.symbol, config.feed.feed_id);
            println!("  Endpoint: {}", config.feed.endpoint);
            println!("  Window: {} samples", config.strategy.window_capacity);
            println!(
                "  Admission interval: {}s",
                config.strategy.min_sample_interval_secs
            );
            println!("  Metrics port: {}", config.telemetry.metrics_port);
        }
    }

    Ok(())
}
