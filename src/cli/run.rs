//! Run command implementation
//!
//! Owns the single consumer loop: feed receiver in, one report line and a
//! metrics update out per event. Events are processed strictly in arrival
//! order; the pipeline has no other entry point.

use crate::config::Config;
use crate::feed::{PriceFeed, PythFeed};
use crate::strategy::{TickPipeline, WindowStatus};
use crate::telemetry;
use clap::Args;
use rust_decimal::prelude::ToPrimitive;

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Override the configured window capacity
    #[arg(long)]
    pub window: Option<usize>,

    /// Override the configured admission interval (seconds)
    #[arg(long)]
    pub interval: Option<i64>,
}

impl RunArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let mut strategy = config.strategy.clone();
        if let Some(window) = self.window {
            strategy.window_capacity = window;
        }
        if let Some(interval) = self.interval {
            strategy.min_sample_interval_secs = interval;
        }
        strategy.validate()?;

        tracing::info!(
            symbol = %config.feed.symbol,
            window = strategy.window_capacity,
            interval_secs = strategy.min_sample_interval_secs,
            "Starting signal pipeline"
        );

        let feed = PythFeed::new(&config.feed);
        let mut updates = feed.subscribe().await?;
        let mut pipeline = TickPipeline::new(&strategy);

        loop {
            tokio::select! {
                update = updates.recv() => {
                    let Some(update) = update else {
                        tracing::warn!("Feed closed, stopping");
                        break;
                    };

                    telemetry::record_update_received();
                    let report = pipeline.on_update(&update);

                    if report.admitted {
                        telemetry::record_sample_admitted();
                    }
                    telemetry::set_window_fill(pipeline.sample_count());
                    if let Some(price) = report.price.to_f64() {
                        telemetry::set_price(price);
                    }
                    match report.status {
                        WindowStatus::Ready { average, signal } => {
                            if let Some(average) = average.to_f64() {
                                telemetry::set_moving_average(average);
                            }
                            telemetry::record_signal(signal);
                            tracing::info!(
                                symbol = %report.symbol,
                                price = %report.price,
                                average = %average,
                                signal = %signal,
                                "{}", report
                            );
                        }
                        WindowStatus::Filling { filled, capacity } => {
                            tracing::info!(
                                symbol = %report.symbol,
                                price = %report.price,
                                filled,
                                capacity,
                                "{}", report
                            );
                        }
                    }
                }
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("Shutdown requested, stopping");
                    break;
                }
            }
        }

        Ok(())
    }
}
