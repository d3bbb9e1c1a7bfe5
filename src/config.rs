//! Configuration types for pyth-signal

use serde::Deserialize;

/// Root configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub feed: FeedConfig,
    #[serde(default)]
    pub strategy: StrategyConfig,
    pub telemetry: TelemetryConfig,
}

/// Price feed configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FeedConfig {
    /// Hermes WebSocket endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Display symbol used in logs and reports
    pub symbol: String,
    /// Pyth price feed identifier (hex, no 0x prefix)
    pub feed_id: String,
}

fn default_endpoint() -> String {
    "wss://hermes.pyth.network/ws".to_string()
}

/// Strategy configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StrategyConfig {
    /// Rolling window size for the moving average
    #[serde(default = "default_window_capacity")]
    pub window_capacity: usize,

    /// Minimum seconds between admitted samples
    #[serde(default = "default_min_sample_interval")]
    pub min_sample_interval_secs: i64,
}

fn default_window_capacity() -> usize {
    10
}
fn default_min_sample_interval() -> i64 {
    1
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            window_capacity: 10,
            min_sample_interval_secs: 1,
        }
    }
}

impl StrategyConfig {
    /// Reject values the pipeline cannot run with
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.window_capacity == 0 {
            anyhow::bail!("strategy.window_capacity must be at least 1");
        }
        Ok(())
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub metrics_port: u16,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.strategy.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            [feed]
            endpoint = "wss://hermes.pyth.network/ws"
            symbol = "SOL"
            feed_id = "ef0d8b6fda2ceba41da15d4095d1da392a0d2f8ed0c6c7bc0f4cfac8c280b56d"

            [strategy]
            window_capacity = 10
            min_sample_interval_secs = 1

            [telemetry]
            log_level = "info"
            metrics_port = 9090
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.feed.symbol, "SOL");
        assert_eq!(config.strategy.window_capacity, 10);
        assert_eq!(config.strategy.min_sample_interval_secs, 1);
        assert_eq!(config.telemetry.metrics_port, 9090);
    }

    #[test]
    fn test_strategy_defaults_when_section_missing() {
        let toml = r#"
            [feed]
            symbol = "SOL"
            feed_id = "ef0d8b6fda2ceba41da15d4095d1da392a0d2f8ed0c6c7bc0f4cfac8c280b56d"

            [telemetry]
            log_level = "debug"
            metrics_port = 9091
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.strategy.window_capacity, 10);
        assert_eq!(config.strategy.min_sample_interval_secs, 1);
        assert_eq!(config.feed.endpoint, "wss://hermes.pyth.network/ws");
    }

    #[test]
    fn test_strategy_overrides() {
        let toml = r#"
            window_capacity = 3
            min_sample_interval_secs = 5
        "#;

        let strategy: StrategyConfig = toml::from_str(toml).unwrap();
        assert_eq!(strategy.window_capacity, 3);
        assert_eq!(strategy.min_sample_interval_secs, 5);
    }

    #[test]
    fn test_zero_window_capacity_rejected() {
        let strategy = StrategyConfig {
            window_capacity: 0,
            min_sample_interval_secs: 1,
        };
        assert!(strategy.validate().is_err());
        assert!(StrategyConfig::default().validate().is_ok());
    }

    #[test]
    fn test_example_config_parses() {
        let config: Config = toml::from_str(include_str!("../config.toml.example")).unwrap();
        assert_eq!(config.feed.symbol, "SOL");
        assert_eq!(config.feed.feed_id.len(), 64);
    }

    #[test]
    fn test_config_load_nonexistent() {
        let result = Config::load("/nonexistent/path/config.toml");
        assert!(result.is_err());
    }
}
