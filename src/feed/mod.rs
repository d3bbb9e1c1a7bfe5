//! Price feed module
//!
//! Delivers real-time price updates for one asset from the Pyth Hermes
//! WebSocket.

mod pyth;
mod types;

pub use pyth::PythFeed;
pub use types::PriceUpdate;

use async_trait::async_trait;
use tokio::sync::mpsc;

/// Trait for price feed implementations
#[async_trait]
pub trait PriceFeed: Send + Sync {
    /// Subscribe to price updates
    async fn subscribe(&self) -> anyhow::Result<mpsc::Receiver<PriceUpdate>>;
}
