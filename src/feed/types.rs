//! Price feed types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single decoded price update from the feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceUpdate {
    /// Display symbol (e.g. "SOL")
    pub symbol: String,
    /// Price scaled by the feed exponent
    pub price: Decimal,
    /// Feed publish time (unix seconds)
    pub publish_time: i64,
    /// Local timestamp when the update was received
    pub received_at: DateTime<Utc>,
}
