//! Trading signal generation

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Trading signal derived from comparing price to the moving average
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Signal {
    /// Price below the moving average
    Buy,
    /// Price above the moving average
    Sell,
    /// Price exactly at the moving average
    Hold,
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Signal::Buy => write!(f, "BUY"),
            Signal::Sell => write!(f, "SELL"),
            Signal::Hold => write!(f, "HOLD"),
        }
    }
}

impl Signal {
    /// Lowercase label for metrics series
    pub fn label(&self) -> &'static str {
        match self {
            Signal::Buy => "buy",
            Signal::Sell => "sell",
            Signal::Hold => "hold",
        }
    }
}

/// Map a price and its moving average to a signal
///
/// SELL above the average, BUY below it, HOLD on exact equality.
/// `Decimal` comparison is exact, so equality is well-defined.
pub fn generate_signal(price: Decimal, average: Decimal) -> Signal {
    if price > average {
        Signal::Sell
    } else if price < average {
        Signal::Buy
    } else {
        Signal::Hold
    }
}
